use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use cypher_ogm::config::OgmConfig;
use cypher_ogm::graph::Schema;
use cypher_ogm::load::{load_clause_builder, NodeQueryStatements};
use cypher_ogm::observability::init_logging;
use cypher_ogm::types::LoadStrategy;
use cypher_ogm::{OgmError, Result};

#[derive(Parser)]
#[command(name = "cypher-ogm", version, arg_required_else_help = true)]
struct Cli {
    /// Config file (YAML, or JSON with a .json extension)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the load clause for a label
    Load(LoadArgs),
    /// Print a find-by-id statement and its parameters as JSON
    FindOne(FindOneArgs),
    /// List the labels declared in a schema
    Labels(SchemaArgs),
}

#[derive(Args)]
struct SchemaArgs {
    /// Schema document; overrides `schema_path` from the config
    #[arg(long)]
    schema: Option<PathBuf>,
}

#[derive(Args)]
struct LoadOptions {
    #[command(flatten)]
    schema: SchemaArgs,

    /// Root label
    #[arg(long)]
    label: String,

    /// Traversal depth; negative means unbounded
    #[arg(long, allow_negative_numbers = true)]
    depth: Option<i32>,

    /// Load strategy: schema or path
    #[arg(long, value_parser = parse_strategy)]
    strategy: Option<LoadStrategy>,

    /// Root variable name
    #[arg(long)]
    variable: Option<String>,
}

#[derive(Args)]
struct LoadArgs {
    #[command(flatten)]
    options: LoadOptions,
}

#[derive(Args)]
struct FindOneArgs {
    #[command(flatten)]
    options: LoadOptions,

    /// Node id
    #[arg(long)]
    id: i64,
}

fn parse_strategy(s: &str) -> std::result::Result<LoadStrategy, String> {
    LoadStrategy::from_str_loose(s).ok_or_else(|| format!("unknown load strategy: {s}"))
}

fn resolve_schema(args: &SchemaArgs, config: &OgmConfig) -> Result<Arc<Schema>> {
    let path: &Path = args
        .schema
        .as_deref()
        .or(config.schema_path.as_deref())
        .ok_or_else(|| OgmError::Config("no schema given (--schema or schema_path)".into()))?;
    Ok(Arc::new(Schema::load(path)?))
}

struct Resolved {
    schema: Arc<Schema>,
    strategy: LoadStrategy,
    depth: i32,
    variable: String,
}

fn resolve(options: &LoadOptions, config: &OgmConfig) -> Result<Resolved> {
    Ok(Resolved {
        schema: resolve_schema(&options.schema, config)?,
        strategy: options.strategy.unwrap_or(config.load.strategy),
        depth: options.depth.unwrap_or(config.load.default_depth),
        variable: options
            .variable
            .clone()
            .unwrap_or_else(|| config.load.variable.clone()),
    })
}

fn run(cli: Cli) -> Result<()> {
    let config = OgmConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Load(args) => {
            let r = resolve(&args.options, &config)?;
            let builder = load_clause_builder(r.strategy, r.schema);
            println!("{}", builder.build(&r.variable, &args.options.label, r.depth)?);
        }
        Commands::FindOne(args) => {
            let r = resolve(&args.options, &config)?;
            let statements = NodeQueryStatements::new(load_clause_builder(r.strategy, r.schema))
                .with_variable(r.variable);
            let query = statements.find_one(&args.options.label, args.id, r.depth)?;
            println!("{}", serde_json::to_string_pretty(&query)?);
        }
        Commands::Labels(args) => {
            let schema = resolve_schema(&args, &config)?;
            for label in schema.labels() {
                println!("{label}");
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
