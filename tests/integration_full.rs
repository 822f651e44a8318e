//! End-to-end tests: schema and config files on disk, through the public API.

use std::path::PathBuf;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use cypher_ogm::config::OgmConfig;
use cypher_ogm::graph::Schema;
use cypher_ogm::load::{
    load_clause_builder, LoadClauseBuilder, NodeQueryStatements, SchemaNodeLoadClauseBuilder,
};
use cypher_ogm::types::LoadStrategy;
use cypher_ogm::OgmError;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const SOCIAL_SCHEMA: &str = r#"
nodes:
  - label: Person
    relationships:
      - { type: WORKS_AT, target: Company }
      - { type: FRIEND_OF, target: Person }
      - { type: LIVES_IN, target: City }
  - label: Company
    relationships:
      - { type: LOCATED_IN, target: City }
      - { type: SUBSIDIARY_OF, target: Company }
  - label: City
    relationships:
      - { type: PART_OF, target: Country }
  - label: Country
"#;

/// Write files into a temp directory and return it with their paths.
fn write_files(files: &[(&str, &str)]) -> (TempDir, Vec<PathBuf>) {
    let dir = TempDir::new().unwrap();
    let paths = files
        .iter()
        .map(|(name, content)| {
            let path = dir.path().join(name);
            std::fs::write(&path, content).unwrap();
            path
        })
        .collect();
    (dir, paths)
}

fn social() -> (TempDir, Arc<Schema>) {
    let (dir, paths) = write_files(&[("schema.yaml", SOCIAL_SCHEMA)]);
    let schema = Schema::load(&paths[0]).unwrap();
    (dir, Arc::new(schema))
}

// ===========================================================================
// 1. Schema strategy over a file-backed schema
// ===========================================================================

#[test]
fn person_unbounded_walks_to_country() {
    let (_dir, schema) = social();
    let builder = SchemaNodeLoadClauseBuilder::new(schema);
    assert_eq!(
        builder.build("n", "Person", -1).unwrap(),
        "MATCH p0=(n)-[:`FRIEND_OF`|:`LIVES_IN`|:`WORKS_AT`*0..]-(n1) \
         MATCH p1=(n1)-[:`LOCATED_IN`|:`PART_OF`|:`SUBSIDIARY_OF`*0..]-(n2) \
         RETURN p0,p1"
    );
}

#[test]
fn company_hops_through_city() {
    let (_dir, schema) = social();
    let builder = SchemaNodeLoadClauseBuilder::new(schema);
    assert_eq!(
        builder.build("c", "Company", -1).unwrap(),
        "MATCH p0=(c)-[:`LOCATED_IN`|:`SUBSIDIARY_OF`*0..]-(c1) \
         MATCH p1=(c1)-[:`PART_OF`*0..]-(c2) \
         RETURN p0,p1"
    );
}

#[test]
fn depth_one_stops_after_first_hop() {
    let (_dir, schema) = social();
    let builder = SchemaNodeLoadClauseBuilder::new(schema);
    assert_eq!(
        builder.build("n", "Person", 1).unwrap(),
        "MATCH p0=(n)-[:`FRIEND_OF`|:`LIVES_IN`|:`WORKS_AT`*0..]-(n1) RETURN p0"
    );
}

#[test]
fn leaf_label_returns_variable() {
    let (_dir, schema) = social();
    let builder = SchemaNodeLoadClauseBuilder::new(schema);
    assert_eq!(builder.build("n", "Country", -1).unwrap(), "RETURN n");
}

#[test]
fn unknown_label_from_file_schema() {
    let (_dir, schema) = social();
    let builder = SchemaNodeLoadClauseBuilder::new(schema);
    assert!(matches!(
        builder.build("n", "Planet", 2),
        Err(OgmError::UnknownLabel(_))
    ));
}

// ===========================================================================
// 2. Config-driven strategy selection
// ===========================================================================

#[test]
fn config_selects_schema_and_strategy() {
    let (_dir, paths) = write_files(&[
        ("schema.yaml", SOCIAL_SCHEMA),
        (
            "ogm.yaml",
            "schema_path: schema.yaml\nload:\n  strategy: path\n  default_depth: 2\n",
        ),
    ]);
    let config = OgmConfig::load(&paths[1]).unwrap();
    let schema_path = config.schema_path.clone().unwrap();
    let schema = Arc::new(Schema::load(&schema_path).unwrap());

    let builder = load_clause_builder(config.load.strategy, schema.clone());
    assert_eq!(
        builder
            .build(&config.load.variable, "City", config.load.default_depth)
            .unwrap(),
        "MATCH p=(n)-[*0..2]-(m) RETURN p, ID(n)"
    );

    let schema_builder = load_clause_builder(LoadStrategy::Schema, schema);
    assert_eq!(
        schema_builder.build("n", "City", 2).unwrap(),
        "MATCH p0=(n)-[:`PART_OF`*0..]-(n1) RETURN p0"
    );
}

#[test]
fn malformed_schema_file_fails_to_load() {
    let (_dir, paths) = write_files(&[(
        "bad.yaml",
        "nodes:\n  - label: A\n    relationships:\n      - { type: R, target: Missing }\n",
    )]);
    assert!(matches!(
        Schema::load(&paths[0]),
        Err(OgmError::MalformedSchema(_))
    ));
}

// ===========================================================================
// 3. Statements
// ===========================================================================

#[test]
fn find_one_over_json_schema() {
    let json = r#"{
        "nodes": [
            { "label": "Movie", "relationships": [ { "type": "DIRECTED_BY", "target": "Person" } ] },
            { "label": "Person", "relationships": [ { "type": "ACTED_IN", "target": "Movie" } ] }
        ]
    }"#;
    let (_dir, paths) = write_files(&[("schema.json", json)]);
    let schema = Arc::new(Schema::load(&paths[0]).unwrap());
    let statements = NodeQueryStatements::new(load_clause_builder(LoadStrategy::Schema, schema));

    let q = statements.find_one("Movie", 11, -1).unwrap();
    assert_eq!(
        q.statement,
        "MATCH (n) WHERE ID(n) = $id WITH n \
         MATCH p0=(n)-[:`DIRECTED_BY`*0..]-(n1) \
         MATCH p1=(n1)-[:`ACTED_IN`*0..]-(n2) \
         RETURN p0,p1"
    );
    assert_eq!(q.parameters["id"], serde_json::json!(11));
}

#[test]
fn shared_schema_across_threads() {
    let (_dir, schema) = social();
    let builder: Arc<dyn LoadClauseBuilder> = Arc::new(SchemaNodeLoadClauseBuilder::new(schema));
    let expected = builder.build("n", "Person", -1).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let b = Arc::clone(&builder);
            std::thread::spawn(move || b.build("n", "Person", -1).unwrap())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
