//! Load layer: turns a root label and depth into the Cypher that fetches an
//! entity together with its related entities.
//!
//! - [`assembler`]: chains per-hop pattern segments and the projection
//! - [`schema_builder`]: schema-driven strategy (default)
//! - [`path_builder`]: variable-length path strategy
//! - [`statements`]: complete lookup statements with parameters

pub mod assembler;
pub mod path_builder;
pub mod schema_builder;
pub mod statements;

use std::sync::Arc;

use crate::error::Result;
use crate::graph::schema::Schema;
use crate::types::LoadStrategy;

pub use assembler::ClauseAssembler;
pub use path_builder::PathNodeLoadClauseBuilder;
pub use schema_builder::SchemaNodeLoadClauseBuilder;
pub use statements::{CypherQuery, NodeQueryStatements};

/// Produces the load fragment appended after a node has been matched.
pub trait LoadClauseBuilder: Send + Sync {
    /// Build the fragment for root `variable` of type `label`.
    ///
    /// A negative `max_depth` means unbounded.
    fn build(&self, variable: &str, label: &str, max_depth: i32) -> Result<String>;
}

/// The builder for a configured strategy.
pub fn load_clause_builder(
    strategy: LoadStrategy,
    schema: Arc<Schema>,
) -> Box<dyn LoadClauseBuilder> {
    match strategy {
        LoadStrategy::Schema => Box::new(SchemaNodeLoadClauseBuilder::new(schema)),
        LoadStrategy::Path => Box::new(PathNodeLoadClauseBuilder::with_schema(schema)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Arc<Schema> {
        let mut b = Schema::builder();
        b.add_node("Person").unwrap();
        b.relate("Person", "KNOWS", "Person").unwrap();
        Arc::new(b.build())
    }

    #[test]
    fn strategy_selects_builder() {
        let schema_clause = load_clause_builder(LoadStrategy::Schema, schema())
            .build("n", "Person", 2)
            .unwrap();
        assert_eq!(schema_clause, "MATCH p0=(n)-[:`KNOWS`*0..]-(n1) RETURN p0");

        let path_clause = load_clause_builder(LoadStrategy::Path, schema())
            .build("n", "Person", 2)
            .unwrap();
        assert_eq!(path_clause, "MATCH p=(n)-[*0..2]-(m) RETURN p, ID(n)");
    }

    #[test]
    fn both_strategies_reject_unknown_labels() {
        for strategy in [LoadStrategy::Schema, LoadStrategy::Path] {
            let builder = load_clause_builder(strategy, schema());
            assert!(builder.build("n", "Nope", 1).is_err(), "{strategy}");
        }
    }
}
