//! Schema-driven load clause: one chained pattern segment per schema hop.

use std::sync::Arc;

use crate::error::Result;
use crate::graph::schema::Schema;
use crate::graph::traversal::TypeReachabilityCursor;
use crate::load::assembler::ClauseAssembler;
use crate::load::LoadClauseBuilder;

/// Builds load clauses that only follow relationship types the schema
/// declares as reachable at each hop.
#[derive(Debug, Clone)]
pub struct SchemaNodeLoadClauseBuilder {
    schema: Arc<Schema>,
}

impl SchemaNodeLoadClauseBuilder {
    pub fn new(schema: Arc<Schema>) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

impl LoadClauseBuilder for SchemaNodeLoadClauseBuilder {
    fn build(&self, variable: &str, label: &str, max_depth: i32) -> Result<String> {
        let root = self.schema.find_node(label)?;
        let mut assembler = ClauseAssembler::new(variable);
        for hop in TypeReachabilityCursor::new(&self.schema, root, max_depth) {
            assembler.push_hop(&hop?);
        }
        let clause = assembler.finish();
        tracing::debug!(label, max_depth, %clause, "built schema load clause");
        Ok(clause)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
