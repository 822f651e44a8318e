//! Schema-agnostic load clause: one variable-length path of any type.

use std::sync::Arc;

use crate::error::{OgmError, Result};
use crate::graph::schema::Schema;
use crate::load::LoadClauseBuilder;

/// Builds `MATCH p=(n)-[*0..d]-(m)` load clauses.
///
/// Without a schema any label is accepted. With one, unknown labels fail the
/// same way they do for the schema strategy.
#[derive(Debug, Clone, Default)]
pub struct PathNodeLoadClauseBuilder {
    schema: Option<Arc<Schema>>,
}

impl PathNodeLoadClauseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(schema: Arc<Schema>) -> Self {
        Self {
            schema: Some(schema),
        }
    }
}

impl LoadClauseBuilder for PathNodeLoadClauseBuilder {
    fn build(&self, variable: &str, label: &str, max_depth: i32) -> Result<String> {
        if let Some(schema) = &self.schema {
            if !schema.contains_label(label) {
                return Err(OgmError::UnknownLabel(label.to_string()));
            }
        }
        let clause = match max_depth {
            0 => format!("RETURN {variable}"),
            d if d < 0 => format!("MATCH p=({variable})-[*0..]-(m) RETURN p, ID({variable})"),
            d => format!("MATCH p=({variable})-[*0..{d}]-(m) RETURN p, ID({variable})"),
        };
        tracing::debug!(label, max_depth, %clause, "built path load clause");
        Ok(clause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, "RETURN n" ; "depth zero")]
    #[test_case(1, "MATCH p=(n)-[*0..1]-(m) RETURN p, ID(n)" ; "depth one")]
    #[test_case(4, "MATCH p=(n)-[*0..4]-(m) RETURN p, ID(n)" ; "depth four")]
    #[test_case(-1, "MATCH p=(n)-[*0..]-(m) RETURN p, ID(n)" ; "unbounded")]
    fn path_clause_by_depth(depth: i32, expected: &str) {
        let builder = PathNodeLoadClauseBuilder::new();
        assert_eq!(builder.build("n", "Anything", depth).unwrap(), expected);
    }

    #[test]
    fn schema_aware_builder_rejects_unknown_label() {
        let mut b = Schema::builder();
        b.add_node("Person").unwrap();
        let builder = PathNodeLoadClauseBuilder::with_schema(Arc::new(b.build()));
        assert!(builder.build("n", "Person", 1).is_ok());
        assert!(matches!(
            builder.build("n", "Robot", 1),
            Err(OgmError::UnknownLabel(_))
        ));
    }
}
