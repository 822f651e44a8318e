//! Complete node lookup statements: a match prefix followed by a load clause.
//!
//! The statement text and its parameters are handed as-is to whatever
//! executes Cypher; nothing here talks to a database.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::load::LoadClauseBuilder;

/// A statement plus its named parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CypherQuery {
    pub statement: String,
    pub parameters: Map<String, Value>,
}

impl CypherQuery {
    fn new(statement: String) -> Self {
        Self {
            statement,
            parameters: Map::new(),
        }
    }

    fn with_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }
}

/// Lookup statements for nodes, loading related entities through a
/// [`LoadClauseBuilder`].
pub struct NodeQueryStatements {
    builder: Box<dyn LoadClauseBuilder>,
    variable: String,
}

impl NodeQueryStatements {
    pub fn new(builder: Box<dyn LoadClauseBuilder>) -> Self {
        Self {
            builder,
            variable: "n".to_string(),
        }
    }

    /// Use `variable` instead of `n` for the root node.
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// `MATCH (n) WHERE ID(n) = $id WITH n <load>`
    pub fn find_one(&self, label: &str, id: i64, depth: i32) -> Result<CypherQuery> {
        let v = &self.variable;
        let prefix = format!("MATCH ({v}) WHERE ID({v}) = $id WITH {v}");
        Ok(self.compose(prefix, label, depth)?.with_parameter("id", id))
    }

    /// Like [`find_one`](Self::find_one) but also restricted by label.
    pub fn find_one_by_type(&self, label: &str, id: i64, depth: i32) -> Result<CypherQuery> {
        let v = &self.variable;
        let prefix = format!("MATCH ({v}:`{label}`) WHERE ID({v}) = $id WITH {v}");
        Ok(self.compose(prefix, label, depth)?.with_parameter("id", id))
    }

    /// `MATCH (n) WHERE ID(n) IN $ids WITH n <load>`
    pub fn find_all(&self, label: &str, ids: &[i64], depth: i32) -> Result<CypherQuery> {
        let v = &self.variable;
        let prefix = format!("MATCH ({v}) WHERE ID({v}) IN $ids WITH {v}");
        Ok(self
            .compose(prefix, label, depth)?
            .with_parameter("ids", ids.to_vec()))
    }

    /// Every node carrying `label`.
    pub fn find_by_type(&self, label: &str, depth: i32) -> Result<CypherQuery> {
        let v = &self.variable;
        let prefix = format!("MATCH ({v}:`{label}`) WITH {v}");
        self.compose(prefix, label, depth)
    }

    /// Nodes carrying `label` whose `property` equals `value`.
    pub fn find_by_property(
        &self,
        label: &str,
        property: &str,
        value: Value,
        depth: i32,
    ) -> Result<CypherQuery> {
        let v = &self.variable;
        let prefix =
            format!("MATCH ({v}:`{label}`) WHERE {v}.`{property}` = $`{property}` WITH {v}");
        Ok(self
            .compose(prefix, label, depth)?
            .with_parameter(property, value))
    }

    fn compose(&self, prefix: String, label: &str, depth: i32) -> Result<CypherQuery> {
        let load = self.builder.build(&self.variable, label, depth)?;
        Ok(CypherQuery::new(format!("{prefix} {load}")))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
