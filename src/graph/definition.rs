//! Declarative schema documents (YAML or JSON) and their conversion into a
//! [`Schema`].
//!
//! ```yaml
//! nodes:
//!   - label: Person
//!     relationships:
//!       - { type: FRIEND_OF, target: Person }
//!       - { type: WORKS_AT, target: Company }
//!   - label: Company
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OgmError, Result};
use crate::graph::schema::Schema;

/// Root of a schema document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    #[serde(default)]
    pub nodes: Vec<NodeDefinition>,
}

/// One declared node type and the relationships starting at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDefinition {
    pub label: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<RelationshipDefinition>,
}

/// A relationship declaration, relative to its owning node type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipDefinition {
    #[serde(rename = "type")]
    pub rel_type: String,

    /// Label of the end node type.
    pub target: String,
}

impl SchemaDefinition {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a schema document, picking the format from the file extension
    /// (`.json` is JSON, anything else is YAML).
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&text),
            _ => Self::from_yaml_str(&text),
        }
    }
}

impl Schema {
    /// Build a schema from a definition.
    ///
    /// All labels are declared before any relationship, so declarations may
    /// reference labels that appear later in the document. A target label
    /// that is never declared fails with [`OgmError::MalformedSchema`].
    pub fn from_definition(def: &SchemaDefinition) -> Result<Self> {
        let mut builder = Schema::builder();
        for node in &def.nodes {
            builder.add_node(node.label.as_str())?;
        }
        for node in &def.nodes {
            for rel in &node.relationships {
                builder.relate(&node.label, rel.rel_type.as_str(), &rel.target).map_err(|_| {
                    OgmError::MalformedSchema(format!(
                        "{} -[{}]-> {}: target label is not declared",
                        node.label, rel.rel_type, rel.target
                    ))
                })?;
            }
        }
        let schema = builder.build();
        tracing::debug!(
            nodes = schema.node_count(),
            relationships = schema.relationship_count(),
            "built schema from definition"
        );
        Ok(schema)
    }

    /// Load and build a schema from a YAML or JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let def = SchemaDefinition::from_path(path)?;
        let schema = Self::from_definition(&def)?;
        tracing::info!(
            "Loaded schema from {} ({} node types, {} relationship types)",
            path.display(),
            schema.node_count(),
            schema.relationship_count()
        );
        Ok(schema)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
