//! In-memory schema graph of declared node types and relationship types.
//!
//! Node types and relationship types live in two arenas owned by [`Schema`]
//! and refer to each other through [`NodeTypeId`] / [`RelTypeId`] handles.
//! A relationship points at node types it does not own, and a node type is
//! shared by every relationship that starts or ends at it, so handles keep
//! the graph free of ownership cycles.

use std::collections::{BTreeMap, HashMap};

use crate::error::{OgmError, Result};
use crate::types::{NodeTypeId, RelTypeId};

// ---------------------------------------------------------------------------
// NodeType
// ---------------------------------------------------------------------------

/// A declared entity kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeType {
    id: NodeTypeId,
    label: String,
    /// Relationship type name → declarations starting at this node type.
    relationships: BTreeMap<String, Vec<RelTypeId>>,
}

impl NodeType {
    pub fn id(&self) -> NodeTypeId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Outgoing declarations grouped by relationship type name.
    ///
    /// Empty when the node type declares no relationships.
    pub fn relationships(&self) -> &BTreeMap<String, Vec<RelTypeId>> {
        &self.relationships
    }

    /// Every outgoing declaration, in type-name then declaration order.
    pub fn relationship_ids(&self) -> impl Iterator<Item = RelTypeId> + '_ {
        self.relationships.values().flatten().copied()
    }
}

// ---------------------------------------------------------------------------
// RelationshipType
// ---------------------------------------------------------------------------

/// A declared edge kind between two node types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipType {
    pub(crate) id: RelTypeId,
    pub(crate) rel_type: String,
    pub(crate) start: NodeTypeId,
    pub(crate) end: NodeTypeId,
}

impl RelationshipType {
    pub fn id(&self) -> RelTypeId {
        self.id
    }

    /// Type name, used verbatim in generated patterns.
    pub fn rel_type(&self) -> &str {
        &self.rel_type
    }

    pub fn start(&self) -> NodeTypeId {
        self.start
    }

    pub fn end(&self) -> NodeTypeId {
        self.end
    }

    /// The endpoint opposite to `node`, or `None` if `node` is not an endpoint.
    pub fn other(&self, node: NodeTypeId) -> Option<NodeTypeId> {
        if node == self.start {
            Some(self.end)
        } else if node == self.end {
            Some(self.start)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Read-only mapping from label to node type, plus the relationship arena.
///
/// `Schema` is `Send + Sync`; share it behind an `Arc` to generate clauses
/// from several threads at once.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    pub(crate) nodes: Vec<NodeType>,
    pub(crate) relationships: Vec<RelationshipType>,
    pub(crate) by_label: HashMap<String, NodeTypeId>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Look up the node type declared for `label`.
    pub fn find_node(&self, label: &str) -> Result<&NodeType> {
        let id = self
            .by_label
            .get(label)
            .copied()
            .ok_or_else(|| OgmError::UnknownLabel(label.to_string()))?;
        self.node(id)
    }

    /// Resolve a node type handle.
    pub fn node(&self, id: NodeTypeId) -> Result<&NodeType> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| OgmError::MalformedSchema(format!("{id} is not declared")))
    }

    /// Resolve a relationship type handle.
    pub fn relationship(&self, id: RelTypeId) -> Result<&RelationshipType> {
        self.relationships
            .get(id.0)
            .ok_or_else(|| OgmError::MalformedSchema(format!("{id} is not declared")))
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.by_label.contains_key(label)
    }

    /// All declared labels, sorted.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.nodes.iter().map(|n| n.label.as_str()).collect();
        labels.sort_unstable();
        labels
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }
}

// ---------------------------------------------------------------------------
// SchemaBuilder
// ---------------------------------------------------------------------------

/// Incremental construction of a [`Schema`].
///
/// Handles returned by the builder are only valid for the schema it builds.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    schema: Schema,
}

impl SchemaBuilder {
    /// Declare a node type. Labels must be unique.
    pub fn add_node(&mut self, label: impl Into<String>) -> Result<NodeTypeId> {
        let label = label.into();
        if self.schema.by_label.contains_key(&label) {
            return Err(OgmError::DuplicateLabel(label));
        }
        let id = NodeTypeId(self.schema.nodes.len());
        self.schema.by_label.insert(label.clone(), id);
        self.schema.nodes.push(NodeType {
            id,
            label,
            relationships: BTreeMap::new(),
        });
        Ok(id)
    }

    /// Handle of an already declared label.
    pub fn node_id(&self, label: &str) -> Option<NodeTypeId> {
        self.schema.by_label.get(label).copied()
    }

    /// Declare a relationship type from `start` to `end`.
    pub fn add_relationship(
        &mut self,
        start: NodeTypeId,
        rel_type: impl Into<String>,
        end: NodeTypeId,
    ) -> Result<RelTypeId> {
        self.schema.node(end)?;
        let id = RelTypeId(self.schema.relationships.len());
        let rel_type = rel_type.into();
        let start_node = self
            .schema
            .nodes
            .get_mut(start.0)
            .ok_or_else(|| OgmError::MalformedSchema(format!("{start} is not declared")))?;
        start_node
            .relationships
            .entry(rel_type.clone())
            .or_default()
            .push(id);
        self.schema.relationships.push(RelationshipType {
            id,
            rel_type,
            start,
            end,
        });
        Ok(id)
    }

    /// Declare a relationship type between two already declared labels.
    pub fn relate(
        &mut self,
        start: &str,
        rel_type: impl Into<String>,
        end: &str,
    ) -> Result<RelTypeId> {
        let start_id = self.node_id(start).ok_or_else(|| {
            OgmError::MalformedSchema(format!("relationship from undeclared label {start}"))
        })?;
        let end_id = self.node_id(end).ok_or_else(|| {
            OgmError::MalformedSchema(format!("relationship to undeclared label {end}"))
        })?;
        self.add_relationship(start_id, rel_type, end_id)
    }

    pub fn build(self) -> Schema {
        self.schema
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
