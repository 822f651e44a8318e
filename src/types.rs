//! Core domain types shared across the schema, traversal and load layers.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Arena handles
// ---------------------------------------------------------------------------

/// Handle of a node type inside a [`Schema`](crate::graph::schema::Schema).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeTypeId(pub usize);

/// Handle of a relationship type inside a [`Schema`](crate::graph::schema::Schema).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelTypeId(pub usize);

impl std::fmt::Display for NodeTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

impl std::fmt::Display for RelTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rel#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Hop
// ---------------------------------------------------------------------------

/// One level of schema expansion produced by the traversal cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    /// Zero-based hop index.
    pub depth: u32,
    /// Distinct relationship type names reachable at this hop, sorted.
    pub types: Vec<String>,
}

// ---------------------------------------------------------------------------
// Depth
// ---------------------------------------------------------------------------

/// Convert a caller-facing depth (negative = unbounded) into a hop limit.
pub fn depth_limit(max_depth: i32) -> Option<u32> {
    u32::try_from(max_depth).ok()
}

// ---------------------------------------------------------------------------
// LoadStrategy
// ---------------------------------------------------------------------------

/// How related entities are pulled in when loading a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStrategy {
    /// Variable-length path of any relationship type.
    Path,
    /// One chained pattern per hop, restricted to the types the schema allows.
    #[default]
    Schema,
}

impl LoadStrategy {
    /// Parse from a loose string (case-insensitive, long forms accepted).
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "path" | "path_load_strategy" | "path-load-strategy" => Some(Self::Path),
            "schema" | "schema_load_strategy" | "schema-load-strategy" => Some(Self::Schema),
            _ => None,
        }
    }

    /// Canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Schema => "schema",
        }
    }
}

impl std::fmt::Display for LoadStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
