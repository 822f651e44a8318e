//! Configuration data structures for cypher-ogm.
//!
//! Defines the YAML config format: schema location and load defaults.
//! Every field has a default so partial documents are valid.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::LoadStrategy;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Root configuration.
///
/// Loaded from a YAML or JSON file; CLI flags override individual fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OgmConfig {
    /// Config format version (currently "1.0").
    #[serde(default = "default_version")]
    pub version: String,

    /// Schema document to load node and relationship types from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_path: Option<PathBuf>,

    /// Defaults applied when loading entities.
    #[serde(default)]
    pub load: LoadConfig,
}

impl Default for OgmConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            schema_path: None,
            load: LoadConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// LoadConfig
// ---------------------------------------------------------------------------

/// How entities and their neighbours are loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Which load clause builder to use.
    #[serde(default)]
    pub strategy: LoadStrategy,

    /// Depth used when the caller does not pass one. Negative means unbounded.
    #[serde(default = "default_depth")]
    pub default_depth: i32,

    /// Root variable name in generated statements.
    #[serde(default = "default_variable")]
    pub variable: String,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            strategy: LoadStrategy::default(),
            default_depth: default_depth(),
            variable: default_variable(),
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_version() -> String {
    "1.0".to_string()
}

fn default_depth() -> i32 {
    1
}

fn default_variable() -> String {
    "n".to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
