//! Error types for cypher-ogm.

use thiserror::Error;

/// Every failure the crate can report.
///
/// Generation is pure, so none of these are retryable: the same inputs
/// against the same schema always fail the same way.
#[derive(Debug, Error)]
pub enum OgmError {
    /// The requested root label has no node type in the schema.
    #[error("unknown label: {0}")]
    UnknownLabel(String),

    /// A relationship references a node type the schema does not hold.
    #[error("malformed schema: {0}")]
    MalformedSchema(String),

    /// The same label was declared twice while building a schema.
    #[error("duplicate label: {0}")]
    DuplicateLabel(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A schema or config document could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for OgmError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<serde_json::Error> for OgmError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OgmError>;
