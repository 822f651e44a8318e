//! Configuration loading.
//!
//! Config files are YAML unless they end in `.json`. A missing file is an
//! error; an absent `--config` flag means [`OgmConfig::default`].

pub mod schema;

use std::path::Path;

pub use schema::{LoadConfig, OgmConfig};

use crate::error::{OgmError, Result};

impl OgmConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| OgmError::Config(e.to_string()))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| OgmError::Config(e.to_string()))
    }

    /// Read a config file.
    ///
    /// A relative `schema_path` is resolved against the config file's
    /// directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut config = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&text)?,
            _ => Self::from_yaml_str(&text)?,
        };
        if let Some(dir) = path.parent() {
            config.schema_path = config.schema_path.map(|p| {
                if p.is_relative() {
                    dir.join(p)
                } else {
                    p
                }
            });
        }
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
