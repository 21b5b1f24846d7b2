//! Configuration file loading for the engine-lens host.
//!
//! The config names the fields engine snapshots are read through, so dumps
//! from engines with different struct layouts can be rendered without code
//! changes.

use lens_host::SnapshotLayout;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The configuration file is not valid TOML for [`LensConfig`].
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Top-level configuration.
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct LensConfig {
    /// Snapshot field names. Unset names keep their defaults.
    #[serde(default)]
    pub layout: SnapshotLayout,
}

impl LensConfig {
    /// Loads configuration from `path`, or from [`Self::default_path()`]
    /// when no path is given.
    ///
    /// A missing default file yields the default configuration. A missing
    /// explicit file is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read,
    /// or [`ConfigError::ParseError`] if it contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };
        if !required && !path.exists() {
            tracing::debug!("no {} found, using default layout", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;
        let config = Self::parse(&content)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns `lens.toml` in the current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("lens.toml")
    }
}
