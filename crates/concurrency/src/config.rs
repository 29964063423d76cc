//! Memoizer configuration
//!
//! A `MemoConfig` picks the locking strategy and the initial cache capacity.
//! It can be built in code or loaded from TOML:
//!
//! ```toml
//! # Locking strategy: "global_lock" (default) or "per_key"
//! strategy = "per_key"
//! initial_capacity = 1024
//! ```

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// How a memoizer serializes access to its cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoStrategy {
    /// One lock for the whole cache, held across the delegate call.
    ///
    /// Every call is serialized, hits for unrelated keys included. A slow
    /// delegate stalls all callers of the same memoizer.
    #[default]
    GlobalLock,

    /// One slot per key.
    ///
    /// Callers asking for the same key wait for the single computation;
    /// distinct keys compute concurrently.
    PerKey,
}

/// Memoizer settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoConfig {
    /// Locking strategy
    #[serde(default)]
    pub strategy: MemoStrategy,
    /// Entries to reserve room for up front
    #[serde(default)]
    pub initial_capacity: usize,
}

/// Errors from loading or saving a [`MemoConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read or written
    #[error("I/O error on config file '{}': {source}", .path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The TOML text is not a valid config
    #[error("Invalid memoizer config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be rendered as TOML
    #[error("Failed to serialize memoizer config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type alias for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

impl MemoConfig {
    /// Single lock across the whole cache
    pub fn global_lock() -> Self {
        MemoConfig {
            strategy: MemoStrategy::GlobalLock,
            ..MemoConfig::default()
        }
    }

    /// Independent slot per key
    pub fn per_key() -> Self {
        MemoConfig {
            strategy: MemoStrategy::PerKey,
            ..MemoConfig::default()
        }
    }

    /// Reserve room for `capacity` entries
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Memoizer configuration
#
# Locking strategy: "global_lock" (default) or "per_key"
#   "global_lock" = one lock for the whole cache, every call is serialized
#   "per_key"     = one slot per key, distinct keys compute concurrently
strategy = "global_lock"

# Number of entries to reserve up front (default: 0).
# The cache is unbounded either way; entries are never evicted.
initial_capacity = 0
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or names an unknown
    /// strategy.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Render this config as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
