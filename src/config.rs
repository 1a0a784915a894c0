//! Shop configuration
//!
//! Optional user preferences read from `~/.config/pcshop/config.toml` (or the
//! file named by `--config` / `PCSHOP_CONFIG`). Every section may be omitted.
//!
//! ```toml
//! [customer]
//! name = "Ada"
//! budget = 1500
//!
//! [catalog]
//! strict_categories = false
//!
//! [cart]
//! removal = "fail-fast"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{Money, RemovalPolicy};
use crate::paths;

/// Errors reading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists (or was named explicitly) but could not be read
    #[error("cannot read config {path}: {source}")]
    Io {
        /// Config path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config path
        path: PathBuf,
        /// TOML error
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Customer defaults (skip the startup prompts)
    #[serde(default)]
    pub customer: CustomerConfig,
    /// Catalog loading options
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Cart behaviour
    #[serde(default)]
    pub cart: CartConfig,
}

/// Customer defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerConfig {
    /// Customer name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Starting budget
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Money>,
}

/// Catalog loading options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Reject unknown item types instead of skipping them
    #[serde(default)]
    pub strict_categories: bool,
}

/// Cart behaviour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    /// How `remove` with several ids handles a failure
    #[serde(default)]
    pub removal: RemovalPolicy,
}

impl ShopConfig {
    /// Parse config from TOML text
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from an explicit file
    ///
    /// The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Resolve and load the config
    ///
    /// Order: `explicit`, then `PCSHOP_CONFIG`, then the global config file.
    /// A missing global file yields the defaults; a missing explicit or
    /// environment-named file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        if let Some(path) = paths::env_config() {
            return Self::load_from(&path);
        }

        let path = paths::global_config();
        if path.exists() {
            log::debug!("reading config from {}", path.display());
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }
}
