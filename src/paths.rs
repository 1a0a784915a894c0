//! Centralized path definitions for pcshop
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.config/pcshop/
//! └── config.toml               # Customer defaults, catalog and cart options
//! ```
//!
//! The `PCSHOP_CONFIG` environment variable overrides the config file location.

use std::path::PathBuf;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "PCSHOP_CONFIG";

/// Global config directory, relative to the home directory
const GLOBAL_DIR: &str = ".config/pcshop";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global pcshop directory.
///
/// Returns `~/.config/pcshop/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.config/pcshop/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Config file named by `PCSHOP_CONFIG`, if set and non-empty
#[must_use]
pub fn env_config() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from)
}
