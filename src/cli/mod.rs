//! CLI layer for pcshop
//!
//! This module contains the command-line interface:
//!
//! - [`app`] - CLI definitions and entry point
//! - [`shell`] - The interactive command loop
//! - [`prompt`] - Prompting for input
//! - [`commands`] - Command implementations

pub mod app;
pub mod commands;
pub mod prompt;
pub mod shell;

// Re-export main entry point
pub use app::run;
