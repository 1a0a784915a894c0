//! pcshop - A text-driven storefront for computer parts
//!
//! This library provides the part catalog, compatibility rules and the
//! cart/budget logic behind the `pcshop` shell:
//!
//! - [`core`] - Parts, computers, customers and the rules between them
//! - [`adapters`] - Catalog loading from JSON inventory files
//! - [`config`] - User configuration
//! - [`output`] - Human and JSON rendering

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
