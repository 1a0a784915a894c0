//! JSON-based catalog source
//!
//! Implements `CatalogSource` for inventory files.
//!
//! - [`loader`] - Read and convert inventory JSON into a `Catalog`

pub mod loader;

pub use loader::{JsonCatalogFile, LoadOptions, load_file, parse_str};
