//! Catalog source port
//!
//! Defines the interface for loading the part catalog.

use super::super::error::LoadError;
use super::super::models::Catalog;

/// A place the catalog can be loaded from
///
/// Implementations handle reading and decoding (JSON files, fixtures in
/// tests, etc.). Loading happens once at startup; the returned catalog is
/// read-only afterwards.
pub trait CatalogSource {
    /// Load every part from this source
    fn load(&self) -> Result<Catalog, LoadError>;

    /// Human-readable description of where the catalog comes from
    fn describe(&self) -> String;
}
