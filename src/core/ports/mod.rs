//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (the filesystem, mostly).
//!
//! Implementations live in the `adapters` module.

mod catalog_source;

pub use catalog_source::CatalogSource;
