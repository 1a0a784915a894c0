//! Core domain logic for pcshop
//!
//! This module contains pure business logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Part, Catalog, Computer, Customer, Money)
//! - `services/` - Compatibility rules
//! - `ports/` - Trait definitions for catalog sources
//! - `error` - Load, build and cart errors

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::{BuildError, CartError, LoadError};
