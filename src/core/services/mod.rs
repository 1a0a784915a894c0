//! Business rules over the domain models
//!
//! - [`compatibility`] - Pairwise part checks and build validation

pub mod compatibility;

pub use compatibility::{PairCheck, check_pair, compatible, validate_build};
