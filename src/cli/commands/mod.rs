//! Command implementations

mod budget;
mod build;
mod cart;
mod catalog;
mod compatibility;
mod help;

pub use budget::budget;
pub use build::build;
pub use cart::{cart, checkout, purchase, remove};
pub use catalog::{details, list};
pub use compatibility::{compatibility, compatibility_build};
pub use help::help;
