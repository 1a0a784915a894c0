//! Domain models for pcshop
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Part`] - A purchasable component, tagged by [`Category`]
//! - [`Catalog`] - Every part, keyed by id
//! - [`Computer`] - A validated build sold as one cart line
//! - [`Customer`] - Budget, cart and running total
//! - [`Money`] - Currency in cents

mod catalog;
mod category;
mod computer;
mod customer;
mod money;
mod part;

pub use catalog::Catalog;
pub use category::Category;
pub use computer::{BuildRequest, Components, Computer};
pub use customer::{
    CartItem, CartLine, CartView, Customer, ItemKind, Receipt, Removal, RemovalPolicy,
};
pub use money::{Money, MoneyParseError};
pub use part::{Part, PartSpec};
