//! Domain error types
//!
//! Every failure the core can report to the shell. None of these are fatal.

use thiserror::Error;

use super::models::{Category, Money};

/// Reasons a computer cannot be built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// An id in the build request is not in the catalog
    #[error("{0} is not a valid part ID.")]
    UnknownPart(String),

    /// A slot was given a part of the wrong category
    #[error("{id} is a {found}, but the {slot} slot needs a {expected}.")]
    WrongCategory {
        /// Which slot of the build (e.g., "motherboard")
        slot: &'static str,
        /// The part that was supplied
        id: String,
        /// The category the slot requires
        expected: Category,
        /// The category of the supplied part
        found: Category,
    },

    /// More than one distinct RAM id in the build
    #[error("All instances of RAM must be the same id (found {}).", .ids.join(", "))]
    MixedRam {
        /// The distinct RAM ids, in build order
        ids: Vec<String>,
    },

    /// No RAM, or more RAM than the motherboard has slots for
    #[error(
        "The number of RAMs ({count}) must be at least 1 and cannot exceed the number of RAM slots ({slots})."
    )]
    RamCount {
        /// RAM modules in the build
        count: usize,
        /// Slots on the motherboard
        slots: u32,
    },

    /// Motherboard and CPU sockets differ
    #[error(
        "Motherboard and CPU must have the same socket type ({motherboard} has {motherboard_socket}, {cpu} has {cpu_socket})."
    )]
    SocketMismatch {
        /// Motherboard id
        motherboard: String,
        /// Motherboard socket
        motherboard_socket: String,
        /// CPU id
        cpu: String,
        /// CPU socket
        cpu_socket: String,
    },

    /// The PSU cannot power the build
    #[error(
        "The total power draw from all components, {draw}W, should be less than or equal to the power supplied by the PSU, {supplied}W."
    )]
    InsufficientPower {
        /// Total draw of the build in watts
        draw: u64,
        /// PSU output in watts
        supplied: u32,
    },

    /// The summed part prices do not fit in a `Money`
    #[error("The total price of {id} is too large.")]
    PriceOverflow {
        /// Computer id
        id: String,
    },
}

/// Errors from cart and checkout operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Purchase of an id that is not in the catalog
    #[error("Part not found: {0}")]
    PartNotFound(String),

    /// Removal of a known part or computer that is not in the cart
    #[error("{0} not in cart.")]
    NotInCart(String),

    /// Removal of an id that names nothing at all
    #[error("{0} is not a valid part ID.")]
    InvalidId(String),

    /// Adding the item would overflow the cart total
    #[error("Cannot add {0}, the cart total would be too large.")]
    TotalOverflow(String),

    /// Checkout with nothing in the cart
    #[error("Cannot checkout, your cart is empty.")]
    EmptyCart,

    /// Checkout with a total above the budget
    #[error("Cannot checkout, items in cart ({total}) are over the budget ({budget}).")]
    OverBudget {
        /// Cart total
        total: Money,
        /// Customer budget
        budget: Money,
    },
}

/// Errors from reading a catalog source
#[derive(Debug, Error)]
pub enum LoadError {
    /// The catalog file could not be read
    #[error("cannot read catalog {path}: {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid JSON or lacks a base field
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// An item lacks a field its category requires
    #[error("item {id} ({category}) is missing required field '{field}'")]
    MissingField {
        /// Item id
        id: String,
        /// Declared category
        category: Category,
        /// Missing field name
        field: &'static str,
    },

    /// A field holds a value outside its allowed range
    #[error("item {id} has invalid '{field}': {reason}")]
    InvalidField {
        /// Item id
        id: String,
        /// Field name
        field: &'static str,
        /// What is wrong with the value
        reason: String,
    },

    /// Two items share an id
    #[error("duplicate part id: {0}")]
    DuplicateId(String),

    /// An item declares a category the shop does not sell (strict mode only)
    #[error("item {id} has unknown type '{category}'")]
    UnknownCategory {
        /// Item id
        id: String,
        /// The declared type
        category: String,
    },
}
