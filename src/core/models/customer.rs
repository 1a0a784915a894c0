//! Customer model
//!
//! A customer has a budget and a cart. The cart holds references to catalog
//! parts and owns the computers built during the session. The running total
//! always equals the sum of the cart's item prices; it is adjusted on every
//! add and remove rather than recomputed.

use serde::{Deserialize, Serialize};

use super::{Catalog, Computer, Money, Part};
use crate::core::error::CartError;

/// One line of the cart
#[derive(Debug, Clone)]
pub enum CartItem<'c> {
    /// A single catalog part
    Part(&'c Part),
    /// A computer built in this session
    Computer(Computer<'c>),
}

impl CartItem<'_> {
    /// Part or computer id
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Part(part) => &part.id,
            Self::Computer(computer) => computer.id(),
        }
    }

    /// Price of this line
    #[must_use]
    pub const fn price(&self) -> Money {
        match self {
            Self::Part(part) => part.price,
            Self::Computer(computer) => computer.total_price(),
        }
    }

    /// Kind of line, for receipts and JSON output
    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        match self {
            Self::Part(_) => ItemKind::Part,
            Self::Computer(_) => ItemKind::Computer,
        }
    }

    /// Owned summary of this line
    #[must_use]
    pub fn line(&self) -> CartLine {
        CartLine {
            id: self.id().to_string(),
            kind: self.kind(),
            price: self.price(),
        }
    }
}

impl std::fmt::Display for CartItem<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Whether a cart line is a part or a computer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A single part
    Part,
    /// An assembled computer
    Computer,
}

/// Owned summary of a cart line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    /// Part or computer id
    pub id: String,
    /// Part or computer
    pub kind: ItemKind,
    /// Line price
    pub price: Money,
}

/// Record of a completed checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    /// Customer name
    pub customer: String,
    /// Purchased lines, in cart order
    pub items: Vec<CartLine>,
    /// Amount charged
    pub total: Money,
    /// Budget left after the charge
    pub remaining_budget: Money,
    /// When the order was placed (RFC3339)
    pub placed_at: String,
}

/// Snapshot of a cart for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    /// Customer name
    pub customer: String,
    /// Lines in cart order
    pub items: Vec<CartLine>,
    /// Running total
    pub total: Money,
    /// Current budget
    pub budget: Money,
}

/// How a multi-id removal treats a failing id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum RemovalPolicy {
    /// Stop at the first failure; earlier removals stand
    #[default]
    FailFast,
    /// Remove every id or none of them
    AllOrNothing,
}

impl std::fmt::Display for RemovalPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FailFast => write!(f, "fail-fast"),
            Self::AllOrNothing => write!(f, "all-or-nothing"),
        }
    }
}

impl std::str::FromStr for RemovalPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "fail-fast" | "failfast" => Ok(Self::FailFast),
            "all-or-nothing" | "atomic" => Ok(Self::AllOrNothing),
            _ => Err(format!("Invalid removal policy: {s}. Use: fail-fast, all-or-nothing")),
        }
    }
}

impl TryFrom<String> for RemovalPolicy {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Result of removing several ids in one call
#[derive(Debug, Clone)]
pub struct Removal<'c> {
    /// Items taken out of the cart, in the order processed
    pub removed: Vec<CartItem<'c>>,
    /// The error that stopped processing, if any
    pub failure: Option<CartError>,
}

/// A shopper with a budget and a cart
#[derive(Debug, Clone)]
pub struct Customer<'c> {
    name: String,
    budget: Money,
    cart: Vec<CartItem<'c>>,
    total: Money,
}

impl<'c> Customer<'c> {
    /// Create a customer with an empty cart
    #[must_use]
    pub fn new(name: impl Into<String>, budget: Money) -> Self {
        Self {
            name: name.into(),
            budget,
            cart: Vec::new(),
            total: Money::ZERO,
        }
    }

    /// Customer name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current budget
    #[must_use]
    pub const fn budget(&self) -> Money {
        self.budget
    }

    /// Running cart total
    #[must_use]
    pub const fn total(&self) -> Money {
        self.total
    }

    /// Cart lines in insertion order
    #[must_use]
    pub fn cart(&self) -> &[CartItem<'c>] {
        &self.cart
    }

    /// Whether the cart is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Owned snapshot of the cart for display
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        CartView {
            customer: self.name.clone(),
            items: self.cart.iter().map(CartItem::line).collect(),
            total: self.total,
            budget: self.budget,
        }
    }

    /// Overwrite the budget
    ///
    /// Negative amounts are accepted as-is.
    pub fn set_budget(&mut self, amount: Money) {
        log::debug!("budget for {} set to {}", self.name, amount);
        self.budget = amount;
    }

    /// Add a catalog part to the cart
    pub fn add_part(&mut self, catalog: &'c Catalog, part_id: &str) -> Result<&'c Part, CartError> {
        let part = catalog.get(part_id).ok_or_else(|| CartError::PartNotFound(part_id.to_string()))?;
        self.push(CartItem::Part(part))?;
        Ok(part)
    }

    /// Add a built computer to the cart
    pub fn add_computer(&mut self, computer: Computer<'c>) -> Result<(), CartError> {
        self.push(CartItem::Computer(computer))
    }

    /// Remove one item from the cart
    ///
    /// Resolution order:
    /// 1. A computer in the cart with this id
    /// 2. The session's current computer (`current`), which is then not in the cart
    /// 3. A catalog part, removing its first occurrence in the cart
    ///
    /// Anything else is an invalid id.
    pub fn remove(
        &mut self,
        catalog: &Catalog,
        current: Option<&Computer<'_>>,
        identifier: &str,
    ) -> Result<CartItem<'c>, CartError> {
        let computer_pos = self
            .cart
            .iter()
            .position(|item| matches!(item, CartItem::Computer(c) if c.id() == identifier));
        if let Some(pos) = computer_pos {
            return Ok(self.take(pos));
        }

        if current.is_some_and(|c| c.id() == identifier) {
            return Err(CartError::NotInCart(identifier.to_string()));
        }

        if catalog.contains(identifier) {
            let part_pos = self
                .cart
                .iter()
                .position(|item| matches!(item, CartItem::Part(p) if p.id == identifier));
            return match part_pos {
                Some(pos) => Ok(self.take(pos)),
                None => Err(CartError::NotInCart(identifier.to_string())),
            };
        }

        Err(CartError::InvalidId(identifier.to_string()))
    }

    /// Remove several items, in order, under the given policy
    pub fn remove_many<S: AsRef<str>>(
        &mut self,
        catalog: &Catalog,
        current: Option<&Computer<'_>>,
        identifiers: &[S],
        policy: RemovalPolicy,
    ) -> Removal<'c> {
        match policy {
            RemovalPolicy::FailFast => self.remove_each(catalog, current, identifiers),
            RemovalPolicy::AllOrNothing => {
                let mut staged = self.clone();
                let removal = staged.remove_each(catalog, current, identifiers);
                if removal.failure.is_none() {
                    *self = staged;
                    removal
                } else {
                    Removal {
                        removed: Vec::new(),
                        failure: removal.failure,
                    }
                }
            },
        }
    }

    /// Settle the cart against the budget
    ///
    /// On success the budget is debited, the cart emptied and the total reset.
    /// On failure nothing changes.
    pub fn checkout(&mut self) -> Result<Receipt, CartError> {
        if self.cart.is_empty() {
            return Err(CartError::EmptyCart);
        }
        if self.total > self.budget {
            return Err(CartError::OverBudget {
                total: self.total,
                budget: self.budget,
            });
        }

        let total = self.total;
        let remaining = self.budget.checked_sub(total).ok_or(CartError::OverBudget {
            total,
            budget: self.budget,
        })?;

        let items = self.cart.iter().map(CartItem::line).collect();
        self.budget = remaining;
        self.cart.clear();
        self.total = Money::ZERO;

        log::info!("{} checked out {} (budget left {})", self.name, total, self.budget);

        Ok(Receipt {
            customer: self.name.clone(),
            items,
            total,
            remaining_budget: self.budget,
            placed_at: chrono::Utc::now().to_rfc3339(),
        })
    }

    fn remove_each<S: AsRef<str>>(
        &mut self,
        catalog: &Catalog,
        current: Option<&Computer<'_>>,
        identifiers: &[S],
    ) -> Removal<'c> {
        let mut removed = Vec::with_capacity(identifiers.len());
        for id in identifiers {
            match self.remove(catalog, current, id.as_ref()) {
                Ok(item) => removed.push(item),
                Err(err) => {
                    return Removal {
                        removed,
                        failure: Some(err),
                    };
                },
            }
        }
        Removal {
            removed,
            failure: None,
        }
    }

    fn push(&mut self, item: CartItem<'c>) -> Result<(), CartError> {
        let total = self
            .total
            .checked_add(item.price())
            .ok_or_else(|| CartError::TotalOverflow(item.id().to_string()))?;
        log::debug!("adding {} ({}) to cart", item.id(), item.price());
        self.total = total;
        self.cart.push(item);
        Ok(())
    }

    fn take(&mut self, pos: usize) -> CartItem<'c> {
        let item = self.cart.remove(pos);
        log::debug!("removed {} ({}) from cart", item.id(), item.price());
        self.total -= item.price();
        item
    }
}
