//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{CartLine, CartView, Category, Computer, Money, Part, Receipt};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A result that can be shown in either output mode
pub trait Render: Serialize {
    /// Print the human-readable form
    fn render_human(&self);

    /// Render the result based on output mode
    fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// A successful operation
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// A failed operation
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl Render for OperationResult {
    fn render_human(&self) {
        if self.success {
            println!("{}\n", self.message.green());
        } else {
            println!("{} {}\n", "Error:".red().bold(), self.message);
        }
    }
}

/// One command in the help listing
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CommandHelp {
    /// Command name
    pub name: &'static str,
    /// What the command does
    pub description: &'static str,
}

/// Result of the `help` command
#[derive(Debug, Serialize)]
pub struct HelpResult {
    /// Available commands
    pub commands: Vec<CommandHelp>,
}

impl Render for HelpResult {
    fn render_human(&self) {
        println!("{}", "All available commands:".bold());
        for c in &self.commands {
            println!("\t{} - {}", c.name, c.description);
        }
        println!();
    }
}

/// Result of the `list` command
#[derive(Debug, Serialize)]
pub struct PartListResult<'a> {
    /// Category filter, if any
    pub category: Option<Category>,
    /// Matching parts, in catalog order
    pub parts: Vec<&'a Part>,
}

impl Render for PartListResult<'_> {
    fn render_human(&self) {
        if self.parts.is_empty() {
            println!("No parts found.\n");
            return;
        }
        for part in &self.parts {
            println!("{}", part.details());
        }
    }
}

/// Owned description of a computer for output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComputerInfo {
    /// Computer id
    pub id: String,
    /// Motherboard id
    pub motherboard: String,
    /// RAM ids
    pub rams: Vec<String>,
    /// CPU id
    pub cpu: String,
    /// PSU id
    pub psu: String,
    /// Primary storage id
    pub storage: String,
    /// Second storage id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage2: Option<String>,
    /// GPU id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu: Option<String>,
    /// Total price
    pub total_price: Money,
    /// Total power draw in watts
    pub total_power_draw: u64,
    /// Human-readable details
    #[serde(skip)]
    pub details: String,
}

impl From<&Computer<'_>> for ComputerInfo {
    fn from(computer: &Computer<'_>) -> Self {
        let parts = computer.components();
        Self {
            id: computer.id().to_string(),
            motherboard: parts.motherboard.id.clone(),
            rams: parts.rams.iter().map(|r| r.id.clone()).collect(),
            cpu: parts.cpu.id.clone(),
            psu: parts.psu.id.clone(),
            storage: parts.storage.id.clone(),
            storage2: parts.storage2.map(|s| s.id.clone()),
            gpu: parts.gpu.map(|g| g.id.clone()),
            total_price: computer.total_price(),
            total_power_draw: computer.total_power_draw(),
            details: computer.details(),
        }
    }
}

/// Result of the `details` command
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DetailsResult<'a> {
    /// A catalog part
    Part {
        /// The part
        part: &'a Part,
    },
    /// The current computer
    Computer {
        /// The computer
        computer: ComputerInfo,
    },
}

impl Render for DetailsResult<'_> {
    fn render_human(&self) {
        match self {
            Self::Part { part } => println!("{}", part.details()),
            Self::Computer { computer } => println!("{}", computer.details),
        }
    }
}

/// Result of the `compatibility` command
#[derive(Debug, Serialize)]
pub struct CompatibilityResult {
    /// First part id
    pub first: String,
    /// Second part id
    pub second: String,
    /// Verdict
    pub compatible: bool,
    /// Why
    pub explanation: String,
}

impl Render for CompatibilityResult {
    fn render_human(&self) {
        if self.compatible {
            println!("{}\n", self.explanation.green());
        } else {
            println!("{} {}\n", "Incompatible:".red().bold(), self.explanation);
        }
    }
}

/// Result of `build` and `compatibility-build`
#[derive(Debug, Serialize)]
pub struct BuildResult {
    /// The validated computer
    pub computer: ComputerInfo,
    /// Whether the computer was added to the cart
    pub added_to_cart: bool,
}

impl Render for BuildResult {
    fn render_human(&self) {
        println!(
            "{}",
            format!(
                "The parts in the current build configuration of {} are compatible.",
                self.computer.id
            )
            .green()
        );
        if self.added_to_cart {
            println!(
                "{} added to cart ({}, {}W).",
                self.computer.id, self.computer.total_price, self.computer.total_power_draw
            );
        }
        println!();
    }
}

/// Result of the `remove` command
#[derive(Debug, Serialize)]
pub struct RemovalResult {
    /// Lines removed, in order
    pub removed: Vec<CartLine>,
    /// Error that stopped the removal, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Cart total afterwards
    pub total: Money,
    /// Whether the cart is now empty
    pub cart_empty: bool,
}

impl Render for RemovalResult {
    fn render_human(&self) {
        for line in &self.removed {
            println!("{} removed from cart.", line.id);
        }
        if let Some(err) = &self.error {
            println!("{} {}", "Error:".red().bold(), err);
        }
        if self.cart_empty {
            println!("Cart is empty.");
        }
        println!();
    }
}

impl Render for CartView {
    fn render_human(&self) {
        println!("{}", "Shopping Cart:".bold());
        for line in &self.items {
            println!("\t{}", line.id);
        }
        println!("Total: {}", self.total);
        println!("Your budget: {}\n", self.budget);
    }
}

impl Render for Receipt {
    fn render_human(&self) {
        println!("{}", "Order submitted. Your order is on the way.".green());
        for line in &self.items {
            println!("\t{}", line.id);
        }
        println!("Your total is {}.", self.total);
        println!("Remaining budget: {}\n", self.remaining_budget);
    }
}
