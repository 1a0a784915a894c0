//! Computer model
//!
//! A computer is an assembled build of catalog parts sold as one cart line.
//! It can only be created through [`Computer::new`] or [`Computer::assemble`],
//! both of which validate the build, so every `Computer` value is a valid one.

use serde::Serialize;

use super::{Catalog, Category, Money, Part};
use crate::core::error::BuildError;
use crate::core::services::validate_build;

/// The parts chosen for a build, by reference into the catalog
#[derive(Debug, Clone)]
pub struct Components<'c> {
    /// Motherboard
    pub motherboard: &'c Part,
    /// RAM modules (one entry per stick)
    pub rams: Vec<&'c Part>,
    /// Processor
    pub cpu: &'c Part,
    /// Power supply
    pub psu: &'c Part,
    /// Primary storage
    pub storage: &'c Part,
    /// Optional second storage
    pub storage2: Option<&'c Part>,
    /// Optional graphics card
    pub gpu: Option<&'c Part>,
}

/// The parts chosen for a build, by id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildRequest {
    /// Id for the new computer
    pub id: String,
    /// Motherboard id
    pub motherboard: String,
    /// RAM ids (one entry per stick)
    pub rams: Vec<String>,
    /// CPU id
    pub cpu: String,
    /// PSU id
    pub psu: String,
    /// Primary storage id
    pub storage: String,
    /// Optional second storage id
    pub storage2: Option<String>,
    /// Optional GPU id
    pub gpu: Option<String>,
}

/// A validated, assembled computer
#[derive(Debug, Clone)]
pub struct Computer<'c> {
    id: String,
    parts: Components<'c>,
    total_price: Money,
    total_power_draw: u64,
}

impl<'c> Computer<'c> {
    /// Assemble and validate a computer
    ///
    /// Fails if a slot holds the wrong category of part or if any build rule
    /// is violated (see [`validate_build`]).
    pub fn new(id: impl Into<String>, parts: Components<'c>) -> Result<Self, BuildError> {
        expect_category("motherboard", parts.motherboard, Category::Motherboard)?;
        for ram in &parts.rams {
            expect_category("RAM", ram, Category::Ram)?;
        }
        expect_category("CPU", parts.cpu, Category::Cpu)?;
        expect_category("PSU", parts.psu, Category::Psu)?;
        expect_category("storage", parts.storage, Category::Storage)?;
        if let Some(storage2) = parts.storage2 {
            expect_category("second storage", storage2, Category::Storage)?;
        }
        if let Some(gpu) = parts.gpu {
            expect_category("GPU", gpu, Category::Gpu)?;
        }

        let id = id.into();
        let total_price = all_parts(&parts)
            .try_fold(Money::ZERO, |sum, p| sum.checked_add(p.price))
            .ok_or_else(|| BuildError::PriceOverflow { id: id.clone() })?;
        let total_power_draw = all_parts(&parts).map(|p| u64::from(p.power_draw())).sum();

        let computer = Self {
            id,
            parts,
            total_price,
            total_power_draw,
        };
        validate_build(&computer)?;

        log::debug!(
            "assembled computer {} ({}, {}W)",
            computer.id,
            computer.total_price,
            computer.total_power_draw
        );
        Ok(computer)
    }

    /// Resolve a build request through the catalog and assemble it
    pub fn assemble(catalog: &'c Catalog, request: &BuildRequest) -> Result<Self, BuildError> {
        let lookup =
            |id: &str| catalog.get(id).ok_or_else(|| BuildError::UnknownPart(id.to_string()));

        let parts = Components {
            motherboard: lookup(&request.motherboard)?,
            rams: request.rams.iter().map(|id| lookup(id)).collect::<Result<_, _>>()?,
            cpu: lookup(&request.cpu)?,
            psu: lookup(&request.psu)?,
            storage: lookup(&request.storage)?,
            storage2: request.storage2.as_deref().map(lookup).transpose()?,
            gpu: request.gpu.as_deref().map(lookup).transpose()?,
        };
        Self::new(request.id.clone(), parts)
    }

    /// Computer id
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sum of all member part prices
    #[must_use]
    pub const fn total_price(&self) -> Money {
        self.total_price
    }

    /// Sum of all member part power draws in watts
    #[must_use]
    pub const fn total_power_draw(&self) -> u64 {
        self.total_power_draw
    }

    /// The parts making up this computer
    #[must_use]
    pub const fn components(&self) -> &Components<'c> {
        &self.parts
    }

    /// Multi-line description used by `details`
    #[must_use]
    pub fn details(&self) -> String {
        let p = &self.parts;
        let rams: Vec<&str> = p.rams.iter().map(|r| r.id.as_str()).collect();
        let mut out = format!(
            "ID: {}\n\tMotherboard: {}\n\tRAMs: {}\n\tCPU: {}\n\tPSU: {}\n\tHard Drive: {}\n",
            self.id,
            p.motherboard.id,
            rams.join(", "),
            p.cpu.id,
            p.psu.id,
            p.storage.id
        );
        if let Some(storage2) = p.storage2 {
            out.push_str(&format!("\tHard Drive 2: {}\n", storage2.id));
        }
        if let Some(gpu) = p.gpu {
            out.push_str(&format!("\tGPU: {}\n", gpu.id));
        }
        out.push_str(&format!(
            "\tTotal Price: {}\n\tTotal Power Draw: {}W\n",
            self.total_price, self.total_power_draw
        ));
        out
    }
}

impl std::fmt::Display for Computer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}

fn all_parts<'a, 'c>(parts: &'a Components<'c>) -> impl Iterator<Item = &'c Part> + 'a {
    [parts.motherboard, parts.cpu, parts.psu, parts.storage]
        .into_iter()
        .chain(parts.rams.iter().copied())
        .chain(parts.storage2)
        .chain(parts.gpu)
}

fn expect_category(slot: &'static str, part: &Part, expected: Category) -> Result<(), BuildError> {
    let found = part.category();
    if found == expected {
        Ok(())
    } else {
        Err(BuildError::WrongCategory {
            slot,
            id: part.id.clone(),
            expected,
            found,
        })
    }
}
