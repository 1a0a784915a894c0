//! Part model
//!
//! A part is a single purchasable component. Every part shares an id, name and
//! price; the category-specific fields live in [`PartSpec`], whose variant also
//! fixes the part's [`Category`].

use serde::Serialize;

use super::{Category, Money};

/// A purchasable component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Part {
    /// Unique identifier (e.g., "CPU_01")
    pub id: String,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: Money,

    /// Category-specific attributes
    #[serde(flatten)]
    pub spec: PartSpec,
}

/// Category-specific attributes of a part
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum PartSpec {
    /// Processor
    #[serde(rename = "CPU")]
    Cpu {
        /// Power draw in watts
        power_draw: u32,
        /// Socket token (e.g., "AM4")
        socket: String,
    },
    /// Graphics card
    #[serde(rename = "GPU")]
    Gpu {
        /// Power draw in watts
        power_draw: u32,
        /// Whether the card can be overclocked
        overclockable: bool,
    },
    /// Memory module
    #[serde(rename = "RAM")]
    Ram {
        /// Power draw in watts
        power_draw: u32,
        /// Capacity in GB
        capacity: u32,
    },
    /// Power supply (a source, so it has no draw)
    #[serde(rename = "PSU")]
    Psu {
        /// Power supplied in watts
        power_supplied: u32,
    },
    /// Motherboard
    Motherboard {
        /// Power draw in watts
        power_draw: u32,
        /// Socket token the CPU must match
        socket: String,
        /// Number of RAM slots
        ram_slots: u32,
    },
    /// Hard drive or SSD
    Storage {
        /// Capacity in GB
        capacity: u32,
    },
}

impl PartSpec {
    /// The category this spec belongs to
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Cpu { .. } => Category::Cpu,
            Self::Gpu { .. } => Category::Gpu,
            Self::Ram { .. } => Category::Ram,
            Self::Psu { .. } => Category::Psu,
            Self::Motherboard { .. } => Category::Motherboard,
            Self::Storage { .. } => Category::Storage,
        }
    }
}

impl Part {
    /// Create a new part
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money, spec: PartSpec) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            spec,
        }
    }

    /// The part's category
    #[must_use]
    pub const fn category(&self) -> Category {
        self.spec.category()
    }

    /// Power draw in watts (0 for PSUs and storage)
    #[must_use]
    pub const fn power_draw(&self) -> u32 {
        match self.spec {
            PartSpec::Cpu { power_draw, .. }
            | PartSpec::Gpu { power_draw, .. }
            | PartSpec::Ram { power_draw, .. }
            | PartSpec::Motherboard { power_draw, .. } => power_draw,
            PartSpec::Psu { .. } | PartSpec::Storage { .. } => 0,
        }
    }

    /// Socket token, for CPUs and motherboards
    #[must_use]
    pub fn socket(&self) -> Option<&str> {
        match &self.spec {
            PartSpec::Cpu { socket, .. } | PartSpec::Motherboard { socket, .. } => Some(socket),
            _ => None,
        }
    }

    /// Number of RAM slots, for motherboards
    #[must_use]
    pub const fn ram_slots(&self) -> Option<u32> {
        match self.spec {
            PartSpec::Motherboard { ram_slots, .. } => Some(ram_slots),
            _ => None,
        }
    }

    /// Power supplied in watts, for PSUs
    #[must_use]
    pub const fn power_supplied(&self) -> Option<u32> {
        match self.spec {
            PartSpec::Psu { power_supplied } => Some(power_supplied),
            _ => None,
        }
    }

    /// Capacity in GB, for RAM and storage
    #[must_use]
    pub const fn capacity(&self) -> Option<u32> {
        match self.spec {
            PartSpec::Ram { capacity, .. } | PartSpec::Storage { capacity } => Some(capacity),
            _ => None,
        }
    }

    /// Multi-line description used by `list` and `details`
    #[must_use]
    pub fn details(&self) -> String {
        let mut out = format!(
            "ID: {}\n\tType: {}\n\tName: {}\n\tPrice: {}\n",
            self.id,
            self.category(),
            self.name,
            self.price
        );
        let extra = match &self.spec {
            PartSpec::Cpu { power_draw, socket } => {
                format!("\tPower Draw: {power_draw}W\n\tSocket: {socket}\n")
            },
            PartSpec::Gpu {
                power_draw,
                overclockable,
            } => format!("\tPower Draw: {power_draw}W\n\tOverclockable: {overclockable}\n"),
            PartSpec::Ram {
                power_draw,
                capacity,
            } => format!("\tPower Draw: {power_draw}W\n\tCapacity: {capacity}GB\n"),
            PartSpec::Psu { power_supplied } => format!("\tPower Supplied: {power_supplied}W\n"),
            PartSpec::Motherboard {
                power_draw,
                socket,
                ram_slots,
            } => format!(
                "\tPower Draw: {power_draw}W\n\tSocket: {socket}\n\tRam Slots: {ram_slots}\n"
            ),
            PartSpec::Storage { capacity } => format!("\tCapacity: {capacity}GB\n"),
        };
        out.push_str(&extra);
        out
    }
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}
