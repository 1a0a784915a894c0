//! Part categories
//!
//! The six kinds of component the shop sells.

use serde::{Deserialize, Serialize};

/// The category of a part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Processor
    #[serde(rename = "CPU")]
    Cpu,
    /// Graphics card
    #[serde(rename = "GPU")]
    Gpu,
    /// Memory module
    #[serde(rename = "RAM")]
    Ram,
    /// Power supply unit
    #[serde(rename = "PSU")]
    Psu,
    /// Motherboard
    Motherboard,
    /// Hard drive or SSD
    Storage,
}

impl Category {
    /// All categories, in the order the shop lists them
    pub const ALL: [Self; 6] =
        [Self::Motherboard, Self::Ram, Self::Cpu, Self::Psu, Self::Storage, Self::Gpu];

    /// The literal name used in catalog files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Gpu => "GPU",
            Self::Ram => "RAM",
            Self::Psu => "PSU",
            Self::Motherboard => "Motherboard",
            Self::Storage => "Storage",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    /// Case-sensitive, matching the names used in catalog files
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CPU" => Ok(Self::Cpu),
            "GPU" => Ok(Self::Gpu),
            "RAM" => Ok(Self::Ram),
            "PSU" => Ok(Self::Psu),
            "Motherboard" => Ok(Self::Motherboard),
            "Storage" => Ok(Self::Storage),
            _ => Err(format!(
                "Invalid category: {s}. Use: Motherboard, RAM, CPU, PSU, Storage, GPU"
            )),
        }
    }
}
