//! Shared test fixtures and helpers
//!
//! This module provides a small catalog used across the unit tests plus a
//! helper for writing catalog and config files to a temporary directory.

use std::fs;
use std::path::{Path, PathBuf};

use pcshop::adapters::json::{LoadOptions, parse_str};
use pcshop::core::models::{Catalog, Money, Part, PartSpec};
use tempfile::TempDir;

/// A catalog with one or two parts of each kind
///
/// The standard build (`MB_01`, `CPU_01`, 2x `RAM_01`, `PSU_01`, `STORAGE_01`)
/// costs $495.00 and draws 96W.
pub const FIXTURE_JSON: &str = r#"{
  "inventory": [
    { "item": { "id": "MB_01", "type": "Motherboard", "name": "Board AM4", "price": 130,
                "power_draw": 25, "socket": "AM4", "ram_slots": 2 } },
    { "item": { "id": "MB_02", "type": "Motherboard", "name": "Board LGA1200", "price": 160,
                "power_draw": 30, "socket": "LGA1200", "ram_slots": 4 } },
    { "item": { "id": "CPU_01", "type": "CPU", "name": "Ryzen 5", "price": 200,
                "power_draw": 65, "socket": "AM4" } },
    { "item": { "id": "CPU_02", "type": "CPU", "name": "Core i5", "price": 180,
                "power_draw": 65, "socket": "LGA1200" } },
    { "item": { "id": "RAM_01", "type": "RAM", "name": "8GB Stick", "price": 35,
                "power_draw": 3, "capacity": 8 } },
    { "item": { "id": "RAM_02", "type": "RAM", "name": "16GB Stick", "price": 60,
                "power_draw": 4, "capacity": 16 } },
    { "item": { "id": "PSU_01", "type": "PSU", "name": "500W Supply", "price": 50,
                "power_supplied": 500 } },
    { "item": { "id": "PSU_02", "type": "PSU", "name": "90W Brick", "price": 20,
                "power_supplied": 90 } },
    { "item": { "id": "STORAGE_01", "type": "Storage", "name": "1TB HDD", "price": 45,
                "capacity": 1000 } },
    { "item": { "id": "STORAGE_02", "type": "Storage", "name": "500GB SSD", "price": 70,
                "capacity": 500 } },
    { "item": { "id": "GPU_01", "type": "GPU", "name": "GTX 1650", "price": 160,
                "power_draw": 75, "overclockable": false } },
    { "item": { "id": "GPU_02", "type": "GPU", "name": "RTX 4090", "price": 1600,
                "power_draw": 450, "overclockable": true } }
  ]
}"#;

/// Load [`FIXTURE_JSON`]
pub fn fixture_catalog() -> Catalog {
    parse_str(FIXTURE_JSON, LoadOptions::default()).expect("fixture catalog parses")
}

/// A CPU with the given socket
pub fn cpu(id: &str, socket: &str, price: i64, power_draw: u32) -> Part {
    Part::new(
        id,
        format!("{id} cpu"),
        Money::from_dollars(price),
        PartSpec::Cpu {
            power_draw,
            socket: socket.to_string(),
        },
    )
}

/// A RAM stick
pub fn ram(id: &str, price: i64) -> Part {
    Part::new(
        id,
        format!("{id} ram"),
        Money::from_dollars(price),
        PartSpec::Ram {
            power_draw: 4,
            capacity: 16,
        },
    )
}

/// A storage drive
pub fn storage(id: &str, price: i64) -> Part {
    Part::new(id, format!("{id} drive"), Money::from_dollars(price), PartSpec::Storage { capacity: 500 })
}

/// A temporary directory for catalog and config files
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create an empty temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Root of the directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file and return its path
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
