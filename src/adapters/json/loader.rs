//! JSON catalog loader
//!
//! Reads an inventory file of the form
//!
//! ```json
//! { "inventory": [ { "item": { "id": "CPU_01", "type": "CPU", "name": "...",
//!                             "price": 199, "power_draw": 65, "socket": "AM4" } } ] }
//! ```
//!
//! and turns each item into a typed [`Part`]. Items whose `type` is not one of
//! the six categories are skipped with a warning unless
//! [`LoadOptions::strict_categories`] is set.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::error::LoadError;
use crate::core::models::{Catalog, Category, Money, Part, PartSpec};
use crate::core::ports::CatalogSource;

/// Options controlling how strictly a catalog is read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Fail on unknown item types instead of skipping them
    pub strict_categories: bool,
}

/// Top-level inventory document
#[derive(Debug, Deserialize)]
pub struct InventoryFile {
    /// Catalog entries, in file order
    pub inventory: Vec<InventoryEntry>,
}

/// One entry of the inventory list
#[derive(Debug, Deserialize)]
pub struct InventoryEntry {
    /// The wrapped item record
    pub item: ItemRecord,
}

/// An item record as it appears in the file
///
/// Category-specific fields are optional here; which ones are required is
/// decided by `type` when the record is converted.
#[derive(Debug, Deserialize)]
pub struct ItemRecord {
    /// Part id
    pub id: String,
    /// Category name ("CPU", "GPU", "RAM", "PSU", "Motherboard", "Storage")
    #[serde(rename = "type")]
    pub kind: String,
    /// Display name
    pub name: String,
    /// Unit price in dollars
    pub price: Money,
    /// Power draw in watts
    pub power_draw: Option<u32>,
    /// CPU/motherboard socket
    pub socket: Option<String>,
    /// GPU overclock support
    pub overclockable: Option<bool>,
    /// RAM/storage capacity in GB
    pub capacity: Option<u32>,
    /// PSU output in watts
    pub power_supplied: Option<u32>,
    /// Motherboard RAM slots
    pub ram_slots: Option<u32>,
}

impl ItemRecord {
    /// Convert into a typed part
    ///
    /// Returns `Ok(None)` for an unknown category when not in strict mode.
    pub fn into_part(self, options: LoadOptions) -> Result<Option<Part>, LoadError> {
        let Ok(category) = self.kind.parse::<Category>() else {
            if options.strict_categories {
                return Err(LoadError::UnknownCategory {
                    id: self.id,
                    category: self.kind,
                });
            }
            log::warn!("skipping catalog item {} with unknown type '{}'", self.id, self.kind);
            return Ok(None);
        };

        if self.price.is_negative() {
            return Err(invalid(&self.id, "price", format!("{} is negative", self.price)));
        }

        let id = self.id.as_str();
        let require = |value: Option<u32>, field: &'static str| {
            value.ok_or_else(|| LoadError::MissingField {
                id: id.to_string(),
                category,
                field,
            })
        };
        let positive = |value: Option<u32>, field: &'static str| -> Result<u32, LoadError> {
            let value = require(value, field)?;
            if value == 0 {
                return Err(invalid(id, field, "must be greater than zero".to_string()));
            }
            Ok(value)
        };
        let missing = |field: &'static str| LoadError::MissingField {
            id: id.to_string(),
            category,
            field,
        };

        let spec = match category {
            Category::Cpu => PartSpec::Cpu {
                power_draw: require(self.power_draw, "power_draw")?,
                socket: self.socket.clone().ok_or_else(|| missing("socket"))?,
            },
            Category::Gpu => PartSpec::Gpu {
                power_draw: require(self.power_draw, "power_draw")?,
                overclockable: self.overclockable.ok_or_else(|| missing("overclockable"))?,
            },
            Category::Ram => PartSpec::Ram {
                power_draw: require(self.power_draw, "power_draw")?,
                capacity: positive(self.capacity, "capacity")?,
            },
            Category::Psu => PartSpec::Psu {
                power_supplied: positive(self.power_supplied, "power_supplied")?,
            },
            Category::Motherboard => PartSpec::Motherboard {
                power_draw: require(self.power_draw, "power_draw")?,
                socket: self.socket.clone().ok_or_else(|| missing("socket"))?,
                ram_slots: positive(self.ram_slots, "ram_slots")?,
            },
            Category::Storage => PartSpec::Storage {
                capacity: positive(self.capacity, "capacity")?,
            },
        };

        Ok(Some(Part::new(self.id.clone(), self.name.clone(), self.price, spec)))
    }
}

fn invalid(id: &str, field: &'static str, reason: String) -> LoadError {
    LoadError::InvalidField {
        id: id.to_string(),
        field,
        reason,
    }
}

/// Parse a catalog from JSON text
///
/// # Errors
///
/// Returns an error if the JSON is malformed, an item lacks a field its
/// category requires, a value is out of range, or two items share an id.
pub fn parse_str(content: &str, options: LoadOptions) -> Result<Catalog, LoadError> {
    let file: InventoryFile = serde_json::from_str(content)?;

    let mut parts = Vec::with_capacity(file.inventory.len());
    for entry in file.inventory {
        if let Some(part) = entry.item.into_part(options)? {
            parts.push(part);
        }
    }

    let catalog = Catalog::from_parts(parts).map_err(LoadError::DuplicateId)?;
    log::debug!("loaded {} parts", catalog.len());
    Ok(catalog)
}

/// Load a catalog from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails [`parse_str`].
pub fn load_file(path: &Path, options: LoadOptions) -> Result<Catalog, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_str(&content, options)
}

/// A JSON inventory file on disk
#[derive(Debug, Clone)]
pub struct JsonCatalogFile {
    path: PathBuf,
    options: LoadOptions,
}

impl JsonCatalogFile {
    /// Create a source for the given path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, options: LoadOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }
}

impl CatalogSource for JsonCatalogFile {
    fn load(&self) -> Result<Catalog, LoadError> {
        load_file(&self.path, self.options)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
