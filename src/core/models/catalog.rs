//! Catalog model
//!
//! The catalog owns every part for the lifetime of the process. It keeps the
//! order parts were loaded in so listings match the source file.

use std::collections::HashMap;

use super::{Category, Part};

/// The set of purchasable parts, keyed by id
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    parts: Vec<Part>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from parts
    ///
    /// Returns the offending id if two parts share one.
    pub fn from_parts(parts: Vec<Part>) -> Result<Self, String> {
        let mut index = HashMap::with_capacity(parts.len());
        for (pos, part) in parts.iter().enumerate() {
            if index.insert(part.id.clone(), pos).is_some() {
                return Err(part.id.clone());
            }
        }
        Ok(Self { parts, index })
    }

    /// Look up a part by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Part> {
        self.index.get(id).map(|&pos| &self.parts[pos])
    }

    /// Whether a part with this id exists
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All parts, in load order
    pub fn iter(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    /// Parts of one category, in load order
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Part> {
        self.parts.iter().filter(move |p| p.category() == category)
    }

    /// Number of parts
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the catalog has no parts
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
