//! In-memory catalog loaded from a JSON file.
//!
//! # File Format
//!
//! ```json
//! [
//!   {
//!     "id": "flood-model",
//!     "title": "Flood forecasting with satellite data",
//!     "affiliation": "Acme Water",
//!     "domain": "AI/ML",
//!     "tags": ["Python", "Remote sensing"]
//!   }
//! ]
//! ```

use super::Catalog;
use crate::domain::{Item, ItemId, Result, TopTenError};
use std::collections::HashMap;
use std::path::Path;

/// Catalog backed by a vector plus an id index.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
}

impl InMemoryCatalog {
    /// Builds a catalog from `items`.
    ///
    /// A repeated id replaces the earlier entry in place, so catalog order is
    /// that of the first occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use topten::catalog::{Catalog, InMemoryCatalog};
    /// use topten::domain::{Item, ItemId};
    ///
    /// let catalog = InMemoryCatalog::new(vec![
    ///     Item::new("a", "First", "Acme"),
    ///     Item::new("a", "Replacement", "Acme"),
    /// ]);
    /// assert_eq!(catalog.len(), 1);
    /// assert_eq!(catalog.get(&ItemId::from("a")).map(|i| i.title.as_str()), Some("Replacement"));
    /// ```
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        let mut catalog = Self::default();
        for item in items {
            if let Some(&position) = catalog.index.get(&item.id) {
                tracing::debug!(id = %item.id, "duplicate catalog id, replacing entry");
                catalog.items[position] = item;
            } else {
                catalog.index.insert(item.id.clone(), catalog.items.len());
                catalog.items.push(item);
            }
        }
        catalog
    }

    /// Parses a JSON array of items.
    ///
    /// # Errors
    ///
    /// Returns [`TopTenError::Catalog`] if the text is not a valid item array.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let items: Vec<Item> = serde_json::from_str(json)
            .map_err(|e| TopTenError::Catalog(format!("failed to parse catalog JSON: {e}")))?;
        Ok(Self::new(items))
    }

    /// Loads a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or
    /// [`TopTenError::Catalog`] if it is not a valid item array.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading catalog");

        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&contents)?;

        tracing::debug!(items = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Catalog for InMemoryCatalog {
    fn get(&self, id: &ItemId) -> Option<&Item> {
        self.index.get(id).and_then(|&position| self.items.get(position))
    }

    fn items(&self) -> Vec<&Item> {
        self.items.iter().collect()
    }
}
