//! Item identifiers and catalog items.
//!
//! The selection engine only ever holds [`ItemId`]s. Display attributes live in
//! [`Item`], which is owned exclusively by the catalog and looked up at render
//! time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a selectable item.
///
/// Serialized as a bare string so persisted selections and catalog files stay
/// human-readable.
///
/// # Examples
///
/// ```
/// use topten::domain::ItemId;
///
/// let id = ItemId::from("proj-42");
/// assert_eq!(id.as_str(), "proj-42");
/// assert_eq!(id.to_string(), "proj-42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Creates an identifier from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A selectable item as described by the catalog.
///
/// # Fields
///
/// - `id`: Identifier referenced by the selection
/// - `title`: Display title
/// - `affiliation`: Sponsoring organisation or company
/// - `domain`: Optional technical domain used for filtering and search
/// - `summary`: Optional one-paragraph description
/// - `tags`: Free-form skill or topic tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub affiliation: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Item {
    /// Creates an item with a title and affiliation and no optional attributes.
    ///
    /// # Examples
    ///
    /// ```
    /// use topten::domain::Item;
    ///
    /// let item = Item::new("p1", "Flood forecasting", "Acme Water");
    /// assert_eq!(item.id.as_str(), "p1");
    /// assert!(item.tags.is_empty());
    /// ```
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>, affiliation: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            affiliation: affiliation.into(),
            domain: None,
            summary: None,
            tags: Vec::new(),
        }
    }

    /// Returns the item with the given tags attached.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Lower-cased text that catalog search matches against.
    #[must_use]
    pub fn search_haystack(&self) -> String {
        let mut parts = vec![self.title.as_str(), self.affiliation.as_str()];
        if let Some(domain) = &self.domain {
            parts.push(domain);
        }
        parts.extend(self.tags.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }
}
