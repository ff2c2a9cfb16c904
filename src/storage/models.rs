//! Storage record models for the persistence layer.
//!
//! Records are kept separate from [`SelectionSnapshot`] so the on-disk shape
//! can carry metadata (format version, save time) the engine has no use for.

use crate::domain::{ItemId, SelectionSnapshot};
use serde::{Deserialize, Serialize};

/// Current on-disk format version.
pub const RECORD_FORMAT_VERSION: u32 = 1;

/// A persisted selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRecord {
    /// Format version for future migrations.
    pub version: u32,

    /// Full selection order, ranked entries first.
    #[serde(default)]
    pub order: Vec<ItemId>,

    /// Unix timestamp of the save.
    pub saved_at: i64,
}

impl SelectionRecord {
    /// Creates a record stamped with the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use topten::domain::ItemId;
    /// use topten::storage::{SelectionRecord, RECORD_FORMAT_VERSION};
    ///
    /// let record = SelectionRecord::new(vec![ItemId::from("A")]);
    /// assert_eq!(record.version, RECORD_FORMAT_VERSION);
    /// assert_eq!(record.order.len(), 1);
    /// ```
    #[must_use]
    pub fn new(order: Vec<ItemId>) -> Self {
        Self {
            version: RECORD_FORMAT_VERSION,
            order,
            saved_at: chrono::Utc::now().timestamp(),
        }
    }
}

impl From<&SelectionSnapshot> for SelectionRecord {
    fn from(snapshot: &SelectionSnapshot) -> Self {
        Self::new(snapshot.to_vec())
    }
}
