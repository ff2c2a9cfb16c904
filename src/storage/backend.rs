//! Storage backend abstraction.
//!
//! This module defines the [`SelectionStorage`] trait that abstracts over
//! persistence backends. The trait is deliberately small: the store's
//! "current order" and "reorder" contract is all a backend needs to snapshot
//! and restore a selection.

use crate::domain::error::Result;
use crate::storage::models::SelectionRecord;

/// Abstraction over persistent selection backends.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic writes
///
/// # Examples
///
/// ```no_run
/// use topten::storage::{JsonStorage, SelectionRecord, SelectionStorage};
/// use topten::domain::ItemId;
/// use std::path::PathBuf;
///
/// let mut storage = JsonStorage::new(PathBuf::from("/tmp/selection.json"))?;
/// storage.save(&SelectionRecord::new(vec![ItemId::from("A")]))?;
/// let restored = storage.load()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait SelectionStorage: Send {
    /// Reads the persisted selection, `Ok(None)` if nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored data cannot be read or parsed.
    fn load(&self) -> Result<Option<SelectionRecord>>;

    /// Replaces the persisted selection with `record`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn save(&mut self, record: &SelectionRecord) -> Result<()>;

    /// Deletes the persisted selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored data exists but cannot be removed.
    fn clear(&mut self) -> Result<()>;
}
