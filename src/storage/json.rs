//! JSON file-based storage backend.
//!
//! This module provides a simple, human-readable storage implementation using
//! JSON serialization. It uses atomic file writes (write-to-temp + rename) to
//! prevent corruption on crashes.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "order": ["flood", "vision", "churn"],
//!   "saved_at": 1718000000
//! }
//! ```

use crate::domain::error::{Result, TopTenError};
use crate::storage::backend::SelectionStorage;
use crate::storage::models::{SelectionRecord, RECORD_FORMAT_VERSION};
use std::path::{Path, PathBuf};

/// JSON file storage backend for one selection.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`; it is meant to be driven from the same
/// event loop that owns the session.
#[derive(Debug)]
pub struct JsonStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,
}

impl JsonStorage {
    /// Opens a JSON storage backend at `file_path`.
    ///
    /// Parent directories are created automatically. The file itself is only
    /// created on the first save.
    ///
    /// # Errors
    ///
    /// Returns an error if parent directory creation fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use topten::storage::JsonStorage;
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonStorage::new(PathBuf::from("/tmp/selection.json"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            tracing::debug!(parent = ?parent, "creating parent directory");
            std::fs::create_dir_all(parent)?;
        }

        Ok(Self { file_path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<SelectionRecord> {
        let contents = std::fs::read_to_string(path)?;
        let record: SelectionRecord = serde_json::from_str(&contents)
            .map_err(|e| TopTenError::Storage(format!("failed to parse JSON: {e}")))?;

        if record.version != RECORD_FORMAT_VERSION {
            return Err(TopTenError::Storage(format!(
                "unsupported selection format version {} (expected {RECORD_FORMAT_VERSION})",
                record.version
            )));
        }

        tracing::debug!(
            version = record.version,
            count = record.order.len(),
            saved_at = record.saved_at,
            "loaded selection"
        );

        Ok(record)
    }
}

impl SelectionStorage for JsonStorage {
    fn load(&self) -> Result<Option<SelectionRecord>> {
        let _span = tracing::debug_span!("json_load", path = ?self.file_path).entered();

        if !self.file_path.exists() {
            tracing::debug!("no saved selection");
            return Ok(None);
        }

        Self::load_from_file(&self.file_path).map(Some)
    }

    fn save(&mut self, record: &SelectionRecord) -> Result<()> {
        let _span = tracing::debug_span!("json_save",
            path = ?self.file_path,
            count = record.order.len()
        ).entered();

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| TopTenError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("selection saved");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let _span = tracing::debug_span!("json_clear", path = ?self.file_path).entered();

        match std::fs::remove_file(&self.file_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;

    fn ids(names: &[&str]) -> Vec<ItemId> {
        names.iter().map(|n| ItemId::from(*n)).collect()
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path().join("nested").join("selection.json")).unwrap();

        assert!(storage.load().unwrap().is_none());
        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn save_then_load_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path().join("selection.json")).unwrap();

        let record = SelectionRecord::new(ids(&["C", "A", "B"]));
        storage.save(&record).unwrap();

        assert_eq!(storage.load().unwrap(), Some(record));
        assert!(!dir.path().join("selection.tmp").exists());
    }

    #[test]
    fn clear_removes_file_and_tolerates_absence() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path().join("selection.json")).unwrap();

        storage.save(&SelectionRecord::new(ids(&["A"]))).unwrap();
        storage.clear().unwrap();
        storage.clear().unwrap();

        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn unknown_format_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.json");
        std::fs::write(&path, r#"{"version": 99, "order": ["A"], "saved_at": 0}"#).unwrap();

        let storage = JsonStorage::new(path).unwrap();
        let err = storage.load().unwrap_err();

        assert!(matches!(err, TopTenError::Storage(ref msg) if msg.contains("99")));
    }

    #[test]
    fn corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.json");
        std::fs::write(&path, "not json").unwrap();

        let storage = JsonStorage::new(path).unwrap();
        assert!(matches!(storage.load(), Err(TopTenError::Storage(_))));
    }
}
