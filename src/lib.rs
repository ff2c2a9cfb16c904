//! topten: a bounded, drag-ordered "top ten" selection engine.
//!
//! A user picks items from a catalog into a personal selection and ranks them
//! by drag and drop. The first ten positions form the ranked list; everything
//! beyond spills into an unranked overflow list. This crate provides:
//! - A single ordered selection store with snapshot subscriptions
//! - A drag session controller that turns gestures into move intents
//! - A pure reorder engine enforcing the ten-slot capacity with spillover
//! - Catalog lookup and fuzzy search for rendering and picking items
//! - Optional JSON persistence of the committed order
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Command-line Shim (main.rs)                        │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Event handling
//! │  - Drag session controller                          │  ← Reorder engine
//! │  - Selection store and subscriptions                │
//! │  - Action dispatching                               │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Catalog       │
//! │ (ui/)         │   │ (storage/)    │   │ (catalog/)    │
//! │ - View models │   │ - JSON I/O    │   │ - Lookup      │
//! │ - Text render │   │ - Backend API │   │ - Fuzzy search│
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Items and selection snapshots (domain/)          │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber                               │
//! │  - Size-rotated log file                            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Selection store, drag controller, reorder engine and event handler
//! - [`catalog`]: Read-only item lookup and search
//! - [`domain`]: Core domain types (items, containers, snapshots, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: JSON file persistence of the committed order
//! - [`ui`]: View models and plain-text rendering
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! The binary reads an optional TOML file:
//!
//! ```toml
//! data_dir = "~/.local/share/topten"
//! catalog_file = "catalog.json"
//! selection_file = "selection.json"
//! autosave = true
//! trace_level = "debug"
//! ```
//!
//! Relative file paths are resolved against the data directory.
//!
//! # Examples
//!
//! ```rust
//! use topten::{handle_event, Action, DropTarget, Event, ItemId, RankingSession, Region};
//!
//! let mut session = RankingSession::new(true);
//! for id in ["A", "B", "C"] {
//!     handle_event(&mut session, &Event::Add(ItemId::from(id)))?;
//! }
//!
//! handle_event(&mut session, &Event::DragStart(ItemId::from("C")))?;
//! let (render, actions) = handle_event(
//!     &mut session,
//!     &Event::DragEnd(Some(DropTarget::Item(ItemId::from("A")))),
//! )?;
//!
//! assert!(render);
//! assert!(matches!(actions.as_slice(), [Action::Persist(_)]));
//! assert_eq!(session.snapshot().to_vec(), vec![ItemId::from("C"), ItemId::from("A"), ItemId::from("B")]);
//!
//! // Dropping on the overflow background demotes.
//! handle_event(&mut session, &Event::DragStart(ItemId::from("C")))?;
//! handle_event(&mut session, &Event::DragEnd(Some(DropTarget::Region(Region::Overflow))))?;
//! # Ok::<(), topten::TopTenError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, DropTarget, Event, RankingSession, Region, SelectionStore};
pub use catalog::{Catalog, InMemoryCatalog};
pub use domain::{Item, ItemId, Result, TopTenError};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use storage::{JsonStorage, SelectionStorage};

/// Default catalog file name inside the data directory.
const DEFAULT_CATALOG_FILE: &str = "catalog.json";

/// Default selection file name inside the data directory.
const DEFAULT_SELECTION_FILE: &str = "selection.json";

/// Runtime configuration.
///
/// Built either from a TOML file ([`Config::from_toml_file`]) or from a flat
/// string map ([`Config::from_map`]) such as one assembled from command-line
/// `key=value` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the selection and log files.
    ///
    /// Supports `~`. Defaults to `$TOPTEN_DATA_DIR` or
    /// `$HOME/.local/share/topten`.
    pub data_dir: Option<String>,

    /// Catalog JSON file. Relative paths resolve against the data directory.
    /// Default: `catalog.json`
    pub catalog_file: Option<String>,

    /// Persisted selection file. Relative paths resolve against the data
    /// directory. Default: `selection.json`
    pub selection_file: Option<String>,

    /// Whether committed changes are persisted automatically. Default: `true`
    pub autosave: bool,

    /// Tracing level filter.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            catalog_file: None,
            selection_file: None,
            autosave: true,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// # Parsing Rules
    ///
    /// - `data_dir`, `catalog_file`, `selection_file`, `trace_level`: empty
    ///   values are treated as unset
    /// - `autosave`: `true`/`false`/`1`/`0`/`yes`/`no` (falls back to `true`)
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use topten::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("data_dir".to_string(), "/tmp/topten".to_string());
    /// map.insert("autosave".to_string(), "no".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.data_dir.as_deref(), Some("/tmp/topten"));
    /// assert!(!config.autosave);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let autosave = config
            .get("autosave")
            .and_then(|v| parse_flag(v))
            .unwrap_or(true);

        Self {
            data_dir: text("data_dir"),
            catalog_file: text("catalog_file"),
            selection_file: text("selection_file"),
            autosave,
            trace_level: text("trace_level"),
        }
    }

    /// Reads configuration from a TOML file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or
    /// [`TopTenError::Config`] if it is not valid TOML for this structure.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading configuration");

        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`TopTenError::Config`] on malformed TOML or mistyped keys.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| TopTenError::Config(format!("invalid configuration: {e}")))
    }

    /// Resolved data directory.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.as_deref().map_or_else(infrastructure::get_data_dir, |dir| {
            PathBuf::from(infrastructure::expand_tilde(dir))
        })
    }

    /// Resolved path of the persisted selection.
    #[must_use]
    pub fn selection_path(&self) -> PathBuf {
        let file = self.selection_file.as_deref().unwrap_or(DEFAULT_SELECTION_FILE);
        infrastructure::resolve_path(file, &self.data_dir())
    }

    /// Resolved path of the catalog file.
    #[must_use]
    pub fn catalog_path(&self) -> PathBuf {
        let file = self.catalog_file.as_deref().unwrap_or(DEFAULT_CATALOG_FILE);
        infrastructure::resolve_path(file, &self.data_dir())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Opens the selection storage and restores the last committed order.
///
/// A missing file starts an empty session. An unreadable or corrupt file is
/// logged and also starts empty; it is overwritten by the next save.
///
/// # Errors
///
/// Returns an error only if the storage directory cannot be created.
///
/// # Example
///
/// ```rust
/// use topten::{initialize, Config};
///
/// let dir = std::env::temp_dir().join("topten-doc-initialize");
/// let config = Config {
///     data_dir: Some(dir.to_string_lossy().into_owned()),
///     ..Default::default()
/// };
///
/// let (session, _storage) = initialize(&config)?;
/// assert!(session.autosave);
/// # Ok::<(), topten::TopTenError>(())
/// ```
pub fn initialize(config: &Config) -> Result<(RankingSession, JsonStorage)> {
    let _span = tracing::debug_span!("initialize", autosave = config.autosave).entered();

    let storage = JsonStorage::new(config.selection_path())?;
    let session = match storage.load() {
        Ok(Some(record)) => RankingSession::restore(&record, config.autosave),
        Ok(None) => RankingSession::new(config.autosave),
        Err(e) => {
            tracing::warn!(error = %e, path = ?storage.path(), "failed to load selection, starting empty");
            RankingSession::new(config.autosave)
        }
    };

    tracing::debug!(selected = session.snapshot().len(), "session initialized");
    Ok((session, storage))
}

/// Loads the catalog named by `config`. A missing file yields an empty catalog.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_catalog(config: &Config) -> Result<InMemoryCatalog> {
    let path = config.catalog_path();
    if !path.exists() {
        tracing::debug!(path = ?path, "no catalog file, using empty catalog");
        return Ok(InMemoryCatalog::default());
    }
    InMemoryCatalog::from_json_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SelectionRecord;

    fn config_in(dir: &Path) -> Config {
        Config {
            data_dir: Some(dir.to_string_lossy().into_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn map_values_fall_back_to_defaults() {
        let mut map = BTreeMap::new();
        map.insert("autosave".to_string(), "sometimes".to_string());
        map.insert("catalog_file".to_string(), "  ".to_string());

        let config = Config::from_map(&map);

        assert!(config.autosave);
        assert_eq!(config.catalog_file, None);
        assert_eq!(config.trace_level, None);
    }

    #[test]
    fn toml_missing_keys_use_defaults() {
        let config = Config::from_toml_str("trace_level = \"debug\"\n").unwrap();

        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert!(config.autosave);
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn toml_type_mismatch_is_config_error() {
        let err = Config::from_toml_str("autosave = \"maybe\"").unwrap_err();
        assert!(matches!(err, TopTenError::Config(_)));
    }

    #[test]
    fn relative_files_resolve_against_data_dir() {
        let config = Config {
            data_dir: Some("/srv/topten".to_string()),
            selection_file: Some("mine.json".to_string()),
            catalog_file: Some("/etc/topten/catalog.json".to_string()),
            ..Default::default()
        };

        assert_eq!(config.selection_path(), PathBuf::from("/srv/topten/mine.json"));
        assert_eq!(config.catalog_path(), PathBuf::from("/etc/topten/catalog.json"));
    }

    #[test]
    fn initialize_restores_saved_order() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let mut storage = JsonStorage::new(config.selection_path()).unwrap();
        storage
            .save(&SelectionRecord::new(vec![ItemId::from("B"), ItemId::from("A")]))
            .unwrap();

        let (session, _) = initialize(&config).unwrap();
        assert_eq!(session.snapshot().to_vec(), vec![ItemId::from("B"), ItemId::from("A")]);
    }

    #[test]
    fn initialize_survives_corrupt_selection() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::write(config.selection_path(), "{broken").unwrap();

        let (session, _) = initialize(&config).unwrap();
        assert!(session.snapshot().is_empty());
    }

    #[test]
    fn missing_catalog_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = load_catalog(&config_in(dir.path())).unwrap();
        assert!(catalog.is_empty());
    }
}
