//! Storage layer for the optional persistence collaborator.
//!
//! The selection store is purely in-memory. This module lets a runtime snapshot
//! the committed selection to disk and restore it at the next start. The core
//! engine never depends on it.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `models`: Persisted record types separate from the in-memory snapshot

pub mod backend;
pub mod json;
pub mod models;

pub use backend::SelectionStorage;
pub use json::JsonStorage;
pub use models::{SelectionRecord, RECORD_FORMAT_VERSION};
