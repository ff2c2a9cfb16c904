//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where the selection file and the log file live, and expands
//! `~`-prefixed paths coming from configuration.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, resolve_path};
