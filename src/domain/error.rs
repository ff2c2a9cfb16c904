//! Error types for the top ten selection engine.
//!
//! This module defines the centralized error type [`TopTenError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.
//!
//! None of these conditions are fatal to a ranking session: the store and the
//! engine reject the offending call and leave the selection untouched.

use super::item::ItemId;
use thiserror::Error;

/// The main error type for selection and persistence operations.
///
/// # Examples
///
/// ```
/// use topten::domain::{ItemId, TopTenError};
///
/// let err = TopTenError::InvalidMove(ItemId::from("K"));
/// assert_eq!(err.to_string(), "Invalid move: item K is not in the selection");
/// ```
#[derive(Debug, Error)]
pub enum TopTenError {
    /// A proposed order is not a permutation of the current selection.
    ///
    /// Raised by `SelectionStore::reorder` when the proposed identifiers are
    /// missing entries, contain extra entries, or repeat an entry. The string
    /// describes the mismatch.
    #[error("Invalid permutation: {0}")]
    InvalidPermutation(String),

    /// A move intent references an identifier absent from the selection.
    #[error("Invalid move: item {0} is not in the selection")]
    InvalidMove(ItemId),

    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to the persisted selection fails.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file could not be parsed.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for top ten operations.
///
/// This is a type alias for `std::result::Result<T, TopTenError>`.
pub type Result<T> = std::result::Result<T, TopTenError>;
