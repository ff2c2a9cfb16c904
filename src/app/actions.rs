//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! library never performs I/O itself: persisting the selection or signalling a
//! rejected gesture to the user is left to whoever drives the session.
//!
//! # Example
//!
//! ```rust
//! use topten::app::{Action, Rejection};
//! use topten::domain::ItemId;
//!
//! let action = Action::Rejected(Rejection::AlreadySelected(ItemId::from("A")));
//! assert!(matches!(action, Action::Rejected(_)));
//! ```

use crate::domain::{ItemId, SelectionSnapshot};

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Write the snapshot to the persistence collaborator.
    ///
    /// Emitted after each committed mutation when autosave is enabled.
    Persist(SelectionSnapshot),

    /// Tell the user an operation had no effect.
    ///
    /// The selection is unchanged; the presentation layer may shake or flash
    /// the affected list.
    Rejected(Rejection),
}

/// Locally recovered conditions surfaced to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// `add` was called for an item that is already selected.
    AlreadySelected(ItemId),
    /// A proposed order was not a permutation of the selection.
    InvalidPermutation(String),
    /// A move referenced an item that is not selected.
    InvalidMove(ItemId),
}
