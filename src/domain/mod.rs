//! Domain layer for the top ten selection engine.
//!
//! This module contains the core domain types, independent of any gesture
//! source, renderer or storage backend. The selection engine itself works only
//! on identifiers; item display data belongs to the catalog.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Item identifiers and catalog items
//! - [`selection`]: Containers, move intents and selection snapshots
//!
//! # Examples
//!
//! ```
//! use topten::domain::{Container, ItemId, MoveIntent};
//!
//! let intent = MoveIntent::before("K", Container::Overflow, Container::Ranked, "C");
//! assert_eq!(intent.anchor, Some(ItemId::from("C")));
//! ```

pub mod error;
pub mod item;
pub mod selection;

pub use error::{Result, TopTenError};
pub use item::{Item, ItemId};
pub use selection::{Container, MoveIntent, SelectionSnapshot, RANKED_CAPACITY};
