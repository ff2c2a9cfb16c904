//! Application layer: the selection reorder engine and its collaborators.
//!
//! This module sits between the gesture source (main.rs or any UI toolkit) and
//! the domain/storage layers. It implements the data flow of a drag-and-drop
//! ranking session.
//!
//! # Architecture
//!
//! ```text
//! Gesture Events → DragController → MoveIntent → engine → SelectionStore → Snapshots
//!                        ↑                                      │
//!                        └──────────── current snapshot ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`drag`]: Drag session state machine and drop target classification
//! - [`engine`]: Pure reorder transform with capacity spillover
//! - [`handler`]: Event processing and action collection
//! - [`state`]: Ranking session owning the store and the drag controller
//! - [`store`]: Selection store with snapshot subscriptions
//!
//! # Example
//!
//! ```rust
//! use topten::app::{handle_event, DropTarget, Event, RankingSession};
//! use topten::domain::ItemId;
//!
//! let mut session = RankingSession::new(false);
//! handle_event(&mut session, &Event::Add(ItemId::from("A")))?;
//! handle_event(&mut session, &Event::Add(ItemId::from("B")))?;
//! handle_event(&mut session, &Event::DragStart(ItemId::from("B")))?;
//! handle_event(&mut session, &Event::DragEnd(Some(DropTarget::Item(ItemId::from("A")))))?;
//!
//! assert_eq!(session.snapshot().ranked(), &[ItemId::from("B"), ItemId::from("A")]);
//! # Ok::<(), topten::TopTenError>(())
//! ```

pub mod actions;
pub mod drag;
pub mod engine;
pub mod handler;
pub mod state;
pub mod store;

pub use actions::{Action, Rejection};
pub use drag::{CancelReason, DragController, DragOrigin, DragOutcome, DragState, DropTarget, Region};
pub use engine::{apply_move, MoveOutcome};
pub use handler::{handle_event, Event};
pub use state::{DropEffect, RankingSession};
pub use store::{SelectionStore, SubscriptionId};
