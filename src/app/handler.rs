//! Event handling and state transition logic.
//!
//! This module translates gesture and list events into session calls and
//! collects the resulting side effects as [`Action`]s.
//!
//! # Architecture
//!
//! 1. Events arrive from the gesture source or the presentation layer
//! 2. [`handle_event`] pattern-matches the event type
//! 3. The session mutates the store through its own methods
//! 4. Actions are collected and returned for execution
//!
//! Rejected operations never surface as errors here. They leave the selection
//! untouched and come back as [`Action::Rejected`].
//!
//! # Example
//!
//! ```rust
//! use topten::app::{handle_event, Action, Event, RankingSession};
//! use topten::domain::ItemId;
//!
//! let mut session = RankingSession::new(true);
//! let (render, actions) = handle_event(&mut session, &Event::Add(ItemId::from("A")))?;
//! assert!(render);
//! assert!(matches!(actions.as_slice(), [Action::Persist(_)]));
//! # Ok::<(), topten::TopTenError>(())
//! ```

use super::actions::{Action, Rejection};
use super::drag::DropTarget;
use super::state::{DropEffect, RankingSession};
use crate::domain::{ItemId, Result, TopTenError};

/// Events triggered by the gesture source or list controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Adds an item to the end of the selection.
    Add(ItemId),
    /// Removes an item from the selection.
    Remove(ItemId),
    /// Empties the selection.
    Clear,
    /// Replaces the selection with a permutation of itself.
    Reorder(Vec<ItemId>),
    /// A drag gesture started on an item.
    DragStart(ItemId),
    /// The pointer was released, over a target or over nothing.
    DragEnd(Option<DropTarget>),
    /// The gesture source aborted the drag.
    DragCancel,
}

/// Processes an event, mutates the session, and returns actions to execute.
///
/// The boolean is `true` when the presentation should re-render: the selection
/// changed or the drag state did.
///
/// # Errors
///
/// Every condition the selection engine raises is recovered locally and
/// reported as [`Action::Rejected`]; the `Result` carries only unexpected
/// failures.
pub fn handle_event(session: &mut RankingSession, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let version_before = session.snapshot().version();
    let mut actions = Vec::new();

    let drag_changed = match event {
        Event::Add(id) => {
            if !session.add(id.clone()) {
                actions.push(Action::Rejected(Rejection::AlreadySelected(id.clone())));
            }
            false
        }
        Event::Remove(id) => {
            session.remove(id);
            false
        }
        Event::Clear => {
            session.clear();
            false
        }
        Event::Reorder(order) => {
            if let Err(err) = session.reorder(order.clone()) {
                actions.push(Action::Rejected(rejection_for(err)?));
            }
            false
        }
        Event::DragStart(id) => {
            session.begin_drag(id.clone());
            true
        }
        Event::DragEnd(target) => {
            match session.end_drag(target.as_ref()) {
                Ok(DropEffect::Committed { spilled: Some(bumped) }) => {
                    tracing::debug!(spilled = %bumped, "ranked tail moved to overflow");
                }
                Ok(effect) => {
                    tracing::debug!(effect = ?effect, "drop finished");
                }
                Err(err) => actions.push(Action::Rejected(rejection_for(err)?)),
            }
            true
        }
        Event::DragCancel => {
            session.cancel_drag();
            true
        }
    };

    let snapshot = session.snapshot();
    let committed = snapshot.version() != version_before;

    if committed && session.autosave {
        actions.push(Action::Persist(snapshot));
    }

    Ok((committed || drag_changed, actions))
}

/// Maps locally recoverable errors to rejections and passes everything else on.
fn rejection_for(err: TopTenError) -> Result<Rejection> {
    match err {
        TopTenError::InvalidPermutation(reason) => Ok(Rejection::InvalidPermutation(reason)),
        TopTenError::InvalidMove(id) => Ok(Rejection::InvalidMove(id)),
        other => Err(other),
    }
}
