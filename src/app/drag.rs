//! Drag session controller.
//!
//! A small state machine that turns the two gesture events (drag-start and
//! drag-end with a resolved target) into at most one discrete outcome per
//! gesture.
//!
//! # State Machine
//!
//! ```text
//!            begin(id)
//!   Idle ─────────────────▶ Dragging { active, origin }
//!    ▲                              │
//!    └──── end(target) / cancel() ──┘
//! ```
//!
//! # Drop Target Classification
//!
//! On drop the controller classifies the target three ways:
//! - **Item**: destination is that item's current container, anchored on it
//! - **Region**: destination is that container, no anchor (append)
//! - **Nothing**: the gesture is cancelled
//!
//! Dropping an item onto itself is a no-op. Dragging out of the catalog grid
//! inserts a new selection entry, and dragging a selected item back onto the
//! catalog region removes it.

use crate::domain::{Container, ItemId, MoveIntent, SelectionSnapshot};

/// Where the active drag started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOrigin {
    /// A selected item, dragged out of the ranked or overflow list.
    Selection(Container),
    /// An unselected item dragged out of the catalog grid.
    Catalog,
}

/// Drop regions a gesture source can report when the pointer is released over
/// a container's background rather than over an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Ranked,
    Overflow,
    /// The catalog grid the items are picked from.
    Catalog,
}

/// What the pointer was released over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// A specific selected item.
    Item(ItemId),
    /// The background of a drop region.
    Region(Region),
}

/// Why a gesture produced no change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// Released outside every recognized target.
    OutsideTargets,
    /// Released over an item that is not part of the selection.
    UnrecognizedTarget,
    /// Released onto the dragged item itself.
    DroppedOnSelf,
    /// Catalog item released back over the catalog.
    NoChange,
    /// The gesture source aborted the drag.
    Aborted,
    /// A drop arrived with no drag in progress.
    NotDragging,
}

/// Result of finishing a gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// Reposition an already selected item.
    Move(MoveIntent),
    /// Add a catalog item to the selection, then place it per the intent.
    Insert(MoveIntent),
    /// Remove a selected item that was dropped on the catalog.
    Remove(ItemId),
    /// No change to the selection.
    Cancelled(CancelReason),
}

/// Controller state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { active: ItemId, origin: DragOrigin },
}

impl DragState {
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Tracks the in-flight drag and resolves drops into outcomes.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Starts dragging `id`. A drag already in progress is replaced.
    pub fn begin(&mut self, id: ItemId, selection: &SelectionSnapshot) -> DragOrigin {
        let origin = selection
            .container_of(&id)
            .map_or(DragOrigin::Catalog, DragOrigin::Selection);

        if let DragState::Dragging { active, .. } = &self.state {
            tracing::debug!(previous = %active, "replacing unfinished drag");
        }

        tracing::debug!(active = %id, origin = ?origin, "drag started");
        self.state = DragState::Dragging { active: id, origin };
        origin
    }

    /// Aborts the current drag without touching the selection.
    pub fn cancel(&mut self) -> CancelReason {
        if matches!(std::mem::take(&mut self.state), DragState::Idle) {
            return CancelReason::NotDragging;
        }
        tracing::debug!("drag cancelled");
        CancelReason::Aborted
    }

    /// Finishes the current drag over `target` and returns to `Idle`.
    ///
    /// `selection` is the committed selection at drop time; it decides which
    /// container an item target belongs to.
    pub fn end(&mut self, target: Option<&DropTarget>, selection: &SelectionSnapshot) -> DragOutcome {
        let DragState::Dragging { active, origin } = std::mem::take(&mut self.state) else {
            tracing::debug!("drop without active drag");
            return DragOutcome::Cancelled(CancelReason::NotDragging);
        };

        let _span = tracing::debug_span!("drag_end", active = %active, origin = ?origin, target = ?target).entered();

        let outcome = Self::resolve(active, origin, target, selection);
        tracing::debug!(outcome = ?outcome, "drop resolved");
        outcome
    }

    fn resolve(
        active: ItemId,
        origin: DragOrigin,
        target: Option<&DropTarget>,
        selection: &SelectionSnapshot,
    ) -> DragOutcome {
        let (dest, anchor) = match target {
            None => return DragOutcome::Cancelled(CancelReason::OutsideTargets),
            Some(DropTarget::Item(anchor)) => {
                if *anchor == active {
                    return DragOutcome::Cancelled(CancelReason::DroppedOnSelf);
                }
                let Some(container) = selection.container_of(anchor) else {
                    return DragOutcome::Cancelled(CancelReason::UnrecognizedTarget);
                };
                (container, Some(anchor.clone()))
            }
            Some(DropTarget::Region(Region::Ranked)) => (Container::Ranked, None),
            Some(DropTarget::Region(Region::Overflow)) => (Container::Overflow, None),
            Some(DropTarget::Region(Region::Catalog)) => {
                return match origin {
                    DragOrigin::Selection(_) => DragOutcome::Remove(active),
                    DragOrigin::Catalog => DragOutcome::Cancelled(CancelReason::NoChange),
                };
            }
        };

        match origin {
            DragOrigin::Selection(source) => DragOutcome::Move(MoveIntent {
                moving_id: active,
                source,
                dest,
                anchor,
            }),
            // Newly added items land at the end of the selection, which is the
            // overflow tail once the ranked list is full.
            DragOrigin::Catalog => DragOutcome::Insert(MoveIntent {
                moving_id: active,
                source: Container::Overflow,
                dest,
                anchor,
            }),
        }
    }
}
