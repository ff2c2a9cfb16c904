//! Ranking session: wires the drag controller, reorder engine and store.
//!
//! [`RankingSession`] owns the single [`SelectionStore`] for one user session
//! and the [`DragController`] tracking the current gesture. A drop flows
//! through the session like this:
//!
//! ```text
//! DropTarget → DragController::end → MoveIntent → engine::apply_move
//!            → SelectionStore::reorder → subscribers
//! ```
//!
//! Everything runs synchronously; each call completes before the next event is
//! processed, so no locking is involved.

use super::drag::{CancelReason, DragController, DragOrigin, DragOutcome, DragState, DropTarget};
use super::engine::{self, MoveOutcome};
use super::store::{SelectionStore, SubscriptionId};
use crate::catalog::Catalog;
use crate::domain::{ItemId, MoveIntent, Result, SelectionSnapshot};
use crate::storage::SelectionRecord;
use crate::ui::viewmodel::{CatalogEntryView, RankingViewModel};

/// Effect of a finished drag gesture on the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropEffect {
    /// A new order was committed to the store.
    Committed {
        /// Item pushed from the ranked tail into overflow, if any.
        spilled: Option<ItemId>,
    },
    /// The dragged item was removed from the selection.
    Removed(ItemId),
    /// The move reproduced the existing order; nothing was committed.
    Unchanged,
    /// The gesture produced no move intent.
    Cancelled(CancelReason),
}

/// Central state container for one ranking session.
#[derive(Debug, Default)]
pub struct RankingSession {
    store: SelectionStore,
    drag: DragController,
    /// Whether the handler should emit `Persist` actions after mutations.
    pub autosave: bool,
}

impl RankingSession {
    /// Creates a session with an empty selection.
    #[must_use]
    pub fn new(autosave: bool) -> Self {
        Self {
            store: SelectionStore::new(),
            drag: DragController::new(),
            autosave,
        }
    }

    /// Creates a session seeded from a persisted record.
    #[must_use]
    pub fn restore(record: &SelectionRecord, autosave: bool) -> Self {
        tracing::debug!(count = record.order.len(), saved_at = record.saved_at, "restoring selection");
        Self {
            store: SelectionStore::with_order(record.order.iter().cloned()),
            drag: DragController::new(),
            autosave,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SelectionSnapshot {
        self.store.snapshot()
    }

    #[must_use]
    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.store.contains(id)
    }

    #[must_use]
    pub const fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    /// Registers a read-only consumer of selection snapshots.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&SelectionSnapshot) + 'static,
    {
        self.store.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Appends `id` to the selection. Returns `false` if it was already selected.
    pub fn add(&mut self, id: ItemId) -> bool {
        self.store.add(id)
    }

    pub fn remove(&mut self, id: &ItemId) -> bool {
        self.store.remove(id)
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Replaces the selection with a full permutation of it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPermutation` if `order` does not match the selection.
    pub fn reorder(&mut self, order: Vec<ItemId>) -> Result<()> {
        self.store.reorder(order)
    }

    pub fn begin_drag(&mut self, id: ItemId) -> DragOrigin {
        let selection = self.store.snapshot();
        self.drag.begin(id, &selection)
    }

    pub fn cancel_drag(&mut self) -> DropEffect {
        DropEffect::Cancelled(self.drag.cancel())
    }

    /// Finishes the current drag over `target` and commits the result.
    ///
    /// A catalog item dropped onto the selection is committed in two steps:
    /// subscribers first receive a snapshot with the item appended at the end,
    /// then one with the item at its drop position (unless that is the end).
    ///
    /// # Errors
    ///
    /// Returns `InvalidMove` if the dragged item left the selection while the
    /// drag was in flight. The selection is unchanged in that case.
    pub fn end_drag(&mut self, target: Option<&DropTarget>) -> Result<DropEffect> {
        let selection = self.store.snapshot();

        match self.drag.end(target, &selection) {
            DragOutcome::Cancelled(reason) => Ok(DropEffect::Cancelled(reason)),
            DragOutcome::Remove(id) => {
                if self.store.remove(&id) {
                    Ok(DropEffect::Removed(id))
                } else {
                    Ok(DropEffect::Unchanged)
                }
            }
            DragOutcome::Move(intent) => self.apply_intent(&intent),
            DragOutcome::Insert(intent) => {
                let added = self.store.add(intent.moving_id.clone());
                if !added {
                    tracing::debug!(id = %intent.moving_id, "catalog item was selected mid-drag");
                }
                match self.apply_intent(&intent)? {
                    DropEffect::Unchanged if added => Ok(DropEffect::Committed { spilled: None }),
                    effect => Ok(effect),
                }
            }
        }
    }

    /// Runs `intent` through the reorder engine and commits the new order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMove` if the intent's item is not selected.
    pub fn apply_intent(&mut self, intent: &MoveIntent) -> Result<DropEffect> {
        let selection = self.store.snapshot();
        let outcome = engine::apply_move(selection.ranked(), selection.overflow(), intent)?;
        self.commit(&selection, outcome)
    }

    fn commit(&mut self, selection: &SelectionSnapshot, outcome: MoveOutcome) -> Result<DropEffect> {
        let spilled = outcome.spilled.clone();
        let order = outcome.into_order();

        if order.as_slice() == selection.order() {
            tracing::debug!("move left order unchanged");
            return Ok(DropEffect::Unchanged);
        }

        self.store.reorder(order)?;
        Ok(DropEffect::Committed { spilled })
    }

    /// Builds the renderable view of the selection, resolving display data
    /// through `catalog`.
    #[must_use]
    pub fn compute_viewmodel(&self, catalog: &dyn Catalog) -> RankingViewModel {
        RankingViewModel::from_snapshot(&self.store.snapshot(), catalog)
    }

    /// Catalog entries matching `query`, flagged with their selection status.
    #[must_use]
    pub fn catalog_view(&self, catalog: &dyn Catalog, query: &str) -> Vec<CatalogEntryView> {
        catalog
            .search(query)
            .into_iter()
            .map(|item| CatalogEntryView::new(item, self.store.contains(&item.id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::drag::Region;
    use crate::domain::{Container, TopTenError, RANKED_CAPACITY};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ids(names: &[&str]) -> Vec<ItemId> {
        names.iter().map(|n| ItemId::from(*n)).collect()
    }

    fn session_with(names: &[&str]) -> RankingSession {
        let mut session = RankingSession::new(false);
        for id in ids(names) {
            session.add(id);
        }
        session
    }

    #[test]
    fn drag_from_overflow_before_ranked_item_spills() {
        let mut session = session_with(&["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K"]);

        session.begin_drag(ItemId::from("K"));
        let effect = session.end_drag(Some(&DropTarget::Item(ItemId::from("C")))).unwrap();

        assert_eq!(effect, DropEffect::Committed { spilled: Some(ItemId::from("J")) });
        let snapshot = session.snapshot();
        assert_eq!(snapshot.ranked(), &ids(&["A", "B", "K", "C", "D", "E", "F", "G", "H", "I"])[..]);
        assert_eq!(snapshot.overflow(), &ids(&["J"])[..]);
    }

    #[test]
    fn same_position_drop_commits_nothing() {
        let mut session = session_with(&["A", "B", "C"]);
        let version = session.snapshot().version();

        session.begin_drag(ItemId::from("B"));
        let effect = session.end_drag(Some(&DropTarget::Item(ItemId::from("C")))).unwrap();

        assert_eq!(effect, DropEffect::Unchanged);
        assert_eq!(session.snapshot().version(), version);
    }

    #[test]
    fn catalog_drag_inserts_at_anchor() {
        let mut session = session_with(&["A", "B"]);

        assert_eq!(session.begin_drag(ItemId::from("N")), DragOrigin::Catalog);
        let effect = session.end_drag(Some(&DropTarget::Item(ItemId::from("A")))).unwrap();

        assert_eq!(effect, DropEffect::Committed { spilled: None });
        assert_eq!(session.snapshot().order(), &ids(&["N", "A", "B"])[..]);
    }

    #[test]
    fn catalog_drag_onto_ranked_background_appends() {
        let mut session = session_with(&["A"]);

        session.begin_drag(ItemId::from("N"));
        let effect = session.end_drag(Some(&DropTarget::Region(Region::Ranked))).unwrap();

        assert_eq!(effect, DropEffect::Committed { spilled: None });
        assert_eq!(session.snapshot().order(), &ids(&["A", "N"])[..]);
    }

    #[test]
    fn catalog_drag_into_full_ranked_spills() {
        let mut session = session_with(&["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]);

        session.begin_drag(ItemId::from("N"));
        let effect = session.end_drag(Some(&DropTarget::Item(ItemId::from("A")))).unwrap();

        assert_eq!(effect, DropEffect::Committed { spilled: Some(ItemId::from("J")) });
        let snapshot = session.snapshot();
        assert_eq!(snapshot.ranked()[0], ItemId::from("N"));
        assert_eq!(snapshot.overflow(), &ids(&["J"])[..]);
    }

    #[test]
    fn drop_on_catalog_removes() {
        let mut session = session_with(&["A", "B"]);

        session.begin_drag(ItemId::from("A"));
        let effect = session.end_drag(Some(&DropTarget::Region(Region::Catalog))).unwrap();

        assert_eq!(effect, DropEffect::Removed(ItemId::from("A")));
        assert_eq!(session.snapshot().order(), &ids(&["B"])[..]);
    }

    #[test]
    fn item_removed_mid_drag_is_invalid_move() {
        let mut session = session_with(&["A", "B"]);

        session.begin_drag(ItemId::from("A"));
        session.remove(&ItemId::from("A"));
        let err = session.end_drag(Some(&DropTarget::Region(Region::Overflow))).unwrap_err();

        assert!(matches!(err, TopTenError::InvalidMove(_)));
        assert_eq!(session.snapshot().order(), &ids(&["B"])[..]);
    }

    #[test]
    fn apply_intent_rejects_unknown_item() {
        let mut session = session_with(&["A"]);
        let intent = MoveIntent::append("Z", Container::Overflow, Container::Ranked);

        assert!(session.apply_intent(&intent).is_err());
        assert_eq!(session.snapshot().order(), &ids(&["A"])[..]);
    }

    #[test]
    fn self_anchored_intent_commits_nothing() {
        let mut session = session_with(&["A", "B", "C"]);
        let version = session.snapshot().version();
        let intent = MoveIntent::before("A", Container::Ranked, Container::Ranked, "A");

        assert_eq!(session.apply_intent(&intent).unwrap(), DropEffect::Unchanged);
        assert_eq!(session.snapshot().order(), &ids(&["A", "B", "C"])[..]);
        assert_eq!(session.snapshot().version(), version);
    }

    #[test]
    fn demotion_from_full_ranked_promotes_overflow_head() {
        let mut session = session_with(&["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K"]);

        session.begin_drag(ItemId::from("A"));
        let effect = session.end_drag(Some(&DropTarget::Region(Region::Overflow))).unwrap();

        assert_eq!(effect, DropEffect::Committed { spilled: None });
        let snapshot = session.snapshot();
        assert_eq!(
            snapshot.order(),
            &ids(&["B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "A"])[..]
        );
        assert_eq!(snapshot.ranked().len(), RANKED_CAPACITY);
        assert_eq!(snapshot.overflow(), &ids(&["A"])[..]);
    }

    #[test]
    fn cancel_drag_reports_reason() {
        let mut session = session_with(&["A"]);

        assert_eq!(session.cancel_drag(), DropEffect::Cancelled(CancelReason::NotDragging));

        session.begin_drag(ItemId::from("A"));
        assert_eq!(session.cancel_drag(), DropEffect::Cancelled(CancelReason::Aborted));
        assert!(!session.drag_state().is_dragging());
    }

    #[test]
    fn catalog_drop_notifies_append_then_placement() {
        let mut session = session_with(&["A", "B"]);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        session.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.to_vec()));

        session.begin_drag(ItemId::from("N"));
        session.end_drag(Some(&DropTarget::Item(ItemId::from("A")))).unwrap();

        assert_eq!(*seen.borrow(), vec![ids(&["A", "B", "N"]), ids(&["N", "A", "B"])]);
    }

    #[test]
    fn restore_seeds_without_notifying() {
        let record = SelectionRecord::new(ids(&["B", "A", "B"]));
        let session = RankingSession::restore(&record, true);

        assert_eq!(session.snapshot().order(), &ids(&["B", "A"])[..]);
        assert_eq!(session.snapshot().version(), 0);
        assert!(session.autosave);
    }
}
