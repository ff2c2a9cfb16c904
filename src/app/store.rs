//! Selection store: the single source of truth for the ordered selection.
//!
//! The store is constructed explicitly and owned by the ranking session. Its
//! only mutators are [`SelectionStore::add`], [`SelectionStore::remove`],
//! [`SelectionStore::reorder`] and [`SelectionStore::clear`]. Consumers read
//! immutable [`SelectionSnapshot`]s, either on demand or through a
//! subscription that fires synchronously after every successful mutation.
//!
//! # Notification Rules
//!
//! - Every successful mutation fires exactly one notification per subscriber
//! - No-op calls (duplicate add, removing an absent item, clearing an empty
//!   selection) and failed calls fire none
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use topten::app::SelectionStore;
//! use topten::domain::ItemId;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//!
//! let mut store = SelectionStore::new();
//! store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.len()));
//!
//! assert!(store.add(ItemId::from("A")));
//! assert!(!store.add(ItemId::from("A")));
//! assert_eq!(*seen.borrow(), vec![1]);
//! ```

use crate::domain::{ItemId, Result, SelectionSnapshot, TopTenError};
use std::collections::HashSet;
use std::fmt;

/// Callback invoked with the new snapshot after a successful mutation.
pub type Subscriber = Box<dyn FnMut(&SelectionSnapshot)>;

/// Handle returned by [`SelectionStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered set of selected item identifiers.
pub struct SelectionStore {
    order: Vec<ItemId>,
    /// Count of successful mutations, carried on every snapshot.
    version: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl SelectionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            version: 0,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Creates a store seeded with `ids`, keeping the first occurrence of any
    /// repeated identifier.
    ///
    /// Used to restore a persisted selection before anyone subscribes; seeding
    /// does not count as a mutation.
    #[must_use]
    pub fn with_order(ids: impl IntoIterator<Item = ItemId>) -> Self {
        let mut seen = HashSet::new();
        let order: Vec<ItemId> = ids
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect();

        tracing::debug!(count = order.len(), "selection store seeded");

        Self {
            order,
            ..Self::new()
        }
    }

    /// Returns an immutable copy of the current selection.
    #[must_use]
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot::new(self.order.clone(), self.version)
    }

    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.order.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Appends `id` if it is not already selected.
    ///
    /// Returns `false` when the item was already present; that is a no-op, not
    /// an error.
    pub fn add(&mut self, id: ItemId) -> bool {
        let _span = tracing::debug_span!("store_add", id = %id).entered();

        if self.order.contains(&id) {
            tracing::debug!("item already selected");
            return false;
        }

        self.order.push(id);
        self.commit();
        true
    }

    /// Removes `id` wherever it occurs. Returns whether anything was removed.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let _span = tracing::debug_span!("store_remove", id = %id).entered();

        let Some(index) = self.order.iter().position(|entry| entry == id) else {
            tracing::debug!("item not selected");
            return false;
        };

        self.order.remove(index);
        self.commit();
        true
    }

    /// Replaces the selection with `new_order`.
    ///
    /// # Errors
    ///
    /// Returns [`TopTenError::InvalidPermutation`] if `new_order` is not a
    /// permutation of the current identifiers. The selection is left unchanged
    /// and no notification fires.
    pub fn reorder(&mut self, new_order: Vec<ItemId>) -> Result<()> {
        let _span = tracing::debug_span!("store_reorder",
            current = self.order.len(),
            proposed = new_order.len()
        ).entered();

        validate_permutation(&self.order, &new_order)?;

        self.order = new_order;
        self.commit();
        Ok(())
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        let _span = tracing::debug_span!("store_clear", count = self.order.len()).entered();

        if self.order.is_empty() {
            return;
        }

        self.order.clear();
        self.commit();
    }

    /// Registers `callback` to receive a snapshot after each successful mutation.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&SelectionSnapshot) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        tracing::debug!(subscription = id.0, "subscriber registered");
        id
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        before != self.subscribers.len()
    }

    fn commit(&mut self) {
        self.version += 1;
        let snapshot = self.snapshot();

        tracing::debug!(
            version = self.version,
            len = snapshot.len(),
            subscribers = self.subscribers.len(),
            "selection committed"
        );

        for (_, callback) in &mut self.subscribers {
            callback(&snapshot);
        }
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionStore")
            .field("order", &self.order)
            .field("version", &self.version)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Checks that `proposed` holds exactly the identifiers of `current`, once each.
fn validate_permutation(current: &[ItemId], proposed: &[ItemId]) -> Result<()> {
    let current_set: HashSet<&ItemId> = current.iter().collect();
    let mut seen: HashSet<&ItemId> = HashSet::with_capacity(proposed.len());
    let mut duplicated = Vec::new();
    let mut unexpected = Vec::new();

    for id in proposed {
        if !seen.insert(id) {
            duplicated.push(id);
        } else if !current_set.contains(id) {
            unexpected.push(id);
        }
    }

    let missing: Vec<&ItemId> = current.iter().filter(|id| !seen.contains(id)).collect();

    if missing.is_empty() && unexpected.is_empty() && duplicated.is_empty() {
        return Ok(());
    }

    let mut problems = Vec::new();
    for (label, ids) in [("missing", &missing), ("unexpected", &unexpected), ("duplicated", &duplicated)] {
        if !ids.is_empty() {
            let joined = ids.iter().map(|id| id.as_str()).collect::<Vec<_>>().join(", ");
            problems.push(format!("{label} [{joined}]"));
        }
    }

    let message = problems.join("; ");
    tracing::debug!(reason = %message, "reorder rejected");
    Err(TopTenError::InvalidPermutation(message))
}
