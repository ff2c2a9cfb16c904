//! Selection snapshots, containers and move intents.
//!
//! A selection is one ordered sequence of unique [`ItemId`]s. The first
//! [`RANKED_CAPACITY`] entries form the ranked slice; everything after that is
//! the overflow slice. Both slices are views over the same sequence.

use super::item::ItemId;
use std::sync::Arc;

/// Maximum number of entries in the ranked slice.
pub const RANKED_CAPACITY: usize = 10;

/// One of the two containers a selected item can sit in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    /// The capped "top choices" list.
    Ranked,
    /// The uncapped list of additional selections.
    Overflow,
}

impl Container {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ranked => "ranked",
            Self::Overflow => "overflow",
        }
    }
}

/// Resolved description of a single drag-and-drop gesture.
///
/// Produced by the drag controller and consumed by the reorder engine. Never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveIntent {
    /// Item being moved.
    pub moving_id: ItemId,
    /// Container the item was dragged from.
    pub source: Container,
    /// Container the item was dropped into.
    pub dest: Container,
    /// Item the moving item is inserted before. `None` appends.
    pub anchor: Option<ItemId>,
}

impl MoveIntent {
    /// Intent that appends `moving_id` to the end of `dest`.
    pub fn append(moving_id: impl Into<ItemId>, source: Container, dest: Container) -> Self {
        Self {
            moving_id: moving_id.into(),
            source,
            dest,
            anchor: None,
        }
    }

    /// Intent that inserts `moving_id` immediately before `anchor` in `dest`.
    pub fn before(
        moving_id: impl Into<ItemId>,
        source: Container,
        dest: Container,
        anchor: impl Into<ItemId>,
    ) -> Self {
        Self {
            moving_id: moving_id.into(),
            source,
            dest,
            anchor: Some(anchor.into()),
        }
    }
}

/// Immutable copy of the selection taken after a committed mutation.
///
/// Cloning is cheap; the order is shared behind an `Arc` and can never be
/// mutated through a snapshot. `version` counts successful store mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    order: Arc<[ItemId]>,
    version: u64,
}

impl SelectionSnapshot {
    pub(crate) fn new(order: Vec<ItemId>, version: u64) -> Self {
        Self {
            order: order.into(),
            version,
        }
    }

    /// The empty selection at version 0.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }

    /// Full order, ranked entries first.
    #[must_use]
    pub fn order(&self) -> &[ItemId] {
        &self.order
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<ItemId> {
        self.order.to_vec()
    }

    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.order.contains(id)
    }

    /// The first `min(len, RANKED_CAPACITY)` entries.
    #[must_use]
    pub fn ranked(&self) -> &[ItemId] {
        &self.order[..self.order.len().min(RANKED_CAPACITY)]
    }

    /// Entries beyond the ranked capacity, in order.
    #[must_use]
    pub fn overflow(&self) -> &[ItemId] {
        &self.order[self.order.len().min(RANKED_CAPACITY)..]
    }

    #[must_use]
    pub fn position_of(&self, id: &ItemId) -> Option<usize> {
        self.order.iter().position(|entry| entry == id)
    }

    /// Container currently holding `id`, or `None` if it is not selected.
    #[must_use]
    pub fn container_of(&self, id: &ItemId) -> Option<Container> {
        self.position_of(id).map(|index| {
            if index < RANKED_CAPACITY {
                Container::Ranked
            } else {
                Container::Overflow
            }
        })
    }
}

impl Default for SelectionSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<ItemId> {
        names.iter().map(|n| ItemId::from(*n)).collect()
    }

    #[test]
    fn slices_split_at_capacity() {
        let names: Vec<String> = (0..13).map(|i| format!("i{i}")).collect();
        let order: Vec<ItemId> = names.iter().map(|n| ItemId::from(n.as_str())).collect();
        let snapshot = SelectionSnapshot::new(order, 3);

        assert_eq!(snapshot.ranked().len(), RANKED_CAPACITY);
        assert_eq!(snapshot.overflow(), &ids(&["i10", "i11", "i12"])[..]);
        assert_eq!(snapshot.container_of(&ItemId::from("i9")), Some(Container::Ranked));
        assert_eq!(snapshot.container_of(&ItemId::from("i10")), Some(Container::Overflow));
        assert_eq!(snapshot.container_of(&ItemId::from("zz")), None);
    }

    #[test]
    fn short_selection_has_no_overflow() {
        let snapshot = SelectionSnapshot::new(ids(&["A", "B"]), 1);
        assert_eq!(snapshot.ranked(), &ids(&["A", "B"])[..]);
        assert!(snapshot.overflow().is_empty());
    }
}
