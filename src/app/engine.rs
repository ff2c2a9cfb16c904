//! Reorder engine: the pure transform behind every drag-and-drop move.
//!
//! Given the current ranked and overflow slices and a [`MoveIntent`], the engine
//! computes the next full selection order. It never touches the store; the
//! caller commits the result through `SelectionStore::reorder`.
//!
//! # Algorithm
//!
//! 1. Remove the moving item from whichever slice currently holds it
//! 2. Find the insertion index in the destination slice: before the anchor if
//!    the anchor is in that slice, otherwise at the end
//! 3. Insert the moving item
//! 4. Spillover: if the ranked slice now holds more than [`RANKED_CAPACITY`]
//!    entries, its last entry moves to the front of the overflow slice
//! 5. Concatenate ranked and overflow
//!
//! A single insertion can exceed capacity by at most one, so spillover runs
//! once per move.
//!
//! # Example
//!
//! ```
//! use topten::app::engine::apply_move;
//! use topten::domain::{Container, ItemId, MoveIntent};
//!
//! let ranked: Vec<ItemId> = ["A", "B"].into_iter().map(ItemId::from).collect();
//! let overflow = vec![ItemId::from("C")];
//! let intent = MoveIntent::append("C", Container::Overflow, Container::Ranked);
//!
//! let outcome = apply_move(&ranked, &overflow, &intent)?;
//! assert_eq!(outcome.ranked, vec![ItemId::from("A"), ItemId::from("B"), ItemId::from("C")]);
//! assert!(outcome.overflow.is_empty());
//! assert!(outcome.spilled.is_none());
//! # Ok::<(), topten::TopTenError>(())
//! ```

use crate::domain::{Container, ItemId, MoveIntent, Result, TopTenError, RANKED_CAPACITY};

/// Result of applying a move intent.
///
/// `ranked` and `overflow` are the engine's working lists after the move. The
/// committed selection is their concatenation, see [`MoveOutcome::order`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub ranked: Vec<ItemId>,
    pub overflow: Vec<ItemId>,
    /// Item demoted from the tail of the ranked list, if capacity was exceeded.
    pub spilled: Option<ItemId>,
}

impl MoveOutcome {
    /// New full selection order, ranked entries first.
    #[must_use]
    pub fn order(&self) -> Vec<ItemId> {
        self.ranked.iter().chain(&self.overflow).cloned().collect()
    }

    #[must_use]
    pub fn into_order(self) -> Vec<ItemId> {
        let mut order = self.ranked;
        order.extend(self.overflow);
        order
    }
}

/// Splits a full selection order into its ranked and overflow slices.
#[must_use]
pub fn split_ranked(order: &[ItemId]) -> (&[ItemId], &[ItemId]) {
    order.split_at(order.len().min(RANKED_CAPACITY))
}

/// Applies `intent` to the given slices.
///
/// The item is removed from wherever it actually sits; `intent.source` is
/// informational and a mismatch is only logged. An intent anchored on its own
/// item leaves both slices as they were.
///
/// # Errors
///
/// Returns [`TopTenError::InvalidMove`] if the moving item is in neither slice.
pub fn apply_move(ranked: &[ItemId], overflow: &[ItemId], intent: &MoveIntent) -> Result<MoveOutcome> {
    let _span = tracing::debug_span!("apply_move",
        moving_id = %intent.moving_id,
        source = intent.source.as_str(),
        dest = intent.dest.as_str(),
        anchor = ?intent.anchor.as_ref().map(ItemId::as_str)
    ).entered();

    let mut working_ranked = ranked.to_vec();
    let mut working_overflow = overflow.to_vec();

    let actual_source = if remove_from(&mut working_ranked, &intent.moving_id) {
        Container::Ranked
    } else if remove_from(&mut working_overflow, &intent.moving_id) {
        Container::Overflow
    } else {
        tracing::debug!("moving item not in selection");
        return Err(TopTenError::InvalidMove(intent.moving_id.clone()));
    };

    if intent.anchor.as_ref() == Some(&intent.moving_id) {
        tracing::debug!("item anchored on itself, order kept");
        return Ok(MoveOutcome {
            ranked: ranked.to_vec(),
            overflow: overflow.to_vec(),
            spilled: None,
        });
    }

    if actual_source != intent.source {
        tracing::debug!(
            actual_source = actual_source.as_str(),
            "intent source does not match item location"
        );
    }

    let dest_list = match intent.dest {
        Container::Ranked => &mut working_ranked,
        Container::Overflow => &mut working_overflow,
    };

    let index = intent
        .anchor
        .as_ref()
        .and_then(|anchor| dest_list.iter().position(|id| id == anchor))
        .unwrap_or(dest_list.len());
    dest_list.insert(index, intent.moving_id.clone());

    let spilled = if working_ranked.len() > RANKED_CAPACITY {
        working_ranked.pop().map(|bumped| {
            working_overflow.insert(0, bumped.clone());
            bumped
        })
    } else {
        None
    };

    tracing::debug!(
        insert_index = index,
        spilled = ?spilled.as_ref().map(ItemId::as_str),
        ranked_len = working_ranked.len(),
        overflow_len = working_overflow.len(),
        "move applied"
    );

    Ok(MoveOutcome {
        ranked: working_ranked,
        overflow: working_overflow,
        spilled,
    })
}

/// Total form of [`apply_move`]: an invalid move yields the input order unchanged.
#[must_use]
pub fn apply_move_or_keep(ranked: &[ItemId], overflow: &[ItemId], intent: &MoveIntent) -> Vec<ItemId> {
    apply_move(ranked, overflow, intent).map_or_else(
        |_| ranked.iter().chain(overflow).cloned().collect(),
        MoveOutcome::into_order,
    )
}

fn remove_from(list: &mut Vec<ItemId>, id: &ItemId) -> bool {
    list.iter()
        .position(|entry| entry == id)
        .map(|index| list.remove(index))
        .is_some()
}
