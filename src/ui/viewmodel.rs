//! View model types representing renderable selection state.
//!
//! View models are computed from a [`SelectionSnapshot`] and a [`Catalog`] and
//! contain display-ready data only. Identifiers without a catalog entry are
//! skipped and counted in `unrenderable`; they keep their rank slot so the
//! numbering of the remaining entries matches the committed order.

use crate::catalog::Catalog;
use crate::domain::{Item, ItemId, SelectionSnapshot, RANKED_CAPACITY};

/// Maximum number of tags shown on a ranked card.
const RANKED_TAG_LIMIT: usize = 3;

/// Complete view model of the ranking page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingViewModel {
    pub header: HeaderInfo,

    /// Renderable entries of the ranked slice, in rank order.
    pub ranked: Vec<RankedEntry>,

    /// Placeholder slots left in the ranked list.
    pub empty_slots: usize,

    /// Renderable entries of the overflow slice, in order.
    pub overflow: Vec<OverflowEntry>,

    /// Selected identifiers with no catalog entry.
    pub unrenderable: usize,
}

/// One card in the ranked list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    /// One-based rank.
    pub rank: usize,
    pub id: ItemId,
    pub title: String,
    pub affiliation: String,
    /// At most three tags.
    pub tags: Vec<String>,
}

/// One card in the overflow list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverflowEntry {
    pub id: ItemId,
    pub title: String,
    pub affiliation: String,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Fill indicator such as `"4/10 ranked"`.
    pub ranked_count: String,
}

/// A catalog card with its selection status.
///
/// Selected items are shown but cannot be dragged into the selection again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntryView {
    pub id: ItemId,
    pub title: String,
    pub affiliation: String,
    pub tags: Vec<String>,
    pub is_selected: bool,
}

impl CatalogEntryView {
    #[must_use]
    pub fn new(item: &Item, is_selected: bool) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            affiliation: item.affiliation.clone(),
            tags: item.tags.clone(),
            is_selected,
        }
    }
}

impl RankingViewModel {
    /// Builds the view model for `snapshot`, resolving items via `catalog`.
    #[must_use]
    pub fn from_snapshot(snapshot: &SelectionSnapshot, catalog: &dyn Catalog) -> Self {
        let _span = tracing::debug_span!("compute_viewmodel",
            selected = snapshot.len(),
            version = snapshot.version()
        ).entered();

        let ranked_slice = snapshot.ranked();
        let mut unrenderable = 0;

        let ranked: Vec<RankedEntry> = ranked_slice
            .iter()
            .enumerate()
            .filter_map(|(index, id)| {
                let Some(item) = catalog.get(id) else {
                    unrenderable += 1;
                    return None;
                };
                Some(RankedEntry {
                    rank: index + 1,
                    id: id.clone(),
                    title: item.title.clone(),
                    affiliation: item.affiliation.clone(),
                    tags: item.tags.iter().take(RANKED_TAG_LIMIT).cloned().collect(),
                })
            })
            .collect();

        let overflow: Vec<OverflowEntry> = snapshot
            .overflow()
            .iter()
            .filter_map(|id| {
                let Some(item) = catalog.get(id) else {
                    unrenderable += 1;
                    return None;
                };
                Some(OverflowEntry {
                    id: id.clone(),
                    title: item.title.clone(),
                    affiliation: item.affiliation.clone(),
                })
            })
            .collect();

        if unrenderable > 0 {
            tracing::debug!(unrenderable, "selected items missing from catalog");
        }

        Self {
            header: HeaderInfo {
                title: format!("Your Top {RANKED_CAPACITY} Choices (Ranked)"),
                ranked_count: format!("{}/{RANKED_CAPACITY} ranked", ranked_slice.len()),
            },
            ranked,
            empty_slots: RANKED_CAPACITY.saturating_sub(ranked_slice.len()),
            overflow,
            unrenderable,
        }
    }
}
