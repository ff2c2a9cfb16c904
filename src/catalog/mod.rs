//! Read-only catalog of selectable items.
//!
//! The catalog maps an [`ItemId`] to the item's display attributes. The
//! selection engine never mutates it and never requires an id to be present
//! in it: an id without an entry simply cannot be rendered.
//!
//! # Search
//!
//! [`Catalog::search`] filters items with a multi-token fuzzy query. The query
//! is split on whitespace and lower-cased; every token must fuzzy-match the
//! item's title, affiliation, domain or tags. Results are ordered by combined
//! score, ties keeping catalog order.

pub mod memory;

pub use memory::InMemoryCatalog;

use crate::domain::{Item, ItemId};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Read-only lookup of item display data.
pub trait Catalog {
    /// Returns the item for `id`, or `None` if the catalog has no such entry.
    fn get(&self, id: &ItemId) -> Option<&Item>;

    /// All items in catalog order.
    fn items(&self) -> Vec<&Item>;

    /// Items matching `query`, best match first. An empty query returns every
    /// item in catalog order.
    fn search(&self, query: &str) -> Vec<&Item> {
        let _span = tracing::debug_span!("catalog_search", query_len = query.len()).entered();

        let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        if tokens.is_empty() {
            return self.items();
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, usize, &Item)> = self
            .items()
            .into_iter()
            .enumerate()
            .filter_map(|(position, item)| {
                let haystack = item.search_haystack();
                tokens
                    .iter()
                    .map(|token| matcher.fuzzy_match(&haystack, token))
                    .sum::<Option<i64>>()
                    .map(|score| (score, position, item))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        tracing::debug!(matched = scored.len(), "catalog search complete");
        scored.into_iter().map(|(_, _, item)| item).collect()
    }
}
