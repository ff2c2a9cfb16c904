//! Plain-text rendering of view models.
//!
//! The renderer turns a [`RankingViewModel`] into a block of text suitable for
//! a terminal. Rendering is a pure function of the view model; printing is left
//! to the caller.
//!
//! # Example
//!
//! ```rust
//! use topten::app::RankingSession;
//! use topten::catalog::InMemoryCatalog;
//! use topten::ui::render_ranking;
//!
//! let session = RankingSession::new(false);
//! let text = render_ranking(&session.compute_viewmodel(&InMemoryCatalog::default()));
//! assert!(text.contains("0/10 ranked"));
//! ```

use crate::ui::viewmodel::{CatalogEntryView, RankingViewModel};
use std::fmt::Write;

/// Renders the ranked and overflow lists.
#[must_use]
pub fn render_ranking(vm: &RankingViewModel) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}  [{}]", vm.header.title, vm.header.ranked_count);
    for entry in &vm.ranked {
        let _ = write!(out, "  #{:<2} {} ({})", entry.rank, entry.title, entry.affiliation);
        if !entry.tags.is_empty() {
            let _ = write!(out, "  [{}]", entry.tags.join(", "));
        }
        out.push('\n');
    }
    for _ in 0..vm.empty_slots {
        out.push_str("  --  Empty Slot\n");
    }

    if !vm.overflow.is_empty() {
        out.push_str("Additional selections (not ranked yet)\n");
        for entry in &vm.overflow {
            let _ = writeln!(out, "  -   {} ({})", entry.title, entry.affiliation);
        }
    }

    if vm.unrenderable > 0 {
        let _ = writeln!(out, "({} selected item(s) not in catalog)", vm.unrenderable);
    }

    out
}

/// Renders catalog search results, marking entries that are already selected.
#[must_use]
pub fn render_catalog(entries: &[CatalogEntryView]) -> String {
    if entries.is_empty() {
        return "No matching items\n".to_string();
    }

    let mut out = String::new();
    for entry in entries {
        let marker = if entry.is_selected { "added" } else { "     " };
        let _ = writeln!(out, "  [{marker}] {:<16} {} ({})", entry.id, entry.title, entry.affiliation);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;
    use crate::ui::viewmodel::{HeaderInfo, OverflowEntry, RankedEntry};

    #[test]
    fn ranking_lists_cards_slots_and_overflow() {
        let vm = RankingViewModel {
            header: HeaderInfo {
                title: "Your Top 10 Choices (Ranked)".to_string(),
                ranked_count: "1/10 ranked".to_string(),
            },
            ranked: vec![RankedEntry {
                rank: 1,
                id: ItemId::from("a"),
                title: "Alpha".to_string(),
                affiliation: "Acme".to_string(),
                tags: vec!["Python".to_string()],
            }],
            empty_slots: 9,
            overflow: vec![OverflowEntry {
                id: ItemId::from("b"),
                title: "Beta".to_string(),
                affiliation: "Globex".to_string(),
            }],
            unrenderable: 0,
        };

        let text = render_ranking(&vm);

        assert!(text.contains("#1  Alpha (Acme)  [Python]"));
        assert_eq!(text.matches("Empty Slot").count(), 9);
        assert!(text.contains("Beta (Globex)"));
    }

    #[test]
    fn catalog_marks_selected_entries() {
        let entries = vec![CatalogEntryView {
            id: ItemId::from("a"),
            title: "Alpha".to_string(),
            affiliation: "Acme".to_string(),
            tags: vec![],
            is_selected: true,
        }];

        assert!(render_catalog(&entries).contains("[added] a"));
        assert_eq!(render_catalog(&[]), "No matching items\n");
    }
}
