//! User interface layer: view models and text rendering.
//!
//! The presentation itself is an external collaborator; this module provides
//! the display-ready data it renders from and a plain-text renderer used by the
//! binary.
//!
//! ```text
//! SelectionSnapshot + Catalog → RankingViewModel → render_ranking → text
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types for the ranked, overflow and catalog lists
//! - [`renderer`]: Plain-text rendering of view models

pub mod renderer;
pub mod viewmodel;

pub use renderer::{render_catalog, render_ranking};
pub use viewmodel::{CatalogEntryView, HeaderInfo, OverflowEntry, RankedEntry, RankingViewModel};
