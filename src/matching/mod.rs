//! The catalog matcher.
//!
//! This module provides the core matching functionality:
//!
//! - [`Matcher`]: resolves a selection of data fields and use cases to
//!   the analyses that fit
//! - [`MatchOptions`]: the combine-search and show-incomplete toggles
//! - [`AnalysisView`]: per-match rendering data, including the
//!   required-data checklist
//!
//! ## Matching Rules
//!
//! Two predicates run over the catalog:
//!
//! 1. **Any-match**: the record's field list overlaps the selection.
//!    Used for use cases always, and for required data when incomplete
//!    matches are shown.
//! 2. **All-match**: the selection fully covers the record's field list.
//!    Used for required data when only complete matches are wanted.
//!
//! The data-match and use-case-match sets are then unioned, or
//! intersected in combine mode. Combine mode falls back to the union
//! when no use case matched, so selecting data without a use case never
//! hides everything.
//!
//! Results are deduplicated and sorted by name, so identical inputs
//! always render identically.

pub mod engine;
pub mod view;

pub use engine::{MatchOptions, Matcher, Selection};
pub use view::{build_views, AnalysisView, ChecklistItem};
