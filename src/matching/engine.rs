use std::collections::{BTreeSet, HashSet};

use crate::catalog::store::AnalysisCatalog;
use crate::core::types::{AnalysisName, CatalogField};

/// Toggles controlling how a search is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchOptions {
    /// Intersect data matches with use-case matches instead of taking
    /// their union
    pub combine_search: bool,

    /// Match analyses the user has only part of the required data for
    /// (any-overlap instead of full coverage)
    pub show_incomplete: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            combine_search: false,
            show_incomplete: true,
        }
    }
}

/// What the user currently has selected. Rebuilt on every interaction,
/// never persisted.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Data fields the user has available
    pub data: HashSet<String>,

    /// Use cases the user is interested in
    pub use_cases: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_data<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data = labels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_use_cases<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.use_cases = labels.into_iter().map(Into::into).collect();
        self
    }
}

/// The catalog matcher.
///
/// A pure function of (catalog, selection, options): no I/O, no hidden
/// state, safe to re-run on every input change.
pub struct Matcher<'a> {
    catalog: &'a AnalysisCatalog,
    options: MatchOptions,
}

impl<'a> Matcher<'a> {
    /// Create a matcher with default options
    pub fn new(catalog: &'a AnalysisCatalog) -> Self {
        Self {
            catalog,
            options: MatchOptions::default(),
        }
    }

    /// Create a matcher with explicit options
    pub fn with_options(catalog: &'a AnalysisCatalog, options: MatchOptions) -> Self {
        Self { catalog, options }
    }

    /// Names of analyses whose `field` list is fully covered by `selected`.
    ///
    /// An empty field list is vacuously covered, so such a record always
    /// matches.
    pub fn match_all(
        &self,
        selected: &HashSet<String>,
        field: CatalogField,
    ) -> BTreeSet<AnalysisName> {
        self.catalog
            .analyses
            .iter()
            .filter(|record| record.field(field).iter().all(|label| selected.contains(label)))
            .map(|record| record.name.clone())
            .collect()
    }

    /// Names of analyses whose `field` list overlaps `selected` at all.
    ///
    /// An empty field list has nothing to overlap and never matches;
    /// an empty `selected` set matches nothing.
    pub fn match_any(
        &self,
        selected: &HashSet<String>,
        field: CatalogField,
    ) -> BTreeSet<AnalysisName> {
        self.catalog
            .analyses
            .iter()
            .filter(|record| record.field(field).iter().any(|label| selected.contains(label)))
            .map(|record| record.name.clone())
            .collect()
    }

    /// Resolve a selection to the set of matching analyses, sorted by name.
    ///
    /// Data matches use any-overlap when `show_incomplete` is set, full
    /// coverage otherwise. Use-case matches always use any-overlap. In
    /// combine mode the two sets are intersected, but only when at least
    /// one use case matched; with no use-case matches the combine falls
    /// back to the union so an empty use-case selection never blanks out
    /// the data results.
    pub fn resolve(&self, selection: &Selection) -> Vec<AnalysisName> {
        let data_matches = if self.options.show_incomplete {
            self.match_any(&selection.data, CatalogField::RequiredData)
        } else {
            self.match_all(&selection.data, CatalogField::RequiredData)
        };

        let use_case_matches = self.match_any(&selection.use_cases, CatalogField::UseCases);

        let resolved: BTreeSet<AnalysisName> =
            if self.options.combine_search && !use_case_matches.is_empty() {
                data_matches.intersection(&use_case_matches).cloned().collect()
            } else {
                data_matches.union(&use_case_matches).cloned().collect()
            };

        resolved.into_iter().collect()
    }
}
