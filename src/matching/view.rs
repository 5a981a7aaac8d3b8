use serde::Serialize;

use crate::catalog::store::AnalysisCatalog;
use crate::core::analysis::AnalysisRecord;
use crate::core::types::AnalysisName;
use crate::matching::engine::Selection;

/// One required-data entry with its checklist state
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistItem {
    pub label: String,

    /// Whether the label is in the user's data selection
    pub have: bool,
}

/// Rendering data for a matched analysis
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisView {
    pub name: AnalysisName,
    pub description: String,
    pub use_cases: Vec<String>,
    pub more_info: Vec<String>,
    pub examples: Vec<String>,

    /// Required data in catalog order, each item checked iff selected
    pub required_data: Vec<ChecklistItem>,
}

impl AnalysisView {
    pub fn build(record: &AnalysisRecord, selection: &Selection) -> Self {
        let required_data = record
            .required_data
            .iter()
            .map(|label| ChecklistItem {
                label: label.clone(),
                have: selection.data.contains(label),
            })
            .collect();

        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            use_cases: record.use_cases.clone(),
            more_info: record.more_info.clone(),
            examples: record.examples.clone(),
            required_data,
        }
    }

    /// How many required-data items the selection covers
    #[must_use]
    pub fn have_count(&self) -> usize {
        self.required_data.iter().filter(|item| item.have).count()
    }

    /// Whether the selection covers every required-data item
    #[must_use]
    pub fn complete(&self) -> bool {
        self.have_count() == self.required_data.len()
    }
}

/// Build views for resolved matches, in result order.
///
/// Skips names absent from the catalog; `resolve` only emits catalog
/// names, so nothing is skipped in practice.
pub fn build_views(
    catalog: &AnalysisCatalog,
    matches: &[AnalysisName],
    selection: &Selection,
) -> Vec<AnalysisView> {
    matches
        .iter()
        .filter_map(|name| catalog.get(name))
        .map(|record| AnalysisView::build(record, selection))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::engine::Matcher;

    #[test]
    fn test_checklist_marks_selected_data() {
        let catalog = AnalysisCatalog::load_embedded().unwrap();
        let selection = Selection::new().with_data(["Customer ID", "Order ID"]);
        let matcher = Matcher::new(&catalog);

        let matches = matcher.resolve(&selection);
        let views = build_views(&catalog, &matches, &selection);
        assert_eq!(views.len(), matches.len());

        let rfm = views
            .iter()
            .find(|v| v.name.as_str() == "RFM Analysis")
            .unwrap();
        assert_eq!(rfm.have_count(), 2);
        assert!(!rfm.complete());

        for item in &rfm.required_data {
            let expected = item.label == "Customer ID" || item.label == "Order ID";
            assert_eq!(item.have, expected, "checklist wrong for {}", item.label);
        }
    }

    #[test]
    fn test_checklist_preserves_catalog_order() {
        let catalog = AnalysisCatalog::load_embedded().unwrap();
        let selection = Selection::new().with_data(["Order ID"]);
        let record = catalog
            .get(&AnalysisName::new("Market Basket Analysis"))
            .unwrap();

        let view = AnalysisView::build(record, &selection);
        let labels: Vec<&str> = view
            .required_data
            .iter()
            .map(|item| item.label.as_str())
            .collect();
        assert_eq!(labels, ["Product Name", "Product Quantity", "Order ID"]);
    }

    #[test]
    fn test_complete_when_all_selected() {
        let catalog = AnalysisCatalog::load_embedded().unwrap();
        let selection =
            Selection::new().with_data(["Product Name", "Product Quantity", "Order ID"]);
        let record = catalog
            .get(&AnalysisName::new("Market Basket Analysis"))
            .unwrap();

        let view = AnalysisView::build(record, &selection);
        assert!(view.complete());
    }
}
