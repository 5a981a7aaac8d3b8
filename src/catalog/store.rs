use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use thiserror::Error;

use crate::core::analysis::AnalysisRecord;
use crate::core::types::{AnalysisName, CatalogField};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate analysis name in catalog: {0}")]
    DuplicateName(String),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub analyses: Vec<AnalysisRecord>,
}

/// The analysis catalog with option indexes.
///
/// Constructed once at startup and never mutated afterwards; every search
/// borrows it read-only.
#[derive(Debug)]
pub struct AnalysisCatalog {
    /// All known analyses
    pub analyses: Vec<AnalysisRecord>,

    /// Index: analysis name -> index in analyses vec
    name_to_index: HashMap<AnalysisName, usize>,

    /// Deduplicated union of required_data across all analyses
    data_options: BTreeSet<String>,

    /// Deduplicated union of use_cases across all analyses
    use_case_options: BTreeSet<String>,
}

impl AnalysisCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            analyses: Vec::new(),
            name_to_index: HashMap::new(),
            data_options: BTreeSet::new(),
            use_case_options: BTreeSet::new(),
        }
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time, validated by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/analyses.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                "Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION,
                data.version
            );
        }

        let mut catalog = Self::new();
        for record in data.analyses {
            catalog.add_analysis(record)?;
        }

        Ok(catalog)
    }

    /// Add an analysis to the catalog.
    ///
    /// Names are catalog keys; a duplicate is a construction error, not a
    /// runtime condition.
    pub fn add_analysis(&mut self, record: AnalysisRecord) -> Result<(), CatalogError> {
        if self.name_to_index.contains_key(&record.name) {
            return Err(CatalogError::DuplicateName(record.name.0.clone()));
        }

        let index = self.analyses.len();
        self.name_to_index.insert(record.name.clone(), index);

        for label in &record.required_data {
            self.data_options.insert(label.clone());
        }
        for label in &record.use_cases {
            self.use_case_options.insert(label.clone());
        }

        self.analyses.push(record);
        Ok(())
    }

    /// Get an analysis by name
    pub fn get(&self, name: &AnalysisName) -> Option<&AnalysisRecord> {
        self.name_to_index.get(name).map(|&idx| &self.analyses[idx])
    }

    /// The choices offered to the user for the given field: the
    /// deduplicated union of that field across all analyses, in
    /// lexicographic order.
    #[must_use]
    pub fn options(&self, field: CatalogField) -> &BTreeSet<String> {
        match field {
            CatalogField::RequiredData => &self.data_options,
            CatalogField::UseCases => &self.use_case_options,
        }
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            analyses: self.analyses.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of analyses in catalog
    pub fn len(&self) -> usize {
        self.analyses.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.analyses.is_empty()
    }
}

impl Default for AnalysisCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analysis::AnalysisRecord;

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = AnalysisCatalog::load_embedded().unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_catalog_get_by_name() {
        let catalog = AnalysisCatalog::load_embedded().unwrap();

        let rfm = catalog.get(&AnalysisName::new("RFM Analysis"));
        assert!(rfm.is_some());
        let rfm = rfm.unwrap();
        assert!(rfm.required_data.contains(&"Customer ID".to_string()));
        assert_eq!(rfm.use_cases, vec!["Personalized targeting"]);
    }

    #[test]
    fn test_catalog_get_nonexistent() {
        let catalog = AnalysisCatalog::load_embedded().unwrap();
        let result = catalog.get(&AnalysisName::new("Sentiment Analysis"));
        assert!(result.is_none());
    }

    #[test]
    fn test_options_are_field_unions() {
        let catalog = AnalysisCatalog::load_embedded().unwrap();

        // Every label in any record appears in the option set, and the
        // option set holds nothing else.
        for field in [CatalogField::RequiredData, CatalogField::UseCases] {
            let options = catalog.options(field);
            for record in &catalog.analyses {
                for label in record.field(field) {
                    assert!(options.contains(label), "missing option: {label}");
                }
            }
            for option in options {
                assert!(
                    catalog
                        .analyses
                        .iter()
                        .any(|r| r.field(field).contains(option)),
                    "stray option: {option}"
                );
            }
        }
    }

    #[test]
    fn test_options_deduplicated() {
        let catalog = AnalysisCatalog::load_embedded().unwrap();

        // "Customer ID" is required by three analyses but offered once
        let data = catalog.options(CatalogField::RequiredData);
        assert!(data.contains("Customer ID"));
        assert_eq!(data.len(), 7);

        // "Personalized targeting" is shared by two analyses
        let cases = catalog.options(CatalogField::UseCases);
        assert!(cases.contains("Personalized targeting"));
        assert_eq!(cases.len(), 9);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut catalog = AnalysisCatalog::new();
        catalog
            .add_analysis(AnalysisRecord::new("Market Basket Analysis", "first"))
            .unwrap();

        let err = catalog
            .add_analysis(AnalysisRecord::new("Market Basket Analysis", "second"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName(name) if name == "Market Basket Analysis"));
    }

    #[test]
    fn test_catalog_to_json_round_trip() {
        let catalog = AnalysisCatalog::load_embedded().unwrap();
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"analyses\""));

        let reloaded = AnalysisCatalog::from_json(&json).unwrap();
        assert_eq!(reloaded.len(), catalog.len());
        assert_eq!(
            reloaded.options(CatalogField::RequiredData),
            catalog.options(CatalogField::RequiredData)
        );
    }

    #[test]
    fn test_add_analysis() {
        let mut catalog = AnalysisCatalog::new();
        assert_eq!(catalog.len(), 0);

        let record = AnalysisRecord::new("Churn Prediction", "Predict churn.")
            .with_required_data(["Customer ID", "Last Login Date"])
            .with_use_cases(["Reduce churn"]);
        catalog.add_analysis(record).unwrap();
        assert_eq!(catalog.len(), 1);

        let retrieved = catalog.get(&AnalysisName::new("Churn Prediction"));
        assert!(retrieved.is_some());
        assert!(catalog
            .options(CatalogField::RequiredData)
            .contains("Last Login Date"));
    }
}
