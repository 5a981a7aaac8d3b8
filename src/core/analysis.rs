use serde::{Deserialize, Serialize};

use crate::core::types::{AnalysisName, CatalogField};

/// A known analysis in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Unique identifier
    pub name: AnalysisName,

    /// Data fields this analysis needs as input
    pub required_data: Vec<String>,

    /// What the analysis does and why you'd run it
    pub description: String,

    /// Business goals this analysis serves
    pub use_cases: Vec<String>,

    /// Links to background reading
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub more_info: Vec<String>,

    /// Links to worked examples
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

impl AnalysisRecord {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: AnalysisName::new(name),
            required_data: Vec::new(),
            description: description.into(),
            use_cases: Vec::new(),
            more_info: Vec::new(),
            examples: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_required_data<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_data = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_use_cases<I, S>(mut self, cases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.use_cases = cases.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_more_info<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.more_info = links.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_examples<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = links.into_iter().map(Into::into).collect();
        self
    }

    /// The labels in the given field, in catalog order
    #[must_use]
    pub fn field(&self, field: CatalogField) -> &[String] {
        match field {
            CatalogField::RequiredData => &self.required_data,
            CatalogField::UseCases => &self.use_cases,
        }
    }
}
