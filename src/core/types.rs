use serde::{Deserialize, Serialize};

/// Unique identifier for an analysis in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnalysisName(pub String);

impl AnalysisName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AnalysisName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which record field a predicate or option listing runs over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogField {
    /// The data fields an analysis needs as input
    RequiredData,
    /// The business goals an analysis serves
    UseCases,
}

impl std::fmt::Display for CatalogField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequiredData => write!(f, "required data"),
            Self::UseCases => write!(f, "use cases"),
        }
    }
}
