//! Dataset metadata.

use serde::{Deserialize, Serialize};

/// Descriptive metadata for a dataset: provenance, not payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// Short dataset name.
    pub name: String,
    /// Catalog entry version.
    pub version: String,
    /// One-paragraph description.
    pub description: String,
    /// Home page of the upstream distribution.
    pub homepage: String,
    /// BibTeX citation, when the upstream requests one.
    pub citation: Option<String>,
}

impl DatasetInfo {
    /// Create metadata without a citation.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        description: impl Into<String>,
        homepage: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: description.into(),
            homepage: homepage.into(),
            citation: None,
        }
    }

    /// Attach a BibTeX citation.
    #[must_use]
    pub fn with_citation(mut self, citation: impl Into<String>) -> Self {
        self.citation = Some(citation.into());
        self
    }
}
