//! Keyword heuristic for industry affiliations.

/// Commercial-entity keywords used when no custom set is given.
pub const DEFAULT_COMPANY_KEYWORDS: &[&str] = &["Inc", "Ltd", "Pharma", "Biotech", "Corporation"];

/// Flags affiliations that contain any of a fixed set of keywords.
///
/// Matching is a case-sensitive substring test: `"XYZ Biotech Corp"` matches
/// `"Biotech"`, `"biotech solutions"` does not.
#[derive(Debug, Clone)]
pub struct AffiliationClassifier {
    keywords: Vec<String>,
}

impl AffiliationClassifier {
    /// Create a classifier with a custom keyword set
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// Keywords in use
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Whether `affiliation` looks like a company
    pub fn is_non_academic(&self, affiliation: &str) -> bool {
        self.keywords.iter().any(|k| affiliation.contains(k.as_str()))
    }
}

impl Default for AffiliationClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_COMPANY_KEYWORDS.iter().copied())
    }
}
