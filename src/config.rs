//! E-utilities endpoint configuration.
//!
//! Everything the pipeline needs to know about the remote service lives in
//! [`EutilsConfig`], so tests can point it at a mock server.

use crate::error::{PubmedError, Result};
use std::time::Duration;
use url::Url;

/// Default E-utilities base URL.
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/";

/// Database queried on every endpoint.
pub const DEFAULT_DATABASE: &str = "pubmed";

/// Search result cap sent as `retmax`.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Endpoint paths, relative to the base URL.
pub mod endpoints {
    pub const SEARCH: &str = "esearch.fcgi";
    pub const SUMMARY: &str = "esummary.fcgi";
    pub const FETCH: &str = "efetch.fcgi";
}

/// Connection settings for the E-utilities API.
#[derive(Debug, Clone)]
pub struct EutilsConfig {
    /// Base URL all endpoints are joined onto (always ends with `/`).
    pub base_url: Url,
    /// Entrez database name.
    pub database: String,
    /// Maximum number of search hits kept.
    pub max_results: usize,
    /// Number of MEDLINE records fetched at once (1 = strictly sequential).
    pub concurrency: usize,
    /// Per-request timeout; `None` keeps the transport default.
    pub request_timeout: Option<Duration>,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl EutilsConfig {
    /// Build a configuration rooted at a custom base URL.
    ///
    /// A missing trailing slash is added so endpoint joins stay under the
    /// given path.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| PubmedError::Config(format!("Invalid base URL {:?}: {}", base_url, e)))?;

        Ok(Self {
            base_url,
            ..Self::default()
        })
    }

    /// Set the record fetch concurrency. Zero is rejected.
    pub fn concurrency(mut self, concurrency: usize) -> Result<Self> {
        if concurrency == 0 {
            return Err(PubmedError::Config(
                "concurrency must be at least 1".to_string(),
            ));
        }
        self.concurrency = concurrency;
        Ok(self)
    }

    /// ESearch endpoint URL
    pub fn search_url(&self) -> Result<Url> {
        self.endpoint(endpoints::SEARCH)
    }

    /// ESummary endpoint URL
    pub fn summary_url(&self) -> Result<Url> {
        self.endpoint(endpoints::SUMMARY)
    }

    /// EFetch endpoint URL
    pub fn fetch_url(&self) -> Result<Url> {
        self.endpoint(endpoints::FETCH)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| PubmedError::Config(format!("Invalid endpoint {}: {}", path, e)))
    }
}

impl Default for EutilsConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            database: DEFAULT_DATABASE.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            concurrency: 1,
            request_timeout: None,
            user_agent: format!("rustpubmed/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() -> Result<()> {
        let config = EutilsConfig::default();
        assert_eq!(
            config.search_url()?.as_str(),
            "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi"
        );
        assert_eq!(
            config.fetch_url()?.as_str(),
            "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi"
        );
        assert_eq!(config.max_results, 10);
        assert_eq!(config.database, "pubmed");
        Ok(())
    }

    #[test]
    fn test_base_url_without_trailing_slash() -> Result<()> {
        let config = EutilsConfig::with_base_url("http://127.0.0.1:8080/mirror")?;
        assert_eq!(
            config.summary_url()?.as_str(),
            "http://127.0.0.1:8080/mirror/esummary.fcgi"
        );
        Ok(())
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            EutilsConfig::with_base_url("not a url"),
            Err(PubmedError::Config(_))
        ));
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let result = EutilsConfig::default().concurrency(0);
        assert!(matches!(result, Err(PubmedError::Config(_))));
    }
}
