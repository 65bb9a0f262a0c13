//! Shared HTTP client for the E-utilities endpoints.
//!
//! Every request is a single GET with no retry: a non-success status is
//! turned into [`PubmedError::Api`] and handed back to the caller.

use crate::config::EutilsConfig;
use crate::error::{PubmedError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// HTTP client bound to one [`EutilsConfig`].
#[derive(Debug, Clone)]
pub struct EutilsClient {
    client: Client,
    config: EutilsConfig,
}

impl EutilsClient {
    /// Create a new client from configuration
    pub fn new(config: EutilsConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| PubmedError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Active configuration
    pub fn config(&self) -> &EutilsConfig {
        &self.config
    }

    /// GET `url` with query parameters and return the body as text.
    pub async fn get_text(&self, url: Url, params: &[(&str, &str)]) -> Result<String> {
        debug!(url = %url, params = ?params, "GET");

        let response = self.client.get(url.clone()).query(params).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "E-utilities request failed");
            return Err(PubmedError::Api {
                code: status.as_u16(),
                message: format!("{} returned {}", url.path(), status),
            });
        }

        Ok(response.text().await?)
    }

    /// GET `url` and decode the body as JSON.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let body = self.get_text(url, params).await?;
        Ok(serde_json::from_str(&body)?)
    }
}
