//! ESearch: resolve a query to a bounded list of PubMed IDs.

use crate::client::EutilsClient;
use crate::error::Result;
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Debug, Default, Deserialize)]
struct ESearchResponse {
    #[serde(default)]
    esearchresult: ESearchResult,
}

#[derive(Debug, Default, Deserialize)]
struct ESearchResult {
    #[serde(default)]
    idlist: Vec<String>,
}

/// Search PubMed and return matching IDs in API order.
///
/// At most `max_results` IDs are returned. A response without an
/// `esearchresult.idlist` yields an empty list.
///
/// # Errors
///
/// Returns error on transport failure, non-success status, or a body that is
/// not JSON.
pub async fn search(client: &EutilsClient, query: &str) -> Result<Vec<String>> {
    let config = client.config();
    let retmax = config.max_results.to_string();

    info!(query = query, retmax = config.max_results, "Searching PubMed");

    let response: ESearchResponse = client
        .get_json(
            config.search_url()?,
            &[
                ("db", config.database.as_str()),
                ("term", query),
                ("retmode", "json"),
                ("retmax", retmax.as_str()),
            ],
        )
        .await?;

    let mut ids = response.esearchresult.idlist;
    ids.truncate(config.max_results);

    debug!(ids = ?ids, "Fetched paper IDs");
    info!(count = ids.len(), "Search complete");
    Ok(ids)
}
