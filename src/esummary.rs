//! ESummary: per-paper title and publication date.
//!
//! The `result` object is kept as returned (response order, including the
//! reserved `"uids"` entry); [`PaperSummary`] reads the fields we need out of
//! a single entry with `"N/A"` defaults.

use crate::client::EutilsClient;
use crate::error::Result;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

/// Key in the ESummary `result` object that lists the IDs and is not a paper.
pub const RESERVED_UIDS_KEY: &str = "uids";

/// Placeholder for any missing value.
pub const NOT_AVAILABLE: &str = "N/A";

/// ESummary `result` object, keyed by PubMed ID plus `"uids"`.
pub type SummaryMap = Map<String, Value>;

#[derive(Debug, Default, Deserialize)]
struct ESummaryResponse {
    #[serde(default)]
    result: SummaryMap,
}

/// Title and publication date of one paper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperSummary {
    pub title: String,
    pub publication_date: String,
}

impl PaperSummary {
    /// Read a summary entry. Missing, empty, or non-string fields become `"N/A"`.
    pub fn from_entry(entry: Option<&Value>) -> Self {
        Self {
            title: string_field(entry, "title"),
            publication_date: string_field(entry, "pubdate"),
        }
    }

    /// Summary for `id`, all `"N/A"` when the response has no entry for it.
    pub fn lookup(summaries: &SummaryMap, id: &str) -> Self {
        Self::from_entry(summaries.get(id))
    }
}

fn string_field(entry: Option<&Value>, key: &str) -> String {
    entry
        .and_then(|e| e.get(key))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// Fetch summaries for `ids` in a single request.
///
/// An empty `ids` slice returns an empty map without touching the network.
/// IDs missing from the response are not reported.
pub async fn fetch_summaries(client: &EutilsClient, ids: &[String]) -> Result<SummaryMap> {
    if ids.is_empty() {
        debug!("No IDs, skipping summary request");
        return Ok(SummaryMap::new());
    }

    let config = client.config();
    let joined = ids.join(",");

    info!(count = ids.len(), "Fetching paper summaries");

    let response: ESummaryResponse = client
        .get_json(
            config.summary_url()?,
            &[
                ("db", config.database.as_str()),
                ("id", joined.as_str()),
                ("retmode", "json"),
            ],
        )
        .await?;

    let result = response.result;
    debug!(result = ?result, "Fetched paper details");
    Ok(result)
}
