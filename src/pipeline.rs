//! Search -> summaries -> MEDLINE records -> output rows.

use crate::classifier::AffiliationClassifier;
use crate::client::EutilsClient;
use crate::error::{PubmedError, Result};
use crate::esearch;
use crate::esummary::{self, PaperSummary, SummaryMap, RESERVED_UIDS_KEY};
use crate::export::OutputRow;
use crate::medline;
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info};

/// Run the whole pipeline for `query` and return one row per paper.
pub async fn run(
    client: &EutilsClient,
    query: &str,
    classifier: &AffiliationClassifier,
) -> Result<Vec<OutputRow>> {
    let ids = esearch::search(client, query).await?;
    let summaries = esummary::fetch_summaries(client, &ids).await?;
    collect_rows(client, &summaries, classifier).await
}

/// Fetch the MEDLINE record of every paper in `summaries` and classify its
/// authors.
///
/// Rows follow the order of `summaries`; the reserved `"uids"` entry is
/// skipped. Up to `concurrency` records are fetched at once.
pub async fn collect_rows(
    client: &EutilsClient,
    summaries: &SummaryMap,
    classifier: &AffiliationClassifier,
) -> Result<Vec<OutputRow>> {
    let ids: Vec<&str> = summaries
        .keys()
        .map(String::as_str)
        .filter(|id| *id != RESERVED_UIDS_KEY)
        .collect();
    let concurrency = client.config().concurrency.max(1);

    info!(
        papers = ids.len(),
        concurrency = concurrency,
        keywords = ?classifier.keywords(),
        "Fetching author records"
    );

    let rows: Vec<OutputRow> = stream::iter(ids)
        .map(|id| async move {
            let record = medline::fetch_record(client, id).await?;
            let summary = PaperSummary::lookup(summaries, id);
            let row = OutputRow::from_record(id, &summary, &record, classifier);
            debug!(row = ?row, "Processed paper");
            Ok::<_, PubmedError>(row)
        })
        .buffered(concurrency)
        .try_collect()
        .await?;

    let flagged = rows
        .iter()
        .filter(|r| r.non_academic_authors != esummary::NOT_AVAILABLE)
        .count();
    info!(papers = rows.len(), flagged = flagged, "Classification complete");
    Ok(rows)
}
