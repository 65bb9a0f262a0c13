//! Output rows and CSV export.
//!
//! One [`OutputRow`] per paper, built from its summary and MEDLINE record.
//! The CSV document is rendered in memory and written to disk in one call,
//! so a failed run never leaves a partial file behind.

use crate::classifier::AffiliationClassifier;
use crate::error::Result;
use crate::esummary::{PaperSummary, NOT_AVAILABLE};
use crate::medline::MedlineRecord;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// CSV column order for the output file
pub const OUTPUT_COLUMNS: &[&str] = &[
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

/// One paper in the output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_email: String,
}

impl OutputRow {
    /// Build the row for one paper.
    ///
    /// Authors are checked in record order; every author whose affiliation
    /// matches the classifier is listed together with that affiliation.
    pub fn from_record(
        pubmed_id: &str,
        summary: &PaperSummary,
        record: &MedlineRecord,
        classifier: &AffiliationClassifier,
    ) -> Self {
        let mut authors = Vec::new();
        let mut companies = Vec::new();

        for author in &record.authors {
            let affiliation = record.affiliation_of(author);
            if classifier.is_non_academic(affiliation) {
                authors.push(author.as_str());
                companies.push(affiliation);
            }
        }

        Self {
            pubmed_id: or_not_available(pubmed_id),
            title: or_not_available(&summary.title),
            publication_date: or_not_available(&summary.publication_date),
            non_academic_authors: join_or_not_available(&authors),
            company_affiliations: join_or_not_available(&companies),
            corresponding_email: or_not_available(&record.email),
        }
    }
}

fn or_not_available(value: &str) -> String {
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

fn join_or_not_available(values: &[&str]) -> String {
    if values.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        values.join(", ")
    }
}

/// Write the header and `rows` as CSV to `writer`.
///
/// The header is written even when `rows` is empty.
pub fn write_csv_to<W: Write>(writer: W, rows: &[OutputRow]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(OUTPUT_COLUMNS)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render `rows` and write them to `path` in a single filesystem write.
pub fn write_csv(path: &Path, rows: &[OutputRow]) -> Result<()> {
    let mut buffer = Vec::new();
    write_csv_to(&mut buffer, rows)?;
    std::fs::write(path, buffer)?;

    info!(path = %path.display(), rows = rows.len(), "Saved CSV");
    Ok(())
}
