//! MEDLINE record extraction.
//!
//! [`fetch_record`] downloads the flat-text record for one paper and
//! [`parse_record`] pulls authors, affiliations and the contact email out of
//! it with line patterns. Only `parse_record` knows the text layout.

use crate::client::EutilsClient;
use crate::error::Result;
use crate::esummary::NOT_AVAILABLE;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

/// Affiliation used for authors past the last `AD` line.
pub const UNKNOWN_AFFILIATION: &str = "Unknown Affiliation";

static AUTHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)AU  - (.+)$").expect("author pattern"));
static AFFILIATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)AD  - (.+)$").expect("affiliation pattern"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)Electronic address: (.+)$").expect("email pattern"));

/// Authors, affiliations and contact email of one paper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedlineRecord {
    /// Author names in order of appearance; duplicates kept.
    pub authors: Vec<String>,
    /// Author name to affiliation. A repeated name keeps the last affiliation.
    pub affiliations: HashMap<String, String>,
    /// First "Electronic address" in the record, or `"N/A"`.
    pub email: String,
}

impl MedlineRecord {
    /// Affiliation of `author`, `"Unknown Affiliation"` if none was recorded.
    pub fn affiliation_of(&self, author: &str) -> &str {
        self.affiliations
            .get(author)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_AFFILIATION)
    }
}

/// Parse a MEDLINE text record.
///
/// The i-th `AU` line is paired with the i-th `AD` line. Records with fewer
/// `AD` lines than authors get [`UNKNOWN_AFFILIATION`] for the rest.
pub fn parse_record(text: &str) -> MedlineRecord {
    let authors: Vec<String> = captures(&AUTHOR_RE, text).collect();
    let affiliation_lines: Vec<String> = captures(&AFFILIATION_RE, text).collect();

    let mut affiliations = HashMap::with_capacity(authors.len());
    for (i, author) in authors.iter().enumerate() {
        let affiliation = affiliation_lines
            .get(i)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_AFFILIATION.to_string());
        affiliations.insert(author.clone(), affiliation);
    }

    let email = captures(&EMAIL_RE, text)
        .next()
        .map(|e| e.trim().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    MedlineRecord {
        authors,
        affiliations,
        email,
    }
}

fn captures<'a>(re: &'a Regex, text: &'a str) -> impl Iterator<Item = String> + 'a {
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Download and parse the MEDLINE record of one paper.
pub async fn fetch_record(client: &EutilsClient, id: &str) -> Result<MedlineRecord> {
    let config = client.config();

    let text = client
        .get_text(
            config.fetch_url()?,
            &[
                ("db", config.database.as_str()),
                ("id", id),
                ("rettype", "medline"),
                ("retmode", "text"),
            ],
        )
        .await?;

    let record = parse_record(&text);
    debug!(
        id = id,
        authors = ?record.authors,
        email = %record.email,
        "Processed MEDLINE record"
    );
    Ok(record)
}
