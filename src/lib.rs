//! # rustpubmed
//!
//! Find PubMed papers with authors from pharmaceutical or biotech companies.
//!
//! ## Modules
//!
//! - [`esearch`] - Resolve a query to PubMed IDs
//! - [`esummary`] - Title and publication date per paper
//! - [`medline`] - MEDLINE record fetch and author/affiliation extraction
//! - [`classifier`] - Company keyword heuristic
//! - [`export`] - Output rows and CSV writer
//! - [`pipeline`] - The stages above, run in order
//! - [`client`] / [`config`] - HTTP client and endpoint configuration
//! - [`error`] - Custom error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rustpubmed::{classifier::AffiliationClassifier, client::EutilsClient, config::EutilsConfig, export, pipeline};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = EutilsClient::new(EutilsConfig::default())?;
//!     let rows = pipeline::run(&client, "cancer research", &AffiliationClassifier::default()).await?;
//!     export::write_csv(std::path::Path::new("results.csv"), &rows)?;
//!     Ok(())
//! }
//! ```

pub mod classifier;
pub mod client;
pub mod config;
pub mod error;
pub mod esearch;
pub mod esummary;
pub mod export;
pub mod medline;
pub mod pipeline;

pub use error::{PubmedError, Result};
