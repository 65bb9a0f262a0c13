//! rustpubmed - PubMed non-academic author finder
//!
//! Searches PubMed, reads each paper's MEDLINE record, flags authors whose
//! affiliation looks like a company and saves the result as CSV.
//!
//! ## Usage
//!
//! ```bash
//! rustpubmed "cancer research" -f results.csv -d
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use rustpubmed::{
    classifier::AffiliationClassifier, client::EutilsClient, config::EutilsConfig, export,
    pipeline,
};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

// ============================================================================
// CLI Definition
// ============================================================================

/// Fetch research papers with non-academic authors from PubMed.
#[derive(Parser)]
#[command(name = "rustpubmed")]
#[command(version, about, long_about = None)]
#[command(after_help = "Example: rustpubmed 'cancer research' -f results.csv -d")]
struct Cli {
    /// Search query for PubMed
    query: String,

    /// Filename to save results as CSV
    #[arg(short, long)]
    file: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Alternate E-utilities base URL (mirror or local test server)
    #[arg(long)]
    base_url: Option<String>,

    /// Number of MEDLINE records fetched at once
    #[arg(long, default_value = "1")]
    concurrency: usize,
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(cli.debug).to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match cli.base_url.as_deref() {
        Some(url) => EutilsConfig::with_base_url(url).context("Invalid --base-url")?,
        None => EutilsConfig::default(),
    }
    .concurrency(cli.concurrency)
    .context("Invalid --concurrency")?;

    let client = EutilsClient::new(config)?;
    let classifier = AffiliationClassifier::default();

    info!(query = %cli.query, file = %cli.file.display(), "Starting PubMed pipeline");

    let rows = pipeline::run(&client, &cli.query, &classifier)
        .await
        .context("Failed to fetch papers from PubMed")?;

    export::write_csv(&cli.file, &rows)
        .with_context(|| format!("Failed to write {}", cli.file.display()))?;

    println!("Results saved to {}", cli.file.display());
    Ok(())
}

/// Stage progress is only shown with `-d`; otherwise just warnings and errors.
fn log_level(debug: bool) -> Level {
    if debug {
        Level::DEBUG
    } else {
        Level::WARN
    }
}
