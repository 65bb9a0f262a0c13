//! Custom error types for rustpubmed.
//!
//! All library functions return `Result<T, PubmedError>`; the binary wraps
//! them in `anyhow` and lets them terminate the process.

use thiserror::Error;

/// Main error type for rustpubmed operations.
#[derive(Debug, Error)]
pub enum PubmedError {
    /// Network/HTTP transport error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// E-utilities returned a non-success status
    #[error("API error: {code} - {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message
        message: String,
    },

    /// JSON body could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration (base URL, concurrency)
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias using `PubmedError`
pub type Result<T> = std::result::Result<T, PubmedError>;
