//! Pageglean: a single-page link and headline extractor
//!
//! This crate fetches one web page over HTTP(S), parses its HTML, and
//! extracts hyperlinks (resolved to absolute URLs) and/or headline text,
//! writing a labeled report to the console or a file.

pub mod config;
pub mod report;
pub mod scrape;

use thiserror::Error;

/// Main error type for pageglean operations
///
/// Every variant here is fatal: the process reports it and exits non-zero.
/// Recoverable conditions (a single malformed href, one failed line write,
/// an unrecognized extraction mode) are surfaced as warnings instead and
/// never appear in this enum.
#[derive(Debug, Error)]
pub enum GleanError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Received non-200 status code {status} for URL {url}")]
    Status { url: String, status: u16 },

    #[error("HTML parse error: {message}")]
    Selector { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
///
/// All of these occur before any network I/O.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("The --url flag is required and cannot be empty")]
    MissingUrl,

    #[error("Invalid URL '{0}': must start with 'http://' or 'https://'")]
    InvalidScheme(String),

    #[error("Failed to parse URL '{input}': {source}")]
    InvalidUrl {
        input: String,
        source: url::ParseError,
    },

    #[error("Could not create output file '{path}': {source}")]
    OutputFile {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for pageglean operations
pub type Result<T> = std::result::Result<T, GleanError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{ExtractMode, ScrapeConfig};
pub use report::{write_report, Sink};
pub use scrape::{build_http_client, extract, fetch_page, Extraction, SkippedLink};
