//! Scrape module for page fetching and content extraction
//!
//! This module contains the core of the run:
//! - HTTP client construction and the single GET fetch
//! - HTML parsing and the link/headline extraction passes

mod extractor;
mod fetcher;

pub use extractor::{extract, Extraction, SkippedLink};
pub use fetcher::{build_http_client, fetch_page};
