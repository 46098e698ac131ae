//! Configuration module for pageglean
//!
//! Arguments arrive as raw CLI flag values and are resolved here into an
//! immutable [`ScrapeConfig`] before any file or network I/O happens.
//!
//! # Example
//!
//! ```
//! use pageglean::config::{resolve_config, ExtractMode};
//!
//! let config = resolve_config("https://example.com/page", "all", None).unwrap();
//! assert_eq!(config.mode, ExtractMode::All);
//! ```

mod types;
mod validation;

pub use types::{ExtractMode, ScrapeConfig, ACCEPTED_MODES};
pub use validation::resolve_config;
