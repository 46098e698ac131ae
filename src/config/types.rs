use std::path::PathBuf;
use url::Url;

/// Flag values accepted by the `--extract` flag
pub const ACCEPTED_MODES: &[&str] = &["links", "headlines", "all"];

/// Resolved, immutable configuration for a single scrape run
///
/// Built once at startup and passed by reference to each stage. The parsed
/// `url` doubles as the base URL against which relative hrefs are resolved.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// The page to fetch, also the resolution base for relative links
    pub url: Url,

    /// Which content categories to extract
    pub mode: ExtractMode,

    /// Report destination; `None` means standard output
    pub output: Option<PathBuf>,
}

/// The extraction-mode selector
///
/// Any string is accepted at parse time. Values outside the recognized set
/// become `Unrecognized`, which requests no extraction at all and only
/// produces a trailing warning: the run still exits 0. Callers that need the
/// exact raw value (for that warning) find it carried in the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractMode {
    Links,
    Headlines,
    All,
    Unrecognized(String),
}

impl ExtractMode {
    /// Builds a mode from the raw `--extract` flag value. Never fails.
    pub fn from_flag(raw: &str) -> Self {
        match raw {
            "links" => Self::Links,
            "headlines" => Self::Headlines,
            "all" => Self::All,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Whether the link pass should run
    pub fn wants_links(&self) -> bool {
        matches!(self, Self::Links | Self::All)
    }

    /// Whether the headline pass should run
    pub fn wants_headlines(&self) -> bool {
        matches!(self, Self::Headlines | Self::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_modes() {
        assert_eq!(ExtractMode::from_flag("links"), ExtractMode::Links);
        assert_eq!(ExtractMode::from_flag("headlines"), ExtractMode::Headlines);
        assert_eq!(ExtractMode::from_flag("all"), ExtractMode::All);
    }

    #[test]
    fn test_unrecognized_mode_keeps_raw_value() {
        let mode = ExtractMode::from_flag("bogus");
        assert_eq!(mode, ExtractMode::Unrecognized("bogus".to_string()));
    }

    #[test]
    fn test_mode_is_case_sensitive() {
        assert_eq!(
            ExtractMode::from_flag("Links"),
            ExtractMode::Unrecognized("Links".to_string())
        );
    }

    #[test]
    fn test_wants_links() {
        assert!(ExtractMode::Links.wants_links());
        assert!(ExtractMode::All.wants_links());
        assert!(!ExtractMode::Headlines.wants_links());
        assert!(!ExtractMode::Unrecognized("x".to_string()).wants_links());
    }

    #[test]
    fn test_wants_headlines() {
        assert!(ExtractMode::Headlines.wants_headlines());
        assert!(ExtractMode::All.wants_headlines());
        assert!(!ExtractMode::Links.wants_headlines());
        assert!(!ExtractMode::Unrecognized("x".to_string()).wants_headlines());
    }

    #[test]
    fn test_unrecognized_requests_nothing() {
        let mode = ExtractMode::from_flag("everything");
        assert!(!mode.wants_links());
        assert!(!mode.wants_headlines());
    }
}
