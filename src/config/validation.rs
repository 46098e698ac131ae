use crate::config::types::{ExtractMode, ScrapeConfig};
use crate::ConfigError;
use std::path::PathBuf;
use url::Url;

/// Resolves raw flag values into a validated [`ScrapeConfig`]
///
/// Fails fast (before any file or network I/O) if the URL is empty, does not
/// carry an accepted scheme prefix, or does not parse as an absolute URL.
/// The extraction mode is deliberately not validated here: unrecognized
/// values are accepted and only warned about at the end of the run.
///
/// # Arguments
///
/// * `raw_url` - the `--url` flag value
/// * `raw_mode` - the `--extract` flag value
/// * `output` - the `--output` flag value, if any
pub fn resolve_config(
    raw_url: &str,
    raw_mode: &str,
    output: Option<PathBuf>,
) -> Result<ScrapeConfig, ConfigError> {
    let url = validate_url(raw_url)?;

    Ok(ScrapeConfig {
        url,
        mode: ExtractMode::from_flag(raw_mode),
        output,
    })
}

/// Validates the target URL and parses it into the base URL
fn validate_url(raw_url: &str) -> Result<Url, ConfigError> {
    if raw_url.is_empty() {
        return Err(ConfigError::MissingUrl);
    }

    if !(raw_url.starts_with("http://") || raw_url.starts_with("https://")) {
        return Err(ConfigError::InvalidScheme(raw_url.to_string()));
    }

    Url::parse(raw_url).map_err(|e| ConfigError::InvalidUrl {
        input: raw_url.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_http_url() {
        let config = resolve_config("http://example.com/page", "links", None).unwrap();
        assert_eq!(config.url.as_str(), "http://example.com/page");
        assert_eq!(config.mode, ExtractMode::Links);
        assert!(config.output.is_none());
    }

    #[test]
    fn test_valid_https_url() {
        let config = resolve_config("https://example.com/", "all", None).unwrap();
        assert_eq!(config.url.scheme(), "https");
    }

    #[test]
    fn test_empty_url_rejected() {
        let result = resolve_config("", "links", None);
        assert!(matches!(result, Err(ConfigError::MissingUrl)));
    }

    #[test]
    fn test_missing_scheme_rejected() {
        let result = resolve_config("example.com/page", "links", None);
        assert!(matches!(result, Err(ConfigError::InvalidScheme(_))));
    }

    #[test]
    fn test_ftp_scheme_rejected() {
        let result = resolve_config("ftp://example.com/file", "links", None);
        assert!(matches!(result, Err(ConfigError::InvalidScheme(_))));
    }

    #[test]
    fn test_unparsable_url_rejected() {
        // Scheme prefix passes but the remainder is not a well-formed URL
        let result = resolve_config("http://", "links", None);
        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn test_unrecognized_mode_accepted() {
        let config = resolve_config("http://example.com", "bogus", None).unwrap();
        assert_eq!(config.mode, ExtractMode::Unrecognized("bogus".to_string()));
    }

    #[test]
    fn test_output_path_carried_through() {
        let config = resolve_config(
            "http://example.com",
            "links",
            Some(PathBuf::from("/tmp/out.txt")),
        )
        .unwrap();
        assert_eq!(config.output, Some(PathBuf::from("/tmp/out.txt")));
    }
}
