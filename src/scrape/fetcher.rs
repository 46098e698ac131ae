//! HTTP fetcher implementation
//!
//! One client, one GET request. There is no retry logic and no manual
//! redirect handling: the client's transparent redirect following is all
//! the redirect behavior the tool has. Any network failure or non-200
//! status is fatal.

use crate::GleanError;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Builds the HTTP client used for the single fetch
///
/// The user agent is derived from the crate name and version. Timeouts are
/// generous since there is exactly one request per run.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Issues the single GET request and returns the response body
///
/// # Errors
///
/// * [`GleanError::Http`] - connection, DNS, or timeout failure, or a
///   failure while reading the body
/// * [`GleanError::Status`] - any status code other than 200, including
///   other 2xx codes
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, GleanError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| GleanError::Http {
            url: url.to_string(),
            source: e,
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(GleanError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    tracing::info!("HTTP request successful (status 200), reading body");

    response.text().await.map_err(|e| GleanError::Http {
        url: url.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client();
        assert!(client.is_ok());
    }

    // Fetch behavior (200 body, non-200 fatal, connection failure) is
    // covered by the wiremock tests in tests/scrape_tests.rs.
}
