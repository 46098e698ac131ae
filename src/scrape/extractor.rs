//! HTML extraction passes
//!
//! Two independent, order-preserving passes over the parsed document:
//! - Link pass: every `<a>` in document order, href resolved against the
//!   base URL into an absolute URL string
//! - Headline pass: every `<h1>`/`<h2>`/`<h3>` in document order, text
//!   content trimmed, empty results discarded
//!
//! Neither pass de-duplicates. A malformed href is skipped and recorded,
//! never fatal; an anchor without an href is skipped silently.

use crate::config::ExtractMode;
use crate::GleanError;
use scraper::{Html, Selector};
use url::Url;

/// Everything extracted from a single page
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Absolute link URLs, in document order, duplicates preserved
    pub links: Vec<String>,

    /// Non-empty trimmed headline text, in document order
    pub headlines: Vec<String>,

    /// Anchors whose href could not be resolved; surfaced as warnings
    pub skipped_links: Vec<SkippedLink>,
}

/// One anchor skipped during the link pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLink {
    /// 1-based position among all anchors in the document
    pub index: usize,

    /// The raw href value as written in the markup
    pub href: String,

    /// Why resolution failed
    pub reason: String,
}

/// Parses the HTML and runs the passes the mode asks for
///
/// Passes the mode does not request are skipped entirely; an
/// [`ExtractMode::Unrecognized`] mode runs neither and yields an empty
/// extraction.
///
/// # Errors
///
/// [`GleanError::Selector`] if a selector fails to compile. The document
/// itself always parses: the underlying parser recovers from malformed
/// markup the way browsers do.
pub fn extract(html: &str, base_url: &Url, mode: &ExtractMode) -> Result<Extraction, GleanError> {
    let document = Html::parse_document(html);
    let mut extraction = Extraction::default();

    if mode.wants_links() {
        tracing::info!("Extracting links");
        extract_links(&document, base_url, &mut extraction)?;
        tracing::info!("Stored {} absolute link URL(s)", extraction.links.len());
    }

    if mode.wants_headlines() {
        tracing::info!("Extracting headlines");
        extract_headlines(&document, &mut extraction)?;
        tracing::info!("Stored {} non-empty headline(s)", extraction.headlines.len());
    }

    Ok(extraction)
}

/// Link pass: resolve every anchor's href against the base URL
///
/// The anchor index counts all `<a>` elements, with or without href, so a
/// skipped link's reported position matches what a reader sees in the
/// document.
fn extract_links(
    document: &Html,
    base_url: &Url,
    extraction: &mut Extraction,
) -> Result<(), GleanError> {
    let anchor_selector = parse_selector("a")?;

    for (index, element) in document.select(&anchor_selector).enumerate() {
        if let Some(href) = element.value().attr("href") {
            match base_url.join(href) {
                Ok(absolute) => extraction.links.push(absolute.to_string()),
                Err(e) => extraction.skipped_links.push(SkippedLink {
                    index: index + 1,
                    href: href.to_string(),
                    reason: e.to_string(),
                }),
            }
        }
    }

    Ok(())
}

/// Headline pass: collect trimmed text from h1-h3 elements
fn extract_headlines(document: &Html, extraction: &mut Extraction) -> Result<(), GleanError> {
    let heading_selector = parse_selector("h1, h2, h3")?;

    for element in document.select(&heading_selector) {
        let text = element.text().collect::<String>();
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            extraction.headlines.push(trimmed.to_string());
        }
    }

    Ok(())
}

fn parse_selector(selector: &str) -> Result<Selector, GleanError> {
    Selector::parse(selector).map_err(|e| GleanError::Selector {
        message: e.to_string(),
    })
}
