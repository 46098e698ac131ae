//! Report writer
//!
//! Writes the labeled sections to the sink, best-effort: a failed line
//! write is warned about and the remaining lines are still attempted.
//! Nothing here is fatal.

use crate::config::{ExtractMode, ACCEPTED_MODES};
use crate::report::Sink;
use crate::scrape::Extraction;
use std::io::Write;

/// Writes the full report for this run
///
/// A section is written for each category the mode requested, links before
/// headlines. An [`ExtractMode::Unrecognized`] mode writes no sections and
/// instead emits a trailing warning naming the raw value and the accepted
/// set.
pub fn write_report(sink: &mut Sink, extraction: &Extraction, mode: &ExtractMode) {
    if mode.wants_links() {
        write_section(
            sink.writer(),
            "Links",
            &extraction.links,
            "No links found or extracted.",
        );
    }

    if mode.wants_headlines() {
        write_section(
            sink.writer(),
            "Headlines",
            &extraction.headlines,
            "No headlines found or extracted.",
        );
    }

    if let ExtractMode::Unrecognized(raw) = mode {
        tracing::warn!(
            "Invalid value '{}' for --extract; valid options are {}. No data extracted.",
            raw,
            ACCEPTED_MODES.join(", ")
        );
    }
}

/// Writes one labeled section: header, then items or the empty placeholder
fn write_section(writer: &mut dyn Write, title: &str, items: &[String], empty_message: &str) {
    if let Err(e) = writeln!(writer, "\n--- {} ---", title) {
        tracing::warn!("Failed to write {} header to output: {}", title, e);
    }

    if items.is_empty() {
        if let Err(e) = writeln!(writer, "{}", empty_message) {
            tracing::warn!("Failed to write '{}' to output: {}", empty_message, e);
        }
        return;
    }

    for item in items {
        if let Err(e) = writeln!(writer, "{}", item) {
            tracing::warn!("Failed to write '{}' to output: {}", item, e);
        }
    }
}
