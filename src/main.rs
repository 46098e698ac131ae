//! Pageglean main entry point
//!
//! This is the command-line interface for the pageglean single-page
//! extractor.

use anyhow::Result;
use clap::Parser;
use pageglean::config::resolve_config;
use pageglean::report::{write_report, Sink};
use pageglean::scrape::{build_http_client, extract, fetch_page};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pageglean: a single-page link and headline extractor
///
/// Pageglean fetches one web page, parses its HTML, and extracts
/// hyperlinks (resolved to absolute URLs) and/or headline text, writing
/// a labeled report to the console or a file.
#[derive(Parser, Debug)]
#[command(name = "pageglean")]
#[command(version)]
#[command(about = "Extract links and headlines from a single web page", long_about = None)]
struct Cli {
    /// URL of the page to scrape (must start with http:// or https://)
    #[arg(long)]
    url: String,

    /// Elements to extract: links, headlines, or all
    #[arg(long, default_value = "links")]
    extract: String,

    /// Output file path (default: standard output)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Resolve and validate configuration before touching the network
    let config = match resolve_config(&cli.url, &cli.extract, cli.output) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e.into());
        }
    };
    tracing::info!("Base URL successfully parsed: {}", config.url);
    tracing::info!("Extraction type set to: {}", cli.extract);

    // The sink is created before the fetch so an unwritable output path
    // fails the run without any network activity
    let mut sink = match Sink::create(config.output.as_deref()) {
        Ok(sink) => sink,
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e.into());
        }
    };

    let client = build_http_client()?;

    tracing::info!("Attempting to fetch URL: {}", config.url);
    let body = match fetch_page(&client, config.url.as_str()).await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e.into());
        }
    };

    let extraction = match extract(&body, &config.url, &config.mode) {
        Ok(extraction) => extraction,
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e.into());
        }
    };

    // Non-fatal link-pass skips, aggregated during extraction and
    // surfaced here rather than interleaved with the passes
    for skipped in &extraction.skipped_links {
        tracing::warn!(
            "Skipping malformed link #{}: '{}' - {}",
            skipped.index,
            skipped.href,
            skipped.reason
        );
    }

    write_report(&mut sink, &extraction, &config.mode);

    tracing::info!("Scraping process finished");
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Diagnostics go to standard error so a stdout report is never
/// interleaved with narration.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pageglean=info,warn"),
            1 => EnvFilter::new("pageglean=debug,info"),
            2 => EnvFilter::new("pageglean=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
