//! Fetch command implementation.
//!
//! Resolves the requested window, downloads the daily history in one
//! request, and writes the result as CSV.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

use chala_lib::prelude::*;

use crate::display::write_candles;

/// Download daily price history for a ticker and persist it as CSV.
pub(crate) async fn fetch(
    ticker: &Ticker,
    start: Option<&str>,
    end: Option<&str>,
    output: &Path,
    quiet: bool,
) -> Result<()> {
    // Both dates present selects an explicit inclusive window; both
    // absent selects the provider's full history. clap rejects the
    // mixed case before this runs.
    let window = match (start, end) {
        (Some(start), Some(end)) => FetchWindow::Range(DateRange::parse(start, end)?),
        _ => FetchWindow::Max,
    };

    let client = HistoryClient::with_defaults().context("Failed to create HTTP client")?;

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("Invalid progress template"),
        );
        pb.set_message(format!("Fetching {ticker} ({window})"));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };

    let candles = daily_history(&client, ticker, window).await;
    progress.finish_and_clear();
    let candles = candles?;

    write_candles(&candles, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    if !quiet {
        println!(
            "Fetched {} trading days for {} ({})",
            candles.len(),
            ticker,
            window
        );
        println!("Output written to: {}", output.display());
    }

    Ok(())
}
