//! Simulate command implementation.
//!
//! Reads a downloaded history back, calibrates a geometric Brownian
//! motion model on a trailing window of closes, and projects price
//! paths forward.

use anyhow::{Context, Result, bail};
use chrono::TimeDelta;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chala_lib::prelude::*;

use crate::display::{print_simulation_summary, write_paths};

/// Run Monte Carlo simulations from a previously fetched history file.
#[allow(clippy::too_many_arguments)]
pub(crate) fn simulate(
    input: &Path,
    period: Period,
    paths: usize,
    days: Option<usize>,
    most_likely_only: bool,
    seed: Option<u64>,
    output: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    if paths == 0 {
        bail!("Number of paths must be greater than zero");
    }

    let file =
        File::open(input).with_context(|| format!("Cannot open {}", input.display()))?;
    let series = read_close_series(BufReader::new(file))
        .with_context(|| format!("Cannot read {}", input.display()))?;
    if series.is_empty() {
        bail!("No price data available in {}", input.display());
    }

    // Calibrate on the trailing window only, like the period selector
    // of the original tool: everything from last_date - period back.
    let (last_date, _) = series[series.len() - 1];
    let cutoff = last_date - TimeDelta::days(i64::from(period.days()));
    let closes: Vec<f64> = series
        .iter()
        .filter(|(date, _)| *date >= cutoff)
        .map(|(_, close)| *close)
        .collect();

    let params = GbmParams::from_closes(&closes)?;
    let spot = closes[closes.len() - 1];
    let horizon = days.unwrap_or(period.days() as usize);
    let seed = seed.unwrap_or_else(rand::random);

    let mut runs = simulate_paths(params, spot, horizon, paths, seed);
    if most_likely_only {
        if let Some(best) = most_likely(&runs) {
            runs = vec![runs.swap_remove(best)];
        }
    }

    if !quiet {
        print_simulation_summary(params, &closes, cutoff, last_date, seed, &runs);
    }

    if let Some(output) = output {
        write_paths(&runs, last_date, output)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        if !quiet {
            println!("Paths written to: {}", output.display());
        }
    }

    Ok(())
}
