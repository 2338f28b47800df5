//! Output plumbing and summary printing for the chala CLI.

use anyhow::Result;
use chrono::NaiveDate;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chala_lib::prelude::*;

/// Write a candle series to a CSV file, overwriting any existing file.
pub(crate) fn write_candles(candles: &[Candle], output: &Path) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);
    CsvFormatter::new().write_candles(candles, writer)?;
    Ok(())
}

/// Write simulated paths to a CSV file, one column per path.
pub(crate) fn write_paths(paths: &[SimulatedPath], last_date: NaiveDate, output: &Path) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);
    CsvFormatter::new().write_paths(paths, last_date, writer)?;
    Ok(())
}

/// Print the calibration figures and a per-path summary table.
pub(crate) fn print_simulation_summary(
    params: GbmParams,
    closes: &[f64],
    cutoff: NaiveDate,
    last_date: NaiveDate,
    seed: u64,
    runs: &[SimulatedPath],
) {
    println!(
        "Calibrated on {} closes ({} to {})",
        closes.len(),
        cutoff,
        last_date
    );
    println!(
        "Drift: {:.6}  Volatility: {:.6}  Seed: {}",
        params.drift, params.volatility, seed
    );

    println!();
    println!(
        "{:<6} {:>12} {:>12} {:>12} {:>16}",
        "PATH", "FINAL", "LOW", "HIGH", "LOG-LIKELIHOOD"
    );
    println!("{}", "-".repeat(62));
    for (n, path) in runs.iter().enumerate() {
        println!(
            "{:<6} {:>12.2} {:>12.2} {:>12.2} {:>16.2}",
            n + 1,
            path.final_price(),
            path.low(),
            path.high(),
            path.log_likelihood,
        );
    }
}
