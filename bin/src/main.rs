//! chala CLI - Daily stock history downloader and Monte Carlo simulator.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use chala_lib::prelude::*;

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "chala")]
#[command(about = "Daily stock history downloader and Monte Carlo simulator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Download daily price history to a CSV file
    Fetch {
        /// Ticker symbol (e.g., AAPL)
        ticker: Ticker,

        /// Start date (YYYY-MM-DD). Requires END; omit both for the
        /// full available history.
        #[arg(requires = "end")]
        start: Option<String>,

        /// End date (YYYY-MM-DD), inclusive
        end: Option<String>,

        /// Output file path, fully overwritten on each run
        #[arg(short, long, default_value = "stock_data.csv")]
        output: PathBuf,
    },

    /// Project Monte Carlo price paths from a downloaded history
    Simulate {
        /// Input CSV written by `chala fetch`
        #[arg(short, long, default_value = "stock_data.csv")]
        input: PathBuf,

        /// Trailing window of history to calibrate on
        #[arg(short, long, default_value = "1m")]
        period: Period,

        /// Number of simulated paths
        #[arg(long, default_value = "10")]
        paths: usize,

        /// Days to project (defaults to the period length)
        #[arg(long)]
        days: Option<usize>,

        /// Keep only the path with the highest sampling likelihood
        #[arg(long)]
        most_likely: bool,

        /// RNG seed for reproducible paths
        #[arg(long)]
        seed: Option<u64>,

        /// Optional output CSV for the projected paths
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Fetch {
            ticker,
            start,
            end,
            output,
        } => {
            commands::fetch::fetch(
                &ticker,
                start.as_deref(),
                end.as_deref(),
                &output,
                cli.quiet,
            )
            .await
        }
        Commands::Simulate {
            input,
            period,
            paths,
            days,
            most_likely,
            seed,
            output,
        } => commands::simulate::simulate(
            &input,
            period,
            paths,
            days,
            most_likely,
            seed,
            output.as_deref(),
            cli.quiet,
        ),
    }
}
