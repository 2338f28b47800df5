//! Rust library for downloading and simulating daily stock price history.
//!
//! This is a facade crate that re-exports functionality from the chala
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use chala_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HistoryClient::with_defaults()?;
//!     let ticker: Ticker = "AAPL".parse()?;
//!
//!     let range = DateRange::parse("2023-01-01", "2023-01-10")?;
//!     let candles = daily_history(&client, &ticker, range.into()).await?;
//!
//!     let mut out = Vec::new();
//!     CsvFormatter::new().write_candles(&candles, &mut out)?;
//!     print!("{}", String::from_utf8_lossy(&out));
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/chala-data/chala/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use chala_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use chala_fetch::{
    ClientConfig, DownloadError, HistoryClient, ParseError, candles_from_response, daily_history,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use chala_format::{CsvFormatter, FormatError, read_close_series};

// Re-export simulation
#[cfg(feature = "simulate")]
pub use chala_simulate::{
    GbmParams, Period, PeriodParseError, SimulateError, SimulatedPath, drift_path, most_likely,
    simulate_path, simulate_paths,
};

/// Prelude module for convenient imports.
///
/// ```
/// use chala_lib::prelude::*;
/// ```
pub mod prelude {
    pub use chala_types::{
        Candle, ChalaError, DateRange, DateRangeError, FetchWindow, Result, Ticker, TickerError,
    };

    #[cfg(feature = "fetch")]
    pub use chala_fetch::{ClientConfig, HistoryClient, daily_history};

    #[cfg(feature = "format")]
    pub use chala_format::{CsvFormatter, FormatError, read_close_series};

    #[cfg(feature = "simulate")]
    pub use chala_simulate::{
        GbmParams, Period, SimulateError, SimulatedPath, drift_path, most_likely, simulate_path,
        simulate_paths,
    };
}
