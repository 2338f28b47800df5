//! Error types for chala.

use chrono::NaiveDate;
use thiserror::Error;

use crate::FetchWindow;

/// Result type alias for chala operations.
pub type Result<T> = std::result::Result<T, ChalaError>;

/// Errors that can occur during data download and persistence.
#[derive(Error, Debug)]
pub enum ChalaError {
    /// HTTP request failed or the provider reported a failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The provider payload could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid date range.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    /// Invalid ticker symbol.
    #[error(transparent)]
    Ticker(#[from] TickerError),

    /// The provider returned an empty series for the requested window.
    #[error("No data fetched for {ticker} ({window})")]
    NoData {
        /// The ticker that had no data.
        ticker: String,
        /// The window that was requested.
        window: FetchWindow,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error for invalid date input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// A date string was not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{input}', expected YYYY-MM-DD")]
    InvalidFormat {
        /// The offending input string.
        input: String,
    },

    /// Start date is not strictly before the end date.
    #[error("Invalid date range: start {start} must be before end {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}

/// Error for invalid ticker symbols.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickerError {
    /// The symbol was empty or whitespace only.
    #[error("Ticker symbol must not be empty")]
    Empty,
}
