//! CSV output for the chala daily stock history downloader.
//!
//! This crate writes the downloaded candle series and simulated price
//! paths as CSV, and reads a previously written file back for
//! simulation:
//!
//! - [`CsvFormatter`] - CSV writer for candles and paths
//! - [`read_close_series`] - (date, close) recovery from a written file

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/chala-data/chala/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod reader;

pub use crate::csv::CsvFormatter;
pub use reader::read_close_series;

use thiserror::Error;

/// Errors that can occur during formatting or read-back.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input file does not start with the expected header.
    #[error("Unexpected header line: {0}")]
    Header(String),
}
