//! Core types for the chala daily stock history downloader.
//!
//! This crate provides the fundamental data structures used throughout chala:
//!
//! - [`Ticker`] - An opaque, non-empty instrument symbol
//! - [`DateRange`] - An inclusive (start, end) request window
//! - [`FetchWindow`] - An explicit range or the full-history sentinel
//! - [`Candle`] - A single trading day of OHLCV data plus adjusted close

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/chala-data/chala/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod candle;
mod date_range;
mod error;
mod ticker;

pub use candle::Candle;
pub use date_range::{DateRange, FetchWindow};
pub use error::{ChalaError, DateRangeError, Result, TickerError};
pub use ticker::Ticker;
