//! HTTP client and data fetching for the chala daily stock history downloader.
//!
//! This crate provides the download pipeline:
//!
//! - [`url::chart_url`] - Constructs chart endpoint URLs
//! - [`HistoryClient`] - HTTP client for the provider
//! - [`chart`] - Chart payload decoding
//! - [`daily_history`] - Single-request daily history download

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/chala-data/chala/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod chart;
mod client;
mod history;
pub mod url;

pub use chart::{ChartResponse, ParseError, candles_from_response};
pub use client::{ClientConfig, DownloadError, HistoryClient};
pub use history::daily_history;
