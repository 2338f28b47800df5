//! Monte Carlo price simulation for the chala daily stock history downloader.
//!
//! A geometric Brownian motion model is calibrated from the log returns
//! of a historical close series, then projected forward day by day:
//!
//! - [`GbmParams`] - drift and volatility from daily closes
//! - [`simulate_paths`] - seeded random paths with sampling log-likelihood
//! - [`drift_path`] - the deterministic zero-shock path
//! - [`Period`] - trailing calibration windows

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/chala-data/chala/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod gbm;
mod params;
mod period;

pub use gbm::{SimulatedPath, drift_path, most_likely, simulate_path, simulate_paths};
pub use params::{GbmParams, SimulateError};
pub use period::{Period, PeriodParseError};
