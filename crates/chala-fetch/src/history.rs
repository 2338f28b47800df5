//! Daily history download pipeline.

use chala_types::{Candle, ChalaError, FetchWindow, Ticker};

use crate::chart::{self, ParseError};
use crate::{HistoryClient, url::chart_url};

/// Downloads the daily candle series for a ticker over the given window.
///
/// One request, no retries: any transport or decode failure terminates
/// the download. An empty series is an error here rather than an empty
/// file downstream.
///
/// # Errors
///
/// Returns [`ChalaError::Http`] for transport failures and
/// provider-reported failures, [`ChalaError::Parse`] if the payload
/// cannot be decoded, and [`ChalaError::NoData`] if the provider
/// returned no rows for the window.
pub async fn daily_history(
    client: &HistoryClient,
    ticker: &Ticker,
    window: FetchWindow,
) -> Result<Vec<Candle>, ChalaError> {
    let url = chart_url(ticker.as_str(), &window);
    let response = client
        .fetch_chart(&url)
        .await
        .map_err(|e| ChalaError::Http(e.to_string()))?;

    let candles = chart::candles_from_response(response).map_err(|e| match e {
        ParseError::Provider { .. } => ChalaError::Http(e.to_string()),
        _ => ChalaError::Parse(e.to_string()),
    })?;

    if candles.is_empty() {
        return Err(ChalaError::NoData {
            ticker: ticker.to_string(),
            window,
        });
    }

    Ok(candles)
}
