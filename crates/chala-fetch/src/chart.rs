//! Chart payload decoding.
//!
//! The v8 chart endpoint returns one series per request:
//!
//! ```json
//! {"chart":{"result":[{"timestamp":[...],
//!   "indicators":{"quote":[{"open":[...],"high":[...],"low":[...],
//!   "close":[...],"volume":[...]}],"adjclose":[{"adjclose":[...]}]}}],
//!   "error":null}}
//! ```
//!
//! Quote arrays are parallel to `timestamp` and carry `null` at indexes
//! where no trade happened.

use chrono::DateTime;
use serde::Deserialize;
use thiserror::Error;

use chala_types::Candle;

/// Errors that can occur while decoding a chart payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The provider reported a failure in the payload.
    #[error("Provider error: {code}: {description}")]
    Provider {
        /// Provider error code.
        code: String,
        /// Provider error description.
        description: String,
    },

    /// The payload carried no chart series.
    #[error("Response contains no chart series")]
    MissingSeries,

    /// A quote array did not match the timestamp count.
    #[error("'{field}' has {actual} entries, expected {expected}")]
    LengthMismatch {
        /// The mismatched field.
        field: &'static str,
        /// The timestamp count.
        expected: usize,
        /// The field's entry count.
        actual: usize,
    },

    /// A timestamp was outside the representable date range.
    #[error("Invalid timestamp in response: {0}")]
    InvalidTimestamp(i64),
}

/// Top-level chart response.
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ProviderError>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteBlock>,
    #[serde(default)]
    adjclose: Vec<AdjCloseBlock>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

#[derive(Debug, Deserialize)]
struct AdjCloseBlock {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

/// Flattens a decoded chart response into daily candles, sorted by date.
///
/// Rows with a missing open, high, low, or close (holidays, halted
/// sessions) are skipped. A missing adjclose block falls back to the raw
/// close; a null volume becomes 0.
///
/// # Errors
///
/// Returns an error if the provider reported a failure, the series is
/// missing, or the quote arrays do not line up with the timestamps.
pub fn candles_from_response(response: ChartResponse) -> Result<Vec<Candle>, ParseError> {
    let chart = response.chart;
    if let Some(error) = chart.error {
        return Err(ParseError::Provider {
            code: error.code,
            description: error.description,
        });
    }

    let result = chart
        .result
        .and_then(|mut results| {
            if results.is_empty() {
                None
            } else {
                Some(results.remove(0))
            }
        })
        .ok_or(ParseError::MissingSeries)?;

    let expected = result.timestamp.len();
    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();
    let adjclose = result
        .indicators
        .adjclose
        .into_iter()
        .next()
        .map(|block| block.adjclose)
        .unwrap_or_default();

    check_len("open", &quote.open, expected)?;
    check_len("high", &quote.high, expected)?;
    check_len("low", &quote.low, expected)?;
    check_len("close", &quote.close, expected)?;
    check_len("volume", &quote.volume, expected)?;

    let mut candles = Vec::with_capacity(expected);
    for (i, &ts) in result.timestamp.iter().enumerate() {
        let date = DateTime::from_timestamp(ts, 0)
            .ok_or(ParseError::InvalidTimestamp(ts))?
            .date_naive();

        let (Some(open), Some(high), Some(low), Some(close)) =
            (quote.open[i], quote.high[i], quote.low[i], quote.close[i])
        else {
            continue;
        };

        let adj_close = adjclose.get(i).copied().flatten().unwrap_or(close);
        let volume = quote.volume[i].unwrap_or(0);
        candles.push(Candle::new(date, open, high, low, close, adj_close, volume));
    }

    candles.sort_by_key(|candle| candle.date);
    Ok(candles)
}

fn check_len<T>(field: &'static str, values: &[T], expected: usize) -> Result<(), ParseError> {
    if values.len() == expected {
        Ok(())
    } else {
        Err(ParseError::LengthMismatch {
            field,
            expected,
            actual: values.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn decode(payload: &str) -> ChartResponse {
        serde_json::from_str(payload).unwrap()
    }

    // 2023-01-03 .. 2023-01-05, 14:30 UTC session opens.
    const THREE_DAYS: &str = r#"{
        "chart": {
            "result": [{
                "meta": {"currency": "USD", "symbol": "ABC"},
                "timestamp": [1672756200, 1672842600, 1672929000],
                "indicators": {
                    "quote": [{
                        "open": [130.28, 126.89, 127.13],
                        "high": [130.90, 128.66, 127.77],
                        "low": [124.17, 125.08, 124.76],
                        "close": [125.07, 126.36, 125.02],
                        "volume": [112117500, 89113600, 80962700]
                    }],
                    "adjclose": [{"adjclose": [124.22, 125.50, 124.17]}]
                }
            }],
            "error": null
        }
    }"#;

    #[test]
    fn test_decode_three_days() {
        let candles = candles_from_response(decode(THREE_DAYS)).unwrap();
        assert_eq!(candles.len(), 3);

        let first = candles[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2023, 1, 3).unwrap());
        assert!((first.open - 130.28).abs() < 1e-9);
        assert!((first.close - 125.07).abs() < 1e-9);
        assert!((first.adj_close - 124.22).abs() < 1e-9);
        assert_eq!(first.volume, 112_117_500);

        assert_eq!(
            candles[2].date,
            NaiveDate::from_ymd_opt(2023, 1, 5).unwrap()
        );
    }

    #[test]
    fn test_null_rows_are_skipped() {
        let payload = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1672756200, 1672842600],
                    "indicators": {
                        "quote": [{
                            "open": [130.28, null],
                            "high": [130.90, null],
                            "low": [124.17, null],
                            "close": [125.07, null],
                            "volume": [112117500, null]
                        }]
                    }
                }],
                "error": null
            }
        }"#;
        let candles = candles_from_response(decode(payload)).unwrap();
        assert_eq!(candles.len(), 1);
        assert_eq!(
            candles[0].date,
            NaiveDate::from_ymd_opt(2023, 1, 3).unwrap()
        );
    }

    #[test]
    fn test_missing_adjclose_falls_back_to_close() {
        let payload = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1672756200],
                    "indicators": {
                        "quote": [{
                            "open": [130.28],
                            "high": [130.90],
                            "low": [124.17],
                            "close": [125.07],
                            "volume": [112117500]
                        }]
                    }
                }],
                "error": null
            }
        }"#;
        let candles = candles_from_response(decode(payload)).unwrap();
        assert!((candles[0].adj_close - 125.07).abs() < 1e-9);
    }

    #[test]
    fn test_provider_error_is_surfaced() {
        let payload = r#"{
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}
            }
        }"#;
        let error = candles_from_response(decode(payload)).unwrap_err();
        assert_eq!(
            error,
            ParseError::Provider {
                code: "Not Found".to_string(),
                description: "No data found, symbol may be delisted".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_series_is_rejected() {
        let payload = r#"{"chart": {"result": [], "error": null}}"#;
        assert_eq!(
            candles_from_response(decode(payload)).unwrap_err(),
            ParseError::MissingSeries
        );
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let payload = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1672756200, 1672842600],
                    "indicators": {
                        "quote": [{
                            "open": [130.28],
                            "high": [130.90],
                            "low": [124.17],
                            "close": [125.07],
                            "volume": [112117500]
                        }]
                    }
                }],
                "error": null
            }
        }"#;
        assert!(matches!(
            candles_from_response(decode(payload)).unwrap_err(),
            ParseError::LengthMismatch {
                field: "open",
                expected: 2,
                actual: 1,
            }
        ));
    }

    #[test]
    fn test_empty_series_decodes_to_no_candles() {
        let payload = r#"{
            "chart": {
                "result": [{
                    "timestamp": [],
                    "indicators": {"quote": [{}]}
                }],
                "error": null
            }
        }"#;
        let candles = candles_from_response(decode(payload)).unwrap();
        assert!(candles.is_empty());
    }
}
