//! Chart endpoint URL construction.

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

use chala_types::FetchWindow;

/// Base URL for the Yahoo Finance v8 chart endpoint.
pub const BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Builds the chart request URL for a ticker and window.
///
/// An explicit window is sent as `period1`/`period2` Unix timestamps at
/// UTC midnight. The provider treats `period2` as exclusive, so the
/// boundary comes from [`DateRange::exclusive_end`] - one day past the
/// requested inclusive end date.
///
/// [`DateRange::exclusive_end`]: chala_types::DateRange::exclusive_end
///
/// # Example
///
/// ```
/// use chala_fetch::url::chart_url;
/// use chala_types::{DateRange, FetchWindow};
///
/// let range = DateRange::parse("2023-01-01", "2023-01-10").unwrap();
/// let url = chart_url("ABC", &FetchWindow::Range(range));
/// assert_eq!(
///     url,
///     "https://query1.finance.yahoo.com/v8/finance/chart/ABC?symbol=ABC&interval=1d&period1=1672531200&period2=1673395200"
/// );
/// ```
#[must_use]
pub fn chart_url(ticker: &str, window: &FetchWindow) -> String {
    match window {
        FetchWindow::Max => {
            format!("{BASE_URL}/{ticker}?symbol={ticker}&interval=1d&range=max")
        }
        FetchWindow::Range(range) => {
            let period1 = unix_midnight(range.start);
            let period2 = unix_midnight(range.exclusive_end());
            format!(
                "{BASE_URL}/{ticker}?symbol={ticker}&interval=1d&period1={period1}&period2={period2}"
            )
        }
    }
}

/// Unix timestamp of midnight UTC on the given date.
fn unix_midnight(date: NaiveDate) -> i64 {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::from_hms_opt(0, 0, 0).unwrap()))
        .timestamp()
}
