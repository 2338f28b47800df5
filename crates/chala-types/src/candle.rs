//! Daily candle representation.

use chrono::NaiveDate;

/// A single trading day of price data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    /// Trading date.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Highest price of the day.
    pub high: f64,
    /// Lowest price of the day.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Closing price adjusted for splits and dividends.
    pub adj_close: f64,
    /// Traded volume.
    pub volume: u64,
}

impl Candle {
    /// Creates a new candle.
    #[must_use]
    pub const fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        adj_close: f64,
        volume: u64,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            adj_close,
            volume,
        }
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns true if the day closed above its open.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_candle() -> Candle {
        let date = NaiveDate::from_ymd_opt(2023, 1, 3).unwrap();
        Candle::new(date, 130.28, 130.90, 124.17, 125.07, 124.22, 112_117_500)
    }

    #[test]
    fn test_range() {
        let candle = create_test_candle();
        assert!((candle.range() - 6.73).abs() < 1e-9);
    }

    #[test]
    fn test_bullish() {
        let candle = create_test_candle();
        assert!(!candle.is_bullish());

        let up = Candle::new(candle.date, 100.0, 105.0, 99.0, 104.0, 104.0, 1_000);
        assert!(up.is_bullish());
    }
}
