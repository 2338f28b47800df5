//! CSV output format.

use std::io::Write;

use chrono::{NaiveDate, TimeDelta};

use chala_simulate::SimulatedPath;
use chala_types::Candle;

use crate::FormatError;

/// CSV formatter for candle series and simulated paths.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include a header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Writes a candle series: one header row plus one row per trading
    /// day.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_candles<W: Write>(
        &self,
        candles: &[Candle],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "date{d}open{d}high{d}low{d}close{d}adj_close{d}volume")?;
        }

        for candle in candles {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                candle.date.format("%Y-%m-%d"),
                candle.open,
                candle.high,
                candle.low,
                candle.close,
                candle.adj_close,
                candle.volume
            )?;
        }

        Ok(())
    }

    /// Writes simulated paths side by side, one column per path.
    ///
    /// Row `i` is dated `last_date + i + 1` calendar days, so the
    /// projection starts the day after the final historical close.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_paths<W: Write>(
        &self,
        paths: &[SimulatedPath],
        last_date: NaiveDate,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;
        let days = paths.iter().map(|p| p.prices.len()).max().unwrap_or(0);

        if self.include_header {
            write!(writer, "date")?;
            for n in 1..=paths.len() {
                write!(writer, "{d}path_{n}")?;
            }
            writeln!(writer)?;
        }

        for i in 0..days {
            let date = last_date + TimeDelta::days(i as i64 + 1);
            write!(writer, "{}", date.format("%Y-%m-%d"))?;
            for path in paths {
                match path.prices.get(i) {
                    Some(price) => write!(writer, "{d}{price}")?,
                    None => write!(writer, "{d}")?,
                }
            }
            writeln!(writer)?;
        }

        Ok(())
    }
}
