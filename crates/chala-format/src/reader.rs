//! Read-back of price series written by [`CsvFormatter`].
//!
//! [`CsvFormatter`]: crate::CsvFormatter

use std::io::BufRead;

use chrono::NaiveDate;

use crate::FormatError;

/// Column index of the close price in the written CSV.
const CLOSE_COLUMN: usize = 4;

/// Number of columns in the written CSV.
const COLUMNS: usize = 7;

/// Reads the (date, close) series back from a file written by
/// [`CsvFormatter::write_candles`], sorted by date.
///
/// Data rows that fail to parse are skipped rather than rejected; the
/// file may have been edited or truncated since it was written.
///
/// [`CsvFormatter::write_candles`]: crate::CsvFormatter::write_candles
///
/// # Errors
///
/// Returns an error on I/O failure, or if the first line is not the
/// expected header.
pub fn read_close_series<R: BufRead>(reader: R) -> Result<Vec<(NaiveDate, f64)>, FormatError> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => return Ok(Vec::new()),
    };
    if !header.starts_with("date") {
        return Err(FormatError::Header(header));
    }

    let mut series = Vec::new();
    for line in lines {
        let line = line?;
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < COLUMNS {
            continue;
        }
        let Ok(date) = NaiveDate::parse_from_str(fields[0], "%Y-%m-%d") else {
            continue;
        };
        let Ok(close) = fields[CLOSE_COLUMN].parse::<f64>() else {
            continue;
        };
        series.push((date, close));
    }

    series.sort_by_key(|(date, _)| *date);
    Ok(series)
}
