//! Request windows for historical data retrieval.

use chrono::{NaiveDate, TimeDelta};

use crate::DateRangeError;

/// An inclusive range of calendar dates for data retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start < end.
    ///
    /// # Errors
    ///
    /// Returns an error if start is not strictly before end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start >= end {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parses a range from two `YYYY-MM-DD` strings.
    ///
    /// # Errors
    ///
    /// Returns an error if either string is not a valid calendar date,
    /// or if start is not strictly before end.
    pub fn parse(start: &str, end: &str) -> Result<Self, DateRangeError> {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        Self::new(start, end)
    }

    /// End boundary for providers that treat the end of a request as
    /// exclusive: one day past the inclusive end, so the final requested
    /// day is still part of the result.
    #[must_use]
    pub fn exclusive_end(&self) -> NaiveDate {
        self.end + TimeDelta::days(1)
    }

    /// Returns the total number of calendar days in the range.
    #[must_use]
    pub fn total_days(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    /// Returns true if the range contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

fn parse_date(input: &str) -> Result<NaiveDate, DateRangeError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| DateRangeError::InvalidFormat {
        input: input.to_string(),
    })
}

/// Requested download window: an explicit date range, or everything the
/// provider has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchWindow {
    /// Full available history.
    Max,
    /// Explicit inclusive date range.
    Range(DateRange),
}

impl FetchWindow {
    /// Returns true if this window requests the full available history.
    #[must_use]
    pub const fn is_max(&self) -> bool {
        matches!(self, Self::Max)
    }

    /// Returns the explicit range, if one was requested.
    #[must_use]
    pub const fn range(&self) -> Option<DateRange> {
        match self {
            Self::Max => None,
            Self::Range(range) => Some(*range),
        }
    }
}

impl From<DateRange> for FetchWindow {
    fn from(range: DateRange) -> Self {
        Self::Range(range)
    }
}

impl std::fmt::Display for FetchWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Max => write!(f, "full history"),
            Self::Range(range) => write!(f, "{range}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_range_new() {
        let range = DateRange::new(date(2023, 1, 1), date(2023, 1, 10)).unwrap();
        assert_eq!(range.start, date(2023, 1, 1));
        assert_eq!(range.end, date(2023, 1, 10));
    }

    #[test]
    fn test_date_range_rejects_reversed() {
        let result = DateRange::new(date(2023, 2, 1), date(2023, 1, 1));
        assert_eq!(
            result,
            Err(DateRangeError::InvalidRange {
                start: date(2023, 2, 1),
                end: date(2023, 1, 1),
            })
        );
    }

    #[test]
    fn test_date_range_rejects_equal_bounds() {
        let result = DateRange::new(date(2023, 1, 1), date(2023, 1, 1));
        assert!(matches!(result, Err(DateRangeError::InvalidRange { .. })));
    }

    #[test]
    fn test_parse_valid() {
        let range = DateRange::parse("2023-01-01", "2023-01-10").unwrap();
        assert_eq!(range.start, date(2023, 1, 1));
        assert_eq!(range.end, date(2023, 1, 10));
    }

    #[test]
    fn test_parse_rejects_invalid_month() {
        let result = DateRange::parse("2023-01-01", "2023-13-01");
        assert_eq!(
            result,
            Err(DateRangeError::InvalidFormat {
                input: "2023-13-01".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_rejects_non_iso_format() {
        assert!(DateRange::parse("01/01/2023", "2023-01-10").is_err());
        assert!(DateRange::parse("2023-1-1x", "2023-01-10").is_err());
        assert!(DateRange::parse("", "2023-01-10").is_err());
    }

    #[test]
    fn test_exclusive_end_is_one_day_later() {
        let range = DateRange::new(date(2023, 1, 1), date(2023, 1, 10)).unwrap();
        assert_eq!(range.exclusive_end(), date(2023, 1, 11));
    }

    #[test]
    fn test_exclusive_end_rolls_over_month_and_year() {
        let range = DateRange::new(date(2023, 1, 1), date(2023, 1, 31)).unwrap();
        assert_eq!(range.exclusive_end(), date(2023, 2, 1));

        let range = DateRange::new(date(2023, 1, 1), date(2023, 12, 31)).unwrap();
        assert_eq!(range.exclusive_end(), date(2024, 1, 1));
    }

    #[test]
    fn test_total_days() {
        let range = DateRange::new(date(2023, 1, 1), date(2023, 1, 10)).unwrap();
        assert_eq!(range.total_days(), 10);
    }

    #[test]
    fn test_contains() {
        let range = DateRange::new(date(2023, 1, 1), date(2023, 1, 10)).unwrap();
        assert!(range.contains(date(2023, 1, 1)));
        assert!(range.contains(date(2023, 1, 10)));
        assert!(!range.contains(date(2023, 1, 11)));
    }

    #[test]
    fn test_window_display() {
        assert_eq!(FetchWindow::Max.to_string(), "full history");
        let range = DateRange::new(date(2023, 1, 1), date(2023, 1, 10)).unwrap();
        assert_eq!(
            FetchWindow::from(range).to_string(),
            "2023-01-01 to 2023-01-10"
        );
    }

    #[test]
    fn test_window_accessors() {
        let range = DateRange::new(date(2023, 1, 1), date(2023, 1, 10)).unwrap();
        assert!(FetchWindow::Max.is_max());
        assert_eq!(FetchWindow::Max.range(), None);
        assert_eq!(FetchWindow::Range(range).range(), Some(range));
    }
}
