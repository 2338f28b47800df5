//! Trailing calibration windows.

use std::str::FromStr;

/// Trailing window of history used to calibrate the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Period {
    /// Last 30 calendar days.
    #[default]
    Month1,
    /// Last 180 calendar days.
    Month6,
    /// Last 365 calendar days.
    Year1,
    /// Last 730 calendar days.
    Year2,
}

impl Period {
    /// Returns the window length in calendar days.
    #[must_use]
    pub const fn days(&self) -> u32 {
        match self {
            Self::Month1 => 30,
            Self::Month6 => 180,
            Self::Year1 => 365,
            Self::Year2 => 730,
        }
    }

    /// Returns the period as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Month1 => "1m",
            Self::Month6 => "6m",
            Self::Year1 => "1y",
            Self::Year2 => "2y",
        }
    }

    /// Returns all available periods.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Month1, Self::Month6, Self::Year1, Self::Year2]
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1m" | "1mo" | "month" | "1month" => Ok(Self::Month1),
            "6m" | "6mo" | "6month" | "6months" => Ok(Self::Month6),
            "1y" | "12m" | "year" | "1year" => Ok(Self::Year1),
            "2y" | "24m" | "2year" | "2years" => Ok(Self::Year2),
            _ => Err(PeriodParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid period string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodParseError(String);

impl std::fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid period '{}', expected one of: 1m, 6m, 1y, 2y",
            self.0
        )
    }
}

impl std::error::Error for PeriodParseError {}
