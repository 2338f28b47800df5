//! Ticker symbol representation.

use std::str::FromStr;

use crate::TickerError;

/// A ticker symbol for a listed instrument.
///
/// The symbol is opaque: anything non-empty is accepted, trimmed, and
/// passed to the data provider unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticker(String);

impl Ticker {
    /// Creates a ticker from a symbol string.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is empty or whitespace only.
    pub fn new(symbol: impl Into<String>) -> Result<Self, TickerError> {
        let symbol = symbol.into();
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err(TickerError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Ticker {
    type Err = TickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
