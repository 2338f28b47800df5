//! Model calibration from historical closes.

use thiserror::Error;

/// Errors that can occur during calibration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulateError {
    /// The close series is too short to compute a return.
    #[error("Not enough price history: {len} closes (need at least 2)")]
    NotEnoughData {
        /// Number of closes supplied.
        len: usize,
    },

    /// A close was zero, negative, or not finite.
    #[error("Close at index {index} is not a positive number: {price}")]
    InvalidPrice {
        /// Index of the offending close.
        index: usize,
        /// The offending value.
        price: f64,
    },
}

/// Geometric Brownian motion parameters calibrated from daily closes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GbmParams {
    /// Daily drift term: mean log return less half the variance.
    pub drift: f64,
    /// Daily volatility: standard deviation of the log returns.
    pub volatility: f64,
}

impl GbmParams {
    /// Calibrates drift and volatility from a series of daily closes.
    ///
    /// Uses log returns with population variance. One simulated step
    /// multiplies the price by `exp(drift + volatility * shock)`.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two closes are supplied, or if any
    /// close is not a positive finite number.
    pub fn from_closes(closes: &[f64]) -> Result<Self, SimulateError> {
        if closes.len() < 2 {
            return Err(SimulateError::NotEnoughData { len: closes.len() });
        }
        for (index, &price) in closes.iter().enumerate() {
            if !price.is_finite() || price <= 0.0 {
                return Err(SimulateError::InvalidPrice { index, price });
            }
        }

        let returns: Vec<f64> = closes
            .windows(2)
            .map(|pair| (pair[1] / pair[0]).ln())
            .collect();
        let mean = returns.iter().sum::<f64>() / returns.len() as f64;
        let variance =
            returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / returns.len() as f64;

        Ok(Self {
            drift: mean - variance / 2.0,
            volatility: variance.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_growth_has_zero_volatility() {
        // Every close is 2% above the previous one: all log returns are
        // identical, so variance is zero and drift is the log ratio.
        let closes = [100.0, 102.0, 104.04, 106.1208];
        let params = GbmParams::from_closes(&closes).unwrap();

        assert_relative_eq!(params.volatility, 0.0, epsilon = 1e-9);
        assert_relative_eq!(params.drift, 1.02_f64.ln(), epsilon = 1e-9);
    }

    #[test]
    fn test_known_two_return_series() {
        // Returns ln(2) and ln(0.5) = -ln(2): mean 0, variance ln(2)^2.
        let closes = [100.0, 200.0, 100.0];
        let params = GbmParams::from_closes(&closes).unwrap();

        let ln2 = 2.0_f64.ln();
        assert_relative_eq!(params.volatility, ln2, epsilon = 1e-9);
        assert_relative_eq!(params.drift, -(ln2 * ln2) / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_short_series() {
        assert_eq!(
            GbmParams::from_closes(&[100.0]),
            Err(SimulateError::NotEnoughData { len: 1 })
        );
        assert_eq!(
            GbmParams::from_closes(&[]),
            Err(SimulateError::NotEnoughData { len: 0 })
        );
    }

    #[test]
    fn test_rejects_non_positive_close() {
        let result = GbmParams::from_closes(&[100.0, 0.0, 104.0]);
        assert_eq!(
            result,
            Err(SimulateError::InvalidPrice {
                index: 1,
                price: 0.0,
            })
        );

        assert!(GbmParams::from_closes(&[100.0, -5.0]).is_err());
        assert!(GbmParams::from_closes(&[100.0, f64::NAN]).is_err());
    }
}
