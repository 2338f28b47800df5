//! Geometric Brownian motion path simulation.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::StandardNormal;

use crate::GbmParams;

/// A simulated daily price path.
///
/// The first element is the spot price the projection starts from. The
/// log-likelihood is the summed log density of the standard normal
/// shocks that produced the path; a batch's highest value marks its most
/// likely path.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedPath {
    /// Projected prices, spot first.
    pub prices: Vec<f64>,
    /// Summed log density of the sampled shocks.
    pub log_likelihood: f64,
}

impl SimulatedPath {
    /// Returns the last projected price.
    #[must_use]
    pub fn final_price(&self) -> f64 {
        self.prices.last().copied().unwrap_or(f64::NAN)
    }

    /// Returns the lowest projected price.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.prices.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Returns the highest projected price.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.prices
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Simulates one path of `days` values starting from `spot`.
///
/// Each step multiplies the previous price by
/// `exp(drift + volatility * shock)` with `shock ~ N(0, 1)`.
pub fn simulate_path<R: Rng>(
    params: GbmParams,
    spot: f64,
    days: usize,
    rng: &mut R,
) -> SimulatedPath {
    let mut prices = Vec::with_capacity(days.max(1));
    let mut price = spot;
    prices.push(price);

    let mut log_likelihood = 0.0;
    for _ in 1..days {
        let shock: f64 = rng.sample(StandardNormal);
        log_likelihood += standard_normal_log_pdf(shock);
        price *= (params.drift + params.volatility * shock).exp();
        prices.push(price);
    }

    SimulatedPath {
        prices,
        log_likelihood,
    }
}

/// Runs `count` independent paths from a single seeded generator.
#[must_use]
pub fn simulate_paths(
    params: GbmParams,
    spot: f64,
    days: usize,
    count: usize,
    seed: u64,
) -> Vec<SimulatedPath> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| simulate_path(params, spot, days, &mut rng))
        .collect()
}

/// The deterministic zero-shock path: pure drift, the modal outcome
/// under the calibrated model.
#[must_use]
pub fn drift_path(params: GbmParams, spot: f64, days: usize) -> Vec<f64> {
    let mut prices = Vec::with_capacity(days.max(1));
    let mut price = spot;
    prices.push(price);
    for _ in 1..days {
        price *= params.drift.exp();
        prices.push(price);
    }
    prices
}

/// Index of the path with the highest sampling log-likelihood.
#[must_use]
pub fn most_likely(paths: &[SimulatedPath]) -> Option<usize> {
    paths
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.log_likelihood.total_cmp(&b.log_likelihood))
        .map(|(index, _)| index)
}

fn standard_normal_log_pdf(z: f64) -> f64 {
    -0.5 * z * z - 0.5 * (2.0 * std::f64::consts::PI).ln()
}
