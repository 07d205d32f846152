//! Volatility decomposition into market-driven and idiosyncratic parts.
//!
//! Given the fitted beta, total stock volatility splits as
//! `stock_vol² = beta²·market_vol² + idio_vol²`; the idiosyncratic part is
//! recovered by subtracting the systematic variance and taking the root.

use crate::error::{ModelError, Result};
use crate::returns::AlignedReturns;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Measurement horizon for the decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolatilityHorizon {
    /// Standard deviations of per-period returns, unscaled.
    Daily,
    /// Per-period standard deviations scaled by the square root of the
    /// configured periods per year.
    Annualized,
}

/// Configuration for volatility decomposition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecomposerConfig {
    /// Trading periods per year used for annualization (default: 252)
    pub periods_per_year: f64,
    /// Idiosyncratic radicands within this distance below zero are treated
    /// as floating-point noise and clamp to zero (default: 1e-12). A stock
    /// that tracks its index exactly lands here; anything more negative is
    /// an error.
    pub radicand_tolerance: f64,
}

impl Default for DecomposerConfig {
    fn default() -> Self {
        Self {
            periods_per_year: 252.0,
            radicand_tolerance: 1e-12,
        }
    }
}

/// Stock volatility split into market-attributable and residual parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityBreakdown {
    /// Standard deviation of market returns.
    pub market_vol: f64,
    /// Standard deviation of stock returns.
    pub stock_vol: f64,
    /// Volatility not explained by market exposure:
    /// `sqrt(stock_vol² − beta²·market_vol²)`.
    pub idiosyncratic_vol: f64,
    /// Whether the figures are annualized.
    pub annualized: bool,
    /// Legacy combined-volatility figure, daily horizon only.
    ///
    /// Computed as `sqrt((market_vol·beta)² + stock_vol)`, which mixes a
    /// variance with a standard deviation. Kept for compatibility with the
    /// long-standing daily report; new consumers should combine the
    /// component volatilities themselves instead.
    pub legacy_total_vol: Option<f64>,
}

/// Decomposes total stock volatility into market and idiosyncratic parts.
#[derive(Debug, Default)]
pub struct VolatilityDecomposer {
    config: DecomposerConfig,
}

impl VolatilityDecomposer {
    /// Create a new decomposer.
    pub const fn new(config: DecomposerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub const fn config(&self) -> &DecomposerConfig {
        &self.config
    }

    /// Decompose the volatility of aligned returns under a fitted beta.
    ///
    /// # Errors
    /// Returns [`ModelError::InsufficientData`] for fewer than two
    /// observations and [`ModelError::NegativeVariance`] when the
    /// systematic variance exceeds the total beyond floating-point
    /// tolerance.
    pub fn decompose(
        &self,
        returns: &AlignedReturns,
        beta: f64,
        horizon: VolatilityHorizon,
    ) -> Result<VolatilityBreakdown> {
        let n = returns.len();
        if n < 2 {
            return Err(ModelError::InsufficientData {
                required: 2,
                actual: n,
            });
        }

        let mut market_vol = sample_std(returns.market());
        let mut stock_vol = sample_std(returns.stock());
        if horizon == VolatilityHorizon::Annualized {
            let scale = self.config.periods_per_year.sqrt();
            market_vol *= scale;
            stock_vol *= scale;
        }

        let radicand = stock_vol.powi(2) - beta.powi(2) * market_vol.powi(2);
        let idiosyncratic_vol = if radicand >= 0.0 {
            radicand.sqrt()
        } else if radicand >= -self.config.radicand_tolerance {
            0.0
        } else {
            return Err(ModelError::NegativeVariance { radicand });
        };

        let legacy_total_vol = match horizon {
            VolatilityHorizon::Daily => Some(((market_vol * beta).powi(2) + stock_vol).sqrt()),
            VolatilityHorizon::Annualized => None,
        };

        Ok(VolatilityBreakdown {
            market_vol,
            stock_vol,
            idiosyncratic_vol,
            annualized: horizon == VolatilityHorizon::Annualized,
            legacy_total_vol,
        })
    }
}

/// Sample standard deviation (ddof = 1).
fn sample_std(values: &Array1<f64>) -> f64 {
    let n = values.len() as f64;
    let mean = values.mean().unwrap_or(0.0);
    let variance = values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}
