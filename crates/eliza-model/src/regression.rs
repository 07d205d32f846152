//! Ordinary least squares fit of the single-factor market model.
//!
//! Fits `stock_return = alpha + beta * market_return + ε` with an intercept
//! term. Beta measures systematic risk, alpha the return unexplained by
//! market movement.

use crate::error::{ModelError, Result};
use crate::returns::AlignedReturns;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Configuration for the CAPM regression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressorConfig {
    /// Minimum number of aligned observations required (default: 2)
    pub min_observations: usize,
    /// Market-return variance below this threshold is treated as a
    /// constant regressor (default: 1e-12)
    pub variance_tolerance: f64,
}

impl Default for RegressorConfig {
    fn default() -> Self {
        Self {
            min_observations: 2,
            variance_tolerance: 1e-12,
        }
    }
}

/// Fitted market model for one security.
///
/// Residuals follow the prediction-minus-actual convention: each residual
/// is `(alpha + beta * market) - stock`, the mirror image of the textbook
/// actual-minus-predicted residual. The convention is applied consistently
/// everywhere a residual appears; since the fit includes an intercept, the
/// mean residual is still zero up to floating point under either sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// OLS intercept: return unexplained by market movement.
    pub alpha: f64,
    /// OLS slope: sensitivity of stock returns to market returns.
    pub beta: f64,
    /// Per-observation residuals (prediction − actual), aligned to the
    /// regression dates.
    pub residuals: Vec<(NaiveDate, f64)>,
    /// Arithmetic mean of the residuals.
    pub mean_residual: f64,
}

/// Fits the single-factor market model by ordinary least squares.
#[derive(Debug, Default)]
pub struct CapmRegressor {
    config: RegressorConfig,
}

impl CapmRegressor {
    /// Create a new regressor.
    pub const fn new(config: RegressorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub const fn config(&self) -> &RegressorConfig {
        &self.config
    }

    /// Fit the model over aligned returns.
    ///
    /// Uses the closed-form simple-regression solution: the slope is the
    /// ratio of centered cross-products to the centered market sum of
    /// squares, the intercept follows from the means.
    ///
    /// # Errors
    /// Returns [`ModelError::DegenerateRegression`] when there are fewer
    /// observations than the configured minimum or the market returns have
    /// no variance.
    pub fn fit(&self, returns: &AlignedReturns) -> Result<RegressionResult> {
        let n = returns.len();
        if n < self.config.min_observations {
            return Err(ModelError::DegenerateRegression {
                reason: format!(
                    "need at least {} observations, got {n}",
                    self.config.min_observations
                ),
            });
        }

        let market = returns.market();
        let stock = returns.stock();
        let market_mean = market.mean().unwrap_or(0.0);
        let stock_mean = stock.mean().unwrap_or(0.0);

        let mut ss_xy = 0.0;
        let mut ss_xx = 0.0;
        for (&x, &y) in market.iter().zip(stock.iter()) {
            let dx = x - market_mean;
            ss_xy += dx * (y - stock_mean);
            ss_xx += dx * dx;
        }

        if ss_xx < self.config.variance_tolerance {
            return Err(ModelError::DegenerateRegression {
                reason: format!("market returns have zero variance over {n} observations"),
            });
        }

        let beta = ss_xy / ss_xx;
        let alpha = stock_mean - beta * market_mean;

        let residuals: Vec<(NaiveDate, f64)> = returns
            .dates()
            .iter()
            .zip(market.iter().zip(stock.iter()))
            .map(|(&date, (&x, &y))| (date, (alpha + beta * x) - y))
            .collect();

        let mean_residual = residuals.iter().map(|(_, r)| r).sum::<f64>() / n as f64;

        Ok(RegressionResult {
            alpha,
            beta,
            residuals,
            mean_residual,
        })
    }
}
