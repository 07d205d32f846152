//! Dollar-denominated risk attribution for a single position.

use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};

/// Caller-supplied inputs for dollar risk attribution.
///
/// Volatilities are whole-percent figures, e.g. `12.5` meaning 12.5%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskInputs {
    /// Position value in currency units; must be positive.
    pub stock_value: f64,
    /// Market sensitivity of the position.
    pub beta: f64,
    /// Market volatility in whole percent.
    pub market_vol_pct: f64,
    /// Idiosyncratic volatility in whole percent.
    pub idio_vol_pct: f64,
}

/// Dollar risk split into market and idiosyncratic components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DollarRiskBreakdown {
    /// Dollar risk attributable to market exposure.
    pub market_risk: f64,
    /// Dollar risk attributable to the position itself.
    pub idiosyncratic_risk: f64,
    /// Combined dollar risk.
    ///
    /// The components are combined in quadrature, which assumes market and
    /// idiosyncratic shocks are independent. OLS residuals are uncorrelated
    /// with the regressor in-sample, so the assumption is consistent with
    /// the fitted model that produced the volatilities.
    pub total_risk: f64,
}

/// Converts a volatility decomposition and a position size into dollar risk.
#[derive(Debug, Default)]
pub struct RiskAttributor;

impl RiskAttributor {
    /// Create a new attributor.
    pub const fn new() -> Self {
        Self
    }

    /// Compute the dollar risk breakdown for a position.
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidInput`] for a non-positive or
    /// non-finite position value, non-finite beta, or negative or
    /// non-finite volatility percentages.
    ///
    /// # Examples
    ///
    /// ```
    /// use eliza_model::{RiskAttributor, RiskInputs};
    ///
    /// let risk = RiskAttributor::new()
    ///     .attribute(&RiskInputs {
    ///         stock_value: 10_000.0,
    ///         beta: 1.2,
    ///         market_vol_pct: 15.0,
    ///         idio_vol_pct: 10.0,
    ///     })
    ///     .unwrap();
    ///
    /// assert!((risk.market_risk - 1_800.0).abs() < 1e-9);
    /// assert!((risk.idiosyncratic_risk - 1_000.0).abs() < 1e-9);
    /// ```
    pub fn attribute(&self, inputs: &RiskInputs) -> Result<DollarRiskBreakdown> {
        if !inputs.stock_value.is_finite() || inputs.stock_value <= 0.0 {
            return Err(ModelError::InvalidInput(format!(
                "stock value must be positive, got {}",
                inputs.stock_value
            )));
        }
        if !inputs.beta.is_finite() {
            return Err(ModelError::InvalidInput(format!(
                "beta must be finite, got {}",
                inputs.beta
            )));
        }
        for (name, pct) in [
            ("market volatility", inputs.market_vol_pct),
            ("idiosyncratic volatility", inputs.idio_vol_pct),
        ] {
            if !pct.is_finite() || pct < 0.0 {
                return Err(ModelError::InvalidInput(format!(
                    "{name} must be a non-negative percentage, got {pct}"
                )));
            }
        }

        // Convert whole percent to fractions
        let market_vol = inputs.market_vol_pct / 100.0;
        let idio_vol = inputs.idio_vol_pct / 100.0;

        let market_risk = inputs.beta * market_vol * inputs.stock_value;
        let idiosyncratic_risk = idio_vol * inputs.stock_value;
        let total_risk = (market_risk.powi(2) + idiosyncratic_risk.powi(2)).sqrt();

        Ok(DollarRiskBreakdown {
            market_risk,
            idiosyncratic_risk,
            total_risk,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_reference_position() {
        let inputs = RiskInputs {
            stock_value: 10_000.0,
            beta: 1.2,
            market_vol_pct: 15.0,
            idio_vol_pct: 10.0,
        };
        let risk = RiskAttributor::new().attribute(&inputs).unwrap();

        assert_relative_eq!(risk.market_risk, 1_800.0, epsilon = 1e-9);
        assert_relative_eq!(risk.idiosyncratic_risk, 1_000.0, epsilon = 1e-9);
        assert_relative_eq!(risk.total_risk, 4_240_000.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn test_zero_beta_has_no_market_risk() {
        let inputs = RiskInputs {
            stock_value: 10_000.0,
            beta: 0.0,
            market_vol_pct: 15.0,
            idio_vol_pct: 10.0,
        };
        let risk = RiskAttributor::new().attribute(&inputs).unwrap();

        assert_relative_eq!(risk.market_risk, 0.0, epsilon = 1e-12);
        assert_relative_eq!(risk.total_risk, risk.idiosyncratic_risk, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_beta_yields_negative_market_risk() {
        let inputs = RiskInputs {
            stock_value: 10_000.0,
            beta: -0.5,
            market_vol_pct: 10.0,
            idio_vol_pct: 5.0,
        };
        let risk = RiskAttributor::new().attribute(&inputs).unwrap();

        assert_relative_eq!(risk.market_risk, -500.0, epsilon = 1e-9);
        assert!(risk.total_risk > 0.0);
    }

    #[rstest]
    #[case(0.0, 1.0, 15.0, 10.0)]
    #[case(-10_000.0, 1.0, 15.0, 10.0)]
    #[case(f64::NAN, 1.0, 15.0, 10.0)]
    #[case(10_000.0, f64::NAN, 15.0, 10.0)]
    #[case(10_000.0, 1.0, -15.0, 10.0)]
    #[case(10_000.0, 1.0, 15.0, -10.0)]
    #[case(10_000.0, 1.0, f64::INFINITY, 10.0)]
    fn test_invalid_inputs_rejected(
        #[case] stock_value: f64,
        #[case] beta: f64,
        #[case] market_vol_pct: f64,
        #[case] idio_vol_pct: f64,
    ) {
        let inputs = RiskInputs {
            stock_value,
            beta,
            market_vol_pct,
            idio_vol_pct,
        };
        let result = RiskAttributor::new().attribute(&inputs);
        assert!(matches!(result, Err(ModelError::InvalidInput(_))));
    }
}
