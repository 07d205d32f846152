//! Assembled results of a CAPM analysis run.

use crate::volatility::VolatilityBreakdown;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Scatter and fit-line data for an optional plot request.
///
/// The engine hands this to the presentation collaborator; nothing in the
/// core renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    /// Aligned market returns (x axis).
    pub market_returns: Vec<f64>,
    /// Aligned stock returns (y axis).
    pub stock_returns: Vec<f64>,
    /// Fitted intercept.
    pub alpha: f64,
    /// Fitted slope.
    pub beta: f64,
}

/// Full result of a CAPM run for one stock/index pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapmAnalysis {
    /// Stock symbol.
    pub stock_symbol: String,
    /// Benchmark index symbol.
    pub index_symbol: String,
    /// First aligned return date.
    pub period_start: NaiveDate,
    /// Last aligned return date.
    pub period_end: NaiveDate,
    /// Number of aligned observations in the fit.
    pub observations: usize,
    /// OLS intercept.
    pub alpha: f64,
    /// OLS slope (market beta).
    pub beta: f64,
    /// Mean regression residual (prediction − actual convention).
    pub mean_residual: f64,
    /// Compounded market return over the period.
    pub market_return: f64,
    /// Compounded stock return over the period.
    ///
    /// In an annualized run this is the compounded period return multiplied
    /// by the periods-per-year constant, a simplifying approximation that
    /// skips compounding. The market return is left at its period value
    /// either way.
    pub stock_return: f64,
    /// Volatility decomposition over the same window.
    pub volatility: VolatilityBreakdown,
    /// Scatter data, present when a plot was requested.
    pub plot: Option<PlotData>,
}
