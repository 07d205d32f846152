//! Periodic return computation and date alignment.

use crate::error::{ModelError, Result};
use chrono::NaiveDate;
use eliza_data::PriceSeries;
use ndarray::Array1;
use std::cmp::Ordering;

/// Simple periodic returns derived from a price series.
///
/// `values[i]` is `close[i+1] / close[i] - 1`, dated at the later of the
/// two observations. The first price contributes no return, so the series
/// is one element shorter than its source.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnSeries {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl ReturnSeries {
    /// Compute simple returns from a price series.
    pub fn from_prices(prices: &PriceSeries) -> Self {
        let points = prices.points();
        let mut dates = Vec::with_capacity(points.len().saturating_sub(1));
        let mut values = Vec::with_capacity(points.len().saturating_sub(1));

        for pair in points.windows(2) {
            let value = pair[1].close / pair[0].close - 1.0;
            dates.push(pair[1].date);
            values.push(value);
        }

        Self { dates, values }
    }

    /// Build a return series from precomputed parts.
    ///
    /// # Panics
    /// Panics if `dates` and `values` differ in length.
    pub fn from_parts(dates: Vec<NaiveDate>, values: Vec<f64>) -> Self {
        assert_eq!(dates.len(), values.len(), "dates and values must pair up");
        Self { dates, values }
    }

    /// Number of returns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no returns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Return dates in ascending order.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Return values, parallel to [`dates`](Self::dates).
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Market and stock returns restricted to their common dates.
///
/// Built by an inner join on date; rows where either side is missing or
/// non-finite are dropped. All three sequences always have equal length,
/// and the struct is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedReturns {
    dates: Vec<NaiveDate>,
    market: Array1<f64>,
    stock: Array1<f64>,
}

impl AlignedReturns {
    /// Inner-join two return series on date.
    ///
    /// Alignment is symmetric in the date set it keeps, and aligning an
    /// already-aligned pair again is a no-op.
    ///
    /// # Errors
    /// Returns [`ModelError::InsufficientData`] when no dates overlap.
    pub fn align(market: &ReturnSeries, stock: &ReturnSeries) -> Result<Self> {
        let mut dates = Vec::new();
        let mut market_values = Vec::new();
        let mut stock_values = Vec::new();

        let (mut i, mut j) = (0, 0);
        while i < market.len() && j < stock.len() {
            match market.dates[i].cmp(&stock.dates[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    let (m, s) = (market.values[i], stock.values[j]);
                    if m.is_finite() && s.is_finite() {
                        dates.push(market.dates[i]);
                        market_values.push(m);
                        stock_values.push(s);
                    }
                    i += 1;
                    j += 1;
                }
            }
        }

        if dates.is_empty() {
            return Err(ModelError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }

        Ok(Self {
            dates,
            market: Array1::from_vec(market_values),
            stock: Array1::from_vec(stock_values),
        })
    }

    /// Number of aligned observations.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Always `false`; alignment fails instead of producing an empty set.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Common dates in ascending order.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// First aligned date.
    pub fn first_date(&self) -> NaiveDate {
        self.dates[0]
    }

    /// Last aligned date.
    pub fn last_date(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }

    /// Market returns, parallel to [`dates`](Self::dates).
    pub fn market(&self) -> &Array1<f64> {
        &self.market
    }

    /// Stock returns, parallel to [`dates`](Self::dates).
    pub fn stock(&self) -> &Array1<f64> {
        &self.stock
    }
}

/// Compounded period return: `Π(1 + rᵢ) − 1`.
///
/// # Examples
///
/// ```
/// use eliza_model::compound_return;
/// use ndarray::Array1;
///
/// let returns = Array1::from_vec(vec![0.10, -0.10]);
/// assert!((compound_return(&returns) + 0.01).abs() < 1e-12);
/// ```
pub fn compound_return(returns: &Array1<f64>) -> f64 {
    returns.iter().fold(1.0, |acc, r| acc * (1.0 + r)) - 1.0
}
