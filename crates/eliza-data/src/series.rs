//! Validated closing-price series.

use crate::error::{DataError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One closing price observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date of the observation.
    pub date: NaiveDate,
    /// Closing price (adjusted for splits and dividends when the provider
    /// supplies adjusted data).
    pub close: f64,
}

/// Ordered closing prices for one symbol over a date range.
///
/// The constructor enforces the series invariants: dates strictly
/// increasing with no duplicates, and every close finite and positive.
/// A series may be empty; consumers that need data must check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    symbol: String,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Create a validated price series.
    ///
    /// # Errors
    /// Returns [`DataError::InvalidSymbol`] for an empty symbol and
    /// [`DataError::InvalidSeries`] when dates are out of order, duplicated,
    /// or a close is non-finite or non-positive.
    pub fn new(symbol: impl Into<String>, points: Vec<PricePoint>) -> Result<Self> {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(DataError::InvalidSeries {
                    symbol,
                    reason: format!(
                        "dates must be strictly increasing, got {} after {}",
                        pair[1].date, pair[0].date
                    ),
                });
            }
        }

        for point in &points {
            if !point.close.is_finite() || point.close <= 0.0 {
                return Err(DataError::InvalidSeries {
                    symbol,
                    reason: format!("invalid close {} on {}", point.close, point.date),
                });
            }
        }

        Ok(Self { symbol, points })
    }

    /// Symbol the series belongs to.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Number of price points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The price points in date order.
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Date of the first observation, if any.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    /// Date of the last observation, if any.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn point(day: u32, close: f64) -> PricePoint {
        PricePoint {
            date: date(2024, 1, day),
            close,
        }
    }

    #[test]
    fn test_valid_series() {
        let series =
            PriceSeries::new("AAPL", vec![point(2, 185.0), point(3, 186.5), point(4, 184.2)])
                .unwrap();
        assert_eq!(series.symbol(), "AAPL");
        assert_eq!(series.len(), 3);
        assert_eq!(series.first_date(), Some(date(2024, 1, 2)));
        assert_eq!(series.last_date(), Some(date(2024, 1, 4)));
    }

    #[test]
    fn test_empty_series_is_allowed() {
        let series = PriceSeries::new("AAPL", vec![]).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.first_date(), None);
    }

    #[test]
    fn test_empty_symbol_rejected() {
        let result = PriceSeries::new("", vec![point(2, 185.0)]);
        assert!(matches!(result, Err(DataError::InvalidSymbol(_))));
    }

    #[test]
    fn test_out_of_order_dates_rejected() {
        let result = PriceSeries::new("AAPL", vec![point(3, 185.0), point(2, 186.5)]);
        assert!(matches!(result, Err(DataError::InvalidSeries { .. })));
    }

    #[test]
    fn test_duplicate_dates_rejected() {
        let result = PriceSeries::new("AAPL", vec![point(2, 185.0), point(2, 186.5)]);
        assert!(matches!(result, Err(DataError::InvalidSeries { .. })));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_invalid_close_rejected(#[case] close: f64) {
        let result = PriceSeries::new("AAPL", vec![point(2, close)]);
        assert!(matches!(result, Err(DataError::InvalidSeries { .. })));
    }
}
