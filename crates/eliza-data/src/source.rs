//! Pluggable price-data sources.

use crate::error::Result;
use crate::series::PriceSeries;
use chrono::NaiveDate;
use std::future::Future;

/// A source of historical closing prices.
///
/// Implementations must return dates in ascending order with no duplicates
/// (the [`PriceSeries`](crate::PriceSeries) constructor enforces this).
/// A range with no data is reported as [`DataError::MissingData`], not as an
/// empty series.
///
/// [`DataError::MissingData`]: crate::DataError::MissingData
pub trait PriceSource {
    /// Fetch closing prices for `symbol` over `[start, end)`.
    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Future<Output = Result<PriceSeries>> + Send;
}
