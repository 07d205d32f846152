//! Closing-price retrieval from Yahoo Finance.

use crate::error::{DataError, Result};
use crate::series::{PricePoint, PriceSeries};
use crate::source::PriceSource;
use chrono::{NaiveDate, NaiveTime};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use yahoo_finance_api as yahoo;

/// Yahoo Finance closing-price provider with rate limiting.
pub struct YahooCloseProvider {
    provider: yahoo::YahooConnector,
    rate_limit_delay: Duration,
}

impl std::fmt::Debug for YahooCloseProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YahooCloseProvider")
            .field("rate_limit_delay", &self.rate_limit_delay)
            .finish_non_exhaustive()
    }
}

impl YahooCloseProvider {
    /// Create a new provider with default rate limiting (1 req/sec).
    pub fn new() -> Self {
        Self {
            provider: yahoo::YahooConnector::new().expect("Failed to create Yahoo connector"),
            rate_limit_delay: Duration::from_millis(1000),
        }
    }

    /// Create a new provider with custom rate limiting.
    pub fn with_rate_limit(rate_limit_delay: Duration) -> Self {
        Self {
            provider: yahoo::YahooConnector::new().expect("Failed to create Yahoo connector"),
            rate_limit_delay,
        }
    }

    /// Fetch adjusted closing prices for a single symbol.
    ///
    /// # Arguments
    /// * `symbol` - The ticker symbol (e.g., "AAPL")
    /// * `start` - Start date for the data
    /// * `end` - End date for the data
    ///
    /// # Returns
    /// A validated [`PriceSeries`] of adjusted closes in ascending date
    /// order with duplicates removed.
    pub async fn fetch_closes(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries> {
        // Validate date range
        if start > end {
            return Err(DataError::InvalidDateRange { start, end });
        }

        // Validate symbol
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        let start_time = to_offset_datetime(start)?;
        let end_time = to_offset_datetime(end)?;

        // Fetch data from Yahoo Finance
        let response = self
            .provider
            .get_quote_history(symbol, start_time, end_time)
            .await?;

        let quotes = response
            .quotes()
            .map_err(|e| DataError::YahooApi(e.to_string()))?;

        if quotes.is_empty() {
            return Err(DataError::MissingData {
                symbol: symbol.to_string(),
                reason: "No data returned from Yahoo Finance".to_string(),
            });
        }

        let mut points = Vec::with_capacity(quotes.len());
        for quote in &quotes {
            let date = chrono::DateTime::from_timestamp(quote.timestamp, 0)
                .ok_or_else(|| {
                    DataError::TimeConversion(format!(
                        "timestamp {} out of range",
                        quote.timestamp
                    ))
                })?
                .date_naive();
            points.push(PricePoint {
                date,
                close: quote.adjclose,
            });
        }

        // Yahoo occasionally returns out-of-order or duplicate rows, and
        // zero closes for halted sessions.
        points.sort_by_key(|p: &PricePoint| p.date);
        points.dedup_by_key(|p| p.date);
        points.retain(|p| p.close.is_finite() && p.close > 0.0);

        if points.is_empty() {
            return Err(DataError::MissingData {
                symbol: symbol.to_string(),
                reason: "No usable closing prices in range".to_string(),
            });
        }

        let series = PriceSeries::new(symbol, points)?;

        // Apply rate limiting
        sleep(self.rate_limit_delay).await;

        Ok(series)
    }
}

impl Default for YahooCloseProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceSource for YahooCloseProvider {
    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Future<Output = Result<PriceSeries>> + Send {
        self.fetch_closes(symbol, start, end)
    }
}

fn to_offset_datetime(date: NaiveDate) -> Result<time::OffsetDateTime> {
    let timestamp = date.and_time(NaiveTime::MIN).and_utc().timestamp();
    time::OffsetDateTime::from_unix_timestamp(timestamp)
        .map_err(|e| DataError::TimeConversion(e.to_string()))
}
