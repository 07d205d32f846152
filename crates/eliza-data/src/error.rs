//! Error types for data operations.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur during data operations.
#[derive(Debug, Error)]
pub enum DataError {
    /// Yahoo Finance API error
    #[error("Yahoo Finance API error: {0}")]
    YahooApi(String),

    /// Invalid date range
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date of the range
        start: NaiveDate,
        /// End date of the range
        end: NaiveDate,
    },

    /// Invalid symbol
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Missing data
    #[error("Missing data for {symbol}: {reason}")]
    MissingData {
        /// Symbol that was queried
        symbol: String,
        /// Reason for missing data
        reason: String,
    },

    /// Time conversion error
    #[error("Time conversion error: {0}")]
    TimeConversion(String),

    /// Price series failed validation
    #[error("Invalid price series for {symbol}: {reason}")]
    InvalidSeries {
        /// Symbol the series belongs to
        symbol: String,
        /// Reason validation failed
        reason: String,
    },
}

impl From<yahoo_finance_api::YahooError> for DataError {
    fn from(err: yahoo_finance_api::YahooError) -> Self {
        Self::YahooApi(err.to_string())
    }
}
