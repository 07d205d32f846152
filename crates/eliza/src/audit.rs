//! Fetch auditing.
//!
//! Callers that want a record of what was fetched inject an implementation
//! of [`FetchAudit`]; the engine itself keeps no history and there is no
//! process-wide log.

use chrono::NaiveDate;
use eliza_data::PriceSeries;

/// Observes price-series fetches.
pub trait FetchAudit {
    /// Called once per fetched series, in fetch order.
    fn record(&mut self, series: &PriceSeries);
}

/// Ignores all fetches.
#[derive(Debug, Default)]
pub struct NoOpAudit;

impl FetchAudit for NoOpAudit {
    fn record(&mut self, _series: &PriceSeries) {}
}

/// One recorded fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRecord {
    /// Symbol that was fetched.
    pub symbol: String,
    /// Number of price points returned.
    pub points: usize,
    /// Date of the first observation, if any.
    pub first_date: Option<NaiveDate>,
    /// Date of the last observation, if any.
    pub last_date: Option<NaiveDate>,
}

/// In-memory fetch history.
#[derive(Debug, Default)]
pub struct FetchHistory {
    records: Vec<FetchRecord>,
}

impl FetchHistory {
    /// Create an empty history.
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Recorded fetches in order.
    pub fn records(&self) -> &[FetchRecord] {
        &self.records
    }

    /// Number of recorded fetches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether anything has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FetchAudit for FetchHistory {
    fn record(&mut self, series: &PriceSeries) {
        self.records.push(FetchRecord {
            symbol: series.symbol().to_string(),
            points: series.len(),
            first_date: series.first_date(),
            last_date: series.last_date(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eliza_data::PricePoint;

    #[test]
    fn test_history_records_fetches() {
        let series = PriceSeries::new(
            "AAPL",
            vec![PricePoint {
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                close: 185.0,
            }],
        )
        .unwrap();

        let mut history = FetchHistory::new();
        history.record(&series);

        assert_eq!(history.len(), 1);
        assert_eq!(history.records()[0].symbol, "AAPL");
        assert_eq!(history.records()[0].points, 1);
    }
}
