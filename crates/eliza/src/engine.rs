//! The analysis engine.
//!
//! Owns one stock and one benchmark price series, fetched once at
//! construction, and sequences the statistical pipeline: returns →
//! alignment → regression → volatility decomposition. Every call
//! recomputes from the held series; nothing is cached between calls.

use crate::audit::{FetchAudit, NoOpAudit};
use chrono::NaiveDate;
use eliza_data::{DataError, PriceSeries, PriceSource};
use eliza_model::{
    AlignedReturns, CapmAnalysis, CapmRegressor, DollarRiskBreakdown, ModelError, PlotData,
    ReturnSeries, RiskAttributor, RiskInputs, VolatilityDecomposer, VolatilityHorizon,
    compound_return,
};
use thiserror::Error;

/// Errors surfaced by the analysis engine.
#[derive(Debug, Error)]
pub enum ElizaError {
    /// Price data retrieval or validation failed
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// The statistical core rejected the computation
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, ElizaError>;

/// Single-security CAPM analysis engine.
///
/// Construct from already-fetched series with [`Eliza::new`] or fetch via
/// a [`PriceSource`] with [`Eliza::fetch`]. The two entry points are
/// [`Eliza::capm`] and [`Eliza::risk_decomposition`]; both are pure
/// computations, the first over the held series and the second over
/// caller-supplied scalars only.
#[derive(Debug)]
pub struct Eliza {
    stock: PriceSeries,
    index: PriceSeries,
    regressor: CapmRegressor,
    decomposer: VolatilityDecomposer,
    attributor: RiskAttributor,
}

impl Eliza {
    /// Build an engine from already-fetched price series.
    ///
    /// # Errors
    /// Fails fast with [`DataError::MissingData`] when either series is
    /// empty, rather than letting a later stage observe undefined data.
    pub fn new(stock: PriceSeries, index: PriceSeries) -> Result<Self> {
        for series in [&stock, &index] {
            if series.is_empty() {
                return Err(ElizaError::Data(DataError::MissingData {
                    symbol: series.symbol().to_string(),
                    reason: "empty price series".to_string(),
                }));
            }
        }

        Ok(Self {
            stock,
            index,
            regressor: CapmRegressor::default(),
            decomposer: VolatilityDecomposer::default(),
            attributor: RiskAttributor::new(),
        })
    }

    /// Fetch both series from a price source and build the engine.
    pub async fn fetch<S: PriceSource>(
        source: &S,
        stock_ticker: &str,
        index_ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self> {
        Self::fetch_with_audit(source, stock_ticker, index_ticker, start, end, &mut NoOpAudit)
            .await
    }

    /// Fetch both series, recording each fetch with `audit`.
    ///
    /// One fetch per ticker, index first; the series are never refreshed
    /// afterwards.
    pub async fn fetch_with_audit<S: PriceSource>(
        source: &S,
        stock_ticker: &str,
        index_ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
        audit: &mut dyn FetchAudit,
    ) -> Result<Self> {
        let index = source.fetch(index_ticker, start, end).await?;
        audit.record(&index);

        let stock = source.fetch(stock_ticker, start, end).await?;
        audit.record(&stock);

        Self::new(stock, index)
    }

    /// The held stock price series.
    pub const fn stock(&self) -> &PriceSeries {
        &self.stock
    }

    /// The held benchmark price series.
    pub const fn index(&self) -> &PriceSeries {
        &self.index
    }

    /// Run the CAPM pipeline over the held series.
    ///
    /// Computes periodic returns for both series, aligns them on common
    /// dates, fits the market model, and decomposes volatility at the
    /// requested horizon. When `plot` is set the result carries the
    /// scatter data for the presentation layer; the engine renders
    /// nothing itself.
    ///
    /// When `annualized` is set, volatilities are scaled by √252 and the
    /// compounded stock return is multiplied by 252, an approximation that
    /// skips compounding; the market return is left at its period value.
    pub fn capm(&self, plot: bool, annualized: bool) -> Result<CapmAnalysis> {
        let market_returns = ReturnSeries::from_prices(&self.index);
        let stock_returns = ReturnSeries::from_prices(&self.stock);
        let aligned = AlignedReturns::align(&market_returns, &stock_returns)?;

        let fit = self.regressor.fit(&aligned)?;

        let horizon = if annualized {
            VolatilityHorizon::Annualized
        } else {
            VolatilityHorizon::Daily
        };
        let volatility = self.decomposer.decompose(&aligned, fit.beta, horizon)?;

        let market_return = compound_return(aligned.market());
        let mut stock_return = compound_return(aligned.stock());
        if annualized {
            stock_return *= self.decomposer.config().periods_per_year;
        }

        let plot_data = plot.then(|| PlotData {
            market_returns: aligned.market().to_vec(),
            stock_returns: aligned.stock().to_vec(),
            alpha: fit.alpha,
            beta: fit.beta,
        });

        Ok(CapmAnalysis {
            stock_symbol: self.stock.symbol().to_string(),
            index_symbol: self.index.symbol().to_string(),
            period_start: aligned.first_date(),
            period_end: aligned.last_date(),
            observations: aligned.len(),
            alpha: fit.alpha,
            beta: fit.beta,
            mean_residual: fit.mean_residual,
            market_return,
            stock_return,
            volatility,
            plot: plot_data,
        })
    }

    /// Dollar risk attribution from caller-supplied figures.
    ///
    /// Independent of the fetched series: beta and the volatility
    /// percentages are taken as given, not re-derived.
    pub fn risk_decomposition(
        &self,
        stock_value: f64,
        beta: f64,
        market_vol_pct: f64,
        idio_vol_pct: f64,
    ) -> Result<DollarRiskBreakdown> {
        let inputs = RiskInputs {
            stock_value,
            beta,
            market_vol_pct,
            idio_vol_pct,
        };
        Ok(self.attributor.attribute(&inputs)?)
    }
}
