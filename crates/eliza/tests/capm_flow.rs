//! End-to-end tests for the CAPM analysis flow over synthetic prices.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use eliza::engine::Eliza;
use eliza::{ElizaError, FetchHistory};
use eliza_data::{DataError, PricePoint, PriceSeries, PriceSource};
use eliza_model::ModelError;
use eliza_output::{ConsoleRenderer, NoOpRenderer, ResultsRenderer};
use std::collections::HashMap;
use std::future::Future;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

fn series(symbol: &str, closes: &[(u32, f64)]) -> PriceSeries {
    PriceSeries::new(
        symbol,
        closes
            .iter()
            .map(|&(day, close)| PricePoint {
                date: date(day),
                close,
            })
            .collect(),
    )
    .unwrap()
}

/// Stock prices whose daily returns are exactly `beta` times the market's.
fn leveraged_series(symbol: &str, market: &PriceSeries, beta: f64) -> PriceSeries {
    let points = market.points();
    let mut closes = vec![(points[0].date, 100.0)];
    for pair in points.windows(2) {
        let market_return = pair[1].close / pair[0].close - 1.0;
        let prev = closes.last().unwrap().1;
        closes.push((pair[1].date, prev * (1.0 + beta * market_return)));
    }
    PriceSeries::new(
        symbol,
        closes
            .into_iter()
            .map(|(date, close)| PricePoint { date, close })
            .collect(),
    )
    .unwrap()
}

fn market_fixture() -> PriceSeries {
    series(
        "^GSPC",
        &[
            (1, 5000.0),
            (4, 5050.0),
            (5, 4990.0),
            (6, 5080.0),
            (7, 5075.0),
            (8, 5130.0),
            (11, 5090.0),
            (12, 5160.0),
        ],
    )
}

#[test]
fn identical_series_have_unit_beta_and_no_idiosyncratic_vol() {
    let market = market_fixture();
    let stock = PriceSeries::new("TRACK", market.points().to_vec()).unwrap();
    let engine = Eliza::new(stock, market).unwrap();

    let analysis = engine.capm(false, true).unwrap();
    assert_relative_eq!(analysis.beta, 1.0, epsilon = 1e-9);
    assert_relative_eq!(analysis.alpha, 0.0, epsilon = 1e-9);
    assert_relative_eq!(analysis.mean_residual, 0.0, epsilon = 1e-12);
    assert_relative_eq!(analysis.volatility.idiosyncratic_vol, 0.0, epsilon = 1e-9);
}

#[test]
fn leveraged_stock_recovers_its_beta() {
    let market = market_fixture();
    let stock = leveraged_series("LEV2", &market, 2.0);
    let engine = Eliza::new(stock, market).unwrap();

    let analysis = engine.capm(false, false).unwrap();
    assert_relative_eq!(analysis.beta, 2.0, epsilon = 1e-9);
    assert_relative_eq!(analysis.alpha, 0.0, epsilon = 1e-9);
    assert_eq!(analysis.observations, 7);
    assert_eq!(analysis.period_start, date(4));
    assert_eq!(analysis.period_end, date(12));
}

#[test]
fn annualized_run_scales_volatility_and_stock_return() {
    let market = market_fixture();
    let stock = leveraged_series("LEV", &market, 1.5);
    let engine = Eliza::new(stock, market).unwrap();

    let daily = engine.capm(false, false).unwrap();
    let annual = engine.capm(false, true).unwrap();

    assert_relative_eq!(
        annual.volatility.market_vol,
        daily.volatility.market_vol * 252.0_f64.sqrt(),
        epsilon = 1e-12
    );
    assert_relative_eq!(
        annual.stock_return,
        daily.stock_return * 252.0,
        epsilon = 1e-12
    );
    // The market return is never annualized.
    assert_relative_eq!(annual.market_return, daily.market_return, epsilon = 1e-12);
    assert!(daily.volatility.legacy_total_vol.is_some());
    assert!(annual.volatility.legacy_total_vol.is_none());
}

#[test]
fn plot_request_carries_aligned_returns() {
    let market = market_fixture();
    let stock = leveraged_series("LEV", &market, 0.8);
    let engine = Eliza::new(stock, market).unwrap();

    let without = engine.capm(false, false).unwrap();
    assert!(without.plot.is_none());

    let with = engine.capm(true, false).unwrap();
    let plot = with.plot.expect("plot data requested");
    assert_eq!(plot.market_returns.len(), with.observations);
    assert_eq!(plot.stock_returns.len(), with.observations);
    assert_relative_eq!(plot.beta, with.beta, epsilon = 1e-12);
}

#[test]
fn renderers_accept_engine_output() {
    let market = market_fixture();
    let stock = leveraged_series("LEV", &market, 1.1);
    let engine = Eliza::new(stock, market).unwrap();
    let analysis = engine.capm(true, true).unwrap();

    let mut console = ConsoleRenderer::new(Vec::new());
    console.capm(&analysis).unwrap();
    let text = String::from_utf8(console.into_inner()).unwrap();
    assert!(text.contains("CAPM Analysis: LEV vs ^GSPC"));
    assert!(text.contains("Fit: y ="));

    NoOpRenderer.capm(&analysis).unwrap();
}

#[test]
fn disjoint_date_ranges_are_insufficient_data() {
    let market = series("^GSPC", &[(1, 5000.0), (4, 5050.0), (5, 4990.0)]);
    let stock = series("AAPL", &[(20, 180.0), (21, 181.0), (22, 179.5)]);
    let engine = Eliza::new(stock, market).unwrap();

    let result = engine.capm(false, false);
    assert!(matches!(
        result,
        Err(ElizaError::Model(ModelError::InsufficientData { .. }))
    ));
}

#[test]
fn empty_series_is_rejected_at_construction() {
    let market = market_fixture();
    let empty = PriceSeries::new("EMPTY", vec![]).unwrap();

    let result = Eliza::new(empty, market);
    assert!(matches!(
        result,
        Err(ElizaError::Data(DataError::MissingData { .. }))
    ));
}

#[test]
fn risk_decomposition_matches_reference_figures() {
    let market = market_fixture();
    let stock = leveraged_series("LEV", &market, 1.2);
    let engine = Eliza::new(stock, market).unwrap();

    let risk = engine.risk_decomposition(10_000.0, 1.2, 15.0, 10.0).unwrap();
    assert_relative_eq!(risk.market_risk, 1_800.0, epsilon = 1e-9);
    assert_relative_eq!(risk.idiosyncratic_risk, 1_000.0, epsilon = 1e-9);
    assert_relative_eq!(risk.total_risk, 4_240_000.0_f64.sqrt(), epsilon = 1e-9);

    let invalid = engine.risk_decomposition(-1.0, 1.2, 15.0, 10.0);
    assert!(matches!(
        invalid,
        Err(ElizaError::Model(ModelError::InvalidInput(_)))
    ));
}

struct StaticSource {
    series: HashMap<String, PriceSeries>,
}

impl PriceSource for StaticSource {
    fn fetch(
        &self,
        symbol: &str,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> impl Future<Output = eliza_data::Result<PriceSeries>> + Send {
        std::future::ready(self.series.get(symbol).cloned().ok_or_else(|| {
            DataError::MissingData {
                symbol: symbol.to_string(),
                reason: "no fixture for symbol".to_string(),
            }
        }))
    }
}

#[tokio::test]
async fn fetch_records_each_series_with_the_audit() {
    let market = market_fixture();
    let stock = leveraged_series("LEV", &market, 1.3);
    let source = StaticSource {
        series: HashMap::from([
            ("^GSPC".to_string(), market),
            ("LEV".to_string(), stock),
        ]),
    };

    let mut history = FetchHistory::new();
    let engine = Eliza::fetch_with_audit(
        &source,
        "LEV",
        "^GSPC",
        date(1),
        date(12),
        &mut history,
    )
    .await
    .unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history.records()[0].symbol, "^GSPC");
    assert_eq!(history.records()[1].symbol, "LEV");
    assert_eq!(history.records()[0].points, 8);

    let analysis = engine.capm(false, false).unwrap();
    assert_relative_eq!(analysis.beta, 1.3, epsilon = 1e-9);
}

#[tokio::test]
async fn fetch_propagates_source_errors() {
    let source = StaticSource {
        series: HashMap::new(),
    };

    let result = Eliza::fetch(&source, "AAPL", "^GSPC", date(1), date(12)).await;
    assert!(matches!(
        result,
        Err(ElizaError::Data(DataError::MissingData { .. }))
    ));
}
