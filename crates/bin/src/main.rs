//! Eliza CLI binary.
//!
//! Command-line interface for the single-factor risk decomposition engine.

use chrono::{Duration, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use eliza::engine::Eliza;
use eliza::model::{RiskAttributor, RiskInputs};
use eliza_data::YahooCloseProvider;
use eliza_output::{ConsoleRenderer, ResultsRenderer, RiskPanel, to_json};
use std::process;

const BANNER: &str = r"
 _____  _      ___  _____    _
| ____|| |    |_ _||__  /   / \
|  _|  | |     | |   / /   / _ \
| |___ | |___  | |  / /_  / ___ \
|_____||_____||___|/____|/_/   \_\
";

#[derive(Parser)]
#[command(name = "eliza")]
#[command(about = "Eliza: single-factor (CAPM) risk decomposition", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regress a stock on a benchmark index and decompose its volatility
    Capm {
        /// Stock symbol
        stock: String,

        /// Benchmark index symbol
        #[arg(default_value = "^GSPC")]
        index: String,

        /// Lookback window in years (ignored when --start is given)
        #[arg(long, default_value = "5")]
        years: u32,

        /// Explicit start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Explicit end date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Annualize volatilities and the stock return
        #[arg(long)]
        annualized: bool,

        /// Include an ASCII scatter of the fit
        #[arg(long)]
        plot: bool,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Convert volatility percentages and a position size into dollar risk
    Risk {
        /// Position value in currency units
        #[arg(long)]
        value: f64,

        /// Market beta of the position
        #[arg(long)]
        beta: f64,

        /// Market volatility in whole percent
        #[arg(long)]
        market_vol: f64,

        /// Idiosyncratic volatility in whole percent
        #[arg(long)]
        idio_vol: f64,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Capm {
            stock,
            index,
            years,
            start,
            end,
            annualized,
            plot,
            format,
        } => {
            let end = end.unwrap_or_else(|| Utc::now().date_naive());
            let start = start.unwrap_or(end - Duration::days(i64::from(years) * 365));

            let provider = YahooCloseProvider::new();
            let engine = Eliza::fetch(&provider, &stock, &index, start, end).await?;
            let analysis = engine.capm(plot, annualized)?;

            if format == "json" {
                println!("{}", to_json(&analysis)?);
            } else {
                println!("{BANNER}");
                let mut renderer = ConsoleRenderer::stdout();
                renderer.capm(&analysis)?;
            }
        }

        Commands::Risk {
            value,
            beta,
            market_vol,
            idio_vol,
            format,
        } => {
            let inputs = RiskInputs {
                stock_value: value,
                beta,
                market_vol_pct: market_vol,
                idio_vol_pct: idio_vol,
            };
            let risk = RiskAttributor::new().attribute(&inputs)?;
            let panel = RiskPanel { inputs, risk };

            if format == "json" {
                println!("{}", to_json(&panel)?);
            } else {
                let mut renderer = ConsoleRenderer::stdout();
                renderer.risk(&panel)?;
            }
        }
    }

    Ok(())
}
