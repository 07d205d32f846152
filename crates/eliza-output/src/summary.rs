//! Text summaries of analysis results.
//!
//! ASCII tables for terminal display and Markdown for documentation. All
//! formatting of the engine's numeric results happens in this module; the
//! engine itself never builds display strings.

use eliza_model::{CapmAnalysis, DollarRiskBreakdown, RiskInputs};
use serde::{Deserialize, Serialize};
use std::fmt;

const RULE_WIDTH: usize = 60;

/// Text renderings shared by every reportable result.
pub trait TextSummary {
    /// Format as ASCII table for terminal display.
    fn to_ascii_table(&self) -> String;

    /// Format as Markdown for documentation.
    fn to_markdown(&self) -> String;
}

impl TextSummary for CapmAnalysis {
    fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\nCAPM Analysis: {} vs {}\n",
            self.stock_symbol, self.index_symbol
        ));
        output.push_str(&format!(
            "Period: {} to {} ({} observations)\n",
            self.period_start, self.period_end, self.observations
        ));
        output.push_str(&"=".repeat(RULE_WIDTH));
        output.push('\n');

        output.push_str("\nTotal Returns:\n");
        output.push_str(&"-".repeat(RULE_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "  {} Return:             {:>10.2}%\n",
            self.index_symbol,
            self.market_return * 100.0
        ));
        output.push_str(&format!(
            "  {} Return:             {:>10.2}%\n",
            self.stock_symbol,
            self.stock_return * 100.0
        ));

        output.push_str("\nRegression Results:\n");
        output.push_str(&"-".repeat(RULE_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "  Beta:                     {:>10.4}\n",
            self.beta
        ));
        output.push_str(&format!(
            "  Alpha:                    {:>14.8}\n",
            self.alpha
        ));
        output.push_str(&format!(
            "  Mean Residual:            {:>14.8}\n",
            self.mean_residual
        ));

        let label = if self.volatility.annualized {
            "annualized"
        } else {
            "daily"
        };
        output.push_str(&format!("\nVolatility ({label}):\n"));
        output.push_str(&"-".repeat(RULE_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "  {} Volatility:         {:>10.2}%\n",
            self.index_symbol,
            self.volatility.market_vol * 100.0
        ));
        output.push_str(&format!(
            "  {} Volatility:         {:>10.2}%\n",
            self.stock_symbol,
            self.volatility.stock_vol * 100.0
        ));
        output.push_str(&format!(
            "  Idiosyncratic Volatility: {:>10.2}%\n",
            self.volatility.idiosyncratic_vol * 100.0
        ));
        if let Some(total) = self.volatility.legacy_total_vol {
            output.push_str(&format!(
                "  Total Volatility (legacy):{:>10.2}%\n",
                total * 100.0
            ));
        }

        output.push_str(&"=".repeat(RULE_WIDTH));
        output.push('\n');

        output
    }

    fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "# CAPM Analysis: {} vs {}\n\n",
            self.stock_symbol, self.index_symbol
        ));
        output.push_str(&format!(
            "**Period:** {} to {} ({} observations)\n\n",
            self.period_start, self.period_end, self.observations
        ));

        output.push_str("## Total Returns\n\n");
        output.push_str(&format!(
            "- **{} Return:** {:.2}%\n",
            self.index_symbol,
            self.market_return * 100.0
        ));
        output.push_str(&format!(
            "- **{} Return:** {:.2}%\n\n",
            self.stock_symbol,
            self.stock_return * 100.0
        ));

        output.push_str("## Regression Results\n\n");
        output.push_str(&format!("- **Beta:** {:.4}\n", self.beta));
        output.push_str(&format!("- **Alpha:** {:.8}\n", self.alpha));
        output.push_str(&format!("- **Mean Residual:** {:.8}\n\n", self.mean_residual));

        let label = if self.volatility.annualized {
            "annualized"
        } else {
            "daily"
        };
        output.push_str(&format!("## Volatility ({label})\n\n"));
        output.push_str(&format!(
            "- **{} Volatility:** {:.2}%\n",
            self.index_symbol,
            self.volatility.market_vol * 100.0
        ));
        output.push_str(&format!(
            "- **{} Volatility:** {:.2}%\n",
            self.stock_symbol,
            self.volatility.stock_vol * 100.0
        ));
        output.push_str(&format!(
            "- **Idiosyncratic Volatility:** {:.2}%\n",
            self.volatility.idiosyncratic_vol * 100.0
        ));
        if let Some(total) = self.volatility.legacy_total_vol {
            output.push_str(&format!("- **Total Volatility (legacy):** {:.2}%\n", total * 100.0));
        }

        output
    }
}

/// Dollar risk attribution together with the inputs that produced it.
///
/// The breakdown alone does not display well; the panel pairs it with the
/// caller's inputs so a report shows both sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskPanel {
    /// The caller-supplied position and volatility figures.
    pub inputs: RiskInputs,
    /// The computed dollar risk.
    pub risk: DollarRiskBreakdown,
}

impl TextSummary for RiskPanel {
    fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str("\nRisk Decomposition\n");
        output.push_str(&"=".repeat(RULE_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "  Stock Value:              ${:>12.2}\n",
            self.inputs.stock_value
        ));
        output.push_str(&format!(
            "  Beta:                     {:>13.4}\n",
            self.inputs.beta
        ));
        output.push_str(&format!(
            "  Market Volatility:        {:>12.2}%\n",
            self.inputs.market_vol_pct
        ));
        output.push_str(&format!(
            "  Idio Volatility:          {:>12.2}%\n",
            self.inputs.idio_vol_pct
        ));
        output.push_str(&"-".repeat(RULE_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "  Market Risk:              ${:>12.2}\n",
            self.risk.market_risk
        ));
        output.push_str(&format!(
            "  Idiosyncratic Risk:       ${:>12.2}\n",
            self.risk.idiosyncratic_risk
        ));
        output.push_str(&format!(
            "  Total Risk:               ${:>12.2}\n",
            self.risk.total_risk
        ));
        output.push_str(&"=".repeat(RULE_WIDTH));
        output.push('\n');

        output
    }

    fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str("# Risk Decomposition\n\n");
        output.push_str("| Input | Value |\n");
        output.push_str("|-------|-------|\n");
        output.push_str(&format!(
            "| Stock Value | ${:.2} |\n",
            self.inputs.stock_value
        ));
        output.push_str(&format!("| Beta | {:.4} |\n", self.inputs.beta));
        output.push_str(&format!(
            "| Market Volatility | {:.2}% |\n",
            self.inputs.market_vol_pct
        ));
        output.push_str(&format!(
            "| Idio Volatility | {:.2}% |\n\n",
            self.inputs.idio_vol_pct
        ));

        output.push_str("| Risk | Value |\n");
        output.push_str("|------|-------|\n");
        output.push_str(&format!("| Market Risk | ${:.2} |\n", self.risk.market_risk));
        output.push_str(&format!(
            "| Idiosyncratic Risk | ${:.2} |\n",
            self.risk.idiosyncratic_risk
        ));
        output.push_str(&format!("| Total Risk | ${:.2} |\n", self.risk.total_risk));

        output
    }
}

impl fmt::Display for RiskPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Risk Decomposition")?;
        writeln!(f, "  Market Risk: ${:.2}", self.risk.market_risk)?;
        writeln!(
            f,
            "  Idiosyncratic Risk: ${:.2}",
            self.risk.idiosyncratic_risk
        )?;
        writeln!(f, "  Total Risk: ${:.2}", self.risk.total_risk)?;
        Ok(())
    }
}
