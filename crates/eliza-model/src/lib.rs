#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/elizalabs/eliza/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analysis;
pub mod attribution;
pub mod error;
pub mod regression;
pub mod returns;
pub mod volatility;

// Re-export main types
pub use analysis::{CapmAnalysis, PlotData};
pub use attribution::{DollarRiskBreakdown, RiskAttributor, RiskInputs};
pub use error::{ModelError, Result};
pub use regression::{CapmRegressor, RegressionResult, RegressorConfig};
pub use returns::{AlignedReturns, ReturnSeries, compound_return};
pub use volatility::{
    DecomposerConfig, VolatilityBreakdown, VolatilityDecomposer, VolatilityHorizon,
};
