//! Error types for the statistical core.

use thiserror::Error;

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised by the statistical core.
///
/// All variants are raised at the component boundary where they are
/// detected and propagate unhandled to the caller; there is no local
/// recovery and no silent clamping.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Insufficient data for the requested computation
    #[error("Insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Required number of observations
        required: usize,
        /// Actual number of observations
        actual: usize,
    },

    /// The regression cannot be fitted
    #[error("Degenerate regression: {reason}")]
    DegenerateRegression {
        /// Why the fit is impossible
        reason: String,
    },

    /// Systematic variance exceeds total variance
    #[error("Negative variance: idiosyncratic radicand is {radicand}")]
    NegativeVariance {
        /// The negative radicand that was about to be square-rooted
        radicand: f64,
    },

    /// A caller-supplied input is out of range
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
