//! Model fitting errors

use thiserror::Error;

/// Errors raised while fitting a smoothing model.
///
/// Never surfaced to callers: the forecaster's fallback ladder absorbs them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelFitError {
    /// Insufficient data points for the model
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Model has not been fitted yet
    #[error("Model must be fitted before prediction")]
    NotFitted,

    /// Optimizer ended without a usable optimum
    #[error("Optimization failed to converge after {iterations} iterations")]
    ConvergenceFailure { iterations: usize },

    /// Numerical computation error (overflow, NaN, transform domain)
    #[error("Numerical error: {0}")]
    NumericalError(String),
}
