//! Trait for confidence interval computation

use crate::model::Interval;

/// Trait for confidence interval computation
pub trait ConfidenceIntervalComputer: Send + Sync {
    /// Compute the interval around `forecast`.
    ///
    /// `dispersion` is either a fitted model's residuals or the observed
    /// series; its standard deviation is used as the standard error.
    fn compute(&self, forecast: f64, dispersion: &[f64]) -> Interval;
}
