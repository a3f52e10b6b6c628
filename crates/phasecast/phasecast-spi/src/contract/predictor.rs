//! Trait for one-step-ahead forecasting models

use crate::error::FitResult;
use crate::model::Method;

/// Common trait for the phase forecasting models.
///
/// Models are created, fitted and queried within a single `predict` call;
/// nothing is cached across calls.
pub trait Predictor {
    /// Fit the model to a phase's history
    fn fit(&mut self, data: &[f64]) -> FitResult<()>;

    /// Forecast the next value
    fn forecast(&self) -> FitResult<f64>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;

    /// In-sample residuals (observed minus fitted), for models that produce them
    fn residuals(&self) -> Option<&[f64]> {
        None
    }

    /// Method reported for forecasts made by this model
    fn method(&self) -> Method;
}
