//! Predictor configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunables of the forecasting pipeline.
///
/// Missing fields in a serialized config fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Minimum valid records required to forecast
    pub min_points: usize,
    /// Seasonal cycle length in days; also the minimum history for seasonal smoothing
    pub seasonal_period: usize,
    /// Lookback window: only the most recent points are fitted
    pub max_window: usize,
    /// Apply a Box-Cox transform before seasonal fitting when the data allows it
    pub use_box_cox: bool,
    /// Remove the mean in-sample bias from the seasonal forecast
    pub remove_bias: bool,
    /// Damp the seasonal model's trend
    pub damped_trend: bool,
    /// Iteration budget of the parameter optimizer
    pub max_iterations: usize,
    /// Run the three phase pipelines on the rayon pool
    pub parallel: bool,
}

impl PredictorConfig {
    pub const DEFAULT_MIN_POINTS: usize = 7;
    pub const DEFAULT_SEASONAL_PERIOD: usize = 7;
    pub const DEFAULT_MAX_WINDOW: usize = 25;
    pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

    /// Check every tunable is within its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_points == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "min_points".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.seasonal_period < 2 {
            return Err(ConfigError::InvalidParameter {
                name: "seasonal_period".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }
        if self.max_window == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "max_window".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "max_iterations".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            min_points: Self::DEFAULT_MIN_POINTS,
            seasonal_period: Self::DEFAULT_SEASONAL_PERIOD,
            max_window: Self::DEFAULT_MAX_WINDOW,
            use_box_cox: true,
            remove_bias: true,
            damped_trend: true,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            parallel: true,
        }
    }
}
