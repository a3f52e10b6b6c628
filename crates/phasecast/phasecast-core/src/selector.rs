//! Method selection
//!
//! Picks a forecasting strategy per phase from the series' content and
//! length, and bounds the lookback window.

use phasecast_spi::{Method, PhaseSeries, PredictorConfig};
use tracing::debug;

/// Strategy chosen for one phase, with the window it applies to
#[derive(Debug, Clone)]
pub struct Selection {
    pub method: Method,
    /// The most recent `max_window` points of the phase
    pub series: PhaseSeries,
}

/// Chooses between zero, moving-average and seasonal forecasting
#[derive(Debug, Clone, Copy)]
pub struct MethodSelector {
    seasonal_period: usize,
    max_window: usize,
}

impl MethodSelector {
    pub fn new(seasonal_period: usize, max_window: usize) -> Self {
        Self {
            seasonal_period,
            max_window,
        }
    }

    pub fn from_config(config: &PredictorConfig) -> Self {
        Self::new(config.seasonal_period, config.max_window)
    }

    /// Select a method for `series`.
    ///
    /// The zero check looks at the whole history; fitting only ever sees the
    /// truncated window.
    pub fn select(&self, series: &PhaseSeries) -> Selection {
        let all_zero = series.is_all_zero();
        let window = series.tail(self.max_window);

        let method = if all_zero {
            Method::ZeroSeries
        } else if window.len() >= self.seasonal_period {
            Method::SeasonalSmoothing
        } else {
            Method::WeightedMovingAverage
        };

        debug!(
            phase = %series.phase(),
            points = window.len(),
            truncated = series.len() - window.len(),
            %method,
            "selected method"
        );

        Selection {
            method,
            series: window,
        }
    }
}

impl Default for MethodSelector {
    fn default() -> Self {
        Self::from_config(&PredictorConfig::default())
    }
}
