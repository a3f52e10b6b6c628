//! Predictor builder.

use phasecast_core::PowerPredictor;
use phasecast_spi::{ConfigError, PredictorConfig};

/// Builder for [`PowerPredictor`].
///
/// ```rust
/// use phasecast_api::PredictorBuilder;
///
/// let predictor = PredictorBuilder::new()
///     .min_points(3)
///     .max_window(14)
///     .sequential()
///     .build()
///     .unwrap();
/// assert_eq!(predictor.config().min_points, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PredictorBuilder {
    config: PredictorConfig,
}

impl PredictorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration (e.g. one loaded from file).
    pub fn from_config(config: PredictorConfig) -> Self {
        Self { config }
    }

    /// Minimum valid records required to forecast.
    pub fn min_points(mut self, min_points: usize) -> Self {
        self.config.min_points = min_points;
        self
    }

    /// Seasonal cycle length in days.
    pub fn seasonal_period(mut self, period: usize) -> Self {
        self.config.seasonal_period = period;
        self
    }

    /// Number of most recent points fitted.
    pub fn max_window(mut self, max_window: usize) -> Self {
        self.config.max_window = max_window;
        self
    }

    pub fn box_cox(mut self, enabled: bool) -> Self {
        self.config.use_box_cox = enabled;
        self
    }

    pub fn bias_removal(mut self, enabled: bool) -> Self {
        self.config.remove_bias = enabled;
        self
    }

    pub fn damped_trend(mut self, enabled: bool) -> Self {
        self.config.damped_trend = enabled;
        self
    }

    /// Optimizer iteration budget.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Run the phase pipelines on the calling thread.
    pub fn sequential(self) -> Self {
        self.parallel(false)
    }

    /// Validated configuration.
    pub fn build_config(self) -> Result<PredictorConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build the predictor.
    pub fn build(self) -> Result<PowerPredictor, ConfigError> {
        PowerPredictor::new(self.build_config()?)
    }
}
