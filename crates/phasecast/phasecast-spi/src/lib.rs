//! Phasecast Service Provider Interface
//!
//! Defines the error taxonomy, the data model exchanged with the host
//! application, and the traits implemented by forecasting models and
//! interval estimators.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{ConfidenceIntervalComputer, Predictor};
pub use error::{ConfigError, FitResult, ModelFitError, PredictError, RecordParseError, Result};
pub use model::{
    ForecastPoint, Interval, Method, ModelInfo, Phase, PhaseSeries, PredictionFailure,
    PredictionResult, PredictionSuccess, Predictions, PredictorConfig, RawRecord,
    ValidationWarning, CONFIDENCE_LEVEL, Z_SCORE_95,
};
