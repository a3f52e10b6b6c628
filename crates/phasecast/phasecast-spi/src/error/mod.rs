//! Error module containing error types and result aliases

mod config_error;
mod model_fit_error;
mod predict_error;
mod record_parse_error;

pub use config_error::ConfigError;
pub use model_fit_error::ModelFitError;
pub use predict_error::PredictError;
pub use record_parse_error::RecordParseError;

/// Result type for caller-visible predictor operations
pub type Result<T> = std::result::Result<T, PredictError>;

/// Result type for model fitting, absorbed by the fallback ladder
pub type FitResult<T> = std::result::Result<T, ModelFitError>;
