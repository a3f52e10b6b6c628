//! Model module containing data structures

mod config;
mod forecast_point;
mod model_info;
mod phase;
mod phase_series;
mod prediction_result;
mod raw_record;
mod validation;

pub use config::PredictorConfig;
pub use forecast_point::{ForecastPoint, Interval};
pub use model_info::{Method, ModelInfo, CONFIDENCE_LEVEL, Z_SCORE_95};
pub use phase::Phase;
pub use phase_series::PhaseSeries;
pub use prediction_result::{PredictionFailure, PredictionResult, PredictionSuccess, Predictions};
pub use raw_record::RawRecord;
pub use validation::ValidationWarning;
