//! # phasecast-core
//!
//! Next-day forecasting engine for three-phase electrical consumption.
//!
//! Each call runs the same pipeline once per phase:
//!
//! - **Ingest** - validate raw records into date-sorted phase series
//! - **Select** - zero series, weighted moving average or seasonal smoothing
//! - **Forecast** - fit the model, falling back to simple smoothing and then
//!   the last-cycle mean on failure
//! - **Interval** - 95% interval from residuals or series dispersion
//! - **Assemble** - package predictions and run metadata
//!
//! ## Example
//!
//! ```rust
//! use phasecast_core::prelude::*;
//!
//! let records: Vec<RawRecord> = [100.0, 110.0, 120.0, 115.0, 105.0, 95.0, 90.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &v)| RawRecord::new(&format!("2024-01-{:02}", i + 1), v, v + 100.0, v + 200.0))
//!     .collect();
//!
//! let predictor = PowerPredictor::new(PredictorConfig::default()).unwrap();
//! let result = predictor.predict(&records);
//! let success = result.as_success().unwrap();
//! assert_eq!(success.model_info.data_points, 7);
//! assert_eq!(success.model_info.last_date, "2024-01-07");
//! ```

pub mod confidence;
pub mod diagnostics;
pub mod forecaster;
pub mod ingest;
pub mod optimize;
pub mod predictor;
pub mod selector;
pub mod smoothing;
pub mod stats;
pub mod transform;

// Re-export SPI contracts for implementations
pub use phasecast_spi::{
    ConfidenceIntervalComputer, FitResult, ModelFitError, PredictError, Predictor, Result,
};

pub use confidence::StandardErrorComputer;
pub use diagnostics::{environment_report, EnvironmentReport};
pub use forecaster::{Forecast, SmoothingForecaster};
pub use ingest::{ingest, IngestReport};
pub use predictor::PowerPredictor;
pub use selector::{MethodSelector, Selection};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::predictor::PowerPredictor;
    pub use crate::smoothing::{
        DampedHoltWinters, NaiveWeekMean, SimpleExponentialSmoothing, WeightedMovingAverage,
    };
    pub use phasecast_spi::{
        ForecastPoint, Method, Phase, PredictError, PredictionResult, Predictor, PredictorConfig,
        RawRecord,
    };
}
