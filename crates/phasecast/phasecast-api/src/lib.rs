//! Phasecast Consumer API
//!
//! Configuration loading and builder APIs for the power predictor.
//!
//! This crate provides:
//! - [`PredictorBuilder`] for assembling a validated [`PowerPredictor`]
//! - Config loading from JSON files and `PHASECAST_*` environment variables
//! - Re-exports from SPI and core for convenience

pub mod builder;
pub mod config;

pub use builder::PredictorBuilder;
pub use config::{apply_env, apply_overrides, from_env, from_file, load};

// Re-export from core
pub use phasecast_core::{
    diagnostics, environment_report, EnvironmentReport, PowerPredictor, StandardErrorComputer,
};

// Re-export from SPI
pub use phasecast_spi::{
    ConfidenceIntervalComputer, ConfigError, ForecastPoint, Interval, Method, ModelInfo, Phase,
    PredictError, PredictionFailure, PredictionResult, PredictionSuccess, Predictions,
    PredictorConfig, RawRecord, CONFIDENCE_LEVEL,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::builder::PredictorBuilder;
    pub use crate::config::{from_env, from_file, load};
    pub use phasecast_core::PowerPredictor;
    pub use phasecast_spi::{
        ConfigError, ForecastPoint, Method, Phase, PredictError, PredictionResult, Predictor,
        PredictorConfig, RawRecord,
    };
}
