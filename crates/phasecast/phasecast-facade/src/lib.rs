//! Phasecast Facade
//!
//! High-level API for next-day three-phase power forecasting. Re-exports all
//! public types from the phasecast stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use phasecast_api::*;

// Explicit re-exports for documentation
pub use phasecast_api::prelude;

// Re-export core modules for direct access
pub use phasecast_core::{confidence, forecaster, ingest, selector, smoothing, transform};

// Re-export pipeline stages at root
pub use phasecast_core::{
    Forecast, IngestReport, MethodSelector, Selection, SmoothingForecaster,
};

// Re-export SPI traits and errors
pub use phasecast_spi::{
    FitResult, ModelFitError, PhaseSeries, Predictor, RecordParseError, ValidationWarning,
};
