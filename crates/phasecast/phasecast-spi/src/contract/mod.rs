//! Contract module containing trait definitions for forecasting

mod confidence_interval_computer;
mod predictor;

pub use confidence_interval_computer::ConfidenceIntervalComputer;
pub use predictor::Predictor;
