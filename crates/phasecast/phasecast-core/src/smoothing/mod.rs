//! Exponential smoothing and moving-average forecasters
//!
//! Every model implements [`Predictor`](phasecast_spi::Predictor) and produces
//! a one-step-ahead forecast.

pub mod holt_winters;
pub mod moving_average;
pub mod simple;

pub use holt_winters::{DampedHoltWinters, SmoothingParams};
pub use moving_average::{NaiveWeekMean, WeightedMovingAverage};
pub use simple::SimpleExponentialSmoothing;
