//! Run metadata attached to a successful prediction

use std::fmt;

use serde::{Deserialize, Serialize};

/// Confidence level of every emitted interval
pub const CONFIDENCE_LEVEL: f64 = 0.95;

/// Two-sided z-score for [`CONFIDENCE_LEVEL`]
pub const Z_SCORE_95: f64 = 1.96;

/// Forecasting method applied to a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Every value is zero; no model fitted
    ZeroSeries,
    /// Exponentially weighted mean, for histories shorter than one season
    WeightedMovingAverage,
    /// Damped-trend additive Holt-Winters
    SeasonalSmoothing,
    /// Simple exponential smoothing (first fallback)
    SimpleSmoothing,
    /// Mean of the last season (last fallback)
    NaiveWeekMean,
}

impl Method {
    /// Position on the degradation scale, `None` for [`Method::ZeroSeries`].
    ///
    /// Higher means further down the fallback ladder.
    pub fn degradation_rank(self) -> Option<u8> {
        match self {
            Method::ZeroSeries => None,
            Method::SeasonalSmoothing => Some(0),
            Method::WeightedMovingAverage => Some(1),
            Method::SimpleSmoothing => Some(2),
            Method::NaiveWeekMean => Some(3),
        }
    }

    /// Whether the forecast came from a fitted smoothing model
    pub fn is_fitted_model(self) -> bool {
        matches!(self, Method::SeasonalSmoothing | Method::SimpleSmoothing)
    }

    /// Summarise per-phase methods into one run-level method.
    ///
    /// `ZeroSeries` only when every phase is zero, otherwise the most degraded
    /// method among the non-zero phases.
    pub fn summarize<I: IntoIterator<Item = Method>>(methods: I) -> Method {
        methods
            .into_iter()
            .filter_map(|m| m.degradation_rank().map(|rank| (rank, m)))
            .max_by_key(|(rank, _)| *rank)
            .map(|(_, m)| m)
            .unwrap_or(Method::ZeroSeries)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Method::ZeroSeries => "Zero Series",
            Method::WeightedMovingAverage => "Weighted Moving Average",
            Method::SeasonalSmoothing => "Holt-Winters",
            Method::SimpleSmoothing => "Simple Exponential Smoothing",
            Method::NaiveWeekMean => "Naive Week Mean",
        };
        f.write_str(label)
    }
}

/// Metadata describing the run that produced the predictions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Points per phase after truncation to the lookback window
    pub data_points: usize,
    /// ISO date of the most recent valid record
    pub last_date: String,
    /// Always [`CONFIDENCE_LEVEL`]
    pub confidence_level: f64,
    /// Run-level method, see [`Method::summarize`]
    pub method: Method,
    /// Input records excluded by validation
    #[serde(default)]
    pub skipped_records: usize,
    /// Validation warnings such as duplicate dates
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}
