//! Output contract returned to the host application

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{ForecastPoint, ModelInfo, Phase};
use crate::error::PredictError;

/// Per-phase forecasts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Predictions {
    pub phase_a: ForecastPoint,
    pub phase_b: ForecastPoint,
    pub phase_c: ForecastPoint,
}

impl Predictions {
    pub fn get(&self, phase: Phase) -> &ForecastPoint {
        match phase {
            Phase::A => &self.phase_a,
            Phase::B => &self.phase_b,
            Phase::C => &self.phase_c,
        }
    }
}

/// `success` flag fixed by the payload type.
///
/// Serializes as `V` and only deserializes from `V`, so a success payload
/// can never carry `success: false` or the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct SuccessFlag<const V: bool>;

impl<const V: bool> Serialize for SuccessFlag<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(V)
    }
}

impl<'de, const V: bool> Deserialize<'de> for SuccessFlag<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if bool::deserialize(deserializer)? == V {
            Ok(SuccessFlag)
        } else {
            Err(serde::de::Error::custom(format!("expected `success: {}`", V)))
        }
    }
}

/// Success payload: `{success: true, predictions, model_info}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSuccess {
    success: SuccessFlag<true>,
    pub predictions: Predictions,
    pub model_info: ModelInfo,
}

impl PredictionSuccess {
    pub fn new(predictions: Predictions, model_info: ModelInfo) -> Self {
        Self {
            success: SuccessFlag,
            predictions,
            model_info,
        }
    }

    /// Always `true`
    pub fn success(&self) -> bool {
        true
    }
}

/// Failure payload: `{success: false, code, error}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionFailure {
    success: SuccessFlag<false>,
    /// Fixed machine-readable code, see [`PredictError::code`]
    pub code: String,
    /// Concise human-readable cause, prefixed with the code
    pub error: String,
}

impl PredictionFailure {
    pub fn new(error: &PredictError) -> Self {
        Self {
            success: SuccessFlag,
            code: error.code().to_string(),
            error: error.user_message(),
        }
    }

    /// Always `false`
    pub fn success(&self) -> bool {
        false
    }
}

/// Result of one `predict` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionResult {
    Success(PredictionSuccess),
    Failure(PredictionFailure),
}

impl PredictionResult {
    pub fn success(predictions: Predictions, model_info: ModelInfo) -> Self {
        PredictionResult::Success(PredictionSuccess::new(predictions, model_info))
    }

    pub fn failure(error: &PredictError) -> Self {
        PredictionResult::Failure(PredictionFailure::new(error))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PredictionResult::Success(_))
    }

    pub fn as_success(&self) -> Option<&PredictionSuccess> {
        match self {
            PredictionResult::Success(success) => Some(success),
            PredictionResult::Failure(_) => None,
        }
    }

    pub fn as_failure(&self) -> Option<&PredictionFailure> {
        match self {
            PredictionResult::Success(_) => None,
            PredictionResult::Failure(failure) => Some(failure),
        }
    }
}

impl From<PredictError> for PredictionResult {
    fn from(error: PredictError) -> Self {
        PredictionResult::failure(&error)
    }
}
