//! Raw input record supplied by the host application.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Phase;

/// One day of readings as handed over by the host.
///
/// Every field is loosely typed and defaults to `null` when absent, so a
/// batch deserializes even when individual records are malformed. Validation
/// happens in the ingestor, record by record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Calendar date, expected as `YYYY-MM-DD`
    #[serde(default)]
    pub date: Value,
    /// Phase A consumption
    #[serde(default)]
    pub phase_a: Value,
    /// Phase B consumption
    #[serde(default)]
    pub phase_b: Value,
    /// Phase C consumption
    #[serde(default)]
    pub phase_c: Value,
}

impl RawRecord {
    /// Create a well-formed record.
    pub fn new(date: &str, phase_a: f64, phase_b: f64, phase_c: f64) -> Self {
        Self {
            date: Value::from(date),
            phase_a: Value::from(phase_a),
            phase_b: Value::from(phase_b),
            phase_c: Value::from(phase_c),
        }
    }

    /// Create a record from arbitrary JSON values.
    pub fn from_values(date: Value, phase_a: Value, phase_b: Value, phase_c: Value) -> Self {
        Self {
            date,
            phase_a,
            phase_b,
            phase_c,
        }
    }

    /// Raw reading for a phase.
    pub fn reading(&self, phase: Phase) -> &Value {
        match phase {
            Phase::A => &self.phase_a,
            Phase::B => &self.phase_b,
            Phase::C => &self.phase_c,
        }
    }
}
