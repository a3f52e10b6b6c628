//! Electrical phase identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three independent phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    A,
    B,
    C,
}

impl Phase {
    /// All phases in output order.
    pub const ALL: [Phase; 3] = [Phase::A, Phase::B, Phase::C];

    /// Field name used in records and result payloads.
    pub fn key(self) -> &'static str {
        match self {
            Phase::A => "phase_a",
            Phase::B => "phase_b",
            Phase::C => "phase_c",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::A => "A",
            Phase::B => "B",
            Phase::C => "C",
        };
        f.write_str(name)
    }
}
