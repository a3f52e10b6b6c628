//! Per-record validation errors

use thiserror::Error;

/// A single malformed input record.
///
/// Non-fatal: the record is excluded and the batch continues.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordParseError {
    /// The `date` field is absent or null
    #[error("record {index}: missing date")]
    MissingDate { index: usize },

    /// The `date` field is not a calendar date
    #[error("record {index}: invalid date {raw}")]
    InvalidDate { index: usize, raw: String },

    /// A phase reading is neither null nor numeric
    #[error("record {index}: {field} is not numeric ({raw})")]
    InvalidReading {
        index: usize,
        field: &'static str,
        raw: String,
    },
}

impl RecordParseError {
    /// Position of the offending record in the input collection
    pub fn index(&self) -> usize {
        match self {
            RecordParseError::MissingDate { index }
            | RecordParseError::InvalidDate { index, .. }
            | RecordParseError::InvalidReading { index, .. } => *index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_date_message() {
        let error = RecordParseError::MissingDate { index: 3 };
        assert_eq!(error.to_string(), "record 3: missing date");
        assert_eq!(error.index(), 3);
    }

    #[test]
    fn test_invalid_date_message() {
        let error = RecordParseError::InvalidDate {
            index: 0,
            raw: "\"2024-13-45\"".to_string(),
        };
        assert_eq!(error.to_string(), "record 0: invalid date \"2024-13-45\"");
    }

    #[test]
    fn test_invalid_reading_message() {
        let error = RecordParseError::InvalidReading {
            index: 5,
            field: "phase_b",
            raw: "\"abc\"".to_string(),
        };
        assert_eq!(error.to_string(), "record 5: phase_b is not numeric (\"abc\")");
        assert_eq!(error.index(), 5);
    }
}
