//! Caller-visible prediction errors

use thiserror::Error;

/// Errors that turn a `predict` call into a failure payload
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    /// No usable record survived validation
    #[error("no valid input records")]
    EmptyInput,

    /// Fewer valid records than the configured minimum
    #[error("need at least {required} valid records, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Anything else; the cause is logged, not surfaced
    #[error("{0}")]
    Unexpected(String),
}

impl PredictError {
    /// Fixed machine-readable code for the failure payload
    pub fn code(&self) -> &'static str {
        match self {
            PredictError::EmptyInput => "EMPTY_INPUT",
            PredictError::InsufficientData { .. } => "INSUFFICIENT_DATA",
            PredictError::Unexpected(_) => "UNEXPECTED",
        }
    }

    /// Concise message shown to callers: `<CODE>: <cause>`
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.code(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_message() {
        let error = PredictError::EmptyInput;
        assert_eq!(error.to_string(), "no valid input records");
        assert_eq!(error.code(), "EMPTY_INPUT");
        assert_eq!(error.user_message(), "EMPTY_INPUT: no valid input records");
    }

    #[test]
    fn test_insufficient_data_message_cites_counts() {
        let error = PredictError::InsufficientData {
            required: 7,
            actual: 6,
        };
        assert_eq!(error.to_string(), "need at least 7 valid records, got 6");
        assert_eq!(
            error.user_message(),
            "INSUFFICIENT_DATA: need at least 7 valid records, got 6"
        );
    }

    #[test]
    fn test_insufficient_data_fields() {
        let error = PredictError::InsufficientData {
            required: 14,
            actual: 3,
        };
        if let PredictError::InsufficientData { required, actual } = error {
            assert_eq!(required, 14);
            assert_eq!(actual, 3);
        } else {
            panic!("Expected InsufficientData variant");
        }
    }

    #[test]
    fn test_unexpected_code() {
        let error = PredictError::Unexpected("internal error while forecasting".to_string());
        assert_eq!(error.code(), "UNEXPECTED");
        assert!(!error.user_message().contains('\n'));
    }

    #[test]
    fn test_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(PredictError::EmptyInput);
        assert_eq!(error.to_string(), "no valid input records");
    }
}
