//! Configuration error types.

use thiserror::Error;

/// Predictor configuration errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// A tunable is out of its accepted range
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// An environment variable or config file value could not be parsed
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    /// Config file could not be read or decoded
    #[error("Config file error: {0}")]
    File(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_error() {
        let error = ConfigError::InvalidParameter {
            name: "seasonal_period".to_string(),
            reason: "must be at least 2".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'seasonal_period': must be at least 2"
        );
    }

    #[test]
    fn test_invalid_value_error() {
        let error = ConfigError::InvalidValue {
            key: "PHASECAST_MIN_POINTS".to_string(),
            value: "seven".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid value for PHASECAST_MIN_POINTS: seven");
    }

    #[test]
    fn test_file_error() {
        let error = ConfigError::File("missing field".to_string());
        assert_eq!(error.to_string(), "Config file error: missing field");
    }
}
