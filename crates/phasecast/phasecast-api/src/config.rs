//! Predictor configuration loading.
//!
//! Precedence, lowest first: defaults, JSON config file, environment.
//! Command-line flags are applied on top by the binary.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use phasecast_spi::{ConfigError, PredictorConfig};
use tracing::debug;

pub const ENV_MIN_POINTS: &str = "PHASECAST_MIN_POINTS";
pub const ENV_SEASONAL_PERIOD: &str = "PHASECAST_SEASONAL_PERIOD";
pub const ENV_MAX_WINDOW: &str = "PHASECAST_MAX_WINDOW";
pub const ENV_USE_BOX_COX: &str = "PHASECAST_USE_BOX_COX";
pub const ENV_REMOVE_BIAS: &str = "PHASECAST_REMOVE_BIAS";
pub const ENV_PARALLEL: &str = "PHASECAST_PARALLEL";

/// Read a JSON config file; missing fields keep their defaults.
pub fn from_file(path: impl AsRef<Path>) -> Result<PredictorConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::File(format!("{}: {}", path.display(), e)))?;
    let config: PredictorConfig = serde_json::from_str(&content)
        .map_err(|e| ConfigError::File(format!("{}: {}", path.display(), e)))?;
    debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

fn parse_number<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: raw.to_string(),
    })
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// Apply overrides from any key lookup (the process environment, a map in tests).
pub fn apply_overrides<F>(config: &mut PredictorConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(ENV_MIN_POINTS) {
        config.min_points = parse_number(ENV_MIN_POINTS, &raw)?;
    }
    if let Some(raw) = lookup(ENV_SEASONAL_PERIOD) {
        config.seasonal_period = parse_number(ENV_SEASONAL_PERIOD, &raw)?;
    }
    if let Some(raw) = lookup(ENV_MAX_WINDOW) {
        config.max_window = parse_number(ENV_MAX_WINDOW, &raw)?;
    }
    if let Some(raw) = lookup(ENV_USE_BOX_COX) {
        config.use_box_cox = parse_flag(ENV_USE_BOX_COX, &raw)?;
    }
    if let Some(raw) = lookup(ENV_REMOVE_BIAS) {
        config.remove_bias = parse_flag(ENV_REMOVE_BIAS, &raw)?;
    }
    if let Some(raw) = lookup(ENV_PARALLEL) {
        config.parallel = parse_flag(ENV_PARALLEL, &raw)?;
    }
    Ok(())
}

/// Apply `PHASECAST_*` variables from the process environment
pub fn apply_env(config: &mut PredictorConfig) -> Result<(), ConfigError> {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Defaults overridden by the environment (after an optional `.env` file).
pub fn from_env() -> Result<PredictorConfig, ConfigError> {
    load(None::<&Path>)
}

/// Defaults, then `path` when given, then the environment; validated.
pub fn load(path: Option<impl AsRef<Path>>) -> Result<PredictorConfig, ConfigError> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    let mut config = match path {
        Some(path) => from_file(path)?,
        None => PredictorConfig::default(),
    };
    apply_env(&mut config)?;
    config.validate()?;
    Ok(config)
}
