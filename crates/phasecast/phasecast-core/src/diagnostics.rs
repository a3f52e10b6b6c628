//! Environment self-check for ops tooling
//!
//! Runs a few tiny forecasts to confirm the numerical stack works in the
//! current build. Not used on the forecasting path.

use phasecast_spi::{FitResult, Predictor};
use serde::{Deserialize, Serialize};

use crate::smoothing::{DampedHoltWinters, SimpleExponentialSmoothing};
use crate::transform::box_cox_lambda;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Outcome of one check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub version: String,
    pub test_result: String,
}

/// `{success, results, message}` as printed by `phasecast doctor`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentReport {
    pub success: bool,
    pub results: Vec<CheckResult>,
    pub message: String,
}

struct Check {
    name: &'static str,
    outcome: Result<String, String>,
}

fn simple_smoothing_check() -> FitResult<String> {
    let model = SimpleExponentialSmoothing::auto(&[1.0, 2.0, 3.0, 4.0, 5.0])?;
    Ok(format!("forecast(1) = {:.4}", model.forecast()?))
}

fn seasonal_check() -> FitResult<String> {
    let pattern = [100.0, 110.0, 120.0, 115.0, 105.0, 95.0, 90.0];
    let data: Vec<f64> = pattern.iter().chain(pattern.iter()).copied().collect();

    let mut model = DampedHoltWinters::new(7)?;
    model.fit(&data)?;
    Ok(format!("forecast(1) = {:.4}", model.forecast()?))
}

fn box_cox_check() -> Result<String, String> {
    box_cox_lambda(&[1.0, 2.0, 4.0, 8.0, 16.0, 32.0])
        .map(|lambda| format!("lambda = {:.4}", lambda))
        .ok_or_else(|| "lambda estimation returned nothing".to_string())
}

/// Run every check; a failing check is reported in its row.
pub fn environment_report() -> EnvironmentReport {
    let checks = [
        Check {
            name: "phasecast-core",
            outcome: Ok(format!(
                "target {}-{}",
                std::env::consts::ARCH,
                std::env::consts::OS
            )),
        },
        Check {
            name: "Simple Exponential Smoothing",
            outcome: simple_smoothing_check().map_err(|e| e.to_string()),
        },
        Check {
            name: "Holt-Winters",
            outcome: seasonal_check().map_err(|e| e.to_string()),
        },
        Check {
            name: "Box-Cox",
            outcome: box_cox_check(),
        },
    ];

    let failed = checks.iter().filter(|c| c.outcome.is_err()).count();
    let results = checks
        .into_iter()
        .map(|check| CheckResult {
            name: check.name.to_string(),
            version: VERSION.to_string(),
            test_result: match check.outcome {
                Ok(result) => result,
                Err(error) => format!("failed: {}", error),
            },
        })
        .collect();

    let message = if failed == 0 {
        "all checks passed".to_string()
    } else {
        format!("{} check(s) failed", failed)
    };

    EnvironmentReport {
        success: failed == 0,
        results,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_passes() {
        let report = environment_report();
        assert!(report.success, "{:?}", report);
        assert_eq!(report.results.len(), 4);
        assert_eq!(report.results[0].name, "phasecast-core");
        assert!(report.results.iter().all(|r| r.version == VERSION));
    }

    #[test]
    fn test_report_serializes() {
        let json = serde_json::to_value(environment_report()).unwrap();
        assert_eq!(json["success"], true);
        assert!(json["results"][1]["test_result"]
            .as_str()
            .unwrap()
            .starts_with("forecast(1) = "));
    }
}
