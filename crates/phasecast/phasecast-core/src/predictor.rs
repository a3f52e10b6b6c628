//! Result assembly
//!
//! [`PowerPredictor`] runs ingest, selection, forecasting and interval
//! estimation for the three phases and packages the output contract. It is
//! the only place where unexpected failures, panics included, are caught.

use std::panic::{self, AssertUnwindSafe};

use phasecast_spi::{
    ConfidenceIntervalComputer, ConfigError, ForecastPoint, Method, ModelInfo, PhaseSeries,
    PredictError, PredictionResult, PredictionSuccess, Predictions, PredictorConfig, RawRecord,
    Result, CONFIDENCE_LEVEL,
};
use rayon::prelude::*;
use tracing::{debug, error};

use crate::confidence::StandardErrorComputer;
use crate::forecaster::{Forecast, SmoothingForecaster};
use crate::ingest::{ingest, IngestReport};
use crate::selector::{MethodSelector, Selection};

const INTERNAL_FAILURE: &str = "internal error while forecasting";

/// Forecast and window of one phase
struct PhaseOutcome {
    point: ForecastPoint,
    window: PhaseSeries,
}

/// Next-day forecaster for three-phase consumption
///
/// Stateless across calls: every [`predict`](PowerPredictor::predict) builds
/// and discards its own series and models.
///
/// # Example
///
/// ```rust
/// use phasecast_core::PowerPredictor;
/// use phasecast_spi::{PredictorConfig, RawRecord};
///
/// let records: Vec<RawRecord> = (1..=7)
///     .map(|d| RawRecord::new(&format!("2024-01-{:02}", d), 100.0, 200.0, 300.0))
///     .collect();
///
/// let predictor = PowerPredictor::new(PredictorConfig::default()).unwrap();
/// let result = predictor.predict(&records);
/// assert!(result.is_success());
/// ```
pub struct PowerPredictor {
    config: PredictorConfig,
    selector: MethodSelector,
    forecaster: SmoothingForecaster,
    intervals: Box<dyn ConfidenceIntervalComputer>,
}

impl PowerPredictor {
    /// Create a predictor after validating `config`
    pub fn new(config: PredictorConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            selector: MethodSelector::from_config(&config),
            forecaster: SmoothingForecaster::new(config.clone()),
            intervals: Box::new(StandardErrorComputer::new()),
            config,
        })
    }

    /// Replace the interval estimator
    pub fn with_interval_computer<C>(mut self, computer: C) -> Self
    where
        C: ConfidenceIntervalComputer + 'static,
    {
        self.intervals = Box::new(computer);
        self
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Forecast the next day for every phase.
    ///
    /// Never panics: any failure becomes a failure payload. Internal causes
    /// are logged and replaced by a generic message.
    pub fn predict(&self, records: &[RawRecord]) -> PredictionResult {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.try_predict(records)));

        match outcome {
            Ok(Ok(success)) => PredictionResult::Success(success),
            Ok(Err(PredictError::Unexpected(cause))) => {
                error!(%cause, "prediction failed");
                PredictionResult::failure(&PredictError::Unexpected(INTERNAL_FAILURE.to_string()))
            }
            Ok(Err(err)) => PredictionResult::failure(&err),
            Err(payload) => {
                let cause = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                error!(%cause, "prediction panicked");
                PredictionResult::failure(&PredictError::Unexpected(INTERNAL_FAILURE.to_string()))
            }
        }
    }

    /// Forecast without the catch-all boundary.
    ///
    /// Errors carry their internal cause unchanged.
    pub fn try_predict(&self, records: &[RawRecord]) -> Result<PredictionSuccess> {
        let report = ingest(records, self.config.min_points)?;

        let outcomes: Vec<Result<PhaseOutcome>> = if self.config.parallel {
            report
                .series
                .as_slice()
                .par_iter()
                .map(|series| self.forecast_phase(series))
                .collect()
        } else {
            report
                .series
                .iter()
                .map(|series| self.forecast_phase(series))
                .collect()
        };
        let outcomes = outcomes.into_iter().collect::<Result<Vec<_>>>()?;

        self.assemble(&report, outcomes)
    }

    fn forecast_phase(&self, series: &PhaseSeries) -> Result<PhaseOutcome> {
        let selection = self.selector.select(series);
        let forecast = self.forecaster.forecast(&selection).map_err(|e| {
            PredictError::Unexpected(format!("phase {} forecast failed: {}", series.phase(), e))
        })?;

        let point = self.point_for(&selection, &forecast);

        debug!(
            phase = %series.phase(),
            value = point.value,
            lower = point.interval.lower,
            upper = point.interval.upper,
            method = %point.method,
            "phase forecast"
        );

        Ok(PhaseOutcome {
            point,
            window: selection.series,
        })
    }

    /// Attach an interval to `forecast`.
    ///
    /// Fitted models are spread by their residuals, everything else by the
    /// window itself.
    fn point_for(&self, selection: &Selection, forecast: &Forecast) -> ForecastPoint {
        if forecast.method == Method::ZeroSeries {
            return ForecastPoint::zero();
        }
        let dispersion = match &forecast.residuals {
            Some(residuals) if forecast.method.is_fitted_model() => residuals.as_slice(),
            _ => selection.series.values(),
        };
        let interval = self.intervals.compute(forecast.value, dispersion);
        ForecastPoint::new(forecast.value, interval, forecast.method)
    }

    fn assemble(
        &self,
        report: &IngestReport,
        outcomes: Vec<PhaseOutcome>,
    ) -> Result<PredictionSuccess> {
        let [a, b, c]: [PhaseOutcome; 3] = outcomes
            .try_into()
            .map_err(|_| PredictError::Unexpected("expected three phase outcomes".to_string()))?;

        let last_date = a
            .window
            .last_date()
            .ok_or_else(|| PredictError::Unexpected("empty phase window".to_string()))?;

        let method = Method::summarize([a.point.method, b.point.method, c.point.method]);
        let model_info = ModelInfo {
            data_points: a.window.len(),
            last_date: last_date.format("%Y-%m-%d").to_string(),
            confidence_level: CONFIDENCE_LEVEL,
            method,
            skipped_records: report.skipped.len(),
            warnings: report.warnings.iter().map(ToString::to_string).collect(),
        };

        let predictions = Predictions {
            phase_a: a.point,
            phase_b: b.point,
            phase_c: c.point,
        };
        Ok(PredictionSuccess::new(predictions, model_info))
    }
}

impl Default for PowerPredictor {
    fn default() -> Self {
        Self {
            config: PredictorConfig::default(),
            selector: MethodSelector::default(),
            forecaster: SmoothingForecaster::default(),
            intervals: Box::new(StandardErrorComputer::new()),
        }
    }
}

impl std::fmt::Debug for PowerPredictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PowerPredictor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
