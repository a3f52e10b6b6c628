//! One-step forecasting with a fallback ladder
//!
//! Seasonal smoothing degrades to simple smoothing, then to the mean of the
//! last cycle. Fit failures are absorbed here and only show up as the
//! reported method.

use phasecast_spi::{FitResult, Method, ModelFitError, Predictor, PredictorConfig};
use tracing::warn;

use crate::selector::Selection;
use crate::smoothing::{
    DampedHoltWinters, NaiveWeekMean, SimpleExponentialSmoothing, WeightedMovingAverage,
};

/// A clamped point forecast and where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    /// Point forecast, floored at zero
    pub value: f64,
    /// Method that actually produced the value
    pub method: Method,
    /// In-sample residuals, present for fitted smoothing models
    pub residuals: Option<Vec<f64>>,
}

impl Forecast {
    fn from_model(model: &dyn Predictor, raw: f64) -> Self {
        Self {
            value: raw.max(0.0),
            method: model.method(),
            residuals: model.residuals().map(<[f64]>::to_vec),
        }
    }

    fn zero() -> Self {
        Self {
            value: 0.0,
            method: Method::ZeroSeries,
            residuals: None,
        }
    }
}

fn fit_and_forecast(model: &mut dyn Predictor, data: &[f64]) -> FitResult<f64> {
    model.fit(data)?;
    let value = model.forecast()?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ModelFitError::NumericalError(format!(
            "{} produced a non-finite forecast",
            model.method()
        )))
    }
}

/// Runs the selected method, falling back on fit failure
#[derive(Debug, Clone)]
pub struct SmoothingForecaster {
    config: PredictorConfig,
}

impl SmoothingForecaster {
    pub fn new(config: PredictorConfig) -> Self {
        Self { config }
    }

    fn seasonal_model(&self) -> FitResult<DampedHoltWinters> {
        Ok(DampedHoltWinters::new(self.config.seasonal_period)?
            .with_damping(self.config.damped_trend)
            .with_box_cox(self.config.use_box_cox)
            .with_bias_removal(self.config.remove_bias)
            .with_max_iterations(self.config.max_iterations))
    }

    /// Forecast the next value of the selected window.
    ///
    /// Only fails when even the last-cycle mean cannot be computed.
    pub fn forecast(&self, selection: &Selection) -> FitResult<Forecast> {
        let data = selection.series.values();
        let phase = selection.series.phase();

        match selection.method {
            Method::ZeroSeries => Ok(Forecast::zero()),
            Method::WeightedMovingAverage => {
                let mut model = WeightedMovingAverage::new();
                match fit_and_forecast(&mut model, data) {
                    Ok(raw) => Ok(Forecast::from_model(&model, raw)),
                    Err(error) => {
                        warn!(%phase, %error, "moving average failed, using last-cycle mean");
                        self.naive(data)
                    }
                }
            }
            Method::SeasonalSmoothing | Method::SimpleSmoothing | Method::NaiveWeekMean => {
                self.seasonal_ladder(selection)
            }
        }
    }

    fn seasonal_ladder(&self, selection: &Selection) -> FitResult<Forecast> {
        let data = selection.series.values();
        let phase = selection.series.phase();

        let seasonal = self.seasonal_model().and_then(|mut model| {
            let raw = fit_and_forecast(&mut model, data)?;
            Ok(Forecast::from_model(&model, raw))
        });
        let error = match seasonal {
            Ok(forecast) => return Ok(forecast),
            Err(error) => error,
        };
        warn!(%phase, %error, "seasonal fit failed, falling back to simple smoothing");

        let simple = SimpleExponentialSmoothing::auto(data).and_then(|model| {
            let raw = model.forecast()?;
            if raw.is_finite() {
                Ok(Forecast::from_model(&model, raw))
            } else {
                Err(ModelFitError::NumericalError(
                    "simple smoothing produced a non-finite forecast".to_string(),
                ))
            }
        });
        match simple {
            Ok(forecast) => Ok(forecast),
            Err(error) => {
                warn!(%phase, %error, "simple smoothing failed, using last-cycle mean");
                self.naive(data)
            }
        }
    }

    fn naive(&self, data: &[f64]) -> FitResult<Forecast> {
        let mut model = NaiveWeekMean::new(self.config.seasonal_period);
        let raw = fit_and_forecast(&mut model, data)?;
        Ok(Forecast::from_model(&model, raw))
    }
}

impl Default for SmoothingForecaster {
    fn default() -> Self {
        Self::new(PredictorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use phasecast_spi::{Phase, PhaseSeries};

    fn selection(method: Method, values: Vec<f64>) -> Selection {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let dates = (0..values.len())
            .map(|i| start + Duration::days(i as i64))
            .collect();
        Selection {
            method,
            series: PhaseSeries::new(Phase::A, dates, values).unwrap(),
        }
    }

    #[test]
    fn test_zero_series() {
        let forecast = SmoothingForecaster::default()
            .forecast(&selection(Method::ZeroSeries, vec![0.0; 7]))
            .unwrap();
        assert_eq!(forecast.value, 0.0);
        assert_eq!(forecast.method, Method::ZeroSeries);
        assert!(forecast.residuals.is_none());
    }

    #[test]
    fn test_weighted_moving_average() {
        let forecast = SmoothingForecaster::default()
            .forecast(&selection(Method::WeightedMovingAverage, vec![10.0; 5]))
            .unwrap();
        assert!((forecast.value - 10.0).abs() < 1e-12);
        assert_eq!(forecast.method, Method::WeightedMovingAverage);
        assert!(forecast.residuals.is_none());
    }

    #[test]
    fn test_seasonal_keeps_residuals() {
        let values: Vec<f64> = (0..14).map(|i| 100.0 + 10.0 * ((i % 7) as f64)).collect();
        let forecast = SmoothingForecaster::default()
            .forecast(&selection(Method::SeasonalSmoothing, values))
            .unwrap();
        assert_eq!(forecast.method, Method::SeasonalSmoothing);
        assert_eq!(forecast.residuals.as_ref().map(Vec::len), Some(14));
        assert!(forecast.value >= 0.0);
    }

    #[test]
    fn test_short_window_falls_back_to_simple_smoothing() {
        // fewer points than one period makes the seasonal fit fail
        let forecast = SmoothingForecaster::default()
            .forecast(&selection(Method::SeasonalSmoothing, vec![5.0, 6.0, 7.0]))
            .unwrap();
        assert_eq!(forecast.method, Method::SimpleSmoothing);
        assert_eq!(forecast.residuals.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_single_point_falls_back_to_naive() {
        let forecast = SmoothingForecaster::default()
            .forecast(&selection(Method::SeasonalSmoothing, vec![8.0]))
            .unwrap();
        assert_eq!(forecast.method, Method::NaiveWeekMean);
        assert!((forecast.value - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_forecast_is_clamped() {
        let forecast = SmoothingForecaster::default()
            .forecast(&selection(Method::WeightedMovingAverage, vec![-5.0, -4.0, -3.0]))
            .unwrap();
        assert_eq!(forecast.value, 0.0);
    }
}
