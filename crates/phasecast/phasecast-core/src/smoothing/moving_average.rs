//! Moving-average forecasters
//!
//! Neither model is fitted: the forecast is a (weighted) mean of the history,
//! so intervals come from the dispersion of the series itself.

use phasecast_spi::{FitResult, Method, ModelFitError, Predictor};

use crate::stats;

/// Exponentially weighted moving average over the whole series
///
/// Weight of position `i` out of `n` is `exp(linspace(-1, 0, n)[i])`, so the
/// most recent value weighs `e` times the oldest one.
#[derive(Debug, Clone, Default)]
pub struct WeightedMovingAverage {
    value: Option<f64>,
}

impl WeightedMovingAverage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recency weights for a window of `n` points
    pub fn weights(n: usize) -> Vec<f64> {
        stats::linspace(-1.0, 0.0, n)
            .into_iter()
            .map(f64::exp)
            .collect()
    }
}

impl Predictor for WeightedMovingAverage {
    fn fit(&mut self, data: &[f64]) -> FitResult<()> {
        self.value = None;
        if data.is_empty() {
            return Err(ModelFitError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }

        let weights = Self::weights(data.len());
        let value = stats::weighted_mean(data, &weights)
            .filter(|v| v.is_finite())
            .ok_or_else(|| ModelFitError::NumericalError("weighted mean undefined".to_string()))?;

        self.value = Some(value);
        Ok(())
    }

    fn forecast(&self) -> FitResult<f64> {
        self.value.ok_or(ModelFitError::NotFitted)
    }

    fn is_fitted(&self) -> bool {
        self.value.is_some()
    }

    fn method(&self) -> Method {
        Method::WeightedMovingAverage
    }
}

/// Mean of the last seasonal cycle; the last rung of the fallback ladder
#[derive(Debug, Clone)]
pub struct NaiveWeekMean {
    period: usize,
    value: Option<f64>,
}

impl NaiveWeekMean {
    pub fn new(period: usize) -> Self {
        Self {
            period: period.max(1),
            value: None,
        }
    }

    pub fn period(&self) -> usize {
        self.period
    }
}

impl Predictor for NaiveWeekMean {
    fn fit(&mut self, data: &[f64]) -> FitResult<()> {
        self.value = None;
        if data.is_empty() {
            return Err(ModelFitError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }

        let start = data.len().saturating_sub(self.period);
        let value = stats::mean(&data[start..]);
        if !value.is_finite() {
            return Err(ModelFitError::NumericalError(
                "mean of last cycle is not finite".to_string(),
            ));
        }

        self.value = Some(value);
        Ok(())
    }

    fn forecast(&self) -> FitResult<f64> {
        self.value.ok_or(ModelFitError::NotFitted)
    }

    fn is_fitted(&self) -> bool {
        self.value.is_some()
    }

    fn method(&self) -> Method {
        Method::NaiveWeekMean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_increase_toward_recent() {
        let w = WeightedMovingAverage::weights(5);
        assert_eq!(w.len(), 5);
        assert!((w[0] - (-1.0f64).exp()).abs() < 1e-12);
        assert!((w[4] - 1.0).abs() < 1e-12);
        assert!(w.windows(2).all(|p| p[0] < p[1]));
    }

    #[test]
    fn test_wma_constant_series() {
        let mut model = WeightedMovingAverage::new();
        model.fit(&[10.0; 5]).unwrap();
        assert!((model.forecast().unwrap() - 10.0).abs() < 1e-12);
        assert!(model.residuals().is_none());
    }

    #[test]
    fn test_wma_favours_recent() {
        let mut model = WeightedMovingAverage::new();
        model.fit(&[0.0, 0.0, 0.0, 10.0]).unwrap();
        let value = model.forecast().unwrap();
        // plain mean would be 2.5
        assert!(value > 2.5 && value < 10.0);
    }

    #[test]
    fn test_wma_single_point() {
        let mut model = WeightedMovingAverage::new();
        model.fit(&[4.2]).unwrap();
        assert!((model.forecast().unwrap() - 4.2).abs() < 1e-12);
    }

    #[test]
    fn test_wma_empty() {
        let mut model = WeightedMovingAverage::new();
        assert!(model.fit(&[]).is_err());
        assert!(!model.is_fitted());
    }

    #[test]
    fn test_naive_week_mean_uses_last_cycle() {
        let mut model = NaiveWeekMean::new(3);
        model.fit(&[100.0, 100.0, 1.0, 2.0, 3.0]).unwrap();
        assert!((model.forecast().unwrap() - 2.0).abs() < 1e-12);
        assert_eq!(model.method(), Method::NaiveWeekMean);
    }

    #[test]
    fn test_naive_week_mean_short_series() {
        let mut model = NaiveWeekMean::new(7);
        model.fit(&[2.0, 4.0]).unwrap();
        assert!((model.forecast().unwrap() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_naive_not_fitted() {
        let model = NaiveWeekMean::new(7);
        assert!(matches!(model.forecast(), Err(ModelFitError::NotFitted)));
    }
}
