//! Simple Exponential Smoothing (SES)
//!
//! First rung of the fallback ladder: no trend, no seasonality.
//!
//! Formula: `S_t = α * Y_t + (1 - α) * S_{t-1}`

use phasecast_spi::{FitResult, Method, ModelFitError, Predictor};

/// Simple Exponential Smoothing for series without usable seasonality
///
/// # Example
///
/// ```rust
/// use phasecast_core::smoothing::SimpleExponentialSmoothing;
/// use phasecast_core::Predictor;
///
/// let data = vec![10.0, 12.0, 11.0, 13.0, 12.0, 14.0, 13.0, 15.0];
/// let model = SimpleExponentialSmoothing::auto(&data).unwrap();
/// let next = model.forecast().unwrap();
/// assert!(next > 10.0 && next < 15.0);
/// ```
#[derive(Debug, Clone)]
pub struct SimpleExponentialSmoothing {
    /// Smoothing parameter (0 < alpha < 1)
    alpha: f64,
    /// Current level estimate
    level: f64,
    /// One-step-ahead errors over the history
    residuals: Vec<f64>,
    /// Whether model has been fitted
    fitted: bool,
}

impl SimpleExponentialSmoothing {
    /// Create a new SES model
    ///
    /// # Arguments
    ///
    /// * `alpha` - Smoothing parameter (0 < alpha < 1)
    ///             Higher values give more weight to recent observations
    pub fn new(alpha: f64) -> FitResult<Self> {
        if !(0.0 < alpha && alpha < 1.0) {
            return Err(ModelFitError::InvalidParameter {
                name: "alpha".to_string(),
                reason: "must be between 0 and 1 (exclusive)".to_string(),
            });
        }

        Ok(Self {
            alpha,
            level: 0.0,
            residuals: Vec::new(),
            fitted: false,
        })
    }

    /// Fit SES with alpha selected by grid search over 0.01..=0.99
    pub fn auto(data: &[f64]) -> FitResult<Self> {
        let mut best_alpha = 0.5;
        let mut best_mse = f64::MAX;

        if data.len() >= 2 {
            for alpha_int in 1..100 {
                let alpha = alpha_int as f64 / 100.0;
                let mse = Self::compute_mse(data, alpha);
                if mse < best_mse {
                    best_mse = mse;
                    best_alpha = alpha;
                }
            }
        }

        let mut model = Self::new(best_alpha)?;
        model.fit(data)?;
        Ok(model)
    }

    fn compute_mse(data: &[f64], alpha: f64) -> f64 {
        let mut level = data[0];
        let mut sse = 0.0;

        for &value in &data[1..] {
            let error = value - level;
            sse += error * error;
            level = alpha * value + (1.0 - alpha) * level;
        }

        sse / (data.len() - 1) as f64
    }

    /// Get the current level
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Get alpha parameter
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Predictor for SimpleExponentialSmoothing {
    fn fit(&mut self, data: &[f64]) -> FitResult<()> {
        if data.len() < 2 {
            return Err(ModelFitError::InsufficientData {
                required: 2,
                actual: data.len(),
            });
        }

        // Initialize level with first observation
        self.level = data[0];
        self.residuals = Vec::with_capacity(data.len() - 1);

        for &value in &data[1..] {
            self.residuals.push(value - self.level);
            self.level = self.alpha * value + (1.0 - self.alpha) * self.level;
        }

        if !self.level.is_finite() {
            self.fitted = false;
            return Err(ModelFitError::NumericalError(
                "level diverged during smoothing".to_string(),
            ));
        }

        self.fitted = true;
        Ok(())
    }

    fn forecast(&self) -> FitResult<f64> {
        if !self.fitted {
            return Err(ModelFitError::NotFitted);
        }

        // SES produces flat forecasts
        Ok(self.level)
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }

    fn residuals(&self) -> Option<&[f64]> {
        self.fitted.then_some(self.residuals.as_slice())
    }

    fn method(&self) -> Method {
        Method::SimpleSmoothing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ses_fixed_alpha() {
        let data = vec![10.0, 12.0, 11.0, 13.0, 12.0, 14.0, 13.0, 15.0];
        let mut model = SimpleExponentialSmoothing::new(0.3).unwrap();
        model.fit(&data).unwrap();

        let forecast = model.forecast().unwrap();
        assert!((forecast - model.level()).abs() < 1e-12);
        assert_eq!(model.residuals().unwrap().len(), data.len() - 1);
    }

    #[test]
    fn test_ses_manual_level() {
        let mut model = SimpleExponentialSmoothing::new(0.5).unwrap();
        model.fit(&[10.0, 20.0]).unwrap();
        // 0.5 * 20 + 0.5 * 10
        assert!((model.forecast().unwrap() - 15.0).abs() < 1e-12);
        assert_eq!(model.residuals().unwrap(), &[10.0]);
    }

    #[test]
    fn test_ses_invalid_alpha() {
        assert!(SimpleExponentialSmoothing::new(0.0).is_err());
        assert!(SimpleExponentialSmoothing::new(1.0).is_err());
        assert!(SimpleExponentialSmoothing::new(-0.3).is_err());
    }

    #[test]
    fn test_ses_insufficient_data() {
        let mut model = SimpleExponentialSmoothing::new(0.3).unwrap();
        assert!(matches!(
            model.fit(&[1.0]),
            Err(ModelFitError::InsufficientData { required: 2, actual: 1 })
        ));
        assert!(SimpleExponentialSmoothing::auto(&[1.0]).is_err());
    }

    #[test]
    fn test_not_fitted() {
        let model = SimpleExponentialSmoothing::new(0.3).unwrap();
        assert!(!model.is_fitted());
        assert!(matches!(model.forecast(), Err(ModelFitError::NotFitted)));
        assert!(model.residuals().is_none());
    }

    #[test]
    fn test_auto_tracks_level_shift() {
        let data = vec![10.0, 10.0, 10.0, 10.0, 50.0, 50.0, 50.0, 50.0];
        let model = SimpleExponentialSmoothing::auto(&data).unwrap();
        // a level shift favours a large alpha
        assert!(model.alpha() > 0.5);
        assert!(model.forecast().unwrap() > 45.0);
    }
}
