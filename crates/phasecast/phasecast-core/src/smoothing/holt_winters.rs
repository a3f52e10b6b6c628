//! Damped-trend additive Holt-Winters
//!
//! Additive error, additive damped trend, additive seasonality. The model
//! equations, with `m` the seasonal period:
//!
//! - Forecast: `ŷ_t = l_{t-1} + φ b_{t-1} + s_{t-m}`
//! - Level: `l_t = α(y_t - s_{t-m}) + (1-α)(l_{t-1} + φ b_{t-1})`
//! - Trend: `b_t = β(l_t - l_{t-1}) + (1-β) φ b_{t-1}`
//! - Seasonal: `s_t = γ(y_t - l_{t-1} - φ b_{t-1}) + (1-γ) s_{t-m}`
//!
//! The smoothing parameters are fitted together with the initial level and
//! trend by minimizing the in-sample one-step SSE, optionally on Box-Cox
//! transformed data.

use phasecast_spi::{FitResult, Method, ModelFitError, Predictor};
use tracing::debug;

use crate::optimize::{nelder_mead, NelderMeadConfig};
use crate::stats;
use crate::transform::{box_cox, box_cox_lambda, inverse_box_cox_value};

const PARAM_MIN: f64 = 1e-4;
const PARAM_MAX: f64 = 0.9999;
const PHI_BOUNDS: (f64, f64) = (0.8, 0.98);

/// Fitted smoothing parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingParams {
    /// Level smoothing
    pub alpha: f64,
    /// Trend smoothing
    pub beta: f64,
    /// Seasonal smoothing
    pub gamma: f64,
    /// Trend damping (1.0 = undamped)
    pub phi: f64,
}

impl SmoothingParams {
    /// Decode an optimizer vector `[α, β*, γ*, φ, ..]`.
    ///
    /// `β = β*·α` and `γ = γ*·(1-α)` keep the usual admissibility
    /// constraints without penalty terms.
    fn from_vector(x: &[f64]) -> Self {
        let alpha = x[0];
        Self {
            alpha,
            beta: x[1] * alpha,
            gamma: x[2] * (1.0 - alpha),
            phi: x[3],
        }
    }
}

/// State after running the recursions over a series
struct FilterOutput {
    level: f64,
    trend: f64,
    seasonals: Vec<f64>,
    fitted: Vec<f64>,
    sse: f64,
}

/// Damped-trend additive Holt-Winters with estimated initialization
///
/// # Example
///
/// ```rust
/// use phasecast_core::smoothing::DampedHoltWinters;
/// use phasecast_core::Predictor;
///
/// let data: Vec<f64> = (0..21)
///     .map(|i| 100.0 + 10.0 * ((i % 7) as f64))
///     .collect();
///
/// let mut model = DampedHoltWinters::new(7).unwrap();
/// model.fit(&data).unwrap();
/// let next = model.forecast().unwrap();
/// assert!(next.is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct DampedHoltWinters {
    period: usize,
    damped: bool,
    use_box_cox: bool,
    remove_bias: bool,
    max_iterations: usize,
    params: Option<SmoothingParams>,
    lambda: Option<f64>,
    level: f64,
    trend: f64,
    seasonals: Vec<f64>,
    bias: f64,
    residuals: Vec<f64>,
    n: usize,
    fitted: bool,
}

impl DampedHoltWinters {
    /// Create a model for the given seasonal period (at least 2)
    pub fn new(period: usize) -> FitResult<Self> {
        if period < 2 {
            return Err(ModelFitError::InvalidParameter {
                name: "period".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }

        Ok(Self {
            period,
            damped: true,
            use_box_cox: true,
            remove_bias: true,
            max_iterations: 1000,
            params: None,
            lambda: None,
            level: 0.0,
            trend: 0.0,
            seasonals: vec![0.0; period],
            bias: 0.0,
            residuals: Vec::new(),
            n: 0,
            fitted: false,
        })
    }

    /// Damp the trend (default) or keep it linear
    pub fn with_damping(mut self, damped: bool) -> Self {
        self.damped = damped;
        self
    }

    /// Fit on Box-Cox transformed data when every value is positive
    pub fn with_box_cox(mut self, enabled: bool) -> Self {
        self.use_box_cox = enabled;
        self
    }

    /// Shift fitted values and forecast by the mean in-sample error
    pub fn with_bias_removal(mut self, enabled: bool) -> Self {
        self.remove_bias = enabled;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Fitted smoothing parameters
    pub fn params(&self) -> Option<SmoothingParams> {
        self.params
    }

    /// Box-Cox lambda used for the fit, `None` when untransformed
    pub fn lambda(&self) -> Option<f64> {
        self.lambda
    }

    /// Final (level, trend, seasonal) state, in the fitting scale
    pub fn components(&self) -> (f64, f64, &[f64]) {
        (self.level, self.trend, &self.seasonals)
    }

    /// Heuristic start: first-season mean level, trend from the first two
    /// seasons when available, first-season deviations as seasonal indices.
    fn initial_state(y: &[f64], period: usize) -> (f64, f64, Vec<f64>) {
        let first = &y[..period];
        let level = stats::mean(first);

        let trend = if y.len() >= 2 * period {
            (stats::mean(&y[period..2 * period]) - level) / period as f64
        } else {
            0.0
        };

        let seasonals = first.iter().map(|v| v - level).collect();
        (level, trend, seasonals)
    }

    fn filter(
        y: &[f64],
        params: SmoothingParams,
        level0: f64,
        trend0: f64,
        mut seasonals: Vec<f64>,
    ) -> FilterOutput {
        let period = seasonals.len();
        let SmoothingParams {
            alpha,
            beta,
            gamma,
            phi,
        } = params;

        let mut level = level0;
        let mut trend = trend0;
        let mut fitted = Vec::with_capacity(y.len());
        let mut sse = 0.0;

        for (t, &obs) in y.iter().enumerate() {
            let idx = t % period;
            let s = seasonals[idx];
            let damped_trend = phi * trend;
            let forecast = level + damped_trend + s;

            let error = obs - forecast;
            sse += error * error;
            fitted.push(forecast);

            let new_level = alpha * (obs - s) + (1.0 - alpha) * (level + damped_trend);
            trend = beta * (new_level - level) + (1.0 - beta) * damped_trend;
            seasonals[idx] = gamma * (obs - level - damped_trend) + (1.0 - gamma) * s;
            level = new_level;
        }

        FilterOutput {
            level,
            trend,
            seasonals,
            fitted,
            sse,
        }
    }

    fn back_transform(&self, value: f64) -> FitResult<f64> {
        let result = match self.lambda {
            Some(lambda) => inverse_box_cox_value(value, lambda),
            None => value.is_finite().then_some(value),
        };
        result.ok_or_else(|| {
            ModelFitError::NumericalError(format!("cannot back-transform {}", value))
        })
    }
}

impl Predictor for DampedHoltWinters {
    fn fit(&mut self, data: &[f64]) -> FitResult<()> {
        self.fitted = false;
        let period = self.period;

        if data.len() < period {
            return Err(ModelFitError::InsufficientData {
                required: period,
                actual: data.len(),
            });
        }
        if data.iter().any(|v| !v.is_finite()) {
            return Err(ModelFitError::NumericalError(
                "series contains non-finite values".to_string(),
            ));
        }

        self.lambda = if self.use_box_cox {
            box_cox_lambda(data)
        } else {
            None
        };
        let y = match self.lambda {
            Some(lambda) => box_cox(data, lambda),
            None => data.to_vec(),
        };

        let (level0, trend0, seasonals0) = Self::initial_state(&y, period);

        let min = y.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = y.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let width = (max - min).max(level0.abs() * 0.1).max(1e-6);

        let phi_bounds = if self.damped { PHI_BOUNDS } else { (1.0, 1.0) };
        let bounds = [
            (PARAM_MIN, PARAM_MAX),
            (PARAM_MIN, PARAM_MAX),
            (PARAM_MIN, PARAM_MAX),
            phi_bounds,
            (level0 - width, level0 + width),
            (trend0 - width, trend0 + width),
        ];
        let start = [0.3, 0.1, 0.1, phi_bounds.1, level0, trend0];

        let config = NelderMeadConfig {
            max_iter: self.max_iterations,
            ..Default::default()
        };
        let result = nelder_mead(
            |x| {
                let out = Self::filter(
                    &y,
                    SmoothingParams::from_vector(x),
                    x[4],
                    x[5],
                    seasonals0.clone(),
                );
                if out.sse.is_finite() {
                    out.sse
                } else {
                    f64::INFINITY
                }
            },
            &start,
            Some(&bounds),
            config,
        );

        if !result.optimal_value.is_finite() {
            return Err(ModelFitError::ConvergenceFailure {
                iterations: result.iterations,
            });
        }

        let x = &result.optimal_point;
        let params = SmoothingParams::from_vector(x);
        let out = Self::filter(&y, params, x[4], x[5], seasonals0);

        self.bias = if self.remove_bias {
            let errors: Vec<f64> = y.iter().zip(&out.fitted).map(|(o, f)| o - f).collect();
            stats::mean(&errors)
        } else {
            0.0
        };
        self.params = Some(params);
        self.level = out.level;
        self.trend = out.trend;
        self.seasonals = out.seasonals;
        self.n = data.len();

        let mut residuals = Vec::with_capacity(data.len());
        for (&obs, &fit) in data.iter().zip(&out.fitted) {
            residuals.push(obs - self.back_transform(fit + self.bias)?);
        }
        self.residuals = residuals;

        debug!(
            alpha = params.alpha,
            beta = params.beta,
            gamma = params.gamma,
            phi = params.phi,
            lambda = ?self.lambda,
            sse = result.optimal_value,
            iterations = result.iterations,
            converged = result.converged,
            "fitted damped Holt-Winters"
        );

        self.fitted = true;
        Ok(())
    }

    fn forecast(&self) -> FitResult<f64> {
        if !self.fitted {
            return Err(ModelFitError::NotFitted);
        }

        let phi = self.params.map(|p| p.phi).unwrap_or(1.0);
        let season = self.seasonals[self.n % self.period];
        let raw = self.level + phi * self.trend + season + self.bias;
        self.back_transform(raw)
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }

    fn residuals(&self) -> Option<&[f64]> {
        self.fitted.then_some(self.residuals.as_slice())
    }

    fn method(&self) -> Method {
        Method::SeasonalSmoothing
    }
}
