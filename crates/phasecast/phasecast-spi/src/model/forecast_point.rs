//! Point forecast with its confidence interval

use serde::{Deserialize, Serialize};

use super::Method;

/// Symmetric confidence interval, lower bound clamped at zero
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Lower bound (never negative)
    pub lower: f64,
    /// Upper bound (not clamped)
    pub upper: f64,
}

impl Interval {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Degenerate `{0, 0}` interval
    pub fn zero() -> Self {
        Self {
            lower: 0.0,
            upper: 0.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Next-day forecast for one phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Point forecast (never negative)
    pub value: f64,
    /// 95% confidence interval
    pub interval: Interval,
    /// Method that produced the value
    pub method: Method,
}

impl ForecastPoint {
    pub fn new(value: f64, interval: Interval, method: Method) -> Self {
        Self {
            value,
            interval,
            method,
        }
    }

    /// Forecast for an all-zero series
    pub fn zero() -> Self {
        Self {
            value: 0.0,
            interval: Interval::zero(),
            method: Method::ZeroSeries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_point() {
        let point = ForecastPoint::zero();
        assert_eq!(point.value, 0.0);
        assert_eq!(point.interval, Interval::zero());
        assert_eq!(point.method, Method::ZeroSeries);
    }

    #[test]
    fn test_interval_bounds_relationship() {
        let interval = Interval::new(90.0, 110.0);
        assert!(interval.contains(100.0));
        assert!(!interval.contains(111.0));
        assert_eq!(interval.width(), 20.0);
    }

    #[test]
    fn test_serialized_shape() {
        let point = ForecastPoint::new(
            100.0,
            Interval::new(90.0, 110.0),
            Method::SeasonalSmoothing,
        );
        let json = serde_json::to_value(point).unwrap();
        assert_eq!(json["value"], 100.0);
        assert_eq!(json["interval"]["lower"], 90.0);
        assert_eq!(json["interval"]["upper"], 110.0);
        assert_eq!(json["method"], "SeasonalSmoothing");
    }
}
