//! Confidence interval implementations
//!
//! Symmetric normal-approximation intervals around a one-step forecast.

use phasecast_spi::{ConfidenceIntervalComputer, Interval, Z_SCORE_95};

use crate::stats;

/// Standard error-based confidence interval computer
///
/// The standard error is the population standard deviation of the
/// dispersion sample. The lower bound is clamped at zero; the upper bound
/// saturates at `f64::MAX`.
#[derive(Debug, Clone, Copy)]
pub struct StandardErrorComputer {
    z: f64,
}

impl StandardErrorComputer {
    pub fn new() -> Self {
        Self { z: Z_SCORE_95 }
    }

    /// Margin on either side of the forecast
    pub fn margin(&self, dispersion: &[f64]) -> f64 {
        let std_err = stats::std_dev(dispersion);
        if std_err.is_nan() {
            return 0.0;
        }
        (self.z * std_err).min(f64::MAX)
    }
}

impl Default for StandardErrorComputer {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfidenceIntervalComputer for StandardErrorComputer {
    fn compute(&self, forecast: f64, dispersion: &[f64]) -> Interval {
        let margin = self.margin(dispersion);
        Interval::new((forecast - margin).max(0.0), (forecast + margin).min(f64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_interval() {
        let computer = StandardErrorComputer::new();
        // population std of [2, 4, 4, 4, 5, 5, 7, 9] is 2
        let interval = computer.compute(100.0, &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((interval.lower - 96.08).abs() < 1e-9);
        assert!((interval.upper - 103.92).abs() < 1e-9);
    }

    #[test]
    fn test_lower_clamped_at_zero() {
        let computer = StandardErrorComputer::new();
        let interval = computer.compute(1.0, &[0.0, 10.0]);
        assert_eq!(interval.lower, 0.0);
        assert!((interval.upper - (1.0 + 1.96 * 5.0)).abs() < 1e-9);
    }

    #[test]
    fn test_single_point_has_no_margin() {
        let computer = StandardErrorComputer::new();
        let interval = computer.compute(10.0, &[42.0]);
        assert_eq!(interval, Interval::new(10.0, 10.0));

        let interval = computer.compute(10.0, &[]);
        assert_eq!(interval, Interval::new(10.0, 10.0));
    }

    #[test]
    fn test_zero_dispersion() {
        let computer = StandardErrorComputer::new();
        let interval = computer.compute(10.0, &[10.0; 5]);
        assert!((interval.lower - 10.0).abs() < 1e-12);
        assert!((interval.upper - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_huge_dispersion_keeps_margin() {
        let computer = StandardErrorComputer::new();
        let value = 1e300;
        let interval = computer.compute(value, &[1e300, 1e-300, 1e300, 1e-300]);

        // population std is 5e299
        let margin = interval.upper - value;
        assert!(margin.is_finite());
        assert!((margin / (Z_SCORE_95 * 5e299) - 1.0).abs() < 1e-9);
        assert!(interval.lower < value);
        assert!(interval.lower >= 0.0);
    }

    #[test]
    fn test_upper_saturates() {
        let computer = StandardErrorComputer::new();
        let interval = computer.compute(f64::MAX, &[f64::MAX, -f64::MAX]);
        assert_eq!(interval.upper, f64::MAX);
        assert_eq!(interval.lower, 0.0);
    }
}
