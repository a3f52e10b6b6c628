//! Box-Cox variance-stabilizing transform
//!
//! The seasonal model fits on Box-Cox transformed data when every
//! observation is strictly positive, then back-transforms its forecast.

use crate::stats;

/// Search range for the maximum-likelihood lambda
const LAMBDA_BOUNDS: (f64, f64) = (-1.0, 2.0);
const GOLDEN_TOLERANCE: f64 = 1e-8;
const GOLDEN_MAX_ITER: usize = 200;

/// Apply Box-Cox transformation
///
/// # Arguments
///
/// * `data` - Input data (must be positive)
/// * `lambda` - Transformation parameter (0 = log transform)
pub fn box_cox(data: &[f64], lambda: f64) -> Vec<f64> {
    data.iter().map(|&x| box_cox_value(x, lambda)).collect()
}

/// Box-Cox transform of a single value
pub fn box_cox_value(x: f64, lambda: f64) -> f64 {
    if lambda.abs() < 1e-10 {
        x.ln()
    } else {
        (x.powf(lambda) - 1.0) / lambda
    }
}

/// Inverse Box-Cox of a single value.
///
/// Returns `None` when `x` lies outside the transform's image, where the
/// inverse is undefined or infinite.
pub fn inverse_box_cox_value(x: f64, lambda: f64) -> Option<f64> {
    let value = if lambda.abs() < 1e-10 {
        x.exp()
    } else {
        let base = x * lambda + 1.0;
        if base <= 0.0 {
            return None;
        }
        base.powf(1.0 / lambda)
    };
    value.is_finite().then_some(value)
}

/// Profile log-likelihood of `lambda` for positive data
pub fn box_cox_log_likelihood(data: &[f64], lambda: f64) -> f64 {
    let n = data.len() as f64;
    let transformed = box_cox(data, lambda);
    let variance = stats::std_dev(&transformed).powi(2);
    if variance <= 0.0 || !variance.is_finite() {
        return f64::NEG_INFINITY;
    }
    let log_sum: f64 = data.iter().map(|x| x.ln()).sum();
    (lambda - 1.0) * log_sum - n / 2.0 * variance.ln()
}

/// Maximum-likelihood Box-Cox lambda.
///
/// `None` when the transform does not apply: fewer than two points, any
/// non-positive or non-finite value, or a constant series.
pub fn box_cox_lambda(data: &[f64]) -> Option<f64> {
    if data.len() < 2 || data.iter().any(|&x| x <= 0.0 || !x.is_finite()) {
        return None;
    }
    if stats::std_dev(data) == 0.0 {
        return None;
    }

    let objective = |lambda: f64| -box_cox_log_likelihood(data, lambda);
    let lambda = golden_section_min(objective, LAMBDA_BOUNDS.0, LAMBDA_BOUNDS.1);
    lambda.is_finite().then_some(lambda)
}

/// Golden-section search for the minimum of a unimodal function on `[lo, hi]`
fn golden_section_min<F: Fn(f64) -> f64>(f: F, mut lo: f64, mut hi: f64) -> f64 {
    let ratio = (5.0_f64.sqrt() - 1.0) / 2.0;
    let mut c = hi - ratio * (hi - lo);
    let mut d = lo + ratio * (hi - lo);
    let mut fc = f(c);
    let mut fd = f(d);

    for _ in 0..GOLDEN_MAX_ITER {
        if (hi - lo).abs() < GOLDEN_TOLERANCE {
            break;
        }
        if fc < fd {
            hi = d;
            d = c;
            fd = fc;
            c = hi - ratio * (hi - lo);
            fc = f(c);
        } else {
            lo = c;
            c = d;
            fc = fd;
            d = lo + ratio * (hi - lo);
            fd = f(d);
        }
    }

    (lo + hi) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_cox_log_case() {
        let data = vec![1.0, std::f64::consts::E];
        let transformed = box_cox(&data, 0.0);
        assert!((transformed[0] - 0.0).abs() < 1e-12);
        assert!((transformed[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_inverse_recovers_original() {
        let data = vec![90.0, 100.0, 115.0, 120.0];
        for &lambda in &[-0.5, 0.0, 0.5, 1.0, 1.7] {
            for &x in &data {
                let back = inverse_box_cox_value(box_cox_value(x, lambda), lambda).unwrap();
                assert!((back - x).abs() < 1e-8, "lambda {}: {} vs {}", lambda, back, x);
            }
        }
    }

    #[test]
    fn test_inverse_outside_domain() {
        // for lambda = 0.5 the image is bounded below by -2
        assert!(inverse_box_cox_value(-3.0, 0.5).is_none());
        // for lambda = -0.5 the image is bounded above by 2
        assert!(inverse_box_cox_value(2.5, -0.5).is_none());
    }

    #[test]
    fn test_lambda_not_applicable() {
        assert!(box_cox_lambda(&[1.0]).is_none());
        assert!(box_cox_lambda(&[1.0, 0.0, 2.0]).is_none());
        assert!(box_cox_lambda(&[1.0, -2.0, 2.0]).is_none());
        assert!(box_cox_lambda(&[5.0, 5.0, 5.0]).is_none());
    }

    #[test]
    fn test_lambda_maximizes_likelihood() {
        let data: Vec<f64> = (1..=12).map(|i| (i as f64 * 0.4).exp()).collect();
        let lambda = box_cox_lambda(&data).unwrap();

        assert!(lambda >= -1.0 && lambda <= 2.0);
        let best = box_cox_log_likelihood(&data, lambda);
        for &other in &[-1.0, -0.5, 0.5, 1.0, 2.0] {
            assert!(best >= box_cox_log_likelihood(&data, other) - 1e-6);
        }
    }

    #[test]
    fn test_lambda_is_deterministic() {
        let data = vec![100.0, 110.0, 120.0, 115.0, 105.0, 95.0, 90.0];
        assert_eq!(box_cox_lambda(&data), box_cox_lambda(&data));
    }
}
