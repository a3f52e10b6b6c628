//! Descriptive statistics shared by the models and the interval estimator

/// Arithmetic mean, `NaN` for an empty slice
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population standard deviation (divides by `n`), `0.0` below two points.
///
/// Computed on the data divided by its largest magnitude, so squaring does
/// not overflow for values near the top of the `f64` range.
pub fn std_dev(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let scale = data.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    if scale == 0.0 {
        return 0.0;
    }
    if !scale.is_finite() {
        return f64::NAN;
    }

    let scaled: Vec<f64> = data.iter().map(|x| x / scale).collect();
    let m = mean(&scaled);
    let variance = scaled.iter().map(|x| (x - m).powi(2)).sum::<f64>() / scaled.len() as f64;
    variance.sqrt() * scale
}

/// `n` evenly spaced values from `start` to `end` inclusive.
///
/// A single point yields `[start]`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Weighted mean `Σ(w·x) / Σw`
pub fn weighted_mean(data: &[f64], weights: &[f64]) -> Option<f64> {
    if data.is_empty() || data.len() != weights.len() {
        return None;
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return None;
    }
    let sum: f64 = data.iter().zip(weights).map(|(x, w)| x * w).sum();
    Some(sum / total)
}
