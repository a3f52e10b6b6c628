//! Bounded Nelder-Mead minimization
//!
//! Derivative-free simplex search used to fit the smoothing parameters and
//! initial states of the seasonal model. Deterministic: the starting simplex
//! is a fixed function of the initial point and bounds.

/// Nelder-Mead settings
#[derive(Debug, Clone)]
pub struct NelderMeadConfig {
    /// Maximum number of iterations
    pub max_iter: usize,
    /// Stop once the spread of simplex values drops below this
    pub tolerance: f64,
    /// Initial simplex step, as a fraction of each bound's width
    pub initial_step: f64,
    /// Reflection coefficient
    pub alpha: f64,
    /// Expansion coefficient
    pub gamma: f64,
    /// Contraction coefficient
    pub rho: f64,
    /// Shrink coefficient
    pub sigma: f64,
}

impl Default for NelderMeadConfig {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            tolerance: 1e-10,
            initial_step: 0.1,
            alpha: 1.0,
            gamma: 2.0,
            rho: 0.5,
            sigma: 0.5,
        }
    }
}

/// Outcome of a minimization
#[derive(Debug, Clone)]
pub struct NelderMeadResult {
    /// Best point found
    pub optimal_point: Vec<f64>,
    /// Objective value at `optimal_point`
    pub optimal_value: f64,
    /// Iterations performed
    pub iterations: usize,
    /// Whether the tolerance was reached within the budget
    pub converged: bool,
}

/// Minimize `f` starting from `initial`.
///
/// Points are clamped into `bounds` when given. `NaN` objective values are
/// treated as `+inf` so the search steps away from them.
pub fn nelder_mead<F>(
    f: F,
    initial: &[f64],
    bounds: Option<&[(f64, f64)]>,
    config: NelderMeadConfig,
) -> NelderMeadResult
where
    F: Fn(&[f64]) -> f64,
{
    let n = initial.len();
    let clamp = |point: &mut Vec<f64>| {
        if let Some(bounds) = bounds {
            for (x, &(lo, hi)) in point.iter_mut().zip(bounds) {
                *x = x.clamp(lo, hi);
            }
        }
    };
    let eval = |point: &[f64]| {
        let value = f(point);
        if value.is_nan() {
            f64::INFINITY
        } else {
            value
        }
    };

    let mut start = initial.to_vec();
    clamp(&mut start);

    if n == 0 {
        let value = eval(&start);
        return NelderMeadResult {
            optimal_point: start,
            optimal_value: value,
            iterations: 0,
            converged: true,
        };
    }

    // Initial simplex: one step along each axis
    let mut simplex: Vec<(Vec<f64>, f64)> = Vec::with_capacity(n + 1);
    simplex.push((start.clone(), eval(&start)));
    for i in 0..n {
        let mut vertex = start.clone();
        let step = match bounds {
            Some(b) => config.initial_step * (b[i].1 - b[i].0),
            None => config.initial_step * start[i].abs().max(1.0),
        };
        vertex[i] += step;
        if let Some(b) = bounds {
            if vertex[i] > b[i].1 {
                vertex[i] = start[i] - step;
            }
        }
        clamp(&mut vertex);
        let value = eval(&vertex);
        simplex.push((vertex, value));
    }

    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iter {
        simplex.sort_by(|a, b| a.1.total_cmp(&b.1));

        let best = simplex[0].1;
        let worst = simplex[n].1;
        if best.is_finite() && (worst - best).abs() <= config.tolerance {
            converged = true;
            break;
        }
        iterations += 1;

        // Centroid of all vertices but the worst
        let mut centroid = vec![0.0; n];
        for (vertex, _) in simplex.iter().take(n) {
            for (c, x) in centroid.iter_mut().zip(vertex) {
                *c += x / n as f64;
            }
        }

        let along = |from: &[f64], to: &[f64], coeff: f64| -> Vec<f64> {
            let mut point: Vec<f64> = from
                .iter()
                .zip(to)
                .map(|(c, x)| c + coeff * (x - c))
                .collect();
            clamp(&mut point);
            point
        };

        let worst_point = simplex[n].0.clone();
        let reflected = along(&centroid, &worst_point, -config.alpha);
        let f_reflected = eval(&reflected);

        if f_reflected < simplex[0].1 {
            let expanded = along(&centroid, &reflected, config.gamma);
            let f_expanded = eval(&expanded);
            simplex[n] = if f_expanded < f_reflected {
                (expanded, f_expanded)
            } else {
                (reflected, f_reflected)
            };
            continue;
        }

        if f_reflected < simplex[n - 1].1 {
            simplex[n] = (reflected, f_reflected);
            continue;
        }

        let contracted = if f_reflected < worst {
            along(&centroid, &reflected, config.rho)
        } else {
            along(&centroid, &worst_point, config.rho)
        };
        let f_contracted = eval(&contracted);
        if f_contracted < f_reflected.min(worst) {
            simplex[n] = (contracted, f_contracted);
            continue;
        }

        // Shrink toward the best vertex
        let best_point = simplex[0].0.clone();
        for (vertex, value) in simplex.iter_mut().skip(1) {
            let shrunk = along(&best_point, vertex, config.sigma);
            *value = eval(&shrunk);
            *vertex = shrunk;
        }
    }

    simplex.sort_by(|a, b| a.1.total_cmp(&b.1));
    let (optimal_point, optimal_value) = simplex.swap_remove(0);

    NelderMeadResult {
        optimal_point,
        optimal_value,
        iterations,
        converged,
    }
}
