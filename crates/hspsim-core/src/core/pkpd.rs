//! Pure pharmacokinetic/pharmacodynamic mathematics.
//!
//! These functions are stateless; the stateful [`crate::engine`] models
//! compose them into per-run behavior.

use std::f64::consts::LN_2;

/// First-order elimination rate constant (per hour) for a given half-life.
#[inline]
pub fn elimination_rate(half_life_hours: f64) -> f64 {
    LN_2 / half_life_hours
}

/// Concentration contributed by a single dose, `elapsed_hours` after
/// administration.
///
/// Simplified one-compartment shape: a linear rise to the full dose at
/// `peak_time_hours`, then first-order exponential decay from that peak.
/// Doses not yet administered (negative elapsed time) contribute nothing.
#[inline]
pub fn single_dose_concentration(
    elapsed_hours: f64,
    dose: f64,
    peak_time_hours: f64,
    elimination_rate: f64,
) -> f64 {
    if elapsed_hours < 0.0 {
        0.0
    } else if elapsed_hours <= peak_time_hours {
        dose * (elapsed_hours / peak_time_hours)
    } else {
        dose * (-elimination_rate * (elapsed_hours - peak_time_hours)).exp()
    }
}

/// Hill dose-response equation: `E_max · C^h / (C^h + IC50^h)`.
///
/// Returns 0 for non-positive concentrations.
#[inline]
pub fn hill_effect(concentration: f64, ic50: f64, hill_coefficient: f64, e_max: f64) -> f64 {
    if concentration <= 0.0 {
        return 0.0;
    }
    let c_h = concentration.powf(hill_coefficient);
    let ic50_h = ic50.powf(hill_coefficient);
    e_max * c_h / (c_h + ic50_h)
}

/// `n` evenly spaced points over `[start, stop]`, endpoints included.
///
/// Matches the grid the original reference parameterization was tuned
/// against: spacing is `(stop − start) / (n − 1)` and the final point is
/// exactly `stop`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut points: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            points[n - 1] = stop;
            points
        }
    }
}
