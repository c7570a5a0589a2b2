//! Descriptive statistics over a series of outcomes.

use serde::Serialize;

/// Mean, population variance and standard deviation of a series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Summary {
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
}

/// Summarize a series. An empty series reports zeros, so a dashboard
/// showing "no plays yet" needs no special case.
pub fn summarize(values: &[f64]) -> Summary {
    if values.is_empty() {
        return Summary::default();
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Summary {
        mean,
        variance,
        std_dev: variance.sqrt(),
    }
}

/// The `p`-th percentile by linear interpolation between order
/// statistics. `p` is clamped to [0, 100]; an empty series has no
/// percentiles.
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let p = p.clamp(0.0, 100.0);
    let idx = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo]);
    }
    let frac = idx - lo as f64;
    Some(sorted[lo] * (1.0 - frac) + sorted[hi] * frac)
}
