//! Uniform sampling of a formula over an interval.

use numera_eval::{EvalResult, Expression};

/// `n` evenly spaced points across `[a, b]`.
///
/// With `n <= 1` there is no usable spacing, so both endpoints come back
/// as-is. The points are generated as `a + step * i`, which lands exactly
/// on arithmetically clean interior values (the origin of `[-1, 1]` split
/// a hundred ways, for instance) — the zero-touching checks downstream
/// rely on that.
pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![a, b];
    }
    let step = (b - a) / (n - 1) as f64;
    (0..n).map(|i| a + step * i as f64).collect()
}

/// One sampled point; `y` is `Undefined` where the formula has a hole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: EvalResult,
}

/// Evaluate `expr` at `n` evenly spaced points across `[a, b]`.
pub fn sample(expr: &Expression, a: f64, b: f64, n: usize) -> Vec<SamplePoint> {
    linspace(a, b, n)
        .into_iter()
        .map(|x| SamplePoint { x, y: expr.eval(x) })
        .collect()
}
