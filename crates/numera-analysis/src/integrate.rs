//! Composite trapezoid integration over sampled formulas.

use numera_eval::Expression;

use crate::sample::linspace;

/// Approximate the definite integral of `expr` over `[a, b]`.
///
/// `samples` points make `samples - 1` equal sub-intervals; each
/// contributes a trapezoid unless one of its endpoints is undefined, in
/// which case that slice is dropped and the sum continues. Returns `0.0`
/// for a degenerate interval or fewer than two samples.
pub fn integrate(expr: &Expression, a: f64, b: f64, samples: usize) -> f64 {
    trapezoid_sum(a, b, samples, |x| expr.eval(x).value())
}

/// Approximate the area enclosed between two formulas,
/// ∫ |f(x) − g(x)| dx over `[a, b]`.
pub fn integrate_absolute_difference(
    f: &Expression,
    g: &Expression,
    a: f64,
    b: f64,
    samples: usize,
) -> f64 {
    trapezoid_sum(a, b, samples, |x| {
        match (f.eval(x).value(), g.eval(x).value()) {
            (Some(fv), Some(gv)) => Some((fv - gv).abs()),
            _ => None,
        }
    })
}

/// Mean value of `expr` over `[a, b]`: the integral divided by the width.
pub fn average_value(expr: &Expression, a: f64, b: f64, samples: usize) -> f64 {
    if !(a < b) {
        return 0.0;
    }
    integrate(expr, a, b, samples) / (b - a)
}

fn trapezoid_sum<F>(a: f64, b: f64, samples: usize, eval: F) -> f64
where
    F: Fn(f64) -> Option<f64>,
{
    if !(a < b) || samples < 2 {
        return 0.0;
    }

    let xs = linspace(a, b, samples);
    let mut area = 0.0;
    for window in xs.windows(2) {
        let (x0, x1) = (window[0], window[1]);
        if let (Some(y0), Some(y1)) = (eval(x0), eval(x1)) {
            area += (y0 + y1) / 2.0 * (x1 - x0);
        }
    }
    area
}
