//! Intersection finding: the root scan applied to a pointwise difference.

use numera_eval::{EvalResult, Expression};

use crate::point::Point;
use crate::sample::linspace;
use crate::tolerances::ScanTolerances;

/// Points where `f` and `g` meet inside `[a, b]`, ascending in `x`,
/// deduplicated by `x` spacing.
///
/// Runs the same sign-change/bisection scan as the root finder over
/// `h(x) = f(x) - g(x)`; the reported `y` is `f` at the converged
/// abscissa. Sub-intervals where either formula is undefined are skipped.
/// A degenerate interval or `samples == 0` yields an empty vector.
pub fn find_intersections(
    f: &Expression,
    g: &Expression,
    a: f64,
    b: f64,
    samples: usize,
) -> Vec<Point> {
    find_intersections_with(f, g, a, b, samples, &ScanTolerances::default())
}

/// [`find_intersections`] with explicit tolerances.
pub fn find_intersections_with(
    f: &Expression,
    g: &Expression,
    a: f64,
    b: f64,
    samples: usize,
    tol: &ScanTolerances,
) -> Vec<Point> {
    if !(a < b) || samples == 0 {
        return Vec::new();
    }

    let h = |x: f64| -> EvalResult {
        match (f.eval(x).value(), g.eval(x).value()) {
            (Some(fv), Some(gv)) => EvalResult::finite(fv - gv),
            _ => EvalResult::Undefined,
        }
    };

    let xs = linspace(a, b, samples + 1);
    let mut points = Vec::new();

    for window in xs.windows(2) {
        let (x1, x2) = (window[0], window[1]);
        let (y1, y2) = match (h(x1).value(), h(x2).value()) {
            (Some(y1), Some(y2)) => (y1, y2),
            _ => continue,
        };

        if y1.abs() < tol.zero_tol {
            if let Some(y) = f.eval(x1).value() {
                points.push(Point::new(x1, y));
            }
        }

        if y1 * y2 < 0.0 {
            let (mut lo, mut hi) = (x1, x2);
            for _ in 0..tol.max_bisections {
                let mid = (lo + hi) / 2.0;
                let h_mid = match h(mid).value() {
                    Some(v) => v,
                    None => break,
                };
                if h_mid.abs() < tol.zero_tol {
                    lo = mid;
                    hi = mid;
                    break;
                }
                // y1's sign anchors the bracket
                if h_mid * y1 <= 0.0 {
                    hi = mid;
                } else {
                    lo = mid;
                }
            }
            let xm = (lo + hi) / 2.0;
            if let Some(y) = f.eval(xm).value() {
                points.push(Point::new(xm, y));
            }
        }
    }

    points.sort_by(|p, q| p.x.total_cmp(&q.x));
    collapse_close(points, tol.min_spacing)
}

fn collapse_close(sorted: Vec<Point>, min_spacing: f64) -> Vec<Point> {
    let mut unique: Vec<Point> = Vec::with_capacity(sorted.len());
    for p in sorted {
        if unique
            .last()
            .map_or(true, |prev| (p.x - prev.x).abs() > min_spacing)
        {
            unique.push(p);
        }
    }
    unique
}
