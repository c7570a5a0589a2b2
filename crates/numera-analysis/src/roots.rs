//! Root finding: a sign-change scan refined by bisection.

use numera_eval::Expression;

use crate::sample::linspace;
use crate::tolerances::ScanTolerances;

/// Roots of `expr` within `[a, b]`, ascending, deduplicated.
///
/// The interval is split into `samples` equal sub-intervals. A sub-interval
/// whose endpoints both evaluate contributes a root when the left endpoint
/// is already a zero (within `zero_tol`) or when the endpoint values change
/// sign, in which case bisection narrows the bracket. Sub-intervals with an
/// undefined endpoint are skipped, not fatal. A degenerate interval
/// (`a >= b`) or `samples == 0` yields an empty vector.
pub fn find_roots(expr: &Expression, a: f64, b: f64, samples: usize) -> Vec<f64> {
    find_roots_with(expr, a, b, samples, &ScanTolerances::default())
}

/// [`find_roots`] with explicit tolerances.
pub fn find_roots_with(
    expr: &Expression,
    a: f64,
    b: f64,
    samples: usize,
    tol: &ScanTolerances,
) -> Vec<f64> {
    if !(a < b) || samples == 0 {
        return Vec::new();
    }

    let xs = linspace(a, b, samples + 1);
    let mut roots = Vec::new();

    for window in xs.windows(2) {
        let (x1, x2) = (window[0], window[1]);
        let (y1, y2) = match (expr.eval(x1).value(), expr.eval(x2).value()) {
            (Some(y1), Some(y2)) => (y1, y2),
            _ => continue,
        };

        if y1.abs() < tol.zero_tol {
            roots.push(round_to_8(x1));
            continue;
        }

        if y1 * y2 < 0.0 {
            let (mut lo, mut hi, mut f_lo) = (x1, x2, y1);
            for _ in 0..tol.max_bisections {
                let mid = (lo + hi) / 2.0;
                let f_mid = match expr.eval(mid).value() {
                    Some(v) => v,
                    None => break,
                };
                if f_mid.abs() < tol.zero_tol {
                    lo = mid;
                    hi = mid;
                    break;
                }
                // keep the sign change bracketed, with the known sign at lo
                if f_lo * f_mid <= 0.0 {
                    hi = mid;
                } else {
                    lo = mid;
                    f_lo = f_mid;
                }
            }
            roots.push(round_to_8((lo + hi) / 2.0));
        }
    }

    roots.sort_by(f64::total_cmp);
    collapse_close(roots, tol.min_spacing)
}

/// Round to 8 decimal places, matching the reported precision of the scan.
fn round_to_8(x: f64) -> f64 {
    (x * 1e8).round() / 1e8
}

fn collapse_close(sorted: Vec<f64>, min_spacing: f64) -> Vec<f64> {
    let mut unique: Vec<f64> = Vec::with_capacity(sorted.len());
    for r in sorted {
        if unique.last().map_or(true, |&prev| (r - prev).abs() > min_spacing) {
            unique.push(r);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_close_keeps_spaced_values() {
        let collapsed = collapse_close(vec![0.0, 0.5, 0.5000001, 1.0], 1e-6);
        assert_eq!(collapsed, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_round_to_8() {
        assert_eq!(round_to_8(0.123456789), 0.12345679);
        assert_eq!(round_to_8(2.0), 2.0);
    }
}
