//! Root-finder tests.

use numera_analysis::{find_roots, find_roots_with, ScanTolerances};
use numera_eval::Expression;

fn expr(source: &str) -> Expression {
    Expression::parse(source).unwrap()
}

#[test]
fn test_touching_root_of_x_squared() {
    // x^2 only touches zero; the scan still reports it because a sample
    // lands exactly on the origin
    let roots = find_roots(&expr("x^2"), -1.0, 1.0, 100);
    assert_eq!(roots.len(), 1);
    assert!(roots[0].abs() < 1e-6);
}

#[test]
fn test_simple_sign_change() {
    let roots = find_roots(&expr("x^2 - 4"), 0.0, 3.0, 100);
    assert_eq!(roots.len(), 1);
    assert!((roots[0] - 2.0).abs() < 1e-6);
}

#[test]
fn test_multiple_roots_come_back_sorted() {
    let roots = find_roots(&expr("sin(x)"), -4.0, 4.0, 400);
    assert_eq!(roots.len(), 3);
    assert!((roots[0] + std::f64::consts::PI).abs() < 1e-6);
    assert!(roots[1].abs() < 1e-6);
    assert!((roots[2] - std::f64::consts::PI).abs() < 1e-6);
}

#[test]
fn test_undefined_region_is_skipped() {
    // sqrt(x) - 1 is undefined left of zero; the root at 1 is still found
    let roots = find_roots(&expr("sqrt(x) - 1"), -2.0, 4.0, 300);
    assert_eq!(roots.len(), 1);
    assert!((roots[0] - 1.0).abs() < 1e-4);
}

#[test]
fn test_no_roots() {
    assert!(find_roots(&expr("x^2 + 1"), -5.0, 5.0, 200).is_empty());
}

#[test]
fn test_degenerate_interval_is_empty() {
    assert!(find_roots(&expr("x"), 5.0, 5.0, 10).is_empty());
    assert!(find_roots(&expr("x"), 5.0, 3.0, 10).is_empty());
}

#[test]
fn test_zero_samples_is_empty() {
    assert!(find_roots(&expr("x"), -1.0, 1.0, 0).is_empty());
}

#[test]
fn test_fully_undefined_formula_is_empty() {
    assert!(find_roots(&expr("sqrt(-1 - x^2)"), -1.0, 1.0, 50).is_empty());
}

#[test]
fn test_min_spacing_collapses_neighbors() {
    // widening the spacing folds sin's three roots on [-4, 4] into one
    let tol = ScanTolerances {
        min_spacing: 10.0,
        ..ScanTolerances::default()
    };
    let roots = find_roots_with(&expr("sin(x)"), -4.0, 4.0, 400, &tol);
    assert_eq!(roots.len(), 1);
}
