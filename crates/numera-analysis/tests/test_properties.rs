//! Property tests over the scanning functions.

use numera_analysis::{find_roots, integrate};
use numera_eval::{evaluate, Expression};
use proptest::prelude::*;

proptest! {
    /// Evaluation has no hidden state: the same input twice gives the
    /// same answer.
    #[test]
    fn prop_evaluate_is_idempotent(x in -100.0f64..100.0) {
        prop_assert_eq!(evaluate("sin(x) + x^2", x), evaluate("sin(x) + x^2", x));
    }

    /// ∫ x^2 dx over [0, c] tracks c^3/3.
    #[test]
    fn prop_cubic_integral(c in 0.5f64..5.0) {
        let expr = Expression::parse("x^2").unwrap();
        let area = integrate(&expr, 0.0, c, 2000);
        let exact = c * c * c / 3.0;
        prop_assert!((area - exact).abs() < 1e-3 * exact.max(1.0));
    }

    /// A line with a known zero crossing gets found and refined.
    #[test]
    fn prop_linear_root_is_found(r in -4.0f64..4.0) {
        let expr = Expression::parse(&format!("x - {}", r)).unwrap();
        let roots = find_roots(&expr, -5.0, 5.0, 200);
        prop_assert_eq!(roots.len(), 1);
        prop_assert!((roots[0] - r).abs() < 1e-6);
    }

    /// Roots always come back sorted and spaced apart.
    #[test]
    fn prop_roots_sorted_and_spaced(k in 1.0f64..4.0) {
        let expr = Expression::parse(&format!("sin({}*x)", k)).unwrap();
        let roots = find_roots(&expr, -6.0, 6.0, 600);
        prop_assert!(roots.windows(2).all(|w| w[1] - w[0] > 1e-6));
    }
}
