//! Power-operator semantics: unary minus scopes outside the power, and
//! nested powers resolve left to right.

use numera_eval::{evaluate, EvalResult};

#[test]
fn test_unary_minus_scopes_outside_power() {
    // -x^2 at x=3 is -(3^2) = -9, never (-3)^2 = 9
    assert_eq!(evaluate("-x^2", 3.0), EvalResult::Value(-9.0));
}

#[test]
fn test_parenthesized_negation_is_squared() {
    assert_eq!(evaluate("(-x)^2", 3.0), EvalResult::Value(9.0));
}

#[test]
fn test_binary_minus_before_power() {
    // 3 - x^2 at x=2 -> -1
    assert_eq!(evaluate("3 - x^2", 2.0), EvalResult::Value(-1.0));
}

#[test]
fn test_nested_powers_resolve_left_to_right() {
    // 2^3^2 -> (2^3)^2 = 64, not 2^(3^2) = 512
    assert_eq!(evaluate("2^3^2", 0.0), EvalResult::Value(64.0));
}

#[test]
fn test_negative_exponent() {
    assert_eq!(evaluate("2^-2", 0.0), EvalResult::Value(0.25));
}

#[test]
fn test_power_against_multiplication() {
    // 2*x^3 at x=2 -> 16
    assert_eq!(evaluate("2*x^3", 2.0), EvalResult::Value(16.0));
}

#[test]
fn test_pow_call_matches_operator() {
    assert_eq!(evaluate("pow(x, 2)", 5.0), evaluate("x^2", 5.0));
    assert_eq!(evaluate("-pow(x, 2)", 3.0), evaluate("-x^2", 3.0));
}

#[test]
fn test_double_star_matches_caret() {
    assert_eq!(evaluate("x**2", 7.0), evaluate("x^2", 7.0));
}

#[test]
fn test_fractional_power_of_negative_base_is_undefined() {
    // powf semantics: (-8)^(1/3) is NaN, reported as undefined
    assert!(evaluate("(-8)^(1/3)", 0.0).is_undefined());
}
