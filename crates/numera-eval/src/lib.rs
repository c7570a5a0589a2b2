//! Safe evaluation of user-supplied formulas in one real variable.
//!
//! Formulas are parsed into a restricted AST and walked by a plain
//! evaluator over a fixed allow-list of math functions and constants —
//! there is no dynamic code execution of any kind. Every failure mode
//! (bad syntax, unknown names, domain errors, non-finite results) is
//! reported as [`EvalResult::Undefined`] rather than an error, so interval
//! scans can treat unevaluable points as holes instead of aborting.

pub mod context;
pub mod evaluator;
pub mod expression;
pub mod result;

pub use evaluator::EvalError;
pub use expression::Expression;
pub use numera_parser::ParseError;
pub use result::EvalResult;

/// Evaluate `source` at `x`, collapsing parse failures into `Undefined`.
///
/// The non-throwing entry point for callers that hold formulas as raw
/// text; parse once with [`Expression::parse`] when evaluating the same
/// formula at many points.
pub fn evaluate(source: &str, x: f64) -> EvalResult {
    match Expression::parse(source) {
        Ok(expr) => expr.eval(x),
        Err(_) => EvalResult::Undefined,
    }
}
