//! The fixed evaluation context: every function and constant a formula may
//! name, by unqualified name.
//!
//! - Trigonometric: sin, cos, tan, asin, acos, atan, atan2
//! - Hyperbolic: sinh, cosh, tanh
//! - Exponential/Logarithmic: exp, ln, log, log10, log2
//! - Rounding: floor, ceil, round, trunc
//! - Other: sqrt, cbrt, abs, pow, min, max, sign, deg, rad
//! - Constants: pi, e (uppercase spellings accepted)
//!
//! Nothing outside this list is callable; there is no escape hatch into
//! host code.

use crate::evaluator::EvalError;

/// Look up a named constant.
pub fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" | "PI" => Some(std::f64::consts::PI),
        "e" | "E" => Some(std::f64::consts::E),
        _ => None,
    }
}

/// Apply a named function to already-evaluated arguments.
///
/// `log` accepts one argument (natural log, the convention of the graphing
/// hosts this engine feeds) or two (`log(x, base)`). `min`/`max` take any
/// number of arguments from one up. Everything else has a fixed arity.
pub fn apply(name: &str, args: &[f64]) -> Result<f64, EvalError> {
    match name {
        "sin" => unary(name, args, f64::sin),
        "cos" => unary(name, args, f64::cos),
        "tan" => unary(name, args, f64::tan),
        "asin" => unary(name, args, f64::asin),
        "acos" => unary(name, args, f64::acos),
        "atan" => unary(name, args, f64::atan),
        "sinh" => unary(name, args, f64::sinh),
        "cosh" => unary(name, args, f64::cosh),
        "tanh" => unary(name, args, f64::tanh),
        "sqrt" => unary(name, args, f64::sqrt),
        "cbrt" => unary(name, args, f64::cbrt),
        "abs" => unary(name, args, f64::abs),
        "exp" => unary(name, args, f64::exp),
        "ln" => unary(name, args, f64::ln),
        "log10" => unary(name, args, f64::log10),
        "log2" => unary(name, args, f64::log2),
        "floor" => unary(name, args, f64::floor),
        "ceil" => unary(name, args, f64::ceil),
        "round" => unary(name, args, f64::round),
        "trunc" => unary(name, args, f64::trunc),
        "deg" => unary(name, args, f64::to_degrees),
        "rad" => unary(name, args, f64::to_radians),
        "sign" => unary(name, args, |x| {
            if x > 0.0 {
                1.0
            } else if x < 0.0 {
                -1.0
            } else {
                0.0
            }
        }),
        "log" => match args {
            [x] => Ok(x.ln()),
            [x, base] => Ok(x.log(*base)),
            _ => Err(EvalError::WrongArity {
                function: name.to_string(),
                expected: "1 or 2",
                got: args.len(),
            }),
        },
        "pow" => binary(name, args, f64::powf),
        "atan2" => binary(name, args, f64::atan2),
        "min" => fold(name, args, f64::min),
        "max" => fold(name, args, f64::max),
        _ => Err(EvalError::UnknownFunction(name.to_string())),
    }
}

fn unary(name: &str, args: &[f64], f: fn(f64) -> f64) -> Result<f64, EvalError> {
    match args {
        [x] => Ok(f(*x)),
        _ => Err(EvalError::WrongArity {
            function: name.to_string(),
            expected: "1",
            got: args.len(),
        }),
    }
}

fn binary(name: &str, args: &[f64], f: fn(f64, f64) -> f64) -> Result<f64, EvalError> {
    match args {
        [a, b] => Ok(f(*a, *b)),
        _ => Err(EvalError::WrongArity {
            function: name.to_string(),
            expected: "2",
            got: args.len(),
        }),
    }
}

fn fold(name: &str, args: &[f64], f: fn(f64, f64) -> f64) -> Result<f64, EvalError> {
    let (first, rest) = args.split_first().ok_or_else(|| EvalError::WrongArity {
        function: name.to_string(),
        expected: "at least 1",
        got: 0,
    })?;
    Ok(rest.iter().fold(*first, |acc, v| f(acc, *v)))
}
