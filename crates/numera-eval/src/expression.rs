//! A parsed, reusable formula.

use std::fmt;
use std::str::FromStr;

use numera_parser::ast::AstNode;
use numera_parser::ParseError;

use crate::evaluator;
use crate::result::EvalResult;

/// A formula parsed once and evaluable at any point.
///
/// Parsing is the only fallible step; evaluation never fails, it reports
/// unevaluable points as [`EvalResult::Undefined`].
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root: AstNode,
}

impl Expression {
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let root = numera_parser::parse(source)?;
        Ok(Expression {
            source: source.to_string(),
            root,
        })
    }

    /// The original formula text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluate at `x`. Binding errors and non-finite results both come
    /// back as `Undefined`.
    pub fn eval(&self, x: f64) -> EvalResult {
        match evaluator::eval_node(&self.root, x) {
            Ok(value) => EvalResult::finite(value),
            Err(_) => EvalResult::Undefined,
        }
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
