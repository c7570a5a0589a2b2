//! Parse errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The input does not match the formula grammar.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// A numeric literal survived the grammar but not `f64` conversion.
    #[error("invalid number literal: {0}")]
    InvalidNumber(String),
}
