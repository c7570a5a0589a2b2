//! Tree-walking evaluator over the formula AST.
//!
//! Arithmetic follows IEEE 754: division by zero and overflow produce
//! infinities, out-of-domain operations produce NaN. Those escape here as
//! ordinary `f64` values and are demoted to `Undefined` at the
//! [`Expression`](crate::Expression) boundary, which keeps this walk free
//! of per-operation domain checks.

use numera_parser::ast::{AstNode, BinaryOp, UnaryOp};
use thiserror::Error;

use crate::context;

/// Binding failures during evaluation.
///
/// These never cross the public API: `Expression::eval` collapses them into
/// `EvalResult::Undefined`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    #[error("unknown identifier: {0}")]
    UnknownIdentifier(String),

    #[error("{function}() expects {expected} argument(s), got {got}")]
    WrongArity {
        function: String,
        expected: &'static str,
        got: usize,
    },
}

/// Evaluate a node with the free variable bound to `x`.
pub fn eval_node(node: &AstNode, x: f64) -> Result<f64, EvalError> {
    match node {
        AstNode::Number(n) => Ok(*n),
        AstNode::Variable(name) => {
            if name == "x" {
                Ok(x)
            } else {
                context::constant(name)
                    .ok_or_else(|| EvalError::UnknownIdentifier(name.clone()))
            }
        }
        AstNode::UnaryOp {
            op: UnaryOp::Neg,
            operand,
        } => Ok(-eval_node(operand, x)?),
        AstNode::BinaryOp { op, left, right } => {
            let l = eval_node(left, x)?;
            let r = eval_node(right, x)?;
            Ok(match op {
                BinaryOp::Add => l + r,
                BinaryOp::Sub => l - r,
                BinaryOp::Mul => l * r,
                BinaryOp::Div => l / r,
                BinaryOp::Rem => l % r,
                BinaryOp::Pow => l.powf(r),
            })
        }
        AstNode::FunctionCall { name, args } => {
            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                values.push(eval_node(arg, x)?);
            }
            context::apply(name, &values)
        }
    }
}
