//! pest-based formula parser.
//!
//! Precedence, loosest to tightest: `+ -`, `* / %`, unary minus, `^`.
//! Exponentiation binds tighter than unary minus, so `-x^2` parses as
//! `-(x^2)` and only `(-x)^2` squares the negated value. `^` is
//! left-associative: `x^y^z` is `(x^y)^z`.

use once_cell::sync::Lazy;
use pest::iterators::{Pair, Pairs};
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest::Parser;

use crate::ast::{AstNode, BinaryOp, UnaryOp};
use crate::error::ParseError;

#[derive(pest_derive::Parser)]
#[grammar = "grammar.pest"]
struct FormulaParser;

static PRATT: Lazy<PrattParser<Rule>> = Lazy::new(|| {
    PrattParser::new()
        .op(Op::infix(Rule::add, Assoc::Left) | Op::infix(Rule::sub, Assoc::Left))
        .op(Op::infix(Rule::mul, Assoc::Left)
            | Op::infix(Rule::div, Assoc::Left)
            | Op::infix(Rule::rem, Assoc::Left))
        .op(Op::prefix(Rule::neg))
        .op(Op::infix(Rule::pow, Assoc::Left))
});

/// Parse a formula into its AST.
pub fn parse(source: &str) -> Result<AstNode, ParseError> {
    let mut pairs = FormulaParser::parse(Rule::formula, source)
        .map_err(|e| ParseError::Syntax(e.to_string()))?;
    let formula = pairs
        .next()
        .ok_or_else(|| ParseError::Syntax("empty input".to_string()))?;
    let expr = formula
        .into_inner()
        .find(|p| p.as_rule() == Rule::expr)
        .ok_or_else(|| ParseError::Syntax("missing expression".to_string()))?;
    build_expr(expr.into_inner())
}

fn build_expr(pairs: Pairs<Rule>) -> Result<AstNode, ParseError> {
    PRATT
        .map_primary(build_primary)
        .map_prefix(|op, operand| match op.as_rule() {
            Rule::neg => Ok(AstNode::UnaryOp {
                op: UnaryOp::Neg,
                operand: Box::new(operand?),
            }),
            rule => Err(ParseError::Syntax(format!(
                "unexpected prefix operator: {:?}",
                rule
            ))),
        })
        .map_infix(|left, op, right| {
            let op = match op.as_rule() {
                Rule::add => BinaryOp::Add,
                Rule::sub => BinaryOp::Sub,
                Rule::mul => BinaryOp::Mul,
                Rule::div => BinaryOp::Div,
                Rule::rem => BinaryOp::Rem,
                Rule::pow => BinaryOp::Pow,
                rule => {
                    return Err(ParseError::Syntax(format!(
                        "unexpected infix operator: {:?}",
                        rule
                    )))
                }
            };
            Ok(AstNode::BinaryOp {
                op,
                left: Box::new(left?),
                right: Box::new(right?),
            })
        })
        .parse(pairs)
}

fn build_primary(pair: Pair<Rule>) -> Result<AstNode, ParseError> {
    match pair.as_rule() {
        Rule::number => {
            let text = pair.as_str();
            text.parse::<f64>()
                .map(AstNode::Number)
                .map_err(|_| ParseError::InvalidNumber(text.to_string()))
        }
        Rule::identifier => Ok(AstNode::Variable(pair.as_str().to_string())),
        Rule::function_call => build_function_call(pair),
        Rule::expr => build_expr(pair.into_inner()),
        rule => Err(ParseError::Syntax(format!(
            "unexpected primary rule: {:?}",
            rule
        ))),
    }
}

fn build_function_call(pair: Pair<Rule>) -> Result<AstNode, ParseError> {
    let mut inner = pair.into_inner();
    let name = inner
        .next()
        .ok_or_else(|| ParseError::Syntax("function call without a name".to_string()))?
        .as_str()
        .to_string();
    let args = inner
        .map(|arg| build_expr(arg.into_inner()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(AstNode::FunctionCall { name, args })
}
