//! Constrained arithmetic expression evaluator
//!
//! The calculator page evaluates operator-typed expressions through this
//! module instead of handing the text to any general evaluator:
//! - [`lexer`]: tokenization (expression text → tokens)
//! - [`parser`]: recursive descent parsing (tokens → expression tree)
//! - [`ast`]: expression tree and `f64` evaluation
//!
//! Only numeric literals, `+ - * /`, unary minus, and parentheses exist in
//! the grammar; everything else fails at the lexer or parser. Division by
//! zero is rejected at evaluation time.
//!
//! Hand-written, no parser generator dependencies.

pub mod ast;
pub mod lexer;
pub mod parser;

use std::fmt;

use ast::EvalError;
use parser::{ParseError, Parser};

/// Any calculator failure, for the status line
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    Parse(ParseError),
    Eval(EvalError),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::Parse(err) => write!(f, "{}", err),
            CalcError::Eval(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CalcError {}

impl From<ParseError> for CalcError {
    fn from(err: ParseError) -> Self {
        CalcError::Parse(err)
    }
}

impl From<EvalError> for CalcError {
    fn from(err: EvalError) -> Self {
        CalcError::Eval(err)
    }
}

/// Parse and evaluate one expression line.
pub fn evaluate(input: &str) -> Result<f64, CalcError> {
    let mut parser = Parser::new(input)?;
    let expr = parser.parse_expression()?;
    Ok(expr.eval()?)
}
