//! # shiftexpr
//!
//! shiftexpr is a minimal expression-language front end. It reduces a token
//! stream to an abstract syntax tree with a precedence-driven shift-reduce
//! parser, then evaluates the tree to a number.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::eval,
    grammar::core::parse,
    lexer::tokenize,
    value::core::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum that represents an expression as a
/// tree. The tree is built by the grammar engine and walked by the evaluator.
pub mod ast;
/// Provides the error types for grammar construction, parsing and evaluation.
///
/// # Responsibilities
/// - Defines one error enum per phase.
/// - Attaches token positions for diagnostics.
pub mod error;
/// Ties together lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, the grammar engine, the evaluator and the value
///   type.
/// - Provides the entry points for parsing and evaluating expressions.
pub mod interpreter;

/// Tokenizes, parses and evaluates an expression.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use shiftexpr::{get_result, interpreter::value::core::Value};
///
/// assert_eq!(get_result("2 + 3 * 4").unwrap(), Value::Number(14.0));
///
/// // Division by zero is reported, not turned into an infinity.
/// assert!(get_result("5 / 0").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    log::debug!("lexed {} tokens", tokens.len());

    let expr = parse(&tokens)?;
    log::debug!("parsed {expr}");

    let value = eval(&expr)?;
    log::debug!("evaluated to {value}");

    Ok(value)
}
