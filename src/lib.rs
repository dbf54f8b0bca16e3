//! # msdscript
//!
//! msdscript is an interpreter for MSDScript, a small expression language
//! with integers, booleans, `_let` bindings, conditionals and first-class
//! single-argument functions with lexical closures.
//!
//! Source text is tokenized and parsed into an [`ast::Expr`], evaluated
//! against an [`interpreter::environment::Env`], and can be printed back
//! either fully parenthesized or pretty printed.

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

use crate::{
    ast::Expr,
    error::{Error, ParseError},
    interpreter::{environment::Env, lexer::tokenize, parser::core::parse, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum that represents MSDScript syntax as
/// a tree. The AST is built by the parser, walked by the evaluator and
/// rendered by both printers.
///
/// # Responsibilities
/// - Defines one variant per language construct.
/// - Provides structural equality and constructors.
/// - Provides syntactic utilities such as substitution.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code, each with the short message reported to the user.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, printing and the
/// value and environment types.
pub mod interpreter;
/// Log output for diagnosing the interpreter.
pub mod logging;
/// The built-in golden test suite run by `msdscript --test`.
pub mod suite;

/// What to do with a parsed expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Evaluate and print the resulting value.
    Interp,
    /// Print the fully parenthesized form.
    Print,
    /// Print the pretty form.
    PrettyPrint,
}

/// Parses a complete MSDScript expression.
///
/// # Examples
/// ```
/// use msdscript::{ast::Expr, parse_str};
///
/// assert_eq!(parse_str("1 + 2 * x"),
///            Ok(Expr::add(Expr::num(1), Expr::mult(Expr::num(2), Expr::var("x")))));
///
/// assert_eq!(parse_str("()").unwrap_err().to_string(), "Invalid Input!");
/// assert_eq!(parse_str("(1").unwrap_err().to_string(), "Missing close parenthesis!");
/// ```
pub fn parse_str(source: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(source);
    let mut iter = tokens.iter().peekable();

    let expr = parse(&mut iter)?;
    tracing::debug!(%expr, "parsed expression");
    Ok(expr)
}

/// Parses and evaluates an expression in the empty environment.
///
/// # Examples
/// ```
/// use msdscript::{interp_str, interpreter::value::core::Value};
///
/// let source = "_let y = 8 _in _let f = _fun (x) x * y _in f(2)";
/// assert_eq!(interp_str(source), Ok(Value::Num(16)));
///
/// // `x` is not bound anywhere.
/// assert!(interp_str("x + 1").is_err());
/// ```
pub fn interp_str(source: &str) -> Result<Value, Error> {
    let expr = parse_str(source)?;
    let value = expr.interp(&Env::empty())?;

    tracing::debug!(%value, "evaluated expression");
    Ok(value)
}

/// Runs one of the command-line modes on `source` and returns the text it
/// prints, without the trailing newline.
///
/// # Examples
/// ```
/// use msdscript::{Mode, run};
///
/// assert_eq!(run(Mode::Interp, "1 + 2 * 3").unwrap(), "7");
/// assert_eq!(run(Mode::Print, "1 + 2 * 3").unwrap(), "(1+(2*3))");
/// assert_eq!(run(Mode::PrettyPrint, "(1 + 2) * 3").unwrap(), "(1 + 2) * 3");
/// ```
pub fn run(mode: Mode, source: &str) -> Result<String, Error> {
    tracing::debug!(?mode, bytes = source.len(), "running");

    match mode {
        Mode::Interp => Ok(interp_str(source)?.to_string()),
        Mode::Print => Ok(parse_str(source)?.to_string()),
        Mode::PrettyPrint => Ok(parse_str(source)?.to_pretty_string()),
    }
}
