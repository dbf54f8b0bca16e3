use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_comparg,
            utils::{current_line, expect_keyword},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token stream into a single expression.
///
/// After the expression only the end-of-input marker may remain.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs, as produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Errors
/// - Propagates any error from expression parsing.
/// - `InvalidInput` if tokens are left over.
pub fn parse<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens)?;

    match tokens.peek() {
        Some((Token::EndOfInput, _)) | None => Ok(expr),
        Some((_, line)) => Err(ParseError::InvalidInput { line: *line }),
    }
}

/// Parses a full expression.
///
/// This is the lowest-precedence level. An optional `==` is followed by
/// another full expression, so chains nest to the right.
///
/// Grammar: `expr := comparg ("==" expr)?`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let lhs = parse_comparg(tokens)?;

    if let Some((Token::EqualEqual, _)) = tokens.peek() {
        tokens.next();
        let rhs = parse_expression(tokens)?;
        return Ok(Expr::equal(lhs, rhs));
    }

    Ok(lhs)
}

/// Parses an `_if` expression.
///
/// Syntax:
/// ```text
///     _if <expr> _then <expr> _else <expr>
/// ```
/// Both branches are full expressions, so the else branch extends as far
/// right as possible.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `_if` keyword.
///
/// # Returns
/// An `Expr::If` node.
///
/// # Errors
/// - `ConsumeMismatch` if `_then` or `_else` is missing.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = current_line(tokens);
    let condition = parse_expression(tokens)?;

    expect_keyword(tokens, &Token::Then, "_then")?;
    let then_branch = parse_expression(tokens)?;

    expect_keyword(tokens, &Token::Else, "_else")?;
    let else_branch = parse_expression(tokens)?;

    tracing::trace!(line, "parsed _if expression");
    Ok(Expr::if_then_else(condition, then_branch, else_branch))
}
