use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_comparg,
            core::{ParseResult, parse_expression, parse_if},
            utils::{expect_close_paren, expect_keyword, parse_identifier},
        },
    },
};

/// Parses an inner expression followed by any number of call suffixes.
///
/// Application is left-associative, so `f(1)(2)` applies the result of
/// `f(1)` to `2`.
///
/// Grammar:
/// ```text
///     multicand := inner ("(" expr ")")*
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The inner expression, wrapped in one `Expr::Call` per suffix.
///
/// # Errors
/// Returns `MissingCloseParen` if an argument is not closed.
pub fn parse_multicand<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut expr = parse_inner(tokens)?;

    while let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let arg = parse_expression(tokens)?;
        expect_close_paren(tokens)?;
        expr = Expr::call(expr, arg);
    }

    Ok(expr)
}

/// Parses an inner (atomic) expression.
///
/// Grammar:
/// ```text
///     inner := number
///            | "(" expr ")"
///            | variable
///            | "_true" | "_false"
///            | "_let" variable "=" comparg "_in" comparg
///            | "_if" expr "_then" expr "_else" expr
///            | "_fun" "(" variable ")" expr
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an inner expression.
///
/// # Returns
/// The parsed [`Expr`] or a `ParseError` on failure.
///
/// # Errors
/// - `MissingCloseParen` if a parenthesized expression is not closed.
/// - `InvalidInput` for any token that cannot start an expression.
pub fn parse_inner<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, line)) = tokens.next() else {
        return Err(ParseError::InvalidInput { line: 0 });
    };

    match token {
        Token::Integer(n) => Ok(Expr::num(*n)),
        Token::Identifier(name) => Ok(Expr::var(name.clone())),
        Token::True => Ok(Expr::boolean(true)),
        Token::False => Ok(Expr::boolean(false)),
        Token::LParen => {
            let expr = parse_expression(tokens)?;
            expect_close_paren(tokens)?;
            Ok(expr)
        },
        Token::Let => parse_let(tokens),
        Token::If => parse_if(tokens),
        Token::Fun => parse_fun(tokens),
        _ => {
            tracing::trace!(?token, line, "token cannot start an expression");
            Err(ParseError::InvalidInput { line: *line })
        },
    }
}

/// Parses a `_let` expression.
///
/// Syntax:
/// ```text
///     _let <variable> = <comparg> _in <comparg>
/// ```
/// The bound expression and the body are parsed at the `+` level, so an
/// `==` after the body belongs to the enclosing expression.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `_let` keyword.
///
/// # Errors
/// - `InvalidInput` if the bound name is not an identifier.
/// - `ConsumeMismatch` if `=` or `_in` is missing.
fn parse_let<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens)?;
    expect_keyword(tokens, &Token::Equals, "=")?;
    let rhs = parse_comparg(tokens)?;
    expect_keyword(tokens, &Token::In, "_in")?;
    let body = parse_comparg(tokens)?;

    Ok(Expr::let_in(name, rhs, body))
}

/// Parses a `_fun` expression.
///
/// Syntax:
/// ```text
///     _fun (<variable>) <expr>
/// ```
/// # Parameters
/// - `tokens`: Token stream positioned after the `_fun` keyword.
///
/// # Errors
/// - `ConsumeMismatch` if the `(` before the parameter is missing.
/// - `InvalidInput` if the parameter is not an identifier.
/// - `MissingCloseParen` if the parameter list is not closed.
fn parse_fun<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_keyword(tokens, &Token::LParen, "(")?;
    let param = parse_identifier(tokens)?;
    expect_close_paren(tokens)?;
    let body = parse_expression(tokens)?;

    Ok(Expr::fun(param, body))
}
