use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, primary::parse_multicand},
    },
};

/// Parses addition expressions.
///
/// `+` is right-associative: `1 + 2 + 3` parses as `1 + (2 + 3)`.
///
/// The rule is: `comparg := addend ("+" comparg)?`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Add` tree, or the addend itself when no `+` follows.
pub fn parse_comparg<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let lhs = parse_addend(tokens)?;

    if let Some((Token::Plus, _)) = tokens.peek() {
        tokens.next();
        let rhs = parse_comparg(tokens)?;
        return Ok(Expr::add(lhs, rhs));
    }

    Ok(lhs)
}

/// Parses multiplication expressions.
///
/// `*` is right-associative: `2 * 3 * 4` parses as `2 * (3 * 4)`.
///
/// The rule is: `addend := multicand ("*" addend)?`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Mult` tree, or the multicand itself when no `*` follows.
pub fn parse_addend<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let lhs = parse_multicand(tokens)?;

    if let Some((Token::Star, _)) = tokens.peek() {
        tokens.next();
        let rhs = parse_addend(tokens)?;
        return Ok(Expr::mult(lhs, rhs));
    }

    Ok(lhs)
}
