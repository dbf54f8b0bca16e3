use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Returns the line of the next token without consuming it.
///
/// The lexer always terminates the stream with `EndOfInput`, so a missing
/// token only happens if a caller read past it; line `0` is reported then.
pub(in crate::interpreter::parser) fn current_line<'a, I>(tokens: &mut Peekable<I>) -> usize
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.peek().map_or(0, |(_, line)| *line)
}

/// Consumes the next token if it is `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected`: The token that must come next.
/// - `error`: Builds the error to report, given the offending line.
///
/// # Errors
/// Returns the error produced by `error` if the next token differs. The
/// offending token is left in the stream.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          error: impl FnOnce(usize) -> ParseError)
                                                          -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((tok, _)) if tok == expected => {
            tokens.next();
            Ok(())
        },
        _ => Err(error(current_line(tokens))),
    }
}

/// Consumes a closing parenthesis.
///
/// # Errors
/// Returns `ParseError::MissingCloseParen` if the next token is not `)`.
pub(in crate::interpreter::parser) fn expect_close_paren<'a, I>(tokens: &mut Peekable<I>)
                                                                -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect_token(tokens, &Token::RParen, |line| ParseError::MissingCloseParen { line })
}

/// Consumes a keyword or symbol the grammar requires at this point.
///
/// # Errors
/// Returns `ParseError::ConsumeMismatch` naming `text` if the next token is
/// not `expected`.
pub(in crate::interpreter::parser) fn expect_keyword<'a, I>(tokens: &mut Peekable<I>,
                                                            expected: &Token,
                                                            text: &'static str)
                                                            -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect_token(tokens, expected, |line| ParseError::ConsumeMismatch { expected: text,
                                                                         line })
}

/// Parses a plain identifier and returns its name.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// A `String` containing the identifier.
///
/// # Errors
/// Returns `ParseError::InvalidInput` if the next token is not an
/// identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Identifier(name), _)) => {
            let name = name.clone();
            tokens.next();
            Ok(name)
        },
        _ => Err(ParseError::InvalidInput { line: current_line(tokens) }),
    }
}
