use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens with an optional leading minus, such as `42` or
    /// `-7`.
    #[regex(r"-?[0-9]+", parse_integer)]
    Integer(i64),
    /// Identifier tokens; variable names made of ASCII letters, such as `x` or
    /// `factrl`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `_let`
    #[token("_let")]
    Let,
    /// `_in`
    #[token("_in")]
    In,
    /// `_if`
    #[token("_if")]
    If,
    /// `_then`
    #[token("_then")]
    Then,
    /// `_else`
    #[token("_else")]
    Else,
    /// `_true`
    #[token("_true")]
    True,
    /// `_false`
    #[token("_false")]
    False,
    /// `_fun`
    #[token("_fun")]
    Fun,
    /// Any other `_` word. No such keyword exists, so the parser rejects it.
    #[regex(r"_[a-zA-Z]*", |lex| lex.slice().to_string())]
    UnknownKeyword(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `*`
    #[token("*")]
    Star,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Newlines only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,

    /// Text the lexer could not match, kept so the parser can report it where
    /// it is reached.
    Invalid(String),
    /// Marks the end of the token stream.
    EndOfInput,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Splits `source` into `(token, line)` pairs.
///
/// The returned stream always ends with [`Token::EndOfInput`]. Unmatched text
/// is returned as [`Token::Invalid`] rather than aborting, so that errors are
/// reported in parse order.
///
/// # Example
/// ```
/// use msdscript::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x+\n-1");
///
/// assert_eq!(tokens,
///            vec![(Token::Identifier("x".to_string()), 1),
///                 (Token::Plus, 1),
///                 (Token::Integer(-1), 2),
///                 (Token::EndOfInput, 2)]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            Ok(tok) => tokens.push((tok, line)),
            Err(()) => tokens.push((Token::Invalid(lexer.slice().to_string()), line)),
        }
    }
    tokens.push((Token::EndOfInput, lexer.extras.line));

    tracing::trace!(count = tokens.len(), "tokenized source");
    tokens
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
