/// Represents all errors that can occur during lexing or parsing.
///
/// The `Display` form of every variant is the short message reported to the
/// user; the line the error was detected on is kept separately and is
/// available through [`ParseError::line`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input could not be read as an expression: an unexpected token, an
    /// unknown `_keyword`, a lone `-`, trailing input or an empty source.
    #[error("Invalid Input!")]
    InvalidInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Missing close parenthesis!")]
    MissingCloseParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A fixed token required by the grammar (`=`, `_in`, `_then`, `_else`,
    /// or the `(` after `_fun`) was not found.
    #[error("Consume mismatch!")]
    ConsumeMismatch {
        /// The token that was required.
        expected: &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl ParseError {
    /// Returns the source line the error was detected on.
    ///
    /// # Example
    /// ```
    /// use msdscript::parse_str;
    ///
    /// let err = parse_str("1 +\n\n(2").unwrap_err();
    ///
    /// assert_eq!(err.to_string(), "Missing close parenthesis!");
    /// assert_eq!(err.line(), 3);
    /// ```
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InvalidInput { line }
            | Self::MissingCloseParen { line }
            | Self::ConsumeMismatch { line, .. } => *line,
        }
    }
}
