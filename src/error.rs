/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing source
/// text. Parse errors cover malformed tokens, missing closing parentheses and
/// keywords that were required but not found.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unbound
/// variables, arithmetic on non-numbers, non-boolean conditions, calls to
/// non-functions and integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced by one of the crate's entry points.
///
/// Parsing and evaluation report their own error types; this enum joins them
/// so that callers driving the whole pipeline handle a single type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression parsed but failed to evaluate.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
