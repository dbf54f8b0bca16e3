/// Core parsing entry points.
///
/// Contains the top-level `parse` function that requires the whole token
/// stream to be consumed, the lowest-precedence `==` level and `_if`
/// expressions.
pub mod core;

/// Binary operator parsing.
///
/// Implements the right-associative `+` and `*` levels of the grammar.
pub mod binary;

/// Primary expression parsing.
///
/// Handles function application suffixes and the atomic forms: numbers,
/// variables, booleans, parenthesized expressions, `_let` and `_fun`.
pub mod primary;

/// Utility functions for the parser.
///
/// Provides helpers for expecting fixed tokens and reading identifiers.
pub mod utils;
