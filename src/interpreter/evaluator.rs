/// Core evaluation logic.
///
/// Contains the `interp` dispatch over every expression variant, variable
/// lookup, `_let` and `_if`.
pub mod core;

/// Binary operator evaluation.
///
/// Implements `+`, `*` and `==` on evaluated operands.
pub mod binary;

/// Function evaluation.
///
/// Handles closure creation for `_fun` and application of closures to
/// arguments.
pub mod function;
