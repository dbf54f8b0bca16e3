/// Closure representation.
///
/// Defines the `Closure` type carried by `Value::Fun`: a parameter name, the
/// function body and the environment that was active when the `_fun`
/// expression was evaluated.
pub mod closure;

pub mod core;
