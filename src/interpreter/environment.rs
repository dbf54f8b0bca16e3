use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// A persistent chain of variable bindings.
///
/// Environments are never mutated. Extending one creates a new link whose
/// tail may be shared with other environments, such as the ones captured by
/// closures defined in the same scope.
#[derive(Debug)]
pub enum Env {
    /// The terminal environment. Every lookup fails.
    Empty,
    /// A single binding in front of the rest of the chain.
    Extended {
        /// The bound name.
        name:  String,
        /// The value bound to `name`.
        value: Value,
        /// Outer bindings.
        rest:  Rc<Self>,
    },
}

impl Env {
    /// Creates the empty environment.
    #[must_use]
    pub fn empty() -> Rc<Self> {
        Rc::new(Self::Empty)
    }

    /// Creates a new environment in which `name` is bound to `value`,
    /// shadowing any binding of `name` in `rest`.
    ///
    /// # Example
    /// ```
    /// use msdscript::interpreter::{environment::Env, value::core::Value};
    ///
    /// let outer = Env::extend("x", Value::Num(1), &Env::empty());
    /// let inner = Env::extend("x", Value::Num(2), &outer);
    ///
    /// assert_eq!(inner.lookup("x"), Ok(Value::Num(2)));
    /// assert_eq!(outer.lookup("x"), Ok(Value::Num(1)));
    /// ```
    #[must_use]
    pub fn extend(name: impl Into<String>, value: Value, rest: &Rc<Self>) -> Rc<Self> {
        Rc::new(Self::Extended { name: name.into(),
                                 value,
                                 rest: Rc::clone(rest) })
    }

    /// Looks up `name`, starting with the innermost binding.
    ///
    /// # Returns
    /// - `Ok(Value)`: The value of the nearest binding of `name`.
    /// - `Err(RuntimeError::UnboundVariable)`: If no binding exists.
    pub fn lookup(&self, name: &str) -> EvalResult<Value> {
        let mut env = self;

        loop {
            match env {
                Self::Empty => {
                    return Err(RuntimeError::UnboundVariable { name: name.to_string() });
                },
                Self::Extended { name: bound,
                                 value,
                                 rest, } => {
                    if bound == name {
                        return Ok(value.clone());
                    }
                    env = rest.as_ref();
                },
            }
        }
    }

    /// Returns the number of bindings in the chain, shadowed ones included.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut env = self;
        let mut depth = 0;

        while let Self::Extended { rest, .. } = env {
            depth += 1;
            env = rest.as_ref();
        }

        depth
    }
}
