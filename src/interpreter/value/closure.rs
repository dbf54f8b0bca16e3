use std::rc::Rc;

use crate::{ast::Expr, interpreter::environment::Env};

/// A function value: parameter, body and the captured defining environment.
///
/// The body is shared with the expression tree the closure was created from.
#[derive(Debug, Clone)]
pub struct Closure {
    /// Name the argument is bound to when the closure is called.
    pub param: String,
    /// The unevaluated function body.
    pub body:  Rc<Expr>,
    /// Bindings visible where the function was defined.
    pub env:   Rc<Env>,
}

impl Closure {
    #[must_use]
    pub fn new(param: impl Into<String>, body: Rc<Expr>, env: Rc<Env>) -> Self {
        Self { param: param.into(),
               body,
               env }
    }
}

/// Closures compare by parameter and body; the captured environment is not
/// part of equality.
impl PartialEq for Closure {
    fn eq(&self, other: &Self) -> bool {
        self.param == other.param
        && (Rc::ptr_eq(&self.body, &other.body) || self.body == other.body)
    }
}

impl Eq for Closure {}
