use std::rc::Rc;

use crate::{
    ast::Expr,
    error::{RuntimeError, runtime_error::Operation},
    interpreter::{evaluator::core::EvalResult, value::closure::Closure},
};

/// Represents a runtime value in the interpreter.
///
/// Values are produced only by evaluation. Apart from the body held by a
/// closure, a value never contains unevaluated syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// An integer value (64 bit).
    Num(i64),
    /// A boolean value, produced by literals and by `==`.
    /// `_if` conditions must evaluate to `Bool`.
    Bool(bool),
    /// A function together with its defining environment.
    Fun(Closure),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Num(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Closure> for Value {
    fn from(c: Closure) -> Self {
        Self::Fun(c)
    }
}

impl Value {
    /// Adds `other` to this value.
    ///
    /// Both operands must be numbers.
    ///
    /// # Returns
    /// - `Ok(Value::Num)`: The sum.
    /// - `Err(RuntimeError::NotANumber)`: If either side is not a number.
    /// - `Err(RuntimeError::Overflow)`: If the sum does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use msdscript::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Num(2).add_to(&Value::Num(3)), Ok(Value::Num(5)));
    /// assert!(Value::Bool(true).add_to(&Value::Num(3)).is_err());
    /// ```
    pub fn add_to(&self, other: &Self) -> EvalResult<Self> {
        let (lhs, rhs) = self.numeric_operands(other, Operation::Add)?;

        lhs.checked_add(rhs)
           .map(Self::Num)
           .ok_or(RuntimeError::Overflow { operation: Operation::Add })
    }

    /// Multiplies this value with `other`.
    ///
    /// Both operands must be numbers.
    ///
    /// # Returns
    /// - `Ok(Value::Num)`: The product.
    /// - `Err(RuntimeError::NotANumber)`: If either side is not a number.
    /// - `Err(RuntimeError::Overflow)`: If the product does not fit in an
    ///   `i64`.
    pub fn mult_with(&self, other: &Self) -> EvalResult<Self> {
        let (lhs, rhs) = self.numeric_operands(other, Operation::Mult)?;

        lhs.checked_mul(rhs)
           .map(Self::Num)
           .ok_or(RuntimeError::Overflow { operation: Operation::Mult })
    }

    /// Returns the boolean payload, or an error if the value is not a boolean.
    ///
    /// Used for `_if` conditions.
    pub const fn is_true(&self) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ConditionNotBoolean),
        }
    }

    /// Converts the value back into an expression.
    ///
    /// Numbers and booleans become literals. A function becomes the `_fun`
    /// expression it was created from; the captured environment is dropped,
    /// so free variables of the body are no longer bound in the result.
    ///
    /// # Example
    /// ```
    /// use msdscript::{ast::Expr, interp_str};
    ///
    /// let value = interp_str("_let y = 1 _in _fun (x) x + y").unwrap();
    ///
    /// assert_eq!(value.to_expr(),
    ///            Expr::fun("x", Expr::add(Expr::var("x"), Expr::var("y"))));
    /// ```
    #[must_use]
    pub fn to_expr(&self) -> Expr {
        match self {
            Self::Num(n) => Expr::Num(*n),
            Self::Bool(b) => Expr::Bool(*b),
            Self::Fun(closure) => Expr::Fun { param: closure.param.clone(),
                                              body:  Rc::clone(&closure.body), },
        }
    }

    const fn numeric_operands(&self, other: &Self, operation: Operation) -> EvalResult<(i64, i64)> {
        match (self, other) {
            (Self::Num(lhs), Self::Num(rhs)) => Ok((*lhs, *rhs)),
            _ => Err(RuntimeError::NotANumber { operation }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{}", Expr::Bool(*b)),
            Self::Fun(_) => write!(f, "{}", self.to_expr()),
        }
    }
}
