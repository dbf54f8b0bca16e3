use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{environment::Env, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Expr {
    /// Evaluates the expression in `env`.
    ///
    /// This is the main entry point for evaluation. Every variant is handled
    /// here or in the `binary` and `function` submodules; failures propagate
    /// to the caller unchanged.
    ///
    /// # Parameters
    /// - `env`: Bindings visible to the expression.
    ///
    /// # Returns
    /// The resulting `Value`.
    ///
    /// # Example
    /// ```
    /// use msdscript::{
    ///     ast::Expr,
    ///     interpreter::{environment::Env, value::core::Value},
    /// };
    ///
    /// let e = Expr::add(Expr::var("x"), Expr::num(2));
    /// let env = Env::extend("x", Value::Num(40), &Env::empty());
    ///
    /// assert_eq!(e.interp(&env), Ok(Value::Num(42)));
    /// ```
    pub fn interp(&self, env: &Rc<Env>) -> EvalResult<Value> {
        match self {
            Self::Num(n) => Ok(Value::from(*n)),
            Self::Bool(b) => Ok(Value::from(*b)),
            Self::Var(name) => env.lookup(name),
            Self::Add { lhs, rhs } => Self::eval_add(lhs, rhs, env),
            Self::Mult { lhs, rhs } => Self::eval_mult(lhs, rhs, env),
            Self::Eq { lhs, rhs } => Self::eval_eq(lhs, rhs, env),
            Self::Let { name, rhs, body } => Self::eval_let(name, rhs, body, env),
            Self::If { condition,
                       then_branch,
                       else_branch, } => Self::eval_if(condition, then_branch, else_branch, env),
            Self::Fun { param, body } => Ok(Self::eval_fun(param, body, env)),
            Self::Call { callee, arg } => Self::eval_call(callee, arg, env),
        }
    }

    /// Evaluates a `_let` binding.
    ///
    /// The bound expression is evaluated in the current environment; the body
    /// is evaluated in that environment extended with the new binding. The
    /// binding is not visible to its own bound expression.
    fn eval_let(name: &str, rhs: &Self, body: &Self, env: &Rc<Env>) -> EvalResult<Value> {
        let value = rhs.interp(env)?;
        let extended = Env::extend(name, value, env);
        body.interp(&extended)
    }

    /// Evaluates an `_if` expression.
    ///
    /// Only the selected branch is evaluated.
    ///
    /// # Errors
    /// `ConditionNotBoolean` if the condition is not a boolean.
    fn eval_if(condition: &Self,
               then_branch: &Self,
               else_branch: &Self,
               env: &Rc<Env>)
               -> EvalResult<Value> {
        if condition.interp(env)?.is_true()? {
            then_branch.interp(env)
        } else {
            else_branch.interp(env)
        }
    }
}
