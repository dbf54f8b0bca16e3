use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::core::EvalResult,
        value::{closure::Closure, core::Value},
    },
};

impl Expr {
    /// Creates a closure over the current environment.
    pub(super) fn eval_fun(param: &str, body: &Rc<Self>, env: &Rc<Env>) -> Value {
        Closure::new(param, Rc::clone(body), Rc::clone(env)).into()
    }

    /// Applies the callee to the argument.
    ///
    /// The callee is evaluated first and must produce a closure; the argument
    /// is evaluated next, in the caller's environment. The body then runs in
    /// the closure's captured environment extended with the parameter, never
    /// in the caller's environment.
    ///
    /// # Errors
    /// `NotCallable` if the callee is not a function. Errors raised by the
    /// argument or the body propagate unchanged.
    pub(super) fn eval_call(callee: &Self, arg: &Self, env: &Rc<Env>) -> EvalResult<Value> {
        let Value::Fun(closure) = callee.interp(env)? else {
            return Err(RuntimeError::NotCallable);
        };
        let arg = arg.interp(env)?;

        tracing::trace!(param = %closure.param, depth = closure.env.depth(), "calling closure");

        let call_env = Env::extend(closure.param.as_str(), arg, &closure.env);
        closure.body.interp(&call_env)
    }
}
