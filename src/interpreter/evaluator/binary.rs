use std::rc::Rc;

use crate::{
    ast::Expr,
    interpreter::{environment::Env, evaluator::core::EvalResult, value::core::Value},
};

impl Expr {
    /// Evaluates both operands, left first, and adds them.
    ///
    /// # Errors
    /// `NotANumber` if either operand is not a number, `Overflow` if the sum
    /// does not fit.
    pub(super) fn eval_add(lhs: &Self, rhs: &Self, env: &Rc<Env>) -> EvalResult<Value> {
        let lhs = lhs.interp(env)?;
        let rhs = rhs.interp(env)?;
        lhs.add_to(&rhs)
    }

    pub(super) fn eval_mult(lhs: &Self, rhs: &Self, env: &Rc<Env>) -> EvalResult<Value> {
        let lhs = lhs.interp(env)?;
        let rhs = rhs.interp(env)?;
        lhs.mult_with(&rhs)
    }

    /// Evaluates both operands and compares the resulting values.
    ///
    /// Values of different kinds are unequal; this never fails on its own.
    pub(super) fn eval_eq(lhs: &Self, rhs: &Self, env: &Rc<Env>) -> EvalResult<Value> {
        let lhs = lhs.interp(env)?;
        let rhs = rhs.interp(env)?;
        Ok(Value::from(lhs == rhs))
    }
}
