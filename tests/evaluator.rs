use std::rc::Rc;

use msdscript::{
    ast::Expr,
    error::{Error, RuntimeError, runtime_error::Operation},
    interp_str,
    interpreter::{environment::Env, value::core::Value},
    parse_str,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("7", Value::Num(7))]
#[case("3 + 4 * 5", Value::Num(23))]
#[case("(3 + 4) * 5", Value::Num(35))]
#[case("_false", Value::Bool(false))]
#[case("3 == 3", Value::Bool(true))]
#[case("3 == 4", Value::Bool(false))]
#[case("_true == 1", Value::Bool(false))]
#[case("1 + 2 == 3", Value::Bool(true))]
#[case("_let x = 3 _in x * x", Value::Num(9))]
#[case("_let x = 3 _in _let x = x + 1 _in x", Value::Num(4))]
#[case("_let x=5 _in (_let x=3 _in x+2)", Value::Num(5))]
#[case("_if 2 == 2 _then 1 _else 0", Value::Num(1))]
#[case("(_fun (n) n + n)(21)", Value::Num(42))]
fn evaluates(#[case] source: &str, #[case] expected: Value) {
    assert_eq!(interp_str(source), Ok(expected));
}

#[rstest]
#[case("y", RuntimeError::UnboundVariable { name: "y".to_string() })]
#[case("_let x = 1 _in y", RuntimeError::UnboundVariable { name: "y".to_string() })]
#[case("1 + _false", RuntimeError::NotANumber { operation: Operation::Add })]
#[case("_true * 2", RuntimeError::NotANumber { operation: Operation::Mult })]
#[case("(_fun (x) x) + 1", RuntimeError::NotANumber { operation: Operation::Add })]
#[case("_if 5 _then 1 _else 2", RuntimeError::ConditionNotBoolean)]
#[case("_if _fun (x) x _then 1 _else 2", RuntimeError::ConditionNotBoolean)]
#[case("1(2)", RuntimeError::NotCallable)]
#[case("(1 == 1)(2)", RuntimeError::NotCallable)]
#[case("9223372036854775807 + 1", RuntimeError::Overflow { operation: Operation::Add })]
#[case("4611686018427387904 * 2", RuntimeError::Overflow { operation: Operation::Mult })]
fn reports_runtime_errors(#[case] source: &str, #[case] expected: RuntimeError) {
    assert_eq!(interp_str(source), Err(Error::Runtime(expected)));
}

#[rstest]
#[case("y", "Variable has no value")]
#[case("1 + _false", "You can't add a non-number!")]
#[case("_true * 2", "You can't mult a non-number!")]
#[case("_if 5 _then 1 _else 2", "Condition is not a boolean!")]
#[case("1(2)", "Cannot call a non-function!")]
#[case("(1", "Missing close parenthesis!")]
fn error_messages(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(interp_str(source).unwrap_err().to_string(), expected);
}

#[test]
fn parse_errors_come_before_evaluation() {
    assert!(matches!(interp_str("y +"), Err(Error::Parse(_))));
}

#[test]
fn operands_evaluate_left_to_right() {
    // Both operands fail; the left one is reported.
    assert_eq!(interp_str("a + b"),
               Err(Error::Runtime(RuntimeError::UnboundVariable { name: "a".to_string() })));
    assert_eq!(interp_str("(1 + _true) * b"),
               Err(Error::Runtime(RuntimeError::NotANumber { operation: Operation::Add })));
}

#[test]
fn callee_is_checked_before_argument() {
    assert_eq!(interp_str("5(y)"), Err(Error::Runtime(RuntimeError::NotCallable)));
}

#[test]
fn untaken_branch_is_never_evaluated() {
    assert_eq!(interp_str("_if _true _then 1 _else 1(2)"), Ok(Value::Num(1)));
    assert_eq!(interp_str("_if _false _then nope _else 2"), Ok(Value::Num(2)));
}

#[test]
fn closures_are_lexically_scoped() {
    let captured = "_let y = 8 _in _let f = _fun (x) x * y _in _let y = 100 _in f(2)";
    assert_eq!(interp_str(captured), Ok(Value::Num(16)));

    let caller_binding_invisible = "_let f = _fun (x) x + z _in _let z = 1 _in f(1)";
    assert_eq!(interp_str(caller_binding_invisible),
               Err(Error::Runtime(RuntimeError::UnboundVariable { name: "z".to_string() })));
}

#[test]
fn curried_functions_keep_their_argument() {
    let source = "_let add = _fun (x) _fun (y) x + y
                  _in  _let addFive = add(5)
                       _in  addFive(1) + addFive(10)";

    assert_eq!(interp_str(source), Ok(Value::Num(21)));
}

#[test]
fn recursion_through_self_application() {
    let source = "_let fib = _fun (fib)
                              _fun (n)
                                _if n == 0
                                _then 0
                                _else _if n == 1
                                      _then 1
                                      _else fib(fib)(n + -1) + fib(fib)(n + -2)
                  _in fib(fib)(15)";

    assert_eq!(interp_str(source), Ok(Value::Num(610)));
}

#[test]
fn evaluation_is_repeatable() {
    let expr = parse_str("_let f = _fun (x) x * 2 _in f(f(3))").unwrap();
    let env = Env::empty();

    assert_eq!(expr.interp(&env), Ok(Value::Num(12)));
    assert_eq!(expr.interp(&env), Ok(Value::Num(12)));
}

#[test]
fn interp_uses_the_given_environment() {
    let env = Env::extend("y", Value::Num(5), &Env::extend("x", Value::Num(2), &Env::empty()));
    let expr = parse_str("x * y + x").unwrap();

    assert_eq!(expr.interp(&env), Ok(Value::Num(12)));
    assert_eq!(env.depth(), 2);
}

#[test]
fn environment_shadowing_keeps_outer_binding() {
    let outer = Env::extend("x", Value::Num(1), &Env::empty());
    let inner = Env::extend("x", Value::Bool(true), &outer);

    assert_eq!(inner.lookup("x"), Ok(Value::Bool(true)));
    assert_eq!(outer.lookup("x"), Ok(Value::Num(1)));
    assert_eq!(inner.depth(), 2);
    assert_eq!(Env::empty().lookup("x"),
               Err(RuntimeError::UnboundVariable { name: "x".to_string() }));
}

#[test]
fn function_values_convert_back_to_expressions() {
    let value = interp_str("_let k = 2 _in _fun (x) x * k").unwrap();

    let Value::Fun(closure) = &value else {
        panic!("expected a function, got {value}");
    };
    assert_eq!(closure.param, "x");
    assert_eq!(closure.env.lookup("k"), Ok(Value::Num(2)));
    assert_eq!(value.to_expr(), Expr::fun("x", Expr::mult(Expr::var("x"), Expr::var("k"))));
    assert_eq!(value.to_string(), "(_fun (x) (x*k))");
    assert_eq!(Value::Num(-3).to_expr(), Expr::num(-3));
}

#[test]
fn closure_bodies_are_shared_with_the_tree() {
    let expr = parse_str("_fun (x) x + 1").unwrap();
    let Expr::Fun { body, .. } = &expr else {
        panic!("expected a function expression");
    };

    let Ok(Value::Fun(closure)) = expr.interp(&Env::empty()) else {
        panic!("expected a function value");
    };
    assert!(Rc::ptr_eq(body, &closure.body));
}
