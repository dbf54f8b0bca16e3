use msdscript::{ast::Expr, parse_str};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn pretty(source: &str) -> String {
    parse_str(source).unwrap().to_pretty_string()
}

#[rstest]
#[case("1 + 2", "(1+2)")]
#[case("1 + 2 + 3", "(1+(2+3))")]
#[case("(1 + 2) + 3", "((1+2)+3)")]
#[case("-1 * x", "(-1*x)")]
#[case("1 == 2 + 3", "(1==(2+3))")]
#[case("_let x = 5 _in x + 1", "(_let x=5 _in (x+1))")]
#[case("_if _false _then 1 _else 2", "(_if _false _then 1 _else 2)")]
#[case("_fun (x) x * x", "(_fun (x) (x*x))")]
#[case("f(1)(x + 2)", "f(1)((x+2))")]
fn canonical_form(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(parse_str(source).unwrap().to_string(), expected);
}

/// Arithmetic already in minimal form prints back unchanged.
#[rstest]
#[case("1 * (2 + 3)")]
#[case("(8 * 1) * y")]
#[case("(3 + 5) * 6 * 1")]
#[case("(7 * 7) * (9 + 2)")]
#[case("(2 * 3) * 4")]
#[case("(-1 * -3) * 6")]
#[case("(1 + 2) * 3")]
#[case("(-4 + 1) * 5")]
#[case("(2 * x + 3) * (4 + y)")]
#[case("(1 + 2) + 3")]
#[case("1 + 2 * 3")]
#[case("1 * (2 + 3) + 4")]
#[case("x + y * (1 + 2)")]
#[case("3 * (4 + x) + 2")]
#[case("(3 + y * 4) * x")]
#[case("(a + 2) * b + 5")]
#[case("(3 + 1) * (2 + y)")]
#[case("(x + 4) * z + (1 + x) * 3")]
#[case("1 + 2 == 3")]
#[case("1 == 2 == 3")]
#[case("(1 == 2) == 3")]
#[case("f(1)(2) * g(x + 1)")]
fn minimal_arithmetic_is_a_fixed_point(#[case] source: &str) {
    assert_eq!(pretty(source), source);
}

#[rstest]
#[case("((1 + 2))", "1 + 2")]
#[case("1 + (2 + 3)", "1 + 2 + 3")]
#[case("(1 * 2) + 3", "1 * 2 + 3")]
#[case("(1 + 2) == 3", "1 + 2 == 3")]
#[case("1 == (2 == 3)", "1 == 2 == 3")]
fn redundant_parentheses_are_dropped(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(pretty(source), expected);
}

#[rstest]
#[case("_let x = 5 _in x + 1", "_let x = 5\n  _in  x + 1")]
#[case("(2 * _let x = 5 _in x + 1) * 3", "(2 * _let x = 5\n       _in  x + 1) * 3")]
#[case("(_let x = 5 _in x) + 1", "(_let x = 5\n   _in  x) + 1")]
#[case("1 + _let x = 5 _in x", "1 + _let x = 5\n      _in  x")]
#[case("_let x = 1 _in (x == 1)", "_let x = 1\n  _in  (x == 1)")]
#[case("_let x = _let y = 1 _in y _in x", "_let x = _let y = 1\n           _in  y\n  _in  x")]
fn let_layout(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(pretty(source), expected);
}

#[rstest]
#[case("_if x == 1 _then 1 _else 2", "_if x == 1\n  _then 1\n  _else 2")]
#[case("1 + (_if _true _then 1 _else 2) + 3",
       "1 + (_if _true\n       _then 1\n       _else 2) + 3")]
#[case("_fun (x) x + 1", "_fun (x)\n  x + 1")]
#[case("(_fun (x) x)(1)", "(_fun (x)\n   x)(1)")]
#[case("_let f = _fun (x) x + 1 _in f(2)", "_let f = _fun (x)\n           x + 1\n  _in  f(2)")]
fn if_and_fun_layout(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(pretty(source), expected);
}

#[test]
fn pretty_print_parses_back() {
    let sources = ["(2 * _let x = 5 _in x + 1) * 3",
                   "_let x = 1 _in (x == 1)",
                   "(_let x = 1 _in x) == 1",
                   "(_if _true _then 1 _else 2) * 3",
                   "_let f = _fun (x) _fun (y) x * y _in f(2)(3)",
                   "(_fun (x) x + 1)(2) + 3"];

    for source in sources {
        let expr = parse_str(source).unwrap();
        assert_eq!(parse_str(&expr.to_pretty_string()), Ok(expr), "{source:?}");
    }
}

#[test]
fn substitution() {
    let replaced = |source: &str, name: &str, replacement: Expr| {
        parse_str(source).unwrap().subst(name, &replacement).to_pretty_string()
    };

    assert_eq!(replaced("x + 5", "x", Expr::mult(Expr::num(2), Expr::num(3))), "2 * 3 + 5");
    assert_eq!(replaced("z * 3 + x", "x", Expr::var("y")), "z * 3 + y");
    assert_eq!(replaced("x * 3", "x", Expr::add(Expr::num(1), Expr::num(2))), "(1 + 2) * 3");
    assert_eq!(replaced("_let x = x _in x", "x", Expr::num(1)), "_let x = 1\n  _in  x");
    assert_eq!(replaced("_let y = x _in x", "x", Expr::num(1)), "_let y = 1\n  _in  1");
    assert_eq!(replaced("_fun (x) x + y", "x", Expr::num(1)), "_fun (x)\n  x + y");
    assert_eq!(replaced("_fun (x) x + y", "y", Expr::num(1)), "_fun (x)\n  x + 1");
}

#[test]
fn has_variable() {
    let has = |source| parse_str(source).unwrap().has_variable();

    assert!(!has("1 + 2 * 3"));
    assert!(!has("_if _true _then 1 _else 2"));
    assert!(!has("_fun (x) 1"));
    assert!(has("1 + x"));
    assert!(has("_let x = 1 _in x"));
    assert!(has("f(1)"));
}
