use msdscript::{ast::Expr, error::ParseError, interpreter::lexer::{Token, tokenize}, parse_str};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("42", Expr::num(42))]
#[case("-7", Expr::num(-7))]
#[case("  \n x \t", Expr::var("x"))]
#[case("_true", Expr::boolean(true))]
#[case("(((1)))", Expr::num(1))]
#[case("1 + 2 + 3",
       Expr::add(Expr::num(1), Expr::add(Expr::num(2), Expr::num(3))))]
#[case("2 * 3 * 4",
       Expr::mult(Expr::num(2), Expr::mult(Expr::num(3), Expr::num(4))))]
#[case("1 + 2 * 3",
       Expr::add(Expr::num(1), Expr::mult(Expr::num(2), Expr::num(3))))]
#[case("(1 + 2) * 3",
       Expr::mult(Expr::add(Expr::num(1), Expr::num(2)), Expr::num(3)))]
#[case("1 == 2 == 3",
       Expr::equal(Expr::num(1), Expr::equal(Expr::num(2), Expr::num(3))))]
#[case("x + 1 == 2",
       Expr::equal(Expr::add(Expr::var("x"), Expr::num(1)), Expr::num(2)))]
fn parses_operators(#[case] source: &str, #[case] expected: Expr) {
    assert_eq!(parse_str(source), Ok(expected));
}

#[rstest]
#[case("_let x = 5 _in x + 1",
       Expr::let_in("x", Expr::num(5), Expr::add(Expr::var("x"), Expr::num(1))))]
#[case("_let x = 1 _in x == 1",
       Expr::equal(Expr::let_in("x", Expr::num(1), Expr::var("x")), Expr::num(1)))]
#[case("_if _true _then 1 _else 2 + 3",
       Expr::if_then_else(Expr::boolean(true),
                          Expr::num(1),
                          Expr::add(Expr::num(2), Expr::num(3))))]
#[case("_fun (x) x * 2",
       Expr::fun("x", Expr::mult(Expr::var("x"), Expr::num(2))))]
#[case("_fun (x) x == 2",
       Expr::fun("x", Expr::equal(Expr::var("x"), Expr::num(2))))]
fn parses_keyword_forms(#[case] source: &str, #[case] expected: Expr) {
    assert_eq!(parse_str(source), Ok(expected));
}

#[rstest]
#[case("f(1)", Expr::call(Expr::var("f"), Expr::num(1)))]
#[case("f(1)(2)",
       Expr::call(Expr::call(Expr::var("f"), Expr::num(1)), Expr::num(2)))]
#[case("f(g(1))",
       Expr::call(Expr::var("f"), Expr::call(Expr::var("g"), Expr::num(1))))]
#[case("2 * f(3)",
       Expr::mult(Expr::num(2), Expr::call(Expr::var("f"), Expr::num(3))))]
#[case("(_fun (x) x)(5)",
       Expr::call(Expr::fun("x", Expr::var("x")), Expr::num(5)))]
fn parses_calls(#[case] source: &str, #[case] expected: Expr) {
    assert_eq!(parse_str(source), Ok(expected));
}

#[rstest]
#[case("", ParseError::InvalidInput { line: 1 })]
#[case("()", ParseError::InvalidInput { line: 1 })]
#[case("1 2", ParseError::InvalidInput { line: 1 })]
#[case("1 +\n\n", ParseError::InvalidInput { line: 3 })]
#[case("x % 2", ParseError::InvalidInput { line: 1 })]
#[case("_lett x = 1 _in x", ParseError::InvalidInput { line: 1 })]
#[case("_let 5 = 1 _in 5", ParseError::InvalidInput { line: 1 })]
#[case("_fun (5) 5", ParseError::InvalidInput { line: 1 })]
#[case("(1 + 2", ParseError::MissingCloseParen { line: 1 })]
#[case("f(1\n", ParseError::MissingCloseParen { line: 2 })]
#[case("_fun (x x", ParseError::MissingCloseParen { line: 1 })]
#[case("_let x 1 _in x", ParseError::ConsumeMismatch { expected: "=", line: 1 })]
#[case("_let x = 1\nx", ParseError::ConsumeMismatch { expected: "_in", line: 2 })]
#[case("_if _true 1 _else 2", ParseError::ConsumeMismatch { expected: "_then", line: 1 })]
#[case("_if _true _then 1", ParseError::ConsumeMismatch { expected: "_else", line: 1 })]
#[case("_fun x x", ParseError::ConsumeMismatch { expected: "(", line: 1 })]
fn reports_parse_errors(#[case] source: &str, #[case] expected: ParseError) {
    assert_eq!(parse_str(source), Err(expected));
}

#[test]
fn error_messages() {
    let message = |src| parse_str(src).unwrap_err().to_string();

    assert_eq!(message("+"), "Invalid Input!");
    assert_eq!(message("(1"), "Missing close parenthesis!");
    assert_eq!(message("_let x 1 _in x"), "Consume mismatch!");
}

#[test]
fn lexer_tracks_lines_and_keeps_invalid_text() {
    let tokens = tokenize("_let\nx = 1 @");

    assert_eq!(tokens,
               vec![(Token::Let, 1),
                    (Token::Identifier("x".to_string()), 2),
                    (Token::Equals, 2),
                    (Token::Integer(1), 2),
                    (Token::Invalid("@".to_string()), 2),
                    (Token::EndOfInput, 2)]);
}

#[test]
fn lexer_prefers_the_longest_word() {
    let tokens = tokenize("_funny _fun == =");

    assert_eq!(tokens,
               vec![(Token::UnknownKeyword("_funny".to_string()), 1),
                    (Token::Fun, 1),
                    (Token::EqualEqual, 1),
                    (Token::Equals, 1),
                    (Token::EndOfInput, 1)]);
}

#[test]
fn canonical_print_parses_back() {
    let sources = ["1 + 2 * 3",
                   "(1 + 2) * 3 == 9",
                   "_let x = 5 _in _let y = x _in x * y",
                   "_if x == 1 _then _true _else _false",
                   "_let f = _fun (x) _fun (y) x + y _in f(1)(2)",
                   "(_fun (x) x)(_fun (y) y)"];

    for source in sources {
        let expr = parse_str(source).unwrap();
        assert_eq!(parse_str(&expr.to_string()), Ok(expr), "{source:?}");
    }
}
