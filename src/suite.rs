use std::fmt;

use crate::Mode;

/// What a golden case must produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// The exact text printed on success.
    Output(&'static str),
    /// The exact error message.
    Error(&'static str),
}

/// A single golden case: a program, the mode to run it in, and its result.
#[derive(Debug, Clone, Copy)]
pub struct Case {
    pub name:     &'static str,
    pub mode:     Mode,
    pub source:   &'static str,
    pub expected: Expected,
}

/// A case whose result did not match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub name:     &'static str,
    pub expected: String,
    pub actual:   String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "{}: expected {:?}, got {:?}",
               self.name, self.expected, self.actual)
    }
}

/// Outcome of running a table of cases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub passed:   usize,
    pub failures: Vec<Failure>,
}

impl Report {
    #[must_use]
    pub fn total(&self) -> usize {
        self.passed + self.failures.len()
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for failure in &self.failures {
            writeln!(f, "FAILED {failure}")?;
        }
        write!(f, "{} of {} tests passed", self.passed, self.total())
    }
}

const fn interp(name: &'static str, source: &'static str, output: &'static str) -> Case {
    Case { name,
           mode: Mode::Interp,
           source,
           expected: Expected::Output(output) }
}

const fn print(name: &'static str, source: &'static str, output: &'static str) -> Case {
    Case { name,
           mode: Mode::Print,
           source,
           expected: Expected::Output(output) }
}

const fn pretty(name: &'static str, source: &'static str, output: &'static str) -> Case {
    Case { name,
           mode: Mode::PrettyPrint,
           source,
           expected: Expected::Output(output) }
}

const fn fails(name: &'static str, source: &'static str, message: &'static str) -> Case {
    Case { name,
           mode: Mode::Interp,
           source,
           expected: Expected::Error(message) }
}

const FACTORIAL: &str = "_let factrl = _fun (factrl)
                _fun (x)
                  _if x == 1
                  _then 1
                  _else x * factrl(factrl)(x + -1)
_in  factrl(factrl)(10)";

/// The cases run by `msdscript --test`.
pub const CASES: &[Case] = &[
    interp("precedence", "1 + 2 * 3", "7"),
    interp("negative literals", "-4 + 1", "-3"),
    interp("let shadowing", "_let x = 5 _in _let x = x _in x", "5"),
    interp("inner let does not leak", "_let x=5 _in (_let x=3 _in x+2)", "5"),
    interp("let body reaches outer binding", "_let x = 2 _in _let y = x + 1 _in x * y", "6"),
    interp("equality of numbers", "1 == 1", "_true"),
    interp("equality across kinds", "1 == _true", "_false"),
    interp("let binds tighter than equality", "_let x = 1 _in x == 1", "_true"),
    interp("conditional", "_if 1 == 2 _then 5 _else 6", "6"),
    interp("untaken branch is not evaluated", "_if _true _then 1 _else y", "1"),
    interp("immediate call", "(_fun (x) x * x)(7)", "49"),
    interp("curried call", "(_fun (x) _fun (y) x + y)(3)(4)", "7"),
    interp("closure captures definition scope",
           "_let y = 8 _in _let f = _fun (x) x * y _in f(2)",
           "16"),
    interp("closure ignores call-site binding",
           "_let y = 8 _in _let f = _fun (x) x * y _in _let y = 100 _in f(2)",
           "16"),
    interp("factorial by self application", FACTORIAL, "3628800"),
    interp("function value", "_let f = _fun (x) x + 1 _in f", "(_fun (x) (x+1))"),
    fails("unbound variable", "x + 1", "Variable has no value"),
    fails("add a boolean", "_true + 1", "You can't add a non-number!"),
    fails("mult a function", "(_fun (x) x) * 2", "You can't mult a non-number!"),
    fails("numeric condition", "_if 1 _then 2 _else 3", "Condition is not a boolean!"),
    fails("call a number", "5(1)", "Cannot call a non-function!"),
    fails("overflow", "9223372036854775807 + 1", "Integer overflow!"),
    fails("empty input", "", "Invalid Input!"),
    fails("empty parentheses", "()", "Invalid Input!"),
    fails("unclosed parenthesis", "(1 + 2", "Missing close parenthesis!"),
    fails("trailing input", "1 2", "Invalid Input!"),
    fails("bare minus", "-", "Invalid Input!"),
    fails("unknown keyword", "_foo", "Invalid Input!"),
    fails("let without equals", "_let x 5 _in x", "Consume mismatch!"),
    fails("if without else", "_if _true _then 1", "Consume mismatch!"),
    print("addition nests right", "1 + 2 + 3", "(1+(2+3))"),
    print("let", "_let x = 5 _in x + 1", "(_let x=5 _in (x+1))"),
    print("if", "_if x == 1 _then 1 _else 2", "(_if (x==1) _then 1 _else 2)"),
    print("fun", "_fun (x) x", "(_fun (x) x)"),
    print("chained calls", "f(1)(2)", "f(1)(2)"),
    print("booleans", "_true == _false", "(_true==_false)"),
    pretty("right-nested addition", "1 + 2 * 3", "1 + 2 * 3"),
    pretty("left-nested addition", "(1 + 2) + 3", "(1 + 2) + 3"),
    pretty("sum inside product", "1 * (2 + 3)", "1 * (2 + 3)"),
    pretty("left-nested product", "(8 * 1) * y", "(8 * 1) * y"),
    pretty("products of sums", "(2 * x + 3) * (4 + y)", "(2 * x + 3) * (4 + y)"),
    pretty("negative operands", "(-1 * -3) * 6", "(-1 * -3) * 6"),
    pretty("let inside product",
           "(2 * _let x = 5 _in x + 1) * 3",
           "(2 * _let x = 5\n       _in  x + 1) * 3"),
    pretty("if", "_if x == 1 _then 1 _else 2", "_if x == 1\n  _then 1\n  _else 2"),
    pretty("fun as let rhs",
           "_let f = _fun (x) x + 1 _in f(2)",
           "_let f = _fun (x)\n           x + 1\n  _in  f(2)"),
];

impl Case {
    /// Runs the case and compares the outcome with the expectation.
    pub fn check(&self) -> Result<(), Failure> {
        let (expected, actual) = match (self.expected, crate::run(self.mode, self.source)) {
            (Expected::Output(want), Ok(got)) => (want, got),
            (Expected::Error(want), Err(err)) => (want, err.to_string()),
            (Expected::Output(want), Err(err)) => (want, format!("error: {err}")),
            (Expected::Error(want), Ok(got)) => (want, format!("output: {got}")),
        };

        if expected == actual {
            Ok(())
        } else {
            Err(Failure { name: self.name,
                          expected: expected.to_string(),
                          actual })
        }
    }
}

/// Runs every case in `cases`.
#[must_use]
pub fn run_cases(cases: &[Case]) -> Report {
    let mut report = Report::default();

    for case in cases {
        match case.check() {
            Ok(()) => report.passed += 1,
            Err(failure) => {
                tracing::debug!(%failure, "case failed");
                report.failures.push(failure);
            },
        }
    }

    report
}

/// Runs the built-in golden cases.
///
/// # Example
/// ```
/// let report = msdscript::suite::run();
///
/// assert!(report.all_passed(), "{report}");
/// ```
#[must_use]
pub fn run() -> Report {
    run_cases(CASES)
}
