use crate::ast::Expr;

/// How far a continuation line (`_in`, `_then`, `_else`, or a `_fun` body) is
/// indented past the column of the keyword that opened the construct.
pub const INDENT: usize = 2;

/// Binding strength of the context an expression is printed in.
///
/// A binary operator is parenthesized when the context is at least as strong
/// as the operator itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Top level, or a position closed by a keyword or parenthesis.
    None,
    /// Operand of `==`, or a `_let` bound expression or body.
    Eq,
    /// Operand of `+`.
    Add,
    /// Operand of `*`.
    Mult,
    /// Callee of a function application.
    Call,
}

/// Layout of one binary operator: its symbol, its own level, and the levels
/// its operands are printed at.
struct Operator {
    symbol: &'static str,
    level:  Precedence,
    lhs:    Precedence,
    rhs:    Precedence,
}

const ADD: Operator = Operator { symbol: " + ",
                                 level:  Precedence::Add,
                                 lhs:    Precedence::Add,
                                 rhs:    Precedence::Eq, };

const MULT: Operator = Operator { symbol: " * ",
                                  level:  Precedence::Mult,
                                  lhs:    Precedence::Mult,
                                  rhs:    Precedence::Add, };

const EQ: Operator = Operator { symbol: " == ",
                                level:  Precedence::Eq,
                                lhs:    Precedence::Eq,
                                rhs:    Precedence::None, };

/// A string builder that knows the column of its current line.
///
/// The pretty printer asks for the column before printing a `_let`, `_if` or
/// `_fun` keyword and starts continuation lines relative to it.
#[derive(Debug, Default)]
pub struct PrettyPrinter {
    out:        String,
    line_start: usize,
}

impl PrettyPrinter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of characters written since the last newline.
    #[must_use]
    pub fn column(&self) -> usize {
        self.out.len() - self.line_start
    }

    pub fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Ends the current line and indents the next one to `column`.
    pub fn newline_at(&mut self, column: usize) {
        self.out.push('\n');
        self.line_start = self.out.len();
        self.out.extend(std::iter::repeat_n(' ', column));
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}

impl Expr {
    /// Pretty prints the expression at top level.
    ///
    /// # Example
    /// ```
    /// use msdscript::ast::Expr;
    ///
    /// let e = Expr::mult(Expr::mult(Expr::num(2),
    ///                               Expr::let_in("x",
    ///                                            Expr::num(5),
    ///                                            Expr::add(Expr::var("x"), Expr::num(1)))),
    ///                    Expr::num(3));
    ///
    /// assert_eq!(e.to_pretty_string(), "(2 * _let x = 5\n       _in  x + 1) * 3");
    /// ```
    #[must_use]
    pub fn to_pretty_string(&self) -> String {
        let mut printer = PrettyPrinter::new();
        self.pretty_print(&mut printer);
        printer.finish()
    }

    pub fn pretty_print(&self, printer: &mut PrettyPrinter) {
        self.pretty_print_at(printer, Precedence::None, false);
    }

    /// Pretty prints the expression in a given context.
    ///
    /// # Parameters
    /// - `printer`: Output, positioned where this expression starts.
    /// - `prec`: Binding strength of the surrounding context.
    /// - `keyword_parens`: Whether anything is printed after this expression
    ///   at the same level. `_let`, `_if` and `_fun` extend as far right as
    ///   they can, so they are parenthesized when this is set.
    pub fn pretty_print_at(&self,
                           printer: &mut PrettyPrinter,
                           prec: Precedence,
                           keyword_parens: bool) {
        match self {
            Self::Num(_) | Self::Var(_) | Self::Bool(_) => printer.write(&self.to_string()),
            Self::Add { lhs, rhs } => {
                pretty_binary(printer, &ADD, lhs, rhs, prec, keyword_parens);
            },
            Self::Mult { lhs, rhs } => {
                pretty_binary(printer, &MULT, lhs, rhs, prec, keyword_parens);
            },
            Self::Eq { lhs, rhs } => {
                pretty_binary(printer, &EQ, lhs, rhs, prec, keyword_parens);
            },
            Self::Let { name, rhs, body } => {
                open(printer, keyword_parens);
                let column = printer.column();

                printer.write("_let ");
                printer.write(name);
                printer.write(" = ");
                rhs.pretty_print_at(printer, Precedence::Eq, false);

                printer.newline_at(column + INDENT);
                printer.write("_in  ");
                body.pretty_print_at(printer, Precedence::Eq, false);
                close(printer, keyword_parens);
            },
            Self::If { condition,
                       then_branch,
                       else_branch, } => {
                open(printer, keyword_parens);
                let column = printer.column();

                printer.write("_if ");
                condition.pretty_print_at(printer, Precedence::None, false);

                printer.newline_at(column + INDENT);
                printer.write("_then ");
                then_branch.pretty_print_at(printer, Precedence::None, false);

                printer.newline_at(column + INDENT);
                printer.write("_else ");
                else_branch.pretty_print_at(printer, Precedence::None, false);
                close(printer, keyword_parens);
            },
            Self::Fun { param, body } => {
                open(printer, keyword_parens);
                let column = printer.column();

                printer.write("_fun (");
                printer.write(param);
                printer.write(")");

                printer.newline_at(column + INDENT);
                body.pretty_print_at(printer, Precedence::None, false);
                close(printer, keyword_parens);
            },
            Self::Call { callee, arg } => {
                callee.pretty_print_at(printer, Precedence::Call, true);
                printer.write("(");
                arg.pretty_print_at(printer, Precedence::None, false);
                printer.write(")");
            },
        }
    }
}

fn pretty_binary(printer: &mut PrettyPrinter,
                 op: &Operator,
                 lhs: &Expr,
                 rhs: &Expr,
                 prec: Precedence,
                 keyword_parens: bool) {
    let parens = prec >= op.level;

    open(printer, parens);
    lhs.pretty_print_at(printer, op.lhs, true);
    printer.write(op.symbol);
    // A parenthesized operator closes its right operand itself.
    rhs.pretty_print_at(printer, op.rhs, keyword_parens && !parens);
    close(printer, parens);
}

fn open(printer: &mut PrettyPrinter, parens: bool) {
    if parens {
        printer.write("(");
    }
}

fn close(printer: &mut PrettyPrinter, parens: bool) {
    if parens {
        printer.write(")");
    }
}
