use std::fmt::{self, Write};

use crate::ast::Expr;

impl Expr {
    /// Writes the canonical form of the expression to `out`.
    ///
    /// # Example
    /// ```
    /// use msdscript::ast::Expr;
    ///
    /// let e = Expr::let_in("x", Expr::num(5), Expr::add(Expr::var("x"), Expr::num(1)));
    /// let mut out = String::new();
    /// e.print(&mut out).unwrap();
    ///
    /// assert_eq!(out, "(_let x=5 _in (x+1))");
    /// ```
    pub fn print<W: Write>(&self, out: &mut W) -> fmt::Result {
        match self {
            Self::Num(n) => write!(out, "{n}"),
            Self::Var(name) => out.write_str(name),
            Self::Bool(true) => out.write_str("_true"),
            Self::Bool(false) => out.write_str("_false"),
            Self::Add { lhs, rhs } => print_binary(out, lhs, "+", rhs),
            Self::Mult { lhs, rhs } => print_binary(out, lhs, "*", rhs),
            Self::Eq { lhs, rhs } => print_binary(out, lhs, "==", rhs),
            Self::Let { name, rhs, body } => {
                write!(out, "(_let {name}=")?;
                rhs.print(out)?;
                out.write_str(" _in ")?;
                body.print(out)?;
                out.write_char(')')
            },
            Self::If { condition,
                       then_branch,
                       else_branch, } => {
                out.write_str("(_if ")?;
                condition.print(out)?;
                out.write_str(" _then ")?;
                then_branch.print(out)?;
                out.write_str(" _else ")?;
                else_branch.print(out)?;
                out.write_char(')')
            },
            Self::Fun { param, body } => {
                write!(out, "(_fun ({param}) ")?;
                body.print(out)?;
                out.write_char(')')
            },
            Self::Call { callee, arg } => {
                callee.print(out)?;
                out.write_char('(')?;
                arg.print(out)?;
                out.write_char(')')
            },
        }
    }
}

fn print_binary<W: Write>(out: &mut W, lhs: &Expr, op: &str, rhs: &Expr) -> fmt::Result {
    out.write_char('(')?;
    lhs.print(out)?;
    out.write_str(op)?;
    rhs.print(out)?;
    out.write_char(')')
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}
