use std::rc::Rc;

/// An abstract syntax tree (AST) node representing an MSDScript expression.
///
/// `Expr` is a closed set of syntactic forms. Trees are immutable once built;
/// children are reference counted so that closures created during evaluation
/// can hold on to a function body without copying it.
///
/// Equality is structural: two expressions are equal when they are the same
/// variant with equal payloads and recursively equal children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Num(i64),
    /// Reference to a variable by name.
    Var(String),
    /// Addition of two expressions.
    Add {
        /// Left operand.
        lhs: Rc<Self>,
        /// Right operand.
        rhs: Rc<Self>,
    },
    /// Multiplication of two expressions.
    Mult {
        /// Left operand.
        lhs: Rc<Self>,
        /// Right operand.
        rhs: Rc<Self>,
    },
    /// A non-recursive binding: `_let name = rhs _in body`.
    Let {
        /// Name being bound.
        name: String,
        /// Expression whose value is bound.
        rhs:  Rc<Self>,
        /// Expression evaluated with the binding in scope.
        body: Rc<Self>,
    },
    /// A boolean literal, `_true` or `_false`.
    Bool(bool),
    /// Conditional expression.
    If {
        /// The condition; must evaluate to a boolean.
        condition:   Rc<Self>,
        /// Expression evaluated if the condition is true.
        then_branch: Rc<Self>,
        /// Expression evaluated if the condition is false.
        else_branch: Rc<Self>,
    },
    /// Value equality of two expressions.
    Eq {
        /// Left operand.
        lhs: Rc<Self>,
        /// Right operand.
        rhs: Rc<Self>,
    },
    /// A single-parameter function: `_fun (param) body`.
    Fun {
        /// Parameter name.
        param: String,
        /// Function body.
        body:  Rc<Self>,
    },
    /// Function application: `callee(arg)`.
    Call {
        /// Expression producing the function.
        callee: Rc<Self>,
        /// The argument.
        arg:    Rc<Self>,
    },
}

impl Expr {
    #[must_use]
    pub const fn num(value: i64) -> Self {
        Self::Num(value)
    }

    #[must_use]
    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Bool(value)
    }

    #[must_use]
    pub fn add(lhs: Self, rhs: Self) -> Self {
        Self::Add { lhs: Rc::new(lhs),
                    rhs: Rc::new(rhs), }
    }

    #[must_use]
    pub fn mult(lhs: Self, rhs: Self) -> Self {
        Self::Mult { lhs: Rc::new(lhs),
                     rhs: Rc::new(rhs), }
    }

    #[must_use]
    pub fn equal(lhs: Self, rhs: Self) -> Self {
        Self::Eq { lhs: Rc::new(lhs),
                   rhs: Rc::new(rhs), }
    }

    #[must_use]
    pub fn let_in(name: impl Into<String>, rhs: Self, body: Self) -> Self {
        Self::Let { name: name.into(),
                    rhs:  Rc::new(rhs),
                    body: Rc::new(body), }
    }

    #[must_use]
    pub fn if_then_else(condition: Self, then_branch: Self, else_branch: Self) -> Self {
        Self::If { condition:   Rc::new(condition),
                   then_branch: Rc::new(then_branch),
                   else_branch: Rc::new(else_branch), }
    }

    #[must_use]
    pub fn fun(param: impl Into<String>, body: Self) -> Self {
        Self::Fun { param: param.into(),
                    body:  Rc::new(body), }
    }

    #[must_use]
    pub fn call(callee: Self, arg: Self) -> Self {
        Self::Call { callee: Rc::new(callee),
                     arg:    Rc::new(arg), }
    }

    /// Compares against a possibly absent expression.
    ///
    /// An absent operand is never equal; otherwise this is structural
    /// equality.
    ///
    /// # Example
    /// ```
    /// use msdscript::ast::Expr;
    ///
    /// let seven = Expr::num(7);
    ///
    /// assert!(seven.equals(Some(&seven)));
    /// assert!(!seven.equals(None));
    /// assert!(!Expr::num(1).equals(Some(&Expr::var("x"))));
    /// ```
    #[must_use]
    pub fn equals(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|other| self == other)
    }

    /// Returns `true` if a variable reference occurs anywhere in the tree.
    ///
    /// Bound occurrences count; a `_fun` parameter on its own does not.
    #[must_use]
    pub fn has_variable(&self) -> bool {
        match self {
            Self::Num(_) | Self::Bool(_) => false,
            Self::Var(_) => true,
            Self::Add { lhs, rhs } | Self::Mult { lhs, rhs } | Self::Eq { lhs, rhs } => {
                lhs.has_variable() || rhs.has_variable()
            },
            Self::Let { rhs, body, .. } => rhs.has_variable() || body.has_variable(),
            Self::If { condition,
                       then_branch,
                       else_branch, } => {
                condition.has_variable() || then_branch.has_variable() || else_branch.has_variable()
            },
            Self::Fun { body, .. } => body.has_variable(),
            Self::Call { callee, arg } => callee.has_variable() || arg.has_variable(),
        }
    }

    /// Replaces free occurrences of `name` with `replacement`.
    ///
    /// A `_let` that rebinds `name` substitutes into its bound expression only,
    /// and a `_fun` whose parameter is `name` is left untouched. The
    /// replacement is inserted as is, so free variables inside it can be
    /// captured by an enclosing binder.
    ///
    /// # Example
    /// ```
    /// use msdscript::ast::Expr;
    ///
    /// let e = Expr::add(Expr::var("x"), Expr::num(5));
    /// let replaced = e.subst("x", &Expr::mult(Expr::num(2), Expr::num(3)));
    ///
    /// assert_eq!(replaced.to_pretty_string(), "2 * 3 + 5");
    /// ```
    #[must_use]
    pub fn subst(&self, name: &str, replacement: &Self) -> Self {
        let sub = |e: &Rc<Self>| Rc::new(e.subst(name, replacement));

        match self {
            Self::Num(_) | Self::Bool(_) => self.clone(),
            Self::Var(var) => {
                if var == name {
                    replacement.clone()
                } else {
                    self.clone()
                }
            },
            Self::Add { lhs, rhs } => Self::Add { lhs: sub(lhs),
                                                  rhs: sub(rhs), },
            Self::Mult { lhs, rhs } => Self::Mult { lhs: sub(lhs),
                                                    rhs: sub(rhs), },
            Self::Eq { lhs, rhs } => Self::Eq { lhs: sub(lhs),
                                                rhs: sub(rhs), },
            Self::Let { name: bound,
                        rhs,
                        body, } => {
                let body = if bound == name { Rc::clone(body) } else { sub(body) };
                Self::Let { name: bound.clone(),
                            rhs: sub(rhs),
                            body }
            },
            Self::If { condition,
                       then_branch,
                       else_branch, } => Self::If { condition:   sub(condition),
                                                    then_branch: sub(then_branch),
                                                    else_branch: sub(else_branch), },
            Self::Fun { param, body } => {
                if param == name {
                    self.clone()
                } else {
                    Self::Fun { param: param.clone(),
                                body:  sub(body), }
                }
            },
            Self::Call { callee, arg } => Self::Call { callee: sub(callee),
                                                       arg:    sub(arg), },
        }
    }
}
