/// Names the arithmetic operation that failed, for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `+`
    Add,
    /// `*`
    Mult,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Mult => write!(f, "mult"),
        }
    }
}

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// A variable was looked up that no enclosing binding defines.
    #[error("Variable has no value")]
    UnboundVariable {
        /// The name of the variable.
        name: String,
    },
    /// One operand of `+` or `*` was not a number.
    #[error("You can't {operation} a non-number!")]
    NotANumber {
        /// The operation that was attempted.
        operation: Operation,
    },
    /// The condition of an `_if` evaluated to something other than a boolean.
    #[error("Condition is not a boolean!")]
    ConditionNotBoolean,
    /// The callee of a call evaluated to something other than a function.
    #[error("Cannot call a non-function!")]
    NotCallable,
    /// Integer arithmetic overflowed.
    #[error("Integer overflow!")]
    Overflow {
        /// The operation that overflowed.
        operation: Operation,
    },
}
