//! Evaluation error taxonomy.

/// Reasons a formula fails to produce a result.
///
/// Every variant is shown to the user as the same `Invalid expression`
/// message; the distinction exists for logs and for the CLI exit code.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// One or more variables have no non-empty value bound.
    #[error("unresolved variables: {}", .0.join(", "))]
    Unresolved(Vec<String>),

    /// The substituted expression contains a character outside the
    /// arithmetic alphabet.
    #[error("invalid character {found:?} in expression {expression:?}")]
    MalformedCharacters { expression: String, found: char },

    /// The expression is empty or ends with an operator.
    #[error("incomplete expression {0:?}")]
    Incomplete(String),

    /// The arithmetic parser rejected the expression.
    #[error("syntax error at offset {offset}: {message}")]
    Syntax { offset: usize, message: String },

    /// Evaluation produced infinity or NaN (for example division by zero).
    #[error("result is not a finite number")]
    NonFinite,
}

impl EvalError {
    /// True when the failure is due to missing input rather than bad input.
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::Unresolved(_) | Self::Incomplete(_))
    }
}
