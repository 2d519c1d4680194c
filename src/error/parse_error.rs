use thiserror::Error;

/// Represents all errors that can occur while parsing a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The left-hand side of an assignment names a protected constant.
    ///
    /// Raised before the right-hand side is looked at.
    #[error("cannot assign to constant '{name}'")]
    AssignToConstant {
        /// The constant name.
        name: String,
    },
    /// A character that cannot start any token, or an operator that cannot
    /// be folded where it appears.
    #[error("unexpected token '{token}'")]
    UnexpectedToken {
        /// The offending text.
        token: String,
    },
    /// The operand and operator stacks did not reduce to a single tree.
    #[error("invalid expression '{expression}'")]
    InvalidExpression {
        /// The expression text that failed to reduce.
        expression: String,
    },
}

impl ParseError {
    pub(crate) fn unexpected(token: impl Into<String>) -> Self {
        Self::UnexpectedToken { token: token.into() }
    }

    pub(crate) fn invalid(expression: impl Into<String>) -> Self {
        Self::InvalidExpression { expression: expression.into() }
    }
}
