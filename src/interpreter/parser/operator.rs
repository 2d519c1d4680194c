use crate::ast::{BinaryOperator, Function};

/// An entry on the operator stack.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Pending {
    /// A binary operator waiting for its right operand to be complete.
    Binary(BinaryOperator),
    /// A unary minus waiting for its operand.
    Negate,
    /// A builtin function waiting for its (usually parenthesised) argument.
    Function(Function),
    /// The sentinel pushed for `(`. Flushing never crosses it.
    OpenParen,
}

/// Tier of `+` and `-`, the loosest binary operators.
pub const ADDITIVE: u8 = 1;
/// Tier of `*` and `/`.
pub const MULTIPLICATIVE: u8 = 2;
/// Tier of `^`.
pub const POWER: u8 = 3;
/// Tier of unary minus and function application.
pub const UNARY: u8 = 4;

impl Pending {
    /// Returns the precedence tier of the entry. Higher binds tighter.
    ///
    /// The sentinel sits below every operator so that a flush stops on it.
    ///
    /// # Example
    /// ```
    /// use alg::{ast::BinaryOperator, interpreter::parser::operator::Pending};
    ///
    /// assert!(Pending::Binary(BinaryOperator::Mul).precedence()
    ///         > Pending::Binary(BinaryOperator::Sub).precedence());
    /// assert_eq!(Pending::OpenParen.precedence(), 0);
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::OpenParen => 0,
            Self::Binary(BinaryOperator::Add | BinaryOperator::Sub) => ADDITIVE,
            Self::Binary(BinaryOperator::Mul | BinaryOperator::Div) => MULTIPLICATIVE,
            Self::Binary(BinaryOperator::Pow) => POWER,
            Self::Negate | Self::Function(_) => UNARY,
        }
    }

    /// Returns `true` for entries that take a single operand.
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Negate | Self::Function(_))
    }

    /// The source text the entry was pushed for, used in error messages.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Binary(BinaryOperator::Add) => "+",
            Self::Binary(BinaryOperator::Sub) | Self::Negate => "-",
            Self::Binary(BinaryOperator::Mul) => "*",
            Self::Binary(BinaryOperator::Div) => "/",
            Self::Binary(BinaryOperator::Pow) => "^",
            Self::Function(function) => function.name(),
            Self::OpenParen => "(",
        }
    }
}
