/// The shunting-yard driver.
///
/// Streams tokens from the lexer into an operand stack and an operator stack
/// and folds them into a single expression tree.
pub mod core;

/// Entries of the operator stack.
///
/// Defines the pending operators, function tags and the open-parenthesis
/// sentinel, together with the precedence tiers used when flushing.
pub mod operator;

/// Statement parsing.
///
/// Splits a line into its target variable and expression, enforces the
/// protected constants, and parses batches of lines.
pub mod statement;
