/// Binary operator evaluation.
///
/// Applies `+ - * / ^` with plain IEEE-754 semantics.
pub mod binary;

/// Core evaluation logic and the interpreter.
///
/// Contains the tree walk, statement execution, and the `Interpreter` that
/// owns an environment across statements.
pub mod core;

/// Builtin function evaluation.
///
/// Applies `sin cos tan log ln sqrt`, including the exact results for
/// trigonometric inputs of `±π/2`.
pub mod function;
