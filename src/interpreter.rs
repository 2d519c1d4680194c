/// The environment module holds the program's variables.
///
/// It declares the name-to-value store read by evaluation and written by
/// every successful statement, and the table of protected constants (`pi`,
/// `PI`, `e`, `E`) that statements may read but never assign.
pub mod environment;
/// The evaluator module executes expression trees and statements.
///
/// The evaluator walks a tree bottom-up against an environment, applies the
/// arithmetic operators and builtin functions, and writes each statement's
/// result back into the environment.
///
/// # Responsibilities
/// - Evaluates every expression variant.
/// - Applies the exact trigonometric results at `±π/2`.
/// - Reports reads of unbound variables.
pub mod evaluator;
/// The lexer module tokenizes expression text for the parser.
///
/// The lexer turns raw text into numbers, identifiers, operators and
/// parentheses, skipping whitespace and rejecting anything else.
pub mod lexer;
/// Dialect switches.
///
/// Holds the options that choose how `^` chains group and whether the
/// trigonometric functions snap at `±π/2`.
pub mod options;
/// The parser module builds expression trees and statements.
///
/// The parser splits a line into target and expression and folds the
/// expression's tokens into a tree with the shunting-yard algorithm.
///
/// # Responsibilities
/// - Enforces the protected constants on assignment.
/// - Orders operators by precedence, honouring parentheses and unary minus.
/// - Reports unexpected tokens and expressions that do not reduce.
pub mod parser;
