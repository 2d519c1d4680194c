//! # alg
//!
//! alg is a line-oriented arithmetic expression language written in Rust.
//! Every line is an assignment `name = expression` (or a bare `name`, which
//! looks the variable up) evaluated against a persistent set of numeric
//! variables.
//!
//! ```
//! use alg::{interpreter::evaluator::core::Interpreter, run_script};
//!
//! let mut interpreter = Interpreter::new();
//! let results = run_script("x = 3\ny = 2\nz = (10 - x) * pi / y ^ 2", &mut interpreter).unwrap();
//!
//! assert_eq!(results[0], ("x".to_string(), 3.0));
//! assert_eq!(results.len(), 3);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::info;

use crate::{
    ast::Statement,
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::core::Interpreter,
        options::Options,
        parser::statement::{parse_lines, parse_statement},
    },
};

/// Defines the structure of parsed lines.
///
/// This module declares the `Expr` tree, the operators and builtin functions
/// it is built from, and the `Statement` pairing a tree with the variable it
/// assigns. Trees are built by the parser and read by the evaluator.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// This module defines every error that a line can fail with, and the
/// crate-level `Error` that ties a failure to its script line.
///
/// # Responsibilities
/// - Defines error enums for parser and evaluator failures.
/// - Attaches line numbers for script runs.
/// - Integrates with `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates parsing and evaluation.
///
/// This module ties together the lexer, the shunting-yard parser, the
/// evaluator and the environment, and exposes the `Interpreter` that runs
/// statements one after another.
///
/// # Responsibilities
/// - Coordinates lexer, parser, evaluator and environment.
/// - Provides entry points for parsing and running lines.
/// - Carries the dialect options between phases.
pub mod interpreter;
/// General utilities.
///
/// Currently the parsing of `name=value` bindings supplied on the command
/// line.
pub mod util;

/// Parses one line with the default options.
///
/// # Example
/// ```
/// let statement = alg::parse("x = 5 + 2").unwrap();
/// assert_eq!(statement.target, "x");
/// ```
pub fn parse(line: &str) -> Result<Statement, ParseError> {
    parse_statement(line, &Options::default())
}

/// Runs `statement` against `environment` with the default options and
/// returns the value it assigned.
///
/// # Example
/// ```
/// use alg::interpreter::environment::Environment;
///
/// let mut env = Environment::new();
/// let value = alg::run(&alg::parse("x = 5 ^ 2").unwrap(), &mut env).unwrap();
///
/// assert_eq!(value, 25.0);
/// assert_eq!(env.get("x").unwrap(), 25.0);
/// ```
pub fn run(statement: &Statement, environment: &mut Environment) -> Result<f64, RuntimeError> {
    statement.execute(environment, &Options::default())
}

/// Runs a whole script and returns each statement's target and value in order.
///
/// Blank lines are skipped. Every line is parsed before anything runs, so a
/// syntax error anywhere leaves the interpreter untouched. Statements then run
/// in order and the first runtime error stops the script; assignments made by
/// earlier statements are kept.
///
/// # Errors
/// Returns the first parse or runtime error, tagged with its 1-based line.
///
/// # Example
/// ```
/// use alg::{error::Error, interpreter::evaluator::core::Interpreter, run_script};
///
/// let mut interpreter = Interpreter::new();
///
/// let error = run_script("a = 1\nb = a +", &mut interpreter).unwrap_err();
/// assert!(matches!(error, Error::Line { line: 2, .. }));
/// assert!(interpreter.get("a").is_err());
/// ```
pub fn run_script(source: &str,
                  interpreter: &mut Interpreter)
                  -> Result<Vec<(String, f64)>, Error> {
    let mut results = Vec::new();
    run_script_with(source, interpreter, |name, value| results.push((name.to_string(), value)))?;
    Ok(results)
}

/// Runs a whole script, handing each statement's target and value to
/// `on_result` as soon as the statement has run.
///
/// Parsing works as in [`run_script`]. A runtime error stops the script after
/// `on_result` has seen every statement before it.
///
/// # Errors
/// Returns the first parse or runtime error, tagged with its 1-based line.
///
/// # Example
/// ```
/// use alg::{interpreter::evaluator::core::Interpreter, run_script_with};
///
/// let mut interpreter = Interpreter::new();
/// let mut seen = Vec::new();
///
/// let error = run_script_with("a = 1\nb = missing", &mut interpreter, |name, value| {
///                 seen.push(format!("{name} = {value}"));
///             }).unwrap_err();
///
/// assert_eq!(seen, ["a = 1"]);
/// assert_eq!(error.to_string(), "line 2: unknown variable 'missing'");
/// ```
pub fn run_script_with<F>(source: &str,
                          interpreter: &mut Interpreter,
                          mut on_result: F)
                          -> Result<(), Error>
    where F: FnMut(&str, f64)
{
    let statements = parse_lines(source.lines(), interpreter.options())?;
    info!("running {} statements", statements.len());

    for (line, statement) in statements {
        let value = interpreter.run(&statement)
                               .map_err(|e| Error::from(e).at_line(line))?;
        on_result(&statement.target, value);
    }

    Ok(())
}
