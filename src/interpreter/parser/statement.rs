use log::debug;
use logos::Logos;

use crate::{
    ast::{Expr, Function, Statement},
    error::{Error, ParseError},
    interpreter::{
        environment::is_protected_constant,
        lexer::Token,
        options::Options,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a single line into a statement.
///
/// The line is split on its first `=`. The trimmed left side names the output
/// variable and the right side is parsed as an expression. A line without `=`
/// is a lookup: `x` becomes the statement `x = x`, which echoes the current
/// value when run.
///
/// Assigning to a protected constant (`pi`, `PI`, `e`, `E`) is rejected before
/// the right side is looked at, so `pi = )` reports the assignment rather than
/// the malformed expression.
///
/// # Errors
/// - `AssignToConstant` when the target is a protected constant.
/// - `InvalidExpression` when the target is not a single identifier, or names a
///   builtin function.
/// - Any error from [`parse_expression`].
///
/// # Example
/// ```
/// use alg::{
///     error::ParseError,
///     interpreter::{options::Options, parser::statement::parse_statement},
/// };
///
/// let options = Options::default();
///
/// let statement = parse_statement("area = pi * r ^ 2", &options).unwrap();
/// assert_eq!(statement.target, "area");
///
/// let error = parse_statement("e = 2", &options).unwrap_err();
/// assert_eq!(error, ParseError::AssignToConstant { name: "e".to_string() });
/// ```
pub fn parse_statement(line: &str, options: &Options) -> ParseResult<Statement> {
    let Some((target, source)) = line.split_once('=') else {
        let name = parse_target(line)?;
        debug!("parsed lookup of '{name}'");
        return Ok(Statement::new(name, Expr::variable(name)));
    };

    let target = target.trim();
    if is_protected_constant(target) {
        return Err(ParseError::AssignToConstant { name: target.to_string() });
    }
    let target = parse_target(target)?;

    let expr = parse_expression(source.trim(), options)?;
    let statement = Statement::new(target, expr);
    debug!("parsed statement {statement}");
    Ok(statement)
}

/// Parses a batch of lines, skipping blank ones.
///
/// Every line is parsed before any is returned, so a script with a syntax error
/// anywhere runs nothing. Each statement is paired with its 1-based line
/// number.
///
/// # Errors
/// Returns the first parse error, wrapped in `Error::Line`.
pub fn parse_lines<'a, I>(lines: I, options: &Options) -> Result<Vec<(usize, Statement)>, Error>
    where I: IntoIterator<Item = &'a str>
{
    lines.into_iter()
         .enumerate()
         .filter(|(_, line)| !line.trim().is_empty())
         .map(|(index, line)| {
             let number = index + 1;
             parse_statement(line, options).map(|statement| (number, statement))
                                           .map_err(|e| Error::from(e).at_line(number))
         })
         .collect()
}

/// Checks that `text` is a single identifier usable as a variable.
fn parse_target(text: &str) -> ParseResult<&str> {
    let name = text.trim();
    let mut lexer = Token::lexer(name);

    match (lexer.next(), lexer.next()) {
        (Some(Ok(Token::Identifier(identifier))), None)
            if Function::from_name(&identifier).is_none() =>
        {
            Ok(name)
        },
        _ => Err(ParseError::invalid(name)),
    }
}
