use log::debug;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        environment::{self, Environment},
        evaluator::{binary::eval_binary, function::eval_function},
        options::Options,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Expr {
    /// Evaluates the tree against `env`.
    ///
    /// Children are evaluated before their parent. The only failure is a
    /// reference to an unbound variable; arithmetic oddities such as division
    /// by zero produce infinities or NaN instead.
    ///
    /// # Example
    /// ```
    /// use alg::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{environment::Environment, options::Options},
    /// };
    ///
    /// let env = Environment::with_bindings([("x", 4.0)]);
    /// let expr = Expr::binary(Expr::variable("x"), BinaryOperator::Pow, Expr::literal(0.5));
    ///
    /// assert_eq!(expr.evaluate(&env, &Options::default()).unwrap(), 2.0);
    /// ```
    pub fn evaluate(&self, env: &Environment, options: &Options) -> EvalResult<f64> {
        match self {
            Self::Literal { value } => Ok(*value),
            Self::Variable { name } => env.get(name),
            Self::BinaryOp { left, op, right } => {
                let left = left.evaluate(env, options)?;
                let right = right.evaluate(env, options)?;
                Ok(eval_binary(*op, left, right))
            },
            Self::Negate { expr } => Ok(-expr.evaluate(env, options)?),
            Self::FunctionCall { function, argument } => {
                let argument = argument.evaluate(env, options)?;
                Ok(eval_function(*function, argument, options.snap_trig))
            },
        }
    }
}

impl Statement {
    /// Evaluates the statement's expression without touching `env`.
    pub fn resolve(&self, env: &Environment, options: &Options) -> EvalResult<f64> {
        self.expr.evaluate(env, options)
    }

    /// Evaluates the statement and binds the result to its target.
    ///
    /// The write happens only after evaluation succeeds, so a failing
    /// statement leaves `env` exactly as it was.
    pub fn execute(&self, env: &mut Environment, options: &Options) -> EvalResult<f64> {
        let value = self.resolve(env, options)?;
        env.set(self.target.as_str(), value);
        debug!("{} = {value}", self.target);
        Ok(value)
    }
}

/// Runs statements against an environment it owns.
///
/// ## Usage
///
/// An `Interpreter` is created once per REPL session or script run, and every
/// statement of that run goes through [`Interpreter::run`], so assignments made
/// by earlier statements are visible to later ones.
///
/// ```
/// use alg::{interpreter::evaluator::core::Interpreter, parse};
///
/// let mut interpreter = Interpreter::new();
///
/// interpreter.run(&parse("x = 3").unwrap()).unwrap();
/// let y = interpreter.run(&parse("y = x * 2").unwrap()).unwrap();
///
/// assert_eq!(y, 6.0);
/// assert_eq!(interpreter.get("y").unwrap(), 6.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    environment: Environment,
    options:     Options,
}

impl Interpreter {
    /// Creates an interpreter over a fresh environment with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interpreter over `environment` using `options`.
    #[must_use]
    pub const fn with_environment(environment: Environment, options: Options) -> Self {
        Self { environment,
               options }
    }

    /// Runs `statement`: evaluates it, stores the result under its target, and
    /// returns the result.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` if the expression reads an
    /// unbound variable. The environment is unchanged in that case.
    pub fn run(&mut self, statement: &Statement) -> EvalResult<f64> {
        statement.execute(&mut self.environment, &self.options)
    }

    /// Returns the value bound to `name`.
    pub fn get(&self, name: &str) -> EvalResult<f64> {
        self.environment.get(name)
    }

    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Iterates over every variable in unspecified order.
    pub fn iter(&self) -> environment::Iter<'_> {
        self.environment.iter()
    }
}
