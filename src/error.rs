/// Parsing errors.
///
/// Defines the errors raised while splitting a line into target and
/// expression and while folding the expression tokens into a tree.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a parsed statement against an
/// environment.
pub mod runtime_error;

use thiserror::Error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while running a script.
#[derive(Debug, Error)]
pub enum Error {
    /// The line could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The statement could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// An error tied to a line of a script.
    #[error("line {line}: {source}")]
    Line {
        /// The 1-based line number.
        line:   usize,
        /// The underlying failure.
        source: Box<Self>,
    },
}

impl Error {
    /// Attaches a 1-based source line number to `self`.
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        Self::Line { line,
                     source: Box::new(self) }
    }

    /// Returns the underlying error with any line information stripped.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Line { source, .. } => source.root(),
            other => other,
        }
    }
}
