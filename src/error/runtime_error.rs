use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to read a variable that has never been bound.
    #[error("unknown variable '{name}'")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
}
