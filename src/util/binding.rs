use std::num::ParseFloatError;

use thiserror::Error;

/// Errors raised while parsing a `name=value` binding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// The argument has no `=`.
    #[error("binding '{argument}' is not of the form name=value")]
    MissingEquals {
        /// The argument as given.
        argument: String,
    },
    /// Nothing precedes the `=`.
    #[error("binding '{argument}' has an empty name")]
    EmptyName {
        /// The argument as given.
        argument: String,
    },
    /// The text after the `=` is not a number.
    #[error("binding '{argument}' has an invalid value: {source}")]
    InvalidValue {
        /// The argument as given.
        argument: String,
        /// Why the value failed to parse.
        source:   ParseFloatError,
    },
}

/// Parses a `name=value` argument into a binding.
///
/// The argument is split on its first `=`; the name is trimmed and the value
/// is parsed as a decimal float. Names are not checked against the protected
/// constants: a binding applied at start-up may replace `pi` or `e`.
///
/// # Errors
/// Returns a [`BindingError`] describing the malformed part.
///
/// # Example
/// ```
/// use alg::util::binding::parse_binding;
///
/// assert_eq!(parse_binding("rate=0.25").unwrap(), ("rate".to_string(), 0.25));
/// assert!(parse_binding("rate").is_err());
/// ```
pub fn parse_binding(argument: &str) -> Result<(String, f64), BindingError> {
    let Some((name, value)) = argument.split_once('=') else {
        return Err(BindingError::MissingEquals { argument: argument.to_string() });
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(BindingError::EmptyName { argument: argument.to_string() });
    }

    let value = value.trim()
                     .parse()
                     .map_err(|source| BindingError::InvalidValue { argument: argument.to_string(),
                                                                    source })?;
    Ok((name.to_string(), value))
}
