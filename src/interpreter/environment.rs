use std::collections::{HashMap, hash_map};

use crate::error::RuntimeError;

/// Names bound at creation that a statement may never assign to.
pub const PROTECTED_CONSTANTS: [(&str, f64); 4] = [("pi", std::f64::consts::PI),
                                                   ("PI", std::f64::consts::PI),
                                                   ("e", std::f64::consts::E),
                                                   ("E", std::f64::consts::E)];

/// Returns `true` if `name` is one of the protected constants.
///
/// # Example
/// ```
/// use alg::interpreter::environment::is_protected_constant;
///
/// assert!(is_protected_constant("PI"));
/// assert!(!is_protected_constant("Pi"));
/// ```
#[must_use]
pub fn is_protected_constant(name: &str) -> bool {
    PROTECTED_CONSTANTS.iter().any(|(constant, _)| *constant == name)
}

/// The variables visible to a running program.
///
/// Names are case-sensitive. `set` never refuses a write: keeping statements
/// away from the protected constants is the statement parser's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    variables: HashMap<String, f64>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only the protected constants.
    #[must_use]
    pub fn new() -> Self {
        Self::with_bindings(std::iter::empty::<(String, f64)>())
    }

    /// Creates an environment seeded with `bindings`.
    ///
    /// The bindings are applied after the protected constants, so a seeded
    /// value may replace `pi` or `e`.
    ///
    /// # Example
    /// ```
    /// use alg::interpreter::environment::Environment;
    ///
    /// let env = Environment::with_bindings([("x", 2.0), ("pi", 3.0)]);
    /// assert_eq!(env.get("x").unwrap(), 2.0);
    /// assert_eq!(env.get("pi").unwrap(), 3.0);
    /// assert_eq!(env.get("PI").unwrap(), std::f64::consts::PI);
    /// ```
    #[must_use]
    pub fn with_bindings<I, K>(bindings: I) -> Self
        where I: IntoIterator<Item = (K, f64)>,
              K: Into<String>
    {
        let mut variables: HashMap<String, f64> =
            PROTECTED_CONSTANTS.iter()
                               .map(|(name, value)| ((*name).to_string(), *value))
                               .collect();
        variables.extend(bindings.into_iter().map(|(name, value)| (name.into(), value)));
        Self { variables }
    }

    /// Looks up the value bound to `name`.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` if `name` is unbound.
    pub fn get(&self, name: &str) -> Result<f64, RuntimeError> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.variables.insert(name.into(), value);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over every binding in unspecified order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.variables.iter() }
    }
}

/// Iterator over the bindings of an [`Environment`].
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, f64>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, value)| (name.as_str(), *value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Environment {
    type Item = (&'a str, f64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
