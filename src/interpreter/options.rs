/// How chained `^` operators group.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    /// `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`. `^` folds like every other binary
    /// operator.
    #[default]
    Left,
    /// `2 ^ 3 ^ 2` is `2 ^ (3 ^ 2)`.
    Right,
}

/// Dialect switches shared by the parser and the evaluator.
///
/// The defaults reproduce the reference behaviour of the language: `^` folds
/// left to right and `sin`, `cos` and `tan` return exact results at `±π/2`.
///
/// # Example
/// ```
/// use alg::interpreter::options::{Associativity, Options};
///
/// let options = Options::default();
/// assert_eq!(options.power, Associativity::Left);
/// assert!(options.snap_trig);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Options {
    /// Grouping of chained `^`. Used at parse time.
    pub power:     Associativity,
    /// Whether `sin`, `cos` and `tan` special-case inputs of exactly `±π/2`.
    /// Used at evaluation time.
    pub snap_trig: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { power:     Associativity::Left,
               snap_trig: true, }
    }
}

impl Options {
    /// Returns `self` with `^` grouped as given.
    #[must_use]
    pub const fn with_power(mut self, power: Associativity) -> Self {
        self.power = power;
        self
    }

    /// Returns `self` with trig snapping switched on or off.
    #[must_use]
    pub const fn with_snap_trig(mut self, snap_trig: bool) -> Self {
        self.snap_trig = snap_trig;
        self
    }
}
