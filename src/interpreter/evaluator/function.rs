use std::f64::consts::FRAC_PI_2;

use crate::ast::Function;

/// Applies a builtin function to an evaluated argument.
///
/// With `snap_trig` set, arguments whose magnitude is exactly the `f64`
/// nearest `π/2` return the mathematically exact result instead of the
/// library's approximation: `sin` gives `1.0` for both signs, `cos` gives
/// `0.0`, and `tan` gives `+∞` or `-∞` by sign. Any other argument, however
/// close, goes to the library function.
///
/// `log` is base 10 and `ln` is natural. Out-of-domain arguments to `log`,
/// `ln` and `sqrt` produce NaN (or `-∞` for a zero logarithm).
///
/// # Example
/// ```
/// use alg::{ast::Function, interpreter::evaluator::function::eval_function};
///
/// let half_pi = std::f64::consts::PI / 2.0;
///
/// assert_eq!(eval_function(Function::Cos, half_pi, true), 0.0);
/// assert_ne!(eval_function(Function::Cos, half_pi, false), 0.0);
/// assert!(eval_function(Function::Sqrt, -1.0, true).is_nan());
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn eval_function(function: Function, x: f64, snap_trig: bool) -> f64 {
    let at_half_pi = snap_trig && x.abs() == FRAC_PI_2;

    match function {
        Function::Sin if at_half_pi => 1.0,
        Function::Sin => x.sin(),
        Function::Cos if at_half_pi => 0.0,
        Function::Cos => x.cos(),
        Function::Tan if at_half_pi => f64::INFINITY.copysign(x),
        Function::Tan => x.tan(),
        Function::Log => x.log10(),
        Function::Ln => x.ln(),
        Function::Sqrt => x.sqrt(),
    }
}
