use crate::ast::BinaryOperator;

/// Applies a binary operator to two evaluated operands.
///
/// Division by zero is not an error: it yields an infinity or NaN as IEEE-754
/// prescribes. `^` is `powf`.
///
/// # Example
/// ```
/// use alg::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Pow, 5.0, 2.0), 25.0);
/// assert_eq!(eval_binary(BinaryOperator::Div, 1.0, 0.0), f64::INFINITY);
/// ```
#[must_use]
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
        BinaryOperator::Pow => left.powf(right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        assert_eq!(eval_binary(BinaryOperator::Add, 5.0, 2.0), 7.0);
        assert_eq!(eval_binary(BinaryOperator::Sub, 5.0, 2.0), 3.0);
        assert_eq!(eval_binary(BinaryOperator::Mul, 5.0, 2.0), 10.0);
        assert_eq!(eval_binary(BinaryOperator::Div, 5.0, 2.0), 2.5);
        assert_eq!(eval_binary(BinaryOperator::Pow, 5.0, 2.0), 25.0);
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        assert_eq!(eval_binary(BinaryOperator::Div, -1.0, 0.0), f64::NEG_INFINITY);
        assert!(eval_binary(BinaryOperator::Div, 0.0, 0.0).is_nan());
    }
}
