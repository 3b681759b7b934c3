use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Interpreter},
    util::num::floor_div,
};

impl Interpreter<'_> {
    /// Applies an arithmetic operator to two integers.
    ///
    /// All operations are checked. Division rounds toward negative infinity,
    /// so `-7 / 2` is `-4`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `op` is `/` and `right` is 0, whatever `left` is.
    /// - `Overflow` if the result does not fit in 64 bits.
    ///
    /// # Example
    /// ```
    /// use fortall::{
    ///     ast::{BinaryOperator, Position},
    ///     error::RuntimeError,
    ///     interpreter::evaluator::Interpreter,
    /// };
    ///
    /// let position = Position::new(2, 7);
    ///
    /// assert_eq!(Interpreter::eval_arithmetic(BinaryOperator::Div, -7, 2, position), Ok(-4));
    /// assert_eq!(Interpreter::eval_arithmetic(BinaryOperator::Div, -7, 0, position),
    ///            Err(RuntimeError::DivisionByZero { position }));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: i64,
                           right: i64,
                           position: Position)
                           -> EvalResult<i64> {
        let result = match op {
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Sub => left.checked_sub(right),
            BinaryOperator::Mul => left.checked_mul(right),
            BinaryOperator::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                floor_div(left, right)
            },
            _ => {
                return Err(RuntimeError::TypeMismatch { details: format!("'{op}' is not an arithmetic operator"),
                                                        position });
            },
        };

        result.ok_or(RuntimeError::Overflow { position })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{BinaryOperator::*, Position},
        error::RuntimeError,
        interpreter::evaluator::Interpreter,
    };

    const AT: Position = Position::new(1, 1);

    #[test]
    fn basic_operations() {
        assert_eq!(Interpreter::eval_arithmetic(Add, 3, 4, AT), Ok(7));
        assert_eq!(Interpreter::eval_arithmetic(Sub, 3, 4, AT), Ok(-1));
        assert_eq!(Interpreter::eval_arithmetic(Mul, -3, 4, AT), Ok(-12));
        assert_eq!(Interpreter::eval_arithmetic(Div, 7, 2, AT), Ok(3));
    }

    #[test]
    fn division_floors_toward_negative_infinity() {
        assert_eq!(Interpreter::eval_arithmetic(Div, -7, 2, AT), Ok(-4));
        assert_eq!(Interpreter::eval_arithmetic(Div, 7, -2, AT), Ok(-4));
        assert_eq!(Interpreter::eval_arithmetic(Div, -7, -2, AT), Ok(3));
    }

    #[test]
    fn division_by_zero_for_any_sign() {
        for left in [-5, 0, 5] {
            assert_eq!(Interpreter::eval_arithmetic(Div, left, 0, AT),
                       Err(RuntimeError::DivisionByZero { position: AT }));
        }
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(Interpreter::eval_arithmetic(Add, i64::MAX, 1, AT),
                   Err(RuntimeError::Overflow { position: AT }));
        assert_eq!(Interpreter::eval_arithmetic(Div, i64::MIN, -1, AT),
                   Err(RuntimeError::Overflow { position: AT }));
    }
}
