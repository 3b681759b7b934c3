use crate::{
    ast::{BinaryOperator, Position},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators go to `eval_arithmetic`, relational operators to
    /// `eval_comparison`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Position of the operator for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use fortall::{
    ///     ast::{BinaryOperator, Position},
    ///     interpreter::{evaluator::Interpreter, value::core::Value},
    /// };
    ///
    /// let position = Position::new(1, 1);
    /// let sum = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                    &Value::Integer(3),
    ///                                    &Value::Integer(4),
    ///                                    position);
    /// assert_eq!(sum.unwrap(), Value::Integer(7));
    ///
    /// let less = Interpreter::eval_binary(BinaryOperator::Less,
    ///                                     &Value::Integer(3),
    ///                                     &Value::Integer(4),
    ///                                     position);
    /// assert_eq!(less.unwrap(), Value::Integer(1));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       position: Position)
                       -> EvalResult<Value> {
        if op.is_arithmetic() {
            let left = left.as_integer(position)?;
            let right = right.as_integer(position)?;
            Self::eval_arithmetic(op, left, right, position).map(Value::Integer)
        } else {
            Self::eval_comparison(op, left, right, position)
        }
    }
}
