use crate::{
    ast::{Position, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// `Negate` is checked: negating `i64::MIN` overflows.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `position`: Position of the operator for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use fortall::{
    ///     ast::{Position, UnaryOperator},
    ///     interpreter::{evaluator::Interpreter, value::core::Value},
    /// };
    ///
    /// let position = Position::new(1, 1);
    /// let v = Interpreter::eval_unary(UnaryOperator::Negate, &Value::Integer(5), position);
    /// assert_eq!(v.unwrap(), Value::Integer(-5));
    ///
    /// let err = Interpreter::eval_unary(UnaryOperator::Negate, &Value::from("text"), position);
    /// assert!(err.is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, position: Position) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Negate, Value::Integer(n)) => n.checked_neg()
                                                           .map(Value::Integer)
                                                           .ok_or(RuntimeError::Overflow { position }),
            (UnaryOperator::Negate, other) => {
                Err(RuntimeError::TypeMismatch { details: format!("unary '-' requires an integer operand, found {}",
                                                                  other.type_name()),
                                                 position })
            },
        }
    }
}
