use std::cmp::Ordering;

use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

/// Maps a relational operator and the ordering of its operands to the
/// outcome of the comparison.
///
/// Returns `None` for arithmetic operators.
///
/// # Example
/// ```
/// use std::cmp::Ordering;
///
/// use fortall::{ast::BinaryOperator, interpreter::evaluator::binary::comparison::holds};
///
/// assert_eq!(holds(BinaryOperator::LessEqual, Ordering::Equal), Some(true));
/// assert_eq!(holds(BinaryOperator::NotEqual, Ordering::Equal), Some(false));
/// assert_eq!(holds(BinaryOperator::Add, Ordering::Less), None);
/// ```
#[must_use]
pub fn holds(op: BinaryOperator, ordering: Ordering) -> Option<bool> {
    match op {
        BinaryOperator::Equal => Some(ordering.is_eq()),
        BinaryOperator::NotEqual => Some(ordering.is_ne()),
        BinaryOperator::Less => Some(ordering.is_lt()),
        BinaryOperator::LessEqual => Some(ordering.is_le()),
        BinaryOperator::Greater => Some(ordering.is_gt()),
        BinaryOperator::GreaterEqual => Some(ordering.is_ge()),
        _ => None,
    }
}

impl Interpreter<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Integers compare numerically, strings lexicographically. The result is
    /// `Integer(1)` when the comparison holds and `Integer(0)` otherwise.
    ///
    /// # Errors
    /// `TypeMismatch` if the operands have different types.
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           position: Position)
                           -> EvalResult<Value> {
        let ordering = match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::Str(a), Value::Str(b)) => a.cmp(b),
            _ => {
                return Err(RuntimeError::TypeMismatch { details: format!("cannot compare {} with {}",
                                                                         left.type_name(),
                                                                         right.type_name()),
                                                        position });
            },
        };

        holds(op, ordering).map(Value::from)
                           .ok_or_else(|| RuntimeError::TypeMismatch { details: format!("'{op}' is not a relational operator"),
                                                                       position })
    }
}
