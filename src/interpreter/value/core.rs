use std::fmt;

use crate::{ast::Position, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// There is no boolean variant: comparisons produce `Integer(1)` or
/// `Integer(0)`, and conditions treat any nonzero integer as true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A signed 64-bit integer.
    Integer(i64),
    /// A string, produced only by string literals.
    Str(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl Value {
    /// Returns the name of the value's type, as used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Str(_) => "string",
        }
    }

    /// Tests the value as a condition.
    ///
    /// Integers are true when nonzero. A checked program never uses a string
    /// as a condition; should one appear, it counts as true when non-empty.
    ///
    /// # Example
    /// ```
    /// use fortall::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(-3).is_truthy());
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(Value::from(true).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Str(s) => !s.is_empty(),
        }
    }

    /// Extracts the integer, or fails with a type mismatch.
    ///
    /// # Parameters
    /// - `position`: Source position for error reporting.
    ///
    /// # Errors
    /// `RuntimeError::TypeMismatch` if the value is a string.
    pub fn as_integer(&self, position: Position) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Str(_) => Err(RuntimeError::TypeMismatch { details: format!("expected an integer, found {}",
                                                                              self.type_name()),
                                                             position }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}
