use std::collections::HashMap;

use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{analyzer::SymbolTable, evaluator::core::EvalResult, value::core::Value},
};

/// Maps every declared variable to its current value.
///
/// The set of names is fixed when the environment is created; assignments
/// can change values but never add names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    values: HashMap<String, Value>,
}

impl Environment {
    /// Creates an environment holding every declared name, set to 0.
    #[must_use]
    pub fn from_symbols(symbols: &SymbolTable) -> Self {
        Self { values: symbols.names()
                              .map(|name| (name.to_string(), Value::Integer(0)))
                              .collect() }
    }

    /// Reads a variable.
    ///
    /// # Errors
    /// `RuntimeError::UnboundVariable` if the name is unknown.
    pub fn get(&self, name: &str, position: Position) -> EvalResult<&Value> {
        self.values
            .get(name)
            .ok_or_else(|| RuntimeError::UnboundVariable { name: name.to_string(),
                                                           position })
    }

    /// Overwrites an existing variable.
    ///
    /// # Errors
    /// `RuntimeError::UnboundVariable` if the name is unknown; the
    /// environment is left unchanged.
    pub fn assign(&mut self, name: &str, value: Value, position: Position) -> EvalResult<()> {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            },
            None => Err(RuntimeError::UnboundVariable { name: name.to_string(),
                                                        position }),
        }
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the program declared no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
