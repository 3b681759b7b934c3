use std::collections::HashMap;

use crate::{
    ast::{Identifier, Position, Type},
    error::SemanticError,
};

/// What the table knows about one declared variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    /// The declared type.
    pub ty:       Type,
    /// Where the name was declared.
    pub position: Position,
}

/// Maps variable names to their declarations.
///
/// The language has no nested scopes, so a single flat map covers the whole
/// program. Names are case-sensitive and can be declared only once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` with the given type.
    ///
    /// # Errors
    /// Returns `SemanticError::AlreadyDeclared` at the position of `name` if
    /// the name is already present. The existing entry is left untouched.
    ///
    /// # Example
    /// ```
    /// use fortall::{
    ///     ast::{Identifier, Position, Type},
    ///     interpreter::analyzer::SymbolTable,
    /// };
    ///
    /// let mut table = SymbolTable::new();
    /// let x = Identifier { name:     "x".to_string(),
    ///                      position: Position::new(1, 16), };
    ///
    /// assert!(table.declare(&x, Type::Integer).is_ok());
    /// assert!(table.declare(&x, Type::Integer).is_err());
    /// assert_eq!(table.type_of("x"), Some(Type::Integer));
    /// assert_eq!(table.type_of("X"), None);
    /// ```
    pub fn declare(&mut self, name: &Identifier, ty: Type) -> Result<(), SemanticError> {
        if self.symbols.contains_key(&name.name) {
            return Err(SemanticError::AlreadyDeclared { name:     name.name.clone(),
                                                        position: name.position, });
        }
        self.symbols.insert(name.name.clone(),
                            Symbol { ty,
                                     position: name.position });
        Ok(())
    }

    /// Looks up a declared name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Returns the declared type of `name`, if it was declared.
    #[must_use]
    pub fn type_of(&self, name: &str) -> Option<Type> {
        self.lookup(name).map(|symbol| symbol.ty)
    }

    /// Iterates over all declared names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(String::as_str)
    }

    /// Returns the number of declared names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
