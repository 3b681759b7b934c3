use crate::ast::{BinaryOperator, Position, Type};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents the declaration and type violations found by the analyzer.
///
/// Semantic errors never stop the analysis; every independent violation is
/// collected.
pub enum SemanticError {
    /// A name was declared a second time.
    AlreadyDeclared {
        /// The repeated name.
        name:     String,
        /// Position of the repeated declaration.
        position: Position,
    },
    /// A name was used without being declared.
    NotDeclared {
        /// The unknown name.
        name:     String,
        /// Position of the use.
        position: Position,
    },
    /// An arithmetic operator received a non-integer operand.
    ArithmeticOperands {
        /// The operator.
        op:       BinaryOperator,
        /// Type of the left operand.
        left:     Type,
        /// Type of the right operand.
        right:    Type,
        /// Position of the operator.
        position: Position,
    },
    /// A relational operator received operands of different types.
    RelationalOperands {
        /// The operator.
        op:       BinaryOperator,
        /// Type of the left operand.
        left:     Type,
        /// Type of the right operand.
        right:    Type,
        /// Position of the operator.
        position: Position,
    },
    /// Unary minus was applied to a non-integer operand.
    UnaryOperand {
        /// Type of the operand.
        found:    Type,
        /// Position of the operator.
        position: Position,
    },
    /// An `if` or `while` condition is not an integer.
    ConditionNotInteger {
        /// Type of the condition.
        found:    Type,
        /// Position of the statement.
        position: Position,
    },
    /// The assigned value does not match the variable's declared type.
    IncompatibleTypes {
        /// The variable being assigned.
        name:     String,
        /// The declared type of the variable.
        expected: Type,
        /// The type of the assigned expression.
        found:    Type,
        /// Position of the assignment.
        position: Position,
    },
}

impl SemanticError {
    /// Returns the source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::AlreadyDeclared { position, .. }
            | Self::NotDeclared { position, .. }
            | Self::ArithmeticOperands { position, .. }
            | Self::RelationalOperands { position, .. }
            | Self::UnaryOperand { position, .. }
            | Self::ConditionNotInteger { position, .. }
            | Self::IncompatibleTypes { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Semantic error at {}: ", self.position())?;
        match self {
            Self::AlreadyDeclared { name, .. } => write!(f, "variable '{name}' already declared"),
            Self::NotDeclared { name, .. } => write!(f, "variable '{name}' not declared"),
            Self::ArithmeticOperands { op, left, right, .. } => write!(f,
                                                                       "arithmetic operators require integer operands ('{op}' applied to {left} and {right})"),
            Self::RelationalOperands { op, left, right, .. } => write!(f,
                                                                       "relational operators require operands of the same type ('{op}' applied to {left} and {right})"),
            Self::UnaryOperand { found, .. } => {
                write!(f, "unary '-' requires an integer operand, found {found}")
            },
            Self::ConditionNotInteger { found, .. } => {
                write!(f, "condition must be integer, found {found}")
            },
            Self::IncompatibleTypes { name,
                                      expected,
                                      found,
                                      .. } => write!(f,
                                                     "incompatible types: cannot assign {found} to '{name}' of type {expected}"),
        }
    }
}

impl std::error::Error for SemanticError {}
