use crate::ast::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while executing a checked program.
///
/// A runtime error ends the current run. `Interrupted` and `Aborted` are not
/// faults in the program: they record that the user stopped it.
pub enum RuntimeError {
    /// The divisor of `/` evaluated to zero.
    DivisionByZero {
        /// Position of the `/` operator.
        position: Position,
    },
    /// A name is missing from the environment.
    UnboundVariable {
        /// The name of the variable.
        name:     String,
        /// Position of the use.
        position: Position,
    },
    /// An operator received a value of the wrong runtime type.
    TypeMismatch {
        /// Details about the mismatch.
        details:  String,
        /// Position of the operator.
        position: Position,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// Position of the operator.
        position: Position,
    },
    /// A `read` received something that is not an integer and the input
    /// policy forbids substituting a value.
    InvalidInput {
        /// The variable being read.
        name:     String,
        /// Why the input was rejected.
        reason:   String,
        /// Position of the `read` statement.
        position: Position,
    },
    /// Reading from or writing to the console failed.
    Io {
        /// The underlying I/O error, rendered.
        details:  String,
        /// Position of the statement doing I/O.
        position: Position,
    },
    /// The loop guard was declined.
    Interrupted {
        /// Completed iterations of the interrupted loop.
        iterations: u64,
        /// Position of the `while` statement.
        position:   Position,
    },
    /// The run was stopped from outside, e.g. by Ctrl-C.
    Aborted {
        /// Position of the statement that was about to run.
        position: Position,
    },
}

impl RuntimeError {
    /// Returns the source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::DivisionByZero { position }
            | Self::UnboundVariable { position, .. }
            | Self::TypeMismatch { position, .. }
            | Self::Overflow { position }
            | Self::InvalidInput { position, .. }
            | Self::Io { position, .. }
            | Self::Interrupted { position, .. }
            | Self::Aborted { position } => *position,
        }
    }

    /// Returns `true` if the user stopped the run, either by declining the
    /// loop guard or by interrupting it.
    #[must_use]
    pub const fn is_interruption(&self) -> bool {
        matches!(self, Self::Interrupted { .. } | Self::Aborted { .. })
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let position = self.position();
        match self {
            Self::DivisionByZero { .. } => {
                write!(f, "Runtime error at {position}: division by zero")
            },
            Self::UnboundVariable { name, .. } => {
                write!(f, "Runtime error at {position}: variable '{name}' is not defined")
            },
            Self::TypeMismatch { details, .. } => {
                write!(f, "Runtime error at {position}: {details}")
            },
            Self::Overflow { .. } => write!(f, "Runtime error at {position}: integer overflow"),
            Self::InvalidInput { name, reason, .. } => write!(f,
                                                              "Runtime error at {position}: invalid input for '{name}': {reason}"),
            Self::Io { details, .. } => {
                write!(f, "Runtime error at {position}: I/O failure: {details}")
            },
            Self::Interrupted { iterations, .. } => write!(f,
                                                           "Execution interrupted at {position}: loop stopped by user after {iterations} iterations"),
            Self::Aborted { .. } => {
                write!(f, "Execution interrupted at {position}: interrupted by user")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
