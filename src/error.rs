/// Lexical errors.
///
/// Raised while splitting source text into tokens: invalid characters and
/// unterminated strings or comments. The first one stops the pipeline.
pub mod lexical_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during execution, such as
/// division by zero, integer overflow, failed console I/O, or a declined loop
/// guard.
pub mod runtime_error;
/// Semantic errors.
///
/// Declaration and type violations found by the analyzer. These are
/// collected rather than raised, so a single pass reports all of them.
pub mod semantic_error;
/// Syntax errors.
///
/// Raised when the token stream does not match the grammar. The first one
/// stops parsing.
pub mod syntax_error;

pub use lexical_error::LexicalError;
pub use runtime_error::RuntimeError;
pub use semantic_error::SemanticError;
pub use syntax_error::SyntaxError;

/// Any failure of the compile-and-run pipeline.
///
/// Each stage contributes one variant. Only the semantic stage can report
/// more than one problem at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The lexer rejected the source text.
    Lexical(LexicalError),
    /// The parser rejected the token stream.
    Syntax(SyntaxError),
    /// The analyzer found one or more violations; execution was skipped.
    Semantic(Vec<SemanticError>),
    /// Execution stopped early.
    Runtime(RuntimeError),
}

impl From<LexicalError> for Error {
    fn from(error: LexicalError) -> Self {
        Self::Lexical(error)
    }
}

impl From<SyntaxError> for Error {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl From<Vec<SemanticError>> for Error {
    fn from(errors: Vec<SemanticError>) -> Self {
        Self::Semantic(errors)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Semantic(errors) => {
                write!(f, "Semantic errors found:")?;
                for (i, e) in errors.iter().enumerate() {
                    write!(f, "\n   {}. {e}", i + 1)?;
                }
                Ok(())
            },
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexical(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Semantic(errors) => errors.first().map(|e| e as &(dyn std::error::Error + 'static)),
            Self::Runtime(e) => Some(e),
        }
    }
}
