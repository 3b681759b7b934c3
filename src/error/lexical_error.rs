use crate::ast::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while splitting source text into
/// tokens.
pub enum LexicalError {
    /// A character that starts no token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Where the character appears.
        position:  Position,
    },
    /// Input ended before the closing `"` of a string literal.
    UnterminatedString {
        /// The end-of-input position.
        position: Position,
    },
    /// Input ended before the closing `*/` of a comment.
    UnterminatedComment {
        /// The end-of-input position.
        position: Position,
    },
}

impl LexicalError {
    /// Returns the source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::InvalidCharacter { position, .. }
            | Self::UnterminatedString { position }
            | Self::UnterminatedComment { position } => *position,
        }
    }
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lexical error at {}: ", self.position())?;
        match self {
            Self::InvalidCharacter { character, .. } => {
                write!(f, "invalid character '{}'", character.escape_debug())
            },
            Self::UnterminatedString { .. } => write!(f, "unterminated string"),
            Self::UnterminatedComment { .. } => write!(f, "unterminated comment"),
        }
    }
}

impl std::error::Error for LexicalError {}
