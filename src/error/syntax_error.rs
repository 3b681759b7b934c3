use crate::ast::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
///
/// Parsing stops at the first error; there is no recovery.
pub enum SyntaxError {
    /// The current token does not fit the grammar rule being parsed.
    Expected {
        /// The construct the parser was looking for, e.g. `';' after
        /// declaration`.
        expected: String,
        /// A description of the token that was found instead.
        found:    String,
        /// Position of the offending token.
        position: Position,
    },
    /// An integer literal does not fit in 64 bits.
    LiteralTooLarge {
        /// The literal text.
        literal:  String,
        /// Position of the literal.
        position: Position,
    },
    /// Found extra tokens after the final `.` of the program.
    UnexpectedTrailingTokens {
        /// The first extra token.
        found:    String,
        /// Position of the first extra token.
        position: Position,
    },
    /// The token stream ended without an end-of-input token.
    UnexpectedEndOfInput,
}

impl SyntaxError {
    /// Returns the source position the error refers to.
    ///
    /// A stream that ends without an end-of-input token has no meaningful
    /// position; line and column 0 are reported for it.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Expected { position, .. }
            | Self::LiteralTooLarge { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. } => *position,
            Self::UnexpectedEndOfInput => Position::new(0, 0),
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Syntax error at {}: ", self.position())?;
        match self {
            Self::Expected { expected, found, .. } => {
                write!(f, "expected {expected}, found {found}")
            },
            Self::LiteralTooLarge { literal, .. } => {
                write!(f, "integer literal too large: {literal}")
            },
            Self::UnexpectedTrailingTokens { found, .. } => {
                write!(f, "unexpected tokens after end of program, found {found}")
            },
            Self::UnexpectedEndOfInput => write!(f, "unexpected end of input"),
        }
    }
}

impl std::error::Error for SyntaxError {}
