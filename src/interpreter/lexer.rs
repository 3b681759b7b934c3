use logos::{Lexer, Logos};
use tracing::debug;

use crate::{ast::Position, error::LexicalError};

/// The kind of a [`Token`].
///
/// There is one variant per keyword, operator and delimiter of the language,
/// plus the open-ended classes (identifiers and literals) and the
/// end-of-input marker that terminates every token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `program`
    Program,
    /// `var`
    Var,
    /// `begin`
    Begin,
    /// `end`
    End,
    /// `integer`
    Integer,
    /// `if`
    If,
    /// `then`
    Then,
    /// `else`
    Else,
    /// `while`
    While,
    /// `do`
    Do,
    /// `read`
    Read,
    /// `write`
    Write,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `:=`
    Assign,
    /// `=`
    Equal,
    /// `<>`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `;`
    Semicolon,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Variable or program names such as `total`.
    Identifier,
    /// Runs of decimal digits such as `42`.
    IntegerLiteral,
    /// Double-quoted text such as `"hello\n"`.
    StringLiteral,
    /// Marks the end of the input. Always the last token.
    Eof,
}

/// The coarse classification of a [`TokenKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// A reserved word.
    Keyword,
    /// An arithmetic, relational or assignment operator.
    Operator,
    /// Punctuation: `;`, `.`, `,`, `:`, `(` and `)`.
    Delimiter,
    /// A name.
    Identifier,
    /// An integer literal.
    IntegerLiteral,
    /// A string literal.
    StringLiteral,
    /// The end-of-input marker.
    EndOfInput,
}

impl TokenKind {
    /// Looks up a reserved word, ignoring ASCII case.
    ///
    /// # Example
    /// ```
    /// use fortall::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::keyword("BEGIN"), Some(TokenKind::Begin));
    /// assert_eq!(TokenKind::keyword("While"), Some(TokenKind::While));
    /// assert_eq!(TokenKind::keyword("total"), None);
    /// ```
    #[must_use]
    pub fn keyword(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "program" => Some(Self::Program),
            "var" => Some(Self::Var),
            "begin" => Some(Self::Begin),
            "end" => Some(Self::End),
            "integer" => Some(Self::Integer),
            "if" => Some(Self::If),
            "then" => Some(Self::Then),
            "else" => Some(Self::Else),
            "while" => Some(Self::While),
            "do" => Some(Self::Do),
            "read" => Some(Self::Read),
            "write" => Some(Self::Write),
            _ => None,
        }
    }

    /// Returns the category this kind belongs to.
    #[must_use]
    pub const fn category(self) -> TokenCategory {
        match self {
            Self::Program
            | Self::Var
            | Self::Begin
            | Self::End
            | Self::Integer
            | Self::If
            | Self::Then
            | Self::Else
            | Self::While
            | Self::Do
            | Self::Read
            | Self::Write => TokenCategory::Keyword,
            Self::Plus
            | Self::Minus
            | Self::Star
            | Self::Slash
            | Self::Assign
            | Self::Equal
            | Self::NotEqual
            | Self::Less
            | Self::LessEqual
            | Self::Greater
            | Self::GreaterEqual => TokenCategory::Operator,
            Self::Semicolon
            | Self::Dot
            | Self::Comma
            | Self::Colon
            | Self::LParen
            | Self::RParen => TokenCategory::Delimiter,
            Self::Identifier => TokenCategory::Identifier,
            Self::IntegerLiteral => TokenCategory::IntegerLiteral,
            Self::StringLiteral => TokenCategory::StringLiteral,
            Self::Eof => TokenCategory::EndOfInput,
        }
    }
}

/// A lexical token: its kind, its text and where it starts.
///
/// For string literals `lexeme` holds the decoded value, with escape
/// sequences already resolved and without the surrounding quotes. For every
/// other kind it is the exact source text (the end-of-input token has an
/// empty lexeme).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind:     TokenKind,
    /// The token text.
    pub lexeme:   String,
    /// Where the token starts.
    pub position: Position,
}

impl Token {
    /// Describes the token for diagnostics, e.g. `'begin'` or `end of input`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::StringLiteral => format!("string \"{}\"", self.lexeme.escape_debug()),
            _ => format!("'{}'", self.lexeme),
        }
    }
}

/// The reasons logos can fail on a piece of input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum LexErrorKind {
    #[default]
    InvalidCharacter,
    UnterminatedString,
    UnterminatedComment,
}

/// Raw tokens as recognised by logos. Keywords come out as plain words and
/// are told apart from identifiers afterwards, because keyword matching is
/// case-insensitive.
///
/// Words may use any Unicode letter, and any Unicode whitespace separates
/// tokens. Integer literals stay ASCII digits.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexErrorKind)]
#[logos(skip r"\s+")]
enum RawToken {
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*")]
    Word,
    #[regex(r"[0-9]+")]
    Number,
    #[token("\"", string_literal)]
    Str(String),
    #[token("/*", block_comment)]
    Comment,
    #[token(":=", |_| TokenKind::Assign)]
    #[token("<>", |_| TokenKind::NotEqual)]
    #[token("<=", |_| TokenKind::LessEqual)]
    #[token(">=", |_| TokenKind::GreaterEqual)]
    #[token("+", |_| TokenKind::Plus)]
    #[token("-", |_| TokenKind::Minus)]
    #[token("*", |_| TokenKind::Star)]
    #[token("/", |_| TokenKind::Slash)]
    #[token("=", |_| TokenKind::Equal)]
    #[token("<", |_| TokenKind::Less)]
    #[token(">", |_| TokenKind::Greater)]
    #[token(";", |_| TokenKind::Semicolon)]
    #[token(".", |_| TokenKind::Dot)]
    #[token(",", |_| TokenKind::Comma)]
    #[token(":", |_| TokenKind::Colon)]
    #[token("(", |_| TokenKind::LParen)]
    #[token(")", |_| TokenKind::RParen)]
    Symbol(TokenKind),
}

/// Scans the body of a string literal after its opening quote.
///
/// Supports the escapes `\n`, `\t`, `\\` and `\"`; any other escaped
/// character is kept literally.
///
/// # Returns
/// - `Ok(String)`: The decoded value, with the lexer positioned after the
///   closing quote.
/// - `Err(LexErrorKind::UnterminatedString)`: If input ends first.
fn string_literal(lex: &mut Lexer<'_, RawToken>) -> Result<String, LexErrorKind> {
    let remainder = lex.remainder();
    let mut value = String::new();
    let mut chars = remainder.char_indices();

    while let Some((offset, c)) = chars.next() {
        match c {
            '"' => {
                lex.bump(offset + 1);
                return Ok(value);
            },
            '\\' => match chars.next() {
                Some((_, 'n')) => value.push('\n'),
                Some((_, 't')) => value.push('\t'),
                Some((_, escaped)) => value.push(escaped),
                None => break,
            },
            _ => value.push(c),
        }
    }

    let length = remainder.len();
    lex.bump(length);
    Err(LexErrorKind::UnterminatedString)
}

/// Skips a `/* ... */` comment after its opening delimiter. Comments do not
/// nest.
fn block_comment(lex: &mut Lexer<'_, RawToken>) -> Result<(), LexErrorKind> {
    let remainder = lex.remainder();
    if let Some(end) = remainder.find("*/") {
        lex.bump(end + 2);
        Ok(())
    } else {
        let length = remainder.len();
        lex.bump(length);
        Err(LexErrorKind::UnterminatedComment)
    }
}

/// Maps byte offsets of a source text to line/column positions.
struct LineIndex<'s> {
    source:      &'s str,
    line_starts: Vec<usize>,
}

impl<'s> LineIndex<'s> {
    fn new(source: &'s str) -> Self {
        let line_starts = std::iter::once(0).chain(source.match_indices('\n')
                                                         .map(|(i, _)| i + 1))
                                            .collect();
        Self { source,
               line_starts }
    }

    fn position(&self, offset: usize) -> Position {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let start = self.line_starts[line - 1];
        let column = self.source[start..offset].chars().count() + 1;
        Position::new(line, column)
    }
}

/// Splits source text into tokens.
///
/// Whitespace and `/* ... */` comments are skipped. Words are matched
/// against the keyword set ignoring case; anything else is an identifier.
/// Two-character operators take precedence over their one-character
/// prefixes. The returned sequence always ends with a [`TokenKind::Eof`]
/// token positioned at the end of the input.
///
/// # Errors
/// - `InvalidCharacter` at the character that starts no token.
/// - `UnterminatedString` / `UnterminatedComment` at the end of the input.
///
/// # Example
/// ```
/// use fortall::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("x := x + 10").unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Identifier,
///                 TokenKind::Assign,
///                 TokenKind::Identifier,
///                 TokenKind::Plus,
///                 TokenKind::IntegerLiteral,
///                 TokenKind::Eof]);
/// assert_eq!(tokens[4].position.column, 10);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexicalError> {
    let index = LineIndex::new(source);
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(raw) = lexer.next() {
        let position = index.position(lexer.span().start);
        let (kind, lexeme) = match raw {
            Ok(RawToken::Word) => {
                let word = lexer.slice();
                (TokenKind::keyword(word).unwrap_or(TokenKind::Identifier), word.to_string())
            },
            Ok(RawToken::Number) => (TokenKind::IntegerLiteral, lexer.slice().to_string()),
            Ok(RawToken::Str(value)) => (TokenKind::StringLiteral, value),
            Ok(RawToken::Symbol(kind)) => (kind, lexer.slice().to_string()),
            Ok(RawToken::Comment) => continue,
            Err(LexErrorKind::InvalidCharacter) => {
                let character = lexer.slice().chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexicalError::InvalidCharacter { character, position });
            },
            Err(LexErrorKind::UnterminatedString) => {
                return Err(LexicalError::UnterminatedString { position:
                                                                  index.position(source.len()), });
            },
            Err(LexErrorKind::UnterminatedComment) => {
                return Err(LexicalError::UnterminatedComment { position:
                                                                   index.position(source.len()), });
            },
        };
        tokens.push(Token { kind,
                            lexeme,
                            position });
    }

    tokens.push(Token { kind:     TokenKind::Eof,
                        lexeme:   String::new(),
                        position: index.position(source.len()), });

    debug!(tokens = tokens.len() - 1, "lexical analysis finished");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn keywords_ignore_case_but_identifiers_keep_it() {
        let tokens = tokenize("PROGRAM Begin eNd Total").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Program);
        assert_eq!(tokens[1].kind, TokenKind::Begin);
        assert_eq!(tokens[2].kind, TokenKind::End);
        assert_eq!(tokens[3].kind, TokenKind::Identifier);
        assert_eq!(tokens[3].lexeme, "Total");
        assert_eq!(tokens[0].kind.category(), TokenCategory::Keyword);
    }

    #[test]
    fn two_character_operators_win() {
        assert_eq!(kinds(":= <> <= >= : < > ="),
                   vec![TokenKind::Assign,
                        TokenKind::NotEqual,
                        TokenKind::LessEqual,
                        TokenKind::GreaterEqual,
                        TokenKind::Colon,
                        TokenKind::Less,
                        TokenKind::Greater,
                        TokenKind::Equal,
                        TokenKind::Eof]);
    }

    #[test]
    fn digits_then_letters_split() {
        let tokens = tokenize("12ab").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::IntegerLiteral);
        assert_eq!(tokens[0].lexeme, "12");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].position, Position::new(1, 3));
    }

    #[test]
    fn comments_are_skipped_and_lines_counted() {
        let tokens = tokenize("/* one\ntwo */ x\n  y").unwrap();
        assert_eq!(tokens[0].lexeme, "x");
        assert_eq!(tokens[0].position, Position::new(2, 8));
        assert_eq!(tokens[1].position, Position::new(3, 3));
        assert_eq!(tokens[2].kind, TokenKind::Eof);
        assert_eq!(tokens[2].position, Position::new(3, 4));
    }

    #[test]
    fn unicode_letters_and_spaces_are_accepted() {
        let tokens = tokenize("program Média;\u{A0}var média2: integer;").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].lexeme, "Média");
        assert_eq!(tokens[1].position, Position::new(1, 9));
        assert_eq!(tokens[3].kind, TokenKind::Var);
        assert_eq!(tokens[3].position, Position::new(1, 16));
        assert_eq!(tokens[4].lexeme, "média2");
        assert_ne!(tokens[1].lexeme, tokens[4].lexeme);
    }

    #[test]
    fn slash_alone_is_division() {
        assert_eq!(kinds("a / b"),
                   vec![TokenKind::Identifier,
                        TokenKind::Slash,
                        TokenKind::Identifier,
                        TokenKind::Eof]);
    }

    #[test]
    fn string_escapes_are_decoded() {
        let tokens = tokenize(r#""a\nb\t\"q\"\\\x""#).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].lexeme, "a\nb\t\"q\"\\x");
    }

    #[test]
    fn token_after_multiline_string_has_right_position() {
        let tokens = tokenize("\"a\nbc\" z").unwrap();
        assert_eq!(tokens[0].position, Position::new(1, 1));
        assert_eq!(tokens[1].position, Position::new(2, 5));
    }

    #[test]
    fn invalid_character_is_reported_where_it_is() {
        let err = tokenize("x := 1;\n  y := @").unwrap_err();
        assert_eq!(err,
                   LexicalError::InvalidCharacter { character: '@',
                                                    position:  Position::new(2, 8), });
        assert_eq!(err.to_string(),
                   "Lexical error at line 2, column 8: invalid character '@'");
    }

    #[test]
    fn unterminated_string_and_comment() {
        assert!(matches!(tokenize("write(\"abc"),
                         Err(LexicalError::UnterminatedString { position }) if position == Position::new(1, 11)));
        assert!(matches!(tokenize("x /* never closed\n"),
                         Err(LexicalError::UnterminatedComment { position }) if position == Position::new(2, 1)));
    }

    #[test]
    fn empty_source_is_just_eof() {
        let tokens = tokenize("   \n ").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].kind.category(), TokenCategory::EndOfInput);
    }
}
