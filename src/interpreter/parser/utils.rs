use std::iter::Peekable;

use crate::{
    ast::Identifier,
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Returns the kind of the current token without consuming it.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>) -> Option<TokenKind>
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map(|token| token.kind)
}

/// Consumes the current token if it has the given kind.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the token to check.
/// - `kind`: The required token kind.
/// - `expected`: Description of the construct, used in the error message
///   (e.g. `"';' after declaration"`).
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// Returns `SyntaxError::Expected` at the current token if it has another
/// kind, or `SyntaxError::UnexpectedEndOfInput` if the stream is exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind,
                                                    expected: &str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(&token) if token.kind == kind => {
            tokens.next();
            Ok(token)
        },
        Some(&token) => Err(unexpected(token, expected)),
        None => Err(SyntaxError::UnexpectedEndOfInput),
    }
}

/// Builds the error for finding `token` where `expected` was required.
pub(in crate::interpreter::parser) fn unexpected(token: &Token, expected: &str) -> SyntaxError {
    SyntaxError::Expected { expected: expected.to_string(),
                            found:    token.describe(),
                            position: token.position, }
}

/// Parses a plain identifier and returns it with its position.
///
/// # Errors
/// Returns a `SyntaxError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              expected: &str)
                                                              -> ParseResult<Identifier>
    where I: Iterator<Item = &'a Token>
{
    let token = expect(tokens, TokenKind::Identifier, expected)?;
    Ok(Identifier { name:     token.lexeme.clone(),
                    position: token.position, })
}

/// Parses a non-empty comma-separated list of items.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// Unlike a bracketed list, no closing token is consumed here; callers
/// expect their own terminator after the list.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item.
/// - `parse_item`: Function used to parse each list element.
///
/// # Returns
/// A vector with at least one parsed item.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token>
{
    let mut items = vec![parse_item(tokens)?];
    while peek_kind(tokens) == Some(TokenKind::Comma) {
        tokens.next();
        items.push(parse_item(tokens)?);
    }
    Ok(items)
}
