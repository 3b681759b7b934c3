use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_expression,
            core::ParseResult,
            utils::{expect, unexpected},
        },
    },
    util::num::parse_literal_checked,
};

/// Parses a unary expression.
///
/// Unary minus is right-associative, so `--x` is parsed as `-(-x)`. If no
/// operator is present, the function delegates to [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] positioned at the `-`, or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if let Some(token) = tokens.peek()
       && token.kind == TokenKind::Minus
    {
        let position = token.position;
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           position })
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions are integer literals, string literals, variable
/// references and parenthesized expressions.
///
/// # Errors
/// - `LiteralTooLarge` if an integer literal does not fit in 64 bits.
/// - `Expected` with `"expression"` for any other leading token.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let Some(token) = tokens.next() else {
        return Err(SyntaxError::UnexpectedEndOfInput);
    };
    let position = token.position;

    match token.kind {
        TokenKind::IntegerLiteral => {
            let error = SyntaxError::LiteralTooLarge { literal: token.lexeme.clone(),
                                                       position };
            let value = parse_literal_checked(&token.lexeme, error)?;
            Ok(Expr::IntegerLiteral { value, position })
        },
        TokenKind::StringLiteral => Ok(Expr::StringLiteral { value: token.lexeme.clone(),
                                                             position }),
        TokenKind::Identifier => Ok(Expr::Variable { name: token.lexeme.clone(),
                                                     position }),
        TokenKind::LParen => {
            let expr = parse_expression(tokens)?;
            expect(tokens, TokenKind::RParen, "')' after expression")?;
            Ok(expr)
        },
        _ => Err(unexpected(token, "expression")),
    }
}
