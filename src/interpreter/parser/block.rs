use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, peek_kind},
        },
    },
};

/// Parses a `;`-separated list of statements.
///
/// Grammar: `stmtlist := stmt { ';' stmt }`
///
/// After each `;` the list checks for `end` before attempting another
/// statement, so a `;` directly before `end` is accepted and is never
/// parsed as an empty statement. The `end` itself is left for the caller.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first statement.
///
/// # Returns
/// The parsed statements, at least one.
pub fn parse_statement_list<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token>
{
    let mut statements = vec![parse_statement(tokens)?];

    while peek_kind(tokens) == Some(TokenKind::Semicolon) {
        tokens.next();
        if peek_kind(tokens) != Some(TokenKind::End) {
            statements.push(parse_statement(tokens)?);
        }
    }

    Ok(statements)
}

/// Parses a block statement.
///
/// Grammar: `block := 'begin' stmtlist 'end'`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `begin` keyword.
///
/// # Returns
/// A `Statement::Block` positioned at its `begin` keyword.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let position = expect(tokens, TokenKind::Begin, "'begin'")?.position;
    let statements = parse_statement_list(tokens)?;
    expect(tokens, TokenKind::End, "'end'")?;

    Ok(Statement::Block { statements,
                          position })
}
