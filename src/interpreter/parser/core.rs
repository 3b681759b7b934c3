use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Declaration, Program, Type},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::parse_statement_list,
            utils::{expect, parse_comma_separated, parse_identifier, peek_kind, unexpected},
        },
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a complete token sequence into a [`Program`].
///
/// This is the parse-only entry point. The slice is expected to come from
/// [`tokenize`](crate::interpreter::lexer::tokenize) and therefore to end
/// with an end-of-input token.
///
/// # Errors
/// Returns the first `SyntaxError` encountered; no partial tree is produced.
///
/// # Example
/// ```
/// use fortall::interpreter::{lexer::tokenize, parser::parse};
///
/// let tokens = tokenize("program P; var a: integer; begin a := 1 end.").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.name.name, "P");
/// assert_eq!(program.declarations.len(), 1);
/// assert_eq!(program.statements.len(), 1);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let program = parse_program(&mut iter)?;
    debug!(program = %program.name.name,
           declarations = program.declarations.len(),
           statements = program.statements.len(),
           "syntax analysis finished");
    Ok(program)
}

/// Parses the `program` rule.
///
/// Grammar:
/// ```text
///     program := 'program' ID ';' [declarations] 'begin' stmtlist 'end' '.'
/// ```
/// Only the end-of-input token may follow the final `.`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the `program` keyword.
///
/// # Returns
/// The [`Program`] root node.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a Token>
{
    let position = expect(tokens, TokenKind::Program, "'program'")?.position;
    let name = parse_identifier(tokens, "program name")?;
    expect(tokens, TokenKind::Semicolon, "';' after program name")?;

    let declarations = if peek_kind(tokens) == Some(TokenKind::Var) {
        parse_declarations(tokens)?
    } else {
        Vec::new()
    };

    expect(tokens, TokenKind::Begin, "'begin'")?;
    let statements = parse_statement_list(tokens)?;
    expect(tokens, TokenKind::End, "'end'")?;
    expect(tokens, TokenKind::Dot, "'.' at end of program")?;

    match tokens.peek() {
        Some(&token) if token.kind != TokenKind::Eof => {
            Err(SyntaxError::UnexpectedTrailingTokens { found:    token.describe(),
                                                        position: token.position, })
        },
        _ => Ok(Program { name,
                          declarations,
                          statements,
                          position }),
    }
}

/// Parses the `var` section.
///
/// Grammar: `declarations := 'var' decl { decl }`
///
/// Declaration groups are read for as long as the next token is an
/// identifier.
fn parse_declarations<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Declaration>>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::Var, "'var'")?;

    let mut declarations = vec![parse_declaration(tokens)?];
    while peek_kind(tokens) == Some(TokenKind::Identifier) {
        declarations.push(parse_declaration(tokens)?);
    }
    Ok(declarations)
}

/// Parses one declaration group.
///
/// Grammar: `decl := ID {',' ID} ':' 'integer' ';'`
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Declaration>
    where I: Iterator<Item = &'a Token>
{
    let names = parse_comma_separated(tokens, |t| parse_identifier(t, "variable name"))?;
    expect(tokens, TokenKind::Colon, "':' after variable list")?;
    let ty = parse_type(tokens)?;
    expect(tokens, TokenKind::Semicolon, "';' after declaration")?;

    Ok(Declaration { position: names[0].position,
                     names,
                     ty })
}

/// Parses a type name. `integer` is the only one.
fn parse_type<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Type>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == TokenKind::Integer => Ok(Type::Integer),
        Some(token) => Err(unexpected(token, "type 'integer'")),
        None => Err(SyntaxError::UnexpectedEndOfInput),
    }
}
