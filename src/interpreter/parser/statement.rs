use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_expression,
            block::parse_block,
            core::ParseResult,
            utils::{expect, parse_comma_separated, parse_identifier, peek_kind, unexpected},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an assignment (starts with an identifier),
/// - a `read` statement,
/// - a `write` statement,
/// - a `begin ... end` block,
/// - an `if` statement,
/// - a `while` statement.
///
/// The leading token alone decides which rule applies; there is no
/// backtracking.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// Returns `SyntaxError::Expected` with `"statement"` if no rule starts with
/// the current token.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(token) => match token.kind {
            TokenKind::Identifier => parse_assignment(tokens),
            TokenKind::Read => parse_read(tokens),
            TokenKind::Write => parse_write(tokens),
            TokenKind::Begin => parse_block(tokens),
            TokenKind::If => parse_if(tokens),
            TokenKind::While => parse_while(tokens),
            _ => Err(unexpected(token, "statement")),
        },
        None => Err(SyntaxError::UnexpectedEndOfInput),
    }
}

/// Parses an assignment.
///
/// Grammar: `assign := ID ':=' expr`
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let target = parse_identifier(tokens, "variable name")?;
    expect(tokens, TokenKind::Assign, "':=' in assignment")?;
    let value = parse_expression(tokens)?;

    Ok(Statement::Assignment { position: target.position,
                               target,
                               value })
}

/// Parses a `read` statement.
///
/// Grammar: `read := 'read' '(' ID {',' ID} ')'`
fn parse_read<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let position = expect(tokens, TokenKind::Read, "'read'")?.position;
    expect(tokens, TokenKind::LParen, "'(' after 'read'")?;
    let targets = parse_comma_separated(tokens, |t| parse_identifier(t, "variable name"))?;
    expect(tokens, TokenKind::RParen, "')' after variable list")?;

    Ok(Statement::Read { targets, position })
}

/// Parses a `write` statement.
///
/// Grammar: `write := 'write' '(' expr {',' expr} ')'`
fn parse_write<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let position = expect(tokens, TokenKind::Write, "'write'")?.position;
    expect(tokens, TokenKind::LParen, "'(' after 'write'")?;
    let values = parse_comma_separated(tokens, parse_expression)?;
    expect(tokens, TokenKind::RParen, "')' after expression list")?;

    Ok(Statement::Write { values, position })
}

/// Parses an `if` statement with an optional `else` branch.
///
/// Syntax:
/// ```text
///     if <condition> then <statement>
///     if <condition> then <statement> else <statement>
/// ```
/// A dangling `else` binds to the nearest `if`.
///
/// # Errors
/// - `Expected` if `then` does not follow the condition.
/// - Propagates any errors from the condition or the branches.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let position = expect(tokens, TokenKind::If, "'if'")?.position;
    let condition = parse_expression(tokens)?;
    expect(tokens, TokenKind::Then, "'then' after condition")?;
    let then_branch = Box::new(parse_statement(tokens)?);

    let else_branch = if peek_kind(tokens) == Some(TokenKind::Else) {
        tokens.next();
        Some(Box::new(parse_statement(tokens)?))
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       position })
}

/// Parses a `while` statement.
///
/// Grammar: `while := 'while' expr 'do' stmt`
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let position = expect(tokens, TokenKind::While, "'while'")?.position;
    let condition = parse_expression(tokens)?;
    expect(tokens, TokenKind::Do, "'do' after condition")?;
    let body = Box::new(parse_statement(tokens)?);

    Ok(Statement::While { condition,
                          body,
                          position })
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{Expr, Position, Program, Statement},
        error::SyntaxError,
        interpreter::{lexer::tokenize, parser::parse},
    };

    fn body(statements: &str) -> Result<Program, SyntaxError> {
        let source = format!("program P; var a, b: integer; begin {statements} end.");
        parse(&tokenize(&source).unwrap())
    }

    #[test]
    fn semicolon_before_end_is_accepted() {
        let program = body("a := 1; b := 2;").unwrap();
        assert_eq!(program.statements.len(), 2);
    }

    #[test]
    fn empty_statement_list_is_rejected() {
        let err = body("").unwrap_err();
        assert!(matches!(err, SyntaxError::Expected { ref expected, ref found, .. }
                              if expected == "statement" && found == "'end'"));
    }

    #[test]
    fn double_semicolon_is_rejected() {
        assert!(body("a := 1;; b := 2").is_err());
    }

    #[test]
    fn dangling_else_binds_to_inner_if() {
        let program = body("if a then if b then a := 1 else a := 2").unwrap();
        let Statement::If { then_branch,
                            else_branch, .. } = &program.statements[0]
        else {
            panic!("expected if statement");
        };
        assert!(else_branch.is_none());
        assert!(matches!(**then_branch, Statement::If { else_branch: Some(_), .. }));
    }

    #[test]
    fn read_and_write_lists() {
        let program = body("read(a, b); write(\"sum: \", a + b)").unwrap();
        match &program.statements[0] {
            Statement::Read { targets, position } => {
                assert_eq!(targets.len(), 2);
                assert_eq!(targets[1].name, "b");
                assert_eq!(*position, Position::new(1, 37));
            },
            other => panic!("unexpected statement {other:?}"),
        }
        match &program.statements[1] {
            Statement::Write { values, .. } => {
                assert_eq!(values.len(), 2);
                assert!(matches!(&values[0], Expr::StringLiteral { value, .. } if value == "sum: "));
            },
            other => panic!("unexpected statement {other:?}"),
        }
    }

    #[test]
    fn while_with_block_body() {
        let program = body("while a < 10 do begin a := a + 1; write(a) end").unwrap();
        let Statement::While { body, .. } = &program.statements[0] else {
            panic!("expected while statement");
        };
        assert!(matches!(**body, Statement::Block { ref statements, .. } if statements.len() == 2));
    }

    #[test]
    fn assignment_needs_walrus() {
        let err = body("a = 1").unwrap_err();
        assert!(matches!(err, SyntaxError::Expected { ref expected, .. } if expected == "':=' in assignment"));
    }

    #[test]
    fn missing_then() {
        let err = body("if a write(a)").unwrap_err();
        assert!(matches!(err, SyntaxError::Expected { ref expected, .. } if expected == "'then' after condition"));
    }
}
