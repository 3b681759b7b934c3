use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses a full expression.
///
/// This is the entry point of the expression grammar and currently the same
/// as [`parse_relational`].
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of an expression.
///
/// # Returns
/// The parsed expression tree.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_relational(tokens)
}

/// Parses a comparison.
///
/// Relational operators do not chain: `a < b < c` stops after `a < b` and
/// leaves the second `<` for the caller, which then reports it.
///
/// The rule is: `relational := additive [("=" | "<>" | "<" | "<=" | ">" |
/// ">=") additive]`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// Either the additive expression itself or a single relational
/// `Expr::BinaryOp` positioned at the operator.
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let left = parse_additive(tokens)?;

    if let Some(token) = tokens.peek()
       && let Some(op) = token_to_binary_operator(token.kind)
       && op.is_relational()
    {
        let position = token.position;
        tokens.next();
        let right = parse_additive(tokens)?;
        return Ok(Expr::BinaryOp { left: Box::new(left),
                                   op,
                                   right: Box::new(right),
                                   position });
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token.kind)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let position = token.position;
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_unary(tokens)?;
    while let Some(token) = tokens.peek() {
        if let Some(op) = token_to_binary_operator(token.kind)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let position = token.position;
            tokens.next();
            let right = parse_unary(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token kind to its corresponding binary operator.
///
/// # Parameters
/// - `kind`: Token kind to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the kind is an arithmetic or relational
/// operator, otherwise `None`. `:=` is not an operator in expressions.
///
/// # Example
/// ```
/// use fortall::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::NotEqual),
///            Some(BinaryOperator::NotEqual));
/// assert_eq!(token_to_binary_operator(TokenKind::Assign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Equal => Some(BinaryOperator::Equal),
        TokenKind::NotEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}
