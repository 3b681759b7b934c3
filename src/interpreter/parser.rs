/// Program-level parsing.
///
/// Contains the parse entry points, the `program` rule and the `var`
/// declaration section.
pub mod core;

/// Unary operator and primary expression parsing.
///
/// Handles unary minus and the atoms of the expression grammar: literals,
/// variable references and parenthesized expressions.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the precedence layers for relational, additive and
/// multiplicative operators.
pub mod binary;

/// Block parsing.
///
/// Parses `;`-separated statement lists and `begin ... end` blocks.
pub mod block;

/// Utility functions for the parser.
///
/// Token matching, identifier and comma-separated list helpers shared by the
/// grammar rules.
pub mod utils;

/// Statement parsing.
///
/// Dispatches on the leading token to the assignment, `read`, `write`,
/// block, `if` and `while` rules.
pub mod statement;

pub use self::core::{ParseResult, parse, parse_program};
