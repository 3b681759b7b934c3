/// The analyzer module checks a parsed program before it may run.
///
/// The analyzer walks the AST once, registers every declaration in a flat
/// symbol table, infers the type of every expression and collects all
/// declaration and type violations instead of stopping at the first one.
///
/// # Responsibilities
/// - Reports repeated declarations and uses of undeclared names.
/// - Checks operand, condition and assignment types.
/// - Produces the `CheckedProgram` the evaluator requires.
pub mod analyzer;
/// The evaluator module executes checked programs.
///
/// The evaluator walks the statements of a checked program, evaluates
/// expressions, keeps the runtime environment and performs console I/O.
///
/// # Responsibilities
/// - Runs assignments, `read`, `write`, blocks, `if` and `while`.
/// - Enforces the loop guard and the input fallback policies.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces the complete sequence of
/// tokens, each carrying its kind, its text and the line and column where it
/// starts. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source location.
/// - Skips whitespace and `/* ... */` comments, resolves string escapes and
///   matches keywords case-insensitively.
/// - Reports lexical errors for invalid or unterminated input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive descent parser with one token of lookahead. It
/// stops at the first token that does not fit the grammar.
///
/// # Responsibilities
/// - Converts tokens into a `Program` with declarations and statements.
/// - Encodes operator precedence through grammar layering.
/// - Reports syntax errors with the expected construct and location.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
pub mod value;
