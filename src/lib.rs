//! # fortall
//!
//! fortall is an interpreter for Fortall, a small Pascal-like teaching
//! language, written in Rust. Programs declare integer variables, read and
//! write values on the console, and use `if` and `while` for control flow.
//!
//! A program goes through four stages, each in its own module:
//! [`lexer`](interpreter::lexer), [`parser`](interpreter::parser),
//! [`analyzer`](interpreter::analyzer) and
//! [`evaluator`](interpreter::evaluator). [`compile`] runs the first three,
//! [`run`] runs all four.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{
        analyzer::{CheckedProgram, check},
        evaluator::{Console, ExecutionPolicy, Interpreter},
        lexer::tokenize,
        parser::parse,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser, checked by the analyzer and walked by the evaluator.
///
/// # Responsibilities
/// - Defines declaration, statement and expression types for all language
///   constructs.
/// - Attaches source positions to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for every stage.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// checking or running code. Every error carries the line and column it
/// refers to and renders as `"<Kind> error at line L, column C: message"`.
///
/// # Responsibilities
/// - Defines one error enum per stage.
/// - Combines them into the pipeline-wide `Error`.
pub mod error;
/// Orchestrates the stages of code execution.
///
/// This module ties together lexing, parsing, semantic analysis, evaluation
/// and the runtime value representation.
pub mod interpreter;
/// Renders syntax trees for inspection.
pub mod printer;
/// General numeric helpers.
///
/// This module provides checked integer routines used by the parser and the
/// evaluator: literal parsing and floor division.
pub mod util;

/// Lexes, parses and checks `source`.
///
/// # Errors
/// The first lexical or syntax error, or every semantic error.
///
/// # Examples
/// ```
/// use fortall::{compile, error::Error};
///
/// let checked = compile("program P; var a: integer; begin a := 1 end.").unwrap();
/// assert_eq!(checked.program().name.name, "P");
///
/// // Two independent violations are both reported.
/// let source = "program P; var a, a: integer; begin b := 1 end.";
/// let Err(Error::Semantic(errors)) = compile(source) else {
///     panic!("expected semantic errors");
/// };
/// assert_eq!(errors.len(), 2);
/// ```
pub fn compile(source: &str) -> Result<CheckedProgram, Error> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;
    let checked = check(program)?;

    debug!(program = %checked.program().name.name, "program checked");
    Ok(checked)
}

/// Compiles `source` and, if it is clean, runs it on `console`.
///
/// Nothing is executed unless all three checking stages succeed.
///
/// # Errors
/// Any error of [`compile`], or the runtime error that stopped execution.
///
/// # Examples
/// ```
/// use fortall::{
///     error::{Error, RuntimeError},
///     interpreter::evaluator::{ExecutionPolicy, ScriptedConsole},
///     run,
/// };
///
/// let mut console = ScriptedConsole::default();
/// let source = "program P; var a, b: integer; begin a := 3; b := 4; write(a + b) end.";
/// run(source, &mut console, ExecutionPolicy::default()).unwrap();
/// assert_eq!(console.output, ["7"]);
///
/// let mut console = ScriptedConsole::default();
/// let source = "program P; var a: integer; begin a := 1 / 0 end.";
/// let result = run(source, &mut console, ExecutionPolicy::default());
/// assert!(matches!(result, Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))));
/// assert!(console.output.is_empty());
/// ```
pub fn run(source: &str, console: &mut dyn Console, policy: ExecutionPolicy) -> Result<(), Error> {
    let checked = compile(source)?;
    Interpreter::new(console, policy).execute(&checked)?;
    Ok(())
}
