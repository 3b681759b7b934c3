/// The checking pass.
///
/// Walks a parsed program once, builds the symbol table, infers a type for
/// every expression and collects every declaration or type violation it
/// finds. A clean result can be wrapped into a
/// [`CheckedProgram`](core::CheckedProgram), the only input the evaluator
/// accepts.
pub mod core;

/// The flat table of declared variables.
pub mod symbol_table;

pub use self::{
    core::{Analysis, CheckedProgram, TypeMap, analyze, check},
    symbol_table::{Symbol, SymbolTable},
};
