/// Checked integer helpers.
///
/// This module provides the integer routines shared by the parser and the
/// evaluator: turning literal text into a 64-bit value without silent
/// wrap-around, and the language's division rule. Every helper reports failure
/// through its return value instead of panicking, so callers can attach a
/// source position and raise the matching diagnostic.
pub mod num;
