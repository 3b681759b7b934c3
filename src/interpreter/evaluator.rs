/// Binary operator evaluation logic.
///
/// Handles checked integer arithmetic, floor division and comparisons of
/// integers and strings.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements checked arithmetic negation.
pub mod unary;

/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter` itself, the program entry point and expression
/// dispatch.
pub mod core;

/// Statement execution.
///
/// Runs assignments, `read`, `write`, blocks, `if` and `while`, including the
/// loop guard and the read fallback.
pub mod statement;

/// The runtime variable store.
pub mod environment;

/// Line-oriented input and output.
///
/// Defines the `Console` trait the interpreter talks to, a standard-stream
/// implementation and a scripted one for headless runs.
pub mod console;

/// Configurable execution policies.
///
/// Decides what happens when a loop runs long, when `read` receives
/// unusable input, and how a run is stopped from outside.
pub mod policy;

pub use self::{
    console::{Console, ScriptedConsole, StdConsole},
    core::{EvalResult, Interpreter},
    environment::Environment,
    policy::{DEFAULT_LOOP_LIMIT, ExecutionPolicy, InputFallback, Interrupt, LoopGuard},
};
