use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

/// Number of iterations after which a loop asks whether to continue.
pub const DEFAULT_LOOP_LIMIT: u64 = 1000;

/// What to do when a loop reaches its iteration limit.
pub enum LoopGuard {
    /// Ask on the console; `y` or `yes` continues, anything else stops.
    Prompt,
    /// Keep going without asking.
    Continue,
    /// Stop the run.
    Abort,
    /// Ask a callback, which receives the completed iteration count and
    /// returns whether to continue.
    Decide(Box<dyn FnMut(u64) -> bool>),
}

impl fmt::Debug for LoopGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prompt => write!(f, "Prompt"),
            Self::Continue => write!(f, "Continue"),
            Self::Abort => write!(f, "Abort"),
            Self::Decide(_) => write!(f, "Decide(..)"),
        }
    }
}

/// What `read` does with input that is not an integer, or with end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFallback {
    /// Warn and store the given value instead.
    Substitute(i64),
    /// Stop the run with `RuntimeError::InvalidInput`.
    Fail,
}

/// A flag another thread (typically a Ctrl-C handler) raises to stop a run.
///
/// Clones share the same flag. The interpreter checks it before every
/// statement and after every line of input, and stops with
/// `RuntimeError::Aborted` once it is set.
///
/// # Example
/// ```
/// use fortall::interpreter::evaluator::policy::Interrupt;
///
/// let interrupt = Interrupt::default();
/// let handle = interrupt.clone();
///
/// handle.raise();
/// assert!(interrupt.is_raised());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Interrupt(Arc<AtomicBool>);

impl Interrupt {
    /// Sets the flag. Returns `true` if it was already set.
    pub fn raise(&self) -> bool {
        self.0.swap(true, Ordering::SeqCst)
    }

    /// Returns `true` once [`raise`](Self::raise) has been called on any clone.
    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Policies the interpreter consults while running a program.
///
/// The default matches interactive use: every 1000 iterations of a loop the
/// user is asked whether to continue, and bad input reads as 0.
///
/// # Example
/// ```
/// use fortall::interpreter::evaluator::policy::{ExecutionPolicy, InputFallback, LoopGuard};
///
/// let headless = ExecutionPolicy { on_loop_limit: LoopGuard::Abort,
///                                  on_bad_input: InputFallback::Fail,
///                                  ..ExecutionPolicy::default() };
///
/// assert_eq!(headless.loop_limit, Some(1000));
/// ```
#[derive(Debug)]
pub struct ExecutionPolicy {
    /// Iterations between two guard checks; `None` disables the guard.
    pub loop_limit:    Option<u64>,
    /// Decision made each time the limit is reached.
    pub on_loop_limit: LoopGuard,
    /// Handling of unusable `read` input.
    pub on_bad_input:  InputFallback,
    /// External request to stop the run.
    pub interrupt:     Interrupt,
}

impl Default for ExecutionPolicy {
    fn default() -> Self {
        Self { loop_limit:    Some(DEFAULT_LOOP_LIMIT),
               on_loop_limit: LoopGuard::Prompt,
               on_bad_input:  InputFallback::Substitute(0),
               interrupt:     Interrupt::default(), }
    }
}
