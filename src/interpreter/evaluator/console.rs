use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

/// The interpreter's view of the terminal.
///
/// All interaction of a running program goes through this trait: prompts and
/// input for `read`, output lines for `write`, warnings about substituted
/// input, and the loop guard's confirmation question.
pub trait Console {
    /// Shows `prompt` and reads one line of input.
    ///
    /// # Returns
    /// The line without its terminator, or `None` at end of input.
    ///
    /// # Errors
    /// Any I/O error of the underlying streams.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Emits one line of program output.
    ///
    /// # Errors
    /// Any I/O error of the underlying stream.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Reports a recoverable problem to the user.
    ///
    /// # Errors
    /// Any I/O error of the underlying stream.
    fn warn(&mut self, message: &str) -> io::Result<()>;
}

/// A console on the process's standard streams.
///
/// Prompts and output go to stdout, warnings to stderr. Stdout is flushed
/// after every line so nothing is lost if the run is cut short.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")?;
        stdout.flush()
    }

    fn warn(&mut self, message: &str) -> io::Result<()> {
        writeln!(io::stderr().lock(), "Warning: {message}")
    }
}

/// A console that replays prepared input and records everything else.
///
/// Used to run programs without a terminal, e.g. in tests.
///
/// # Example
/// ```
/// use fortall::interpreter::evaluator::console::{Console, ScriptedConsole};
///
/// let mut console = ScriptedConsole::new(["42"]);
///
/// assert_eq!(console.read_line("x? ").unwrap(), Some("42".to_string()));
/// assert_eq!(console.read_line("y? ").unwrap(), None);
/// assert_eq!(console.prompts, ["x? ", "y? "]);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScriptedConsole {
    input:        VecDeque<String>,
    /// Every line written by the program, in order.
    pub output:   Vec<String>,
    /// Every warning issued, in order.
    pub warnings: Vec<String>,
    /// Every prompt shown, in order.
    pub prompts:  Vec<String>,
}

impl ScriptedConsole {
    /// Creates a console that answers prompts with `input`, one line each.
    pub fn new<I, S>(input: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { input: input.into_iter().map(Into::into).collect(),
               ..Self::default() }
    }

    /// Returns the number of input lines not yet consumed.
    #[must_use]
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn warn(&mut self, message: &str) -> io::Result<()> {
        self.warnings.push(message.to_string());
        Ok(())
    }
}
