use tracing::debug;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        analyzer::CheckedProgram,
        evaluator::{console::Console, environment::Environment, policy::ExecutionPolicy},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes checked programs.
///
/// The interpreter owns the runtime [`Environment`] and borrows the console
/// it performs I/O on. Each call to [`execute`](Self::execute) starts from a
/// fresh environment in which every declared variable is 0.
///
/// ## Usage
///
/// ```
/// use fortall::interpreter::{
///     analyzer::check,
///     evaluator::{ExecutionPolicy, Interpreter, ScriptedConsole},
///     lexer::tokenize,
///     parser::parse,
/// };
///
/// let source = "program P; var a, b: integer; begin read(a); b := a * 2; write(\"b = \", b) end.";
/// let checked = check(parse(&tokenize(source).unwrap()).unwrap()).unwrap();
///
/// let mut console = ScriptedConsole::new(["21"]);
/// Interpreter::new(&mut console, ExecutionPolicy::default()).execute(&checked).unwrap();
///
/// assert_eq!(console.output, ["b = 42"]);
/// ```
pub struct Interpreter<'io> {
    environment: Environment,
    pub(super) console: &'io mut dyn Console,
    pub(super) policy:  ExecutionPolicy,
}

impl<'io> Interpreter<'io> {
    /// Creates an interpreter that talks to `console` and follows `policy`.
    #[must_use]
    pub fn new(console: &'io mut dyn Console, policy: ExecutionPolicy) -> Self {
        Self { environment: Environment::default(),
               console,
               policy }
    }

    /// Runs a checked program to completion.
    ///
    /// The environment is reset from the program's symbol table, then the
    /// top-level statements run in order.
    ///
    /// # Errors
    /// The first `RuntimeError` raised stops the run and is returned. Output
    /// written before the failure has already reached the console.
    pub fn execute(&mut self, program: &CheckedProgram) -> EvalResult<()> {
        self.environment = Environment::from_symbols(program.symbols());
        debug!(program = %program.program().name.name,
               variables = self.environment.len(),
               "execution started");

        for statement in &program.program().statements {
            self.execute_statement(statement)?;
        }

        debug!("execution finished");
        Ok(())
    }

    /// The variables as left by the last run.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    pub(super) const fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Operands are evaluated left to right, so in `a / 0` the left side is
    /// computed before the division fails.
    ///
    /// # Errors
    /// Division by zero, integer overflow, an unbound variable, or operands of
    /// the wrong runtime type.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::IntegerLiteral { value, .. } => Ok(Value::Integer(*value)),
            Expr::StringLiteral { value, .. } => Ok(Value::Str(value.clone())),
            Expr::Variable { name, position } => self.environment.get(name, *position).cloned(),
            Expr::UnaryOp { op, expr, position } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value, *position)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *position)
            },
        }
    }
}
