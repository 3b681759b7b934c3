use std::io;

use tracing::{debug, trace, warn};

use crate::{
    ast::{Expr, Identifier, Position, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            policy::{InputFallback, LoopGuard},
        },
        value::core::Value,
    },
};

/// Wraps a console failure into a runtime error at `position`.
fn io_error(error: &io::Error, position: Position) -> RuntimeError {
    RuntimeError::Io { details: error.to_string(),
                       position }
}

impl Interpreter<'_> {
    /// Fails with `RuntimeError::Aborted` if the run was interrupted.
    fn check_interrupt(&self, position: Position) -> EvalResult<()> {
        if self.policy.interrupt.is_raised() {
            warn!(%position, "execution interrupted");
            return Err(RuntimeError::Aborted { position });
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// # Errors
    /// Any `RuntimeError` raised by the statement or by statements nested in
    /// it.
    pub fn execute_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        trace!(position = %statement.position(), "executing statement");
        self.check_interrupt(statement.position())?;

        match statement {
            Statement::Assignment { target, value, .. } => {
                let value = self.eval(value)?;
                self.environment_mut()
                    .assign(&target.name, value, target.position)
            },
            Statement::Read { targets, position } => self.execute_read(targets, *position),
            Statement::Write { values, position } => self.execute_write(values, *position),
            Statement::Block { statements, .. } => {
                for statement in statements {
                    self.execute_statement(statement)?;
                }
                Ok(())
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.eval(condition)?.is_truthy() {
                    self.execute_statement(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute_statement(else_branch)
                } else {
                    Ok(())
                }
            },
            Statement::While { condition,
                               body,
                               position, } => self.execute_while(condition, body, *position),
        }
    }

    /// Runs a pre-test loop.
    ///
    /// Every time the number of completed iterations reaches a multiple of
    /// the policy's loop limit, the loop guard decides whether to go on.
    fn execute_while(&mut self, condition: &Expr, body: &Statement, position: Position) -> EvalResult<()> {
        let mut iterations: u64 = 0;

        while self.eval(condition)?.is_truthy() {
            self.execute_statement(body)?;
            iterations += 1;

            if let Some(limit) = self.policy.loop_limit
               && iterations.is_multiple_of(limit)
               && !self.confirm_continue(iterations, position)?
            {
                warn!(iterations, %position, "loop stopped by the loop guard");
                return Err(RuntimeError::Interrupted { iterations, position });
            }
        }

        debug!(iterations, %position, "loop finished");
        Ok(())
    }

    /// Asks the loop guard whether a long-running loop may continue.
    fn confirm_continue(&mut self, iterations: u64, position: Position) -> EvalResult<bool> {
        match &mut self.policy.on_loop_limit {
            LoopGuard::Continue => Ok(true),
            LoopGuard::Abort => Ok(false),
            LoopGuard::Decide(decide) => Ok(decide(iterations)),
            LoopGuard::Prompt => {
                let prompt = format!("Loop executed {iterations} times. Continue? (y/n): ");
                let answer = self.console
                                 .read_line(&prompt)
                                 .map_err(|e| io_error(&e, position))?;
                self.check_interrupt(position)?;

                Ok(answer.is_some_and(|answer| {
                             matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
                         }))
            },
        }
    }

    /// Prompts for and stores one integer per target.
    fn execute_read(&mut self, targets: &[Identifier], position: Position) -> EvalResult<()> {
        for target in targets {
            let prompt = format!("Enter a value for {}: ", target.name);
            let line = self.console
                           .read_line(&prompt)
                           .map_err(|e| io_error(&e, position))?;
            self.check_interrupt(position)?;

            let value = match line {
                Some(line) => match line.trim().parse::<i64>() {
                    Ok(value) => value,
                    Err(_) => {
                        let reason = format!("invalid value '{}'", line.trim());
                        self.input_fallback(&target.name, reason, position)?
                    },
                },
                None => self.input_fallback(&target.name, "end of input".to_string(), position)?,
            };

            self.environment_mut()
                .assign(&target.name, Value::Integer(value), target.position)?;
        }
        Ok(())
    }

    /// Decides what an unusable `read` stores, according to the policy.
    fn input_fallback(&mut self, name: &str, reason: String, position: Position) -> EvalResult<i64> {
        match self.policy.on_bad_input {
            InputFallback::Substitute(value) => {
                self.console
                    .warn(&format!("{reason}, assigning {value} to {name}"))
                    .map_err(|e| io_error(&e, position))?;
                Ok(value)
            },
            InputFallback::Fail => Err(RuntimeError::InvalidInput { name: name.to_string(),
                                                                    reason,
                                                                    position }),
        }
    }

    /// Evaluates every expression, then writes them as one line.
    ///
    /// Nothing is written if any expression fails.
    fn execute_write(&mut self, values: &[Expr], position: Position) -> EvalResult<()> {
        let line = values.iter()
                         .map(|value| self.eval(value).map(|value| value.to_string()))
                         .collect::<EvalResult<String>>()?;

        self.console
            .write_line(&line)
            .map_err(|e| io_error(&e, position))
    }
}
