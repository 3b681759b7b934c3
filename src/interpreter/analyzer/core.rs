use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{BinaryOperator, Declaration, Expr, Position, Program, Statement, Type, UnaryOperator},
    error::SemanticError,
    interpreter::analyzer::symbol_table::SymbolTable,
};

/// Inferred expression types, keyed by the position of each expression.
///
/// Every expression node is anchored to its own source token, so a position
/// identifies at most one expression of a program. Expressions that could
/// not be typed (because of an error below them) have no entry.
pub type TypeMap = HashMap<Position, Type>;

/// Everything the checking pass learned about a program.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    /// Every successfully declared variable.
    pub symbols: SymbolTable,
    /// The inferred type of every typeable expression.
    pub types:   TypeMap,
    /// All violations, in the order they were found.
    pub errors:  Vec<SemanticError>,
}

impl Analysis {
    /// Returns `true` if no semantic error was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the inferred type of `expr`, if it has one.
    #[must_use]
    pub fn type_of(&self, expr: &Expr) -> Option<Type> {
        self.types.get(&expr.position()).copied()
    }
}

/// A program that passed semantic analysis without errors.
///
/// This can only be built from a clean [`Analysis`], which makes "the program
/// was checked" part of the evaluator's input type.
#[derive(Debug, Clone)]
pub struct CheckedProgram {
    program: Program,
    symbols: SymbolTable,
    types:   TypeMap,
}

impl CheckedProgram {
    /// Wraps `program` using an analysis already made of it.
    ///
    /// `analysis` must be the result of [`analyze`] on this same `program`.
    ///
    /// # Errors
    /// Returns the analysis errors if there is at least one.
    ///
    /// # Example
    /// ```
    /// use fortall::interpreter::{analyzer::{CheckedProgram, analyze}, lexer::tokenize, parser::parse};
    ///
    /// let program = parse(&tokenize("program P; var a: integer; begin a := 2 end.").unwrap()).unwrap();
    /// let analysis = analyze(&program);
    /// let checked = CheckedProgram::from_analysis(program, analysis).unwrap();
    ///
    /// assert_eq!(checked.symbols().len(), 1);
    /// ```
    pub fn from_analysis(program: Program, analysis: Analysis) -> Result<Self, Vec<SemanticError>> {
        let Analysis { symbols,
                       types,
                       errors, } = analysis;

        if errors.is_empty() {
            Ok(Self { program,
                      symbols,
                      types })
        } else {
            Err(errors)
        }
    }

    /// The checked syntax tree.
    #[must_use]
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// The declared variables.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// The inferred expression types.
    #[must_use]
    pub const fn types(&self) -> &TypeMap {
        &self.types
    }
}

/// Runs the checking pass over `program`.
///
/// The pass never stops early: every statement and expression is visited
/// exactly once, and every independent violation is recorded. A use of an
/// undeclared name leaves its expression untyped, and checks that depend on
/// an untyped operand are skipped instead of reporting a follow-up error.
///
/// # Example
/// ```
/// use fortall::interpreter::{analyzer::analyze, lexer::tokenize, parser::parse};
///
/// let source = "program P; var a, a: integer; begin write(b) end.";
/// let program = parse(&tokenize(source).unwrap()).unwrap();
/// let analysis = analyze(&program);
///
/// assert_eq!(analysis.errors.len(), 2);
/// assert_eq!(analysis.symbols.len(), 1);
/// ```
#[must_use]
pub fn analyze(program: &Program) -> Analysis {
    let mut analyzer = Analyzer::default();

    for declaration in &program.declarations {
        analyzer.declare(declaration);
    }
    for statement in &program.statements {
        analyzer.statement(statement);
    }

    debug!(symbols = analyzer.analysis.symbols.len(),
           errors = analyzer.analysis.errors.len(),
           "semantic analysis finished");
    analyzer.analysis
}

/// Checks `program` and, if it is clean, wraps it for execution.
///
/// # Errors
/// Returns every `SemanticError` found, in discovery order, if there is at
/// least one.
///
/// # Example
/// ```
/// use fortall::interpreter::{analyzer::check, lexer::tokenize, parser::parse};
///
/// let tokens = tokenize("program P; begin write(x) end.").unwrap();
/// let errors = check(parse(&tokens).unwrap()).unwrap_err();
///
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].to_string(),
///            "Semantic error at line 1, column 24: variable 'x' not declared");
/// ```
pub fn check(program: Program) -> Result<CheckedProgram, Vec<SemanticError>> {
    let analysis = analyze(&program);
    CheckedProgram::from_analysis(program, analysis)
}

#[derive(Default)]
struct Analyzer {
    analysis: Analysis,
}

impl Analyzer {
    fn error(&mut self, error: SemanticError) {
        self.analysis.errors.push(error);
    }

    fn declare(&mut self, declaration: &Declaration) {
        for name in &declaration.names {
            if let Err(error) = self.analysis.symbols.declare(name, declaration.ty) {
                self.error(error);
            }
        }
    }

    /// Resolves a name, recording `NotDeclared` if it is unknown.
    fn resolve(&mut self, name: &str, position: Position) -> Option<Type> {
        let ty = self.analysis.symbols.type_of(name);
        if ty.is_none() {
            self.error(SemanticError::NotDeclared { name: name.to_string(),
                                                    position });
        }
        ty
    }

    fn statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Assignment { target,
                                    value,
                                    position, } => {
                let expected = self.resolve(&target.name, target.position);
                let found = self.expression(value);

                if let (Some(expected), Some(found)) = (expected, found)
                   && expected != found
                {
                    self.error(SemanticError::IncompatibleTypes { name: target.name.clone(),
                                                                  expected,
                                                                  found,
                                                                  position: *position });
                }
            },
            Statement::Read { targets, .. } => {
                for target in targets {
                    self.resolve(&target.name, target.position);
                }
            },
            Statement::Write { values, .. } => {
                for value in values {
                    self.expression(value);
                }
            },
            Statement::Block { statements, .. } => {
                for statement in statements {
                    self.statement(statement);
                }
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            position, } => {
                self.condition(condition, *position);
                self.statement(then_branch);
                if let Some(else_branch) = else_branch {
                    self.statement(else_branch);
                }
            },
            Statement::While { condition,
                               body,
                               position, } => {
                self.condition(condition, *position);
                self.statement(body);
            },
        }
    }

    /// Conditions are reported at the statement that owns them.
    fn condition(&mut self, condition: &Expr, position: Position) {
        if let Some(found) = self.expression(condition)
           && found != Type::Integer
        {
            self.error(SemanticError::ConditionNotInteger { found, position });
        }
    }

    /// Infers the type of `expr`, recording it in the type map.
    fn expression(&mut self, expr: &Expr) -> Option<Type> {
        let ty = match expr {
            Expr::IntegerLiteral { .. } => Some(Type::Integer),
            Expr::StringLiteral { .. } => Some(Type::String),
            Expr::Variable { name, position } => self.resolve(name, *position),
            Expr::UnaryOp { op, expr, position } => {
                let operand = self.expression(expr);
                self.unary(*op, operand, *position)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let left = self.expression(left);
                let right = self.expression(right);
                self.binary(*op, left, right, *position)
            },
        };

        if let Some(ty) = ty {
            self.analysis.types.insert(expr.position(), ty);
        }
        ty
    }

    fn unary(&mut self, op: UnaryOperator, operand: Option<Type>, position: Position) -> Option<Type> {
        match (op, operand?) {
            (UnaryOperator::Negate, Type::Integer) => Some(Type::Integer),
            (UnaryOperator::Negate, found) => {
                self.error(SemanticError::UnaryOperand { found, position });
                None
            },
        }
    }

    fn binary(&mut self,
              op: BinaryOperator,
              left: Option<Type>,
              right: Option<Type>,
              position: Position)
              -> Option<Type> {
        let (left, right) = (left?, right?);

        if op.is_arithmetic() {
            if left == Type::Integer && right == Type::Integer {
                return Some(Type::Integer);
            }
            self.error(SemanticError::ArithmeticOperands { op,
                                                           left,
                                                           right,
                                                           position });
            return None;
        }

        if left == right {
            Some(Type::Integer)
        } else {
            self.error(SemanticError::RelationalOperands { op,
                                                           left,
                                                           right,
                                                           position });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{lexer::tokenize, parser::parse};

    fn analysis(source: &str) -> Analysis {
        analyze(&parse(&tokenize(source).unwrap()).unwrap())
    }

    #[test]
    fn clean_program_types_every_expression() {
        let result = analysis("program P; var a, b: integer; begin a := 3; b := -a; write(a + b, \"!\") end.");
        assert!(result.is_clean());
        // 3, a, -a, a, b, a + b, "!"
        assert_eq!(result.types.len(), 7);
        assert_eq!(result.types.get(&Position::new(1, 67)), Some(&Type::String));
    }

    #[test]
    fn every_duplicate_is_reported() {
        let result = analysis("program P; var a, b: integer; a, c: integer; b: integer; begin a := 1 end.");
        let names: Vec<_> = result.errors
                                  .iter()
                                  .map(|e| match e {
                                      SemanticError::AlreadyDeclared { name, .. } => name.as_str(),
                                      other => panic!("unexpected error {other}"),
                                  })
                                  .collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(result.symbols.len(), 3);
    }

    #[test]
    fn undeclared_operand_does_not_cascade() {
        let result = analysis("program P; var a: integer; begin a := x + 1; if y then a := 2 end.");
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors
                      .iter()
                      .all(|e| matches!(e, SemanticError::NotDeclared { .. })));
    }

    #[test]
    fn undeclared_target_still_checks_value() {
        let result = analysis("program P; begin z := q end.");
        let names: Vec<_> = result.errors
                                  .iter()
                                  .filter_map(|e| match e {
                                      SemanticError::NotDeclared { name, .. } => Some(name.as_str()),
                                      _ => None,
                                  })
                                  .collect();
        assert_eq!(names, ["z", "q"]);
    }

    #[test]
    fn string_assignment_is_incompatible() {
        let result = analysis("program P; var a: integer; begin a := \"hi\" end.");
        assert!(matches!(result.errors.as_slice(),
                         [SemanticError::IncompatibleTypes { expected: Type::Integer,
                                                             found: Type::String,
                                                             .. }]));
    }

    #[test]
    fn string_arithmetic_and_mixed_comparison() {
        let result = analysis("program P; var a: integer; begin write(\"x\" + 1); write(a = \"x\") end.");
        assert!(matches!(result.errors[0], SemanticError::ArithmeticOperands { op: BinaryOperator::Add, .. }));
        assert!(matches!(result.errors[1], SemanticError::RelationalOperands { op: BinaryOperator::Equal, .. }));
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn string_comparison_is_an_integer() {
        let result = analysis("program P; begin if \"a\" < \"b\" then write(1) end.");
        assert!(result.is_clean());
    }

    #[test]
    fn string_condition_and_negation() {
        let result = analysis("program P; begin while \"s\" do write(-\"s\") end.");
        assert_eq!(result.errors.len(), 2);
        assert!(matches!(result.errors[0],
                         SemanticError::ConditionNotInteger { found: Type::String,
                                                              position: Position { line: 1,
                                                                                   column: 18 } }));
        assert!(matches!(result.errors[1], SemanticError::UnaryOperand { found: Type::String, .. }));
    }

    #[test]
    fn undeclared_read_target() {
        let result = analysis("program P; var a: integer; begin read(a, b) end.");
        assert!(matches!(result.errors.as_slice(),
                         [SemanticError::NotDeclared { name, position }]
                         if name == "b" && *position == Position::new(1, 42)));
    }

    #[test]
    fn check_wraps_clean_programs() {
        let tokens = tokenize("program P; var a: integer; begin a := 1 end.").unwrap();
        let checked = check(parse(&tokens).unwrap()).unwrap();
        assert_eq!(checked.symbols().type_of("a"), Some(Type::Integer));
        assert_eq!(checked.program().name.name, "P");
        assert_eq!(checked.types().len(), 1);
    }

    #[test]
    fn existing_analysis_builds_checked_program() {
        let clean = parse(&tokenize("program P; var a: integer; begin a := 1 + 2 end.").unwrap()).unwrap();
        let analysis = analyze(&clean);
        let types = analysis.types.clone();
        let checked = CheckedProgram::from_analysis(clean, analysis).unwrap();
        assert_eq!(checked.types(), &types);

        let dirty = parse(&tokenize("program P; begin x := 1 end.").unwrap()).unwrap();
        let analysis = analyze(&dirty);
        let errors = CheckedProgram::from_analysis(dirty, analysis).unwrap_err();
        assert!(matches!(errors.as_slice(), [SemanticError::NotDeclared { name, .. }] if name == "x"));
    }
}
