use std::fmt;

/// A location in the source text.
///
/// Lines and columns both start at 1. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number in the source code.
    pub line:   usize,
    /// Column number in the source code.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    ///
    /// ## Example
    /// ```
    /// use fortall::ast::Position;
    ///
    /// let position = Position::new(3, 14);
    /// assert_eq!(position.to_string(), "line 3, column 14");
    /// ```
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// The static type of a declaration or an expression.
///
/// Variables can only be declared as `Integer`. `String` exists for string
/// literals, which may only appear in `write` statements and comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// The scalar integer type, also used to encode booleans.
    Integer,
    /// The type of string literals.
    String,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::String => write!(f, "string"),
        }
    }
}

/// A name together with the place it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The name as written in the source (names are case-sensitive).
    pub name:     String,
    /// Where the name appears.
    pub position: Position,
}

/// The root of the syntax tree.
///
/// A program owns its declarations and its top-level statements. All other
/// nodes are owned exclusively by their parent.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The name after the `program` keyword.
    pub name:         Identifier,
    /// Every `name, name: integer;` group of the `var` section, in order.
    pub declarations: Vec<Declaration>,
    /// The statements between the outer `begin` and `end`.
    pub statements:   Vec<Statement>,
    /// Position of the `program` keyword.
    pub position:     Position,
}

/// One declaration group, such as `a, b: integer;`.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The declared names, in source order.
    pub names:    Vec<Identifier>,
    /// The declared type.
    pub ty:       Type,
    /// Position of the first name in the group.
    pub position: Position,
}

/// A statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `name := expr`
    Assignment {
        /// The variable being assigned.
        target:   Identifier,
        /// The assigned expression.
        value:    Expr,
        /// Position of the target name.
        position: Position,
    },
    /// `read(a, b, ...)`
    Read {
        /// Variables receiving input, one prompt each.
        targets:  Vec<Identifier>,
        /// Position of the `read` keyword.
        position: Position,
    },
    /// `write(expr, ...)`
    Write {
        /// Expressions printed without separators on one line.
        values:   Vec<Expr>,
        /// Position of the `write` keyword.
        position: Position,
    },
    /// `begin ... end`
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Position of the `begin` keyword.
        position:   Position,
    },
    /// `if cond then stmt [else stmt]`
    If {
        /// The tested expression (nonzero means true).
        condition:   Expr,
        /// Statement executed when the condition holds.
        then_branch: Box<Self>,
        /// Statement executed otherwise, if present.
        else_branch: Option<Box<Self>>,
        /// Position of the `if` keyword.
        position:    Position,
    },
    /// `while cond do stmt`
    While {
        /// The expression tested before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
        /// Position of the `while` keyword.
        position:  Position,
    },
}

impl Statement {
    /// Gets the source position of `self`.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Assignment { position, .. }
            | Self::Read { position, .. }
            | Self::Write { position, .. }
            | Self::Block { position, .. }
            | Self::If { position, .. }
            | Self::While { position, .. } => *position,
        }
    }
}

/// An expression node.
///
/// Every expression is anchored to a distinct source token (the operator for
/// operations, the literal or name otherwise), so its position identifies it
/// within one program.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A binary operation such as `a + b` or `a <= b`.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator token.
        position: Position,
    },
    /// A unary operation (only negation exists).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Position of the operator token.
        position: Position,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Position of the name.
        position: Position,
    },
    /// An integer literal.
    IntegerLiteral {
        /// The literal value.
        value:    i64,
        /// Position of the literal.
        position: Position,
    },
    /// A string literal, with escapes already resolved.
    StringLiteral {
        /// The literal value.
        value:    String,
        /// Position of the opening quote.
        position: Position,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use fortall::ast::{Expr, Position};
    ///
    /// let expr = Expr::Variable { name:     "x".to_string(),
    ///                             position: Position::new(5, 2), };
    ///
    /// assert_eq!(expr.position(), Position::new(5, 2));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::BinaryOp { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::Variable { position, .. }
            | Self::IntegerLiteral { position, .. }
            | Self::StringLiteral { position, .. } => *position,
        }
    }
}

/// Operators that take two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `=`
    Equal,
    /// `<>`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
}

impl BinaryOperator {
    /// Returns `true` for `+`, `-`, `*` and `/`.
    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div)
    }

    /// Returns `true` for `=`, `<>`, `<`, `<=`, `>` and `>=`.
    #[must_use]
    pub const fn is_relational(self) -> bool {
        !self.is_arithmetic()
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Equal => "=",
            Self::NotEqual => "<>",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{symbol}")
    }
}

/// Operators that take one operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation, `-x`.
    Negate,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
