//! Renders syntax trees for people.
//!
//! The output is a box-drawing tree, one node per line:
//!
//! ```text
//! Program: Sum
//! ├── Declaration: a, b : integer
//! └── Write
//!     └── Op: + : integer
//!         ├── Var: a : integer
//!         └── Var: b : integer
//! ```
//!
//! Rendering only reads the tree.

use crate::{
    ast::{Declaration, Expr, Program, Statement},
    interpreter::analyzer::TypeMap,
};

/// One line of the rendered tree and everything below it.
struct Node {
    label:    String,
    children: Vec<Self>,
}

impl Node {
    fn leaf(label: impl Into<String>) -> Self {
        Self { label:    label.into(),
               children: Vec::new(), }
    }

    fn branch(label: impl Into<String>, children: Vec<Self>) -> Self {
        Self { label: label.into(),
               children }
    }
}

/// Renders `program` as a tree.
///
/// When `types` is given, every expression that has an inferred type is
/// suffixed with `: <type>`.
///
/// # Example
/// ```
/// use fortall::{
///     interpreter::{lexer::tokenize, parser::parse},
///     printer::render,
/// };
///
/// let tokens = tokenize("program P; var a: integer; begin a := -1 end.").unwrap();
/// let tree = render(&parse(&tokens).unwrap(), None);
///
/// assert_eq!(tree,
///            "Program: P\n\
///             ├── Declaration: a : integer\n\
///             └── Assignment: a :=\n    \
///                 └── Op: -\n        \
///                     └── Num: 1\n");
/// ```
#[must_use]
pub fn render(program: &Program, types: Option<&TypeMap>) -> String {
    let printer = Printer { types };
    let children = program.declarations
                          .iter()
                          .map(Printer::declaration)
                          .chain(program.statements.iter().map(|s| printer.statement(s)))
                          .collect();
    let root = Node::branch(format!("Program: {}", program.name.name), children);

    let mut out = String::new();
    out.push_str(&root.label);
    out.push('\n');
    write_children(&root.children, "", &mut out);
    out
}

fn write_children(children: &[Node], prefix: &str, out: &mut String) {
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        out.push_str(prefix);
        out.push_str(if last { "└── " } else { "├── " });
        out.push_str(&child.label);
        out.push('\n');

        let nested = format!("{prefix}{}", if last { "    " } else { "│   " });
        write_children(&child.children, &nested, out);
    }
}

struct Printer<'a> {
    types: Option<&'a TypeMap>,
}

impl Printer<'_> {
    fn declaration(declaration: &Declaration) -> Node {
        let names = declaration.names
                               .iter()
                               .map(|name| name.name.as_str())
                               .collect::<Vec<_>>()
                               .join(", ");
        Node::leaf(format!("Declaration: {names} : {}", declaration.ty))
    }

    fn statement(&self, statement: &Statement) -> Node {
        match statement {
            Statement::Assignment { target, value, .. } => {
                Node::branch(format!("Assignment: {} :=", target.name), vec![self.expression(value)])
            },
            Statement::Read { targets, .. } => {
                let names = targets.iter()
                                   .map(|target| target.name.as_str())
                                   .collect::<Vec<_>>()
                                   .join(", ");
                Node::leaf(format!("Read: {names}"))
            },
            Statement::Write { values, .. } => {
                Node::branch("Write", values.iter().map(|v| self.expression(v)).collect())
            },
            Statement::Block { statements, .. } => {
                Node::branch("Block", statements.iter().map(|s| self.statement(s)).collect())
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                let mut parts = vec![Node::branch("Condition", vec![self.expression(condition)]),
                                     Node::branch("Then", vec![self.statement(then_branch)])];
                if let Some(else_branch) = else_branch {
                    parts.push(Node::branch("Else", vec![self.statement(else_branch)]));
                }
                Node::branch("If", parts)
            },
            Statement::While { condition, body, .. } => {
                Node::branch("While",
                             vec![Node::branch("Condition", vec![self.expression(condition)]),
                                  Node::branch("Body", vec![self.statement(body)])])
            },
        }
    }

    fn expression(&self, expr: &Expr) -> Node {
        let mut node = match expr {
            Expr::BinaryOp { left, op, right, .. } => {
                Node::branch(format!("Op: {op}"),
                             vec![self.expression(left), self.expression(right)])
            },
            Expr::UnaryOp { op, expr, .. } => {
                Node::branch(format!("Op: {op}"), vec![self.expression(expr)])
            },
            Expr::Variable { name, .. } => Node::leaf(format!("Var: {name}")),
            Expr::IntegerLiteral { value, .. } => Node::leaf(format!("Num: {value}")),
            Expr::StringLiteral { value, .. } => {
                Node::leaf(format!("String: \"{}\"", value.escape_debug()))
            },
        };

        if let Some(ty) = self.types
                              .and_then(|types| types.get(&expr.position()))
        {
            node.label = format!("{} : {ty}", node.label);
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::interpreter::{analyzer::analyze, lexer::tokenize, parser::parse};

    #[test]
    fn control_flow_layout() {
        let source = "program Loop; var i: integer; \
                      begin while i < 2 do begin i := i + 1 end; if i then write(\"done\") else read(i) end.";
        let program = parse(&tokenize(source).unwrap()).unwrap();

        let expected = "\
Program: Loop
├── Declaration: i : integer
├── While
│   ├── Condition
│   │   └── Op: <
│   │       ├── Var: i
│   │       └── Num: 2
│   └── Body
│       └── Block
│           └── Assignment: i :=
│               └── Op: +
│                   ├── Var: i
│                   └── Num: 1
└── If
    ├── Condition
    │   └── Var: i
    ├── Then
    │   └── Write
    │       └── String: \"done\"
    └── Else
        └── Read: i
";
        assert_eq!(render(&program, None), expected);
    }

    #[test]
    fn types_are_appended_when_known() {
        let source = "program P; var a: integer; begin write(a, \"x\", b) end.";
        let program = parse(&tokenize(source).unwrap()).unwrap();
        let analysis = analyze(&program);

        let tree = render(&program, Some(&analysis.types));
        assert!(tree.contains("Var: a : integer\n"));
        assert!(tree.contains("String: \"x\" : string\n"));
        // `b` is undeclared and stays untyped.
        assert!(tree.ends_with("└── Var: b\n"));
    }
}
