use super::expressions::Expr;

/// The root node: the ordered top-level statements of one program.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

/// What a `print` statement prints: literal text taken verbatim from a
/// string token, or a computed expression.
#[derive(Debug, Clone, PartialEq)]
pub enum PrintValue {
    Text(String),
    Expression(Expr),
}

/// A statement node. Built once by the parser, read-only thereafter.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Print(PrintValue),
    Let {
        variable: String,
        expression: Expr,
    },
    Input {
        variable: String,
    },
    If {
        condition: Expr,
        then_branch: Vec<Stmt>,
    },
    While {
        condition: Expr,
        body: Vec<Stmt>,
    },
    Label {
        name: String,
    },
    Goto {
        label: String,
    },
}
