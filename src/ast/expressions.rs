use crate::lexer::tokens::TokenKind;

/// An expression node.
///
/// Nodes are built once by the parser and never mutated. Each composite
/// node exclusively owns its children; the tree has no cycles and no
/// shared subtrees. Equality and Debug output exist for diagnostics and
/// tests only.
///
/// Number and Symbol keep the literal source text, so `3.14` survives to
/// emission unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(String),
    Symbol(String),
    Unary {
        operator: TokenKind,
        operand: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        operator: TokenKind,
        right: Box<Expr>,
    },
    Comparison {
        left: Box<Expr>,
        operator: TokenKind,
        right: Box<Expr>,
    },
}
