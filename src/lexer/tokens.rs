use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Reserved words of the dialect, keyed by their lowercase spelling.
    /// Keyword matching is case-insensitive; look up with a lowercased value.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("label", TokenKind::Label);
        map.insert("goto", TokenKind::Goto);
        map.insert("print", TokenKind::Print);
        map.insert("input", TokenKind::Input);
        map.insert("let", TokenKind::Let);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("endif", TokenKind::EndIf);
        map.insert("while", TokenKind::While);
        map.insert("repeat", TokenKind::Repeat);
        map.insert("endwhile", TokenKind::EndWhile);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Newline,
    Number,
    Identifier,
    String,

    Assignment,    // =
    Equals,        // ==
    NotEquals,     // !=
    Less,          // <
    LessEquals,    // <=
    Greater,       // >
    GreaterEquals, // >=

    Plus,
    Dash,
    Star,
    Slash,

    // Reserved
    Label,
    Goto,
    Print,
    Input,
    Let,
    If,
    Then,
    EndIf,
    While,
    Repeat,
    EndWhile,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A lexical unit: a kind plus the literal text it was scanned from.
///
/// Tokens are immutable once produced. Keyword tokens keep their source
/// spelling in `value`, so `PRINT` and `print` lex to the same kind with
/// different values.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}
