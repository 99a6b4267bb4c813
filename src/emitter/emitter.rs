use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

use crate::{
    ast::statements::{Program, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::stmt::emit_statement;

/// Spaces per nesting level in the emitted text. Cosmetic only.
pub const TAB_WIDTH: usize = 2;

lazy_static! {
    /// Arithmetic operator tokens mapped to their textual symbol.
    pub static ref OPERATOR_LOOKUP: HashMap<TokenKind, &'static str> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Plus, "+");
        map.insert(TokenKind::Dash, "-");
        map.insert(TokenKind::Star, "*");
        map.insert(TokenKind::Slash, "/");
        map
    };

    /// Comparison operator tokens mapped to their textual symbol.
    pub static ref COMPARATOR_LOOKUP: HashMap<TokenKind, &'static str> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Assignment, "==");
        map.insert(TokenKind::Equals, "==");
        map.insert(TokenKind::NotEquals, "!=");
        map.insert(TokenKind::Less, "<");
        map.insert(TokenKind::LessEquals, "<=");
        map.insert(TokenKind::Greater, ">");
        map.insert(TokenKind::GreaterEquals, ">=");
        map
    };
}

pub fn indentation(depth: usize) -> String {
    " ".repeat(TAB_WIDTH * depth)
}

/// Walks a validated program once and produces the output text.
///
/// Carries its own symbol set, independent of the parser's: the first time
/// a name is bound the emitter produces a fresh mutable declaration, and a
/// plain reassignment afterwards.
pub struct Emitter {
    symbols: HashSet<String>,
}

impl Emitter {
    pub fn new() -> Self {
        Emitter {
            symbols: HashSet::new(),
        }
    }

    /// True once the emitter has bound the name, through `let` or `input`.
    pub fn is_symbol_bound(&self, name: &str) -> bool {
        self.symbols.contains(name)
    }

    pub fn bind_symbol(&mut self, name: &str) {
        self.symbols.insert(name.to_string());
    }

    /// Emits the whole program inside the fixed `fn main` wrapper.
    ///
    /// The stdin prelude is prepended only when the program reads input
    /// somewhere in its tree.
    pub fn emit(&mut self, program: &Program) -> Result<String, Error> {
        let mut body = String::new();
        for statement in program.statements.iter() {
            body.push_str(&emit_statement(self, statement, 1)?);
        }

        let mut output = String::new();
        if program_reads_input(&program.statements) {
            output.push_str("use std::io::stdin;\n\n");
        }
        output.push_str("fn main() {\n");
        output.push_str(&body);
        output.push_str("}\n");

        Ok(output)
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Emitter::new()
    }
}

fn program_reads_input(statements: &[Stmt]) -> bool {
    statements.iter().any(|statement| match statement {
        Stmt::Input { .. } => true,
        Stmt::If { then_branch, .. } => program_reads_input(then_branch),
        Stmt::While { body, .. } => program_reads_input(body),
        _ => false,
    })
}
