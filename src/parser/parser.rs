//! Parser state and the program-level entry point.
//!
//! The parser pulls tokens lazily from the lexer, holding the current token
//! and one token of lookahead. Alongside the token window it tracks three
//! name sets:
//!
//! - declared variables, consulted when an identifier is read
//! - declared labels, checked for duplicates at declaration time
//! - referenced labels, reconciled against declarations after the whole
//!   program has been parsed (forward references to labels are legal)

use std::collections::{HashMap, HashSet};

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

pub struct Parser {
    /// Token source, pulled one token at a time
    lexer: Lexer,
    /// The token currently being considered
    current_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Variable names declared so far (one flat namespace)
    symbols: HashSet<String>,
    /// Label names declared with `label`
    labels_declared: HashSet<String>,
    /// Label names referenced by `goto`
    labels_referenced: HashSet<String>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
}

impl Parser {
    /// Creates a parser over the given lexer.
    ///
    /// Pulls the first two tokens to fill the lookahead window, so
    /// construction itself can surface a lexing error.
    pub fn new(mut lexer: Lexer) -> Result<Self, Error> {
        let current_token = lexer.next_token()?;
        let peek_token = lexer.next_token()?;

        let mut parser = Parser {
            lexer,
            current_token,
            peek_token,
            symbols: HashSet::new(),
            labels_declared: HashSet::new(),
            labels_referenced: HashSet::new(),
            stmt_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        Ok(parser)
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    /// Advances the token window and returns the consumed token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        let upcoming = std::mem::replace(&mut self.peek_token, next);

        Ok(std::mem::replace(&mut self.current_token, upcoming))
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `error` - Optional custom error to return if expectation fails
    ///
    /// # Returns
    ///
    /// Returns Ok with the consumed token if the current token matches,
    /// otherwise returns an Error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return Err(match error {
                Some(error) => error,
                None => Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: token.value.clone(),
                        message: format!("expected {}", expected_kind),
                    },
                    token.span.start.clone(),
                ),
            });
        }

        self.advance()
    }

    /// Expects a token of the specified kind with the default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Marks a variable name as declared. Re-declaring is legal.
    pub fn declare_symbol(&mut self, name: &str) {
        self.symbols.insert(name.to_string());
    }

    pub fn is_symbol_declared(&self, name: &str) -> bool {
        self.symbols.contains(name)
    }

    /// Records a label declaration. Returns false if the name was already
    /// declared, which is a fatal error for the caller to raise.
    pub fn declare_label(&mut self, name: &str) -> bool {
        self.labels_declared.insert(name.to_string())
    }

    /// Records a goto target. Not validated here; resolution happens once
    /// the whole program has been parsed.
    pub fn reference_label(&mut self, name: &str) {
        self.labels_referenced.insert(name.to_string());
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token.span.start.clone()
    }

    /// Parses the whole program into its root node.
    ///
    /// Skips leading blank lines, parses statements until EOF, then
    /// reconciles goto references against declared labels.
    pub fn program(&mut self) -> Result<Program, Error> {
        while self.current_token_kind() == TokenKind::Newline {
            self.advance()?;
        }

        let mut statements = vec![];
        while self.current_token_kind() != TokenKind::EOF {
            if let Some(statement) = parse_stmt(self)? {
                statements.push(statement);
            }
        }

        // Gotos may point forward, so the declared set is only complete now.
        for label in self.labels_referenced.iter() {
            if !self.labels_declared.contains(label) {
                return Err(Error::new(
                    ErrorImpl::UndeclaredLabel {
                        label: label.clone(),
                    },
                    Position::null(),
                ));
            }
        }

        Ok(Program { statements })
    }
}
