use std::collections::HashMap;

use crate::{ast::statements::Stmt, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;

// Lookup table inside the parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;

pub fn create_token_lookups(parser: &mut Parser) {
    parser.stmt(TokenKind::Print, parse_print_stmt);
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Input, parse_input_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::Label, parse_label_stmt);
    parser.stmt(TokenKind::Goto, parse_goto_stmt);
}
