//! Expression parsing with fixed precedence, low to high:
//!
//! ```text
//! comparison ::= expression (("==" | "!=" | "<" | "<=" | ">" | ">=") expression)+
//! expression ::= term {("+" | "-") term}
//! term       ::= unary {("*" | "/") unary}
//! unary      ::= ["+" | "-"] primary
//! primary    ::= NUMBER | IDENT
//! ```

use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Parses a condition. At least one comparison operator is mandatory; a
/// bare arithmetic expression is not a valid condition.
pub fn parse_comparison(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_expr(parser)?;

    if !is_comparison_operator(parser.current_token_kind()) {
        return Err(Error::new(
            ErrorImpl::ExpectedComparisonOperator {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        ));
    }

    while is_comparison_operator(parser.current_token_kind()) {
        let operator = parser.advance()?.kind;
        let right = parse_expr(parser)?;
        left = Expr::Comparison {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        };
    }

    Ok(left)
}

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_term(parser)?;

    while matches!(
        parser.current_token_kind(),
        TokenKind::Plus | TokenKind::Dash
    ) {
        let operator = parser.advance()?.kind;
        let right = parse_term(parser)?;
        left = Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        };
    }

    Ok(left)
}

fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_unary(parser)?;

    while matches!(
        parser.current_token_kind(),
        TokenKind::Star | TokenKind::Slash
    ) {
        let operator = parser.advance()?.kind;
        let right = parse_unary(parser)?;
        left = Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        };
    }

    Ok(left)
}

fn parse_unary(parser: &mut Parser) -> Result<Expr, Error> {
    if matches!(
        parser.current_token_kind(),
        TokenKind::Plus | TokenKind::Dash
    ) {
        let operator = parser.advance()?.kind;
        let operand = parse_primary(parser)?;
        return Ok(Expr::Unary {
            operator,
            operand: Box::new(operand),
        });
    }

    parse_primary(parser)
}

fn parse_primary(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let value = parser.advance()?.value;
            Ok(Expr::Number(value))
        }
        TokenKind::Identifier => {
            // Variables must be declared before they are read. Unlike
            // labels, this check does not defer.
            if !parser.is_symbol_declared(&parser.current_token().value) {
                return Err(Error::new(
                    ErrorImpl::VariableNotDeclared {
                        variable: parser.current_token().value.clone(),
                    },
                    parser.get_position(),
                ));
            }

            let value = parser.advance()?.value;
            Ok(Expr::Symbol(value))
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected a number or a variable name"),
            },
            parser.get_position(),
        )),
    }
}

fn is_comparison_operator(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Equals
            | TokenKind::NotEquals
            | TokenKind::Less
            | TokenKind::LessEquals
            | TokenKind::Greater
            | TokenKind::GreaterEquals
    )
}
