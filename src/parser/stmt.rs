use crate::{
    ast::statements::{PrintValue, Stmt},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::expr::{parse_comparison, parse_expr},
};

use super::parser::Parser;

/// Parses one statement, dispatching on the current token through the
/// statement lookup table.
///
/// Returns Ok(None) for blank lines, which separate statements but are not
/// statements themselves. Any other token that is not a registered
/// statement keyword is an invalid statement.
pub fn parse_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    if parser.current_token_kind() == TokenKind::Newline {
        parse_nl(parser)?;
        return Ok(None);
    }

    let kind = parser.current_token_kind();
    if let Some(handler) = parser.get_stmt_lookup().get(&kind).copied() {
        return handler(parser).map(Some);
    }

    Err(Error::new(
        ErrorImpl::InvalidStatement {
            token: parser.current_token().value.clone(),
        },
        parser.get_position(),
    ))
}

/// Consumes the mandatory line terminator: one newline token, collapsing
/// any further consecutive newlines.
pub fn parse_nl(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::Newline)?;
    while parser.current_token_kind() == TokenKind::Newline {
        parser.advance()?;
    }

    Ok(())
}

/// `print "text"` or `print expression`
pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance()?;

    if parser.current_token_kind() == TokenKind::String {
        let text = parser.advance()?.value;
        parse_nl(parser)?;
        return Ok(Stmt::Print(PrintValue::Text(text)));
    }

    let expression = parse_expr(parser)?;
    parse_nl(parser)?;

    Ok(Stmt::Print(PrintValue::Expression(expression)))
}

/// `let name = expression`
///
/// Declares the name if it is new; re-binding an existing name is legal.
pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance()?;

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected identifier during variable declaration"),
        },
        parser.get_position(),
    );
    let variable = parser.expect_error(TokenKind::Identifier, Some(error))?.value;
    parser.declare_symbol(&variable);

    parser.expect(TokenKind::Assignment)?;
    let expression = parse_expr(parser)?;
    parse_nl(parser)?;

    Ok(Stmt::Let {
        variable,
        expression,
    })
}

/// `input name` — declares the name, takes no expression.
pub fn parse_input_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance()?;

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected identifier after input"),
        },
        parser.get_position(),
    );
    let variable = parser.expect_error(TokenKind::Identifier, Some(error))?.value;
    parser.declare_symbol(&variable);
    parse_nl(parser)?;

    Ok(Stmt::Input { variable })
}

/// `if comparison then <newline> statements endif`
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance()?;

    let condition = parse_comparison(parser)?;
    parser.expect(TokenKind::Then)?;
    parse_nl(parser)?;

    let mut then_branch = vec![];
    while parser.current_token_kind() != TokenKind::EndIf {
        if let Some(statement) = parse_stmt(parser)? {
            then_branch.push(statement);
        }
    }
    parser.expect(TokenKind::EndIf)?;

    Ok(Stmt::If {
        condition,
        then_branch,
    })
}

/// `while comparison repeat <newline> statements endwhile`
pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance()?;

    let condition = parse_comparison(parser)?;
    parser.expect(TokenKind::Repeat)?;
    parse_nl(parser)?;

    let mut body = vec![];
    while parser.current_token_kind() != TokenKind::EndWhile {
        if let Some(statement) = parse_stmt(parser)? {
            body.push(statement);
        }
    }
    parser.expect(TokenKind::EndWhile)?;

    Ok(Stmt::While { condition, body })
}

/// `label name` — each label name may be declared at most once.
pub fn parse_label_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance()?;

    let position = parser.get_position();
    let name = parser.expect(TokenKind::Identifier)?.value;
    if !parser.declare_label(&name) {
        return Err(Error::new(
            ErrorImpl::DuplicateLabel { label: name },
            position,
        ));
    }

    Ok(Stmt::Label { name })
}

/// `goto name` — the target is recorded and resolved after the whole
/// program has parsed, so forward references are fine here.
pub fn parse_goto_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance()?;

    let label = parser.expect(TokenKind::Identifier)?.value;
    parser.reference_label(&label);

    Ok(Stmt::Goto { label })
}
