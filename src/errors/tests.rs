//! Unit tests for the errors module.

use crate::{lexer::tokens::TokenKind, Position};

use super::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};

#[test]
fn test_error_kind_classification() {
    let lex = Error::new(
        ErrorImpl::UnrecognisedCharacter {
            character: "@".to_string(),
        },
        Position::null(),
    );
    assert_eq!(lex.get_kind(), ErrorKind::Lex);

    let syntax = Error::new(
        ErrorImpl::InvalidStatement {
            token: "42".to_string(),
        },
        Position::null(),
    );
    assert_eq!(syntax.get_kind(), ErrorKind::Syntax);

    let semantic = Error::new(
        ErrorImpl::VariableNotDeclared {
            variable: "foo".to_string(),
        },
        Position::null(),
    );
    assert_eq!(semantic.get_kind(), ErrorKind::Semantic);

    let emission = Error::new(
        ErrorImpl::InvalidOperator {
            operator: TokenKind::Then,
        },
        Position::null(),
    );
    assert_eq!(emission.get_kind(), ErrorKind::Semantic);
}

#[test]
fn test_error_messages() {
    let error = Error::new(
        ErrorImpl::VariableNotDeclared {
            variable: "foo".to_string(),
        },
        Position::null(),
    );
    assert_eq!(error.message(), "referencing variable before assignment: foo");

    let error = Error::new(
        ErrorImpl::DuplicateLabel {
            label: "top".to_string(),
        },
        Position::null(),
    );
    assert_eq!(error.message(), "label \"top\" already declared");

    let error = Error::new(ErrorImpl::MalformedNotEquals, Position::null());
    assert_eq!(error.message(), "expected `=` after `!`");
}

#[test]
fn test_error_names() {
    let error = Error::new(
        ErrorImpl::UndeclaredLabel {
            label: "loop".to_string(),
        },
        Position::null(),
    );
    assert_eq!(error.get_error_name(), "UndeclaredLabel");

    let error = Error::new(
        ErrorImpl::ExpectedComparisonOperator {
            token: "then".to_string(),
        },
        Position::null(),
    );
    assert_eq!(error.get_error_name(), "ExpectedComparisonOperator");
}

#[test]
fn test_error_tips_are_suggestions() {
    let error = Error::new(
        ErrorImpl::VariableNotDeclared {
            variable: "foo".to_string(),
        },
        Position::null(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(suggestion) => assert!(suggestion.contains("foo")),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_error_keeps_position() {
    let position = Position(7, std::rc::Rc::new("test.bas".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "endif".to_string(),
        },
        position,
    );

    assert_eq!(error.get_position().0, 7);
    assert_eq!(error.get_position().1.as_str(), "test.bas");
    assert!(!error.get_position().is_null());
}

#[test]
fn test_null_position() {
    assert!(Position::null().is_null());
}
