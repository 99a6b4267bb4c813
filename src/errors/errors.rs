use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// The three fatal failure classes of the pipeline.
///
/// Every error terminates the current compilation attempt; classification
/// exists for callers and tests, not for recovery decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Syntax,
    Semantic,
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::MalformedNotEquals => "MalformedNotEquals",
            ErrorImpl::IllegalStringCharacter { .. } => "IllegalStringCharacter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::InvalidStatement { .. } => "InvalidStatement",
            ErrorImpl::ExpectedComparisonOperator { .. } => "ExpectedComparisonOperator",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::DuplicateLabel { .. } => "DuplicateLabel",
            ErrorImpl::UndeclaredLabel { .. } => "UndeclaredLabel",
            ErrorImpl::InvalidOperator { .. } => "InvalidOperator",
        }
    }

    pub fn get_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. }
            | ErrorImpl::MalformedNotEquals
            | ErrorImpl::IllegalStringCharacter { .. } => ErrorKind::Lex,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedTokenDetailed { .. }
            | ErrorImpl::InvalidStatement { .. }
            | ErrorImpl::ExpectedComparisonOperator { .. } => ErrorKind::Syntax,
            ErrorImpl::VariableNotDeclared { .. }
            | ErrorImpl::DuplicateLabel { .. }
            | ErrorImpl::UndeclaredLabel { .. }
            | ErrorImpl::InvalidOperator { .. } => ErrorKind::Semantic,
        }
    }

    /// The human-readable message of the underlying error.
    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character } => {
                ErrorTip::Suggestion(format!("Unrecognised character: `{}`", character))
            }
            ErrorImpl::MalformedNotEquals => {
                ErrorTip::Suggestion(String::from("A bare `!` is not an operator, did you mean `!=`?"))
            }
            ErrorImpl::IllegalStringCharacter { character } => ErrorTip::Suggestion(format!(
                "String literals cannot contain `{}`",
                character.escape_default()
            )),
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a newline?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::InvalidStatement { token } => ErrorTip::Suggestion(format!(
                "`{}` does not start a statement",
                token
            )),
            ErrorImpl::ExpectedComparisonOperator { token } => ErrorTip::Suggestion(format!(
                "Conditions need `==`, `!=`, `<`, `<=`, `>` or `>=`, found `{}`",
                token
            )),
            ErrorImpl::VariableNotDeclared { variable } => ErrorTip::Suggestion(format!(
                "Assign `{}` with `let` or `input` before reading it",
                variable
            )),
            ErrorImpl::DuplicateLabel { label } => {
                ErrorTip::Suggestion(format!("Label `{}` already exists", label))
            }
            ErrorImpl::UndeclaredLabel { label } => ErrorTip::Suggestion(format!(
                "Declare the goto target with `label {}`",
                label
            )),
            ErrorImpl::InvalidOperator { operator } => {
                ErrorTip::Suggestion(format!("Operator `{}` cannot be emitted", operator))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: String },
    #[error("expected `=` after `!`")]
    MalformedNotEquals,
    #[error("illegal character in string literal: {character:?}")]
    IllegalStringCharacter { character: char },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("invalid statement at {token:?}")]
    InvalidStatement { token: String },
    #[error("expected comparison operator at {token:?}")]
    ExpectedComparisonOperator { token: String },
    #[error("referencing variable before assignment: {variable}")]
    VariableNotDeclared { variable: String },
    #[error("label {label:?} already declared")]
    DuplicateLabel { label: String },
    #[error("goto references undeclared label {label:?}")]
    UndeclaredLabel { label: String },
    #[error("operator {operator} has no textual equivalent")]
    InvalidOperator { operator: TokenKind },
}
