//! Unit tests for the parser module.
//!
//! Covers statement parsing, the expression grammar, and the two name
//! resolution rules worth guarding closely: variables must be declared
//! before use (single pass), while goto labels may be referenced before
//! their declaration (resolved after the whole program has parsed).

use crate::{
    ast::{
        expressions::Expr,
        statements::{PrintValue, Program, Stmt},
    },
    errors::errors::{Error, ErrorKind},
    lexer::{lexer::Lexer, tokens::TokenKind},
};

use super::parser::Parser;

fn parse_source(source: &str) -> Result<Program, Error> {
    let lexer = Lexer::new(source.to_string(), Some("test.bas".to_string()));
    Parser::new(lexer)?.program()
}

#[test]
fn test_parse_print_string() {
    let program = parse_source("print \"hello\"\n").unwrap();

    assert_eq!(
        program.statements,
        vec![Stmt::Print(PrintValue::Text("hello".to_string()))]
    );
}

#[test]
fn test_parse_print_expression() {
    let program = parse_source("let a = 1\nprint a + 2\n").unwrap();

    assert_eq!(
        program.statements[1],
        Stmt::Print(PrintValue::Expression(Expr::Binary {
            left: Box::new(Expr::Symbol("a".to_string())),
            operator: TokenKind::Plus,
            right: Box::new(Expr::Number("2".to_string())),
        }))
    );
}

#[test]
fn test_parse_let_expression() {
    let program = parse_source("let foo = 3 + 2\n").unwrap();

    assert_eq!(
        program.statements,
        vec![Stmt::Let {
            variable: "foo".to_string(),
            expression: Expr::Binary {
                left: Box::new(Expr::Number("3".to_string())),
                operator: TokenKind::Plus,
                right: Box::new(Expr::Number("2".to_string())),
            },
        }]
    );
}

#[test]
fn test_parse_operator_precedence() {
    let program = parse_source("let a = 1 + 2 * 3\n").unwrap();

    // Multiplication binds tighter than addition.
    assert_eq!(
        program.statements[0],
        Stmt::Let {
            variable: "a".to_string(),
            expression: Expr::Binary {
                left: Box::new(Expr::Number("1".to_string())),
                operator: TokenKind::Plus,
                right: Box::new(Expr::Binary {
                    left: Box::new(Expr::Number("2".to_string())),
                    operator: TokenKind::Star,
                    right: Box::new(Expr::Number("3".to_string())),
                }),
            },
        }
    );
}

#[test]
fn test_parse_unary_expression() {
    let program = parse_source("let a = -5\n").unwrap();

    assert_eq!(
        program.statements[0],
        Stmt::Let {
            variable: "a".to_string(),
            expression: Expr::Unary {
                operator: TokenKind::Dash,
                operand: Box::new(Expr::Number("5".to_string())),
            },
        }
    );
}

#[test]
fn test_parse_conditional() {
    let program = parse_source("let foo = 3 + 2\nif foo > 0 then\nprint \"yes\"\nendif\n").unwrap();

    assert_eq!(program.statements.len(), 2);
    assert_eq!(
        program.statements[1],
        Stmt::If {
            condition: Expr::Comparison {
                left: Box::new(Expr::Symbol("foo".to_string())),
                operator: TokenKind::Greater,
                right: Box::new(Expr::Number("0".to_string())),
            },
            then_branch: vec![Stmt::Print(PrintValue::Text("yes".to_string()))],
        }
    );
}

#[test]
fn test_parse_while_loop() {
    let program = parse_source("let n = 3\nwhile n > 0 repeat\nlet n = n - 1\nendwhile\n").unwrap();

    assert_eq!(program.statements.len(), 2);
    match &program.statements[1] {
        Stmt::While { body, .. } => assert_eq!(body.len(), 1),
        statement => panic!("expected while statement, got {:?}", statement),
    }
}

#[test]
fn test_parse_nested_blocks() {
    let source = "let a = 1\nwhile a > 0 repeat\nif a == 1 then\nprint \"one\"\nendif\nlet a = a - 1\nendwhile\n";
    let program = parse_source(source).unwrap();

    assert_eq!(program.statements.len(), 2);
}

#[test]
fn test_parse_input_declares_variable() {
    let program = parse_source("input nums\nprint nums\n").unwrap();

    assert_eq!(
        program.statements[0],
        Stmt::Input {
            variable: "nums".to_string()
        }
    );
}

#[test]
fn test_parse_rebinding_is_legal() {
    let program = parse_source("let a = 1\nlet a = 2\n").unwrap();

    assert_eq!(program.statements.len(), 2);
}

#[test]
fn test_parse_undeclared_variable() {
    let result = parse_source("print foo\n");

    let error = result.err().unwrap();
    assert_eq!(error.get_kind(), ErrorKind::Semantic);
    assert_eq!(error.message(), "referencing variable before assignment: foo");
}

#[test]
fn test_parse_variable_use_before_declaration() {
    // Variables resolve in a single pass; declaring later does not help.
    let result = parse_source("print foo\nlet foo = 1\n");

    assert!(result.is_err());
}

#[test]
fn test_parse_forward_label_reference() {
    let program = parse_source("goto finish\nprint \"skipped\"\nlabel finish\n").unwrap();

    assert_eq!(program.statements.len(), 3);
    assert_eq!(
        program.statements[2],
        Stmt::Label {
            name: "finish".to_string()
        }
    );
}

#[test]
fn test_parse_backward_label_reference() {
    let program = parse_source("label top\nprint \"hello\"\ngoto top\n").unwrap();

    assert_eq!(program.statements.len(), 3);
}

#[test]
fn test_parse_duplicate_label() {
    let result = parse_source("label top\nlabel top\n");

    let error = result.err().unwrap();
    assert_eq!(error.get_kind(), ErrorKind::Semantic);
    assert_eq!(error.get_error_name(), "DuplicateLabel");
}

#[test]
fn test_parse_goto_undeclared_label() {
    let result = parse_source("goto nowhere\nprint \"hi\"\n");

    let error = result.err().unwrap();
    assert_eq!(error.get_kind(), ErrorKind::Semantic);
    assert_eq!(error.get_error_name(), "UndeclaredLabel");
}

#[test]
fn test_parse_label_check_waits_for_full_program() {
    // A later parse error surfaces before the missing label does, because
    // label resolution only runs once the whole program has been scanned.
    let result = parse_source("goto nowhere\nprint foo\n");

    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "VariableNotDeclared");
}

#[test]
fn test_parse_condition_requires_comparator() {
    let result = parse_source("let a = 1\nif a then\nprint \"x\"\nendif\n");

    let error = result.err().unwrap();
    assert_eq!(error.get_kind(), ErrorKind::Syntax);
    assert_eq!(error.get_error_name(), "ExpectedComparisonOperator");
}

#[test]
fn test_parse_bare_assignment_is_not_a_comparator() {
    let result = parse_source("let a = 1\nif a = 1 then\nprint \"x\"\nendif\n");

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().get_error_name(),
        "ExpectedComparisonOperator"
    );
}

#[test]
fn test_parse_chained_comparison() {
    let program = parse_source("let a = 1\nif 0 < a < 2 then\nprint \"x\"\nendif\n").unwrap();

    assert_eq!(program.statements.len(), 2);
}

#[test]
fn test_parse_missing_line_terminator() {
    let result = parse_source("print \"hello\"");

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_kind(), ErrorKind::Syntax);
}

#[test]
fn test_parse_missing_then() {
    let result = parse_source("let a = 1\nif a > 0\nprint \"x\"\nendif\n");

    assert!(result.is_err());
}

#[test]
fn test_parse_missing_endif() {
    let result = parse_source("let a = 1\nif a > 0 then\nprint \"x\"\n");

    assert!(result.is_err());
}

#[test]
fn test_parse_invalid_statement() {
    let result = parse_source("42\n");

    let error = result.err().unwrap();
    assert_eq!(error.get_kind(), ErrorKind::Syntax);
    assert_eq!(error.get_error_name(), "InvalidStatement");
}

#[test]
fn test_parse_empty_program() {
    let program = parse_source("").unwrap();

    assert!(program.statements.is_empty());
}

#[test]
fn test_parse_leading_blank_lines() {
    let program = parse_source("\n\n\nprint \"hello\"\n").unwrap();

    assert_eq!(program.statements.len(), 1);
}

#[test]
fn test_parse_statement_count_round_trip() {
    let source = "let a = 1\n\n\nprint a\nlet a = a + 1\nprint \"done\"\n";
    let program = parse_source(source).unwrap();

    // Blank lines separate statements but are not statements.
    assert_eq!(program.statements.len(), 4);
}

#[test]
fn test_parse_collapses_consecutive_newlines() {
    let program = parse_source("print \"a\"\n\n\n\nprint \"b\"\n").unwrap();

    assert_eq!(program.statements.len(), 2);
}
