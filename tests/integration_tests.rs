//! Integration tests for end-to-end compilation.
//!
//! These tests verify that the complete pipeline works from source text
//! through tokenization, parsing with name validation, and emission.

use rustic::{
    compile,
    errors::errors::ErrorKind,
    lexer::lexer::{tokenize, Lexer},
    parser::parser::Parser,
};

#[test]
fn test_compile_hello() {
    let output = compile("print \"hello\"\n", Some("test.bas".to_string())).unwrap();

    assert!(output.contains("println!(\"hello\");"));
    assert!(output.starts_with("fn main() {"));
}

#[test]
fn test_compile_is_deterministic() {
    let source = "let a = 1\nif a > 0 then\nprint \"positive\"\nendif\n";

    let first = compile(source, Some("test.bas".to_string())).unwrap();
    let second = compile(source, Some("test.bas".to_string())).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_compile_fibonacci_program() {
    let source = r#"
PRINT "How many fibonacci numbers do you want?"
INPUT nums
PRINT ""

LET a = 0
LET b = 1
WHILE nums > 0 REPEAT
    PRINT a
    LET c = a + b
    LET a = b
    LET b = c
    LET nums = nums - 1
ENDWHILE
"#;

    let output = compile(source, Some("fib.bas".to_string())).unwrap();

    assert!(output.starts_with("use std::io::stdin;\n\n"));
    assert!(output.contains("while nums > 0 {"));
    assert!(output.contains("let mut c = a + b;"));
    assert!(output.contains("println!(\"{}\", a);"));
}

#[test]
fn test_compile_undeclared_variable_produces_no_output() {
    let result = compile("print foo\n", Some("test.bas".to_string()));

    let error = result.err().unwrap();
    assert_eq!(error.get_kind(), ErrorKind::Semantic);
    assert_eq!(error.message(), "referencing variable before assignment: foo");
}

#[test]
fn test_compile_forward_goto_resolves() {
    let source = "goto finish\nprint \"skipped\"\nlabel finish\nprint \"done\"\n";
    let output = compile(source, Some("test.bas".to_string())).unwrap();

    // Labels have no target counterpart; both prints survive.
    assert!(output.contains("println!(\"skipped\");"));
    assert!(output.contains("println!(\"done\");"));
}

#[test]
fn test_compile_duplicate_label_fails() {
    let result = compile("label loop\nlabel loop\n", Some("test.bas".to_string()));

    assert_eq!(result.err().unwrap().get_error_name(), "DuplicateLabel");
}

#[test]
fn test_compile_unresolved_goto_fails_after_full_scan() {
    let result = compile(
        "goto nowhere\nprint \"reachable\"\n",
        Some("test.bas".to_string()),
    );

    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "UndeclaredLabel");
    assert!(error.message().contains("nowhere"));
}

#[test]
fn test_compile_lex_error() {
    let result = compile("let a = @\n", Some("test.bas".to_string()));

    assert_eq!(result.err().unwrap().get_kind(), ErrorKind::Lex);
}

#[test]
fn test_compile_syntax_error() {
    let result = compile("let a = 1\nif a > 0\nprint \"x\"\nendif\n", None);

    assert_eq!(result.err().unwrap().get_kind(), ErrorKind::Syntax);
}

#[test]
fn test_statement_count_matches_source() {
    let source = "let a = 1\nprint a\nlet a = a + 1\nprint \"done\"\n";

    let lexer = Lexer::new(source.to_string(), Some("test.bas".to_string()));
    let program = Parser::new(lexer).unwrap().program().unwrap();

    assert_eq!(program.statements.len(), 4);
}

#[test]
fn test_tokenize_convenience_matches_pull_scanning() {
    let source = "let a = 1\n".to_string();

    let tokens = tokenize(source.clone(), Some("test.bas".to_string())).unwrap();
    let mut lexer = Lexer::new(source, Some("test.bas".to_string()));

    for token in tokens.iter() {
        assert_eq!(lexer.next_token().unwrap().kind, token.kind);
    }
}

#[test]
fn test_compile_average_program() {
    let source = "input total\ninput count\nlet average = total / count\nprint average\n";
    let output = compile(source, Some("avg.bas".to_string())).unwrap();

    assert!(output.contains("let mut average = total / count;"));
    assert!(output.contains("println!(\"{}\", average);"));
}
