#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    emitter::emitter::Emitter,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::Lexer,
    parser::parser::Parser,
};

pub mod ast;
pub mod emitter;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A byte offset into a named source file.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }

    /// Null positions belong to errors with no source location, such as
    /// emission failures on an already-built tree.
    pub fn is_null(&self) -> bool {
        self.1.as_str() == "<null>"
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Compiles BASIC dialect source text into Rust source text.
///
/// Runs the full pipeline: tokenization, parsing with symbol and label
/// validation, and emission. The first violated contract aborts the
/// compilation and no partial output is produced.
///
/// # Arguments
///
/// * `source` - The program text to compile
/// * `file` - Optional file name used in error positions
pub fn compile(source: &str, file: Option<String>) -> Result<String, Error> {
    let lexer = Lexer::new(source.to_string(), file);
    let mut parser = Parser::new(lexer)?;
    let program = parser.program()?;

    let mut emitter = Emitter::new();
    emitter.emit(&program)
}

/// Finds the line containing a byte offset.
///
/// Returns the 1-based line number, the line text and the offset within
/// that line, or None when the position falls outside the source.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    /*
        Error: message
        -> final.bas
           |
        20 | let a = #
           | --------^
    */

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }

    let position = error.get_position();
    if position.is_null() {
        return;
    }

    let line_info = get_line_at_position(source, position.0);
    if line_info.is_none() {
        return;
    }
    let (line, line_text, line_pos) = line_info.unwrap();

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    println!("-> {}", file);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
