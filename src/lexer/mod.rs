//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Case-insensitive recognition of reserved words
//! - Number, identifier and string literals
//! - Token position tracking for error reporting
//!
//! Newlines are significant tokens in the dialect; spaces, tabs and
//! carriage returns are skipped between tokens.

pub mod lexer;
pub mod tokens;
