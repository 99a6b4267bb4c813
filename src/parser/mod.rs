//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms the
//! lexer's token stream into an AST while validating names inline:
//!
//! - Statement parsing through a statement-handler lookup table
//! - Expression parsing with fixed precedence
//!   (comparison < additive < multiplicative < unary < primary)
//! - Declare-before-use checking for variables (single pass)
//! - Deferred, two-phase resolution for goto labels
//!
//! Parsing is fail-fast: the first violated contract aborts with an error
//! and no partial tree is ever returned.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
