//! Code emission module for the compiler.
//!
//! This module contains the tree-walking emitter that turns a parsed
//! program into Rust source text. It handles:
//!
//! - One deterministic depth-first walk over the statement tree
//! - Textual inlining of expressions (no temporaries are introduced)
//! - First-declaration versus reassignment wording for `let`
//! - The `fn main` wrapper and the conditional stdin prelude
//!
//! The emitter performs no I/O; it builds and returns a string.

pub mod emitter;
pub mod expr;
pub mod stmt;
