//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the compilation
//! process. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the lexing, parsing and emission phases
//! - Classification into the three fatal error kinds
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
