//! Error types and error reporting for the lexer.
//!
//! Every lexical error is fatal. An error carries:
//!
//! - The kind of failure (`ErrorImpl`)
//! - The row and column it was found at
//! - The full text of the offending source line, for the caret diagnostic

pub mod errors;
