//! Lexical analysis module.
//!
//! This module contains the hand-written lexer that turns a character stream
//! into tokens for a parser. It handles:
//!
//! - Maximal-munch recognition of operators with one character of lookahead
//! - Reserved word lookup for identifiers
//! - Integer literals
//! - `{ ... }` block comments and `//` line comments
//! - Row/column tracking and source-line echo for diagnostics

pub mod cursor;
pub mod lexer;
pub mod source;
pub mod tokens;
