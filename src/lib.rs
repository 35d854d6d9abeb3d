#![allow(clippy::module_inception)]

use std::path::Path;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

/// A 1-based row and column in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    pub fn new(row: u32, col: u32) -> Self {
        Position { row, col }
    }
}

/// Formats an error for the terminal:
///
/// ```text
/// Error: InvalidCharacter
/// -> program.txt
/// Lexical error in line 2:
/// x := #;
///      ^
/// Incorrect symbol #
/// ```
pub fn format_error(error: &Error, file: &Path) -> String {
    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    format!(
        "{}\n-> {}\n{}",
        header,
        file.as_os_str().to_string_lossy(),
        error.diagnostic()
    )
}

pub fn display_error(error: &Error, file: &Path) {
    eprintln!("{}", format_error(error, file));
}
