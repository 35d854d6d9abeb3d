use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A fatal lexical error together with everything needed to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    line: String,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position, line: String) -> Self {
        Error {
            internal_error: error_impl,
            position,
            line,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The echoed source line the error was found on.
    pub fn get_line(&self) -> &str {
        &self.line
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
            ErrorImpl::IntegerOverflow { .. } => "IntegerOverflow",
            ErrorImpl::Io { .. } => "Io",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Block comments must be closed with `}`"))
            }
            ErrorImpl::InvalidCharacter { .. } => ErrorTip::None,
            ErrorImpl::IntegerOverflow { literal } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                literal
            )),
            ErrorImpl::Io { .. } => ErrorTip::None,
        }
    }

    /// The multi-line report: line number, echoed line, caret, message.
    pub fn diagnostic(&self) -> String {
        let padding = self.position.col.saturating_sub(1) as usize;
        format!(
            "Lexical error in line {}:\n{}\n{}^\n{}",
            self.position.row,
            self.line,
            " ".repeat(padding),
            self.internal_error
        )
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.diagnostic())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Comment not closed")]
    UnterminatedComment,
    #[error("Incorrect symbol {ch}")]
    InvalidCharacter { ch: char },
    #[error("Integer literal {literal} is out of range")]
    IntegerOverflow { literal: String },
    #[error("Failed to read input: {message}")]
    Io { message: String },
}
