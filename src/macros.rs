//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// The four-argument form attaches an integer value; the three-argument form
/// leaves it empty.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Inum, "42".to_string(), position, 42);
/// let token = MK_TOKEN!(TokenKind::Plus, "+".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $position:expr) => {
        Token {
            kind: $kind,
            text: $text,
            position: $position,
            value: None,
        }
    };
    ($kind:expr, $text:expr, $position:expr, $value:expr) => {
        Token {
            kind: $kind,
            text: $text,
            position: $position,
            value: Some($value),
        }
    };
}
