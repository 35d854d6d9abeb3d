//! Character cursor with one character of lookahead.
//!
//! The cursor tracks the row and column of the current character and keeps
//! the text of the line being scanned so diagnostics can echo it. The lexeme
//! accumulator lags the cursor by one character: `bump` appends the character
//! it moves away from.

use std::io;

use super::source::CharSource;

pub struct Cursor<S: CharSource> {
    source: S,

    /// `None` once the input is exhausted.
    current: Option<char>,

    /// Current line number (1-based).
    row: u32,

    /// Column of `current` within its line. 0 while sitting on a newline.
    col: u32,

    line_text: String,

    /// Text of the line closed by the most recent newline.
    last_line: String,

    lexeme: String,

    exhausted: bool,
}

impl<S: CharSource> Cursor<S> {
    /// Creates a cursor and reads the first character.
    pub fn new(source: S) -> io::Result<Self> {
        let mut cursor = Cursor {
            source,
            current: None,
            row: 1,
            col: 0,
            line_text: String::new(),
            last_line: String::new(),
            lexeme: String::new(),
            exhausted: false,
        };
        cursor.bump()?;
        cursor.lexeme.clear();
        Ok(cursor)
    }

    pub fn current(&self) -> Option<char> {
        self.current
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn col(&self) -> u32 {
        self.col
    }

    pub fn at_eof(&self) -> bool {
        self.current.is_none()
    }

    /// Returns true if the current character satisfies `pred`. Never true at end of input.
    pub fn check(&self, pred: impl Fn(char) -> bool) -> bool {
        self.current.is_some_and(pred)
    }

    /// Moves to the next character, appending the current one to the lexeme.
    pub fn bump(&mut self) -> io::Result<()> {
        if let Some(c) = self.current {
            self.lexeme.push(c);
        }

        if self.exhausted {
            return Ok(());
        }

        match self.source.next_char()? {
            Some('\n') => {
                self.current = Some('\n');
                self.row += 1;
                self.col = 0;
                self.last_line = std::mem::take(&mut self.line_text);
            }
            Some(c) => {
                self.current = Some(c);
                self.col += 1;
                self.line_text.push(c);
            }
            None => {
                // The end-of-input sentinel sits just past the last character.
                self.current = None;
                self.col += 1;
                self.exhausted = true;
            }
        }

        Ok(())
    }

    /// Bumps only if the current character is `expected`.
    pub fn eat(&mut self, expected: char) -> io::Result<bool> {
        if self.current == Some(expected) {
            self.bump()?;
            return Ok(true);
        }
        Ok(false)
    }

    pub fn skip_whitespace(&mut self) -> io::Result<()> {
        while self.check(is_whitespace) {
            self.bump()?;
        }
        Ok(())
    }

    /// Discards everything accumulated so far; the next token starts here.
    pub fn start_lexeme(&mut self) {
        self.lexeme.clear();
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn take_lexeme(&mut self) -> String {
        std::mem::take(&mut self.lexeme)
    }

    /// Full text of the line holding the cursor. Reads and discards the rest of
    /// that line from the source.
    pub fn finish_line(&mut self) -> io::Result<String> {
        if self.current == Some('\n') {
            return Ok(self.last_line.clone());
        }

        let rest = self.source.rest_of_line()?;
        Ok(format!("{}{}", self.line_text, rest))
    }
}

pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}
