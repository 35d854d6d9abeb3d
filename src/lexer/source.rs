//! Sequential character sources the lexer reads from.

use std::{io, io::BufRead, str::Chars};

/// A forward-only supply of characters.
pub trait CharSource {
    /// Returns the next character, or `None` once the input is exhausted.
    fn next_char(&mut self) -> io::Result<Option<char>>;

    /// Consumes the remainder of the current physical line and returns it
    /// without its `\n` / `\r\n` terminator. Returns an empty string at end of input.
    fn rest_of_line(&mut self) -> io::Result<String>;
}

fn strip_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Characters of an in-memory string.
pub struct StrSource<'a> {
    chars: Chars<'a>,
}

impl<'a> StrSource<'a> {
    pub fn new(text: &'a str) -> Self {
        StrSource { chars: text.chars() }
    }
}

impl CharSource for StrSource<'_> {
    fn next_char(&mut self) -> io::Result<Option<char>> {
        Ok(self.chars.next())
    }

    fn rest_of_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        for c in self.chars.by_ref() {
            line.push(c);
            if c == '\n' {
                break;
            }
        }
        Ok(strip_terminator(line))
    }
}

/// Characters pulled from a buffered reader one line at a time.
pub struct ReaderSource<R: BufRead> {
    reader: R,
    line: Vec<char>,
    pos: usize,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        ReaderSource {
            reader,
            line: vec![],
            pos: 0,
        }
    }

    /// Refills the line buffer. Returns false at end of input.
    fn fill(&mut self) -> io::Result<bool> {
        if self.pos < self.line.len() {
            return Ok(true);
        }

        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            return Ok(false);
        }

        self.line = buffer.chars().collect();
        self.pos = 0;
        Ok(true)
    }
}

impl<R: BufRead> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> io::Result<Option<char>> {
        if !self.fill()? {
            return Ok(None);
        }

        let c = self.line[self.pos];
        self.pos += 1;
        Ok(Some(c))
    }

    fn rest_of_line(&mut self) -> io::Result<String> {
        if !self.fill()? {
            return Ok(String::new());
        }

        let rest = self.line[self.pos..].iter().collect::<String>();
        self.pos = self.line.len();
        Ok(strip_terminator(rest))
    }
}
