use std::io::{self, BufRead};

use log::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    cursor::Cursor,
    source::{CharSource, ReaderSource, StrSource},
    tokens::{Token, TokenKind},
};

/// Single-pass lexer holding exactly one current token.
///
/// Construction reads the first token. Each call to [`Lexer::next_token`]
/// replaces it with the following one. Once an error has been returned the
/// lexer keeps returning that error.
pub struct Lexer<S: CharSource> {
    cursor: Cursor<S>,
    token: Token,
    failure: Option<Error>,
}

impl<'a> Lexer<StrSource<'a>> {
    pub fn from_text(text: &'a str) -> Result<Self, Error> {
        Lexer::new(StrSource::new(text))
    }
}

impl<R: BufRead> Lexer<ReaderSource<R>> {
    pub fn from_reader(reader: R) -> Result<Self, Error> {
        Lexer::new(ReaderSource::new(reader))
    }
}

impl<S: CharSource> Lexer<S> {
    pub fn new(source: S) -> Result<Self, Error> {
        let cursor = Cursor::new(source).map_err(|e| io_error(e, Position::new(1, 1)))?;
        let start = Position::new(cursor.row(), cursor.col());

        let mut lexer = Lexer {
            cursor,
            token: MK_TOKEN!(TokenKind::Eof, String::new(), start),
            failure: None,
        };
        lexer.next_token()?;
        Ok(lexer)
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn is_eof(&self) -> bool {
        self.token.kind == TokenKind::Eof
    }

    /// Advances to the next token and returns it.
    pub fn next_token(&mut self) -> Result<&Token, Error> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        match self.scan() {
            Ok(token) => {
                trace!(
                    "{} at {}:{}",
                    token,
                    token.position.row,
                    token.position.col
                );
                self.token = token;
                Ok(&self.token)
            }
            Err(error) => {
                debug!(
                    "lexical error at {}:{}: {}",
                    error.get_position().row,
                    error.get_position().col,
                    error.get_kind()
                );
                self.failure = Some(error.clone());
                Err(error)
            }
        }
    }

    fn bump(&mut self) -> Result<(), Error> {
        let position = self.cursor_position();
        self.cursor.bump().map_err(|e| io_error(e, position))
    }

    fn eat(&mut self, expected: char) -> Result<bool, Error> {
        let position = self.cursor_position();
        self.cursor.eat(expected).map_err(|e| io_error(e, position))
    }

    fn cursor_position(&self) -> Position {
        Position::new(self.cursor.row(), self.cursor.col())
    }

    /// Builds a diagnostic for the line under the cursor, consuming the rest of it.
    fn error_at(&mut self, error_impl: ErrorImpl, position: Position) -> Error {
        let line = match self.cursor.finish_line() {
            Ok(line) => line,
            Err(e) => return io_error(e, position),
        };
        Error::new(error_impl, position, line)
    }

    /// Recognizes one token. Whitespace and comments before it are skipped.
    fn scan(&mut self) -> Result<Token, Error> {
        loop {
            let position = self.cursor_position();
            self.cursor
                .skip_whitespace()
                .map_err(|e| io_error(e, position))?;

            self.cursor.start_lexeme();
            let start = self.cursor_position();

            let Some(c) = self.cursor.current() else {
                return Ok(MK_TOKEN!(TokenKind::Eof, String::new(), start));
            };

            let kind = match c {
                ';' => {
                    self.bump()?;
                    TokenKind::Semicolon
                }
                '0'..='9' => return self.number(start),
                ':' => {
                    self.bump()?;
                    if self.eat('=')? {
                        TokenKind::Assign
                    } else {
                        TokenKind::Colon
                    }
                }
                '{' => {
                    self.block_comment()?;
                    continue;
                }
                c if c.is_alphabetic() => {
                    while self.cursor.check(char::is_alphanumeric) {
                        self.bump()?;
                    }
                    TokenKind::lookup(self.cursor.lexeme())
                }
                '-' => {
                    self.bump()?;
                    if self.eat('=')? {
                        TokenKind::MinusAssign
                    } else {
                        TokenKind::Minus
                    }
                }
                '/' => {
                    self.bump()?;
                    if self.eat('=')? {
                        TokenKind::DivAssign
                    } else if self.cursor.current() == Some('/') {
                        if self.line_comment()? {
                            continue;
                        }
                        self.cursor.start_lexeme();
                        return Ok(MK_TOKEN!(
                            TokenKind::Eof,
                            String::new(),
                            self.cursor_position()
                        ));
                    } else {
                        TokenKind::Division
                    }
                }
                ',' => {
                    self.bump()?;
                    TokenKind::Comma
                }
                '*' => {
                    self.bump()?;
                    if self.eat('=')? {
                        TokenKind::MultAssign
                    } else {
                        TokenKind::Mult
                    }
                }
                '>' => {
                    self.bump()?;
                    if self.eat('=')? {
                        TokenKind::Geq
                    } else {
                        TokenKind::Gt
                    }
                }
                '<' => {
                    self.bump()?;
                    if self.eat('=')? {
                        TokenKind::Leq
                    } else if self.eat('>')? {
                        TokenKind::Neq
                    } else {
                        TokenKind::Lt
                    }
                }
                '=' => {
                    self.bump()?;
                    TokenKind::Eq
                }
                '+' => {
                    self.bump()?;
                    if self.eat('=')? {
                        TokenKind::PlusAssign
                    } else {
                        TokenKind::Plus
                    }
                }
                other => {
                    let position = self.cursor_position();
                    return Err(self.error_at(ErrorImpl::InvalidCharacter { ch: other }, position));
                }
            };

            return Ok(MK_TOKEN!(kind, self.cursor.take_lexeme(), start));
        }
    }

    fn number(&mut self, start: Position) -> Result<Token, Error> {
        while self.cursor.check(|c| c.is_ascii_digit()) {
            self.bump()?;
        }

        let text = self.cursor.take_lexeme();
        match text.parse::<i32>() {
            Ok(value) => Ok(MK_TOKEN!(TokenKind::Inum, text, start, value)),
            Err(_) => Err(self.error_at(ErrorImpl::IntegerOverflow { literal: text }, start)),
        }
    }

    /// Skips `{ ... }`. The cursor is on the opening brace.
    fn block_comment(&mut self) -> Result<(), Error> {
        let start = self.cursor_position();
        self.bump()?;

        while self.cursor.check(|c| c != '}') {
            self.bump()?;
        }

        if self.cursor.at_eof() {
            let position = self.cursor_position();
            return Err(self.error_at(ErrorImpl::UnterminatedComment, position));
        }

        self.bump()?;
        debug!("skipped block comment starting at {}:{}", start.row, start.col);
        Ok(())
    }

    /// Skips a `//` comment. The cursor is on the second slash. Returns false
    /// if the input ended before a newline.
    fn line_comment(&mut self) -> Result<bool, Error> {
        while self.cursor.check(|c| c != '\n') {
            self.bump()?;
        }

        if self.cursor.at_eof() {
            return Ok(false);
        }

        self.bump()?;
        Ok(true)
    }
}

fn io_error(error: io::Error, position: Position) -> Error {
    Error::new(
        ErrorImpl::Io {
            message: error.to_string(),
        },
        position,
        String::new(),
    )
}

/// Lexes `source` to completion. The returned tokens end with `TokenKind::Eof`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::from_text(source)?;
    let mut tokens = vec![lex.token().clone()];

    while !lex.is_eof() {
        tokens.push(lex.next_token()?.clone());
    }

    Ok(tokens)
}
