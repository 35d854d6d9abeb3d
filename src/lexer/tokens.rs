use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("begin", TokenKind::Begin);
        map.insert("end", TokenKind::End);
        map.insert("cycle", TokenKind::Cycle);
        map.insert("div", TokenKind::Div);
        map.insert("mod", TokenKind::Mod);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("not", TokenKind::Not);
        map.insert("notmod", TokenKind::Id);
        map.insert("anddiv", TokenKind::Id);
        map.insert("modor", TokenKind::Id);
        map.insert("for", TokenKind::For);
        map.insert("to", TokenKind::To);
        map.insert("do", TokenKind::Do);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Id,
    Inum,

    Colon,
    Semicolon,
    Comma,
    LeftBracket,
    RightBracket,

    Assign,      // :=
    PlusAssign,  // +=
    MinusAssign, // -=
    MultAssign,  // *=
    DivAssign,   // /=

    Plus,
    Minus,
    Mult,
    Division,
    Mod,
    Div,

    And,
    Or,
    Not,

    Lt,
    Gt,
    Leq,
    Geq,
    Eq,
    Neq, // <>

    // Reserved
    Begin,
    End,
    Cycle,
    While,
    Do,
    For,
    To,
    If,
    Then,
    Else,
}

impl TokenKind {
    /// Upper-case label used in token dumps.
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Id => "ID",
            TokenKind::Inum => "INUM",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::LeftBracket => "LEFT_BRACKET",
            TokenKind::RightBracket => "RIGHT_BRACKET",
            TokenKind::Assign => "ASSIGN",
            TokenKind::PlusAssign => "PLUSASSIGN",
            TokenKind::MinusAssign => "MINUSASSIGN",
            TokenKind::MultAssign => "MULTASSIGN",
            TokenKind::DivAssign => "DIVASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mult => "MULT",
            TokenKind::Division => "DIVISION",
            TokenKind::Mod => "MOD",
            TokenKind::Div => "DIV",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Leq => "LEQ",
            TokenKind::Geq => "GEQ",
            TokenKind::Eq => "EQ",
            TokenKind::Neq => "NEQ",
            TokenKind::Begin => "BEGIN",
            TokenKind::End => "END",
            TokenKind::Cycle => "CYCLE",
            TokenKind::While => "WHILE",
            TokenKind::Do => "DO",
            TokenKind::For => "FOR",
            TokenKind::To => "TO",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
        }
    }

    /// Classifies an identifier spelling. Matching is exact and case-sensitive.
    pub fn lookup(ident: &str) -> TokenKind {
        RESERVED_LOOKUP.get(ident).copied().unwrap_or(TokenKind::Id)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A classified lexeme. `text` is the exact source slice starting at `position`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
    /// Only set for `TokenKind::Inum`.
    pub value: Option<i32>,
}

impl Token {
    pub fn row(&self) -> u32 {
        self.position.row
    }

    pub fn col(&self) -> u32 {
        self.position.col
    }

    /// Column one past the last character of the token.
    pub fn end_col(&self) -> u32 {
        self.position.col + self.text.chars().count() as u32
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.kind, self.value) {
            (TokenKind::Id, _) => write!(f, "{} {}", self.kind, self.text),
            (TokenKind::Inum, Some(value)) => write!(f, "{} {}", self.kind, value),
            _ => write!(f, "{}", self.kind),
        }
    }
}
