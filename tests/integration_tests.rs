//! Integration tests for end-to-end lexing.
//!
//! These tests drive the public lexer API the way a parser would: construct
//! over a source, read the current token, advance until EOF or an error.

use std::{fs::File, io::BufReader};

use proptest::prelude::*;
use simple_lexer::{
    errors::errors::ErrorImpl,
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::{Token, TokenKind, RESERVED_LOOKUP},
    },
    Position,
};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

fn rendered(source: &str) -> Vec<String> {
    tokenize(source)
        .unwrap()
        .iter()
        .map(Token::to_string)
        .collect()
}

#[test]
fn test_assignment_statement() {
    assert_eq!(
        rendered("x := 5 + y;"),
        vec!["ID x", "ASSIGN", "INUM 5", "PLUS", "ID y", "SEMICOLON", "EOF"]
    );
}

#[test]
fn test_not_equal() {
    assert_eq!(rendered("a <> b"), vec!["ID a", "NEQ", "ID b", "EOF"]);
}

#[test]
fn test_trailing_line_comment_without_newline() {
    assert_eq!(rendered("// trailing comment with no newline"), vec!["EOF"]);
}

#[test]
fn test_compound_assignment_with_comment() {
    assert_eq!(
        rendered("x *= 2 // doubles\n"),
        vec!["ID x", "MULTASSIGN", "INUM 2", "EOF"]
    );
}

#[test]
fn test_unterminated_comment_fails_construction() {
    let error = match Lexer::from_text("{ unterminated") {
        Ok(_) => panic!("construction should fail"),
        Err(error) => error,
    };

    assert_eq!(error.get_kind(), &ErrorImpl::UnterminatedComment);
    assert_eq!(error.get_position().row, 1);
    assert!(error
        .to_string()
        .starts_with("Lexical error in line 1:\n{ unterminated\n"));
}

#[test]
fn test_lex_file() {
    let file = File::open("tests/test_file.txt").unwrap();
    let mut lexer = Lexer::from_reader(BufReader::new(file)).unwrap();

    let mut tokens = vec![lexer.token().clone()];
    while !lexer.is_eof() {
        tokens.push(lexer.next_token().unwrap().clone());
    }

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Begin,
            TokenKind::Id,
            TokenKind::Assign,
            TokenKind::Inum,
            TokenKind::Semicolon,
            TokenKind::For,
            TokenKind::Id,
            TokenKind::Assign,
            TokenKind::Inum,
            TokenKind::To,
            TokenKind::Inum,
            TokenKind::Do,
            TokenKind::Id,
            TokenKind::PlusAssign,
            TokenKind::Id,
            TokenKind::Semicolon,
            TokenKind::Cycle,
            TokenKind::Inum,
            TokenKind::Do,
            TokenKind::Id,
            TokenKind::MultAssign,
            TokenKind::Inum,
            TokenKind::End,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[1].position, Position::new(3, 3));
    assert_eq!(tokens[10].value, Some(10));
    assert_eq!(tokens[22].position, Position::new(8, 1));
}

#[test]
fn test_reader_and_text_agree() {
    let source = std::fs::read_to_string("tests/test_file.txt").unwrap();
    let from_text = tokenize(&source).unwrap();

    let mut lexer = Lexer::from_reader(source.as_bytes()).unwrap();
    let mut from_reader = vec![lexer.token().clone()];
    while !lexer.is_eof() {
        from_reader.push(lexer.next_token().unwrap().clone());
    }

    assert_eq!(from_text, from_reader);
}

#[test]
fn test_reader_error_echoes_line() {
    let mut lexer = Lexer::from_reader("begin\n  x := ?;\nend\n".as_bytes()).unwrap();

    let error = loop {
        if let Err(error) = lexer.next_token() {
            break error;
        }
    };

    assert_eq!(
        error.to_string(),
        "Lexical error in line 2:\n  x := ?;\n       ^\nIncorrect symbol ?"
    );
}

#[test]
fn test_invalid_utf8_is_reported() {
    let bytes: &[u8] = b"x := 1\n\xff\xfe";
    let mut lexer = Lexer::from_reader(bytes).unwrap();

    let error = loop {
        match lexer.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => panic!("expected a read error"),
            Ok(_) => continue,
            Err(error) => break error,
        }
    };

    assert_eq!(error.get_error_name(), "Io");
}

const SPELLINGS: &[&str] = &[
    ";", ":", ":=", ",", "+", "-", "*", "/", "+=", "-=", "*=", "/=", "<", ">", "<=", ">=",
    "=", "<>",
];

fn token_text() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(SPELLINGS).prop_map(String::from),
        "[a-zA-Z][a-zA-Z0-9]{0,6}",
        "[0-9]{1,9}",
    ]
}

fn separator() -> impl Strategy<Value = String> {
    proptest::sample::select(&[" ", "\n", "\t", "  \r\n", " { note } ", " // note\n"][..])
        .prop_map(String::from)
}

#[test]
fn test_property_whitespace_only_is_eof() {
    proptest!(|(input in "[ \t\r\n]{0,40}")| {
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Eof);

        let row = 1 + input.matches('\n').count() as u32;
        let tail = input.rsplit('\n').next().unwrap_or("");
        let col = tail.chars().count() as u32 + 1;
        prop_assert_eq!(tokens[0].position, Position::new(row, col));
    });
}

#[test]
fn test_property_integer_literals() {
    proptest!(|(input in "[0-9]{1,12}")| {
        match input.parse::<i32>() {
            Ok(expected) => {
                let tokens = tokenize(&input).unwrap();
                prop_assert_eq!(tokens[0].kind, TokenKind::Inum);
                prop_assert_eq!(tokens[0].value, Some(expected));
                prop_assert_eq!(&tokens[0].text, &input);
            }
            Err(_) => {
                let error = tokenize(&input).unwrap_err();
                prop_assert_eq!(
                    error.get_kind(),
                    &ErrorImpl::IntegerOverflow { literal: input.clone() }
                );
            }
        }
    });
}

#[test]
fn test_property_identifiers() {
    proptest!(|(input in "[a-zA-Z][a-zA-Z0-9]{0,10}")| {
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(&tokens[0].text, &input);

        let expected = RESERVED_LOOKUP.get(input.as_str()).copied().unwrap_or(TokenKind::Id);
        prop_assert_eq!(tokens[0].kind, expected);
    });
}

#[test]
fn test_property_comments_and_whitespace_are_transparent() {
    proptest!(|(parts in proptest::collection::vec((token_text(), separator()), 0..20))| {
        let source = parts
            .iter()
            .map(|(text, sep)| format!("{}{}", text, sep))
            .collect::<String>();
        let original = tokenize(&source).unwrap();

        let joined = original
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let relexed = tokenize(&joined).unwrap();

        prop_assert_eq!(kinds(&original), kinds(&relexed));
    });
}

#[test]
fn test_property_error_text_is_stable() {
    proptest!(|(input in "[a-z ]{0,10}[@#$%?!\\[\\]][a-z ]{0,10}")| {
        let first = tokenize(&input).unwrap_err();
        let second = tokenize(&input).unwrap_err();
        prop_assert_eq!(first.to_string(), second.to_string());
    });
}
