//! Integration tests for end-to-end scanning.
//!
//! These tests drive the scanner the way the REPL and file front-ends do:
//! loading a source file, scanning it to `EOF`, rendering the listing and
//! reporting error tokens.

use std::{fs, path::PathBuf};

use clex::{
    errors::errors::{ErrorImpl, ErrorTip},
    format_error, get_line,
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenKind,
    },
    read_source, render_token_list, render_tokens, scan_errors,
};
use pretty_assertions::assert_eq;

fn fixture() -> String {
    read_source(&PathBuf::from("tests/fixtures/sample.c")).unwrap()
}

#[test]
fn test_scan_sample_program() {
    let source = fixture();
    let tokens = tokenize(&source);

    assert!(scan_errors(&tokens).is_empty());

    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, TokenKind::EOF);
    assert_eq!(eof.line, 28);
    assert_eq!(tokens.iter().filter(|token| token.is_eof()).count(), 1);

    let main = tokens.iter().find(|token| token.lexeme == "main").unwrap();
    assert_eq!(main.kind, TokenKind::Identifier);
    assert_eq!(main.line, 15);

    let cases = tokens.iter().filter(|token| token.kind == TokenKind::Case).count();
    assert_eq!(cases, 5);
}

#[test]
fn test_sample_program_comment_is_skipped() {
    let source = fixture();
    let tokens = tokenize(&source);

    assert!(tokens.iter().all(|token| token.line != 3));
    assert!(!tokens.iter().any(|token| token.lexeme == "vowels"));
}

#[test]
fn test_sample_program_literals() {
    let source = fixture();
    let tokens = tokenize(&source);

    let strings: Vec<&str> = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::String)
        .map(|token| token.lexeme)
        .collect();
    assert_eq!(strings, vec!["\"hello, world\"", "\"%lu %f\\n\""]);

    let numbers: Vec<&str> = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Number)
        .map(|token| token.lexeme)
        .collect();
    assert_eq!(numbers, vec!["1", "0", "0", "0.5", "0", "1", "0", "1", "2.0", "3", "1.0"]);

    let nul = tokens
        .iter()
        .find(|token| token.kind == TokenKind::Character && token.line == 20)
        .unwrap();
    assert_eq!(nul.lexeme, "'\\0'");
}

#[test]
fn test_sample_program_operators() {
    let source = fixture();
    let tokens = tokenize(&source);

    let line_24: Vec<TokenKind> = tokens
        .iter()
        .filter(|token| token.line == 24)
        .map(|token| token.kind)
        .collect();
    assert_eq!(
        line_24,
        vec![
            TokenKind::Identifier,
            TokenKind::ShiftLeftEquals,
            TokenKind::Number,
            TokenKind::Semicolon,
        ]
    );

    let line_26: Vec<TokenKind> = tokens
        .iter()
        .filter(|token| token.line == 26)
        .map(|token| token.kind)
        .collect();
    assert_eq!(
        line_26,
        vec![
            TokenKind::Return,
            TokenKind::Identifier,
            TokenKind::GreaterEquals,
            TokenKind::Number,
            TokenKind::And,
            TokenKind::Identifier,
            TokenKind::Less,
            TokenKind::Number,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_render_listing() {
    let rendered = render_tokens("x = 1.;\n@");

    assert_eq!(
        rendered,
        concat!(
            "   1 Identifier       'x'\n",
            "   | Assignment       '='\n",
            "   | Error            'Malformed number.'\n",
            "   2 Error            'Unexpected character.'\n",
            "   | EOF              ''\n",
        )
    );
}

#[test]
fn test_render_repl_line() {
    let rendered = render_tokens("int x;\n");

    assert_eq!(
        rendered,
        concat!(
            "   1 Int              'int'\n",
            "   | Identifier       'x'\n",
            "   | Semicolon        ';'\n",
            "   2 EOF              ''\n",
        )
    );
}

#[test]
fn test_errors_do_not_stop_the_scan() {
    let source = "int $a = 1.;\nchar c = 'x\nchar *s = \"y;\nreturn a;";
    let tokens = tokenize(source);
    let errors = scan_errors(&tokens);

    let found: Vec<(ErrorImpl, u32)> = errors
        .iter()
        .map(|error| (*error.get_error(), error.get_line()))
        .collect();
    assert_eq!(
        found,
        vec![
            (ErrorImpl::UnexpectedCharacter, 1),
            (ErrorImpl::MalformedNumber, 1),
            (ErrorImpl::UnterminatedCharacter, 2),
            (ErrorImpl::UnterminatedString, 3),
        ]
    );

    let last_line: Vec<&str> = tokens
        .iter()
        .filter(|token| token.line == 4)
        .map(|token| token.lexeme)
        .collect();
    assert_eq!(last_line, vec!["return", "a", ";", ""]);
}

#[test]
fn test_report_error_against_source() {
    let source = "int main() {\n  return 0 @ 1;\n}\n";
    let tokens = tokenize(source);
    let errors = scan_errors(&tokens);

    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0].get_tip(), ErrorTip::None));
    assert_eq!(get_line(source, errors[0].get_line()), Some("  return 0 @ 1;"));
    assert_eq!(
        format_error(&errors[0], source, "main.c"),
        concat!(
            "Error: UnexpectedCharacter\n",
            "-> main.c\n",
            "  |\n",
            "2 | return 0 @ 1;\n",
            "  |\n",
        )
    );
}

#[test]
fn test_lexer_drives_pull_based() {
    let source = fixture();
    let mut lexer = Lexer::new(&source);
    let mut count = 0;

    loop {
        let token = lexer.scan_token();
        count += 1;
        if token.is_eof() {
            break;
        }
    }

    assert_eq!(count, tokenize(&source).len());
    assert_eq!(lexer.scan_token().kind, TokenKind::EOF);
    assert_eq!(lexer.line(), 28);
}

#[test]
fn test_read_source_accepts_invalid_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.c");
    fs::write(&path, b"int x; // caf\xe9\nint y = \xe9;\n").unwrap();

    let source = read_source(&path).unwrap();
    let tokens = tokenize(&source);

    let lexemes: Vec<(&str, u32)> = tokens
        .iter()
        .map(|token| (token.lexeme, token.line))
        .collect();
    assert_eq!(
        lexemes,
        vec![
            ("int", 1),
            ("x", 1),
            (";", 1),
            ("int", 2),
            ("y", 2),
            ("=", 2),
            ("Unexpected character.", 2),
            (";", 2),
            ("", 3),
        ]
    );
    assert_eq!(scan_errors(&tokens).len(), 1);
}

#[test]
fn test_render_token_list_matches_render_tokens() {
    let source = fixture();
    let tokens = tokenize(&source);

    assert_eq!(render_token_list(&tokens), render_tokens(&source));
}
