//! Unit tests for the lexer module.
//!
//! Covers keywords and identifiers, numbers, strings with escapes, the
//! multi-character operators, comments and pragmas, positions, the token
//! source cursors and the fatal error cases.

use super::{
    lexer::tokenize,
    source::{Scanner, TokenSource},
    tokens::{TokenKind, MAX_TERMINAL},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.pbl".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "class enum sealed uninstantiable constructor foreach in typedef functype funcdef guarded is as";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Class,
            TokenKind::Enum,
            TokenKind::Sealed,
            TokenKind::Uninstantiable,
            TokenKind::Constructor,
            TokenKind::Foreach,
            TokenKind::In,
            TokenKind::Typedef,
            TokenKind::Functype,
            TokenKind::Funcdef,
            TokenKind::Guarded,
            TokenKind::Is,
            TokenKind::As,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo _bar baz_123 Classy num".to_string(), None).unwrap();

    for (token, expected) in tokens.iter().zip(["foo", "_bar", "baz_123", "Classy", "num"]) {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.val, expected);
    }
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].val, "42");
    assert_eq!(tokens[1].val, "3.14");
    assert_eq!(tokens[2].val, "0");
}

#[test]
fn test_tokenize_strings_keep_quotes() {
    let tokens = tokenize(r#""hello" "a\"b\n""#.to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].val, "\"hello\"");
    assert_eq!(tokens[1].val, "\"a\"b\n\"");
}

#[test]
fn test_tokenize_operators_longest_match() {
    assert_eq!(
        kinds(":: : ..= .. . <- << <= < ~= ** *= ++ += -- -= != =="),
        vec![
            TokenKind::ScopeOp,
            TokenKind::Colon,
            TokenKind::DotDotEquals,
            TokenKind::DotDot,
            TokenKind::Dot,
            TokenKind::LeftArrow,
            TokenKind::Stream,
            TokenKind::LessEquals,
            TokenKind::Less,
            TokenKind::TildeEquals,
            TokenKind::StarStar,
            TokenKind::StarEquals,
            TokenKind::PlusPlus,
            TokenKind::PlusEquals,
            TokenKind::MinusMinus,
            TokenKind::MinusEquals,
            TokenKind::NotEquals,
            TokenKind::Equals,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments_and_pragmas() {
    let tokens = tokenize("a // note\n//@ strict\nb".to_string(), None).unwrap();

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].val, "a");
    assert_eq!(tokens[1].kind, TokenKind::Pragma);
    assert_eq!(tokens[1].val, "strict");
    assert!(!tokens[1].kind.is_terminal());
    assert_eq!(tokens[2].val, "b");
}

#[test]
fn test_token_positions() {
    let tokens = tokenize("num x;\n  x = 1;".to_string(), None).unwrap();

    assert_eq!((tokens[0].line, tokens[0].col), (1, 1));
    assert_eq!((tokens[1].line, tokens[1].col), (1, 5));
    assert_eq!((tokens[3].line, tokens[3].col), (2, 3));
    assert_eq!((tokens[5].line, tokens[5].col), (2, 7));
}

#[test]
fn test_token_numbering() {
    assert_eq!(TokenKind::EOF.code(), 0);
    assert_eq!(TokenKind::Identifier.code(), 1);
    assert_eq!(MAX_TERMINAL, TokenKind::Dollar);
    assert!(TokenKind::Dollar.is_terminal());
    assert!(!TokenKind::Pragma.is_terminal());
    assert_eq!(TokenKind::Semicolon.describe(), "\";\"");
    assert_eq!(TokenKind::Identifier.describe(), "identifier");
}

#[test]
fn test_unterminated_string() {
    let result = tokenize("\"never closed".to_string(), Some("test.pbl".to_string()));

    assert!(result.is_err());
    assert_eq!(result.unwrap_err().get_error_name(), "UnterminatedString");
}

#[test]
fn test_unrecognised_token() {
    let result = tokenize("num x = @;".to_string(), Some("test.pbl".to_string()));

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().col, 9);
    assert_eq!(error.to_string(), "test.pbl(1,9): unrecognised token: \"@\"");
}

#[test]
fn test_scanner_peek_is_independent_of_scan() {
    let tokens = tokenize("a b c".to_string(), None).unwrap();
    let mut scanner = Scanner::new(tokens);

    assert_eq!(scanner.scan().unwrap().val, "a");
    assert_eq!(scanner.peek().unwrap().val, "b");
    assert_eq!(scanner.peek().unwrap().val, "c");
    scanner.reset_peek();
    assert_eq!(scanner.peek().unwrap().val, "b");

    assert_eq!(scanner.scan().unwrap().val, "b");
    assert_eq!(scanner.scan().unwrap().val, "c");
    assert_eq!(scanner.scan().unwrap().kind, TokenKind::EOF);
    assert_eq!(scanner.scan().unwrap().kind, TokenKind::EOF);
    assert_eq!(scanner.peek().unwrap().kind, TokenKind::EOF);
}
