//! Unit tests for error handling.

use crate::errors::errors::{
    Diagnostic, Diagnostics, Error, ErrorImpl, ErrorTip, ParseErrorKind, Production,
};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn position(line: u32, col: u32) -> Position {
    Position {
        line,
        col,
        script: Rc::new("test.pbl".to_string()),
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(3, 7),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().col, 7);
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::UnterminatedString, position(2, 1));

    assert_eq!(error.to_string(), "test.pbl(2,1): unterminated string literal");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::SourceFailure {
            message: "closed".to_string(),
        },
        position(1, 1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(1, 1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains('@')),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_expected_message_and_code() {
    let kind = ParseErrorKind::Expected(TokenKind::Semicolon);

    assert_eq!(kind.to_string(), "\";\" expected");
    assert_eq!(kind.code(), TokenKind::Semicolon as u16);
}

#[test]
fn test_invalid_codes_follow_terminals() {
    let statement = ParseErrorKind::Invalid(Production::Statement);
    let primary = ParseErrorKind::Invalid(Production::Primary);

    assert_eq!(statement.to_string(), "invalid Statement");
    assert!(statement.code() > TokenKind::Dollar as u16);
    assert_ne!(statement.code(), primary.code());
}

#[test]
fn test_diagnostics_keep_order() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.push(Diagnostic::new(
        &ParseErrorKind::Expected(TokenKind::CloseParen),
        position(1, 4),
    ));
    diagnostics.push(Diagnostic::new(
        &ParseErrorKind::Invalid(Production::Primary),
        position(2, 1),
    ));

    assert_eq!(diagnostics.count(), 2);
    let lines: Vec<u32> = diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![1, 2]);
    assert_eq!(
        diagnostics.get(0).map(|d| d.to_string()),
        Some("test.pbl(1,4): \")\" expected".to_string())
    );
}
