//! Integration tests for the full front end.
//!
//! These tests drive the public API end to end: source text through the
//! lexer and token source into the parser, checking trees, diagnostics and
//! the fatal error path.

use std::rc::Rc;

use pebble::{
    ast::ast::Expr,
    config::ParserConfig,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::tokenize,
        source::{Scanner, TokenSource},
        tokens::{Token, TokenKind},
    },
    parse_source,
    parser::parser::parse,
    render_error,
    type_context::{TypeContext, TypeNames},
    Position,
};

const PROGRAM: &str = r#"
//@ version 2
typedef map<string, num> Scores;

enum<num> Level { Low, Mid = 5, High, };

sealed class Player : Entity {
    string name = "anon";
    static num count;
    constructor {
        count++;
    }
    num score(num bonus = 0) {
        return base * 2 + bonus;
    }
}

Player p = new { name = "ada"; };
const num limit = 10;

for (i = 0, limit) {
    if (i % 2 == 0) continue;
    p.score(i);
}

foreach (key, value in table) {
    assert(value >= 0, "negative score for ", key);
}

string label = p.name .. ":" .. $p.score();
"#;

fn types() -> TypeNames {
    TypeNames::new().with("map").with("Player")
}

#[test]
fn test_parse_full_program() {
    let config = ParserConfig::new("program.pbl");
    let output = parse_source(PROGRAM, &types(), &config).unwrap();

    assert!(output.is_ok(), "unexpected diagnostics:\n{}", output.diagnostics);

    let Some(Expr::Block(root)) = output.root else {
        panic!("expected a root block");
    };
    assert!(!root.scoped);
    assert_eq!(root.len(), 8);

    let kinds: Vec<&str> = root
        .iter()
        .map(|stmt| match stmt {
            Expr::TypeAlias(_) => "typedef",
            Expr::Enum(_) => "enum",
            Expr::Class(_) => "class",
            Expr::Set(_) => "set",
            Expr::For(_) => "for",
            Expr::ForEach(_) => "foreach",
            _ => "other",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["typedef", "enum", "class", "set", "set", "for", "foreach", "set"]
    );

    let Expr::Class(player) = &root.body[2] else {
        panic!("expected the class");
    };
    assert_eq!(player.name, "Player");
    assert!(player.sealed);
    assert_eq!(player.members.len(), 3);
    assert!(player.constructor.is_some());

    assert_eq!(root.body[3].to_string(), "Player p = new Player { (name = \"ada\"); }");
    assert_eq!(root.body[4].to_string(), "const num limit = 10");
    assert_eq!(
        root.body[7].to_string(),
        "string label = ((p.name .. \":\") .. ($p.score()))"
    );
}

#[test]
fn test_parse_full_program_without_asserts() {
    let config = ParserConfig::new("program.pbl").with_assertions(false);
    let output = parse_source(PROGRAM, &types(), &config).unwrap();

    assert!(output.is_ok());
    let Some(Expr::Block(root)) = output.root else {
        panic!("expected a root block");
    };
    assert_eq!(
        root.body[6].to_string(),
        "foreach (key, value in table) { true; }"
    );
}

#[test]
fn test_diagnostics_are_ordered_and_located() {
    let source = "num a = 1\nnum b = ;\nc = (d;\nnum e = 5;";
    let config = ParserConfig::new("broken.pbl");
    let output = parse_source(source, &TypeNames::new(), &config).unwrap();

    assert_eq!(output.error_count(), 3);
    let lines: Vec<u32> = output.diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![2, 2, 3]);
    assert_eq!(
        output.diagnostics.to_string(),
        "broken.pbl(2,1): \";\" expected\n\
         broken.pbl(2,9): invalid Primary\n\
         broken.pbl(3,7): \")\" expected\n\
         3 error(s)"
    );

    let Some(Expr::Block(root)) = output.root else {
        panic!("expected a root block");
    };
    assert_eq!(root.body.last().unwrap().to_string(), "num e = 5");
}

#[test]
fn test_render_diagnostic_snippet() {
    let source = "num a = 1;\n  num b = ;\n";
    let output = parse_source(source, &TypeNames::new(), &ParserConfig::new("snip.pbl")).unwrap();
    let diagnostic = output.diagnostics.get(0).unwrap();

    let rendered = render_error(
        &diagnostic.message,
        &diagnostic.script,
        diagnostic.line,
        diagnostic.col,
        source,
    );
    assert_eq!(
        rendered,
        "Error: invalid Primary\n-> snip.pbl\n  |\n2 | num b = ;\n  | --------^\n"
    );
}

#[test]
fn test_custom_type_context() {
    struct Uppercase;

    impl TypeContext for Uppercase {
        fn is_type(&self, name: &str) -> bool {
            name.starts_with(|c: char| c.is_ascii_uppercase())
        }
    }

    let config = ParserConfig::default();
    let output = parse_source("Box<num> b; box<num> c;", &Uppercase, &config).unwrap();

    assert!(output.is_ok());
    assert_eq!(
        output.root.unwrap().to_string(),
        "Box<num> b; ((box < num) > c);"
    );
}

/// Fails after handing out a fixed number of tokens.
struct FailingSource {
    inner: Scanner,
    remaining: usize,
}

impl TokenSource for FailingSource {
    fn scan(&mut self) -> Result<Token, Error> {
        if self.remaining == 0 {
            return Err(Error::new(
                ErrorImpl::SourceFailure {
                    message: String::from("stream closed"),
                },
                Position {
                    line: 1,
                    col: 1,
                    script: Rc::new(String::from("stream")),
                },
            ));
        }
        self.remaining -= 1;
        self.inner.scan()
    }

    fn reset_peek(&mut self) {
        self.inner.reset_peek();
    }

    fn peek(&mut self) -> Result<Token, Error> {
        self.inner.peek()
    }
}

#[test]
fn test_source_failure_is_fatal() {
    let tokens = tokenize(String::from("num x = 1 + 2;"), None).unwrap();
    let mut source = FailingSource {
        inner: Scanner::new(tokens),
        remaining: 3,
    };

    let result = parse(&mut source, &TypeNames::new(), &ParserConfig::default());

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "SourceFailure");
    assert_eq!(error.to_string(), "stream(1,1): token source failed: stream closed");
}

#[test]
fn test_parse_from_token_vector() {
    let tokens = vec![
        Token {
            kind: TokenKind::Identifier,
            val: String::from("go"),
            line: 1,
            col: 1,
        },
        Token {
            kind: TokenKind::OpenParen,
            val: String::from("("),
            line: 1,
            col: 3,
        },
        Token {
            kind: TokenKind::CloseParen,
            val: String::from(")"),
            line: 1,
            col: 4,
        },
        Token {
            kind: TokenKind::Semicolon,
            val: String::from(";"),
            line: 1,
            col: 5,
        },
    ];
    let mut scanner = Scanner::from(tokens);

    let output = parse(&mut scanner, &TypeNames::new(), &ParserConfig::default()).unwrap();
    assert!(output.is_ok());
    assert_eq!(output.root.unwrap().to_string(), "go()");
}
