use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

macro_rules! pattern {
    ($regex:literal, $handler:expr) => {
        RegexPattern {
            regex: Regex::new(concat!("^", $regex)).unwrap(),
            handler: $handler,
        }
    };
}

lazy_static! {
    // Order matters: longer operators must precede their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern!("[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        pattern!("[0-9]+(\\.[0-9]+)?", number_handler),
        pattern!("\\s+", skip_handler),
        pattern!("\"(\\\\.|[^\"\\\\])*\"", string_handler),
        pattern!("//@[^\\n]*", pragma_handler),
        pattern!("//[^\\n]*", skip_handler),
        pattern!("\\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")),
        pattern!("\\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")),
        pattern!("\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        pattern!("\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        pattern!("\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        pattern!("\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        pattern!("\\.\\.=", MK_DEFAULT_HANDLER!(TokenKind::DotDotEquals, "..=")),
        pattern!("\\.\\.", MK_DEFAULT_HANDLER!(TokenKind::DotDot, "..")),
        pattern!("\\.", MK_DEFAULT_HANDLER!(TokenKind::Dot, ".")),
        pattern!("::", MK_DEFAULT_HANDLER!(TokenKind::ScopeOp, "::")),
        pattern!(":", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        pattern!("<-", MK_DEFAULT_HANDLER!(TokenKind::LeftArrow, "<-")),
        pattern!("<<", MK_DEFAULT_HANDLER!(TokenKind::Stream, "<<")),
        pattern!("<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")),
        pattern!("<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        pattern!(">=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")),
        pattern!(">", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        pattern!("==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        pattern!("=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        pattern!("!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        pattern!("!", MK_DEFAULT_HANDLER!(TokenKind::Not, "!")),
        pattern!("~=", MK_DEFAULT_HANDLER!(TokenKind::TildeEquals, "~=")),
        pattern!("\\|\\|", MK_DEFAULT_HANDLER!(TokenKind::Or, "||")),
        pattern!("&&", MK_DEFAULT_HANDLER!(TokenKind::And, "&&")),
        pattern!("\\+\\+", MK_DEFAULT_HANDLER!(TokenKind::PlusPlus, "++")),
        pattern!("\\+=", MK_DEFAULT_HANDLER!(TokenKind::PlusEquals, "+=")),
        pattern!("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern!("--", MK_DEFAULT_HANDLER!(TokenKind::MinusMinus, "--")),
        pattern!("-=", MK_DEFAULT_HANDLER!(TokenKind::MinusEquals, "-=")),
        pattern!("-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        pattern!("\\*\\*", MK_DEFAULT_HANDLER!(TokenKind::StarStar, "**")),
        pattern!("\\*=", MK_DEFAULT_HANDLER!(TokenKind::StarEquals, "*=")),
        pattern!("\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        pattern!("/=", MK_DEFAULT_HANDLER!(TokenKind::SlashEquals, "/=")),
        pattern!("/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        pattern!("%", MK_DEFAULT_HANDLER!(TokenKind::Percent, "%")),
        pattern!("#", MK_DEFAULT_HANDLER!(TokenKind::Hash, "#")),
        pattern!("\\$", MK_DEFAULT_HANDLER!(TokenKind::Dollar, "$")),
        pattern!("\\?", MK_DEFAULT_HANDLER!(TokenKind::Question, "?")),
        pattern!(",", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        pattern!(";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    pub line: u32,
    pub col: u32,
    script: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, script: Option<String>) -> Lexer {
        let script = Rc::new(script.unwrap_or_else(|| String::from("shell")));

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            col: 1,
            script,
        }
    }

    /// Advances `n` bytes, keeping line/column in step with the consumed text.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());
        for c in self.source[self.pos..end].chars() {
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
        self.pos = end;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn position(&self) -> Position {
        Position {
            line: self.line,
            col: self.col,
            script: Rc::clone(&self.script),
        }
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    let len = matched.len();

    lexer.push(MK_TOKEN!(TokenKind::Number, matched, lexer.line, lexer.col));
    lexer.advance_n(len);
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let len = lexer.matched(regex).len();
    lexer.advance_n(len);
}

fn pragma_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    let len = matched.len();

    lexer.push(MK_TOKEN!(
        TokenKind::Pragma,
        matched[3..].trim().to_string(),
        lexer.line,
        lexer.col
    ));
    lexer.advance_n(len);
}

/// Strings keep their surrounding quotes; escapes inside are resolved here.
fn string_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    let len = matched.len();
    let inner = &matched[1..len - 1];

    let mut result = String::from("\"");
    let mut chars = inner.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek() {
            Some('n') => {
                result.push('\n');
                chars.next();
            }
            Some('t') => {
                result.push('\t');
                chars.next();
            }
            Some('r') => {
                result.push('\r');
                chars.next();
            }
            Some('\\') => {
                result.push('\\');
                chars.next();
            }
            Some('"') => {
                result.push('"');
                chars.next();
            }
            Some('0') => {
                result.push('\0');
                chars.next();
            }
            _ => result.push(ch), // Keep the backslash
        }
    }
    result.push('"');

    lexer.push(MK_TOKEN!(TokenKind::String, result, lexer.line, lexer.col));
    lexer.advance_n(len);
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let value = lexer.matched(regex);
    let len = value.len();
    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.push(MK_TOKEN!(kind, value, lexer.line, lexer.col));
    lexer.advance_n(len);
}

/// Converts source text into tokens, terminated by a single EOF token.
///
/// Fails on the first character no pattern accepts; that failure is a host
/// error, not a syntax diagnostic.
pub fn tokenize(source: String, script: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, script);

    while !lex.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex),
            None if lex.at() == '"' => {
                return Err(Error::new(ErrorImpl::UnterminatedString, lex.position()))
            }
            None => {
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken {
                        token: lex.at().to_string(),
                    },
                    lex.position(),
                ))
            }
        }
    }

    let (line, col) = (lex.line, lex.col);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::new(), line, col));
    Ok(lex.tokens)
}
