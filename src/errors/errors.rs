use std::{fmt::Display, rc::Rc};

use thiserror::Error;

use crate::{lexer::tokens::{TokenKind, MAX_TERMINAL}, Position};

/// Unrecoverable host-level failure, e.g. the lexer rejecting its input.
///
/// Never recorded as a diagnostic; parser productions propagate it with `?`.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::SourceFailure { .. } => "SourceFailure",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { token } => {
                ErrorTip::Suggestion(format!("`{}` is not part of the language", token))
            }
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("add the closing `\"`"))
            }
            ErrorImpl::SourceFailure { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({},{}): {}",
            self.position.script, self.position.line, self.position.col, self.internal_error
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("token source failed: {message}")]
    SourceFailure { message: String },
}

/// Grammar productions named in invalid-alternative diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Production {
    Statement,
    EmbeddedStatement,
    ForOrIfStatement,
    Declaration,
    ClassMember,
    TypeSpec,
    Primary,
    DefaultValue,
}

impl Production {
    fn index(self) -> u16 {
        match self {
            Production::Statement => 0,
            Production::EmbeddedStatement => 1,
            Production::ForOrIfStatement => 2,
            Production::Declaration => 3,
            Production::ClassMember => 4,
            Production::TypeSpec => 5,
            Production::Primary => 6,
            Production::DefaultValue => 7,
        }
    }
}

impl Display for Production {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Production::Statement => "Statement",
            Production::EmbeddedStatement => "EmbeddedStatement",
            Production::ForOrIfStatement => "ForOrIfStatement",
            Production::Declaration => "Declaration",
            Production::ClassMember => "ClassMember",
            Production::TypeSpec => "TypeSpec",
            Production::Primary => "Primary",
            Production::DefaultValue => "DefaultValue",
        };
        write!(f, "{}", name)
    }
}

/// What went wrong at a syntax error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("{0} expected")]
    Expected(TokenKind),
    #[error("invalid {0}")]
    Invalid(Production),
    #[error("{0}")]
    Other(String),
}

impl ParseErrorKind {
    /// Stable numeric code: the terminal number for expected-token errors,
    /// codes past the last terminal for everything else.
    pub fn code(&self) -> u16 {
        let base = MAX_TERMINAL.code() as u16 + 1;
        match self {
            ParseErrorKind::Expected(kind) => kind.code() as u16,
            ParseErrorKind::Invalid(production) => base + production.index(),
            ParseErrorKind::Other(_) => base + 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub code: u16,
    pub script: Rc<String>,
    pub line: u32,
    pub col: u32,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: &ParseErrorKind, position: Position) -> Self {
        Diagnostic {
            code: kind.code(),
            script: position.script,
            line: position.line,
            col: position.col,
            message: kind.to_string(),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({},{}): {}", self.script, self.line, self.col, self.message)
    }
}

/// Ordered log of syntax diagnostics for one parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Diagnostic> {
        self.entries.get(index)
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        write!(f, "{} error(s)", self.count())
    }
}
