//! Parser driver.
//!
//! Holds the token window (`t`, the last consumed token, and `la`, the
//! lookahead), the error-distance counter that throttles cascading reports,
//! and the diagnostics log. Productions live in the sibling modules as free
//! functions over `&mut Parser`.

use std::rc::Rc;

use log::{debug, trace};

use crate::{
    ast::{ast::Expr, statements::BlockStmt},
    config::ParserConfig,
    errors::errors::{Diagnostic, Diagnostics, Error, ParseErrorKind},
    lexer::{
        source::TokenSource,
        tokens::{Token, TokenKind},
    },
    type_context::TypeContext,
    Position,
};

use super::{lookups::TokenSet, stmt::parse_stmt_list};

/// The main parser structure that maintains parsing state.
///
/// One instance serves exactly one parse.
pub struct Parser<'a> {
    /// Where tokens come from
    source: &'a mut dyn TokenSource,
    /// Answers "is this identifier a type name"
    types: &'a dyn TypeContext,
    config: &'a ParserConfig,
    script: Rc<String>,
    /// Last consumed token
    t: Token,
    /// Lookahead, not yet consumed
    la: Token,
    /// Tokens consumed since the last syntax error
    err_dist: u32,
    /// Total tokens consumed, used to detect productions that made no progress
    consumed: usize,
    diagnostics: Diagnostics,
}

/// Result of a parse: the tree (absent for an empty script) and every
/// syntax diagnostic in the order it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    pub root: Option<Expr>,
    pub diagnostics: Diagnostics,
}

impl ParseOutput {
    pub fn error_count(&self) -> usize {
        self.diagnostics.count()
    }

    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl<'a> Parser<'a> {
    pub fn new(
        source: &'a mut dyn TokenSource,
        types: &'a dyn TypeContext,
        config: &'a ParserConfig,
    ) -> Self {
        Parser {
            source,
            types,
            config,
            script: Rc::new(config.script_name.clone()),
            t: Token::start(),
            la: Token::start(),
            err_dist: config.min_err_dist,
            consumed: 0,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Returns the last consumed token.
    pub fn current_token(&self) -> &Token {
        &self.t
    }

    /// Returns the lookahead token.
    pub fn lookahead(&self) -> &Token {
        &self.la
    }

    pub fn la_kind(&self) -> TokenKind {
        self.la.kind
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.la.kind == kind
    }

    pub fn start_of(&self, set: TokenSet) -> bool {
        set.contains(self.la.kind)
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn config(&self) -> &ParserConfig {
        self.config
    }

    pub fn types(&self) -> &dyn TypeContext {
        self.types
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Advances: `t` takes the lookahead and the next terminal becomes `la`.
    /// Tokens outside the terminal range (pragmas) are skipped.
    pub fn get(&mut self) -> Result<(), Error> {
        let next = loop {
            let token = self.source.scan()?;
            if token.kind.is_terminal() {
                break token;
            }
            trace!("skipping non-terminal {}", token);
        };

        self.t = std::mem::replace(&mut self.la, next);
        self.err_dist += 1;
        self.consumed += 1;
        Ok(())
    }

    /// Consumes `kind` or records that it was missing. Never consumes on a
    /// mismatch, so the caller continues as if the token had been present.
    pub fn expect(&mut self, kind: TokenKind) -> Result<(), Error> {
        if self.la.kind == kind {
            self.get()
        } else {
            self.syn_err(ParseErrorKind::Expected(kind));
            Ok(())
        }
    }

    /// Expects an identifier and returns its text, or an empty name when it
    /// is missing.
    pub fn expect_ident(&mut self) -> Result<String, Error> {
        if self.la.kind == TokenKind::Identifier {
            self.get()?;
            Ok(self.t.val.clone())
        } else {
            self.syn_err(ParseErrorKind::Expected(TokenKind::Identifier));
            Ok(String::new())
        }
    }

    /// Like `expect`, but on a mismatch discards tokens until one in
    /// `follow` (or end of input) is reached.
    pub fn expect_weak(&mut self, kind: TokenKind, follow: TokenSet) -> Result<(), Error> {
        if self.la.kind == kind {
            return self.get();
        }

        self.syn_err(ParseErrorKind::Expected(kind));
        self.synchronize(follow)
    }

    /// Separator handling for lists. Returns whether the list continues.
    ///
    /// `follow` holds the tokens that end the list and `repeat` the tokens
    /// that start another element. A missing separator in front of an
    /// element is reported and the list goes on; anything else is reported
    /// and skipped.
    pub fn weak_separator(
        &mut self,
        kind: TokenKind,
        follow: TokenSet,
        repeat: TokenSet,
    ) -> Result<bool, Error> {
        if self.la.kind == kind {
            self.get()?;
            return Ok(true);
        }
        if follow.contains(self.la.kind) {
            return Ok(false);
        }
        if repeat.contains(self.la.kind) {
            self.syn_err(ParseErrorKind::Expected(kind));
            return Ok(true);
        }

        self.syn_err(ParseErrorKind::Expected(kind));
        self.synchronize(follow.union(repeat))?;
        Ok(repeat.contains(self.la.kind))
    }

    /// Discards tokens until the lookahead is in `set` or input ends.
    pub fn synchronize(&mut self, set: TokenSet) -> Result<(), Error> {
        while !set.contains(self.la.kind) && self.la.kind != TokenKind::EOF {
            debug!("discarding {} while recovering", self.la);
            self.get()?;
        }
        Ok(())
    }

    /// Returns the `n`th token after the lookahead without consuming anything.
    pub fn peek(&mut self, n: usize) -> Result<Token, Error> {
        self.source.reset_peek();
        let mut token = self.la.clone();
        for _ in 0..n {
            token = loop {
                let next = self.source.peek()?;
                if next.kind.is_terminal() {
                    break next;
                }
            };
        }
        Ok(token)
    }

    /// Records a syntax error at the lookahead, unless another error was
    /// reported too recently.
    pub fn syn_err(&mut self, kind: ParseErrorKind) {
        let position = Position {
            line: self.la.line,
            col: self.la.col,
            script: Rc::clone(&self.script),
        };
        self.report(kind, position);
    }

    /// Records an error that is not a token mismatch, at the last consumed token.
    pub fn sem_err(&mut self, message: impl Into<String>) {
        let position = Position {
            line: self.t.line,
            col: self.t.col,
            script: Rc::clone(&self.script),
        };
        self.report(ParseErrorKind::Other(message.into()), position);
    }

    fn report(&mut self, kind: ParseErrorKind, position: Position) {
        if self.err_dist >= self.config.min_err_dist {
            debug!("syntax error at {}:{}: {}", position.line, position.col, kind);
            self.diagnostics.push(Diagnostic::new(&kind, position));
        } else {
            trace!("suppressed cascading error: {}", kind);
        }
        self.err_dist = 0;
    }

    fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

/// Parses a whole script from `source`.
///
/// Syntax errors never abort the parse; they are collected in the returned
/// diagnostics. `Err` is returned only when the token source itself fails.
///
/// # Returns
///
/// The root node is absent for an empty script, the single statement when
/// there is exactly one, and otherwise an unscoped block of all top-level
/// statements in source order.
pub fn parse(
    source: &mut dyn TokenSource,
    types: &dyn TypeContext,
    config: &ParserConfig,
) -> Result<ParseOutput, Error> {
    let mut parser = Parser::new(source, types, config);
    parser.get()?;

    let root = parse_program(&mut parser)?;
    parser.expect(TokenKind::EOF)?;

    Ok(ParseOutput {
        root,
        diagnostics: parser.into_diagnostics(),
    })
}

pub fn parse_program(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    trace!("parse_program: {}", parser.lookahead());
    let mut body = parse_stmt_list(parser, TokenKind::EOF)?;

    Ok(match body.len() {
        0 => None,
        1 => body.pop(),
        _ => Some(Expr::Block(BlockStmt {
            body,
            scoped: false,
        })),
    })
}
