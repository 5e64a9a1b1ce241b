//! Conflict resolvers.
//!
//! Where two productions share a first token these predicates look one
//! token further (through the peek cursor) to pick a path. None of them
//! consume input, so calling one repeatedly gives the same answer.

use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{
    lookups::{CLOSERS, DECL_KEYWORDS},
    parser::Parser,
};

impl<'a> Parser<'a> {
    /// Does the lookahead start a declaration rather than an expression?
    ///
    /// Declaration keywords decide immediately. Otherwise two identifiers in
    /// a row (`Type name`) are a declaration, as is a known type name that
    /// is not followed by `::`.
    pub fn is_decl(&mut self) -> Result<bool, Error> {
        if self.start_of(DECL_KEYWORDS) {
            return Ok(true);
        }

        let next = self.peek(1)?;
        if self.at(TokenKind::Identifier) && next.kind == TokenKind::Identifier {
            return Ok(true);
        }

        Ok(self.is_class_name() && next.kind != TokenKind::ScopeOp)
    }

    /// Is the lookahead an identifier the type context knows as a type?
    pub fn is_class_name(&self) -> bool {
        self.at(TokenKind::Identifier) && self.types().is_type(&self.lookahead().val)
    }

    /// `Name::member` rather than a plain symbol.
    pub fn is_scope_op_start(&mut self) -> Result<bool, Error> {
        if !self.at(TokenKind::Identifier) {
            return Ok(false);
        }
        Ok(self.peek(1)?.kind == TokenKind::ScopeOp)
    }

    /// A comma that separates two elements, as opposed to a trailing comma
    /// right before a closing bracket.
    pub fn not_final_comma(&mut self) -> Result<bool, Error> {
        if !self.at(TokenKind::Comma) {
            return Ok(false);
        }
        Ok(!CLOSERS.contains(self.peek(1)?.kind))
    }
}
