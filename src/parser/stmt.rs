//! Statement grammar.
//!
//! Three statement forms share most alternatives:
//!
//! - `parse_stmt`: anything, including class and enum declarations
//! - `parse_embedded_stmt`: the same minus class and enum declarations
//! - `parse_for_or_if_stmt`: the body of `for`/`if`; takes a bare expression
//!   statement where the others would consult `is_decl`
//!
//! Statements return `None` when they produce no node (the empty statement,
//! or an alternative that could not be parsed at all).

use log::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::Literal,
        statements::*,
    },
    errors::errors::{Error, ParseErrorKind, Production},
    lexer::tokens::TokenKind,
};

use super::{
    decl::parse_decl,
    expr::parse_expr,
    lookups::{
        CLASS_MEMBER_SYNC, FIRST_DECL, FIRST_EXPR, FIRST_KEYWORD_STMT, FIRST_STATEMENT,
        FIRST_TYPE_DECL, STATEMENT_SYNC,
    },
    parser::Parser,
    types::parse_type_spec,
};

/// Statements up to `end` (not consumed). A statement that consumed nothing
/// is skipped together with everything up to the next statement start.
pub fn parse_stmt_list(parser: &mut Parser, end: TokenKind) -> Result<Vec<Expr>, Error> {
    let mut body = Vec::new();

    while !parser.at(end) && !parser.at(TokenKind::EOF) {
        let start = parser.consumed();

        if parser.start_of(FIRST_STATEMENT) {
            if let Some(stmt) = parse_stmt(parser)? {
                body.push(stmt);
            }
        } else {
            parser.syn_err(ParseErrorKind::Invalid(Production::Statement));
        }

        if parser.consumed() == start {
            parser.get()?;
            parser.synchronize(STATEMENT_SYNC)?;
        }
    }

    Ok(body)
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    trace!("parse_stmt: {}", parser.lookahead());
    match parser.la_kind() {
        TokenKind::Class | TokenKind::Sealed | TokenKind::Uninstantiable => {
            Ok(Some(parse_class_decl(parser)?))
        }
        TokenKind::Enum => Ok(Some(parse_enum_decl(parser)?)),
        _ => parse_embedded_stmt(parser),
    }
}

pub fn parse_embedded_stmt(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    if parser.start_of(FIRST_KEYWORD_STMT) {
        return parse_keyword_stmt(parser);
    }
    if parser.start_of(FIRST_TYPE_DECL) {
        // Type declarations need braces around them in a loop or if body.
        parser.syn_err(ParseErrorKind::Invalid(Production::EmbeddedStatement));
        return Ok(None);
    }
    if parser.is_decl()? {
        return Ok(Some(parse_decl(parser)?));
    }
    if parser.start_of(FIRST_EXPR) {
        return Ok(Some(parse_expr_stmt(parser)?));
    }

    parser.syn_err(ParseErrorKind::Invalid(Production::EmbeddedStatement));
    Ok(None)
}

/// Body of `for` and `if`. An empty or missing body becomes an empty block.
pub fn parse_for_or_if_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    let stmt = if parser.start_of(FIRST_KEYWORD_STMT) {
        parse_keyword_stmt(parser)?
    } else if parser.start_of(FIRST_EXPR) {
        Some(parse_expr_stmt(parser)?)
    } else {
        parser.syn_err(ParseErrorKind::Invalid(Production::ForOrIfStatement));
        None
    };

    Ok(stmt.unwrap_or_else(|| Expr::Block(BlockStmt::new(vec![]))))
}

fn parse_keyword_stmt(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    let stmt = match parser.la_kind() {
        TokenKind::OpenCurly => Expr::Block(parse_block(parser)?),
        TokenKind::If => parse_if_stmt(parser)?,
        TokenKind::For => parse_for_stmt(parser)?,
        TokenKind::Foreach => parse_foreach_stmt(parser)?,
        TokenKind::Assert => parse_assert_stmt(parser)?,
        TokenKind::Break => {
            parser.get()?;
            parser.expect_weak(TokenKind::Semicolon, STATEMENT_SYNC)?;
            Expr::Break
        }
        TokenKind::Continue => {
            parser.get()?;
            parser.expect_weak(TokenKind::Semicolon, STATEMENT_SYNC)?;
            Expr::Continue
        }
        TokenKind::Return => parse_return_stmt(parser)?,
        TokenKind::Typedef => parse_type_alias(parser)?,
        _ => {
            // Empty statement.
            parser.expect(TokenKind::Semicolon)?;
            return Ok(None);
        }
    };

    Ok(Some(stmt))
}

pub fn parse_expr_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    let expr = parse_expr(parser)?;
    parser.expect_weak(TokenKind::Semicolon, STATEMENT_SYNC)?;
    Ok(expr)
}

/// `"{" {Statement} "}"`, a scoped block.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.expect(TokenKind::OpenCurly)?;
    let body = parse_stmt_list(parser, TokenKind::CloseCurly)?;
    parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockStmt::new(body))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    parser.get()?;
    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let then_body = parse_for_or_if_stmt(parser)?;

    let else_body = if parser.at(TokenKind::Else) {
        parser.get()?;
        Some(parse_for_or_if_stmt(parser)?.boxed())
    } else {
        None
    };

    Ok(Expr::If(IfStmt {
        condition: condition.boxed(),
        then_body: then_body.boxed(),
        else_body,
    }))
}

/// `for (ident = min, max [, step]) body`
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    parser.get()?;
    parser.expect(TokenKind::OpenParen)?;
    let bind = parser.expect_ident()?;
    parser.expect(TokenKind::Assignment)?;
    let min = parse_expr(parser)?;
    parser.expect(TokenKind::Comma)?;
    let max = parse_expr(parser)?;

    let step = if parser.at(TokenKind::Comma) {
        parser.get()?;
        Some(parse_expr(parser)?.boxed())
    } else {
        None
    };
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_for_or_if_stmt(parser)?;

    Ok(Expr::For(ForStmt {
        bind,
        min: min.boxed(),
        max: max.boxed(),
        step,
        body: body.boxed(),
    }))
}

/// `foreach (key, value in collection) body`
pub fn parse_foreach_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    parser.get()?;
    parser.expect(TokenKind::OpenParen)?;
    let key = parser.expect_ident()?;
    parser.expect(TokenKind::Comma)?;
    let value = parser.expect_ident()?;
    parser.expect(TokenKind::In)?;
    let collection = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_embedded_stmt(parser)?.unwrap_or_else(|| Expr::Block(BlockStmt::new(vec![])));

    Ok(Expr::ForEach(ForEachStmt {
        key,
        value,
        collection: collection.boxed(),
        body: body.boxed(),
    }))
}

/// `assert(cond [, message...]) (block | ;)`
///
/// With assertions disabled in the config the whole statement is still
/// parsed, but it becomes the literal `true`.
pub fn parse_assert_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    parser.get()?;
    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser)?;

    let mut messages = Vec::new();
    while parser.at(TokenKind::Comma) {
        parser.get()?;
        messages.push(parse_expr(parser)?);
    }
    parser.expect(TokenKind::CloseParen)?;

    let on_fail = if parser.at(TokenKind::OpenCurly) {
        Some(parse_block(parser)?)
    } else {
        parser.expect_weak(TokenKind::Semicolon, STATEMENT_SYNC)?;
        None
    };

    if !parser.config().assertions {
        return Ok(Expr::Literal(Literal::Bool(true)));
    }

    Ok(Expr::Assert(AssertStmt {
        condition: condition.boxed(),
        messages,
        on_fail,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    parser.get()?;

    let value = if parser.start_of(FIRST_EXPR) {
        Some(parse_expr(parser)?.boxed())
    } else {
        None
    };
    parser.expect_weak(TokenKind::Semicolon, STATEMENT_SYNC)?;

    Ok(Expr::Return(value))
}

/// `typedef TypeSpec Name;`
pub fn parse_type_alias(parser: &mut Parser) -> Result<Expr, Error> {
    parser.get()?;
    let target = parse_type_spec(parser)?;
    let name = parser.expect_ident()?;
    parser.expect_weak(TokenKind::Semicolon, STATEMENT_SYNC)?;

    Ok(Expr::TypeAlias(TypeAliasStmt { name, target }))
}

/// `{sealed | uninstantiable} class Name [: Parent] [{ members }] [;]`
pub fn parse_class_decl(parser: &mut Parser) -> Result<Expr, Error> {
    trace!("parse_class_decl: {}", parser.lookahead());
    let mut sealed = false;
    let mut uninstantiable = false;
    loop {
        match parser.la_kind() {
            TokenKind::Sealed => sealed = true,
            TokenKind::Uninstantiable => uninstantiable = true,
            _ => break,
        }
        parser.get()?;
    }

    parser.expect(TokenKind::Class)?;
    let name = parser.expect_ident()?;

    let parent = if parser.at(TokenKind::Colon) {
        parser.get()?;
        Some(parser.expect_ident()?)
    } else {
        None
    };

    let mut members = Vec::new();
    let mut constructor = None;
    if parser.at(TokenKind::OpenCurly) {
        parser.get()?;
        while !parser.at(TokenKind::CloseCurly) && !parser.at(TokenKind::EOF) {
            let start = parser.consumed();

            if parser.at(TokenKind::Constructor) {
                parser.get()?;
                let body = parse_block(parser)?;
                if constructor.is_some() {
                    parser.sem_err(format!("class {} already has a constructor", name));
                }
                constructor = Some(body);
            } else if parser.start_of(FIRST_DECL) {
                members.push(parse_decl(parser)?);
            } else {
                parser.syn_err(ParseErrorKind::Invalid(Production::ClassMember));
            }

            if parser.consumed() == start {
                parser.get()?;
                parser.synchronize(CLASS_MEMBER_SYNC)?;
            }
        }
        parser.expect(TokenKind::CloseCurly)?;
    }

    if parser.at(TokenKind::Semicolon) {
        parser.get()?;
    }

    Ok(Expr::Class(ClassStmt {
        name,
        parent,
        sealed,
        uninstantiable,
        members,
        constructor,
    }))
}

/// `enum<Type> Name { a [= init], b [= init] [,] } [;]`
pub fn parse_enum_decl(parser: &mut Parser) -> Result<Expr, Error> {
    parser.get()?;
    parser.expect(TokenKind::Less)?;
    let underlying = parse_type_spec(parser)?;
    parser.expect(TokenKind::Greater)?;
    let name = parser.expect_ident()?;
    parser.expect(TokenKind::OpenCurly)?;

    let mut values = Vec::new();
    if parser.at(TokenKind::Identifier) {
        values.push(parse_enum_value(parser)?);
        while parser.not_final_comma()? {
            parser.get()?;
            values.push(parse_enum_value(parser)?);
        }
        if parser.at(TokenKind::Comma) {
            parser.get()?;
        }
    }
    parser.expect(TokenKind::CloseCurly)?;

    if parser.at(TokenKind::Semicolon) {
        parser.get()?;
    }

    Ok(Expr::Enum(EnumStmt {
        name,
        underlying,
        values,
    }))
}

fn parse_enum_value(parser: &mut Parser) -> Result<EnumValue, Error> {
    let name = parser.expect_ident()?;
    let init = if parser.at(TokenKind::Assignment) {
        parser.get()?;
        Some(parse_expr(parser)?)
    } else {
        None
    };

    Ok(EnumValue { name, init })
}
