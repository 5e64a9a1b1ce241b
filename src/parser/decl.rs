//! Variable and function declarations.
//!
//! ```text
//! Decl   = {Modifier} ReturnType ident
//!          ( ["=" Expr | "<-" Expr] ";"
//!          | "(" [Param {"," Param}] ")" Block )
//! Param  = TypeSpec ident ["=" ["-"] Literal]
//! ```

use log::trace;

use crate::{
    ast::{
        ast::{stamp_declared_type, Expr},
        expressions::{Literal, ScriptToValueExpr},
        statements::{FunctionLiteral, Param, SetStmt, SetValue},
        types::{DeclMods, FunctionType, TypeRef},
    },
    errors::errors::{Error, ParseErrorKind, Production},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_expr, parse_literal},
    lookups::{FIRST_TYPE, MODIFIERS, PARAM_FOLLOW, STATEMENT_SYNC},
    parser::Parser,
    stmt::parse_block,
    types::{parse_return_type, parse_type_spec},
};

pub fn parse_decl(parser: &mut Parser) -> Result<Expr, Error> {
    trace!("parse_decl: {}", parser.lookahead());
    let mods = parse_modifiers(parser)?;
    let mut type_ref = parse_return_type(parser)?;
    let name = parser.expect_ident()?;

    let decl = match parser.la_kind() {
        TokenKind::Assignment => {
            parser.get()?;
            let init = stamp_declared_type(parse_expr(parser)?, &type_ref);
            parser.expect_weak(TokenKind::Semicolon, STATEMENT_SYNC)?;
            Expr::Set(SetStmt {
                mods,
                type_ref: with_const(type_ref, mods),
                name,
                value: Some(SetValue::Init(init.boxed())),
            })
        }
        TokenKind::LeftArrow => {
            parser.get()?;
            let script = parse_expr(parser)?;
            parser.expect_weak(TokenKind::Semicolon, STATEMENT_SYNC)?;
            let target = Expr::Set(SetStmt {
                mods,
                type_ref: with_const(type_ref, mods),
                name,
                value: None,
            });
            Expr::ScriptToValue(ScriptToValueExpr {
                target: target.boxed(),
                script: script.boxed(),
            })
        }
        TokenKind::Semicolon => {
            parser.get()?;
            Expr::Set(SetStmt {
                mods,
                type_ref: with_const(type_ref, mods),
                name,
                value: None,
            })
        }
        TokenKind::OpenParen => {
            let params = parse_params(parser)?;
            let body = parse_block(parser)?;

            type_ref = TypeRef::Function(FunctionType {
                return_type: Box::new(type_ref),
                params: params.iter().map(|param| param.type_ref.clone()).collect(),
                defaults: params.iter().map(|param| param.default.is_some()).collect(),
                is_const: false,
            });
            Expr::Set(SetStmt {
                mods,
                type_ref: with_const(type_ref, mods),
                name,
                value: Some(SetValue::Function(FunctionLiteral { params, body })),
            })
        }
        _ => {
            parser.syn_err(ParseErrorKind::Invalid(Production::Declaration));
            Expr::Set(SetStmt {
                mods,
                type_ref: with_const(type_ref, mods),
                name,
                value: None,
            })
        }
    };

    Ok(decl)
}

/// Any mix of modifier keywords, in any order. Repeats are harmless.
pub fn parse_modifiers(parser: &mut Parser) -> Result<DeclMods, Error> {
    let mut mods = DeclMods::default();
    while parser.start_of(MODIFIERS) {
        match parser.la_kind() {
            TokenKind::Const => mods.is_const = true,
            TokenKind::Global => mods.is_global = true,
            TokenKind::Static => mods.is_static = true,
            TokenKind::Override => mods.is_override = true,
            _ => mods.is_guarded = true,
        }
        parser.get()?;
    }
    Ok(mods)
}

fn with_const(mut type_ref: TypeRef, mods: DeclMods) -> TypeRef {
    if mods.is_const {
        type_ref.set_const(true);
    }
    type_ref
}

/// `"(" [Param {"," Param}] ")"`
pub fn parse_params(parser: &mut Parser) -> Result<Vec<Param>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut params = Vec::new();
    if parser.start_of(FIRST_TYPE) {
        loop {
            params.push(parse_param(parser)?);
            if !parser.weak_separator(TokenKind::Comma, PARAM_FOLLOW, FIRST_TYPE)? {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseParen)?;
    Ok(params)
}

fn parse_param(parser: &mut Parser) -> Result<Param, Error> {
    let type_ref = parse_type_spec(parser)?;
    let name = parser.expect_ident()?;

    let default = if parser.at(TokenKind::Assignment) {
        parser.get()?;
        parse_default_value(parser)?
    } else {
        None
    };

    Ok(Param {
        type_ref,
        name,
        default,
    })
}

/// A literal, or a negated number literal.
fn parse_default_value(parser: &mut Parser) -> Result<Option<Literal>, Error> {
    if parser.at(TokenKind::Dash) {
        parser.get()?;
        if !parser.at(TokenKind::Number) {
            parser.syn_err(ParseErrorKind::Invalid(Production::DefaultValue));
            return Ok(None);
        }
        return Ok(match parse_literal(parser)? {
            Literal::Num(value) => Some(Literal::Num(-value)),
            other => Some(other),
        });
    }

    match parser.la_kind() {
        TokenKind::True | TokenKind::False | TokenKind::Null | TokenKind::Number | TokenKind::String => {
            Ok(Some(parse_literal(parser)?))
        }
        _ => {
            parser.syn_err(ParseErrorKind::Invalid(Production::DefaultValue));
            Ok(None)
        }
    }
}
