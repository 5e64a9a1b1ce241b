//! Type reference grammar.
//!
//! ```text
//! TypeSpec     = ["const"] (FunctionType | NamedType)
//! FunctionType = ("functype" | "funcdef") "<" ("void" | TypeSpec) ">"
//!                "(" [TypeSpec ["?"] {"," TypeSpec ["?"]}] ")"
//! NamedType    = ident ["<" TypeSpec {"," TypeSpec} ">"]
//! ```

use log::trace;

use crate::{
    ast::types::{FunctionType, TypeRef},
    errors::errors::{Error, ParseErrorKind, Production},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{FIRST_TYPE, GENERIC_FOLLOW, SIGNATURE_FOLLOW},
    parser::Parser,
};

pub fn parse_type_spec(parser: &mut Parser) -> Result<TypeRef, Error> {
    trace!("parse_type_spec: {}", parser.lookahead());
    let mut is_const = false;
    if parser.at(TokenKind::Const) {
        parser.get()?;
        is_const = true;
    }

    let mut type_ref = match parser.la_kind() {
        TokenKind::Functype | TokenKind::Funcdef => parse_function_type(parser)?,
        TokenKind::Identifier => parse_named_type(parser)?,
        _ => {
            parser.syn_err(ParseErrorKind::Invalid(Production::TypeSpec));
            TypeRef::named("")
        }
    };

    if is_const {
        type_ref.set_const(true);
    }
    Ok(type_ref)
}

/// A type spec, or `void` where a return type is expected.
pub fn parse_return_type(parser: &mut Parser) -> Result<TypeRef, Error> {
    if parser.at(TokenKind::Void) {
        parser.get()?;
        return Ok(TypeRef::void());
    }
    parse_type_spec(parser)
}

pub fn parse_named_type(parser: &mut Parser) -> Result<TypeRef, Error> {
    let name = parser.expect_ident()?;

    let mut args = Vec::new();
    if parser.at(TokenKind::Less) {
        parser.get()?;
        loop {
            args.push(parse_type_spec(parser)?);
            if !parser.weak_separator(TokenKind::Comma, GENERIC_FOLLOW, FIRST_TYPE)? {
                break;
            }
        }
        parser.expect(TokenKind::Greater)?;
    }

    Ok(TypeRef::with_args(name, args))
}

pub fn parse_function_type(parser: &mut Parser) -> Result<TypeRef, Error> {
    parser.get()?;
    parser.expect(TokenKind::Less)?;
    let return_type = parse_return_type(parser)?;
    parser.expect(TokenKind::Greater)?;
    parser.expect(TokenKind::OpenParen)?;

    let mut params = Vec::new();
    let mut defaults = Vec::new();
    if parser.start_of(FIRST_TYPE) {
        loop {
            params.push(parse_type_spec(parser)?);
            if parser.at(TokenKind::Question) {
                parser.get()?;
                defaults.push(true);
            } else {
                defaults.push(false);
            }

            if !parser.weak_separator(TokenKind::Comma, SIGNATURE_FOLLOW, FIRST_TYPE)? {
                break;
            }
        }
    }
    parser.expect(TokenKind::CloseParen)?;

    Ok(TypeRef::Function(FunctionType {
        return_type: Box::new(return_type),
        params,
        defaults,
        is_const: false,
    }))
}
