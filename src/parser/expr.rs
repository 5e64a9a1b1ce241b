//! Expression grammar, loosest binding first.
//!
//! ```text
//! Expr      = CondExpr [AssignOp Expr | "<<" Expr]
//! CondExpr  = OrExpr ["?" Expr ":" CondExpr]
//! OrExpr .. MulExpr: left-associative loops over BINARY_LOOKUP
//! EqlExpr   = RelExpr {("==" | "!=") RelExpr | "<-" RelExpr | "is" ident}
//! CastExpr  = Unary ["as" ident]
//! Unary     = {"++" | "--" | "#" | "$"} UnaryPost
//! UnaryPost = ("+" | "-" | "!") Postfix | Postfix
//! Postfix   = Primary {"[" Expr "]" | "." ident | "(" Args ")" | "++" | "--"}
//! ```

use log::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::*,
    },
    errors::errors::{Error, ParseErrorKind, Production},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{BindingPower, ARG_FOLLOW, ASSIGNMENT_LOOKUP, BINARY_LOOKUP, FIRST_EXPR, FIRST_TYPE},
    parser::Parser,
    stmt::parse_block,
    types::parse_type_spec,
};

/// Entry point: an assignment-level expression.
///
/// The right-hand side of an assignment or stream recurses into `parse_expr`
/// again, so chains associate to the right.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_cond_expr(parser)?;

    if let Some(operator) = ASSIGNMENT_LOOKUP.get(&parser.la_kind()).copied() {
        parser.get()?;
        let value = parse_expr(parser)?;
        return Ok(Expr::Assignment(AssignmentExpr {
            assignee: left.boxed(),
            operator,
            value: value.boxed(),
        }));
    }

    if parser.at(TokenKind::Stream) {
        parser.get()?;
        let right = parse_expr(parser)?;
        return Ok(Expr::Stream(StreamExpr {
            left: left.boxed(),
            right: right.boxed(),
        }));
    }

    Ok(left)
}

pub fn parse_cond_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let condition = parse_level(parser, BindingPower::LogicalOr)?;
    if !parser.at(TokenKind::Question) {
        return Ok(condition);
    }

    parser.get()?;
    let then_expr = parse_expr(parser)?;
    parser.expect(TokenKind::Colon)?;
    let else_expr = parse_cond_expr(parser)?;

    Ok(Expr::Conditional(ConditionalExpr {
        condition: condition.boxed(),
        then_expr: then_expr.boxed(),
        else_expr: else_expr.boxed(),
    }))
}

/// Parses an expression at exactly `bp`.
pub fn parse_level(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    match bp {
        BindingPower::Assignment => parse_expr(parser),
        BindingPower::Conditional => parse_cond_expr(parser),
        BindingPower::Equality => parse_equality_expr(parser),
        BindingPower::Cast => parse_cast_expr(parser),
        BindingPower::Unary => parse_unary_expr(parser),
        BindingPower::Postfix => parse_unary_post_expr(parser),
        BindingPower::Primary => parse_postfix_expr(parser),
        _ => parse_binary_expr(parser, bp),
    }
}

fn binary_operator(kind: TokenKind, bp: BindingPower) -> Option<BinaryOp> {
    match BINARY_LOOKUP.get(&kind) {
        Some((level, operator)) if *level == bp => Some(*operator),
        _ => None,
    }
}

/// Left-associative loop for the plain binary levels.
pub fn parse_binary_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let mut left = parse_level(parser, bp.next())?;

    while let Some(operator) = binary_operator(parser.la_kind(), bp) {
        parser.get()?;
        let right = parse_level(parser, bp.next())?;
        left = Expr::Binary(BinaryExpr {
            left: left.boxed(),
            operator,
            right: right.boxed(),
        });
    }

    Ok(left)
}

pub fn parse_equality_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_level(parser, BindingPower::Relational)?;

    loop {
        if let Some(operator) = binary_operator(parser.la_kind(), BindingPower::Equality) {
            parser.get()?;
            let right = parse_level(parser, BindingPower::Relational)?;
            left = Expr::Binary(BinaryExpr {
                left: left.boxed(),
                operator,
                right: right.boxed(),
            });
        } else if parser.at(TokenKind::LeftArrow) {
            parser.get()?;
            let script = parse_level(parser, BindingPower::Relational)?;
            left = Expr::ScriptToValue(ScriptToValueExpr {
                target: left.boxed(),
                script: script.boxed(),
            });
        } else if parser.at(TokenKind::Is) {
            parser.get()?;
            let type_name = parser.expect_ident()?;
            left = Expr::TypeQuery(TypeQueryExpr {
                operand: left.boxed(),
                type_name,
            });
        } else {
            return Ok(left);
        }
    }
}

pub fn parse_cast_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operand = parse_unary_expr(parser)?;
    if !parser.at(TokenKind::As) {
        return Ok(operand);
    }

    parser.get()?;
    let type_name = parser.expect_ident()?;
    Ok(Expr::Cast(CastExpr {
        operand: operand.boxed(),
        type_name,
    }))
}

/// Collects prefix operators, then applies them innermost-first so the one
/// written closest to the operand binds tightest.
pub fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut operators = Vec::new();
    while matches!(
        parser.la_kind(),
        TokenKind::PlusPlus | TokenKind::MinusMinus | TokenKind::Hash | TokenKind::Dollar
    ) {
        operators.push(parser.la_kind());
        parser.get()?;
    }

    let mut expr = parse_unary_post_expr(parser)?;
    for operator in operators.into_iter().rev() {
        expr = match operator {
            TokenKind::PlusPlus => Expr::IncDec(IncDecExpr {
                operator: IncDecOp::Increment,
                operand: expr.boxed(),
                post: false,
            }),
            TokenKind::MinusMinus => Expr::IncDec(IncDecExpr {
                operator: IncDecOp::Decrement,
                operand: expr.boxed(),
                post: false,
            }),
            TokenKind::Hash => Expr::Length(expr.boxed()),
            _ => Expr::Unary(UnaryExpr {
                operator: UnaryOp::ToString,
                operand: expr.boxed(),
            }),
        };
    }

    Ok(expr)
}

/// A single sign or `!` directly in front of a postfix expression.
pub fn parse_unary_post_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator = match parser.la_kind() {
        TokenKind::Plus => UnaryOp::Pos,
        TokenKind::Dash => UnaryOp::Neg,
        TokenKind::Not => UnaryOp::Not,
        _ => return parse_postfix_expr(parser),
    };

    parser.get()?;
    let operand = parse_postfix_expr(parser)?;
    Ok(Expr::Unary(UnaryExpr {
        operator,
        operand: operand.boxed(),
    }))
}

pub fn parse_postfix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_primary_expr(parser)?;

    loop {
        expr = match parser.la_kind() {
            TokenKind::OpenBracket => {
                parser.get()?;
                let index = parse_expr(parser)?;
                parser.expect(TokenKind::CloseBracket)?;
                Expr::Index(IndexExpr {
                    object: expr.boxed(),
                    index: index.boxed(),
                })
            }
            TokenKind::Dot => {
                parser.get()?;
                let member = parser.expect_ident()?;
                Expr::Member(MemberExpr {
                    object: expr.boxed(),
                    member,
                })
            }
            TokenKind::OpenParen => {
                let arguments = parse_call_args(parser)?;
                Expr::Call(CallExpr {
                    callee: expr.boxed(),
                    arguments,
                })
            }
            TokenKind::PlusPlus | TokenKind::MinusMinus => {
                let operator = if parser.at(TokenKind::PlusPlus) {
                    IncDecOp::Increment
                } else {
                    IncDecOp::Decrement
                };
                parser.get()?;
                Expr::IncDec(IncDecExpr {
                    operator,
                    operand: expr.boxed(),
                    post: true,
                })
            }
            _ => return Ok(expr),
        };
    }
}

/// `"(" [Expr {"," Expr} [","]] ")"`
pub fn parse_call_args(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut arguments = Vec::new();
    if parser.start_of(FIRST_EXPR) {
        arguments.push(parse_expr(parser)?);
        loop {
            if parser.at(TokenKind::Comma) && !parser.not_final_comma()? {
                parser.get()?;
                break;
            }
            if !parser.weak_separator(TokenKind::Comma, ARG_FOLLOW, FIRST_EXPR)? {
                break;
            }
            arguments.push(parse_expr(parser)?);
        }
    }

    parser.expect(TokenKind::CloseParen)?;
    Ok(arguments)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    trace!("parse_primary_expr: {}", parser.lookahead());
    match parser.la_kind() {
        TokenKind::Identifier => {
            if parser.is_scope_op_start()? {
                let scope = parser.expect_ident()?;
                parser.expect(TokenKind::ScopeOp)?;
                let member = parser.expect_ident()?;
                return Ok(Expr::Scoped(ScopedExpr {
                    scope: Some(scope),
                    member,
                }));
            }
            Ok(Expr::Symbol(parser.expect_ident()?))
        }
        TokenKind::ScopeOp => {
            parser.get()?;
            let member = parser.expect_ident()?;
            Ok(Expr::Scoped(ScopedExpr {
                scope: None,
                member,
            }))
        }
        TokenKind::This => {
            parser.get()?;
            Ok(Expr::This)
        }
        TokenKind::Catch => {
            parser.get()?;
            Ok(Expr::Catch(parse_block(parser)?))
        }
        TokenKind::True | TokenKind::False | TokenKind::Null | TokenKind::Number | TokenKind::String => {
            Ok(Expr::Literal(parse_literal(parser)?))
        }
        TokenKind::OpenParen => {
            parser.get()?;
            let expr = parse_expr(parser)?;
            parser.expect(TokenKind::CloseParen)?;
            Ok(expr)
        }
        TokenKind::New => parse_new_expr(parser),
        _ => {
            parser.syn_err(ParseErrorKind::Invalid(Production::Primary));
            Ok(Expr::Invalid)
        }
    }
}

/// Consumes a literal token. Callers check the lookahead first.
pub fn parse_literal(parser: &mut Parser) -> Result<Literal, Error> {
    parser.get()?;
    let token = parser.current_token().clone();

    Ok(match token.kind {
        TokenKind::True => Literal::Bool(true),
        TokenKind::False => Literal::Bool(false),
        TokenKind::Number => match token.val.parse::<f64>() {
            Ok(value) => Literal::Num(value),
            Err(_) => {
                let message = format!("invalid number {}", token.val);
                parser.sem_err(message);
                Literal::Num(0.0)
            }
        },
        TokenKind::String => Literal::Str(strip_quotes(&token.val).to_string()),
        _ => Literal::Null,
    })
}

fn strip_quotes(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

/// `new [TypeSpec] { ... }`. An omitted type is filled in later by the
/// enclosing declaration.
pub fn parse_new_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.get()?;

    let type_ref = if parser.start_of(FIRST_TYPE) {
        Some(parse_type_spec(parser)?)
    } else {
        None
    };
    let body = parse_block(parser)?;

    Ok(Expr::New(NewExpr { type_ref, body }))
}
