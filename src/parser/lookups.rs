//! Token sets and operator tables driving branch selection and recovery.
//!
//! The sets are FIRST/FOLLOW sets of the grammar, kept as bit sets over the
//! terminal alphabet so membership is a single mask test.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::expressions::BinaryOp, lexer::tokens::TokenKind};

/// Expression levels, loosest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Assignment,
    Conditional,
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Cast,
    Unary,
    Postfix,
    Primary,
}

impl BindingPower {
    /// The next tighter level.
    pub fn next(self) -> BindingPower {
        match self {
            BindingPower::Assignment => BindingPower::Conditional,
            BindingPower::Conditional => BindingPower::LogicalOr,
            BindingPower::LogicalOr => BindingPower::LogicalAnd,
            BindingPower::LogicalAnd => BindingPower::Equality,
            BindingPower::Equality => BindingPower::Relational,
            BindingPower::Relational => BindingPower::Additive,
            BindingPower::Additive => BindingPower::Multiplicative,
            BindingPower::Multiplicative => BindingPower::Cast,
            BindingPower::Cast => BindingPower::Unary,
            BindingPower::Unary => BindingPower::Postfix,
            BindingPower::Postfix | BindingPower::Primary => BindingPower::Primary,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TokenSet(u128);

impl TokenSet {
    pub const fn of(kinds: &[TokenKind]) -> TokenSet {
        let mut bits = 0u128;
        let mut i = 0;
        while i < kinds.len() {
            bits |= 1u128 << (kinds[i] as u8);
            i += 1;
        }
        TokenSet(bits)
    }

    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }

    pub fn contains(&self, kind: TokenKind) -> bool {
        (kind as u8) < 128 && self.0 & (1u128 << (kind as u8)) != 0
    }
}

use TokenKind::*;

/// Keywords that can only begin a declaration.
pub const DECL_KEYWORDS: TokenSet = TokenSet::of(&[
    Override, Void, Global, Const, Functype, Funcdef, Static, Guarded,
]);

pub const MODIFIERS: TokenSet = TokenSet::of(&[Const, Global, Static, Override, Guarded]);

pub const FIRST_TYPE: TokenSet = TokenSet::of(&[Identifier, Functype, Funcdef, Const]);

pub const FIRST_DECL: TokenSet = DECL_KEYWORDS.union(TokenSet::of(&[Identifier]));

pub const FIRST_PRIMARY: TokenSet = TokenSet::of(&[
    Identifier, ScopeOp, This, Catch, True, False, Null, Number, String, OpenParen, New,
]);

pub const FIRST_EXPR: TokenSet = FIRST_PRIMARY.union(TokenSet::of(&[
    PlusPlus, MinusMinus, Hash, Dollar, Plus, Dash, Not,
]));

/// Keyword-introduced statements shared by every statement form.
pub const FIRST_KEYWORD_STMT: TokenSet = TokenSet::of(&[
    OpenCurly, If, For, Foreach, Assert, Break, Continue, Return, Typedef, Semicolon,
]);

pub const FIRST_EMBEDDED: TokenSet = FIRST_KEYWORD_STMT
    .union(FIRST_EXPR)
    .union(DECL_KEYWORDS);

pub const FIRST_TYPE_DECL: TokenSet = TokenSet::of(&[Class, Sealed, Uninstantiable, Enum]);

pub const FIRST_STATEMENT: TokenSet = FIRST_EMBEDDED.union(FIRST_TYPE_DECL);

/// Where statement-level recovery resumes.
pub const STATEMENT_SYNC: TokenSet = FIRST_STATEMENT.union(TokenSet::of(&[CloseCurly, EOF]));

pub const CLASS_MEMBER_SYNC: TokenSet = FIRST_DECL.union(TokenSet::of(&[Constructor, CloseCurly]));

pub const ARG_FOLLOW: TokenSet = TokenSet::of(&[CloseParen, Semicolon, CloseCurly]);

pub const PARAM_FOLLOW: TokenSet = TokenSet::of(&[CloseParen, OpenCurly, Semicolon]);

pub const SIGNATURE_FOLLOW: TokenSet = TokenSet::of(&[CloseParen, Semicolon]);

pub const GENERIC_FOLLOW: TokenSet = TokenSet::of(&[Greater, Semicolon, OpenParen]);

pub const CLOSERS: TokenSet = TokenSet::of(&[CloseBracket, CloseCurly, CloseParen]);

lazy_static! {
    /// Left-associative binary operators and the level each loops at.
    pub static ref BINARY_LOOKUP: HashMap<TokenKind, (BindingPower, BinaryOp)> = {
        let mut map = HashMap::new();
        // Logical
        map.insert(Or, (BindingPower::LogicalOr, BinaryOp::Or));
        map.insert(And, (BindingPower::LogicalAnd, BinaryOp::And));

        // Equality
        map.insert(Equals, (BindingPower::Equality, BinaryOp::Equals));
        map.insert(NotEquals, (BindingPower::Equality, BinaryOp::NotEquals));

        // Relational
        map.insert(Less, (BindingPower::Relational, BinaryOp::Less));
        map.insert(Greater, (BindingPower::Relational, BinaryOp::Greater));
        map.insert(LessEquals, (BindingPower::Relational, BinaryOp::LessEquals));
        map.insert(GreaterEquals, (BindingPower::Relational, BinaryOp::GreaterEquals));
        map.insert(TildeEquals, (BindingPower::Relational, BinaryOp::EqualsIgnoreCase));

        // Additive and multiplicative
        map.insert(Plus, (BindingPower::Additive, BinaryOp::Add));
        map.insert(Dash, (BindingPower::Additive, BinaryOp::Subtract));
        map.insert(DotDot, (BindingPower::Additive, BinaryOp::Concat));
        map.insert(Star, (BindingPower::Multiplicative, BinaryOp::Multiply));
        map.insert(Slash, (BindingPower::Multiplicative, BinaryOp::Divide));
        map.insert(Percent, (BindingPower::Multiplicative, BinaryOp::Modulo));
        map.insert(StarStar, (BindingPower::Multiplicative, BinaryOp::Power));
        map
    };

    /// Assignment operators; `None` is plain assignment.
    pub static ref ASSIGNMENT_LOOKUP: HashMap<TokenKind, Option<BinaryOp>> = {
        let mut map = HashMap::new();
        map.insert(Assignment, None);
        map.insert(PlusEquals, Some(BinaryOp::Add));
        map.insert(MinusEquals, Some(BinaryOp::Subtract));
        map.insert(StarEquals, Some(BinaryOp::Multiply));
        map.insert(SlashEquals, Some(BinaryOp::Divide));
        map.insert(DotDotEquals, Some(BinaryOp::Concat));
        map
    };
}
