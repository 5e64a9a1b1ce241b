use std::slice::Iter;

use super::{
    ast::Expr,
    expressions::Literal,
    types::{DeclMods, TypeRef},
};

/// Ordered statements. `scoped` is false only for the synthetic root block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Expr>,
    pub scoped: bool,
}

impl BlockStmt {
    pub fn new(body: Vec<Expr>) -> Self {
        BlockStmt { body, scoped: true }
    }

    pub fn iter(&self) -> Iter<'_, Expr> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// `for (bind = min, max [, step]) body`
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub bind: String,
    pub min: Box<Expr>,
    pub max: Box<Expr>,
    pub step: Option<Box<Expr>>,
    pub body: Box<Expr>,
}

/// `foreach (key, value in collection) body`
#[derive(Debug, Clone, PartialEq)]
pub struct ForEachStmt {
    pub key: String,
    pub value: String,
    pub collection: Box<Expr>,
    pub body: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Box<Expr>,
    pub then_body: Box<Expr>,
    pub else_body: Option<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssertStmt {
    pub condition: Box<Expr>,
    pub messages: Vec<Expr>,
    pub on_fail: Option<BlockStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub type_ref: TypeRef,
    pub name: String,
    pub default: Option<Literal>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub params: Vec<Param>,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SetValue {
    Init(Box<Expr>),
    Function(FunctionLiteral),
}

/// A variable or function declaration.
///
/// For functions `type_ref` is the full function type built from the return
/// type and the parameter list.
#[derive(Debug, Clone, PartialEq)]
pub struct SetStmt {
    pub mods: DeclMods,
    pub type_ref: TypeRef,
    pub name: String,
    pub value: Option<SetValue>,
}

impl SetStmt {
    pub fn initializer(&self) -> Option<&Expr> {
        match &self.value {
            Some(SetValue::Init(init)) => Some(init.as_ref()),
            _ => None,
        }
    }

    pub fn function(&self) -> Option<&FunctionLiteral> {
        match &self.value {
            Some(SetValue::Function(function)) => Some(function),
            _ => None,
        }
    }
}

/// `typedef Type Name;`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAliasStmt {
    pub name: String,
    pub target: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassStmt {
    pub name: String,
    pub parent: Option<String>,
    pub sealed: bool,
    pub uninstantiable: bool,
    /// `Set` nodes, or `ScriptToValue` wrapping a `Set`
    pub members: Vec<Expr>,
    pub constructor: Option<BlockStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub name: String,
    pub init: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumStmt {
    pub name: String,
    pub underlying: TypeRef,
    pub values: Vec<EnumValue>,
}
