use super::{ast::Expr, statements::BlockStmt, types::{LiteralType, TypeRef}};

// LITERALS

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Bool(bool),
    Num(f64),
    Str(String),
    Null,
}

impl Literal {
    pub fn type_tag(&self) -> LiteralType {
        match self {
            Literal::Bool(_) => LiteralType::Bool,
            Literal::Num(_) => LiteralType::Num,
            Literal::Str(_) => LiteralType::String,
            Literal::Null => LiteralType::Null,
        }
    }
}

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Or,
    And,
    Equals,
    NotEquals,
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    /// `~=`: string equality ignoring case
    EqualsIgnoreCase,
    Add,
    Subtract,
    Concat,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::Equals => "==",
            BinaryOp::NotEquals => "!=",
            BinaryOp::Less => "<",
            BinaryOp::Greater => ">",
            BinaryOp::LessEquals => "<=",
            BinaryOp::GreaterEquals => ">=",
            BinaryOp::EqualsIgnoreCase => "~=",
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Concat => "..",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::Power => "**",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Pos,
    Neg,
    Not,
    ToString,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Pos => "+",
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
            UnaryOp::ToString => "$",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncDecOp {
    Increment,
    Decrement,
}

// NODES

/// `Class::member`, or `::member` for the global scope.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopedExpr {
    pub scope: Option<String>,
    pub member: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub object: Box<Expr>,
    pub member: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpr {
    pub object: Box<Expr>,
    pub index: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
}

/// Plain (`operator: None`) or compound assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub assignee: Box<Expr>,
    pub operator: Option<BinaryOp>,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOp,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: UnaryOp,
    pub operand: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IncDecExpr {
    pub operator: IncDecOp,
    pub operand: Box<Expr>,
    pub post: bool,
}

/// `expr is TypeName`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeQueryExpr {
    pub operand: Box<Expr>,
    pub type_name: String,
}

/// `expr as TypeName`
#[derive(Debug, Clone, PartialEq)]
pub struct CastExpr {
    pub operand: Box<Expr>,
    pub type_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpr {
    pub condition: Box<Expr>,
    pub then_expr: Box<Expr>,
    pub else_expr: Box<Expr>,
}

/// `new [Type] { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpr {
    pub type_ref: Option<TypeRef>,
    pub body: BlockStmt,
}

/// Binds the result of `script` into `target` (`target <- script`).
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptToValueExpr {
    pub target: Box<Expr>,
    pub script: Box<Expr>,
}

/// `left << right`
#[derive(Debug, Clone, PartialEq)]
pub struct StreamExpr {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}
