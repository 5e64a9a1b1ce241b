use std::fmt::{Display, Formatter, Result};

use super::{
    expressions::*,
    statements::*,
    types::TypeRef,
};

/// A node of the syntax tree.
///
/// Statements and expressions share one type: every construct with runtime
/// meaning is an `Expr`, and a block is simply an ordered list of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Symbol(String),
    This,
    Scoped(ScopedExpr),
    Member(MemberExpr),
    Index(IndexExpr),
    Call(CallExpr),
    Assignment(AssignmentExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    IncDec(IncDecExpr),
    Length(Box<Expr>),
    TypeQuery(TypeQueryExpr),
    Cast(CastExpr),
    Conditional(ConditionalExpr),
    /// `catch { ... }`: evaluates the block, trapping exceptions
    Catch(BlockStmt),
    New(NewExpr),
    ScriptToValue(ScriptToValueExpr),
    Stream(StreamExpr),

    Block(BlockStmt),
    For(ForStmt),
    ForEach(ForEachStmt),
    If(IfStmt),
    Break,
    Continue,
    Return(Option<Box<Expr>>),
    Assert(AssertStmt),
    Set(SetStmt),
    TypeAlias(TypeAliasStmt),
    Class(ClassStmt),
    Enum(EnumStmt),

    /// Stands where a subtree failed to parse.
    Invalid,
}

impl Expr {
    pub fn boxed(self) -> Box<Expr> {
        Box::new(self)
    }

    pub fn num(value: f64) -> Expr {
        Expr::Literal(Literal::Num(value))
    }
}

/// Gives an untyped `new { ... }` initializer the type of the declaration it
/// initializes. Any other initializer is returned unchanged.
pub fn stamp_declared_type(init: Expr, declared: &TypeRef) -> Expr {
    match init {
        Expr::New(NewExpr {
            type_ref: None,
            body,
        }) => Expr::New(NewExpr {
            type_ref: Some(declared.clone()),
            body,
        }),
        other => other,
    }
}

fn write_list<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Literal::Bool(value) => write!(f, "{}", value),
            Literal::Num(value) => write!(f, "{}", value),
            Literal::Str(value) => write!(f, "\"{}\"", value),
            Literal::Null => write!(f, "null"),
        }
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.scoped {
            write!(f, "{{ ")?;
        }
        for (i, stmt) in self.body.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{};", stmt)?;
        }
        if self.scoped {
            write!(f, "{}}}", if self.body.is_empty() { "" } else { " " })?;
        }
        Ok(())
    }
}

impl Display for Param {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {}", self.type_ref, self.name)?;
        if let Some(default) = &self.default {
            write!(f, " = {}", default)?;
        }
        Ok(())
    }
}

impl Display for SetStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if !self.mods.is_empty() {
            write!(f, "{} ", self.mods)?;
        }
        // A const modifier already marks the type; print it once.
        let mut type_ref = self.type_ref.clone();
        if self.mods.is_const {
            type_ref.set_const(false);
        }
        match (&self.value, &type_ref) {
            (Some(SetValue::Function(function)), TypeRef::Function(signature)) => {
                write!(f, "{} {}(", signature.return_type, self.name)?;
                write_list(f, &function.params)?;
                write!(f, ") {}", function.body)
            }
            (value, type_ref) => {
                write!(f, "{} {}", type_ref, self.name)?;
                match value {
                    Some(SetValue::Init(init)) => write!(f, " = {}", init),
                    Some(SetValue::Function(function)) => write!(f, " {}", function.body),
                    None => Ok(()),
                }
            }
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expr::Literal(literal) => write!(f, "{}", literal),
            Expr::Symbol(name) => write!(f, "{}", name),
            Expr::This => write!(f, "this"),
            Expr::Scoped(scoped) => match &scoped.scope {
                Some(scope) => write!(f, "{}::{}", scope, scoped.member),
                None => write!(f, "::{}", scoped.member),
            },
            Expr::Member(member) => write!(f, "{}.{}", member.object, member.member),
            Expr::Index(index) => write!(f, "{}[{}]", index.object, index.index),
            Expr::Call(call) => {
                write!(f, "{}(", call.callee)?;
                write_list(f, &call.arguments)?;
                write!(f, ")")
            }
            Expr::Assignment(assign) => match assign.operator {
                Some(op) => write!(f, "({} {}= {})", assign.assignee, op.symbol(), assign.value),
                None => write!(f, "({} = {})", assign.assignee, assign.value),
            },
            Expr::Binary(binary) => write!(
                f,
                "({} {} {})",
                binary.left,
                binary.operator.symbol(),
                binary.right
            ),
            Expr::Unary(unary) => write!(f, "({}{})", unary.operator.symbol(), unary.operand),
            Expr::IncDec(inc_dec) => {
                let symbol = match inc_dec.operator {
                    IncDecOp::Increment => "++",
                    IncDecOp::Decrement => "--",
                };
                if inc_dec.post {
                    write!(f, "({}{})", inc_dec.operand, symbol)
                } else {
                    write!(f, "({}{})", symbol, inc_dec.operand)
                }
            }
            Expr::Length(operand) => write!(f, "(#{})", operand),
            Expr::TypeQuery(query) => write!(f, "({} is {})", query.operand, query.type_name),
            Expr::Cast(cast) => write!(f, "({} as {})", cast.operand, cast.type_name),
            Expr::Conditional(cond) => write!(
                f,
                "({} ? {} : {})",
                cond.condition, cond.then_expr, cond.else_expr
            ),
            Expr::Catch(body) => write!(f, "catch {}", body),
            Expr::New(new) => match &new.type_ref {
                Some(type_ref) => write!(f, "new {} {}", type_ref, new.body),
                None => write!(f, "new {}", new.body),
            },
            Expr::ScriptToValue(stv) => write!(f, "({} <- {})", stv.target, stv.script),
            Expr::Stream(stream) => write!(f, "({} << {})", stream.left, stream.right),
            Expr::Block(block) => write!(f, "{}", block),
            Expr::For(for_stmt) => {
                write!(f, "for ({} = {}, {}", for_stmt.bind, for_stmt.min, for_stmt.max)?;
                if let Some(step) = &for_stmt.step {
                    write!(f, ", {}", step)?;
                }
                write!(f, ") {}", for_stmt.body)
            }
            Expr::ForEach(each) => write!(
                f,
                "foreach ({}, {} in {}) {}",
                each.key, each.value, each.collection, each.body
            ),
            Expr::If(if_stmt) => {
                write!(f, "if ({}) {}", if_stmt.condition, if_stmt.then_body)?;
                if let Some(else_body) = &if_stmt.else_body {
                    write!(f, " else {}", else_body)?;
                }
                Ok(())
            }
            Expr::Break => write!(f, "break"),
            Expr::Continue => write!(f, "continue"),
            Expr::Return(value) => match value {
                Some(value) => write!(f, "return {}", value),
                None => write!(f, "return"),
            },
            Expr::Assert(assert) => {
                write!(f, "assert({}", assert.condition)?;
                for message in &assert.messages {
                    write!(f, ", {}", message)?;
                }
                write!(f, ")")?;
                if let Some(on_fail) = &assert.on_fail {
                    write!(f, " {}", on_fail)?;
                }
                Ok(())
            }
            Expr::Set(set) => write!(f, "{}", set),
            Expr::TypeAlias(alias) => write!(f, "typedef {} {}", alias.target, alias.name),
            Expr::Class(class) => {
                if class.sealed {
                    write!(f, "sealed ")?;
                }
                if class.uninstantiable {
                    write!(f, "uninstantiable ")?;
                }
                write!(f, "class {}", class.name)?;
                if let Some(parent) = &class.parent {
                    write!(f, " : {}", parent)?;
                }
                write!(f, " {{")?;
                for member in &class.members {
                    write!(f, " {};", member)?;
                }
                if let Some(constructor) = &class.constructor {
                    write!(f, " constructor {}", constructor)?;
                }
                write!(f, " }}")
            }
            Expr::Enum(enum_stmt) => {
                write!(f, "enum<{}> {} {{", enum_stmt.underlying, enum_stmt.name)?;
                for (i, value) in enum_stmt.values.iter().enumerate() {
                    write!(f, "{}{}", if i > 0 { ", " } else { " " }, value.name)?;
                    if let Some(init) = &value.init {
                        write!(f, " = {}", init)?;
                    }
                }
                write!(f, " }}")
            }
            Expr::Invalid => write!(f, "<invalid>"),
        }
    }
}
