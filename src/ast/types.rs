//! Type references and declaration modifiers.
//!
//! Type references are purely syntactic: a name with optional generic
//! arguments, or a function signature. Nothing here is resolved.

use std::fmt::Display;

/// Intrinsic type of a literal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralType {
    Bool,
    Num,
    String,
    Null,
}

/// A named type without generic arguments, e.g. `num`.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolType {
    pub name: String,
    pub is_const: bool,
}

/// A named type applied to generic arguments, e.g. `map<string, num>`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericType {
    pub name: String,
    pub args: Vec<TypeRef>,
    pub is_const: bool,
}

/// A function signature, e.g. `functype<num>(num, num?)`.
///
/// `defaults` runs parallel to `params` and marks parameters that carry a
/// default value.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionType {
    pub return_type: Box<TypeRef>,
    pub params: Vec<TypeRef>,
    pub defaults: Vec<bool>,
    pub is_const: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    Symbol(SymbolType),
    Generic(GenericType),
    Function(FunctionType),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Symbol(SymbolType {
            name: name.into(),
            is_const: false,
        })
    }

    /// Builds a named type, choosing the generic variant only when arguments exist.
    pub fn with_args(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        if args.is_empty() {
            TypeRef::named(name)
        } else {
            TypeRef::Generic(GenericType {
                name: name.into(),
                args,
                is_const: false,
            })
        }
    }

    pub fn void() -> Self {
        TypeRef::named("void")
    }

    /// Name of a named type; `None` for function types.
    pub fn name(&self) -> Option<&str> {
        match self {
            TypeRef::Symbol(symbol) => Some(&symbol.name),
            TypeRef::Generic(generic) => Some(&generic.name),
            TypeRef::Function(_) => None,
        }
    }

    pub fn is_const(&self) -> bool {
        match self {
            TypeRef::Symbol(symbol) => symbol.is_const,
            TypeRef::Generic(generic) => generic.is_const,
            TypeRef::Function(function) => function.is_const,
        }
    }

    pub fn set_const(&mut self, is_const: bool) {
        match self {
            TypeRef::Symbol(symbol) => symbol.is_const = is_const,
            TypeRef::Generic(generic) => generic.is_const = is_const,
            TypeRef::Function(function) => function.is_const = is_const,
        }
    }
}

impl Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_const() {
            write!(f, "const ")?;
        }
        match self {
            TypeRef::Symbol(symbol) => write!(f, "{}", symbol.name),
            TypeRef::Generic(generic) => {
                write!(f, "{}<", generic.name)?;
                for (i, arg) in generic.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ">")
            }
            TypeRef::Function(function) => {
                write!(f, "functype<{}>(", function.return_type)?;
                for (i, param) in function.params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", param)?;
                    if function.defaults.get(i).copied().unwrap_or(false) {
                        write!(f, "?")?;
                    }
                }
                write!(f, ")")
            }
        }
    }
}

/// Modifier keywords attached to a declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeclMods {
    pub is_const: bool,
    pub is_global: bool,
    pub is_static: bool,
    pub is_override: bool,
    pub is_guarded: bool,
}

impl DeclMods {
    pub fn is_empty(&self) -> bool {
        *self == DeclMods::default()
    }
}

impl Display for DeclMods {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = [
            (self.is_const, "const"),
            (self.is_global, "global"),
            (self.is_static, "static"),
            (self.is_override, "override"),
            (self.is_guarded, "guarded"),
        ];
        let set: Vec<&str> = names
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, name)| *name)
            .collect();
        write!(f, "{}", set.join(" "))
    }
}
