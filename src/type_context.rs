//! Type-name queries used to disambiguate declarations from expressions.

use std::collections::HashSet;

use lazy_static::lazy_static;

lazy_static! {
    /// Scalar builtins only. Container types such as `List` or `map` belong to
    /// the host and must be registered before parsing.
    pub static ref BUILTIN_TYPES: Vec<&'static str> = vec!["num", "string", "bool", "object", "any"];
}

/// Answers whether an identifier names a type. Read-only during a parse.
pub trait TypeContext {
    fn is_type(&self, name: &str) -> bool;
}

/// Set of known type names, seeded with the builtins.
///
/// A name missing from the set is read as a value, so an unregistered
/// `List<num> xs;` parses as the comparison `((List < num) > xs)`.
#[derive(Debug, Clone)]
pub struct TypeNames {
    names: HashSet<String>,
}

impl TypeNames {
    pub fn new() -> Self {
        TypeNames {
            names: BUILTIN_TYPES.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// A context that knows no names at all.
    pub fn empty() -> Self {
        TypeNames {
            names: HashSet::new(),
        }
    }

    pub fn register(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.register(name);
        self
    }
}

impl Default for TypeNames {
    fn default() -> Self {
        TypeNames::new()
    }
}

impl TypeContext for TypeNames {
    fn is_type(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}
