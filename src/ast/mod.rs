/// AST (Abstract Syntax Tree) module
/// Contains the node shapes the parser builds
///
/// Submodules:
/// - ast: The `Expr` sum type, its canonical printer and post-construction patches
/// - expressions: Operators, literals and expression node payloads
/// - statements: Statement and declaration node payloads
/// - types: Type references and declaration modifiers
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
