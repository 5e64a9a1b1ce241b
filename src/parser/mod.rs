//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! A recursive-descent LL(1) parser over a `TokenSource`. Productions are
//! free functions over `&mut Parser`:
//!
//! - Statement parsing (blocks, control flow, classes, enums, asserts)
//! - Declaration parsing (modifiers, variables, functions, parameters)
//! - Expression parsing, one function per binding level
//! - Type parsing for type annotations
//!
//! Where one token of lookahead is not enough the resolvers peek further.
//! Syntax errors are recorded and recovered from with the token sets in
//! `lookups`; the parse always runs to the end of input.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod resolvers;
pub mod stmt;
pub mod types;
