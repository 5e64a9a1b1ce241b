//! Lexical analysis module.
//!
//! Converts Pebble source text into the fixed terminal alphabet the parser
//! consumes, and exposes the scan/peek interface the parser reads through.
//!
//! - Tokenization of source code using regex patterns
//! - Keyword recognition
//! - 1-based line/column tracking for diagnostics
//! - Comments and whitespace skipped, `//@` pragma lines kept as
//!   non-terminal tokens

pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod tests;
