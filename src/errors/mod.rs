//! Error types and diagnostics.
//!
//! - Fatal host errors (the token source could not produce tokens)
//! - Syntax diagnostics with script, line, column and a numeric code
//! - The ordered diagnostics log returned alongside every parse

pub mod errors;

#[cfg(test)]
mod tests;
