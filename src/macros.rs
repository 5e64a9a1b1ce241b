//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-text tokens

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's text
/// * `$line` - 1-based line
/// * `$col` - 1-based column
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), 1, 5);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr, $col:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            val: $value,
            line: $line,
            col: $col,
        }
    };
}

/// Creates a default lexer handler for fixed-text tokens.
///
/// Generates a handler that pushes a token of the given kind at the lexer's
/// current line/column and advances past the literal text.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            lexer.push($crate::MK_TOKEN!(
                $kind,
                String::from($value),
                lexer.line,
                lexer.col
            ));
            lexer.advance_n($value.len());
        }
    };
}
