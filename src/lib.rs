#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    config::ParserConfig,
    errors::errors::{Diagnostic, Error, ErrorTip},
    lexer::{lexer::tokenize, source::Scanner},
    parser::parser::{parse, ParseOutput},
    type_context::TypeContext,
};

pub mod ast;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_context;

extern crate regex;

/// 1-based line and column inside a named script.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub line: u32,
    pub col: u32,
    pub script: Rc<String>,
}

/// Tokenizes `text` and parses it.
pub fn parse_source(
    text: &str,
    types: &dyn TypeContext,
    config: &ParserConfig,
) -> Result<ParseOutput, Error> {
    let tokens = tokenize(text.to_string(), Some(config.script_name.clone()))?;
    let mut scanner = Scanner::new(tokens);
    parse(&mut scanner, types, config)
}

/// Returns line `line` (1-based) of `source`, without its line break.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }
    source
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.trim_end_matches('\r'))
}

/// Renders a diagnostic with the offending line and a caret under its column.
///
/// ```text
/// Error: ";" expected
/// -> main.pbl
///    |
/// 20 | num a = 5
///    | ---------^
/// ```
pub fn render_error(heading: &str, script: &str, line: u32, col: u32, source: &str) -> String {
    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = format!("Error: {}\n", heading);
    out.push_str(&format!("-> {}\n", script));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let line_text = get_line(source, line).unwrap_or("");
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (col as usize).saturating_sub(removed_whitespace).max(1);
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

pub fn display_error(diagnostic: &Diagnostic, source: &str) {
    print!(
        "{}",
        render_error(
            &diagnostic.message,
            &diagnostic.script,
            diagnostic.line,
            diagnostic.col,
            source
        )
    );
}

/// Same layout for a fatal lexer error, with its tip when there is one.
pub fn display_fatal(error: &Error, source: &str) {
    let heading = match error.get_tip() {
        ErrorTip::None => error.get_error_name().to_string(),
        tip => format!("{} ({})", error.get_error_name(), tip),
    };
    let position = error.get_position();
    print!(
        "{}",
        render_error(&heading, &position.script, position.line, position.col, source)
    );
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use crate::{config::ParserConfig, type_context::TypeNames};

    #[test]
    fn test_get_line() {
        let source = "num a = 1;\nnum b = 2;\r\n\nprint(a);";
        assert_eq!(super::get_line(source, 1), Some("num a = 1;"));
        assert_eq!(super::get_line(source, 2), Some("num b = 2;"));
        assert_eq!(super::get_line(source, 3), Some(""));
        assert_eq!(super::get_line(source, 4), Some("print(a);"));
        assert_eq!(super::get_line(source, 5), None);
        assert_eq!(super::get_line(source, 0), None);
    }

    #[test]
    fn test_render_error() {
        let rendered = super::render_error("\";\" expected", "main.pbl", 2, 13, "num a;\n    num b = 5\n");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: \";\" expected");
        assert_eq!(lines[1], "-> main.pbl");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | num b = 5");
        assert_eq!(lines[4], "  | --------^");
    }

    #[test]
    fn test_parse_source() {
        let output = super::parse_source("num x = 1 + 2;", &TypeNames::new(), &ParserConfig::default());
        assert!(output.is_ok());

        let output = output.unwrap();
        assert!(output.is_ok());
        assert_eq!(output.root.unwrap().to_string(), "num x = (1 + 2)");
    }

    #[test]
    fn test_parse_source_lexer_failure() {
        let result = super::parse_source("num x = \"open;", &TypeNames::new(), &ParserConfig::default());
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().get_error_name(), "UnterminatedString");
    }
}
