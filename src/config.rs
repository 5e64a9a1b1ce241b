//! Per-parse configuration.

/// Settings for one parse.
///
/// `assertions` selects between building `assert` nodes and replacing them
/// with a constant `true` literal. `min_err_dist` is the number of tokens
/// that must be consumed after a syntax error before another one is reported.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    pub script_name: String,
    pub assertions: bool,
    pub min_err_dist: u32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            script_name: String::from("script"),
            assertions: true,
            min_err_dist: 2,
        }
    }
}

impl ParserConfig {
    pub fn new(script_name: impl Into<String>) -> Self {
        ParserConfig {
            script_name: script_name.into(),
            ..ParserConfig::default()
        }
    }

    pub fn with_assertions(mut self, assertions: bool) -> Self {
        self.assertions = assertions;
        self
    }

    pub fn with_min_err_dist(mut self, min_err_dist: u32) -> Self {
        self.min_err_dist = min_err_dist;
        self
    }
}
