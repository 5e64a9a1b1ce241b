use crate::errors::errors::Error;

use super::tokens::{Token, TokenKind};

/// Pull interface the parser reads tokens through.
///
/// `peek` walks a cursor that is independent of `scan`; `reset_peek` moves
/// it back to just after the most recently scanned token.
pub trait TokenSource {
    fn scan(&mut self) -> Result<Token, Error>;
    fn reset_peek(&mut self);
    fn peek(&mut self) -> Result<Token, Error>;
}

/// Token source over an already tokenized buffer.
///
/// Once the buffer is exhausted both cursors keep yielding an EOF token.
pub struct Scanner {
    tokens: Vec<Token>,
    pos: usize,
    peek_pos: usize,
}

impl Scanner {
    pub fn new(tokens: Vec<Token>) -> Self {
        Scanner {
            tokens,
            pos: 0,
            peek_pos: 0,
        }
    }

    fn at(&self, index: usize) -> Token {
        match self.tokens.get(index) {
            Some(token) => token.clone(),
            None => {
                let (line, col) = self
                    .tokens
                    .last()
                    .map(|last| (last.line, last.col))
                    .unwrap_or((1, 1));
                Token {
                    kind: TokenKind::EOF,
                    val: String::new(),
                    line,
                    col,
                }
            }
        }
    }
}

impl TokenSource for Scanner {
    fn scan(&mut self) -> Result<Token, Error> {
        let token = self.at(self.pos);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        self.peek_pos = self.pos;
        Ok(token)
    }

    fn reset_peek(&mut self) {
        self.peek_pos = self.pos;
    }

    fn peek(&mut self) -> Result<Token, Error> {
        let token = self.at(self.peek_pos);
        if self.peek_pos < self.tokens.len() {
            self.peek_pos += 1;
        }
        Ok(token)
    }
}

impl From<Vec<Token>> for Scanner {
    fn from(tokens: Vec<Token>) -> Self {
        Scanner::new(tokens)
    }
}
