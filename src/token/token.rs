use std::fmt;

use derive_getters::Getters;

use crate::primitive::Symbol;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Integer(i64),
    LeftParen,
    RightParen,
    Symbol(Symbol),
    Quote,
    Period,
    Boolean(bool),
}

/// A Token along with where it starts in the source (0-based).
#[derive(Clone, Debug, Getters, PartialEq)]
pub struct TokenInfo {
    token: Token,
    line: usize,
    col: usize,
}

impl TokenInfo {
    pub fn new(token: Token, line: usize, col: usize) -> Self {
        Self { token, line, col }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Integer(i) => write!(f, "{}", i),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::Symbol(s) => write!(f, "{}", s),
            Token::Quote => write!(f, "'"),
            Token::Period => write!(f, "."),
            Token::Boolean(b) => write!(f, "{}", if *b { "#t" } else { "#f" }),
        }
    }
}

impl fmt::Display for TokenInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ ({}, {})", self.token, self.line, self.col)
    }
}
