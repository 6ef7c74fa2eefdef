//! Module for breaking source text into tokens.

use std::fmt;

use derive_getters::Getters;

use super::token::{Token, TokenInfo};
use crate::primitive::ToSymbol;

use self::TokenizeErrorKind::*;


/// Essentially a Mealy machine over a character stream, holding exactly one
/// character of lookahead and one Token of output.
///
/// Once constructed, the current Token is valid until the input runs out;
/// after that is_end() is true and token() returns None.
pub struct Tokenizer<I: Iterator<Item = char>> {
    input: I,
    lookahead: Option<char>,
    line: usize,
    col: usize,

    current: Option<TokenInfo>,
    period_seen: bool,
}

#[derive(Debug, Getters)]
pub struct TokenizeError {
    line: usize,
    col: usize,
    kind: TokenizeErrorKind,
}

#[derive(Debug, PartialEq)]
pub enum TokenizeErrorKind {
    InvalidCharacter(char),
    IntegerOverflow(String),
}


impl<I: Iterator<Item = char>> Tokenizer<I> {
    /// Reads the first Token, so this can already fail on bad input.
    pub fn new(mut input: I) -> Result<Self, TokenizeError> {
        let lookahead = input.next();
        let mut tokenizer = Self {
            input,
            lookahead,
            line: 0,
            col: 0,

            current: None,
            period_seen: false,
        };
        tokenizer.advance()?;
        Ok(tokenizer)
    }

    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    pub fn token(&self) -> Option<&Token> {
        self.current.as_ref().map(TokenInfo::token)
    }

    pub fn token_info(&self) -> Option<&TokenInfo> {
        self.current.as_ref()
    }

    /// Whether a Period has been produced at any point so far.
    pub fn period_seen(&self) -> bool {
        self.period_seen
    }

    /// (line, col) of the next unread character.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.col)
    }

    pub fn advance(&mut self) -> Result<(), TokenizeError> {
        self.current = self.next_token()?;
        if let Some(Token::Period) = self.token() {
            self.period_seen = true;
        }
        Ok(())
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.lookahead?;
        self.lookahead = self.input.next();
        if c == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    fn next_token(&mut self) -> Result<Option<TokenInfo>, TokenizeError> {
        while self.lookahead.map_or(false, char::is_whitespace) {
            self.bump();
        }

        let (line, col) = self.position();
        let c = match self.lookahead {
            Some(c) => c,
            None => return Ok(None),
        };
        let token = match c {
            '(' | ')' | '\'' | '.' => {
                self.bump();
                match c {
                    '(' => Token::LeftParen,
                    ')' => Token::RightParen,
                    '\'' => Token::Quote,
                    _ => Token::Period,
                }
            }
            '0'..='9' => self.integer(String::new(), line, col)?,
            '+' | '-' => {
                self.bump();
                // Sign of a literal, a lone operator, or the start of a
                // longer symbol, depending on what follows.
                match self.lookahead {
                    Some(next) if next.is_ascii_digit() => {
                        self.integer(c.to_string(), line, col)?
                    }
                    Some(next) if !next.is_whitespace() => self.symbol(c.to_string()),
                    _ => Token::Symbol(c.to_string().to_symbol()),
                }
            }
            '#' => {
                self.bump();
                match self.lookahead {
                    Some(b) if b == 't' || b == 'f' => {
                        self.bump();
                        // "#t" glued to more symbol characters is just a
                        // symbol, e.g. #true.
                        if self.lookahead.map_or(false, is_symbol_continuation) {
                            self.symbol(format!("#{}", b))
                        } else {
                            Token::Boolean(b == 't')
                        }
                    }
                    _ => self.symbol("#".to_string()),
                }
            }
            _ if is_symbol_start(c) => self.symbol(String::new()),
            _ => {
                return Err(TokenizeError {
                    line,
                    col,
                    kind: InvalidCharacter(c),
                })
            }
        };

        Ok(Some(TokenInfo::new(token, line, col)))
    }

    fn integer(
        &mut self,
        mut digits: String,
        line: usize,
        col: usize,
    ) -> Result<Token, TokenizeError> {
        while let Some(d) = self.lookahead.filter(char::is_ascii_digit) {
            digits.push(d);
            self.bump();
        }

        match digits.parse::<i64>() {
            Ok(value) => Ok(Token::Integer(value)),
            Err(_) => Err(TokenizeError {
                line,
                col,
                kind: IntegerOverflow(digits),
            }),
        }
    }

    fn symbol(&mut self, mut name: String) -> Token {
        while let Some(c) = self.lookahead.filter(|c| is_symbol_continuation(*c)) {
            name.push(c);
            self.bump();
        }
        Token::Symbol(name.to_symbol())
    }
}


/// Tokenizes all of `input` up front.
pub fn tokenize<S: AsRef<str>>(input: S) -> Result<Vec<Token>, TokenizeError> {
    let mut tokenizer = Tokenizer::new(input.as_ref().chars())?;
    let mut tokens = Vec::new();
    while let Some(token) = tokenizer.token() {
        tokens.push(token.clone());
        tokenizer.advance()?;
    }
    Ok(tokens)
}

fn is_symbol_start(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '<' | '=' | '>' | '*' | '/' | '#' | '[' | ']')
}

fn is_symbol_continuation(c: char) -> bool {
    is_symbol_start(c) || c.is_ascii_digit() || matches!(c, '?' | '!' | '-')
}


impl fmt::Display for TokenizeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidCharacter(c) => write!(f, "invalid character {:?}", c),
            IntegerOverflow(digits) => write!(f, "integer literal {} out of range", digits),
        }
    }
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Tokenize Error]: {} @ ({}, {})",
            self.kind, self.line, self.col
        )
    }
}

impl std::error::Error for TokenizeError {}


#[cfg(test)]
#[path = "./tokenizer_test.rs"]
mod tokenizer_test;
