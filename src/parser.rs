//! Module for parsing tokens into S-exps.

use std::fmt;

use derive_getters::Getters;
use log::trace;

use crate::error::SyntaxError;
use crate::primitive::{Number, ToSymbol};
use crate::sexp::{ConsList, HeapSexp, Sexp};
use crate::token::{Token, TokenInfo, Tokenizer};

use self::ParseErrorReason::*;

pub const DEFAULT_MAX_DEPTH: usize = 256;


/// Recursive-descent reader over a Tokenizer.
///
/// Each list or quote opened counts one level against max_depth, which in
/// turn bounds recursion everywhere else the resulting tree is walked.
pub struct Parser<I: Iterator<Item = char>> {
    tokenizer: Tokenizer<I>,
    max_depth: usize,
}

// What a single read produced. Close and Period are only meaningful to the
// list-body reader; anywhere a value is required they are errors.
enum Parsed {
    Sexp(HeapSexp),
    Close(TokenInfo),
    Period(TokenInfo),
}

#[derive(Debug, PartialEq)]
pub enum ParseErrorReason {
    UnexpectedEnd,
    UnmatchedClose,
    IsolatedPeriod,
    NotPenultimatePeriod,
    TrailingTokens,
    DepthOverflow,
}

#[derive(Debug, Getters)]
pub struct ParseError {
    reason: ParseErrorReason,
    token: Option<TokenInfo>,
}


impl<I: Iterator<Item = char>> Parser<I> {
    pub fn new(tokenizer: Tokenizer<I>) -> Self {
        Self {
            tokenizer,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Reads exactly one expression, which must span the whole input.
    pub fn parse_all(mut self) -> Result<HeapSexp, SyntaxError> {
        let sexp = self.parse_value(0)?;
        if let Some(info) = self.tokenizer.token_info() {
            return Err(ParseError::new(TrailingTokens, Some(info.clone())).into());
        }
        // A dotted tail that escaped to the top level, e.g. "(. 1)".
        if self.tokenizer.period_seen() && !sexp.is_cons() {
            return Err(ParseError::new(IsolatedPeriod, None).into());
        }

        trace!("Parsed {}", sexp);
        Ok(sexp)
    }

    fn parse_value(&mut self, depth: usize) -> Result<HeapSexp, SyntaxError> {
        match self.parse_sexp(depth)? {
            Parsed::Sexp(sexp) => Ok(sexp),
            Parsed::Close(info) => Err(ParseError::new(UnmatchedClose, Some(info)).into()),
            Parsed::Period(info) => Err(ParseError::new(IsolatedPeriod, Some(info)).into()),
        }
    }

    fn parse_sexp(&mut self, depth: usize) -> Result<Parsed, SyntaxError> {
        let info = match self.tokenizer.token_info() {
            Some(info) => info.clone(),
            None => return Err(ParseError::new(UnexpectedEnd, None).into()),
        };
        self.tokenizer.advance()?;

        let sexp: HeapSexp = match info.token() {
            Token::Integer(i) => Number::new(*i).into(),
            Token::Symbol(symbol) => symbol.clone().into(),
            Token::Boolean(b) => Sexp::boolean(*b),
            Token::LeftParen => {
                self.descend(depth, &info)?;
                self.parse_list(depth + 1)?
            }
            Token::Quote => {
                self.descend(depth, &info)?;
                let quoted = self.parse_value(depth + 1)?;
                list!("quote".to_symbol(), quoted)
            }
            Token::RightParen => return Ok(Parsed::Close(info)),
            Token::Period => return Ok(Parsed::Period(info)),
        };
        Ok(Parsed::Sexp(sexp))
    }

    // Reads the rest of a list whose "(" was already consumed.
    fn parse_list(&mut self, depth: usize) -> Result<HeapSexp, SyntaxError> {
        let mut list = ConsList::new();
        loop {
            match self.parse_sexp(depth)? {
                Parsed::Sexp(sexp) => list.append(sexp),
                Parsed::Close(_) => return Ok(list.release()),
                Parsed::Period(_) => {
                    let tail = self.parse_value(depth)?;
                    let after = self.tokenizer.token_info().cloned();
                    return match self.parse_sexp(depth)? {
                        Parsed::Close(_) => Ok(list.release_with_tail(tail)),
                        _ => Err(ParseError::new(NotPenultimatePeriod, after).into()),
                    };
                }
            }
        }
    }

    fn descend(&self, depth: usize, info: &TokenInfo) -> Result<(), SyntaxError> {
        if depth >= self.max_depth {
            return Err(ParseError::new(DepthOverflow, Some(info.clone())).into());
        }
        Ok(())
    }
}


impl ParseError {
    pub fn new(reason: ParseErrorReason, token: Option<TokenInfo>) -> Self {
        Self { reason, token }
    }
}

impl fmt::Display for ParseErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnexpectedEnd => write!(f, "unexpected end of input"),
            UnmatchedClose => write!(f, "unmatched )"),
            IsolatedPeriod => write!(f, "isolated ."),
            NotPenultimatePeriod => write!(f, "there should be ) after a dotted tail"),
            TrailingTokens => write!(f, "tokens after a complete expression"),
            DepthOverflow => write!(f, "nesting too deep"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Parse Error]: {}", self.reason)?;
        if let Some(info) = &self.token {
            write!(f, " at {}", info)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
