//! Top-level errors surfaced by the interpreter.
//!
//! Problems with the source text (SyntaxError) and problems with the
//! evaluated program (LangErr) are kept apart all the way to the caller.

use std::fmt;

use crate::lang_err::LangErr;
use crate::parser::ParseError;
use crate::token::TokenizeError;


#[derive(Debug)]
pub enum SyntaxError {
    Tokenize(TokenizeError),
    Parse(ParseError),
}

#[derive(Debug)]
pub enum Error {
    Syntax(SyntaxError),
    Runtime(LangErr),
}


impl Error {
    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax(_))
    }

    pub fn is_runtime(&self) -> bool {
        matches!(self, Error::Runtime(_))
    }
}


impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::Tokenize(err) => write!(f, "{}", err),
            SyntaxError::Parse(err) => write!(f, "{}", err),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax(err) => write!(f, "{}", err),
            Error::Runtime(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SyntaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SyntaxError::Tokenize(err) => Some(err),
            SyntaxError::Parse(err) => Some(err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Syntax(err) => Some(err),
            Error::Runtime(err) => Some(err),
        }
    }
}

impl From<TokenizeError> for SyntaxError {
    fn from(err: TokenizeError) -> Self {
        SyntaxError::Tokenize(err)
    }
}

impl From<ParseError> for SyntaxError {
    fn from(err: ParseError) -> Self {
        SyntaxError::Parse(err)
    }
}

impl From<SyntaxError> for Error {
    fn from(err: SyntaxError) -> Self {
        Error::Syntax(err)
    }
}

impl From<TokenizeError> for Error {
    fn from(err: TokenizeError) -> Self {
        Error::Syntax(err.into())
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Syntax(err.into())
    }
}

impl From<LangErr> for Error {
    fn from(err: LangErr) -> Self {
        Error::Runtime(err)
    }
}
