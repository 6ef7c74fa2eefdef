use std::borrow::Cow;
use std::fmt;

use self::ErrKind::*;
use self::ExpectedCount::*;
use crate::sexp::HeapSexp;


/// Builds an Err(LangErr) from an ErrKind variant.
#[macro_export]
macro_rules! err {
    ($($kind:tt)+) => {
        Err($crate::lang_err::LangErr::new(
            $crate::lang_err::ErrKind::$($kind)+,
        ))
    };
}


/// Error raised while evaluating; never a property of the source text.
#[derive(Debug)]
pub struct LangErr {
    builtin: Option<&'static str>,
    pub kind: ErrKind,
}

#[derive(Debug)]
pub enum ErrKind {
    /// Head of a top-level form does not name a builtin.
    ExpectedFunction(HeapSexp),
    /// Form that cannot be evaluated where it appears.
    InvalidSyntax(HeapSexp),
    InvalidArgument {
        given: HeapSexp,
        expected: Cow<'static, str>,
    },
    WrongArgumentCount {
        given: usize,
        expected: ExpectedCount,
    },
    NoOperands,
    DivisionByZero,
    IndexOutOfRange {
        index: i64,
    },
}

#[derive(Debug, PartialEq)]
pub enum ExpectedCount {
    Exactly(usize),
    AtLeast(usize),
}

impl LangErr {
    // Prefer using err! for convenience.
    pub fn new(kind: ErrKind) -> Self {
        Self {
            builtin: None,
            kind,
        }
    }

    /// Attributes the error to a builtin, unless a nested call already
    /// claimed it.
    pub fn in_builtin(mut self, name: &'static str) -> Self {
        if self.builtin.is_none() {
            self.builtin = Some(name);
        }
        self
    }

    pub fn builtin(&self) -> Option<&'static str> {
        self.builtin
    }

    pub fn kind(&self) -> &ErrKind {
        &self.kind
    }
}


impl fmt::Display for LangErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Runtime Error] ")?;
        if let Some(name) = self.builtin {
            write!(f, "in {}: ", name)?;
        }
        match &self.kind {
            ExpectedFunction(head) => write!(f, "Expected a function, given {}", head),
            InvalidSyntax(sexp) => write!(f, "Invalid syntax: {}", sexp),
            InvalidArgument { given, expected } => write!(
                f,
                "Invalid argument: given {}, expected {}",
                given, expected
            ),
            WrongArgumentCount { given, expected } => write!(
                f,
                "Wrong argument count: given {}, expected {}",
                given, expected
            ),
            NoOperands => write!(f, "No operands"),
            DivisionByZero => write!(f, "Division by zero"),
            IndexOutOfRange { index } => write!(f, "Index {} out of range", index),
        }
    }
}

impl fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exactly(exactly) => write!(f, "{}", exactly),
            AtLeast(minimum) => write!(f, "at least {}", minimum),
        }
    }
}

impl std::error::Error for LangErr {}
