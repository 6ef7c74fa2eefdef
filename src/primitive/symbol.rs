use std::borrow::Borrow;
use std::fmt;

use super::Primitive;
use crate::sexp::{HeapSexp, Sexp};


pub const TRUE: &str = "#t";
pub const FALSE: &str = "#f";

/// Case-sensitive identifier, compared by value.
///
/// Also carries the two boolean literals, #t and #f. Validating which
/// characters may appear is the tokenizer's job, not this type's.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Symbol(String);

pub trait ToSymbol {
    fn to_symbol(&self) -> Symbol;
}


impl Symbol {
    pub fn new<S: AsRef<str>>(sym: S) -> Symbol {
        Symbol(sym.as_ref().to_string())
    }

    pub fn boolean(value: bool) -> Symbol {
        Symbol::new(if value { TRUE } else { FALSE })
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_boolean(&self) -> bool {
        self.0 == TRUE || self.0 == FALSE
    }

    pub fn is_false(&self) -> bool {
        self.0 == FALSE
    }
}


impl<S: AsRef<str>> ToSymbol for S {
    fn to_symbol(&self) -> Symbol {
        Symbol::new(self)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<Symbol> for Sexp {
    fn from(symbol: Symbol) -> Self {
        Sexp::Primitive(Primitive::Symbol(symbol))
    }
}

impl From<Symbol> for HeapSexp {
    fn from(symbol: Symbol) -> Self {
        HeapSexp::new(symbol.into())
    }
}
