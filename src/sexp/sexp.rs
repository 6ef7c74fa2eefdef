//! Module for representing S-exps.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use super::cons::Cons;
use crate::error::SyntaxError;
use crate::parser::Parser;
use crate::primitive::{Number, Primitive, Symbol};
use crate::token::Tokenizer;


/// Shared, immutable S-exp node.
///
/// Trees are acyclic and never mutated once built, so sub-trees may be
/// shared freely (quote hands back a clone of the Rc, not a deep copy).
pub type HeapSexp = Rc<Sexp>;

#[derive(Clone)]
pub enum Sexp {
    /// The empty list. Terminates proper lists.
    Nil,
    Primitive(Primitive),
    Cons(Cons),
}

/// Walks a list by successive cdrs.
pub struct SexpIter<'a> {
    current: Option<&'a HeapSexp>,
}


impl Sexp {
    pub fn nil() -> HeapSexp {
        HeapSexp::new(Sexp::Nil)
    }

    pub fn boolean(value: bool) -> HeapSexp {
        Symbol::boolean(value).into()
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Sexp::Nil)
    }

    pub fn is_cons(&self) -> bool {
        matches!(self, Sexp::Cons(_))
    }

    /// Anything other than a Cons or Nil.
    pub fn is_atom(&self) -> bool {
        matches!(self, Sexp::Primitive(_))
    }

    /// Only the symbol #f is false; every other value counts as true.
    pub fn is_false(&self) -> bool {
        self.as_symbol().map_or(false, Symbol::is_false)
    }

    pub fn as_cons(&self) -> Option<&Cons> {
        match self {
            Sexp::Cons(cons) => Some(cons),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Sexp::Primitive(Primitive::Number(num)) => Some(*num),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Sexp::Primitive(Primitive::Symbol(symbol)) => Some(symbol),
            _ => None,
        }
    }

    /// Nil, or a chain of Cons cells ending in Nil.
    pub fn is_proper_list(&self) -> bool {
        let mut current = self;
        loop {
            match current {
                Sexp::Nil => return true,
                Sexp::Cons(cons) => current = cons.cdr(),
                Sexp::Primitive(_) => return false,
            }
        }
    }
}


impl<'a> SexpIter<'a> {
    pub fn new(list: &'a HeapSexp) -> Self {
        SexpIter {
            current: Some(list),
        }
    }
}

impl<'a> Iterator for SexpIter<'a> {
    // (Sexp, from_cons).
    //
    // If from_cons is false, the item is the non-Nil tail of an improper
    // list (or a lone atom the walk started on) and is necessarily the last
    // element.
    type Item = (&'a HeapSexp, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let sexp = self.current.take()?;
        match sexp.as_ref() {
            Sexp::Nil => None,
            Sexp::Cons(cons) => {
                self.current = Some(cons.cdr());
                Some((cons.car(), true))
            }
            Sexp::Primitive(_) => Some((sexp, false)),
        }
    }
}


impl fmt::Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sexp::Nil => write!(f, "()"),
            Sexp::Primitive(primitive) => write!(f, "{}", primitive),
            Sexp::Cons(cons) => {
                write!(f, "({}", cons.car())?;
                let mut tail = cons.cdr();
                loop {
                    match tail.as_ref() {
                        Sexp::Nil => break,
                        Sexp::Cons(next) => {
                            write!(f, " {}", next.car())?;
                            tail = next.cdr();
                        }
                        atom => {
                            write!(f, " . {}", atom)?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Debug for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}

// Structural equality; follows the cdr chain in a loop.
impl PartialEq for Sexp {
    fn eq(&self, other: &Self) -> bool {
        let (mut a, mut b) = (self, other);
        loop {
            match (a, b) {
                (Sexp::Nil, Sexp::Nil) => return true,
                (Sexp::Primitive(x), Sexp::Primitive(y)) => return x == y,
                (Sexp::Cons(x), Sexp::Cons(y)) => {
                    if x.car() != y.car() {
                        return false;
                    }
                    a = &**x.cdr();
                    b = &**y.cdr();
                }
                _ => return false,
            }
        }
    }
}

impl Default for Sexp {
    fn default() -> Self {
        Sexp::Nil
    }
}

impl FromStr for Sexp {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokenizer = Tokenizer::new(s.chars())?;
        let sexp = Parser::new(tokenizer).parse_all()?;
        Ok(Rc::try_unwrap(sexp).unwrap_or_else(|shared| (*shared).clone()))
    }
}

impl From<Primitive> for Sexp {
    fn from(primitive: Primitive) -> Self {
        Sexp::Primitive(primitive)
    }
}


#[cfg(test)]
#[path = "./sexp_test.rs"]
mod sexp_test;
