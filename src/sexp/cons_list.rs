//! Module for constructing lists as S-exps front to back.
//!
//! Cons cells are immutable, so elements are buffered and the chain is
//! linked from the back when the list is released.

use super::cons::Cons;
use super::sexp::{HeapSexp, Sexp};

#[derive(Debug, Default)]
pub struct ConsList {
    elements: Vec<HeapSexp>,
}

impl ConsList {
    pub fn new() -> ConsList {
        ConsList::default()
    }

    pub fn append<T: Into<HeapSexp>>(&mut self, val: T) {
        self.elements.push(val.into());
    }

    /// Proper list of the appended elements; Nil if there are none.
    pub fn release(self) -> HeapSexp {
        self.release_with_tail(Sexp::nil())
    }

    /// Like release, but the final cdr is `tail`. With no elements appended,
    /// this is just `tail`.
    pub fn release_with_tail(self, tail: HeapSexp) -> HeapSexp {
        self.elements
            .into_iter()
            .rev()
            .fold(tail, |cdr, car| Cons::new(car, cdr).into())
    }
}
