use std::mem;
use std::rc::Rc;

use super::sexp::{HeapSexp, Sexp};


/// Immutable pair. Either slot may hold Nil; a cdr of Nil terminates a
/// proper list.
#[derive(Clone, Debug, PartialEq)]
pub struct Cons {
    car: HeapSexp,
    cdr: HeapSexp,
}

impl Cons {
    pub fn new<A: Into<HeapSexp>, D: Into<HeapSexp>>(car: A, cdr: D) -> Cons {
        Cons {
            car: car.into(),
            cdr: cdr.into(),
        }
    }

    pub fn car(&self) -> &HeapSexp {
        &self.car
    }

    pub fn cdr(&self) -> &HeapSexp {
        &self.cdr
    }
}

impl Drop for Cons {
    // Unlinks uniquely-owned cdr cells one at a time so that dropping a long
    // list doesn't recurse once per element.
    fn drop(&mut self) {
        let mut tail = mem::take(&mut self.cdr);
        while let Ok(sexp) = Rc::try_unwrap(tail) {
            match sexp {
                Sexp::Cons(mut cons) => tail = mem::take(&mut cons.cdr),
                _ => break,
            }
        }
    }
}


impl From<Cons> for Sexp {
    fn from(cons: Cons) -> Self {
        Sexp::Cons(cons)
    }
}

impl From<Cons> for HeapSexp {
    fn from(cons: Cons) -> Self {
        HeapSexp::new(Sexp::Cons(cons))
    }
}
