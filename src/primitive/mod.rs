//! Representation of primitives.

use std::fmt;

pub mod builtin;
pub mod number;
pub mod symbol;

pub use self::builtin::{ArgPolicy, BuiltIn};
pub use self::number::Number;
pub use self::symbol::{Symbol, ToSymbol};


#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Number(Number),
    Symbol(Symbol),
}


impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Number(num) => write!(f, "{}", num),
            Primitive::Symbol(s) => write!(f, "{}", s),
        }
    }
}
