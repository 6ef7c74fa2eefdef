//! Interpreter for a small Scheme subset: integers, symbols and pairs,
//! quoting, and a fixed catalogue of arithmetic, comparison, boolean and
//! list builtins.
//!
//! Note that this crate does *not* setup logging; clients should take care
//! of that if they want the trace of reads and applications. See:
//!   https://github.com/rust-lang/log#in-executables.

#[macro_use]
pub mod lang_err;
#[macro_use]
pub mod sexp;

pub mod builtins;
pub mod error;
pub mod interpreter;
pub mod parser;
pub mod primitive;
pub mod token;

pub use crate::error::Error;
pub use crate::interpreter::Interpreter;

pub mod prelude {
    pub use crate::error::{Error, SyntaxError};
    pub use crate::interpreter::Interpreter;
    pub use crate::lang_err::{ErrKind, ExpectedCount, LangErr};
    pub use crate::primitive::{Number, Symbol, ToSymbol};
    pub use crate::sexp::{Cons, ConsList, HeapSexp, Sexp};
    // Macros.
    pub use crate::{err, list};
}


/// Evaluates the single expression in `source` and returns its printed
/// result, using a default Interpreter.
pub fn run(source: &str) -> Result<String, Error> {
    Interpreter::new().run(source)
}
