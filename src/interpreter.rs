//! Evaluation of parsed S-exps against the builtin catalogue.
//!
//! There is no environment: the head of every form must resolve to one of
//! the builtins, and each builtin's ArgPolicy decides whether its argument
//! list is reduced before the call.

use log::{debug, trace};

use crate::builtins;
use crate::error::Error;
use crate::lang_err::LangErr;
use crate::parser::Parser;
use crate::primitive::builtin::Ret;
use crate::primitive::{ArgPolicy, BuiltIn};
use crate::sexp::{ConsList, HeapSexp, Sexp, SexpIter};
use crate::token::Tokenizer;

pub use crate::parser::DEFAULT_MAX_DEPTH;


#[derive(Clone, Copy, Debug)]
pub struct Interpreter {
    max_depth: usize,
}


impl Interpreter {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Caps how deeply lists and quotes may nest in the source.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Reads one complete expression from `source`.
    pub fn read(&self, source: &str) -> Result<HeapSexp, Error> {
        let tokenizer = Tokenizer::new(source.chars())?;
        Ok(Parser::new(tokenizer)
            .with_max_depth(self.max_depth)
            .parse_all()?)
    }

    /// Evaluates a top-level expression. Atoms evaluate to themselves; a
    /// form's head must resolve to a builtin.
    pub fn eval(&self, sexp: &HeapSexp) -> Ret {
        match sexp.as_ref() {
            Sexp::Nil => err!(InvalidSyntax(sexp.clone())),
            Sexp::Primitive(_) => Ok(sexp.clone()),
            Sexp::Cons(cons) => match self.resolve(cons.car())? {
                Some(builtin) => self.apply(builtin, cons.cdr()),
                None => err!(ExpectedFunction(cons.car().clone())),
            },
        }
    }

    /// Reduces a single operand: forms are applied, everything else
    /// (including ()) is already a value.
    pub fn eval_operand(&self, sexp: &HeapSexp) -> Ret {
        match sexp.as_ref() {
            Sexp::Cons(cons) => match self.resolve(cons.car())? {
                Some(builtin) => self.apply(builtin, cons.cdr()),
                None => err!(InvalidSyntax(sexp.clone())),
            },
            _ => Ok(sexp.clone()),
        }
    }

    /// Tokenizes, reads, evaluates and prints `source`.
    pub fn run(&self, source: &str) -> Result<String, Error> {
        let sexp = self.read(source)?;
        let result = self.eval(&sexp)?;
        debug!("{} => {}", sexp, result);
        Ok(result.to_string())
    }

    // The head of a form is either a symbol or a form evaluating to one.
    fn resolve(&self, head: &HeapSexp) -> Result<Option<&'static BuiltIn>, LangErr> {
        let head = if head.is_cons() {
            self.eval_operand(head)?
        } else {
            head.clone()
        };
        Ok(head
            .as_symbol()
            .and_then(|symbol| builtins::lookup(symbol.as_str())))
    }

    fn apply(&self, builtin: &BuiltIn, args: &HeapSexp) -> Ret {
        let args = match builtin.policy() {
            ArgPolicy::Evaluated => self.evlis(args)?,
            ArgPolicy::Unevaluated => args.clone(),
        };

        trace!("Applying {} to {}", builtin, args);
        let result = builtin.call(args, self)?;
        trace!("{} returned {}", builtin, result);
        Ok(result)
    }

    // Reduces each element of an argument list, left to right. A non-Nil
    // improper tail is kept as is.
    fn evlis(&self, args: &HeapSexp) -> Ret {
        let mut list = ConsList::new();
        for (arg, from_cons) in SexpIter::new(args) {
            if !from_cons {
                return Ok(list.release_with_tail(arg.clone()));
            }
            list.append(self.eval_operand(arg)?);
        }
        Ok(list.release())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
#[path = "./interpreter_test.rs"]
mod interpreter_test;
