//! Representation of builtin procedures.

use std::fmt;

use derivative::Derivative;

use crate::interpreter::Interpreter;
use crate::lang_err::LangErr;
use crate::sexp::HeapSexp;


/// The argument list handed to a builtin: a list built from Cons cells, or
/// Nil when there are no arguments.
pub type Args = HeapSexp;
pub type Ret = Result<HeapSexp, LangErr>;

/// How the evaluator prepares a builtin's argument list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArgPolicy {
    /// Every argument is reduced, left to right, before the call.
    Evaluated,
    /// The argument list is passed exactly as read; the builtin decides
    /// what (if anything) to evaluate through the Interpreter.
    Unevaluated,
}

#[derive(Clone, Copy, Derivative)]
#[derivative(Debug, PartialEq)]
pub struct BuiltIn {
    name: &'static str,
    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    fun: fn(Args, &Interpreter) -> Ret,
    policy: ArgPolicy,
}

impl BuiltIn {
    pub fn new(name: &'static str, fun: fn(Args, &Interpreter) -> Ret) -> BuiltIn {
        BuiltIn {
            name,
            fun,
            policy: ArgPolicy::Evaluated,
        }
    }

    pub fn with_policy(mut self, policy: ArgPolicy) -> BuiltIn {
        self.policy = policy;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn policy(&self) -> ArgPolicy {
        self.policy
    }

    pub fn call(&self, args: Args, interpreter: &Interpreter) -> Ret {
        (self.fun)(args, interpreter).map_err(|err| err.in_builtin(self.name))
    }
}

impl fmt::Display for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{}]", self.name)
    }
}
