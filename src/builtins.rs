//! The fixed catalogue of builtin procedures.
//!
//! Builtins receive their argument list as a single S-exp: either already
//! reduced by the Interpreter (ArgPolicy::Evaluated) or exactly as read
//! (ArgPolicy::Unevaluated, for the forms that control evaluation order).

use std::borrow::Cow;
use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::interpreter::Interpreter;
use crate::lang_err::{ExpectedCount, LangErr};
use crate::primitive::builtin::{Args, Ret};
use crate::primitive::{ArgPolicy, BuiltIn, Number};
use crate::sexp::{Cons, HeapSexp, Sexp, SexpIter};


macro_rules! builtins {
    [$($n:tt : $x:expr $(=> $policy:ident)?),* $(,)?] => {
        {
            let mut m = HashMap::new();
            $(
                m.insert(
                    $n,
                    BuiltIn::new($n, $x)$(.with_policy(ArgPolicy::$policy))?,
                );
            )*
            m
        }
    };
}

lazy_static! {
    pub static ref BUILTINS: HashMap<&'static str, BuiltIn> = builtins![
        "quote": quote => Unevaluated,
        "number?": is_number,
        "=": num_eq,
        ">": num_gt,
        "<": num_lt,
        ">=": num_ge,
        "<=": num_le,
        "+": add,
        "-": sub,
        "*": mul,
        "/": div,
        "max": max,
        "min": min,
        "abs": abs,
        "boolean?": is_boolean,
        "not": not,
        "and": and => Unevaluated,
        "or": or => Unevaluated,
        "pair?": is_pair,
        "null?": is_null,
        "list?": is_list,
        "cons": cons,
        "car": car,
        "cdr": cdr,
        "list": list,
        "list-ref": list_ref,
        "list-tail": list_tail,
    ];
}

pub fn lookup(name: &str) -> Option<&'static BuiltIn> {
    BUILTINS.get(name)
}


fn quote(args: Args, _interpreter: &Interpreter) -> Ret {
    match only(&args) {
        Some(quoted) => Ok(quoted.clone()),
        None => err!(WrongArgumentCount {
            given: elements(&args).len(),
            expected: ExpectedCount::Exactly(1),
        }),
    }
}

fn is_number(args: Args, _interpreter: &Interpreter) -> Ret {
    Ok(Sexp::boolean(
        only(&args).map_or(false, |arg| arg.as_number().is_some()),
    ))
}

fn num_eq(args: Args, _interpreter: &Interpreter) -> Ret {
    compare(&args, |a, b| a == b)
}

fn num_gt(args: Args, _interpreter: &Interpreter) -> Ret {
    compare(&args, |a, b| a > b)
}

fn num_lt(args: Args, _interpreter: &Interpreter) -> Ret {
    compare(&args, |a, b| a < b)
}

fn num_ge(args: Args, _interpreter: &Interpreter) -> Ret {
    compare(&args, |a, b| a >= b)
}

fn num_le(args: Args, _interpreter: &Interpreter) -> Ret {
    compare(&args, |a, b| a <= b)
}

fn add(args: Args, _interpreter: &Interpreter) -> Ret {
    let mut curr = Number::default();
    for num in numbers(&args)? {
        curr += num;
    }
    Ok(curr.into())
}

fn sub(args: Args, _interpreter: &Interpreter) -> Ret {
    let nums = numbers(&args)?;
    let (first, rest) = match nums.split_first() {
        Some(split) => split,
        None => return err!(NoOperands),
    };
    if rest.is_empty() {
        return Ok((-*first).into());
    }

    let mut curr = *first;
    for num in rest {
        curr -= *num;
    }
    Ok(curr.into())
}

fn mul(args: Args, _interpreter: &Interpreter) -> Ret {
    let mut curr = Number::new(1);
    for num in numbers(&args)? {
        curr *= num;
    }
    Ok(curr.into())
}

fn div(args: Args, _interpreter: &Interpreter) -> Ret {
    let nums = numbers(&args)?;
    let (first, rest) = match nums.split_first() {
        Some(split) => split,
        None => return err!(NoOperands),
    };
    if rest.iter().any(Number::is_zero) {
        return err!(DivisionByZero);
    }

    let mut curr = *first;
    for num in rest {
        curr /= *num;
    }
    Ok(curr.into())
}

fn max(args: Args, _interpreter: &Interpreter) -> Ret {
    match numbers(&args)?.into_iter().max() {
        Some(num) => Ok(num.into()),
        None => err!(NoOperands),
    }
}

fn min(args: Args, _interpreter: &Interpreter) -> Ret {
    match numbers(&args)?.into_iter().min() {
        Some(num) => Ok(num.into()),
        None => err!(NoOperands),
    }
}

fn abs(args: Args, _interpreter: &Interpreter) -> Ret {
    let arg = single(&args)?;
    Ok(number(arg)?.abs().into())
}

fn is_boolean(args: Args, _interpreter: &Interpreter) -> Ret {
    Ok(Sexp::boolean(only(&args).map_or(false, |arg| {
        arg.as_symbol().map_or(false, |symbol| symbol.is_boolean())
    })))
}

fn not(args: Args, _interpreter: &Interpreter) -> Ret {
    let arg = single(&args)?;
    Ok(Sexp::boolean(arg.is_false()))
}

fn and(args: Args, interpreter: &Interpreter) -> Ret {
    let mut last = None;
    for (operand, _) in SexpIter::new(&args) {
        let value = operand_value(operand, interpreter)?;
        if value.is_false() {
            return Ok(value);
        }
        last = Some(value);
    }
    Ok(last.unwrap_or_else(|| Sexp::boolean(true)))
}

fn or(args: Args, interpreter: &Interpreter) -> Ret {
    for (operand, _) in SexpIter::new(&args) {
        let value = operand_value(operand, interpreter)?;
        if !value.is_false() {
            return Ok(value);
        }
    }
    Ok(Sexp::boolean(false))
}

// True only for a one- or two-element list of atoms, or a dotted pair of
// atoms.
fn is_pair(args: Args, _interpreter: &Interpreter) -> Ret {
    let inner = match only(&args).and_then(|arg| arg.as_cons()) {
        Some(inner) => inner,
        None => return Ok(Sexp::boolean(false)),
    };
    if inner.car().is_nil() {
        return err!(InvalidSyntax(args.clone()));
    }

    let fits = !inner.car().is_cons()
        && match inner.cdr().as_ref() {
            Sexp::Primitive(_) => true,
            Sexp::Cons(second) => !second.car().is_cons() && second.cdr().is_nil(),
            Sexp::Nil => false,
        };
    Ok(Sexp::boolean(fits))
}

fn is_null(args: Args, _interpreter: &Interpreter) -> Ret {
    Ok(Sexp::boolean(only(&args).map_or(false, |arg| arg.is_nil())))
}

fn is_list(args: Args, _interpreter: &Interpreter) -> Ret {
    Ok(Sexp::boolean(
        only(&args).map_or(false, |arg| arg.is_proper_list()),
    ))
}

fn cons(args: Args, _interpreter: &Interpreter) -> Ret {
    let (car, cdr) = pair_args(&args)?;
    for arg in &[car, cdr] {
        if !arg.is_atom() {
            return err!(InvalidArgument {
                given: (*arg).clone(),
                expected: Cow::Borrowed("a non-list operand"),
            });
        }
    }
    Ok(Cons::new(car.clone(), cdr.clone()).into())
}

fn car(args: Args, _interpreter: &Interpreter) -> Ret {
    let arg = single(&args)?;
    match arg.as_cons() {
        Some(cons) => Ok(cons.car().clone()),
        None => err!(InvalidArgument {
            given: arg.clone(),
            expected: Cow::Borrowed("a pair"),
        }),
    }
}

fn cdr(args: Args, _interpreter: &Interpreter) -> Ret {
    let arg = single(&args)?;
    match arg.as_cons() {
        Some(cons) => Ok(cons.cdr().clone()),
        None => err!(InvalidArgument {
            given: arg.clone(),
            expected: Cow::Borrowed("a pair"),
        }),
    }
}

fn list(args: Args, _interpreter: &Interpreter) -> Ret {
    if !args.is_proper_list() {
        return err!(InvalidArgument {
            given: args,
            expected: Cow::Borrowed("a proper list"),
        });
    }
    Ok(args)
}

fn list_ref(args: Args, _interpreter: &Interpreter) -> Ret {
    let (list, index) = pair_args(&args)?;
    let index = list_index(index)?;
    let mut cons = match list.as_cons() {
        Some(cons) => cons,
        None => {
            return err!(InvalidArgument {
                given: list.clone(),
                expected: Cow::Borrowed("a non-empty list"),
            })
        }
    };

    for _ in 0..index {
        cons = match cons.cdr().as_cons() {
            Some(next) => next,
            None => return err!(IndexOutOfRange { index }),
        };
    }
    Ok(cons.car().clone())
}

fn list_tail(args: Args, _interpreter: &Interpreter) -> Ret {
    let (list, index) = pair_args(&args)?;
    let index = list_index(index)?;
    if list.is_atom() {
        return err!(InvalidArgument {
            given: list.clone(),
            expected: Cow::Borrowed("a list"),
        });
    }

    let mut current = list;
    for _ in 0..index {
        current = match current.as_cons() {
            Some(cons) => cons.cdr(),
            None => return err!(IndexOutOfRange { index }),
        };
    }
    Ok(current.clone())
}


// Argument-shape helpers.

/// Every element of the argument list, including a non-Nil improper tail.
fn elements(args: &Args) -> Vec<&HeapSexp> {
    SexpIter::new(args).map(|(elem, _)| elem).collect()
}

/// The sole element of a one-element proper list.
fn only(args: &Args) -> Option<&HeapSexp> {
    match args.as_cons() {
        Some(cons) if cons.cdr().is_nil() => Some(cons.car()),
        _ => None,
    }
}

fn single(args: &Args) -> Result<&HeapSexp, LangErr> {
    match only(args) {
        Some(arg) => Ok(arg),
        None => err!(WrongArgumentCount {
            given: elements(args).len(),
            expected: ExpectedCount::Exactly(1),
        }),
    }
}

fn pair_args(args: &Args) -> Result<(&HeapSexp, &HeapSexp), LangErr> {
    match elements(args).as_slice() {
        [first, second] => Ok((*first, *second)),
        elems => err!(WrongArgumentCount {
            given: elems.len(),
            expected: ExpectedCount::Exactly(2),
        }),
    }
}

/// Operands of a variadic numeric builtin, in order. Nested lists (and ())
/// are rejected; an improper tail counts as the final operand.
fn flatten(args: &Args) -> Result<Vec<&HeapSexp>, LangErr> {
    let operands = elements(args);
    for operand in &operands {
        if !operand.is_atom() {
            return err!(InvalidArgument {
                given: (*operand).clone(),
                expected: Cow::Borrowed("flat operands"),
            });
        }
    }
    Ok(operands)
}

fn numbers(args: &Args) -> Result<Vec<Number>, LangErr> {
    flatten(args)?.into_iter().map(number).collect()
}

fn number(sexp: &HeapSexp) -> Result<Number, LangErr> {
    match sexp.as_number() {
        Some(num) => Ok(num),
        None => err!(InvalidArgument {
            given: sexp.clone(),
            expected: Cow::Borrowed("a Number"),
        }),
    }
}

fn list_index(sexp: &HeapSexp) -> Result<i64, LangErr> {
    let index = number(sexp)?.value();
    if index < 0 {
        return err!(IndexOutOfRange { index });
    }
    Ok(index)
}

// Fewer than two operands is trivially true, whatever their type. Otherwise
// walks adjacent operands, checking each one's type as it is reached, and
// stops at the first pair that fails the relation.
fn compare<F: Fn(Number, Number) -> bool>(args: &Args, relation: F) -> Ret {
    let operands = flatten(args)?;
    if operands.len() < 2 {
        return Ok(Sexp::boolean(true));
    }
    let mut operands = operands.into_iter();
    let mut prev = match operands.next() {
        Some(first) => number(first)?,
        None => return Ok(Sexp::boolean(true)),
    };
    for operand in operands {
        let next = number(operand)?;
        if !relation(prev, next) {
            return Ok(Sexp::boolean(false));
        }
        prev = next;
    }
    Ok(Sexp::boolean(true))
}

fn operand_value(operand: &HeapSexp, interpreter: &Interpreter) -> Ret {
    let value = interpreter.eval_operand(operand)?;
    if value.is_nil() {
        return err!(InvalidArgument {
            given: operand.clone(),
            expected: Cow::Borrowed("an operand with a value"),
        });
    }
    Ok(value)
}


#[cfg(test)]
#[path = "./builtins_test.rs"]
mod builtins_test;
