use super::*;

use crate::error::Error;
use crate::lang_err::ErrKind;


fn run(source: &str) -> String {
    Interpreter::new().run(source).unwrap()
}

fn fail(source: &str) -> LangErr {
    match Interpreter::new().run(source) {
        Err(Error::Runtime(err)) => err,
        other => panic!("{}: {:?}", source, other),
    }
}


#[test]
fn registry() {
    assert_eq!(BUILTINS.len(), 27);
    for name in &["quote", "and", "or"] {
        assert_eq!(lookup(name).unwrap().policy(), ArgPolicy::Unevaluated);
    }
    assert_eq!(lookup("+").unwrap().policy(), ArgPolicy::Evaluated);
    assert_eq!(lookup("list-tail").unwrap().name(), "list-tail");
    assert!(lookup("define").is_none());
    assert!(lookup("QUOTE").is_none());
}

#[test]
fn quote_arity() {
    assert_eq!(run("(quote (1 . 2))"), "(1 . 2)");
    assert!(matches!(
        fail("(quote)").kind,
        ErrKind::WrongArgumentCount {
            given: 0,
            expected: ExpectedCount::Exactly(1),
        }
    ));
    assert!(matches!(
        fail("(quote 1 2)").kind,
        ErrKind::WrongArgumentCount { given: 2, .. }
    ));
}

#[test]
fn arithmetic() {
    assert_eq!(run("(+)"), "0");
    assert_eq!(run("(+ 5)"), "5");
    assert_eq!(run("(- 5)"), "-5");
    assert_eq!(run("(- 10 1 2)"), "7");
    assert_eq!(run("(* 2 3 4)"), "24");
    assert_eq!(run("(/ 20 2 5)"), "2");
    assert_eq!(run("(/ -7 2)"), "-3");
    assert_eq!(run("(/ 7)"), "7");
    assert_eq!(run("(/ 0 5)"), "0");
    assert_eq!(run("(max 3 9 -2)"), "9");
    assert_eq!(run("(min 3 9 -2)"), "-2");
    assert_eq!(run("(abs -4)"), "4");
    assert_eq!(run("(abs 4)"), "4");
}

#[test]
fn wrapping() {
    assert_eq!(
        run("(+ 9223372036854775807 1)"),
        "-9223372036854775808"
    );
    assert_eq!(
        run("(- -9223372036854775808)"),
        "-9223372036854775808"
    );
    assert_eq!(
        run("(/ -9223372036854775808 -1)"),
        "-9223372036854775808"
    );
    assert_eq!(
        run("(abs -9223372036854775808)"),
        "-9223372036854775808"
    );
}

#[test]
fn arithmetic_errors() {
    assert!(matches!(fail("(/ 1 0)").kind, ErrKind::DivisionByZero));
    assert!(matches!(fail("(/ 0 1 2 0)").kind, ErrKind::DivisionByZero));
    for source in &["(-)", "(/)", "(max)", "(min)"] {
        assert!(matches!(fail(source).kind, ErrKind::NoOperands), "{}", source);
    }
    assert!(matches!(
        fail("(+ 1 a)").kind,
        ErrKind::InvalidArgument { .. }
    ));
    assert!(matches!(
        fail("(+ 1 '(2))").kind,
        ErrKind::InvalidArgument { .. }
    ));
    assert!(matches!(
        fail("(* 1 ())").kind,
        ErrKind::InvalidArgument { .. }
    ));
    assert!(matches!(
        fail("(abs 1 2)").kind,
        ErrKind::WrongArgumentCount { given: 2, .. }
    ));
    assert!(matches!(
        fail("(abs #t)").kind,
        ErrKind::InvalidArgument { .. }
    ));
}

#[test]
fn improper_operand_tail() {
    assert_eq!(run("(+ 1 . 2)"), "3");
    assert_eq!(run("(< 1 . 2)"), "#t");
}

#[test]
fn comparisons() {
    assert_eq!(run("(=)"), "#t");
    assert_eq!(run("(< 1)"), "#t");
    assert_eq!(run("(= 2 2 2)"), "#t");
    assert_eq!(run("(= 2 2 3)"), "#f");
    assert_eq!(run("(< 1 2 3)"), "#t");
    assert_eq!(run("(< 1 3 2)"), "#f");
    assert_eq!(run("(> 3 2 1)"), "#t");
    assert_eq!(run("(>= 3 3 1)"), "#t");
    assert_eq!(run("(<= 1 1 0)"), "#f");

    // The walk stops at the first failing pair.
    assert_eq!(run("(< 2 1 a)"), "#f");
    assert!(matches!(
        fail("(< 1 2 a)").kind,
        ErrKind::InvalidArgument { .. }
    ));
    assert_eq!(run("(< a)"), "#t");
    assert_eq!(run("(= #t)"), "#t");
}

#[test]
fn type_predicates() {
    assert_eq!(run("(number? 1)"), "#t");
    assert_eq!(run("(number? 'a)"), "#f");
    assert_eq!(run("(number? 1 2)"), "#f");
    assert_eq!(run("(number?)"), "#f");

    assert_eq!(run("(boolean? #t)"), "#t");
    assert_eq!(run("(boolean? #f)"), "#t");
    assert_eq!(run("(boolean? 0)"), "#f");
    assert_eq!(run("(boolean? '#true)"), "#f");
}

#[test]
fn not() {
    assert_eq!(run("(not #f)"), "#t");
    assert_eq!(run("(not #t)"), "#f");
    assert_eq!(run("(not 0)"), "#f");
    assert_eq!(run("(not '())"), "#f");
    assert!(matches!(
        fail("(not)").kind,
        ErrKind::WrongArgumentCount { given: 0, .. }
    ));
    assert!(matches!(
        fail("(not #f #f)").kind,
        ErrKind::WrongArgumentCount { given: 2, .. }
    ));
}

#[test]
fn and_or() {
    assert_eq!(run("(and)"), "#t");
    assert_eq!(run("(and 1 2 3)"), "3");
    assert_eq!(run("(and 1 #f 3)"), "#f");
    assert_eq!(run("(or)"), "#f");
    assert_eq!(run("(or #f #f)"), "#f");
    assert_eq!(run("(or #f 2 3)"), "2");
    assert_eq!(run("(and (< 1 2) (> 3 2))"), "#t");
    assert_eq!(run("(or (< 2 1) (+ 1 1))"), "2");
}

#[test]
fn and_or_short_circuit() {
    assert_eq!(run("(and #f (/ 1 0))"), "#f");
    assert_eq!(run("(or 1 (/ 1 0))"), "1");
    assert_eq!(run("(and #f (foo))"), "#f");
    assert!(matches!(fail("(and 1 (/ 1 0))").kind, ErrKind::DivisionByZero));
    assert!(matches!(fail("(or #f (/ 1 0))").kind, ErrKind::DivisionByZero));
}

#[test]
fn and_or_invalid_operands() {
    assert!(matches!(
        fail("(and 1 ())").kind,
        ErrKind::InvalidArgument { .. }
    ));
    assert!(matches!(
        fail("(or '())").kind,
        ErrKind::InvalidArgument { .. }
    ));
    assert!(matches!(
        fail("(and (foo 1))").kind,
        ErrKind::InvalidSyntax(_)
    ));
}

#[test]
fn pair_predicate() {
    assert_eq!(run("(pair? (cons 1 2))"), "#t");
    assert_eq!(run("(pair? '(1 2))"), "#t");
    assert_eq!(run("(pair? '(a . b))"), "#t");
    assert_eq!(run("(pair? '(1))"), "#f");
    assert_eq!(run("(pair? '(1 2 3))"), "#f");
    assert_eq!(run("(pair? '((1) 2))"), "#f");
    assert_eq!(run("(pair? '(1 (2)))"), "#f");
    assert_eq!(run("(pair? 1)"), "#f");
    assert_eq!(run("(pair? '())"), "#f");
    assert_eq!(run("(pair? '(1 2) '(3 4))"), "#f");
    assert!(matches!(
        fail("(pair? '(() 1))").kind,
        ErrKind::InvalidSyntax(_)
    ));
}

#[test]
fn null_and_list_predicates() {
    assert_eq!(run("(null? '())"), "#t");
    assert_eq!(run("(null? ())"), "#t");
    assert_eq!(run("(null? '(1))"), "#f");
    assert_eq!(run("(null? 0)"), "#f");
    assert_eq!(run("(null?)"), "#f");

    assert_eq!(run("(list? '())"), "#t");
    assert_eq!(run("(list? '(1 2))"), "#t");
    assert_eq!(run("(list? '(1 . 2))"), "#f");
    assert_eq!(run("(list? 1)"), "#f");
}

#[test]
fn cons_car_cdr() {
    assert_eq!(run("(cons 1 2)"), "(1 . 2)");
    assert_eq!(run("(cons 'a #t)"), "(a . #t)");
    assert_eq!(run("(car (cons 1 2))"), "1");
    assert_eq!(run("(cdr (cons 1 2))"), "2");
    assert_eq!(run("(car '(1 2 3))"), "1");
    assert_eq!(run("(cdr '(1 2 3))"), "(2 3)");
    assert_eq!(run("(cdr '(1))"), "()");

    assert!(matches!(
        fail("(cons 1)").kind,
        ErrKind::WrongArgumentCount { given: 1, .. }
    ));
    assert!(matches!(
        fail("(cons 1 '(2))").kind,
        ErrKind::InvalidArgument { .. }
    ));
    assert!(matches!(
        fail("(cons 1 '())").kind,
        ErrKind::InvalidArgument { .. }
    ));
    assert!(matches!(fail("(car 1)").kind, ErrKind::InvalidArgument { .. }));
    assert!(matches!(fail("(car '())").kind, ErrKind::InvalidArgument { .. }));
    assert!(matches!(
        fail("(cdr '(1) '(2))").kind,
        ErrKind::WrongArgumentCount { given: 2, .. }
    ));
}

#[test]
fn list() {
    assert_eq!(run("(list)"), "()");
    assert_eq!(run("(list 1 2 3)"), "(1 2 3)");
    assert_eq!(run("(list 1 (+ 1 1) '(3))"), "(1 2 (3))");
    assert!(matches!(
        fail("(list 1 . 2)").kind,
        ErrKind::InvalidArgument { .. }
    ));
}

#[test]
fn list_ref() {
    assert_eq!(run("(list-ref '(10 20 30) 0)"), "10");
    assert_eq!(run("(list-ref (list 10 20 30) 2)"), "30");
    assert_eq!(run("(list-ref '((1) 2) 0)"), "(1)");

    assert!(matches!(
        fail("(list-ref '(1 2) 2)").kind,
        ErrKind::IndexOutOfRange { index: 2 }
    ));
    assert!(matches!(
        fail("(list-ref '(1 2) -1)").kind,
        ErrKind::IndexOutOfRange { index: -1 }
    ));
    assert!(matches!(
        fail("(list-ref '() 0)").kind,
        ErrKind::InvalidArgument { .. }
    ));
    assert!(matches!(
        fail("(list-ref '(1) a)").kind,
        ErrKind::InvalidArgument { .. }
    ));
    assert!(matches!(
        fail("(list-ref '(1))").kind,
        ErrKind::WrongArgumentCount { given: 1, .. }
    ));
}

#[test]
fn list_tail() {
    assert_eq!(run("(list-tail '(1 2 3) 0)"), "(1 2 3)");
    assert_eq!(run("(list-tail '(1 2 3) 1)"), "(2 3)");
    assert_eq!(run("(list-tail '(1 2 3) 3)"), "()");
    assert_eq!(run("(list-tail '() 0)"), "()");
    assert_eq!(run("(list-tail '(1 2 . 3) 2)"), "3");

    assert!(matches!(
        fail("(list-tail '(1 2 3) 4)").kind,
        ErrKind::IndexOutOfRange { index: 4 }
    ));
    assert!(matches!(
        fail("(list-tail 5 0)").kind,
        ErrKind::InvalidArgument { .. }
    ));
}

#[test]
fn errors_name_their_builtin() {
    assert_eq!(fail("(/ 1 0)").builtin(), Some("/"));
    assert_eq!(fail("(car 1)").builtin(), Some("car"));
    // The innermost builtin keeps the blame.
    assert_eq!(fail("(+ 1 (list-ref '(1) 5))").builtin(), Some("list-ref"));
    assert_eq!(fail("(and 1 (/ 1 0))").builtin(), Some("/"));
}
