use minischeme::prelude::*;


pub fn setup() -> Interpreter {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}

    Interpreter::new()
}

pub fn result<S: AsRef<str>>(interpreter: &Interpreter, s: S) -> String {
    match interpreter.run(s.as_ref()) {
        Ok(result) => result,
        Err(err) => panic!("{}: {}", s.as_ref(), err),
    }
}

pub fn results<S: AsRef<str>>(interpreter: &Interpreter, sources: &[S]) -> Vec<String> {
    sources.iter().map(|s| result(interpreter, s)).collect()
}

#[allow(dead_code)]
pub fn syntax_error<S: AsRef<str>>(interpreter: &Interpreter, s: S) -> SyntaxError {
    match interpreter.run(s.as_ref()) {
        Err(Error::Syntax(err)) => err,
        other => panic!("{}: expected a syntax error, got {:?}", s.as_ref(), other),
    }
}

#[allow(dead_code)]
pub fn runtime_error<S: AsRef<str>>(interpreter: &Interpreter, s: S) -> LangErr {
    match interpreter.run(s.as_ref()) {
        Err(Error::Runtime(err)) => err,
        other => panic!("{}: expected a runtime error, got {:?}", s.as_ref(), other),
    }
}

#[allow(dead_code)]
pub fn runtime_kind<S: AsRef<str>>(interpreter: &Interpreter, s: S) -> ErrKind {
    runtime_error(interpreter, s).kind
}
