//! Shared helpers for building Rinha AST fixtures without a parser —
//! there isn't one; Rinha's AST arrives pre-parsed as JSON, so these
//! tests construct it directly the way the real JSON decoder would.
#![allow(dead_code)]

use rinha::ast::{BinaryOp, Location, Parameter, Term};
use rinha::interpreter::{EvalError, Value};

pub fn loc() -> Location {
    Location {
        filename: "test".to_string(),
        start: 0,
        end: 0,
    }
}

pub fn int(value: i64) -> Term {
    Term::Int {
        value,
        location: loc(),
    }
}

pub fn string(value: &str) -> Term {
    Term::Str {
        value: value.to_string(),
        location: loc(),
    }
}

pub fn boolean(value: bool) -> Term {
    Term::Bool {
        value,
        location: loc(),
    }
}

pub fn var(text: &str) -> Term {
    Term::Var {
        text: text.to_string(),
        location: loc(),
    }
}

pub fn param(text: &str) -> Parameter {
    Parameter {
        text: text.to_string(),
        location: loc(),
    }
}

pub fn binary(lhs: Term, op: BinaryOp, rhs: Term) -> Term {
    Term::Binary {
        lhs: Box::new(lhs),
        op,
        rhs: Box::new(rhs),
        location: loc(),
    }
}

pub fn call(callee: Term, arguments: Vec<Term>) -> Term {
    Term::Call {
        callee: Box::new(callee),
        arguments,
        location: loc(),
    }
}

pub fn function(parameters: Vec<&str>, body: Term) -> Term {
    Term::Function {
        parameters: parameters.into_iter().map(param).collect(),
        value: Box::new(body),
        location: loc(),
    }
}

pub fn let_in(name: &str, value: Term, next: Term) -> Term {
    Term::Let {
        name: param(name),
        value: Box::new(value),
        next: Box::new(next),
        location: loc(),
    }
}

pub fn if_then_else(condition: Term, then: Term, otherwise: Term) -> Term {
    Term::If {
        condition: Box::new(condition),
        then: Box::new(then),
        otherwise: Box::new(otherwise),
        location: loc(),
    }
}

pub fn tuple(first: Term, second: Term) -> Term {
    Term::Tuple {
        first: Box::new(first),
        second: Box::new(second),
        location: loc(),
    }
}

pub fn first(value: Term) -> Term {
    Term::First {
        value: Box::new(value),
        location: loc(),
    }
}

pub fn second(value: Term) -> Term {
    Term::Second {
        value: Box::new(value),
        location: loc(),
    }
}

pub fn print(value: Term) -> Term {
    Term::Print {
        value: Box::new(value),
        location: loc(),
    }
}

pub fn run(term: &Term) -> Result<Value, EvalError> {
    rinha::eval(term)
}
