//! The value module defines [`Value`], the runtime value domain of
//! Rinha programs.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::ast::Term;

use super::environment::Environment;

/// A Rinha runtime value. Every operation that requires a specific tag
/// fails with a `TypeError` rather than coercing, except `Add`'s
/// string-coercion overload (handled in `operations::infix`).
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer. spec.md allows fixed-width integers as
    /// a conforming subset of arbitrary precision (see DESIGN.md).
    Int(i64),
    /// Immutable Unicode text.
    String(String),
    Boolean(bool),
    /// A pair, eagerly evaluated, arbitrarily nestable.
    Tuple(Box<Value>, Box<Value>),
    /// A function value capturing its defining scope by reference.
    Closure {
        parameters: Rc<Vec<String>>,
        body: Rc<Term>,
        env: Rc<RefCell<Environment>>,
    },
}

impl PartialEq for Value {
    /// Structural equality, used by the `Eq`/`Neq` operators. Only
    /// `int` and `string` ever reach this via `Binary` (operations.rs
    /// rejects other tag pairs before comparing), but the impl is total
    /// so `Value` can be used in asserts throughout the test suite.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Tuple(a1, a2), Value::Tuple(b1, b2)) => a1 == b1 && a2 == b2,
            // closures are never structurally comparable
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", super::printer::render(self))
    }
}

impl Value {
    /// The tag name used in type-error messages, e.g. "int", "closure".
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::String(_) => "string",
            Value::Boolean(_) => "boolean",
            Value::Tuple(_, _) => "tuple",
            Value::Closure { .. } => "closure",
        }
    }
}
