//! The operations module defines the typed binary operator dispatcher:
//! `Add`'s string-coercing overload, and the per-operator operand-type
//! rules for the remaining twelve operators.

use crate::ast::{BinaryOp, Location};

use super::error::{ErrorKind, EvalError};
use super::printer::render;
use super::value::Value;

/// Evaluates `op` over already-evaluated `lhs`/`rhs`. `location` is the
/// `Binary` term's own location, attached to any error raised.
pub fn infix(op: BinaryOp, lhs: Value, rhs: Value, location: &Location) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Add => add(lhs, rhs, location),
        BinaryOp::Sub => arithmetic(lhs, rhs, location, |a, b| Ok(Value::Int(a - b))),
        BinaryOp::Mul => arithmetic(lhs, rhs, location, |a, b| Ok(Value::Int(a * b))),
        BinaryOp::Div => arithmetic(lhs, rhs, location, |a, b| {
            if b == 0 {
                Err(type_free_error(ErrorKind::DivisionByZero, location))
            } else {
                Ok(Value::Int(a / b))
            }
        }),
        BinaryOp::Rem => arithmetic(lhs, rhs, location, |a, b| {
            if b == 0 {
                Err(type_free_error(ErrorKind::DivisionByZero, location))
            } else {
                Ok(Value::Int(a % b))
            }
        }),
        BinaryOp::Lt => ordering(lhs, rhs, location, |a, b| a < b),
        BinaryOp::Gt => ordering(lhs, rhs, location, |a, b| a > b),
        BinaryOp::Lte => ordering(lhs, rhs, location, |a, b| a <= b),
        BinaryOp::Gte => ordering(lhs, rhs, location, |a, b| a >= b),
        BinaryOp::Eq => equality(lhs, rhs, location, |eq| eq),
        BinaryOp::Neq => equality(lhs, rhs, location, |eq| !eq),
        BinaryOp::And => logical(lhs, rhs, location, |a, b| a && b),
        BinaryOp::Or => logical(lhs, rhs, location, |a, b| a || b),
    }
}

/// `int + int` adds, `string + string` concatenates, and a mixed
/// `int`/`string` pair concatenates after rendering the non-string
/// side with the printer's scalar rules. Any `boolean`, `tuple`, or
/// `closure` operand is a `TypeError`.
fn add(lhs: Value, rhs: Value, location: &Location) -> Result<Value, EvalError> {
    match (&lhs, &rhs) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a + b)),
        (Value::String(_), _) | (_, Value::String(_)) => match (&lhs, &rhs) {
            (Value::Boolean(_), _)
            | (_, Value::Boolean(_))
            | (Value::Tuple(_, _), _)
            | (_, Value::Tuple(_, _))
            | (Value::Closure { .. }, _)
            | (_, Value::Closure { .. }) => Err(type_error_pair("Add", &lhs, &rhs, location)),
            _ => Ok(Value::String(format!("{}{}", render(&lhs), render(&rhs)))),
        },
        _ => Err(type_error_pair("Add", &lhs, &rhs, location)),
    }
}

fn arithmetic(
    lhs: Value,
    rhs: Value,
    location: &Location,
    op: impl FnOnce(i64, i64) -> Result<Value, EvalError>,
) -> Result<Value, EvalError> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => op(a, b),
        (lhs, rhs) => Err(type_error_pair("arithmetic", &lhs, &rhs, location)),
    }
}

fn ordering(
    lhs: Value,
    rhs: Value,
    location: &Location,
    cmp: impl FnOnce(i64, i64) -> bool,
) -> Result<Value, EvalError> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Boolean(cmp(a, b))),
        (lhs, rhs) => Err(type_error_pair("ordering", &lhs, &rhs, location)),
    }
}

/// Both operands must share a tag, and that tag must be `int` or
/// `string`; any other tag (or a mismatch) is a `TypeError`.
fn equality(
    lhs: Value,
    rhs: Value,
    location: &Location,
    finish: impl FnOnce(bool) -> bool,
) -> Result<Value, EvalError> {
    let comparable = matches!(
        (&lhs, &rhs),
        (Value::Int(_), Value::Int(_)) | (Value::String(_), Value::String(_))
    );
    if !comparable {
        return Err(type_error_pair("equality", &lhs, &rhs, location));
    }
    Ok(Value::Boolean(finish(lhs == rhs)))
}

fn logical(
    lhs: Value,
    rhs: Value,
    location: &Location,
    op: impl FnOnce(bool, bool) -> bool,
) -> Result<Value, EvalError> {
    match (lhs, rhs) {
        (Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(op(a, b))),
        (lhs, rhs) => Err(type_error_pair("logical", &lhs, &rhs, location)),
    }
}

fn type_error_pair(op: &str, lhs: &Value, rhs: &Value, location: &Location) -> EvalError {
    type_free_error(
        ErrorKind::TypeError(format!(
            "{} is not defined for {} and {}",
            op,
            lhs.type_name(),
            rhs.type_name()
        )),
        location,
    )
}

fn type_free_error(kind: ErrorKind, location: &Location) -> EvalError {
    EvalError::new(kind, location.clone())
}
