//! The error module defines the Rinha runtime error kinds.

use thiserror::Error;

use crate::ast::Location;

/// The six kinds of error the evaluator (or the surrounding JSON
/// decode step) can raise. Names are indicative, not wire-visible.
#[derive(Debug, Error, Clone)]
pub enum ErrorKind {
    /// Unknown `kind` or a missing required field in the AST JSON.
    #[error("malformed AST: {0}")]
    MalformedAst(String),
    /// A `Var` lookup missed in every frame of the scope chain.
    #[error("undefined variable `{0}`")]
    UndefinedVariable(String),
    /// A value's tag was incompatible with the operation applied to it.
    #[error("type error: {0}")]
    TypeError(String),
    /// A `Call` supplied the wrong number of arguments for the closure.
    #[error("wrong number of arguments: expected {expected}, got {got}")]
    ArityError { expected: usize, got: usize },
    /// `Div` or `Rem` with a zero right-hand side.
    #[error("division by zero")]
    DivisionByZero,
    /// I/O failure or other host-level error.
    #[error("{0}")]
    HostError(String),
}

/// A runtime error, annotated with the location of the term that
/// raised it so diagnostics can point back into the source.
#[derive(Debug, Error, Clone)]
#[error("{location}: {kind}")]
pub struct EvalError {
    pub kind: ErrorKind,
    pub location: Location,
}

impl EvalError {
    pub fn new(kind: ErrorKind, location: Location) -> EvalError {
        EvalError { kind, location }
    }
}

impl From<std::io::Error> for EvalError {
    fn from(err: std::io::Error) -> Self {
        EvalError::new(
            ErrorKind::HostError(err.to_string()),
            Location {
                filename: String::new(),
                start: 0,
                end: 0,
            },
        )
    }
}

impl From<serde_json::Error> for EvalError {
    fn from(err: serde_json::Error) -> Self {
        EvalError::new(
            ErrorKind::MalformedAst(err.to_string()),
            Location {
                filename: String::new(),
                start: 0,
                end: 0,
            },
        )
    }
}
