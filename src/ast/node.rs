//! The AST node types that make up a Rinha program.
//!
//! These mirror the JSON schema produced by the Rinha parser: every
//! [`Term`] is a tagged union keyed on `kind`, decoded directly by
//! `serde` instead of being built up from a parse tree ourselves —
//! there is no Rinha source text here, only pre-parsed AST.

use serde::Deserialize;
use std::fmt;

/// A span in the original Rinha source, kept only for diagnostics.
#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub filename: String,
    pub start: usize,
    pub end: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.filename, self.start, self.end)
    }
}

/// A function parameter or `Let` binding name, with its own location.
#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    pub text: String,
    pub location: Location,
}

/// The top-level unit the interpreter is handed: a name, the program's
/// single expression, and a location for the whole file.
#[derive(Debug, Clone, Deserialize)]
pub struct File {
    pub name: String,
    pub expression: Term,
    pub location: Location,
}

/// The thirteen binary operators Rinha supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    Neq,
    Lt,
    Gt,
    Lte,
    Gte,
    And,
    Or,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A node in the Rinha AST, discriminated by `kind`.
///
/// `Box` breaks the otherwise-infinite recursive type; every variant
/// also carries the [`Location`] spec.md requires for diagnostics, even
/// though the evaluator itself only reads it to annotate errors.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum Term {
    Int {
        value: i64,
        location: Location,
    },
    Str {
        value: String,
        location: Location,
    },
    Bool {
        value: bool,
        location: Location,
    },
    Tuple {
        first: Box<Term>,
        second: Box<Term>,
        location: Location,
    },
    Var {
        text: String,
        location: Location,
    },
    Let {
        name: Parameter,
        value: Box<Term>,
        next: Box<Term>,
        location: Location,
    },
    If {
        condition: Box<Term>,
        then: Box<Term>,
        otherwise: Box<Term>,
        location: Location,
    },
    Function {
        parameters: Vec<Parameter>,
        value: Box<Term>,
        location: Location,
    },
    Call {
        callee: Box<Term>,
        arguments: Vec<Term>,
        location: Location,
    },
    Binary {
        lhs: Box<Term>,
        op: BinaryOp,
        rhs: Box<Term>,
        location: Location,
    },
    Print {
        value: Box<Term>,
        location: Location,
    },
    First {
        value: Box<Term>,
        location: Location,
    },
    Second {
        value: Box<Term>,
        location: Location,
    },
}

impl Term {
    /// The location carried by this term, regardless of kind.
    pub fn location(&self) -> &Location {
        match self {
            Term::Int { location, .. }
            | Term::Str { location, .. }
            | Term::Bool { location, .. }
            | Term::Tuple { location, .. }
            | Term::Var { location, .. }
            | Term::Let { location, .. }
            | Term::If { location, .. }
            | Term::Function { location, .. }
            | Term::Call { location, .. }
            | Term::Binary { location, .. }
            | Term::Print { location, .. }
            | Term::First { location, .. }
            | Term::Second { location, .. } => location,
        }
    }

    /// The `kind` tag name, as it appears in the AST JSON. Used only for
    /// logging; the match dispatch itself never goes through this.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Term::Int { .. } => "Int",
            Term::Str { .. } => "Str",
            Term::Bool { .. } => "Bool",
            Term::Tuple { .. } => "Tuple",
            Term::Var { .. } => "Var",
            Term::Let { .. } => "Let",
            Term::If { .. } => "If",
            Term::Function { .. } => "Function",
            Term::Call { .. } => "Call",
            Term::Binary { .. } => "Binary",
            Term::Print { .. } => "Print",
            Term::First { .. } => "First",
            Term::Second { .. } => "Second",
        }
    }
}
