//! `rinha` evaluates a pre-parsed Rinha AST, supplied as a JSON file,
//! and executes its side effects (principally `print`).

use std::fs;

pub mod ast;
pub mod interpreter;

use ast::File;
use interpreter::error::{ErrorKind, EvalError};
use interpreter::{environment::Environment, Value};

/// Parsed command-line configuration: the path to the AST JSON file.
pub struct Config {
    pub path: String,
}

impl Config {
    /// Builds a `Config` from `env::args()`-shaped arguments.
    /// `args[0]` is the binary name; `args[1]` must be the AST path.
    pub fn new(args: &[String]) -> Result<Config, String> {
        if args.len() < 2 {
            return Err("usage: rinha <path-to-ast.json>".to_string());
        }

        Ok(Config {
            path: args[1].clone(),
        })
    }
}

/// Reads, decodes, and evaluates the program described by `config`.
/// Returns the top-level expression's value; any `Print` side effects
/// have already happened by the time this returns.
pub fn run(config: &Config) -> Result<Value, EvalError> {
    let contents = fs::read_to_string(&config.path)?;
    let file: File = serde_json::from_str(&contents).map_err(|err| EvalError {
        kind: ErrorKind::MalformedAst(err.to_string()),
        location: ast::Location {
            filename: config.path.clone(),
            start: 0,
            end: 0,
        },
    })?;

    tracing::debug!(file = %file.name, "evaluating program");

    let env = Environment::new();
    interpreter::evaluate(&file.expression, &env)
}

/// Convenience used by tests and benches that already hold a parsed
/// [`ast::Term`] and just want to evaluate it in a fresh environment.
pub fn eval(expression: &ast::Term) -> Result<Value, EvalError> {
    interpreter::evaluate(expression, &Environment::new())
}
