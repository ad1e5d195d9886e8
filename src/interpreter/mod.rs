//! The interpreter module defines the main entrypoint to the Rinha
//! evaluator, `evaluate`, and the per-kind handlers dispatched from it.

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::{BinaryOp as AstBinaryOp, Term};

pub mod environment;
pub mod error;
pub mod operations;
pub mod printer;
pub mod value;

use environment::Environment;
pub use error::{ErrorKind, EvalError};
pub use value::Value;

/// Evaluates `term` under `env`. Pure with respect to `env` — no
/// handler mutates a frame it didn't itself create — except `Print`,
/// whose side effect is writing a line to stdout.
pub fn evaluate(term: &Term, env: &Rc<RefCell<Environment>>) -> Result<Value, EvalError> {
    tracing::trace!(kind = term.kind_name(), location = %term.location(), "dispatch");

    match term {
        Term::Int { value, .. } => Ok(Value::Int(*value)),
        Term::Str { value, .. } => Ok(Value::String(value.clone())),
        Term::Bool { value, .. } => Ok(Value::Boolean(*value)),

        Term::Tuple { first, second, .. } => {
            let first = evaluate(first, env)?;
            let second = evaluate(second, env)?;
            Ok(Value::Tuple(Box::new(first), Box::new(second)))
        }

        Term::Var { text, location } => env.borrow().get(text, location),

        Term::If {
            condition,
            then,
            otherwise,
            ..
        } => eval_if(condition, then, otherwise, env),

        Term::Let {
            name, value, next, ..
        } => eval_let(name, value, next, env),

        Term::Function {
            parameters, value, ..
        } => Ok(Value::Closure {
            parameters: Rc::new(parameters.iter().map(|p| p.text.clone()).collect()),
            body: Rc::new((**value).clone()),
            env: env.clone(),
        }),

        Term::Call {
            callee, arguments, ..
        } => eval_call(callee, arguments, env),

        Term::Binary {
            lhs,
            op,
            rhs,
            location,
        } => eval_binary(lhs, *op, rhs, location, env),

        Term::Print { value, .. } => eval_print(value, env),

        Term::First { value, location } => {
            eval_projection(value, location, env, |first, _| first)
        }
        Term::Second { value, location } => {
            eval_projection(value, location, env, |_, second| second)
        }
    }
}

fn eval_if(
    condition: &Term,
    then: &Term,
    otherwise: &Term,
    env: &Rc<RefCell<Environment>>,
) -> Result<Value, EvalError> {
    match evaluate(condition, env)? {
        Value::Boolean(true) => evaluate(then, env),
        Value::Boolean(false) => evaluate(otherwise, env),
        other => Err(type_error(condition.location(), &other)),
    }
}

/// Extends `env` with a fresh child frame, evaluates `value` in it, and
/// *then* binds `name` there — the shared `Rc<RefCell<_>>` frame is
/// what the binding and any closure created while evaluating `value`
/// both point to, so a closure that recurses through its own `Let`
/// name sees itself once the bind below runs (see DESIGN.md).
fn eval_let(
    name: &crate::ast::Parameter,
    value: &Term,
    next: &Term,
    env: &Rc<RefCell<Environment>>,
) -> Result<Value, EvalError> {
    let scope = Environment::child(env);
    let bound = evaluate(value, &scope)?;
    scope.borrow_mut().bind(&name.text, bound);
    evaluate(next, &scope)
}

fn eval_call(
    callee: &Term,
    arguments: &[Term],
    env: &Rc<RefCell<Environment>>,
) -> Result<Value, EvalError> {
    let callee_value = evaluate(callee, env)?;

    let (parameters, body, captured_env) = match callee_value {
        Value::Closure {
            parameters,
            body,
            env,
        } => (parameters, body, env),
        other => return Err(type_error(callee.location(), &other)),
    };

    if parameters.len() != arguments.len() {
        return Err(EvalError::new(
            ErrorKind::ArityError {
                expected: parameters.len(),
                got: arguments.len(),
            },
            callee.location().clone(),
        ));
    }

    // strict, left-to-right argument evaluation, in the caller's scope
    let mut actuals = Vec::with_capacity(arguments.len());
    for argument in arguments {
        actuals.push(evaluate(argument, env)?);
    }

    // the call environment extends the closure's *captured* scope, not
    // the caller's — bindings present only in the caller must not leak in
    let call_scope = Environment::child(&captured_env);
    for (parameter, actual) in parameters.iter().zip(actuals) {
        call_scope.borrow_mut().bind(parameter, actual);
    }

    tracing::debug!(arity = parameters.len(), location = %callee.location(), "invoking closure");
    evaluate(&body, &call_scope)
}

fn eval_binary(
    lhs: &Term,
    op: AstBinaryOp,
    rhs: &Term,
    location: &crate::ast::Location,
    env: &Rc<RefCell<Environment>>,
) -> Result<Value, EvalError> {
    // both sides are always evaluated, left-to-right — no short-circuit,
    // including for `And`/`Or` (spec.md §9: a deliberate design choice)
    let lhs_value = evaluate(lhs, env)?;
    let rhs_value = evaluate(rhs, env)?;
    operations::infix(op, lhs_value, rhs_value, location)
}

fn eval_print(value: &Term, env: &Rc<RefCell<Environment>>) -> Result<Value, EvalError> {
    let result = evaluate(value, env)?;
    println!("{}", printer::render(&result));
    Ok(result)
}

fn eval_projection(
    value: &Term,
    location: &crate::ast::Location,
    env: &Rc<RefCell<Environment>>,
    pick: impl FnOnce(Value, Value) -> Value,
) -> Result<Value, EvalError> {
    match evaluate(value, env)? {
        Value::Tuple(first, second) => Ok(pick(*first, *second)),
        other => Err(type_error(location, &other)),
    }
}

fn type_error(location: &crate::ast::Location, value: &Value) -> EvalError {
    EvalError::new(
        ErrorKind::TypeError(format!("unexpected {}", value.type_name())),
        location.clone(),
    )
}
