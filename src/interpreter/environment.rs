//! The environment module defines the scope chain that binds names to
//! values in Rinha.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::error::{ErrorKind, EvalError};
use super::value::Value;
use crate::ast::Location;

/// A single scope frame: its own bindings, plus an optional parent.
///
/// The global (top-level) environment has no parent and starts empty —
/// Rinha has no standard library of bound names, only the `print`,
/// `first`, and `second` AST node kinds handled directly by the reducer.
#[derive(Debug)]
pub struct Environment {
    parent: Option<Rc<RefCell<Environment>>>,
    bindings: HashMap<String, Value>,
}

impl Environment {
    /// Returns a fresh, empty top-level environment.
    pub fn new() -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment {
            parent: None,
            bindings: HashMap::new(),
        }))
    }

    /// Returns a new scope frame whose parent is `outer`.
    ///
    /// Extension never mutates `outer`: this is a fresh `HashMap`
    /// layered on top of it via the parent link, so a later `bind` on
    /// the child is invisible to `outer` and to anything that already
    /// holds a clone of `outer`'s `Rc`.
    pub fn child(outer: &Rc<RefCell<Environment>>) -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment {
            parent: Some(outer.clone()),
            bindings: HashMap::new(),
        }))
    }

    /// Binds (or rebinds) `name` to `value` in this frame.
    pub fn bind(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Looks up `name`, walking outward through parent frames.
    /// Returns `UndefinedVariable` if no frame in the chain binds it.
    pub fn get(&self, name: &str, location: &Location) -> Result<Value, EvalError> {
        if let Some(value) = self.bindings.get(name) {
            return Ok(value.clone());
        }

        match &self.parent {
            Some(parent) => parent.borrow().get(name, location),
            None => Err(EvalError::new(
                ErrorKind::UndefinedVariable(name.to_string()),
                location.clone(),
            )),
        }
    }
}
