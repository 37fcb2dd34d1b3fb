//! Lexical environments
//!
//! A name-to-value map with an optional outer link: the activation record of
//! a function call. Lookup walks outward through enclosing scopes; writes go
//! to the current scope only. Environments are shared via `Rc<RefCell<_>>`
//! because closures must keep their defining scope alive for as long as the
//! function value is reachable. Outer links form a tree: children point at
//! parents, never the reverse.

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared handle to an environment
pub type EnvRef = Rc<RefCell<Environment>>;

/// A single lexical scope
#[derive(Debug, Default)]
pub struct Environment {
    bindings: HashMap<String, Value>,
    outer: Option<EnvRef>,
}

impl Environment {
    /// Create a fresh root environment
    pub fn new() -> EnvRef {
        Rc::new(RefCell::new(Environment {
            bindings: HashMap::new(),
            outer: None,
        }))
    }

    /// Create an environment enclosed by `outer`
    ///
    /// Used as the activation record of a function call; `outer` is the
    /// function's captured scope, not the caller's.
    pub fn new_enclosed(outer: EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Environment {
            bindings: HashMap::new(),
            outer: Some(outer),
        }))
    }

    /// Look up `name` in this scope or the nearest enclosing scope
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.borrow().get(name))
    }

    /// Bind `name` in this scope
    ///
    /// Never touches enclosing scopes; an inner binding shadows an outer one
    /// purely through lookup order.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }
}
