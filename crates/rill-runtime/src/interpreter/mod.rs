//! AST interpreter (tree-walking)
//!
//! Direct AST evaluation against shared lexical environments. Runtime errors
//! short-circuit through `Result` and `?`; early returns travel as a
//! `ControlFlow` signal that bubbles through nested blocks until the
//! enclosing function call (or the program top level) unwraps it.

mod expr;
mod stmt;

use crate::ast::{Block, Program};
use crate::environment::{EnvRef, Environment};
use crate::value::{RuntimeError, Value};

/// Maximum user-function call depth before evaluation errors out.
/// Bounds host stack usage; source nesting this deep is runaway recursion.
pub(super) const MAX_CALL_DEPTH: usize = 500;

/// Control flow signal for early return
#[derive(Debug, Clone, PartialEq)]
pub(super) enum ControlFlow {
    None,
    Return(Value),
}

/// Interpreter state
pub struct Interpreter {
    /// Root environment; persists across `eval` calls (REPL state)
    env: EnvRef,
    /// Pending early return, if any
    control_flow: ControlFlow,
    /// Current user-function call depth
    call_depth: usize,
}

impl Interpreter {
    /// Create a new interpreter with an empty root environment
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
            control_flow: ControlFlow::None,
            call_depth: 0,
        }
    }

    /// Evaluate a program against the root environment
    ///
    /// A top-level `return` stops evaluation and yields its payload;
    /// otherwise the value of the last statement is returned.
    pub fn eval(&mut self, program: &Program) -> Result<Value, RuntimeError> {
        self.control_flow = ControlFlow::None;
        let env = self.env.clone();

        let mut last_value = Value::Null;
        for stmt in &program.statements {
            last_value = self.eval_statement(stmt, &env)?;

            if let ControlFlow::Return(value) =
                std::mem::replace(&mut self.control_flow, ControlFlow::None)
            {
                return Ok(value);
            }
        }

        Ok(last_value)
    }

    /// Evaluate a block in the given environment
    ///
    /// Blocks do not open a scope of their own; only function calls do.
    /// A pending return stops the fold but is NOT unwrapped here, so it
    /// bubbles past nested blocks until the enclosing call catches it.
    pub(super) fn eval_block(
        &mut self,
        block: &Block,
        env: &EnvRef,
    ) -> Result<Value, RuntimeError> {
        let mut last_value = Value::Null;
        for stmt in &block.statements {
            last_value = self.eval_statement(stmt, env)?;

            if self.control_flow != ControlFlow::None {
                break;
            }
        }

        Ok(last_value)
    }

    /// Bind a name in the root environment (embedding API, tests)
    pub fn define_global(&mut self, name: impl Into<String>, value: Value) {
        self.env.borrow_mut().set(name, value);
    }

    /// Handle to the root environment
    pub fn env(&self) -> EnvRef {
        self.env.clone()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
