//! Statement evaluation

use crate::ast::Stmt;
use crate::environment::EnvRef;
use crate::interpreter::{ControlFlow, Interpreter};
use crate::value::{RuntimeError, Value};

impl Interpreter {
    /// Evaluate a statement
    pub(super) fn eval_statement(
        &mut self,
        stmt: &Stmt,
        env: &EnvRef,
    ) -> Result<Value, RuntimeError> {
        match stmt {
            Stmt::Let(decl) => {
                let value = self.eval_expr(&decl.value, env)?;
                env.borrow_mut().set(decl.name.name.clone(), value.clone());
                Ok(value)
            }
            Stmt::Return(ret) => {
                let value = self.eval_expr(&ret.value, env)?;
                self.control_flow = ControlFlow::Return(value);
                Ok(Value::Null)
            }
            Stmt::Expr(expr_stmt) => self.eval_expr(&expr_stmt.expr, env),
        }
    }
}
