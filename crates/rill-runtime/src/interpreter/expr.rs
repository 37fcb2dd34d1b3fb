//! Expression evaluation

use crate::ast::*;
use crate::environment::{EnvRef, Environment};
use crate::interpreter::{ControlFlow, Interpreter};
use crate::span::Span;
use crate::stdlib;
use crate::value::{FunctionObject, HashObject, RuntimeError, Value};
use std::collections::HashMap;
use std::rc::Rc;

impl Interpreter {
    /// Evaluate an expression
    pub(super) fn eval_expr(&mut self, expr: &Expr, env: &EnvRef) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Identifier(id) => self.eval_identifier(id, env),
            Expr::IntegerLiteral(i) => Ok(Value::Integer(i.value)),
            Expr::BooleanLiteral(b) => Ok(Value::Bool(b.value)),
            Expr::StringLiteral(s) => Ok(Value::string(s.value.clone())),
            Expr::ArrayLiteral(arr) => self.eval_array_literal(arr, env),
            Expr::HashLiteral(hash) => self.eval_hash_literal(hash, env),
            Expr::Prefix(prefix) => self.eval_prefix(prefix, env),
            Expr::Infix(infix) => self.eval_infix(infix, env),
            Expr::If(if_expr) => self.eval_if(if_expr, env),
            Expr::Function(func) => Ok(Value::Function(Rc::new(FunctionObject {
                params: func.params.clone(),
                body: func.body.clone(),
                env: env.clone(),
            }))),
            Expr::Call(call) => self.eval_call(call, env),
            Expr::Index(index) => self.eval_index(index, env),
        }
    }

    /// Resolve an identifier: environment first, then builtins
    fn eval_identifier(&self, id: &Identifier, env: &EnvRef) -> Result<Value, RuntimeError> {
        if let Some(value) = env.borrow().get(&id.name) {
            return Ok(value);
        }
        if let Some(builtin) = stdlib::lookup(&id.name) {
            return Ok(Value::Builtin(builtin));
        }
        Err(RuntimeError::IdentifierNotFound {
            name: id.name.clone(),
            span: id.span,
        })
    }

    /// Evaluate a prefix expression
    fn eval_prefix(&mut self, prefix: &PrefixExpr, env: &EnvRef) -> Result<Value, RuntimeError> {
        let right = self.eval_expr(&prefix.right, env)?;

        match prefix.op {
            // ! inverts truthiness: false and null negate to true,
            // everything else to false
            PrefixOp::Not => Ok(Value::Bool(!right.is_truthy())),
            PrefixOp::Negate => match right {
                Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
                other => Err(RuntimeError::UnknownPrefixOperator {
                    op: "-",
                    operand: other.object_type(),
                    span: prefix.span,
                }),
            },
        }
    }

    /// Evaluate an infix expression
    fn eval_infix(&mut self, infix: &InfixExpr, env: &EnvRef) -> Result<Value, RuntimeError> {
        let left = self.eval_expr(&infix.left, env)?;
        let right = self.eval_expr(&infix.right, env)?;

        if left.object_type() != right.object_type() {
            return Err(RuntimeError::TypeMismatch {
                left: left.object_type(),
                op: infix.op.as_str(),
                right: right.object_type(),
                span: infix.span,
            });
        }

        match (&left, &right) {
            (Value::Integer(a), Value::Integer(b)) => {
                self.eval_integer_infix(infix.op, *a, *b, infix.span)
            }
            (Value::String(a), Value::String(b)) => match infix.op {
                InfixOp::Add => Ok(Value::string(format!("{}{}", a, b))),
                op => Err(RuntimeError::UnknownInfixOperator {
                    left: left.object_type(),
                    op: op.as_str(),
                    right: right.object_type(),
                    span: infix.span,
                }),
            },
            _ => match infix.op {
                InfixOp::Eq => Ok(Value::Bool(identity_eq(&left, &right))),
                InfixOp::NotEq => Ok(Value::Bool(!identity_eq(&left, &right))),
                op => Err(RuntimeError::UnknownInfixOperator {
                    left: left.object_type(),
                    op: op.as_str(),
                    right: right.object_type(),
                    span: infix.span,
                }),
            },
        }
    }

    /// Integer arithmetic and comparisons
    ///
    /// Arithmetic wraps on overflow; division checks for a zero divisor.
    fn eval_integer_infix(
        &self,
        op: InfixOp,
        a: i64,
        b: i64,
        span: Span,
    ) -> Result<Value, RuntimeError> {
        match op {
            InfixOp::Add => Ok(Value::Integer(a.wrapping_add(b))),
            InfixOp::Sub => Ok(Value::Integer(a.wrapping_sub(b))),
            InfixOp::Mul => Ok(Value::Integer(a.wrapping_mul(b))),
            InfixOp::Div => {
                if b == 0 {
                    Err(RuntimeError::DivideByZero { span })
                } else {
                    Ok(Value::Integer(a.wrapping_div(b)))
                }
            }
            InfixOp::Lt => Ok(Value::Bool(a < b)),
            InfixOp::Gt => Ok(Value::Bool(a > b)),
            InfixOp::Eq => Ok(Value::Bool(a == b)),
            InfixOp::NotEq => Ok(Value::Bool(a != b)),
        }
    }

    /// Evaluate an if expression
    ///
    /// Truthiness: `false` and `null` are falsy, everything else (including
    /// zero) is truthy. A missing alternative yields `null`.
    fn eval_if(&mut self, if_expr: &IfExpr, env: &EnvRef) -> Result<Value, RuntimeError> {
        let cond = self.eval_expr(&if_expr.cond, env)?;

        if cond.is_truthy() {
            self.eval_block(&if_expr.consequence, env)
        } else if let Some(alternative) = &if_expr.alternative {
            self.eval_block(alternative, env)
        } else {
            Ok(Value::Null)
        }
    }

    /// Evaluate a call expression
    fn eval_call(&mut self, call: &CallExpr, env: &EnvRef) -> Result<Value, RuntimeError> {
        let callee = self.eval_expr(&call.callee, env)?;

        // Arguments evaluate left to right, stopping at the first error
        let mut args = Vec::with_capacity(call.args.len());
        for arg in &call.args {
            args.push(self.eval_expr(arg, env)?);
        }

        match callee {
            Value::Function(func) => self.apply_function(&func, args, call.span),
            Value::Builtin(builtin) => (builtin.func)(&args, call.span),
            other => Err(RuntimeError::NotAFunction {
                kind: other.object_type(),
                span: call.span,
            }),
        }
    }

    /// Apply a user function
    ///
    /// The activation record encloses the function's captured environment,
    /// not the caller's. Parameters bind positionally; arity is not
    /// enforced, so surplus arguments are dropped and missing parameters
    /// stay unbound.
    fn apply_function(
        &mut self,
        func: &FunctionObject,
        args: Vec<Value>,
        span: Span,
    ) -> Result<Value, RuntimeError> {
        if self.call_depth >= super::MAX_CALL_DEPTH {
            return Err(RuntimeError::CallDepthExceeded { span });
        }

        let call_env = Environment::new_enclosed(func.env.clone());
        for (param, arg) in func.params.iter().zip(args) {
            call_env.borrow_mut().set(param.name.clone(), arg);
        }

        self.call_depth += 1;
        let result = self.eval_block(&func.body, &call_env);
        self.call_depth -= 1;
        let result = result?;

        // Unwrap the outermost return; deeper returns already bubbled here
        match std::mem::replace(&mut self.control_flow, ControlFlow::None) {
            ControlFlow::Return(value) => Ok(value),
            ControlFlow::None => Ok(result),
        }
    }

    /// Evaluate array literal elements left to right
    fn eval_array_literal(
        &mut self,
        arr: &ArrayLiteral,
        env: &EnvRef,
    ) -> Result<Value, RuntimeError> {
        let mut elements = Vec::with_capacity(arr.elements.len());
        for element in &arr.elements {
            elements.push(self.eval_expr(element, env)?);
        }
        Ok(Value::array(elements))
    }

    /// Evaluate a hash literal
    ///
    /// Keys evaluate before their values; a later duplicate key overwrites
    /// the earlier entry.
    fn eval_hash_literal(
        &mut self,
        hash: &HashLiteral,
        env: &EnvRef,
    ) -> Result<Value, RuntimeError> {
        let mut pairs = HashMap::with_capacity(hash.pairs.len());

        for (key_expr, value_expr) in &hash.pairs {
            let key = self.eval_expr(key_expr, env)?;
            let hash_key = key.hash_key().ok_or(RuntimeError::InvalidHashKey {
                kind: key.object_type(),
                span: key_expr.span(),
            })?;
            let value = self.eval_expr(value_expr, env)?;
            pairs.insert(hash_key, (key, value));
        }

        Ok(Value::Hash(Rc::new(HashObject { pairs })))
    }

    /// Evaluate an index expression
    ///
    /// Out-of-range and negative array indices yield `null`, as do absent
    /// hash keys and unindexable targets. Only an unhashable hash key is an
    /// error.
    fn eval_index(&mut self, index: &IndexExpr, env: &EnvRef) -> Result<Value, RuntimeError> {
        let target = self.eval_expr(&index.target, env)?;
        let idx = self.eval_expr(&index.index, env)?;

        match (&target, &idx) {
            (Value::Array(elements), Value::Integer(i)) => {
                if *i >= 0 && (*i as usize) < elements.len() {
                    Ok(elements[*i as usize].clone())
                } else {
                    Ok(Value::Null)
                }
            }
            (Value::Hash(hash), key) => {
                let hash_key = key.hash_key().ok_or(RuntimeError::UnusableHashKey {
                    kind: key.object_type(),
                    span: index.index.span(),
                })?;
                Ok(hash
                    .pairs
                    .get(&hash_key)
                    .map(|(_, value)| value.clone())
                    .unwrap_or(Value::Null))
            }
            _ => Ok(Value::Null),
        }
    }
}

/// Equality for non-integer, non-string operand pairs
///
/// Booleans and null compare by payload (they are canonical values); arrays,
/// hashes, and functions compare by reference identity.
fn identity_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Null, Value::Null) => true,
        (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
        (Value::Hash(a), Value::Hash(b)) => Rc::ptr_eq(a, b),
        (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
        (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
        _ => false,
    }
}
