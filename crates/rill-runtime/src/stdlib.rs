//! Built-in functions
//!
//! A fixed table of host-implemented functions consulted during identifier
//! resolution when a name is absent from the environment. Builtins check
//! their own arity; their error message formats are stable strings.

use crate::span::Span;
use crate::value::{Builtin, BuiltinFn, RuntimeError, Value};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Construct the fixed arity error for a builtin call
fn arity_error(got: usize, want: usize, span: Span) -> RuntimeError {
    RuntimeError::BuiltinArgument {
        msg: format!("wrong number of arguments. got={}, want={})", got, want),
        span,
    }
}

/// Construct the fixed unsupported-argument error for a builtin call
fn unsupported_argument(name: &str, arg: &Value, span: Span) -> RuntimeError {
    RuntimeError::BuiltinArgument {
        msg: format!(
            "argument to `{}` not supported, got {}",
            name,
            arg.object_type()
        ),
        span,
    }
}

static BUILTIN_REGISTRY: OnceLock<HashMap<&'static str, BuiltinFn>> = OnceLock::new();

fn builtin_registry() -> &'static HashMap<&'static str, BuiltinFn> {
    BUILTIN_REGISTRY.get_or_init(|| {
        let mut m: HashMap<&'static str, BuiltinFn> = HashMap::new();

        m.insert("len", |args, span| {
            if args.len() != 1 {
                return Err(arity_error(args.len(), 1, span));
            }
            match &args[0] {
                Value::String(s) => Ok(Value::Integer(s.len() as i64)),
                Value::Array(elements) => Ok(Value::Integer(elements.len() as i64)),
                other => Err(unsupported_argument("len", other, span)),
            }
        });

        m.insert("head", |args, span| {
            if args.len() != 1 {
                return Err(arity_error(args.len(), 1, span));
            }
            match &args[0] {
                Value::Array(elements) => {
                    Ok(elements.first().cloned().unwrap_or(Value::Null))
                }
                other => Err(unsupported_argument("head", other, span)),
            }
        });

        m.insert("last", |args, span| {
            if args.len() != 1 {
                return Err(arity_error(args.len(), 1, span));
            }
            match &args[0] {
                Value::Array(elements) => {
                    Ok(elements.last().cloned().unwrap_or(Value::Null))
                }
                other => Err(unsupported_argument("last", other, span)),
            }
        });

        m.insert("tail", |args, span| {
            if args.len() != 1 {
                return Err(arity_error(args.len(), 1, span));
            }
            match &args[0] {
                // A one-element array tails to a copy of itself, not to [];
                // the empty array stays empty
                Value::Array(elements) => {
                    let rest = if elements.len() <= 1 {
                        elements.as_ref().clone()
                    } else {
                        elements[1..].to_vec()
                    };
                    Ok(Value::array(rest))
                }
                other => Err(unsupported_argument("tail", other, span)),
            }
        });

        m.insert("push", |args, span| {
            if args.len() != 2 {
                return Err(arity_error(args.len(), 2, span));
            }
            match &args[0] {
                Value::Array(elements) => {
                    let mut extended = elements.as_ref().clone();
                    extended.push(args[1].clone());
                    Ok(Value::array(extended))
                }
                other => Err(unsupported_argument("push", other, span)),
            }
        });

        m
    })
}

/// Look up a builtin by name
pub fn lookup(name: &str) -> Option<Builtin> {
    builtin_registry()
        .get_key_value(name)
        .map(|(name, func)| Builtin {
            name: *name,
            func: *func,
        })
}

/// Check if a name refers to a builtin
pub fn is_builtin(name: &str) -> bool {
    builtin_registry().contains_key(name)
}
