//! Runtime value representation
//!
//! Shared value representation for the interpreter:
//! - Integers, booleans, null: immediate values (stack-allocated)
//! - Strings: heap-allocated, reference-counted (`Rc<String>`), immutable
//! - Arrays and hashes: heap-allocated, reference-counted, immutable once built
//! - Functions: parameter list + body + captured environment (closure)

use crate::ast::{Block, Identifier};
use crate::environment::EnvRef;
use crate::span::Span;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Runtime value type
#[derive(Debug, Clone)]
pub enum Value {
    /// Integer value (signed 64-bit)
    Integer(i64),
    /// Boolean value
    Bool(bool),
    /// Null value
    Null,
    /// String value (reference-counted, immutable)
    String(Rc<String>),
    /// Array value (reference-counted, immutable)
    Array(Rc<Vec<Value>>),
    /// Hash value mapping hash keys to (key, value) pairs
    Hash(Rc<HashObject>),
    /// User function with captured environment
    Function(Rc<FunctionObject>),
    /// Host-implemented builtin function
    Builtin(Builtin),
}

/// Type tag for runtime values
///
/// `Display` yields the inspection strings observable in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Integer,
    Boolean,
    Null,
    String,
    Function,
    Builtin,
    Array,
    Hash,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectType::Integer => "INTEGER",
            ObjectType::Boolean => "BOOLEAN",
            ObjectType::Null => "NULL",
            ObjectType::String => "STRING",
            ObjectType::Function => "FUNCTION",
            ObjectType::Builtin => "BUILTIN",
            ObjectType::Array => "ARRAY",
            ObjectType::Hash => "HASH",
        };
        f.write_str(name)
    }
}

/// User-defined function value
pub struct FunctionObject {
    /// Parameter names, bound positionally at call time
    pub params: Vec<Identifier>,
    /// Function body
    pub body: Block,
    /// Environment captured at the definition site
    pub env: EnvRef,
}

impl fmt::Debug for FunctionObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The captured environment may reference this function; skip it
        f.debug_struct("FunctionObject")
            .field("params", &self.params)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

/// Host function signature: arguments and call-site span to result
pub type BuiltinFn = fn(&[Value], Span) -> Result<Value, RuntimeError>;

/// Builtin function value
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// Builtin name as installed in the lookup table
    pub name: &'static str,
    /// Host implementation
    pub func: BuiltinFn,
}

/// Hash container: keys are derived `HashKey`s, entries keep the original
/// key object alongside the value
#[derive(Debug, Default)]
pub struct HashObject {
    pub pairs: HashMap<HashKey, (Value, Value)>,
}

/// Derived hash key: a type tag plus a 64-bit payload
///
/// Integers bit-cast their value, booleans map to 0/1, strings hash their
/// UTF-8 bytes with 64-bit FNV-1a. Equal values always derive equal keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    pub kind: ObjectType,
    pub value: u64,
}

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

impl Value {
    /// Create a new string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Rc::new(s.into()))
    }

    /// Create a new array value
    pub fn array(values: Vec<Value>) -> Self {
        Value::Array(Rc::new(values))
    }

    /// Get the type tag of this value
    pub fn object_type(&self) -> ObjectType {
        match self {
            Value::Integer(_) => ObjectType::Integer,
            Value::Bool(_) => ObjectType::Boolean,
            Value::Null => ObjectType::Null,
            Value::String(_) => ObjectType::String,
            Value::Array(_) => ObjectType::Array,
            Value::Hash(_) => ObjectType::Hash,
            Value::Function(_) => ObjectType::Function,
            Value::Builtin(_) => ObjectType::Builtin,
        }
    }

    /// Check if this value is truthy
    ///
    /// Only `false` and `null` are falsy; everything else, including integer
    /// zero and empty strings, is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false) | Value::Null)
    }

    /// Derive the hash key for this value, if it is a hashable type
    ///
    /// Only integers, booleans, and strings are hashable.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Value::Integer(n) => Some(HashKey {
                kind: ObjectType::Integer,
                value: *n as u64,
            }),
            Value::Bool(b) => Some(HashKey {
                kind: ObjectType::Boolean,
                value: u64::from(*b),
            }),
            Value::String(s) => Some(HashKey {
                kind: ObjectType::String,
                value: fnv1a_64(s.as_bytes()),
            }),
            _ => None,
        }
    }

    /// Human-readable form of this value
    ///
    /// Integers as decimal, booleans as `true`/`false`, strings quoted,
    /// arrays `[a, b, c]`, hashes one pair per line, functions with their
    /// parameter list and body.
    pub fn inspect(&self) -> String {
        match self {
            Value::Integer(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => "null".to_string(),
            Value::String(s) => format!("\"{}\"", s),
            Value::Array(elements) => {
                let parts: Vec<String> = elements.iter().map(|v| v.inspect()).collect();
                format!("[{}]", parts.join(", "))
            }
            Value::Hash(hash) => {
                let pairs: Vec<String> = hash
                    .pairs
                    .values()
                    .map(|(key, value)| format!("{} : {}", key.inspect(), value.inspect()))
                    .collect();
                format!("{{\n{}\n}}", pairs.join(",\n"))
            }
            Value::Function(func) => {
                let params: Vec<String> =
                    func.params.iter().map(|p| p.name.clone()).collect();
                format!("fn({}){{\n{}\n}}", params.join(", "), func.body)
            }
            Value::Builtin(_) => "builtin function".to_string(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            // Hashes and functions compare by reference identity
            (Value::Hash(a), Value::Hash(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
            _ => false,
        }
    }
}

/// Runtime error with source span information
///
/// `Display` output is the exact user-visible message taxonomy; the REPL and
/// CLI render it as `ERROR: <message>`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeError {
    /// Infix operands of differing types
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        left: ObjectType,
        op: &'static str,
        right: ObjectType,
        span: Span,
    },
    /// Prefix operator applied to an unsupported type
    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator {
        op: &'static str,
        operand: ObjectType,
        span: Span,
    },
    /// Infix operator unsupported for same-typed operands
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        left: ObjectType,
        op: &'static str,
        right: ObjectType,
        span: Span,
    },
    /// Identifier resolved neither in the environment nor in the builtins
    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String, span: Span },
    /// Call target is not callable
    #[error("not a function: {kind}")]
    NotAFunction { kind: ObjectType, span: Span },
    /// Integer division by zero
    #[error("division by zero")]
    DivideByZero { span: Span },
    /// Hash literal key of an unhashable type
    #[error("Can't use expression of type {kind} as hash key")]
    InvalidHashKey { kind: ObjectType, span: Span },
    /// Hash index of an unhashable type
    #[error("unusable as hash key: {kind}")]
    UnusableHashKey { kind: ObjectType, span: Span },
    /// Builtin rejected its arguments; message formats are fixed per builtin
    #[error("{msg}")]
    BuiltinArgument { msg: String, span: Span },
    /// Recursion limit reached; evaluation stops instead of exhausting the
    /// host stack
    #[error("maximum call depth exceeded")]
    CallDepthExceeded { span: Span },
}

impl RuntimeError {
    /// Get the source span for this error
    pub fn span(&self) -> Span {
        match self {
            RuntimeError::TypeMismatch { span, .. } => *span,
            RuntimeError::UnknownPrefixOperator { span, .. } => *span,
            RuntimeError::UnknownInfixOperator { span, .. } => *span,
            RuntimeError::IdentifierNotFound { span, .. } => *span,
            RuntimeError::NotAFunction { span, .. } => *span,
            RuntimeError::DivideByZero { span } => *span,
            RuntimeError::InvalidHashKey { span, .. } => *span,
            RuntimeError::UnusableHashKey { span, .. } => *span,
            RuntimeError::BuiltinArgument { span, .. } => *span,
            RuntimeError::CallDepthExceeded { span } => *span,
        }
    }
}
