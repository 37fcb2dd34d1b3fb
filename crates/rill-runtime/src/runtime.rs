//! Rill runtime API for embedding

use crate::diagnostic::{error_codes, Diagnostic};
use crate::interpreter::Interpreter;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::value::{RuntimeError, Value};
use std::cell::RefCell;

/// Result type for runtime operations
pub type RuntimeResult<T> = Result<T, Vec<Diagnostic>>;

/// Rill runtime instance
///
/// Provides a high-level API for embedding Rill in host applications.
/// Bindings persist across `eval` calls on the same instance.
///
/// # Examples
///
/// ```
/// use rill_runtime::{Rill, Value};
///
/// let runtime = Rill::new();
/// let result = runtime.eval("1 + 2");
/// assert_eq!(result, Ok(Value::Integer(3)));
/// ```
pub struct Rill {
    /// Interpreter for executing code (using interior mutability)
    interpreter: RefCell<Interpreter>,
}

impl Rill {
    /// Create a new Rill runtime instance
    pub fn new() -> Self {
        Self {
            interpreter: RefCell::new(Interpreter::new()),
        }
    }

    /// Evaluate Rill source code
    ///
    /// Returns the resulting value, or the collected diagnostics if the
    /// source fails to lex, parse, or evaluate.
    pub fn eval(&self, source: &str) -> RuntimeResult<Value> {
        let mut lexer = Lexer::new(source);
        let (tokens, lex_diagnostics) = lexer.tokenize();

        if !lex_diagnostics.is_empty() {
            return Err(lex_diagnostics);
        }

        let mut parser = Parser::new(tokens);
        let (program, parse_diagnostics) = parser.parse();

        if !parse_diagnostics.is_empty() {
            return Err(parse_diagnostics);
        }

        let mut interpreter = self.interpreter.borrow_mut();
        match interpreter.eval(&program) {
            Ok(value) => Ok(value),
            Err(runtime_error) => Err(vec![runtime_error_to_diagnostic(runtime_error)]),
        }
    }

    /// Evaluate a Rill source file
    pub fn eval_file(&self, path: &str) -> RuntimeResult<Value> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            vec![Diagnostic::error(
                format!("Failed to read file: {}", e),
                crate::span::Span::dummy(),
            )]
        })?;

        self.eval(&source)
    }

    /// Bind a name in the runtime's root environment
    pub fn define_global(&self, name: impl Into<String>, value: Value) {
        self.interpreter.borrow_mut().define_global(name, value);
    }
}

impl Default for Rill {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a RuntimeError to a Diagnostic with a stable code
pub(crate) fn runtime_error_to_diagnostic(error: RuntimeError) -> Diagnostic {
    let span = error.span();

    let code = match &error {
        RuntimeError::TypeMismatch { .. } => error_codes::TYPE_MISMATCH,
        RuntimeError::UnknownPrefixOperator { .. } | RuntimeError::UnknownInfixOperator { .. } => {
            error_codes::UNKNOWN_OPERATOR
        }
        RuntimeError::IdentifierNotFound { .. } => error_codes::UNDEFINED_IDENTIFIER,
        RuntimeError::NotAFunction { .. } => error_codes::NOT_A_FUNCTION,
        RuntimeError::DivideByZero { .. } => error_codes::DIVIDE_BY_ZERO,
        RuntimeError::InvalidHashKey { .. } | RuntimeError::UnusableHashKey { .. } => {
            error_codes::INVALID_HASH_KEY
        }
        RuntimeError::BuiltinArgument { .. } => error_codes::BUILTIN_ARGUMENT,
        RuntimeError::CallDepthExceeded { .. } => error_codes::CALL_DEPTH_EXCEEDED,
    };

    Diagnostic::error_with_code(code, error.to_string(), span)
}
