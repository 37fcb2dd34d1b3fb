//! Rill Runtime - Core language implementation
//!
//! This library provides the complete Rill language runtime including:
//! - Lexical analysis and parsing
//! - Tree-walking interpretation with lexical closures
//! - Built-in functions
//! - An embedding API and a UI-agnostic REPL core

/// Rill runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod ast;
pub mod diagnostic;
pub mod environment;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod runtime;
pub mod span;
pub mod stdlib;
pub mod token;
pub mod value;

// Re-export commonly used types
pub use diagnostic::{error_codes, Diagnostic, DiagnosticLevel};
pub use environment::{EnvRef, Environment};
pub use interpreter::Interpreter;
pub use lexer::Lexer;
pub use parser::Parser;
pub use repl::{ReplCore, ReplResult};
pub use runtime::{Rill, RuntimeResult};
pub use span::Span;
pub use token::{Token, TokenKind};
pub use value::{ObjectType, RuntimeError, Value};
