//! REPL core logic (UI-agnostic)

use crate::diagnostic::Diagnostic;
use crate::interpreter::Interpreter;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::runtime::runtime_error_to_diagnostic;
use crate::value::Value;

/// Result of evaluating one line of input
pub struct ReplResult {
    /// The value produced by evaluation (None on error)
    pub value: Option<Value>,
    /// Diagnostics from all phases
    pub diagnostics: Vec<Diagnostic>,
}

/// REPL core state
///
/// Maintains persistent state across multiple eval calls: bindings survive,
/// and errors do not reset state.
pub struct ReplCore {
    interpreter: Interpreter,
}

impl ReplCore {
    /// Create a new REPL core
    pub fn new() -> Self {
        Self {
            interpreter: Interpreter::new(),
        }
    }

    /// Evaluate a line of input
    ///
    /// Runs the full pipeline: lex -> parse -> eval. Bindings persist across
    /// calls.
    pub fn eval_line(&mut self, input: &str) -> ReplResult {
        let mut lexer = Lexer::new(input);
        let (tokens, lex_diags) = lexer.tokenize();

        if !lex_diags.is_empty() {
            return ReplResult {
                value: None,
                diagnostics: lex_diags,
            };
        }

        let mut parser = Parser::new(tokens);
        let (program, parse_diags) = parser.parse();

        if !parse_diags.is_empty() {
            return ReplResult {
                value: None,
                diagnostics: parse_diags,
            };
        }

        match self.interpreter.eval(&program) {
            Ok(value) => ReplResult {
                value: Some(value),
                diagnostics: Vec::new(),
            },
            Err(e) => ReplResult {
                value: None,
                diagnostics: vec![runtime_error_to_diagnostic(e)],
            },
        }
    }

    /// Reset REPL state, clearing all bindings
    pub fn reset(&mut self) {
        self.interpreter = Interpreter::new();
    }
}

impl Default for ReplCore {
    fn default() -> Self {
        Self::new()
    }
}
