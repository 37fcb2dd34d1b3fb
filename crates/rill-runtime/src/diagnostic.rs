//! Diagnostic system for errors and warnings
//!
//! Lexer and parser errors flow through the unified Diagnostic type so that
//! callers get consistent formatting regardless of which phase failed.

use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    /// Fatal error that prevents evaluation
    Error,
    /// Warning that doesn't prevent evaluation
    Warning,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Error => write!(f, "error"),
            DiagnosticLevel::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message (error or warning)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Error code (e.g., "RL1000")
    pub code: String,
    /// Main diagnostic message
    pub message: String,
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
    /// Length of error span
    pub length: usize,
    /// Source line string
    pub snippet: String,
    /// Short label for caret range
    pub label: String,
    /// Suggested fix (optional)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic with code
    pub fn error_with_code(
        code: impl Into<String>,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            code: code.into(),
            message: message.into(),
            line: 1,
            column: span.start + 1,
            length: span.len(),
            snippet: String::new(),
            label: String::new(),
            help: None,
        }
    }

    /// Create a new error diagnostic (uses generic error code)
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::error_with_code(error_codes::GENERIC, message, span)
    }

    /// Set the line number
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// Set the column number
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }

    /// Set the snippet (source line)
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = snippet.into();
        self
    }

    /// Set the label (caret description)
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Add a help message
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Format as human-readable string
    pub fn to_human_string(&self) -> String {
        let mut output = String::new();

        // Header: error[RL1000]: Expected token ...
        output.push_str(&format!(
            "{}[{}]: {}\n",
            self.level, self.code, self.message
        ));

        // Snippet with caret
        if !self.snippet.is_empty() {
            output.push_str("   |\n");
            output.push_str(&format!("{:>2} | {}\n", self.line, self.snippet));

            if self.length > 0 && self.column > 0 {
                let padding = " ".repeat(self.column - 1);
                let carets = "^".repeat(self.length.max(1));
                output.push_str(&format!("   | {}{}", padding, carets));
                if !self.label.is_empty() {
                    output.push_str(&format!(" {}", self.label));
                }
                output.push('\n');
            }
        }

        if let Some(help) = &self.help {
            output.push_str(&format!("   = help: {}\n", help));
        }

        output
    }

    /// Format as JSON string
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Error code registry
pub mod error_codes {
    // RL0xxx - Runtime errors
    pub const TYPE_MISMATCH: &str = "RL0001";
    pub const UNKNOWN_OPERATOR: &str = "RL0002";
    pub const UNDEFINED_IDENTIFIER: &str = "RL0003";
    pub const NOT_A_FUNCTION: &str = "RL0004";
    pub const DIVIDE_BY_ZERO: &str = "RL0005";
    pub const INVALID_HASH_KEY: &str = "RL0006";
    pub const CALL_DEPTH_EXCEEDED: &str = "RL0007";
    pub const BUILTIN_ARGUMENT: &str = "RL0102";

    // RL1xxx - Syntax errors
    pub const SYNTAX_ERROR: &str = "RL1000";
    pub const UNEXPECTED_CHARACTER: &str = "RL1001";
    pub const UNTERMINATED_STRING: &str = "RL1002";
    pub const BAD_INTEGER: &str = "RL1003";

    // RL9xxx - Generic
    pub const GENERIC: &str = "RL9999";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_diagnostic() {
        let diag = Diagnostic::error_with_code("RL1000", "Expected token ;", Span::new(4, 5));
        assert_eq!(diag.level, DiagnosticLevel::Error);
        assert_eq!(diag.code, "RL1000");
        assert_eq!(diag.message, "Expected token ;");
        assert_eq!(diag.column, 5);
        assert_eq!(diag.length, 1);
    }

    #[test]
    fn test_builder_methods() {
        let diag = Diagnostic::error("bad input", Span::new(0, 3))
            .with_line(2)
            .with_snippet("let = 5;")
            .with_label("syntax error")
            .with_help("check your syntax");

        assert_eq!(diag.line, 2);
        assert_eq!(diag.snippet, "let = 5;");
        assert_eq!(diag.label, "syntax error");
        assert_eq!(diag.help.as_deref(), Some("check your syntax"));
    }

    #[test]
    fn test_human_format_contains_code_and_message() {
        let diag = Diagnostic::error_with_code("RL1001", "Unexpected character '@'", Span::new(0, 1))
            .with_snippet("@")
            .with_label("lexer error");
        let rendered = diag.to_human_string();
        assert!(rendered.contains("error[RL1001]"));
        assert!(rendered.contains("Unexpected character '@'"));
        assert!(rendered.contains("^"));
    }

    #[test]
    fn test_json_round_trip() {
        let diag = Diagnostic::error("oops", Span::new(1, 4));
        let json = diag.to_json_string().unwrap();
        let parsed: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, diag);
    }
}
