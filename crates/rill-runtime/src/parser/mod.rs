//! Parsing (tokens to AST)
//!
//! The parser converts a stream of tokens into an Abstract Syntax Tree (AST).
//! Uses Pratt parsing for expressions and recursive descent for statements.
//! Errors are accumulated as diagnostics; the parser never aborts early, so
//! the resulting tree may be partial and callers must consult the diagnostics
//! before trusting it.

mod expr;
mod stmt;

use crate::ast::Program;
use crate::diagnostic::{error_codes, Diagnostic};
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Parser state for building AST from tokens
pub struct Parser {
    pub(super) tokens: Vec<Token>,
    pub(super) current: usize,
    pub(super) diagnostics: Vec<Diagnostic>,
}

/// Operator precedence levels for Pratt parsing
///
/// Ordered lowest-binding first; `Index` binds tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum Precedence {
    Lowest,
    Equality,   // == !=
    Comparison, // < >
    Term,       // + -
    Factor,     // * /
    Unary,      // ! -
    Call,       // (
    Index,      // [
}

impl Parser {
    /// Create a new parser for the given tokens
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Parse tokens into a program
    pub fn parse(&mut self) -> (Program, Vec<Diagnostic>) {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(_) => self.synchronize(),
            }
        }

        (Program { statements }, std::mem::take(&mut self.diagnostics))
    }

    // === Helper methods ===

    /// Advance to next token and return reference to previous
    pub(super) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        &self.tokens[self.current - 1]
    }

    /// Peek at current token
    pub(super) fn peek(&self) -> &Token {
        if self.current < self.tokens.len() {
            &self.tokens[self.current]
        } else {
            // tokenize() always ends with Eof, but guard against empty input
            self.tokens.last().expect("token stream must not be empty")
        }
    }

    /// Check if current token matches kind
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Match and consume token if it matches
    pub(super) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume token of given kind or record an error
    ///
    /// The message format is fixed: `Expected token <expected>, instead got
    /// <actual>`.
    pub(super) fn consume(&mut self, kind: TokenKind) -> Result<&Token, ()> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            let actual = self.peek().kind;
            self.error(&format!(
                "Expected token {}, instead got {}",
                kind, actual
            ));
            Err(())
        }
    }

    /// Check if at end of token stream
    pub(super) fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len() || self.tokens[self.current].kind == TokenKind::Eof
    }

    /// Record an error at the current token
    pub(super) fn error(&mut self, message: &str) {
        let span = self.peek().span;
        self.error_at(message, span);
    }

    /// Record an error at a given span
    pub(super) fn error_at(&mut self, message: &str, span: Span) {
        self.diagnostics.push(
            Diagnostic::error_with_code(error_codes::SYNTAX_ERROR, message, span)
                .with_label("syntax error"),
        );
    }

    /// Record an error with a specific code at a given span
    pub(super) fn error_at_with_code(&mut self, code: &str, message: &str, span: Span) {
        self.diagnostics.push(
            Diagnostic::error_with_code(code, message, span).with_label("syntax error"),
        );
    }

    /// Synchronize after error
    ///
    /// Skips tokens until a statement boundary so one syntax error doesn't
    /// cascade into spurious diagnostics for the rest of the input.
    pub(super) fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.tokens[self.current - 1].kind == TokenKind::Semicolon {
                return;
            }

            match self.peek().kind {
                TokenKind::Let | TokenKind::Return | TokenKind::Fn | TokenKind::If => return,
                _ => {
                    self.advance();
                }
            }
        }
    }
}
