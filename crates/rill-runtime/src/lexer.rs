//! Lexical analysis (tokenization)
//!
//! The lexer converts Rill source code into a stream of tokens with accurate
//! span information. Strings are double-quoted with no escape processing;
//! integers are plain digit runs; identifiers follow `[A-Za-z_][A-Za-z0-9_]*`.

use crate::diagnostic::{error_codes, Diagnostic};
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer state for tokenizing source code
pub struct Lexer {
    /// Original source code
    source: String,
    /// Characters of source code
    chars: Vec<char>,
    /// Current position in chars
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
    /// Start position of current token
    start_pos: usize,
    /// Start line of current token
    start_line: usize,
    /// Start column of current token
    start_column: usize,
    /// Collected diagnostics
    diagnostics: Vec<Diagnostic>,
}

impl Lexer {
    /// Create a new lexer for the given source code
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let chars: Vec<char> = source.chars().collect();
        Self {
            source,
            chars,
            current: 0,
            line: 1,
            column: 1,
            start_pos: 0,
            start_line: 1,
            start_column: 1,
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the source code, returning tokens and any diagnostics
    ///
    /// The returned vector always ends with a single `Eof` token.
    pub fn tokenize(&mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        (tokens, std::mem::take(&mut self.diagnostics))
    }

    /// Scan the next token
    ///
    /// Emits `Eof` indefinitely once the input is exhausted.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        // Mark start of token
        self.start_pos = self.current;
        self.start_line = self.line;
        self.start_column = self.column;

        if self.is_at_end() {
            return self.make_token(TokenKind::Eof, "");
        }

        let c = self.advance();

        match c {
            '(' => self.make_token(TokenKind::LeftParen, "("),
            ')' => self.make_token(TokenKind::RightParen, ")"),
            '{' => self.make_token(TokenKind::LeftBrace, "{"),
            '}' => self.make_token(TokenKind::RightBrace, "}"),
            '[' => self.make_token(TokenKind::LeftBracket, "["),
            ']' => self.make_token(TokenKind::RightBracket, "]"),
            ';' => self.make_token(TokenKind::Semicolon, ";"),
            ',' => self.make_token(TokenKind::Comma, ","),
            ':' => self.make_token(TokenKind::Colon, ":"),
            '+' => self.make_token(TokenKind::Plus, "+"),
            '-' => self.make_token(TokenKind::Minus, "-"),
            '*' => self.make_token(TokenKind::Star, "*"),
            '/' => self.make_token(TokenKind::Slash, "/"),
            '<' => self.make_token(TokenKind::Less, "<"),
            '>' => self.make_token(TokenKind::Greater, ">"),

            '=' => {
                if self.match_char('=') {
                    self.make_token(TokenKind::EqualEqual, "==")
                } else {
                    self.make_token(TokenKind::Assign, "=")
                }
            }
            '!' => {
                if self.match_char('=') {
                    self.make_token(TokenKind::BangEqual, "!=")
                } else {
                    self.make_token(TokenKind::Bang, "!")
                }
            }

            '"' => self.string(),

            c if c.is_ascii_digit() => self.number(),
            c if c.is_alphabetic() || c == '_' => self.identifier(),

            _ => self.error_token(&format!("Unexpected character '{}'", c)),
        }
    }

    /// Scan a string literal
    ///
    /// No escape handling: the literal runs to the next `"` or end of input.
    fn string(&mut self) -> Token {
        let content_start = self.current;

        while !self.is_at_end() && self.peek() != '"' {
            if self.peek() == '\n' {
                self.line += 1;
                self.column = 0;
            }
            self.advance();
        }

        if self.is_at_end() {
            return self.error_token_with_code(
                error_codes::UNTERMINATED_STRING,
                "Unterminated string literal",
            );
        }

        let content: String = self.chars[content_start..self.current].iter().collect();
        self.advance(); // closing quote

        self.make_token(TokenKind::String, &content)
    }

    /// Scan an integer literal
    fn number(&mut self) -> Token {
        while !self.is_at_end() && self.peek().is_ascii_digit() {
            self.advance();
        }

        let text: String = self.chars[self.start_pos..self.current].iter().collect();
        self.make_token(TokenKind::Int, &text)
    }

    /// Scan an identifier or keyword
    fn identifier(&mut self) -> Token {
        while !self.is_at_end() && (self.peek().is_alphanumeric() || self.peek() == '_') {
            self.advance();
        }

        let text: String = self.chars[self.start_pos..self.current].iter().collect();
        let kind = TokenKind::is_keyword(&text).unwrap_or(TokenKind::Identifier);
        self.make_token(kind, &text)
    }

    /// Skip whitespace
    fn skip_whitespace(&mut self) {
        while !self.is_at_end() {
            match self.peek() {
                ' ' | '\r' | '\t' => {
                    self.advance();
                }
                '\n' => {
                    self.advance();
                    self.line += 1;
                    self.column = 1;
                }
                _ => return,
            }
        }
    }

    // === Character navigation ===

    /// Advance to next character and return it
    fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        self.column += 1;
        c
    }

    /// Peek at current character without advancing
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    /// Check if current character matches expected, and advance if so
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current] != expected {
            false
        } else {
            self.advance();
            true
        }
    }

    /// Check if we've reached the end of source
    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    // === Token creation ===

    /// Create a token with the given kind and lexeme
    fn make_token(&self, kind: TokenKind, lexeme: &str) -> Token {
        let span = Span {
            start: self.start_pos,
            end: self.current,
        };

        Token {
            kind,
            lexeme: lexeme.to_string(),
            span,
        }
    }

    /// Create an `Illegal` token and record a diagnostic with a specific code
    fn error_token_with_code(&mut self, code: &str, message: &str) -> Token {
        let span = Span {
            start: self.start_pos,
            end: self.current.max(self.start_pos + 1),
        };

        let snippet = self.get_line_snippet(self.start_line);

        self.diagnostics.push(
            Diagnostic::error_with_code(code, message, span)
                .with_line(self.start_line)
                .with_column(self.start_column)
                .with_snippet(snippet)
                .with_label("lexer error"),
        );

        Token {
            kind: TokenKind::Illegal,
            lexeme: message.to_string(),
            span,
        }
    }

    /// Create an `Illegal` token for unexpected characters
    fn error_token(&mut self, message: &str) -> Token {
        self.error_token_with_code(error_codes::UNEXPECTED_CHARACTER, message)
    }

    /// Get the source line for a given line number
    fn get_line_snippet(&self, line: usize) -> String {
        self.source.lines().nth(line - 1).unwrap_or("").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let mut lexer = Lexer::new("");
        let (tokens, diagnostics) = lexer.tokenize();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(diagnostics.len(), 0);
    }

    #[test]
    fn test_eof_repeats_after_exhaustion() {
        let mut lexer = Lexer::new("5");
        assert_eq!(lexer.next_token().kind, TokenKind::Int);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_single_char_tokens() {
        let mut lexer = Lexer::new("(){}[];,:");
        let (tokens, _) = lexer.tokenize();

        assert_eq!(tokens[0].kind, TokenKind::LeftParen);
        assert_eq!(tokens[1].kind, TokenKind::RightParen);
        assert_eq!(tokens[2].kind, TokenKind::LeftBrace);
        assert_eq!(tokens[3].kind, TokenKind::RightBrace);
        assert_eq!(tokens[4].kind, TokenKind::LeftBracket);
        assert_eq!(tokens[5].kind, TokenKind::RightBracket);
        assert_eq!(tokens[6].kind, TokenKind::Semicolon);
        assert_eq!(tokens[7].kind, TokenKind::Comma);
        assert_eq!(tokens[8].kind, TokenKind::Colon);
    }

    #[test]
    fn test_operators() {
        let mut lexer = Lexer::new("= + - ! * / < > == !=");
        let (tokens, _) = lexer.tokenize();

        let expected = vec![
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Bang,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::EqualEqual,
            TokenKind::BangEqual,
        ];

        for (i, expected_kind) in expected.iter().enumerate() {
            assert_eq!(tokens[i].kind, *expected_kind);
        }
    }

    #[test]
    fn test_operator_disambiguation() {
        // == must not lex as = =
        let mut lexer = Lexer::new("x==5");
        let (tokens, _) = lexer.tokenize();
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].kind, TokenKind::EqualEqual);
        assert_eq!(tokens[2].kind, TokenKind::Int);

        let mut lexer = Lexer::new("x!=5");
        let (tokens, _) = lexer.tokenize();
        assert_eq!(tokens[1].kind, TokenKind::BangEqual);
    }

    #[test]
    fn test_keywords() {
        let mut lexer = Lexer::new("fn let true false if else return");
        let (tokens, _) = lexer.tokenize();

        let expected = vec![
            TokenKind::Fn,
            TokenKind::Let,
            TokenKind::True,
            TokenKind::False,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Return,
        ];

        for (i, expected_kind) in expected.iter().enumerate() {
            assert_eq!(tokens[i].kind, *expected_kind);
        }
    }

    #[test]
    fn test_identifiers() {
        let mut lexer = Lexer::new("foo bar_baz _test x123");
        let (tokens, _) = lexer.tokenize();

        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "foo");
        assert_eq!(tokens[1].lexeme, "bar_baz");
        assert_eq!(tokens[2].lexeme, "_test");
        assert_eq!(tokens[3].lexeme, "x123");
    }

    #[test]
    fn test_numbers() {
        let mut lexer = Lexer::new("42 0 12345");
        let (tokens, _) = lexer.tokenize();

        assert_eq!(tokens[0].kind, TokenKind::Int);
        assert_eq!(tokens[0].lexeme, "42");
        assert_eq!(tokens[1].lexeme, "0");
        assert_eq!(tokens[2].lexeme, "12345");
    }

    #[test]
    fn test_string_literal() {
        let mut lexer = Lexer::new(r#""hello world""#);
        let (tokens, diagnostics) = lexer.tokenize();

        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "hello world");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_string_no_escape_processing() {
        // Backslashes pass through untouched
        let mut lexer = Lexer::new(r#""a\nb""#);
        let (tokens, diagnostics) = lexer.tokenize();

        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, r"a\nb");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unterminated_string() {
        let mut lexer = Lexer::new(r#""hello"#);
        let (tokens, diagnostics) = lexer.tokenize();

        assert_eq!(tokens[0].kind, TokenKind::Illegal);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "RL1002");
        assert!(diagnostics[0].message.contains("Unterminated string"));
    }

    #[test]
    fn test_unexpected_character() {
        let mut lexer = Lexer::new("@");
        let (tokens, diagnostics) = lexer.tokenize();

        assert_eq!(tokens[0].kind, TokenKind::Illegal);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "RL1001");
        assert!(diagnostics[0].message.contains('@'));
    }

    #[test]
    fn test_error_recovery_continues_lexing() {
        let mut lexer = Lexer::new("@ let x = 5;");
        let (tokens, diagnostics) = lexer.tokenize();

        assert_eq!(diagnostics.len(), 1);
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Let));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Identifier));
    }

    #[test]
    fn test_whitespace_and_newlines_skipped() {
        let mut lexer = Lexer::new("let x = 5;\nlet y = 10;");
        let (tokens, _) = lexer.tokenize();
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Let,
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Int,
                TokenKind::Semicolon,
                TokenKind::Let,
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Int,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_spans_track_byte_offsets() {
        let mut lexer = Lexer::new("let x");
        let (tokens, _) = lexer.tokenize();
        assert_eq!(tokens[0].span, Span::new(0, 3));
        assert_eq!(tokens[1].span, Span::new(4, 5));
    }

    #[test]
    fn test_dense_operator_run() {
        let mut lexer = Lexer::new("!-/*5;");
        let (tokens, _) = lexer.tokenize();
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Bang,
                TokenKind::Minus,
                TokenKind::Slash,
                TokenKind::Star,
                TokenKind::Int,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[4].lexeme, "5");
    }
}
