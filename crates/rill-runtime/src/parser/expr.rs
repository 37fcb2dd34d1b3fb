//! Expression parsing (Pratt parsing)

use crate::ast::*;
use crate::diagnostic::error_codes;
use crate::parser::{Parser, Precedence};
use crate::token::{Token, TokenKind};

impl Parser {
    /// Parse an expression
    pub(super) fn parse_expression(&mut self) -> Result<Expr, ()> {
        self.parse_precedence(Precedence::Lowest)
    }

    /// Parse expression with given precedence
    pub(super) fn parse_precedence(&mut self, precedence: Precedence) -> Result<Expr, ()> {
        let mut left = self.parse_prefix()?;

        while precedence < self.current_precedence() {
            left = self.parse_infix(left)?;
        }

        Ok(left)
    }

    /// Parse prefix expression
    fn parse_prefix(&mut self) -> Result<Expr, ()> {
        match self.peek().kind {
            TokenKind::Int => self.parse_integer(),
            TokenKind::String => self.parse_string(),
            TokenKind::True | TokenKind::False => self.parse_bool(),
            TokenKind::Identifier => self.parse_identifier(),
            TokenKind::Bang | TokenKind::Minus => self.parse_unary(),
            TokenKind::LeftParen => self.parse_group(),
            TokenKind::LeftBracket => self.parse_array_literal(),
            TokenKind::LeftBrace => self.parse_hash_literal(),
            TokenKind::If => self.parse_if(),
            TokenKind::Fn => self.parse_function_literal(),
            kind => {
                self.error(&format!("no prefix parse function for {}", kind));
                Err(())
            }
        }
    }

    /// Parse infix expression
    fn parse_infix(&mut self, left: Expr) -> Result<Expr, ()> {
        match self.peek().kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::EqualEqual
            | TokenKind::BangEqual
            | TokenKind::Less
            | TokenKind::Greater => self.parse_binary(left),
            TokenKind::LeftParen => self.parse_call(left),
            TokenKind::LeftBracket => self.parse_index(left),
            _ => Ok(left),
        }
    }

    /// Get current token precedence
    pub(super) fn current_precedence(&self) -> Precedence {
        Self::token_precedence(self.peek())
    }

    /// Get precedence for a token
    ///
    /// Tokens with no infix role rank `Lowest`.
    pub(super) fn token_precedence(token: &Token) -> Precedence {
        match token.kind {
            TokenKind::EqualEqual | TokenKind::BangEqual => Precedence::Equality,
            TokenKind::Less | TokenKind::Greater => Precedence::Comparison,
            TokenKind::Plus | TokenKind::Minus => Precedence::Term,
            TokenKind::Star | TokenKind::Slash => Precedence::Factor,
            TokenKind::LeftParen => Precedence::Call,
            TokenKind::LeftBracket => Precedence::Index,
            _ => Precedence::Lowest,
        }
    }

    /// Parse integer literal
    fn parse_integer(&mut self) -> Result<Expr, ()> {
        let token = self.advance();
        let span = token.span;
        let lexeme = token.lexeme.clone();

        match lexeme.parse::<i64>() {
            Ok(value) => Ok(Expr::IntegerLiteral(IntegerLiteral { value, span })),
            Err(_) => {
                self.error_at_with_code(
                    error_codes::BAD_INTEGER,
                    &format!("could not parse {} as integer", lexeme),
                    span,
                );
                Err(())
            }
        }
    }

    /// Parse string literal
    fn parse_string(&mut self) -> Result<Expr, ()> {
        let token = self.advance();
        Ok(Expr::StringLiteral(StringLiteral {
            value: token.lexeme.clone(),
            span: token.span,
        }))
    }

    /// Parse boolean literal
    fn parse_bool(&mut self) -> Result<Expr, ()> {
        let token = self.advance();
        Ok(Expr::BooleanLiteral(BooleanLiteral {
            value: token.kind == TokenKind::True,
            span: token.span,
        }))
    }

    /// Parse identifier
    fn parse_identifier(&mut self) -> Result<Expr, ()> {
        let token = self.advance();
        Ok(Expr::Identifier(Identifier {
            name: token.lexeme.clone(),
            span: token.span,
        }))
    }

    /// Parse unary expression: `!x`, `-x`
    fn parse_unary(&mut self) -> Result<Expr, ()> {
        let op_token = self.advance();
        let op_span = op_token.span;
        let op = match op_token.kind {
            TokenKind::Bang => PrefixOp::Not,
            TokenKind::Minus => PrefixOp::Negate,
            _ => unreachable!(),
        };

        let right = self.parse_precedence(Precedence::Unary)?;
        let right_span = right.span();

        Ok(Expr::Prefix(PrefixExpr {
            op,
            right: Box::new(right),
            span: op_span.merge(right_span),
        }))
    }

    /// Parse binary expression
    fn parse_binary(&mut self, left: Expr) -> Result<Expr, ()> {
        let left_span = left.span();
        let op_token = self.advance();
        let precedence = Self::token_precedence(op_token);

        let op = match op_token.kind {
            TokenKind::Plus => InfixOp::Add,
            TokenKind::Minus => InfixOp::Sub,
            TokenKind::Star => InfixOp::Mul,
            TokenKind::Slash => InfixOp::Div,
            TokenKind::EqualEqual => InfixOp::Eq,
            TokenKind::BangEqual => InfixOp::NotEq,
            TokenKind::Less => InfixOp::Lt,
            TokenKind::Greater => InfixOp::Gt,
            _ => unreachable!(),
        };

        let right = self.parse_precedence(precedence)?;
        let right_span = right.span();

        Ok(Expr::Infix(InfixExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
            span: left_span.merge(right_span),
        }))
    }

    /// Parse grouped expression: `( <expr> )`
    ///
    /// Grouping changes tree shape only; there is no dedicated node.
    fn parse_group(&mut self) -> Result<Expr, ()> {
        self.consume(TokenKind::LeftParen)?;
        let expr = self.parse_expression()?;
        self.consume(TokenKind::RightParen)?;
        Ok(expr)
    }

    /// Parse if expression: `if (<cond>) <block>` optionally `else <block>`
    ///
    /// Parentheses around the condition and braces around both blocks are
    /// mandatory.
    fn parse_if(&mut self) -> Result<Expr, ()> {
        let if_span = self.consume(TokenKind::If)?.span;

        self.consume(TokenKind::LeftParen)?;
        let cond = self.parse_expression()?;
        self.consume(TokenKind::RightParen)?;

        let consequence = self.parse_block()?;
        let mut end_span = consequence.span;

        let alternative = if self.match_token(TokenKind::Else) {
            let alt = self.parse_block()?;
            end_span = alt.span;
            Some(alt)
        } else {
            None
        };

        Ok(Expr::If(IfExpr {
            cond: Box::new(cond),
            consequence,
            alternative,
            span: if_span.merge(end_span),
        }))
    }

    /// Parse function literal: `fn ( <params>? ) <block>`
    fn parse_function_literal(&mut self) -> Result<Expr, ()> {
        let fn_span = self.consume(TokenKind::Fn)?.span;

        self.consume(TokenKind::LeftParen)?;

        let mut params = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                let param_token = self.consume(TokenKind::Identifier)?;
                params.push(Identifier {
                    name: param_token.lexeme.clone(),
                    span: param_token.span,
                });

                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }

        self.consume(TokenKind::RightParen)?;

        let body = self.parse_block()?;
        let end_span = body.span;

        Ok(Expr::Function(FunctionLiteral {
            params,
            body,
            span: fn_span.merge(end_span),
        }))
    }

    /// Parse call expression, invoked when `(` follows an expression
    fn parse_call(&mut self, callee: Expr) -> Result<Expr, ()> {
        let callee_span = callee.span();
        self.consume(TokenKind::LeftParen)?;

        let (args, end_span) = self.parse_expression_list(TokenKind::RightParen)?;

        Ok(Expr::Call(CallExpr {
            callee: Box::new(callee),
            args,
            span: callee_span.merge(end_span),
        }))
    }

    /// Parse array literal: `[ <elements>? ]`
    fn parse_array_literal(&mut self) -> Result<Expr, ()> {
        let start_span = self.consume(TokenKind::LeftBracket)?.span;

        let (elements, end_span) = self.parse_expression_list(TokenKind::RightBracket)?;

        Ok(Expr::ArrayLiteral(ArrayLiteral {
            elements,
            span: start_span.merge(end_span),
        }))
    }

    /// Parse hash literal: `{ <key> : <value>, ... }`
    ///
    /// Keys are arbitrary expressions; hashability is checked at evaluation
    /// time. Pairs keep their source order.
    fn parse_hash_literal(&mut self) -> Result<Expr, ()> {
        let start_span = self.consume(TokenKind::LeftBrace)?.span;

        let mut pairs = Vec::new();
        if !self.check(TokenKind::RightBrace) {
            loop {
                let key = self.parse_expression()?;
                self.consume(TokenKind::Colon)?;
                let value = self.parse_expression()?;
                pairs.push((key, value));

                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }

        let end_span = self.consume(TokenKind::RightBrace)?.span;

        Ok(Expr::HashLiteral(HashLiteral {
            pairs,
            span: start_span.merge(end_span),
        }))
    }

    /// Parse index expression, invoked when `[` follows an expression
    fn parse_index(&mut self, target: Expr) -> Result<Expr, ()> {
        let target_span = target.span();
        self.consume(TokenKind::LeftBracket)?;
        let index = self.parse_expression()?;
        let end_span = self.consume(TokenKind::RightBracket)?.span;

        Ok(Expr::Index(IndexExpr {
            target: Box::new(target),
            index: Box::new(index),
            span: target_span.merge(end_span),
        }))
    }

    /// Parse a comma-separated expression list up to `end`
    ///
    /// Returns the expressions and the span of the end token.
    fn parse_expression_list(
        &mut self,
        end: TokenKind,
    ) -> Result<(Vec<Expr>, crate::span::Span), ()> {
        let mut items = Vec::new();

        if self.check(end) {
            let end_span = self.advance().span;
            return Ok((items, end_span));
        }

        items.push(self.parse_expression()?);
        while self.match_token(TokenKind::Comma) {
            items.push(self.parse_expression()?);
        }

        let end_span = self.consume(end)?.span;
        Ok((items, end_span))
    }
}
