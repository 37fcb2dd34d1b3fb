//! Statement parsing (recursive descent)

use crate::ast::*;
use crate::parser::Parser;
use crate::token::TokenKind;

impl Parser {
    /// Parse a statement, dispatching on the current token
    pub(super) fn parse_statement(&mut self) -> Result<Stmt, ()> {
        match self.peek().kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parse a let statement: `let <name> = <expr>;`
    fn parse_let_statement(&mut self) -> Result<Stmt, ()> {
        let let_span = self.consume(TokenKind::Let)?.span;

        let name_token = self.consume(TokenKind::Identifier)?;
        let name = Identifier {
            name: name_token.lexeme.clone(),
            span: name_token.span,
        };

        self.consume(TokenKind::Assign)?;

        let value = self.parse_expression()?;
        let end_span = value.span();

        // Trailing semicolon is syntactic noise
        self.match_token(TokenKind::Semicolon);

        Ok(Stmt::Let(LetStmt {
            name,
            value,
            span: let_span.merge(end_span),
        }))
    }

    /// Parse a return statement: `return <expr>;`
    fn parse_return_statement(&mut self) -> Result<Stmt, ()> {
        let return_span = self.consume(TokenKind::Return)?.span;

        let value = self.parse_expression()?;
        let end_span = value.span();

        self.match_token(TokenKind::Semicolon);

        Ok(Stmt::Return(ReturnStmt {
            value,
            span: return_span.merge(end_span),
        }))
    }

    /// Parse an expression statement: `<expr>;`
    fn parse_expression_statement(&mut self) -> Result<Stmt, ()> {
        let expr = self.parse_expression()?;
        let span = expr.span();

        self.match_token(TokenKind::Semicolon);

        Ok(Stmt::Expr(ExprStmt { expr, span }))
    }

    /// Parse a braced block: `{ <statements> }`
    pub(super) fn parse_block(&mut self) -> Result<Block, ()> {
        let start_span = self.consume(TokenKind::LeftBrace)?.span;

        let mut statements = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        let end_span = self.consume(TokenKind::RightBrace)?.span;

        Ok(Block {
            statements,
            span: start_span.merge(end_span),
        })
    }
}
