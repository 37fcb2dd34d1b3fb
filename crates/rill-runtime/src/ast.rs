//! Abstract Syntax Tree (AST) definitions
//!
//! Statement and expression nodes produced by the parser. Every node carries
//! the span of its originating token for diagnostics. `Display` renders the
//! canonical string form: fully parenthesized expressions, `let`/`return`
//! statements with trailing semicolons, blocks and programs concatenated
//! without separators.

use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level program: a sequence of statements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

/// Statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expr(ExprStmt),
}

/// Let statement: `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetStmt {
    pub name: Identifier,
    pub value: Expr,
    pub span: Span,
}

/// Return statement: `return <value>;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStmt {
    pub value: Expr,
    pub span: Span,
}

/// Expression statement: a bare expression, optionally `;`-terminated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprStmt {
    pub expr: Expr,
    pub span: Span,
}

/// Block of statements: `{ ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

/// Expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    BooleanLiteral(BooleanLiteral),
    StringLiteral(StringLiteral),
    ArrayLiteral(ArrayLiteral),
    HashLiteral(HashLiteral),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
    Function(FunctionLiteral),
    Call(CallExpr),
    Index(IndexExpr),
}

/// Identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

/// Integer literal (signed 64-bit)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegerLiteral {
    pub value: i64,
    pub span: Span,
}

/// Boolean literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanLiteral {
    pub value: bool,
    pub span: Span,
}

/// String literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
    pub span: Span,
}

/// Array literal: `[a, b, c]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayLiteral {
    pub elements: Vec<Expr>,
    pub span: Span,
}

/// Hash literal: `{k: v, ...}`
///
/// Pairs keep their source order so serialization stays stable; keys are
/// arbitrary expressions checked for hashability at evaluation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashLiteral {
    pub pairs: Vec<(Expr, Expr)>,
    pub span: Span,
}

/// Prefix expression: `!x`, `-x`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefixExpr {
    pub op: PrefixOp,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Infix expression: `a + b`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfixExpr {
    pub op: InfixOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

/// If expression: `if (<cond>) { ... } else { ... }`
///
/// The consequence is always present; the alternative may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfExpr {
    pub cond: Box<Expr>,
    pub consequence: Block,
    pub alternative: Option<Block>,
    pub span: Span,
}

/// Function literal: `fn(a, b) { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionLiteral {
    pub params: Vec<Identifier>,
    pub body: Block,
    pub span: Span,
}

/// Call expression: `callee(args...)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
    pub span: Span,
}

/// Index expression: `target[index]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexExpr {
    pub target: Box<Expr>,
    pub index: Box<Expr>,
    pub span: Span,
}

/// Prefix operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrefixOp {
    /// `!`
    Not,
    /// `-`
    Negate,
}

impl PrefixOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrefixOp::Not => "!",
            PrefixOp::Negate => "-",
        }
    }
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infix operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfixOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Lt,
    Gt,
}

impl InfixOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfixOp::Add => "+",
            InfixOp::Sub => "-",
            InfixOp::Mul => "*",
            InfixOp::Div => "/",
            InfixOp::Eq => "==",
            InfixOp::NotEq => "!=",
            InfixOp::Lt => "<",
            InfixOp::Gt => ">",
        }
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Helper methods for getting spans from AST nodes

impl Expr {
    /// Get the span of this expression
    pub fn span(&self) -> Span {
        match self {
            Expr::Identifier(id) => id.span,
            Expr::IntegerLiteral(i) => i.span,
            Expr::BooleanLiteral(b) => b.span,
            Expr::StringLiteral(s) => s.span,
            Expr::ArrayLiteral(a) => a.span,
            Expr::HashLiteral(h) => h.span,
            Expr::Prefix(p) => p.span,
            Expr::Infix(i) => i.span,
            Expr::If(i) => i.span,
            Expr::Function(f) => f.span,
            Expr::Call(c) => c.span,
            Expr::Index(i) => i.span,
        }
    }
}

impl Stmt {
    /// Get the span of this statement
    pub fn span(&self) -> Span {
        match self {
            Stmt::Let(l) => l.span,
            Stmt::Return(r) => r.span,
            Stmt::Expr(e) => e.span,
        }
    }
}

// === Canonical string form ===

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let(l) => write!(f, "let {} = {};", l.name, l.value),
            Stmt::Return(r) => write!(f, "return {};", r.value),
            Stmt::Expr(e) => write!(f, "{}", e.expr),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(id) => write!(f, "{}", id),
            Expr::IntegerLiteral(i) => write!(f, "{}", i.value),
            Expr::BooleanLiteral(b) => write!(f, "{}", b.value),
            Expr::StringLiteral(s) => write!(f, "\"{}\"", s.value),
            Expr::ArrayLiteral(a) => {
                let elements: Vec<String> = a.elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", elements.join(", "))
            }
            Expr::HashLiteral(h) => {
                let pairs: Vec<String> = h
                    .pairs
                    .iter()
                    .map(|(k, v)| format!("{}:{}", k, v))
                    .collect();
                write!(f, "{{{}}}", pairs.join(", "))
            }
            Expr::Prefix(p) => write!(f, "({}{})", p.op, p.right),
            Expr::Infix(i) => write!(f, "({} {} {})", i.left, i.op, i.right),
            Expr::If(i) => {
                write!(f, "if{} {}", i.cond, i.consequence)?;
                if let Some(alt) = &i.alternative {
                    write!(f, "else {}", alt)?;
                }
                Ok(())
            }
            Expr::Function(func) => {
                let params: Vec<String> = func.params.iter().map(|p| p.name.clone()).collect();
                write!(f, "fn({}){{{}}}", params.join(", "), func.body)
            }
            Expr::Call(c) => {
                let args: Vec<String> = c.args.iter().map(|a| a.to_string()).collect();
                write!(f, "{}({})", c.callee, args.join(", "))
            }
            Expr::Index(i) => write!(f, "({}[{}])", i.target, i.index),
        }
    }
}
