use crate::ast::{AstKind, ExpressionNode, Node};
use crate::errors::Pl0Result;
use crate::location::SourceLocation;
use crate::token::Token;
use crate::visiters::ASTVisitor;
use serde::Serialize;
use std::any::Any;

/// An identifier occurrence: a const-def target, a var-decl name, a
/// procedure name or an expression leaf.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ident {
    pub loc: SourceLocation,
    pub name: String,
}

impl Ident {
    pub fn new(loc: SourceLocation, name: impl Into<String>) -> Self {
        Self {
            loc,
            name: name.into(),
        }
    }
}

impl Node for Ident {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::Ident
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        // For Node trait, we ignore the return value
        let _ = visitor.visit_ident(self)?;
        Ok(())
    }
    fn print(&self) {
        print!("{}", self.name);
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ExpressionNode for Ident {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<String> {
        visitor.visit_ident(self)
    }
}

/// An integer literal. `text` keeps the lexeme exactly as written so
/// diagnostics can echo the source; negation of a signed literal touches
/// only `value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Number {
    pub loc: SourceLocation,
    pub text: String,
    pub value: i64,
}

impl Number {
    pub fn new(loc: SourceLocation, text: impl Into<String>, value: i64) -> Self {
        Self {
            loc,
            text: text.into(),
            value,
        }
    }

    /// Build a number from the literal token the lexer produced, keeping
    /// the token's location and spelling.
    pub fn from_token(token: &Token, value: i64) -> Self {
        Self::new(token.loc.clone(), token.text.clone(), value)
    }
}

impl Node for Number {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::Number
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        // For Node trait, we ignore the return value
        let _ = visitor.visit_number(self)?;
        Ok(())
    }
    fn print(&self) {
        print!("{}", self.value);
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ExpressionNode for Number {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<String> {
        visitor.visit_number(self)
    }
}

/// Placeholder for a zero-occurrence production. Carries only the location
/// where the absent construct would have started, which the enclosing
/// wrapper then inherits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Empty {
    pub loc: SourceLocation,
}

impl Empty {
    pub fn new(loc: SourceLocation) -> Self {
        Self { loc }
    }
}

impl Node for Empty {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::Empty
    }
    fn accept(&self, _visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        // Nothing to visit
        Ok(())
    }
    fn print(&self) {}
    fn as_any(&self) -> &dyn Any {
        self
    }
}
