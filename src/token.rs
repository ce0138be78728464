use crate::ast::{AstKind, Node};
use crate::errors::Pl0Result;
use crate::location::SourceLocation;
use crate::visiters::ASTVisitor;
use serde::Serialize;
use std::any::Any;
use std::fmt;

/// Operator and sign categories that survive into the tree. Everything else
/// (keywords, punctuation) is consumed by the parser before construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    Plus,
    Minus,
    Multiply,
    Divide,
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessThanEqual,
    GreaterThanEqual,
}

/// An operator or sign token as handed over by the lexer, kept verbatim so
/// diagnostics can echo the original spelling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub loc: SourceLocation,
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(loc: SourceLocation, text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            loc,
            text: text.into(),
            kind,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl Node for Token {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::Token
    }
    fn accept(&self, _visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        // Operator tokens are visited through the node that carries them
        Ok(())
    }
    fn print(&self) {
        print!("{}", self.text);
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}
