use crate::ast::AstKind;
use crate::errors::Pl0Result;
use crate::location::SourceLocation;
use crate::visiters::ASTVisitor;
use std::any::Any;

pub trait Node {
    fn loc(&self) -> &SourceLocation;
    fn kind(&self) -> AstKind;
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()>;
    fn print(&self);
    fn as_any(&self) -> &dyn Any;

    fn filename(&self) -> &str {
        &self.loc().filename
    }

    fn line(&self) -> usize {
        self.loc().line
    }
}

pub trait ExpressionNode: Node {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<String>;
}
