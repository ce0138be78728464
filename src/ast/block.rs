use crate::ast::declarations::{ConstDecls, ProcDecls, VarDecls};
use crate::ast::statements::Stmt;
use crate::ast::{AstKind, Node};
use crate::errors::Pl0Result;
use crate::location::SourceLocation;
use crate::visiters::ASTVisitor;
use serde::Serialize;
use std::any::Any;

/// block = const-decls var-decls proc-decls statement
///
/// The unit of a whole program and of every procedure body. Its location
/// is the const-decls' location: const declarations are the first possible
/// construct of a block, and the empty marker already carries the right
/// line when there are none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub loc: SourceLocation,
    pub const_decls: ConstDecls,
    pub var_decls: VarDecls,
    pub proc_decls: ProcDecls,
    pub stmt: Stmt,
}

impl Block {
    pub fn new(
        const_decls: ConstDecls,
        var_decls: VarDecls,
        proc_decls: ProcDecls,
        stmt: Stmt,
    ) -> Self {
        Self {
            loc: const_decls.loc.clone(),
            const_decls,
            var_decls,
            proc_decls,
            stmt,
        }
    }
}

impl Node for Block {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::Block
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        visitor.visit_block(self)
    }
    fn print(&self) {
        self.const_decls.print();
        self.var_decls.print();
        self.proc_decls.print();
        self.stmt.print();
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}
