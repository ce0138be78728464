use crate::ast::block::Block;
use crate::ast::list::impl_ast_list;
use crate::ast::literals::{Empty, Ident, Number};
use crate::ast::{AstKind, Node};
use crate::errors::Pl0Result;
use crate::location::SourceLocation;
use crate::visiters::ASTVisitor;
use serde::Serialize;
use std::any::Any;

/// const-def = ident "=" number
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstDef {
    pub loc: SourceLocation,
    pub ident: Ident,
    pub number: Number,
}

impl ConstDef {
    pub fn new(ident: Ident, number: Number) -> Self {
        Self {
            loc: ident.loc.clone(),
            ident,
            number,
        }
    }
}

impl Node for ConstDef {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::ConstDef
    }
    fn accept(&self, _visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        // Visited through the enclosing ConstDecl
        Ok(())
    }
    fn print(&self) {
        print!("{} = {}", self.ident.name, self.number.value);
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// const-defs = const-def { "," const-def }
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstDefs {
    pub loc: SourceLocation,
    pub defs: Vec<ConstDef>,
}

impl_ast_list!(ConstDefs, ConstDef, defs);

impl Node for ConstDefs {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::ConstDefs
    }
    fn accept(&self, _visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        Ok(())
    }
    fn print(&self) {
        let mut first = true;
        for def in &self.defs {
            if first {
                first = false;
            } else {
                print!(", ");
            }
            def.print();
        }
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// const-decl = "const" const-defs ";"
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstDecl {
    pub loc: SourceLocation,
    pub const_defs: ConstDefs,
}

impl ConstDecl {
    pub fn new(const_defs: ConstDefs) -> Self {
        Self {
            loc: const_defs.loc.clone(),
            const_defs,
        }
    }
}

impl Node for ConstDecl {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::ConstDecl
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        visitor.visit_const_decl(self)
    }
    fn print(&self) {
        print!("const ");
        self.const_defs.print();
        println!(";");
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// const-decls = { const-decl }
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstDecls {
    pub loc: SourceLocation,
    pub decls: Vec<ConstDecl>,
}

impl ConstDecls {
    /// Start the zero-or-more family from the empty marker; the wrapper
    /// keeps the marker's location even after declarations are appended.
    pub fn empty(empty: Empty) -> Self {
        Self {
            loc: empty.loc,
            decls: Vec::new(),
        }
    }
}

impl_ast_list!(ConstDecls, ConstDecl, decls);

impl Node for ConstDecls {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::ConstDecls
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        for decl in &self.decls {
            decl.accept(visitor)?;
        }
        Ok(())
    }
    fn print(&self) {
        for decl in &self.decls {
            decl.print();
        }
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// idents = ident { "," ident }
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Idents {
    pub loc: SourceLocation,
    pub idents: Vec<Ident>,
}

impl_ast_list!(Idents, Ident, idents);

impl Node for Idents {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::Idents
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        for ident in &self.idents {
            Node::accept(ident, visitor)?;
        }
        Ok(())
    }
    fn print(&self) {
        let mut first = true;
        for ident in &self.idents {
            if first {
                first = false;
            } else {
                print!(", ");
            }
            ident.print();
        }
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// var-decl = "var" idents ";"
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarDecl {
    pub loc: SourceLocation,
    pub idents: Idents,
}

impl VarDecl {
    pub fn new(idents: Idents) -> Self {
        Self {
            loc: idents.loc.clone(),
            idents,
        }
    }
}

impl Node for VarDecl {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::VarDecl
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        visitor.visit_var_decl(self)
    }
    fn print(&self) {
        print!("var ");
        self.idents.print();
        println!(";");
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// var-decls = { var-decl }
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarDecls {
    pub loc: SourceLocation,
    pub decls: Vec<VarDecl>,
}

impl VarDecls {
    pub fn empty(empty: Empty) -> Self {
        Self {
            loc: empty.loc,
            decls: Vec::new(),
        }
    }
}

impl_ast_list!(VarDecls, VarDecl, decls);

impl Node for VarDecls {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::VarDecls
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        for decl in &self.decls {
            decl.accept(visitor)?;
        }
        Ok(())
    }
    fn print(&self) {
        for decl in &self.decls {
            decl.print();
        }
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// proc-decl = "procedure" ident ";" block ";"
///
/// The nested block is boxed: procedure bodies recurse through Block and
/// the body is owned exclusively by its declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcDecl {
    pub loc: SourceLocation,
    pub name: String,
    pub block: Box<Block>,
}

impl ProcDecl {
    pub fn new(ident: Ident, block: Block) -> Self {
        Self {
            loc: ident.loc.clone(),
            name: ident.name,
            block: Box::new(block),
        }
    }
}

impl Node for ProcDecl {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::ProcDecl
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        visitor.visit_proc_decl(self)
    }
    fn print(&self) {
        println!("procedure {};", self.name);
        self.block.print();
        println!(";");
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// proc-decls = { proc-decl }
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcDecls {
    pub loc: SourceLocation,
    pub decls: Vec<ProcDecl>,
}

impl ProcDecls {
    pub fn empty(empty: Empty) -> Self {
        Self {
            loc: empty.loc,
            decls: Vec::new(),
        }
    }
}

impl_ast_list!(ProcDecls, ProcDecl, decls);

impl Node for ProcDecls {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::ProcDecls
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        for decl in &self.decls {
            decl.accept(visitor)?;
        }
        Ok(())
    }
    fn print(&self) {
        for decl in &self.decls {
            decl.print();
        }
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}
