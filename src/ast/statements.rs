use crate::ast::expressions::{Condition, Expr};
use crate::ast::list::impl_ast_list;
use crate::ast::literals::Ident;
use crate::ast::{AstKind, Node};
use crate::errors::Pl0Result;
use crate::location::SourceLocation;
use crate::visiters::ASTVisitor;
use serde::Serialize;
use std::any::Any;

/// statement = ident ":=" expression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignStmt {
    pub loc: SourceLocation,
    pub name: String,
    pub expr: Box<Expr>,
}

impl AssignStmt {
    pub fn new(ident: Ident, expr: Expr) -> Self {
        Self {
            loc: ident.loc.clone(),
            name: ident.name,
            expr: Box::new(expr),
        }
    }
}

impl Node for AssignStmt {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::AssignStmt
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        visitor.visit_assign(self)
    }
    fn print(&self) {
        print!("{} := ", self.name);
        self.expr.print();
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// statement = "call" ident
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallStmt {
    pub loc: SourceLocation,
    pub name: String,
}

impl CallStmt {
    pub fn new(ident: Ident) -> Self {
        Self {
            loc: ident.loc.clone(),
            name: ident.name,
        }
    }
}

impl Node for CallStmt {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::CallStmt
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        visitor.visit_call(self)
    }
    fn print(&self) {
        print!("call {}", &self.name);
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// statement = "begin" statement { ";" statement } "end"
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeginStmt {
    pub loc: SourceLocation,
    pub stmts: Stmts,
}

impl BeginStmt {
    pub fn new(stmts: Stmts) -> Self {
        Self {
            loc: stmts.loc.clone(),
            stmts,
        }
    }
}

impl Node for BeginStmt {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::BeginStmt
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        visitor.visit_begin(self)
    }
    fn print(&self) {
        println!("begin");
        for stmt in &self.stmts.stmts {
            stmt.print();
            println!(";");
        }
        print!("end");
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// statement = "if" condition "then" statement "else" statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfStmt {
    pub loc: SourceLocation,
    pub condition: Condition,
    pub then_stmt: Box<Stmt>,
    pub else_stmt: Box<Stmt>,
}

impl IfStmt {
    pub fn new(condition: Condition, then_stmt: Stmt, else_stmt: Stmt) -> Self {
        Self {
            loc: condition.loc().clone(),
            condition,
            then_stmt: Box::new(then_stmt),
            else_stmt: Box::new(else_stmt),
        }
    }
}

impl Node for IfStmt {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::IfStmt
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        visitor.visit_if(self)
    }
    fn print(&self) {
        print!("if ");
        self.condition.print();
        println!(" then");
        self.then_stmt.print();
        println!();
        println!("else");
        self.else_stmt.print();
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// statement = "while" condition "do" statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhileStmt {
    pub loc: SourceLocation,
    pub condition: Condition,
    pub body: Box<Stmt>,
}

impl WhileStmt {
    pub fn new(condition: Condition, body: Stmt) -> Self {
        Self {
            loc: condition.loc().clone(),
            condition,
            body: Box::new(body),
        }
    }
}

impl Node for WhileStmt {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::WhileStmt
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        visitor.visit_while_statement(self)
    }
    fn print(&self) {
        print!("while ");
        self.condition.print();
        println!(" do");
        self.body.print();
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// statement = "read" ident
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadStmt {
    pub loc: SourceLocation,
    pub name: String,
}

impl ReadStmt {
    pub fn new(ident: Ident) -> Self {
        Self {
            loc: ident.loc.clone(),
            name: ident.name,
        }
    }
}

impl Node for ReadStmt {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::ReadStmt
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        visitor.visit_read(self)
    }
    fn print(&self) {
        print!("read {}", &self.name);
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// statement = "write" expression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WriteStmt {
    pub loc: SourceLocation,
    pub expr: Expr,
}

impl WriteStmt {
    pub fn new(expr: Expr) -> Self {
        Self {
            loc: expr.loc().clone(),
            expr,
        }
    }
}

impl Node for WriteStmt {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::WriteStmt
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        visitor.visit_write(self)
    }
    fn print(&self) {
        print!("write ");
        self.expr.print();
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// statement = "skip"
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkipStmt {
    pub loc: SourceLocation,
}

impl SkipStmt {
    pub fn new(loc: SourceLocation) -> Self {
        Self { loc }
    }
}

impl Node for SkipStmt {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::SkipStmt
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        visitor.visit_skip(self)
    }
    fn print(&self) {
        print!("skip");
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// The eight statement forms of the grammar. Sequencing is handled by the
/// `Stmts` wrapper rather than a link on the statement itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    Assign(AssignStmt),
    Call(CallStmt),
    Begin(BeginStmt),
    If(IfStmt),
    While(WhileStmt),
    Read(ReadStmt),
    Write(WriteStmt),
    Skip(SkipStmt),
}

impl From<AssignStmt> for Stmt {
    fn from(s: AssignStmt) -> Self {
        Stmt::Assign(s)
    }
}

impl From<CallStmt> for Stmt {
    fn from(s: CallStmt) -> Self {
        Stmt::Call(s)
    }
}

impl From<BeginStmt> for Stmt {
    fn from(s: BeginStmt) -> Self {
        Stmt::Begin(s)
    }
}

impl From<IfStmt> for Stmt {
    fn from(s: IfStmt) -> Self {
        Stmt::If(s)
    }
}

impl From<WhileStmt> for Stmt {
    fn from(s: WhileStmt) -> Self {
        Stmt::While(s)
    }
}

impl From<ReadStmt> for Stmt {
    fn from(s: ReadStmt) -> Self {
        Stmt::Read(s)
    }
}

impl From<WriteStmt> for Stmt {
    fn from(s: WriteStmt) -> Self {
        Stmt::Write(s)
    }
}

impl From<SkipStmt> for Stmt {
    fn from(s: SkipStmt) -> Self {
        Stmt::Skip(s)
    }
}

impl Node for Stmt {
    fn loc(&self) -> &SourceLocation {
        match self {
            Stmt::Assign(s) => s.loc(),
            Stmt::Call(s) => s.loc(),
            Stmt::Begin(s) => s.loc(),
            Stmt::If(s) => s.loc(),
            Stmt::While(s) => s.loc(),
            Stmt::Read(s) => s.loc(),
            Stmt::Write(s) => s.loc(),
            Stmt::Skip(s) => s.loc(),
        }
    }
    fn kind(&self) -> AstKind {
        AstKind::Stmt
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        match self {
            Stmt::Assign(s) => s.accept(visitor),
            Stmt::Call(s) => s.accept(visitor),
            Stmt::Begin(s) => s.accept(visitor),
            Stmt::If(s) => s.accept(visitor),
            Stmt::While(s) => s.accept(visitor),
            Stmt::Read(s) => s.accept(visitor),
            Stmt::Write(s) => s.accept(visitor),
            Stmt::Skip(s) => s.accept(visitor),
        }
    }
    fn print(&self) {
        match self {
            Stmt::Assign(s) => s.print(),
            Stmt::Call(s) => s.print(),
            Stmt::Begin(s) => s.print(),
            Stmt::If(s) => s.print(),
            Stmt::While(s) => s.print(),
            Stmt::Read(s) => s.print(),
            Stmt::Write(s) => s.print(),
            Stmt::Skip(s) => s.print(),
        }
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// An ordered statement sequence, the payload of a begin statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stmts {
    pub loc: SourceLocation,
    pub stmts: Vec<Stmt>,
}

impl_ast_list!(Stmts, Stmt, stmts);

impl Node for Stmts {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::Stmts
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        for stmt in &self.stmts {
            stmt.accept(visitor)?;
        }
        Ok(())
    }
    fn print(&self) {
        let mut first = true;
        for stmt in &self.stmts {
            if first {
                first = false;
            } else {
                println!(";");
            }
            stmt.print();
        }
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}
