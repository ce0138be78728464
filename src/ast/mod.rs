
// Abstract Syntax Tree definitions for the PL/0 front end.
// This module contains all AST node types, the kind registry, the generic
// list utilities and the traits shared by every node.

mod traits;
pub use traits::{ExpressionNode, Node};

mod list;
pub use list::AstList;

// AST node modules
pub mod block;
pub mod declarations;
pub mod expressions;
pub mod literals;
pub mod statements;

pub use block::Block;
pub use declarations::{
    ConstDecl, ConstDecls, ConstDef, ConstDefs, Idents, ProcDecl, ProcDecls, VarDecl, VarDecls,
};
pub use expressions::{BinaryOpExpr, Condition, Expr, OddCondition, RelOpCondition};
pub use literals::{Empty, Ident, Number};
pub use statements::{
    AssignStmt, BeginStmt, CallStmt, IfStmt, ReadStmt, SkipStmt, Stmt, Stmts, WhileStmt, WriteStmt,
};

use serde::Serialize;

/// The closed registry of syntactic categories. Every node reports exactly
/// one of these through `Node::kind`, so generic walkers can classify a
/// node without downcasting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AstKind {
    Block,
    ConstDecls,
    VarDecls,
    ProcDecls,
    ConstDecl,
    ConstDefs,
    ConstDef,
    VarDecl,
    Idents,
    ProcDecl,
    Stmt,
    AssignStmt,
    CallStmt,
    BeginStmt,
    IfStmt,
    WhileStmt,
    ReadStmt,
    WriteStmt,
    SkipStmt,
    Stmts,
    Condition,
    RelOpCondition,
    OddCondition,
    Expr,
    BinaryOpExpr,
    Token,
    Number,
    Ident,
    Empty,
}

/// Return a fresh heap-boxed copy of a node, for callers that must keep a
/// node alive beyond the constructing call.
pub fn heap_copy<T: Clone>(node: &T) -> Box<T> {
    Box::new(node.clone())
}
