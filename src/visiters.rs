use crate::ast::block::Block;
use crate::ast::declarations::ConstDecl;
use crate::ast::declarations::ProcDecl;
use crate::ast::declarations::VarDecl;
use crate::ast::expressions::BinaryOpExpr;
use crate::ast::expressions::OddCondition;
use crate::ast::expressions::RelOpCondition;
use crate::ast::literals::Ident;
use crate::ast::literals::Number;
use crate::ast::statements::AssignStmt;
use crate::ast::statements::BeginStmt;
use crate::ast::statements::CallStmt;
use crate::ast::statements::IfStmt;
use crate::ast::statements::ReadStmt;
use crate::ast::statements::SkipStmt;
use crate::ast::statements::WhileStmt;
use crate::ast::statements::WriteStmt;
use crate::errors::Pl0Result;

pub trait ASTVisitor {
    fn visit_ident(&mut self, ident: &Ident) -> Pl0Result<String>;
    fn visit_number(&mut self, number: &Number) -> Pl0Result<String>;
    fn visit_binary_operation(&mut self, binary_operation: &BinaryOpExpr) -> Pl0Result<String>;
    fn visit_odd_condition(&mut self, condition: &OddCondition) -> Pl0Result<String>;
    fn visit_relational_condition(&mut self, condition: &RelOpCondition) -> Pl0Result<String>;
    fn visit_assign(&mut self, stmt: &AssignStmt) -> Pl0Result<()>;
    fn visit_call(&mut self, stmt: &CallStmt) -> Pl0Result<()>;
    fn visit_begin(&mut self, stmt: &BeginStmt) -> Pl0Result<()>;
    fn visit_if(&mut self, stmt: &IfStmt) -> Pl0Result<()>;
    fn visit_while_statement(&mut self, stmt: &WhileStmt) -> Pl0Result<()>;
    fn visit_read(&mut self, stmt: &ReadStmt) -> Pl0Result<()>;
    fn visit_write(&mut self, stmt: &WriteStmt) -> Pl0Result<()>;
    fn visit_skip(&mut self, stmt: &SkipStmt) -> Pl0Result<()>;
    fn visit_const_decl(&mut self, decl: &ConstDecl) -> Pl0Result<()>;
    fn visit_var_decl(&mut self, decl: &VarDecl) -> Pl0Result<()>;
    fn visit_proc_decl(&mut self, decl: &ProcDecl) -> Pl0Result<()>;
    fn visit_block(&mut self, block: &Block) -> Pl0Result<()>;
}
