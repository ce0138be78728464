use crate::ast::literals::{Ident, Number};
use crate::ast::{AstKind, ExpressionNode, Node};
use crate::errors::Pl0Result;
use crate::location::SourceLocation;
use crate::token::Token;
use crate::visiters::ASTVisitor;
use serde::Serialize;
use std::any::Any;

/// expression = expression arithOp expression. Operands are boxed so the
/// nesting depth is unbounded; each operand is owned exclusively by this
/// node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryOpExpr {
    pub loc: SourceLocation,
    pub left: Box<Expr>,
    pub op: Token,
    pub right: Box<Expr>,
}

impl BinaryOpExpr {
    /// The new node inherits the left operand's location, the leftmost
    /// token of the production.
    pub fn new(left: Expr, op: Token, right: Expr) -> Self {
        Self {
            loc: left.loc().clone(),
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

impl Node for BinaryOpExpr {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::BinaryOpExpr
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        // For Node trait, we ignore the return value
        let _ = visitor.visit_binary_operation(self)?;
        Ok(())
    }
    fn print(&self) {
        self.left.print();
        print!(" {} ", self.op.text);
        self.right.print();
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ExpressionNode for BinaryOpExpr {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<String> {
        visitor.visit_binary_operation(self)
    }
}

/// expression = expression arithOp expression | ident | number
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Binary(BinaryOpExpr),
    Ident(Ident),
    Number(Number),
}

impl Expr {
    /// A number literal preceded by a unary minus. The expression takes
    /// the sign token's location and the arithmetically negated value;
    /// the literal's spelling stays untouched for diagnostics.
    pub fn negated_number(sign: &Token, mut number: Number) -> Self {
        number.loc = sign.loc.clone();
        number.value = -number.value;
        Expr::Number(number)
    }

    /// A number literal preceded by a unary plus. Only the location moves
    /// to the sign token.
    pub fn pos_number(sign: &Token, mut number: Number) -> Self {
        number.loc = sign.loc.clone();
        Expr::Number(number)
    }
}

impl From<BinaryOpExpr> for Expr {
    fn from(e: BinaryOpExpr) -> Self {
        Expr::Binary(e)
    }
}

impl From<Ident> for Expr {
    fn from(e: Ident) -> Self {
        Expr::Ident(e)
    }
}

impl From<Number> for Expr {
    fn from(e: Number) -> Self {
        Expr::Number(e)
    }
}

impl Node for Expr {
    fn loc(&self) -> &SourceLocation {
        match self {
            Expr::Binary(e) => e.loc(),
            Expr::Ident(e) => e.loc(),
            Expr::Number(e) => e.loc(),
        }
    }
    fn kind(&self) -> AstKind {
        AstKind::Expr
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        match self {
            Expr::Binary(e) => Node::accept(e, visitor),
            Expr::Ident(e) => Node::accept(e, visitor),
            Expr::Number(e) => Node::accept(e, visitor),
        }
    }
    fn print(&self) {
        match self {
            Expr::Binary(e) => e.print(),
            Expr::Ident(e) => e.print(),
            Expr::Number(e) => e.print(),
        }
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ExpressionNode for Expr {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<String> {
        match self {
            Expr::Binary(e) => ExpressionNode::accept(e, visitor),
            Expr::Ident(e) => ExpressionNode::accept(e, visitor),
            Expr::Number(e) => ExpressionNode::accept(e, visitor),
        }
    }
}

/// condition = "odd" expression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OddCondition {
    pub loc: SourceLocation,
    pub expr: Expr,
}

impl OddCondition {
    pub fn new(expr: Expr) -> Self {
        Self {
            loc: expr.loc().clone(),
            expr,
        }
    }
}

impl Node for OddCondition {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::OddCondition
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        let _ = visitor.visit_odd_condition(self)?;
        Ok(())
    }
    fn print(&self) {
        print!("odd ");
        self.expr.print();
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// condition = expression relOp expression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelOpCondition {
    pub loc: SourceLocation,
    pub left: Expr,
    pub op: Token,
    pub right: Expr,
}

impl RelOpCondition {
    pub fn new(left: Expr, op: Token, right: Expr) -> Self {
        Self {
            loc: left.loc().clone(),
            left,
            op,
            right,
        }
    }
}

impl Node for RelOpCondition {
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn kind(&self) -> AstKind {
        AstKind::RelOpCondition
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        let _ = visitor.visit_relational_condition(self)?;
        Ok(())
    }
    fn print(&self) {
        self.left.print();
        print!(" {} ", self.op.text);
        self.right.print();
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// condition = "odd" expression | expression relOp expression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Condition {
    Odd(OddCondition),
    Rel(RelOpCondition),
}

impl From<OddCondition> for Condition {
    fn from(c: OddCondition) -> Self {
        Condition::Odd(c)
    }
}

impl From<RelOpCondition> for Condition {
    fn from(c: RelOpCondition) -> Self {
        Condition::Rel(c)
    }
}

impl Node for Condition {
    fn loc(&self) -> &SourceLocation {
        match self {
            Condition::Odd(c) => c.loc(),
            Condition::Rel(c) => c.loc(),
        }
    }
    fn kind(&self) -> AstKind {
        AstKind::Condition
    }
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        match self {
            Condition::Odd(c) => c.accept(visitor),
            Condition::Rel(c) => c.accept(visitor),
        }
    }
    fn print(&self) {
        match self {
            Condition::Odd(c) => c.print(),
            Condition::Rel(c) => c.print(),
        }
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}
