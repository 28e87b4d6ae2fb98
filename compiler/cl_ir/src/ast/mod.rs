//! AST node types.
//!
//! `Program` owns a flat list of top-level statements; compound statements
//! own their nested bodies directly.

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind};
pub use operators::{AssignOp, BinaryOp, Fixity, StepOp, UnaryOp};
pub use stmt::{Case, DisplayItem, ElseIf, Stmt, StmtKind};

/// A whole program: the top-level statements in source order.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

impl Program {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Program { stmts }
    }
}

#[cfg(test)]
mod tests;
