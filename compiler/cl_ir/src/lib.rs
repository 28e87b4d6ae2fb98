//! CustomLang IR - AST and Type Tags
//!
//! This crate contains the data structures shared by the validator and the
//! interpreter:
//! - Type tags (`Type`, `Primitive`)
//! - AST nodes (`Program`, `Stmt`, `Expr`, ...)
//! - Operators (`BinaryOp`, `UnaryOp`, `AssignOp`, `StepOp`)
//! - Construction helpers (`build`) for tests and embedders
//!
//! # Design
//!
//! - **Closed sum types**: every statement and expression form is a variant,
//!   so validation and execution dispatch with exhaustive `match`.
//! - **Source names, not interned**: programs are small, names stay `String`.
//! - **Inferred types live on the node**: the validator writes each
//!   expression's type through a `Cell`. The interpreter reads it only to
//!   pick the element type of an array literal.
//!
//! With the `serde` feature, every AST type round-trips through serde. This
//! is the interchange format between the external parser and the CLI.

pub mod ast;
pub mod build;
mod types;

pub use ast::{
    AssignOp, BinaryOp, Case, DisplayItem, ElseIf, Expr, ExprKind, Fixity, Program, StepOp, Stmt,
    StmtKind, UnaryOp,
};
pub use types::{Primitive, Type};
