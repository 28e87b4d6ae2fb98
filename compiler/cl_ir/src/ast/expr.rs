//! Expression Types
//!
//! Expression node and its variants.

use std::cell::Cell;
use std::fmt;

use super::operators::{BinaryOp, Fixity, StepOp, UnaryOp};
use crate::Type;

/// Expression node.
///
/// `ty` is the inferred type written by the validator. It starts out
/// `Unknown` and is not part of the interchange format.
#[derive(Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Expr {
    pub kind: ExprKind,
    #[cfg_attr(feature = "serde", serde(skip))]
    ty: Cell<Type>,
}

impl Expr {
    pub fn new(kind: ExprKind) -> Self {
        Expr {
            kind,
            ty: Cell::new(Type::Unknown),
        }
    }

    /// The type inferred by the last validation pass.
    #[inline]
    pub fn ty(&self) -> Type {
        self.ty.get()
    }

    #[inline]
    pub fn set_ty(&self, ty: Type) {
        self.ty.set(ty);
    }
}

impl From<ExprKind> for Expr {
    fn from(kind: ExprKind) -> Self {
        Expr::new(kind)
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} : {}", self.kind, self.ty())
    }
}

/// Expression kinds.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    /// Raw literal text as written: `5`, `-2.5`, `'a'`, `"hi"`, `true`.
    ///
    /// The quotes are kept so the validator can infer the type from the
    /// surface form.
    Literal(String),

    /// Variable reference.
    Var(String),

    /// Binary operation. Both operands are always evaluated.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Unary operation.
    Unary { op: UnaryOp, operand: Box<Expr> },

    /// `++x`, `x++`, `--x`, `x--`.
    Step {
        name: String,
        op: StepOp,
        fixity: Fixity,
    },

    /// `[a, b, c]`
    ArrayLiteral(Vec<Expr>),

    /// Sized array filled with the element type's default: `NEW NUMBER[n]`.
    ArrayNew { elem_ty: String, size: Box<Expr> },

    /// `arr[i]` and `GET(arr, i)`.
    Index { name: String, index: Box<Expr> },

    /// `LENGTH(arr)`
    Length(String),

    /// `POP(arr)`, yields the removed element.
    Pop(String),
}
