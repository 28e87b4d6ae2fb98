//! Statement Types
//!
//! Statement node and variants, plus the pieces of compound statements
//! (`ElseIf`, `Case`, `DisplayItem`).

use std::fmt;

use super::expr::Expr;
use super::operators::AssignOp;

/// Statement node.
///
/// `line` is the 1-based source line reported by the parser, used to prefix
/// diagnostics and runtime errors.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stmt {
    pub kind: StmtKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub line: Option<u32>,
}

impl Stmt {
    pub fn new(kind: StmtKind) -> Self {
        Stmt { kind, line: None }
    }

    #[must_use]
    pub fn at_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{:?} @ line {line}", self.kind),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

/// Statement kinds.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StmtKind {
    /// `NUMBER x = 5.`
    ///
    /// `ty` is the type keyword as written; the validator normalizes it.
    VarDecl {
        ty: String,
        name: String,
        init: Option<Expr>,
    },

    /// `x = e.` and the compound forms `x += e.` etc.
    Assign {
        name: String,
        op: AssignOp,
        value: Expr,
    },

    /// `IF (c) {..} ELSEIF (c) {..} ELSE {..}`
    If {
        cond: Expr,
        body: Vec<Stmt>,
        else_ifs: Vec<ElseIf>,
        else_body: Option<Vec<Stmt>>,
    },

    /// While-style and for-style loops.
    ///
    /// `init` runs once before the first condition check, `update` after
    /// every completed or continued iteration.
    Loop {
        init: Option<Box<Stmt>>,
        cond: Expr,
        update: Option<Box<Stmt>>,
        body: Vec<Stmt>,
    },

    /// Body first, condition after.
    DoWhile { body: Vec<Stmt>, cond: Expr },

    Break,
    Continue,

    /// `SWITCH (e) { CASE v: .. DEFAULT: .. }`
    Switch {
        scrutinee: Expr,
        cases: Vec<Case>,
        default: Option<Vec<Stmt>>,
    },

    /// `DISPLAY(..)` writes with a trailing newline, `PRINT(..)` without.
    Display {
        item: Option<DisplayItem>,
        newline: bool,
    },

    /// Several items joined by single spaces.
    MultiDisplay {
        items: Vec<DisplayItem>,
        newline: bool,
    },

    /// `INPUT(x).`
    Input { name: String },

    /// `NUMBER[] xs = [1, 2].`
    ArrayDecl {
        elem_ty: String,
        name: String,
        init: Option<Expr>,
    },

    /// Whole-array assignment: `xs = [3, 4].`
    ArrayAssign { name: String, value: Expr },

    /// `xs[i] = e.` and the compound forms `xs[i] += e.` etc.
    ElementAssign {
        name: String,
        index: Expr,
        op: AssignOp,
        value: Expr,
    },

    /// `INPUT(xs[i]).`
    ElementInput { name: String, index: Expr },

    /// `PUSH(xs, e).`
    Push { name: String, value: Expr },

    /// `SET(xs, i, e).`
    Set {
        name: String,
        index: Expr,
        value: Expr,
    },

    /// Expression evaluated for its side effects: `x++.`, `POP(xs).`
    Expr(Expr),
}

/// One `ELSEIF` arm.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElseIf {
    pub cond: Expr,
    pub body: Vec<Stmt>,
}

/// One `CASE` arm.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Case {
    pub value: Expr,
    pub body: Vec<Stmt>,
}

/// Something a display statement can show.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayItem {
    /// Any expression, formatted canonically.
    Expr(Expr),
    /// A bare variable or array name.
    Variable(String),
    /// A raw quoted literal, shown without its quotes.
    Literal(String),
}
