//! AST construction helpers.
//!
//! Short constructors for building programs by hand, mainly in tests and
//! in embedders that produce ASTs without going through the parser.
//!
//! ```text
//! let program = Program::new(vec![
//!     decl("NUMBER", "x", Some(lit("5"))),
//!     display(binary(BinaryOp::Add, var("x"), lit("1"))),
//! ]);
//! ```

use crate::ast::{
    AssignOp, BinaryOp, Case, DisplayItem, ElseIf, Expr, ExprKind, Fixity, StepOp, Stmt, StmtKind,
    UnaryOp,
};

// Expressions

/// Raw literal text, quotes included.
pub fn lit(raw: &str) -> Expr {
    Expr::new(ExprKind::Literal(raw.to_string()))
}

/// Double-quoted sentence literal.
pub fn text(content: &str) -> Expr {
    lit(&format!("\"{content}\""))
}

/// Single-quoted letter literal.
pub fn letter(c: char) -> Expr {
    lit(&format!("'{c}'"))
}

pub fn var(name: &str) -> Expr {
    Expr::new(ExprKind::Var(name.to_string()))
}

pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::new(ExprKind::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn unary(op: UnaryOp, operand: Expr) -> Expr {
    Expr::new(ExprKind::Unary {
        op,
        operand: Box::new(operand),
    })
}

pub fn step(name: &str, op: StepOp, fixity: Fixity) -> Expr {
    Expr::new(ExprKind::Step {
        name: name.to_string(),
        op,
        fixity,
    })
}

pub fn post_inc(name: &str) -> Expr {
    step(name, StepOp::Inc, Fixity::Post)
}

pub fn pre_inc(name: &str) -> Expr {
    step(name, StepOp::Inc, Fixity::Pre)
}

pub fn post_dec(name: &str) -> Expr {
    step(name, StepOp::Dec, Fixity::Post)
}

pub fn pre_dec(name: &str) -> Expr {
    step(name, StepOp::Dec, Fixity::Pre)
}

pub fn array_lit(elems: Vec<Expr>) -> Expr {
    Expr::new(ExprKind::ArrayLiteral(elems))
}

pub fn array_new(elem_ty: &str, size: Expr) -> Expr {
    Expr::new(ExprKind::ArrayNew {
        elem_ty: elem_ty.to_string(),
        size: Box::new(size),
    })
}

pub fn index(name: &str, index: Expr) -> Expr {
    Expr::new(ExprKind::Index {
        name: name.to_string(),
        index: Box::new(index),
    })
}

pub fn length(name: &str) -> Expr {
    Expr::new(ExprKind::Length(name.to_string()))
}

pub fn pop(name: &str) -> Expr {
    Expr::new(ExprKind::Pop(name.to_string()))
}

// Statements

pub fn decl(ty: &str, name: &str, init: Option<Expr>) -> Stmt {
    Stmt::new(StmtKind::VarDecl {
        ty: ty.to_string(),
        name: name.to_string(),
        init,
    })
}

pub fn assign(name: &str, value: Expr) -> Stmt {
    compound(name, AssignOp::Assign, value)
}

pub fn compound(name: &str, op: AssignOp, value: Expr) -> Stmt {
    Stmt::new(StmtKind::Assign {
        name: name.to_string(),
        op,
        value,
    })
}

pub fn if_then(cond: Expr, body: Vec<Stmt>) -> Stmt {
    if_chain(cond, body, Vec::new(), None)
}

pub fn if_else(cond: Expr, body: Vec<Stmt>, else_body: Vec<Stmt>) -> Stmt {
    if_chain(cond, body, Vec::new(), Some(else_body))
}

pub fn if_chain(
    cond: Expr,
    body: Vec<Stmt>,
    else_ifs: Vec<(Expr, Vec<Stmt>)>,
    else_body: Option<Vec<Stmt>>,
) -> Stmt {
    Stmt::new(StmtKind::If {
        cond,
        body,
        else_ifs: else_ifs
            .into_iter()
            .map(|(cond, body)| ElseIf { cond, body })
            .collect(),
        else_body,
    })
}

pub fn while_loop(cond: Expr, body: Vec<Stmt>) -> Stmt {
    Stmt::new(StmtKind::Loop {
        init: None,
        cond,
        update: None,
        body,
    })
}

pub fn for_loop(init: Stmt, cond: Expr, update: Stmt, body: Vec<Stmt>) -> Stmt {
    Stmt::new(StmtKind::Loop {
        init: Some(Box::new(init)),
        cond,
        update: Some(Box::new(update)),
        body,
    })
}

pub fn do_while(body: Vec<Stmt>, cond: Expr) -> Stmt {
    Stmt::new(StmtKind::DoWhile { body, cond })
}

pub fn brk() -> Stmt {
    Stmt::new(StmtKind::Break)
}

pub fn cont() -> Stmt {
    Stmt::new(StmtKind::Continue)
}

pub fn switch(scrutinee: Expr, cases: Vec<(Expr, Vec<Stmt>)>, default: Option<Vec<Stmt>>) -> Stmt {
    Stmt::new(StmtKind::Switch {
        scrutinee,
        cases: cases
            .into_iter()
            .map(|(value, body)| Case { value, body })
            .collect(),
        default,
    })
}

/// `DISPLAY(e).` with a trailing newline.
pub fn display(expr: Expr) -> Stmt {
    display_item(DisplayItem::Expr(expr), true)
}

/// `PRINT(e).` without a trailing newline.
pub fn print(expr: Expr) -> Stmt {
    display_item(DisplayItem::Expr(expr), false)
}

pub fn display_var(name: &str) -> Stmt {
    display_item(DisplayItem::Variable(name.to_string()), true)
}

pub fn display_lit(raw: &str) -> Stmt {
    display_item(DisplayItem::Literal(raw.to_string()), true)
}

pub fn display_item(item: DisplayItem, newline: bool) -> Stmt {
    Stmt::new(StmtKind::Display {
        item: Some(item),
        newline,
    })
}

pub fn multi_display(items: Vec<DisplayItem>) -> Stmt {
    Stmt::new(StmtKind::MultiDisplay {
        items,
        newline: true,
    })
}

pub fn input(name: &str) -> Stmt {
    Stmt::new(StmtKind::Input {
        name: name.to_string(),
    })
}

pub fn array_decl(elem_ty: &str, name: &str, init: Option<Expr>) -> Stmt {
    Stmt::new(StmtKind::ArrayDecl {
        elem_ty: elem_ty.to_string(),
        name: name.to_string(),
        init,
    })
}

pub fn array_assign(name: &str, value: Expr) -> Stmt {
    Stmt::new(StmtKind::ArrayAssign {
        name: name.to_string(),
        value,
    })
}

pub fn element_assign(name: &str, index: Expr, op: AssignOp, value: Expr) -> Stmt {
    Stmt::new(StmtKind::ElementAssign {
        name: name.to_string(),
        index,
        op,
        value,
    })
}

pub fn element_input(name: &str, index: Expr) -> Stmt {
    Stmt::new(StmtKind::ElementInput {
        name: name.to_string(),
        index,
    })
}

pub fn push(name: &str, value: Expr) -> Stmt {
    Stmt::new(StmtKind::Push {
        name: name.to_string(),
        value,
    })
}

pub fn set(name: &str, index: Expr, value: Expr) -> Stmt {
    Stmt::new(StmtKind::Set {
        name: name.to_string(),
        index,
        value,
    })
}

pub fn expr_stmt(expr: Expr) -> Stmt {
    Stmt::new(StmtKind::Expr(expr))
}
