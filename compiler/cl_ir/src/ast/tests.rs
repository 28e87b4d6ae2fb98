use pretty_assertions::assert_eq;

use super::*;
use crate::build::{decl, if_chain, lit, post_inc, var};
use crate::Type;

#[test]
fn test_expr_type_starts_unknown_and_is_settable() {
    let expr = lit("5");
    assert_eq!(expr.ty(), Type::Unknown);
    expr.set_ty(Type::Number);
    assert_eq!(expr.ty(), Type::Number);
}

#[test]
fn test_stmt_line_is_optional() {
    let stmt = decl("NUMBER", "x", None);
    assert_eq!(stmt.line, None);
    let stmt = stmt.at_line(7);
    assert_eq!(stmt.line, Some(7));
}

#[test]
fn test_if_chain_builds_else_ifs_in_order() {
    let stmt = if_chain(
        var("a"),
        vec![],
        vec![(var("b"), vec![]), (var("c"), vec![])],
        None,
    );
    let StmtKind::If { else_ifs, .. } = stmt.kind else {
        panic!("expected If");
    };
    let names: Vec<_> = else_ifs
        .iter()
        .map(|arm| match &arm.cond.kind {
            ExprKind::Var(name) => name.as_str(),
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(names, vec!["b", "c"]);
}

#[test]
fn test_operator_symbols() {
    assert_eq!(BinaryOp::NotEq.as_symbol(), "!=");
    assert_eq!(UnaryOp::Not.as_symbol(), "!");
    assert_eq!(AssignOp::Mod.as_symbol(), "%=");
    assert_eq!(AssignOp::Mul.binary(), Some(BinaryOp::Mul));
    assert_eq!(AssignOp::Assign.binary(), None);
    assert!(!AssignOp::Assign.is_compound());
}

#[test]
fn test_operator_categories_are_disjoint() {
    let all = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Mod,
        BinaryOp::Lt,
        BinaryOp::LtEq,
        BinaryOp::Gt,
        BinaryOp::GtEq,
        BinaryOp::Eq,
        BinaryOp::NotEq,
        BinaryOp::And,
        BinaryOp::Or,
    ];
    for op in all {
        let categories = [
            op.is_arithmetic(),
            op.is_relational(),
            op.is_equality(),
            op.is_logical(),
        ];
        assert_eq!(categories.iter().filter(|c| **c).count(), 1, "{op:?}");
    }
}

#[test]
fn test_step_debug_shows_type() {
    let expr = post_inc("i");
    expr.set_ty(Type::Number);
    assert!(format!("{expr:?}").ends_with(": NUMBER"));
}
