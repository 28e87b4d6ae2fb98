use cl_ir::Primitive;

use super::*;

#[test]
fn test_new_tree_is_global() {
    let tree = ScopeTree::new();
    assert_eq!(tree.kind(), ScopeKind::Global);
    assert_eq!(tree.depth(), 1);
    assert!(!tree.is_in_loop());
    assert!(!tree.is_in_switch());
}

#[test]
fn test_declare_rejects_only_current_node_duplicates() {
    let mut tree = ScopeTree::new();
    assert!(tree.declare("x", Type::Number));
    assert!(!tree.declare("x", Type::Number));

    tree.enter_scope(ScopeKind::If);
    // The tree itself only checks the current node; the validator layers
    // the ancestor rule on top for variables.
    assert!(tree.declare("x", Type::Sentence));
    assert_eq!(tree.lookup("x"), Some(Type::Sentence));
    tree.exit_scope();

    assert_eq!(tree.lookup("x"), Some(Type::Number));
}

#[test]
fn test_lookup_walks_ancestors() {
    let mut tree = ScopeTree::new();
    tree.declare_and_initialize("outer", Type::Logic);
    tree.enter_scope(ScopeKind::Loop);
    tree.enter_scope(ScopeKind::If);

    assert!(tree.is_declared("outer"));
    assert!(!tree.is_declared_in_current_scope("outer"));
    assert_eq!(tree.lookup("outer"), Some(Type::Logic));
    assert!(tree.is_initialized("outer"));
    assert_eq!(tree.lookup("missing"), None);
}

#[test]
fn test_mark_initialized_updates_owner() {
    let mut tree = ScopeTree::new();
    tree.declare("n", Type::Number);
    assert!(!tree.is_initialized("n"));

    tree.enter_scope(ScopeKind::If);
    assert!(tree.mark_initialized("n"));
    tree.exit_scope();

    assert!(tree.is_initialized("n"));
    assert!(!tree.mark_initialized("nope"));
}

#[test]
fn test_child_names_are_discarded_with_the_block() {
    let mut tree = ScopeTree::new();
    tree.enter_scope(ScopeKind::Else);
    tree.declare_and_initialize("tmp", Type::Number);
    tree.exit_scope();

    assert!(!tree.is_declared("tmp"));
    assert!(tree.is_declared_in_program("tmp"));
}

#[test]
fn test_loop_and_switch_detection_walks_ancestors() {
    let mut tree = ScopeTree::new();
    tree.enter_scope(ScopeKind::Loop);
    tree.enter_scope(ScopeKind::If);
    tree.enter_scope(ScopeKind::Else);
    assert!(tree.is_in_loop());
    assert!(!tree.is_in_switch());

    tree.enter_scope(ScopeKind::Switch);
    tree.enter_scope(ScopeKind::Case);
    assert!(tree.is_in_switch());
    assert_eq!(tree.kind(), ScopeKind::Case);
}

#[test]
fn test_global_node_survives_extra_exits() {
    let mut tree = ScopeTree::new();
    tree.declare("a", Type::Array(Primitive::Number));
    tree.exit_scope();
    tree.exit_scope();
    assert_eq!(tree.depth(), 1);
    assert!(tree.is_declared("a"));
}
