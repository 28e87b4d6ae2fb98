//! Validation-time scope tree.
//!
//! Nested symbol tables used only while validating. A child node exists
//! for exactly as long as the block it describes is being validated; when
//! the block ends the node is discarded, so the tree is always a single
//! chain from the global node to the current one and is stored as a stack.
//!
//! # Two duplicate rules
//!
//! - Variable declarations must be unused anywhere in the program
//!   (`is_declared` plus `is_declared_in_program`).
//! - Array declarations only check the current node
//!   (`is_declared_in_current_scope`).

use rustc_hash::{FxHashMap, FxHashSet};

use cl_ir::Type;

/// What kind of block a scope node belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScopeKind {
    Global,
    If,
    ElseIf,
    Else,
    Loop,
    Switch,
    Case,
    Default,
}

/// One block's names.
#[derive(Debug)]
struct ScopeNode {
    kind: ScopeKind,
    types: FxHashMap<String, Type>,
    initialized: FxHashMap<String, bool>,
}

impl ScopeNode {
    fn new(kind: ScopeKind) -> Self {
        ScopeNode {
            kind,
            types: FxHashMap::default(),
            initialized: FxHashMap::default(),
        }
    }
}

/// The chain of live scope nodes, innermost last.
#[derive(Debug)]
pub struct ScopeTree {
    /// Never empty: index 0 is the global node.
    scopes: Vec<ScopeNode>,
    /// Every name successfully declared during this pass, including names
    /// from blocks that have since been discarded.
    program_names: FxHashSet<String>,
}

impl ScopeTree {
    /// A tree holding only the global node.
    pub fn new() -> Self {
        ScopeTree {
            scopes: vec![ScopeNode::new(ScopeKind::Global)],
            program_names: FxHashSet::default(),
        }
    }

    /// Enter a child scope of the current node.
    pub fn enter_scope(&mut self, kind: ScopeKind) {
        self.scopes.push(ScopeNode::new(kind));
    }

    /// Discard the current node. The global node is never discarded.
    pub fn exit_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Number of live nodes, 1 at global level.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn kind(&self) -> ScopeKind {
        self.current().kind
    }

    /// Declare `name` uninitialized in the current node.
    ///
    /// Fails only if the current node already has it.
    pub fn declare(&mut self, name: &str, ty: Type) -> bool {
        self.insert(name, ty, false)
    }

    /// Declare `name` in the current node and mark it initialized.
    pub fn declare_and_initialize(&mut self, name: &str, ty: Type) -> bool {
        self.insert(name, ty, true)
    }

    /// Mark the nearest declaration of `name` initialized.
    ///
    /// Returns `false` if no live node declares it.
    pub fn mark_initialized(&mut self, name: &str) -> bool {
        match self.owner_mut(name) {
            Some(node) => {
                node.initialized.insert(name.to_string(), true);
                true
            }
            None => false,
        }
    }

    /// Is `name` declared in the current node or any ancestor?
    pub fn is_declared(&self, name: &str) -> bool {
        self.owner(name).is_some()
    }

    pub fn is_declared_in_current_scope(&self, name: &str) -> bool {
        self.current().types.contains_key(name)
    }

    /// Was `name` declared anywhere earlier in the program, including in
    /// blocks that are no longer live?
    pub fn is_declared_in_program(&self, name: &str) -> bool {
        self.program_names.contains(name)
    }

    /// The declared type of the nearest declaration of `name`.
    pub fn lookup(&self, name: &str) -> Option<Type> {
        self.owner(name).and_then(|node| node.types.get(name).copied())
    }

    pub fn is_initialized(&self, name: &str) -> bool {
        self.owner(name)
            .and_then(|node| node.initialized.get(name).copied())
            .unwrap_or(false)
    }

    /// Is the current node inside a loop body (at any depth)?
    pub fn is_in_loop(&self) -> bool {
        self.has_enclosing(ScopeKind::Loop)
    }

    /// Is the current node inside a switch (at any depth)?
    pub fn is_in_switch(&self) -> bool {
        self.has_enclosing(ScopeKind::Switch)
    }

    fn has_enclosing(&self, kind: ScopeKind) -> bool {
        self.scopes.iter().rev().any(|node| node.kind == kind)
    }

    fn insert(&mut self, name: &str, ty: Type, initialized: bool) -> bool {
        if self.is_declared_in_current_scope(name) {
            return false;
        }
        let node = self.current_mut();
        node.types.insert(name.to_string(), ty);
        node.initialized.insert(name.to_string(), initialized);
        self.program_names.insert(name.to_string());
        true
    }

    fn owner(&self, name: &str) -> Option<&ScopeNode> {
        self.scopes
            .iter()
            .rev()
            .find(|node| node.types.contains_key(name))
    }

    fn owner_mut(&mut self, name: &str) -> Option<&mut ScopeNode> {
        self.scopes
            .iter_mut()
            .rev()
            .find(|node| node.types.contains_key(name))
    }

    fn current(&self) -> &ScopeNode {
        // `scopes` always holds the global node.
        &self.scopes[self.scopes.len() - 1]
    }

    fn current_mut(&mut self) -> &mut ScopeNode {
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
