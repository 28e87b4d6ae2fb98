//! Semantic validation.
//!
//! The `Checker` walks the AST once, maintaining a `ScopeTree`, annotating
//! every expression with its inferred type, and collecting diagnostics.
//! It never stops early: every statement is checked, so all problems are
//! reported together.
//!
//! # Per-statement error tracking
//!
//! Several rules depend on whether *this* statement has already produced
//! a diagnostic (a declaration only registers its name if it is clean, a
//! binary operator skips its own check when an operand failed). Diagnostics
//! go into one list, so "errors in this node" is measured by comparing the
//! list length against a mark taken when the node started.

mod arrays;
mod expr;
mod scope_guard;
mod stmt;

pub use scope_guard::ScopedChecker;

use cl_diagnostic::{Diagnostic, ErrorCode};
use cl_ir::{Program, Stmt};

use crate::scope::{ScopeKind, ScopeTree};

/// Validate a whole program against a fresh global scope.
///
/// Returns every diagnostic in detection order. An empty list means the
/// program may be executed.
pub fn check_program(program: &Program) -> Vec<Diagnostic> {
    let mut checker = Checker::new();
    checker.check_program(program);
    checker.into_diagnostics()
}

/// Validation state for one pass.
pub struct Checker {
    scopes: ScopeTree,
    diagnostics: Vec<Diagnostic>,
    /// Line of the statement currently being checked.
    line: Option<u32>,
}

impl Checker {
    pub fn new() -> Self {
        Checker {
            scopes: ScopeTree::new(),
            diagnostics: Vec::new(),
            line: None,
        }
    }

    /// Check every top-level statement in order.
    #[tracing::instrument(level = "debug", skip_all, fields(stmts = program.stmts.len()))]
    pub fn check_program(&mut self, program: &Program) {
        for stmt in &program.stmts {
            self.check_stmt(stmt);
        }
        tracing::debug!(errors = self.diagnostics.len(), "validation finished");
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn scopes(&self) -> &ScopeTree {
        &self.scopes
    }

    /// Check a block's statements inside a new child scope of `kind`.
    fn check_block(&mut self, kind: ScopeKind, stmts: &[Stmt]) {
        self.with_scope(kind, |scoped| {
            for stmt in stmts {
                scoped.check_stmt(stmt);
            }
        });
    }

    /// Record a diagnostic against the current statement's line.
    fn error(&mut self, diagnostic: Diagnostic) {
        tracing::trace!(%diagnostic, "semantic error");
        self.diagnostics.push(diagnostic.with_line(self.line));
    }

    fn error_with(&mut self, code: ErrorCode, message: impl Into<String>) {
        self.error(Diagnostic::new(code, message));
    }

    /// Position in the diagnostic list, for `errors_since`.
    #[inline]
    fn mark(&self) -> usize {
        self.diagnostics.len()
    }

    /// Has anything been reported since `mark` was taken?
    #[inline]
    fn errors_since(&self, mark: usize) -> bool {
        self.diagnostics.len() > mark
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}
