//! RAII scope guard for the checker.
//!
//! `ScopedChecker` holds `&mut Checker` and derefs to it, so checking code
//! runs through the guard unchanged. Dropping the guard discards the child
//! scope, which keeps the scope tree balanced on every exit path.

use std::ops::{Deref, DerefMut};

use super::Checker;
use crate::scope::ScopeKind;

/// Guard that discards one child scope when dropped.
pub struct ScopedChecker<'guard> {
    checker: &'guard mut Checker,
}

impl Drop for ScopedChecker<'_> {
    fn drop(&mut self) {
        self.checker.scopes.exit_scope();
    }
}

impl Deref for ScopedChecker<'_> {
    type Target = Checker;

    fn deref(&self) -> &Self::Target {
        self.checker
    }
}

impl DerefMut for ScopedChecker<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.checker
    }
}

impl Checker {
    /// Enter a child scope of `kind`; it is discarded when the guard drops.
    pub fn scoped(&mut self, kind: ScopeKind) -> ScopedChecker<'_> {
        tracing::trace!(?kind, depth = self.scopes.depth(), "enter scope");
        self.scopes.enter_scope(kind);
        ScopedChecker { checker: self }
    }

    /// Run `f` inside a child scope of `kind`.
    pub fn with_scope<T, F>(&mut self, kind: ScopeKind, f: F) -> T
    where
        F: FnOnce(&mut ScopedChecker<'_>) -> T,
    {
        let mut scoped = self.scoped(kind);
        f(&mut scoped)
    }
}
