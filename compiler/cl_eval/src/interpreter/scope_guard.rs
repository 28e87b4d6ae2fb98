//! RAII branch frames.
//!
//! Every conditional arm and loop body runs inside a [`ScopedInterpreter`],
//! which pushes one frame onto the branch context and pops it when dropped.
//! The pop happens on every exit path: normal completion, a `?` on a
//! runtime failure, or unwinding.
//!
//! The guard holds `&mut Interpreter` and implements `Deref`/`DerefMut`, so
//! the body runs through the guard exactly as it would through the
//! interpreter.
//!
//! ```text
//! interpreter.with_branch(taken, |scoped| {
//!     if scoped.is_live() {
//!         scoped.exec_block(body)
//!     } else {
//!         Ok(ControlSignal::Normal)
//!     }
//! })
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;

/// Guard for one branch frame.
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.branches.pop();
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Push a frame recording whether the arm was `taken`.
    pub fn branch(&mut self, taken: bool) -> ScopedInterpreter<'_> {
        self.branches.push(taken);
        ScopedInterpreter { interpreter: self }
    }

    /// Run `f` inside a frame for an arm that was or was not `taken`.
    pub fn with_branch<T, F>(&mut self, taken: bool, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_>) -> T,
    {
        let mut scoped = self.branch(taken);
        f(&mut scoped)
    }

    /// Is execution currently inside taken arms only?
    #[inline]
    pub fn is_live(&self) -> bool {
        self.branches.is_live()
    }

    /// Number of enclosing branch frames.
    #[inline]
    pub fn branch_depth(&self) -> usize {
        self.branches.depth()
    }
}
