//! Branch-executability context.
//!
//! Each conditional arm pushes a frame recording whether it was taken;
//! the code inside is live only if every enclosing frame was taken. Frames
//! are pushed through `Interpreter::with_branch`, whose guard pops them on
//! every exit path, runtime failures included.
//!
//! `BranchChain` threads the "has an arm matched yet" flag through one
//! if/elseif/else chain.

/// Stack of enclosing arm states, innermost last.
#[derive(Debug, Default)]
pub struct BranchContext {
    frames: Vec<bool>,
}

impl BranchContext {
    pub fn new() -> Self {
        BranchContext::default()
    }

    /// Is the current position inside taken arms only?
    pub fn is_live(&self) -> bool {
        self.frames.iter().all(|taken| *taken)
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub(crate) fn push(&mut self, taken: bool) {
        self.frames.push(taken);
    }

    pub(crate) fn pop(&mut self) {
        self.frames.pop();
    }

    pub fn reset(&mut self) {
        self.frames.clear();
    }
}

/// Arm selection for one if/elseif/else chain.
///
/// Every arm's condition is evaluated by the caller before asking, so
/// side effects in later conditions happen even after a match.
#[derive(Debug, Default)]
pub struct BranchChain {
    matched: bool,
}

impl BranchChain {
    pub fn new() -> Self {
        BranchChain::default()
    }

    /// Is an `if`/`elseif` arm whose condition evaluated to `cond` taken?
    pub fn arm(&mut self, cond: bool) -> bool {
        let taken = !self.matched && cond;
        self.matched |= taken;
        taken
    }

    /// Is the `else` arm taken?
    pub fn otherwise(&self) -> bool {
        !self.matched
    }

    pub fn matched(&self) -> bool {
        self.matched
    }
}
