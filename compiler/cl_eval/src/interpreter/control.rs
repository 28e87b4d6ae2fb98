//! Conditionals, loops and switch.
//!
//! Each arm or body runs inside a branch frame. Control signals from a
//! body propagate outward unchanged, except that a loop absorbs `Break`
//! and `Continue`.

use cl_ir::{Case, ElseIf, Expr, Stmt};

use super::{ControlSignal, Interpreter};
use crate::branch::BranchChain;
use crate::errors::EvalResult;

impl Interpreter {
    /// if/elseif/else.
    ///
    /// Every elseif condition is evaluated, in order, even after an
    /// earlier arm matched; only the bodies of later arms are skipped. A
    /// signal from a taken body is held until the remaining conditions
    /// have run, then returned in place of the else arm.
    pub(crate) fn exec_if(
        &mut self,
        cond: &Expr,
        body: &[Stmt],
        else_ifs: &[ElseIf],
        else_body: Option<&[Stmt]>,
    ) -> EvalResult<ControlSignal> {
        let mut chain = BranchChain::new();

        let taken = chain.arm(self.eval_condition(cond)?);
        let mut signal = self.run_arm(taken, body)?;

        for arm in else_ifs {
            let taken = chain.arm(self.eval_condition(&arm.cond)?);
            let arm_signal = self.run_arm(taken, &arm.body)?;
            if signal.is_normal() {
                signal = arm_signal;
            }
        }

        if !signal.is_normal() {
            return Ok(signal);
        }
        match else_body {
            Some(else_body) => self.run_arm(chain.otherwise(), else_body),
            None => Ok(ControlSignal::Normal),
        }
    }

    fn run_arm(&mut self, taken: bool, body: &[Stmt]) -> EvalResult<ControlSignal> {
        self.with_branch(taken, |scoped| {
            if scoped.is_live() {
                scoped.exec_block(body)
            } else {
                Ok(ControlSignal::Normal)
            }
        })
    }

    /// While-style and for-style loops.
    ///
    /// `Break` leaves without running the update; `Continue` still runs it
    /// before the condition is checked again.
    pub(crate) fn exec_loop(
        &mut self,
        init: Option<&Stmt>,
        cond: &Expr,
        update: Option<&Stmt>,
        body: &[Stmt],
    ) -> EvalResult<ControlSignal> {
        if !self.is_live() {
            tracing::debug!("loop skipped outside a taken branch");
            return Ok(ControlSignal::Normal);
        }
        if let Some(init) = init {
            self.exec_stmt(init)?;
        }

        let mut iterations: u64 = 0;
        while self.eval_condition(cond)? {
            iterations += 1;
            tracing::trace!(iterations, "loop iteration");
            if self.run_loop_body(body)? == ControlSignal::Break {
                break;
            }
            if let Some(update) = update {
                self.exec_stmt(update)?;
            }
        }

        tracing::debug!(iterations, "loop finished");
        Ok(ControlSignal::Normal)
    }

    /// Body first, then the condition. `Continue` goes straight to the
    /// condition.
    pub(crate) fn exec_do_while(&mut self, body: &[Stmt], cond: &Expr) -> EvalResult<ControlSignal> {
        if !self.is_live() {
            tracing::debug!("do-while skipped outside a taken branch");
            return Ok(ControlSignal::Normal);
        }

        let mut iterations: u64 = 0;
        loop {
            iterations += 1;
            tracing::trace!(iterations, "do-while iteration");
            if self.run_loop_body(body)? == ControlSignal::Break {
                break;
            }
            if !self.eval_condition(cond)? {
                break;
            }
        }

        tracing::debug!(iterations, "do-while finished");
        Ok(ControlSignal::Normal)
    }

    fn run_loop_body(&mut self, body: &[Stmt]) -> EvalResult<ControlSignal> {
        self.with_branch(true, |scoped| scoped.exec_block(body))
    }

    /// The scrutinee is evaluated once. Case values are evaluated in order
    /// until one matches; only that case's body runs. With no match, the
    /// default runs.
    ///
    /// A switch does not absorb `Break`: inside a loop it leaves the loop.
    pub(crate) fn exec_switch(
        &mut self,
        scrutinee: &Expr,
        cases: &[Case],
        default: Option<&[Stmt]>,
    ) -> EvalResult<ControlSignal> {
        let value = self.eval_expr(scrutinee)?;

        let mut selected = None;
        for (position, case) in cases.iter().enumerate() {
            let candidate = self.eval_expr(&case.value)?;
            if value.switch_matches(&candidate) {
                tracing::trace!(position, %candidate, "case matched");
                selected = Some(case.body.as_slice());
                break;
            }
        }

        match selected.or(default) {
            Some(body) => self.with_branch(true, |scoped| scoped.exec_block(body)),
            None => Ok(ControlSignal::Normal),
        }
    }
}
