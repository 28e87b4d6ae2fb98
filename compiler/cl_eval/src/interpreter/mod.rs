//! Tree-walking interpreter.
//!
//! Runs a program the validator accepted. Statements return a
//! [`ControlSignal`] so `BREAK` and `CONTINUE` travel outward through the
//! statement runners until the nearest loop absorbs them.
//!
//! # Architecture
//!
//! - `expr` - expression evaluation
//! - `control` - if/elseif/else, loops and switch
//! - `arrays` - array declarations and element operations
//! - `io` - display and input
//! - `scope_guard` - RAII branch frames
//!
//! Runtime failures are tagged with the line of the innermost statement
//! that was executing when they happened.

mod arrays;
mod control;
mod expr;
mod io;
mod scope_guard;

pub use scope_guard::ScopedInterpreter;

use cl_ir::{AssignOp, Expr, Program, Stmt, StmtKind, Type};

use crate::branch::BranchContext;
use crate::console::SharedConsole;
use crate::errors::{break_outside_loop, continue_outside_loop, type_mismatch, EvalResult};
use crate::operators::arithmetic;
use crate::store::Store;
use crate::value::Value;

/// What a statement asks of its enclosing statement runner.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ControlSignal {
    /// Carry on with the next statement.
    Normal,
    /// Leave the innermost loop.
    Break,
    /// Skip to the innermost loop's update and condition.
    Continue,
}

impl ControlSignal {
    #[inline]
    pub fn is_normal(self) -> bool {
        self == ControlSignal::Normal
    }
}

/// Interpreter switches.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Write `Enter value for ...` before each input.
    pub prompts: bool,
    /// Report input coercion warnings on the console.
    pub warnings: bool,
}

impl EvalConfig {
    pub fn new() -> Self {
        EvalConfig {
            prompts: true,
            warnings: true,
        }
    }

    #[must_use]
    pub fn with_prompts(mut self, prompts: bool) -> Self {
        self.prompts = prompts;
        self
    }

    #[must_use]
    pub fn with_warnings(mut self, warnings: bool) -> Self {
        self.warnings = warnings;
        self
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig::new()
    }
}

/// Executes validated programs against a flat runtime store.
pub struct Interpreter {
    store: Store,
    branches: BranchContext,
    console: SharedConsole,
    config: EvalConfig,
}

impl Interpreter {
    pub fn new(console: SharedConsole) -> Self {
        Interpreter::with_config(console, EvalConfig::default())
    }

    pub fn with_config(console: SharedConsole, config: EvalConfig) -> Self {
        Interpreter {
            store: Store::new(),
            branches: BranchContext::new(),
            console,
            config,
        }
    }

    /// The store as the last run left it.
    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn console(&self) -> &SharedConsole {
        &self.console
    }

    pub fn config(&self) -> EvalConfig {
        self.config
    }

    /// Run `program` from a fresh store.
    ///
    /// The first runtime failure aborts the run.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.stmts.len()))]
    pub fn execute_program(&mut self, program: &Program) -> EvalResult<()> {
        self.store.clear();
        self.branches.reset();

        for stmt in &program.stmts {
            match self.exec_stmt(stmt)? {
                ControlSignal::Normal => {}
                ControlSignal::Break => return Err(break_outside_loop().or_line(stmt.line)),
                ControlSignal::Continue => return Err(continue_outside_loop().or_line(stmt.line)),
            }
        }

        tracing::debug!(bindings = self.store.len(), "execution finished");
        Ok(())
    }

    /// Run a statement sequence, stopping at the first non-normal signal.
    pub(crate) fn exec_block(&mut self, stmts: &[Stmt]) -> EvalResult<ControlSignal> {
        for stmt in stmts {
            let signal = self.exec_stmt(stmt)?;
            if !signal.is_normal() {
                return Ok(signal);
            }
        }
        Ok(ControlSignal::Normal)
    }

    pub(crate) fn exec_stmt(&mut self, stmt: &Stmt) -> EvalResult<ControlSignal> {
        tracing::trace!(?stmt, "exec");
        self.exec_kind(&stmt.kind)
            .map_err(|err| err.or_line(stmt.line))
    }

    fn exec_kind(&mut self, kind: &StmtKind) -> EvalResult<ControlSignal> {
        match kind {
            StmtKind::VarDecl { ty, name, init } => self.exec_var_decl(ty, name, init.as_ref())?,
            StmtKind::Assign { name, op, value } => {
                let value = self.eval_expr(value)?;
                self.exec_assign(name, *op, value)?;
            }
            StmtKind::If {
                cond,
                body,
                else_ifs,
                else_body,
            } => return self.exec_if(cond, body, else_ifs, else_body.as_deref()),
            StmtKind::Loop {
                init,
                cond,
                update,
                body,
            } => return self.exec_loop(init.as_deref(), cond, update.as_deref(), body),
            StmtKind::DoWhile { body, cond } => return self.exec_do_while(body, cond),
            StmtKind::Break => return Ok(ControlSignal::Break),
            StmtKind::Continue => return Ok(ControlSignal::Continue),
            StmtKind::Switch {
                scrutinee,
                cases,
                default,
            } => return self.exec_switch(scrutinee, cases, default.as_deref()),
            StmtKind::Display { item, newline } => {
                self.exec_display(item.as_slice(), *newline)?;
            }
            StmtKind::MultiDisplay { items, newline } => self.exec_display(items, *newline)?,
            StmtKind::Input { name } => self.exec_input(name)?,
            StmtKind::ArrayDecl {
                elem_ty,
                name,
                init,
            } => self.exec_array_decl(elem_ty, name, init.as_ref())?,
            StmtKind::ArrayAssign { name, value } => self.exec_array_assign(name, value)?,
            StmtKind::ElementAssign {
                name,
                index,
                op,
                value,
            } => self.exec_element_assign(name, index, *op, value)?,
            StmtKind::ElementInput { name, index } => self.exec_element_input(name, index)?,
            StmtKind::Push { name, value } => self.exec_push(name, value)?,
            StmtKind::Set { name, index, value } => self.exec_set(name, index, value)?,
            StmtKind::Expr(expr) => {
                self.eval_expr(expr)?;
            }
        }
        Ok(ControlSignal::Normal)
    }

    fn exec_var_decl(
        &mut self,
        ty: &str,
        name: &str,
        init: Option<&Expr>,
    ) -> EvalResult<()> {
        let declared = Type::normalize(ty);
        let prim = declared
            .primitive()
            .ok_or_else(|| type_mismatch("NUMBER, LETTER, SENTENCE or LOGIC", ty))?;
        let value = match init {
            Some(init) => self.eval_expr(init)?.coerce_to(prim)?,
            None => Value::default_for(prim),
        };
        tracing::trace!(name, %value, "declare");
        self.store.declare(name, declared, value);
        Ok(())
    }

    /// `=` stores with coercion; compound forms compute on doubles.
    fn exec_assign(&mut self, name: &str, op: AssignOp, value: Value) -> EvalResult<()> {
        let value = match op.binary() {
            None => value,
            Some(bin) => {
                let current = self.store.get(name)?.as_number()?;
                Value::Number(arithmetic(bin, current, value.as_number()?)?)
            }
        };
        self.store.assign(name, value)
    }
}
