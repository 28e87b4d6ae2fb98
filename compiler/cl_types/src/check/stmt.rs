//! Statement checking: declarations, assignment, control flow, I/O.

use cl_diagnostic::{duplicate_variable, undefined_variable, used_before_init, ErrorCode};
use cl_ir::{AssignOp, Case, DisplayItem, ElseIf, Expr, Stmt, StmtKind, Type};

use super::Checker;
use crate::compat::is_compatible;
use crate::compat::is_valid_identifier;
use crate::scope::ScopeKind;

/// Which display statement an item belongs to, for message wording.
#[derive(Copy, Clone)]
enum DisplayForm {
    Single,
    Multi,
}

impl Checker {
    /// Check one statement. Diagnostics raised while checking it carry its
    /// line; nested statements override it with their own.
    pub(crate) fn check_stmt(&mut self, stmt: &Stmt) {
        let outer = self.line;
        if stmt.line.is_some() {
            self.line = stmt.line;
        }

        match &stmt.kind {
            StmtKind::VarDecl { ty, name, init } => self.check_var_decl(ty, name, init.as_ref()),
            StmtKind::Assign { name, op, value } => self.check_assign(name, *op, value),
            StmtKind::If {
                cond,
                body,
                else_ifs,
                else_body,
            } => self.check_if(cond, body, else_ifs, else_body.as_deref()),
            StmtKind::Loop {
                init,
                cond,
                update,
                body,
            } => self.check_loop(init.as_deref(), cond, update.as_deref(), body),
            StmtKind::DoWhile { body, cond } => self.check_do_while(body, cond),
            StmtKind::Break => self.check_jump("Break"),
            StmtKind::Continue => self.check_jump("Continue"),
            StmtKind::Switch {
                scrutinee,
                cases,
                default,
            } => self.check_switch(scrutinee, cases, default.as_deref()),
            StmtKind::Display { item, .. } => match item {
                Some(item) => self.check_display_item(item, DisplayForm::Single),
                None => self.error_with(
                    ErrorCode::Sem017,
                    "Display statement has no content to display",
                ),
            },
            StmtKind::MultiDisplay { items, .. } => {
                if items.is_empty() {
                    self.error_with(
                        ErrorCode::Sem017,
                        "Multi-display statement has no items to display",
                    );
                }
                for item in items {
                    self.check_display_item(item, DisplayForm::Multi);
                }
            }
            StmtKind::Input { name } => self.check_input(name),
            StmtKind::ArrayDecl {
                elem_ty,
                name,
                init,
            } => self.check_array_decl(elem_ty, name, init.as_ref()),
            StmtKind::ArrayAssign { name, value } => self.check_array_assign(name, value),
            StmtKind::ElementAssign {
                name,
                index,
                op,
                value,
            } => self.check_element_assign(name, index, *op, value),
            StmtKind::ElementInput { name, index } => self.check_element_input(name, index),
            StmtKind::Push { name, value } => self.check_push(name, value),
            StmtKind::Set { name, index, value } => self.check_set(name, index, value),
            StmtKind::Expr(expr) => {
                self.check_expr(expr);
            }
        }

        self.line = outer;
    }

    fn check_var_decl(&mut self, ty_name: &str, name: &str, init: Option<&Expr>) {
        let mark = self.mark();

        let declared = Type::normalize(ty_name);
        if declared.is_unknown() {
            self.error_with(
                ErrorCode::Sem001,
                format!("Invalid type '{ty_name}' in variable declaration"),
            );
            return;
        }
        if !is_valid_identifier(name) {
            self.error_with(
                ErrorCode::Sem001,
                format!(
                    "Invalid variable name '{name}' (must start with letter, contain only letters, digits, and underscores)"
                ),
            );
        }
        if self.scopes.is_declared(name) || self.scopes.is_declared_in_program(name) {
            self.error(duplicate_variable(name));
        }

        if let Some(init) = init {
            let value = self.check_expr(init);
            if !self.errors_since(mark) && !value.is_unknown() && !is_compatible(declared, value) {
                self.error_with(
                    ErrorCode::Sem004,
                    format!(
                        "Type mismatch in variable declaration: cannot assign {value} to {declared} variable '{name}'"
                    ),
                );
            }
        }

        if !self.errors_since(mark) {
            if init.is_some() {
                self.scopes.declare_and_initialize(name, declared);
            } else {
                self.scopes.declare(name, declared);
            }
        }
    }

    fn check_assign(&mut self, name: &str, op: AssignOp, value: &Expr) {
        let mark = self.mark();

        let Some(target) = self.scopes.lookup(name) else {
            self.error(undefined_variable(name));
            return;
        };

        let source = self.check_expr(value);
        if !self.errors_since(mark) {
            let symbol = op.as_symbol();
            if !op.is_compound() {
                if !source.is_unknown() && !is_compatible(target, source) {
                    self.error_with(
                        ErrorCode::Sem004,
                        format!("Type mismatch: cannot assign {source} to {target} variable '{name}'"),
                    );
                }
            } else if target != Type::Number {
                self.error_with(
                    ErrorCode::Sem003,
                    format!(
                        "Cannot use compound assignment operator '{symbol}' on non-numeric variable '{name}' of type {target}"
                    ),
                );
            } else if !source.is_unknown() && source != Type::Number {
                self.error_with(
                    ErrorCode::Sem004,
                    format!("Cannot use {source} value with compound assignment operator '{symbol}'"),
                );
            }
        }

        if !self.errors_since(mark) {
            self.scopes.mark_initialized(name);
        }
    }

    fn check_if(
        &mut self,
        cond: &Expr,
        body: &[Stmt],
        else_ifs: &[ElseIf],
        else_body: Option<&[Stmt]>,
    ) {
        self.check_condition(cond, ErrorCode::Sem008, "If condition");
        self.check_block(ScopeKind::If, body);

        for arm in else_ifs {
            self.check_condition(&arm.cond, ErrorCode::Sem008, "ElseIf condition");
            self.check_block(ScopeKind::ElseIf, &arm.body);
        }

        if let Some(body) = else_body {
            self.check_block(ScopeKind::Else, body);
        }
    }

    /// The loop's `init` and `update` belong to the enclosing scope; only
    /// the body gets a child.
    fn check_loop(&mut self, init: Option<&Stmt>, cond: &Expr, update: Option<&Stmt>, body: &[Stmt]) {
        if let Some(init) = init {
            self.check_stmt(init);
        }
        self.check_condition(cond, ErrorCode::Sem010, "Loop condition");
        if let Some(update) = update {
            self.check_stmt(update);
        }
        self.check_block(ScopeKind::Loop, body);
    }

    fn check_do_while(&mut self, body: &[Stmt], cond: &Expr) {
        self.check_block(ScopeKind::Loop, body);
        self.check_condition(cond, ErrorCode::Sem010, "Do-while condition");
    }

    /// Conditions must be LOGIC. An `Unknown` condition is reported too:
    /// a branch on an unknown value cannot be executed.
    fn check_condition(&mut self, cond: &Expr, code: ErrorCode, what: &str) {
        let ty = self.check_expr(cond);
        if ty != Type::Logic {
            self.error_with(code, format!("{what} must be boolean expression, got {ty}"));
        }
    }

    fn check_jump(&mut self, keyword: &str) {
        if !self.scopes.is_in_loop() {
            self.error_with(
                ErrorCode::Sem012,
                format!("{keyword} statement must be inside a loop"),
            );
        }
    }

    fn check_switch(&mut self, scrutinee: &Expr, cases: &[Case], default: Option<&[Stmt]>) {
        let switch_ty = self.check_expr(scrutinee);

        if cases.is_empty() && default.is_none() {
            self.error_with(
                ErrorCode::Sem013,
                "Switch statement must have at least one case or default block",
            );
        }

        self.with_scope(ScopeKind::Switch, |scoped| {
            for case in cases {
                let case_ty = scoped.check_expr(&case.value);
                if !switch_ty.is_unknown()
                    && !case_ty.is_unknown()
                    && !is_compatible(switch_ty, case_ty)
                {
                    scoped.error_with(
                        ErrorCode::Sem014,
                        format!(
                            "Case expression type {case_ty} does not match switch expression type {switch_ty}"
                        ),
                    );
                }
                scoped.check_block(ScopeKind::Case, &case.body);
            }
            if let Some(body) = default {
                scoped.check_block(ScopeKind::Default, body);
            }
        });
    }

    fn check_display_item(&mut self, item: &DisplayItem, form: DisplayForm) {
        match item {
            DisplayItem::Expr(expr) => {
                self.check_expr(expr);
            }
            DisplayItem::Variable(name) => {
                if !self.scopes.is_declared(name) {
                    let place = match form {
                        DisplayForm::Single => "display",
                        DisplayForm::Multi => "multi-display",
                    };
                    self.error_with(
                        ErrorCode::Sem016,
                        format!("Undefined variable in {place}: '{name}'"),
                    );
                } else if !self.scopes.is_initialized(name) {
                    self.error(used_before_init(name));
                }
            }
            DisplayItem::Literal(raw) => self.check_display_literal(raw),
        }
    }

    fn check_display_literal(&mut self, raw: &str) {
        if let Some(rest) = raw.strip_prefix('\'') {
            if !rest.ends_with('\'') {
                self.error_with(
                    ErrorCode::Sem006,
                    format!("Mismatched single quotes in display literal: '{raw}'"),
                );
            } else if raw.chars().count() != 3 {
                self.error_with(
                    ErrorCode::Sem006,
                    format!("Character literal must contain exactly one character: '{raw}'"),
                );
            }
        } else if let Some(rest) = raw.strip_prefix('"') {
            if !rest.ends_with('"') {
                self.error_with(
                    ErrorCode::Sem006,
                    format!("Mismatched double quotes in display literal: '{raw}'"),
                );
            }
        } else {
            self.error_with(ErrorCode::Sem006, format!("Invalid literal format: '{raw}'"));
        }
    }

    fn check_input(&mut self, name: &str) {
        let Some(ty) = self.scopes.lookup(name) else {
            self.error_with(
                ErrorCode::Sem016,
                format!("Undefined variable in input: '{name}'"),
            );
            return;
        };
        if ty.is_array() {
            self.error_with(
                ErrorCode::Sem021,
                format!("Cannot input into array '{name}' without an index"),
            );
            return;
        }
        self.scopes.mark_initialized(name);
    }
}
