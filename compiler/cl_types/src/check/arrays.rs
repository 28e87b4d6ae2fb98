//! Array declarations, literals, and element operations.

use cl_diagnostic::{
    array_used_before_init, index_not_numeric, not_an_array, undefined_array, ErrorCode,
};
use cl_ir::{AssignOp, Expr, ExprKind, Primitive, Type};

use super::Checker;
use crate::compat::{is_compatible, is_valid_identifier};

impl Checker {
    pub(super) fn check_array_decl(&mut self, elem_ty: &str, name: &str, init: Option<&Expr>) {
        let mark = self.mark();

        let Some(elem) = Primitive::from_name(elem_ty) else {
            self.error_with(ErrorCode::Sem020, format!("Invalid array type '{elem_ty}'"));
            return;
        };
        if self.scopes.is_declared_in_current_scope(name) {
            self.error_with(
                ErrorCode::Sem020,
                format!("Duplicate array declaration: '{name}'"),
            );
        }
        if !is_valid_identifier(name) {
            self.error_with(ErrorCode::Sem020, format!("Invalid array name '{name}'"));
        }

        if let Some(init) = init {
            let value = self.check_array_value(init, elem);
            if !self.errors_since(mark) && !value.is_unknown() {
                match value.element() {
                    None => self.error_with(
                        ErrorCode::Sem024,
                        format!("Array initializer must be array expression, got {value}"),
                    ),
                    Some(found) if found != elem => self.error_with(
                        ErrorCode::Sem024,
                        format!("Array element type mismatch: declared {elem}, initializer {found}"),
                    ),
                    Some(_) => {}
                }
            }
        }

        if !self.errors_since(mark) {
            if init.is_some() {
                self.scopes.declare_and_initialize(name, Type::Array(elem));
            } else {
                self.scopes.declare(name, Type::Array(elem));
            }
        }
    }

    pub(super) fn check_array_assign(&mut self, name: &str, value: &Expr) {
        let mark = self.mark();

        let Some(target) = self.scopes.lookup(name) else {
            self.error(undefined_array(name));
            return;
        };
        let Some(elem) = target.element() else {
            self.error(not_an_array(name));
            return;
        };

        let source = self.check_array_value(value, elem);
        if !self.errors_since(mark) && !source.is_unknown() {
            if !source.is_array() {
                self.error_with(
                    ErrorCode::Sem024,
                    "Cannot assign non-array value to array variable",
                );
            } else if source != target {
                self.error_with(
                    ErrorCode::Sem024,
                    format!("Array type mismatch: target {target}, source {source}"),
                );
            }
        }

        if !self.errors_since(mark) {
            self.scopes.mark_initialized(name);
        }
    }

    pub(super) fn check_element_assign(
        &mut self,
        name: &str,
        index: &Expr,
        op: AssignOp,
        value: &Expr,
    ) {
        let mark = self.mark();
        let Some(elem) = self.check_array_target(name) else {
            return;
        };
        self.check_index_expr(index);
        let source = self.check_expr(value);
        if self.errors_since(mark) || source.is_unknown() {
            return;
        }

        let elem_ty = Type::from(elem);
        let symbol = op.as_symbol();
        let problem = match op {
            AssignOp::Assign => (!is_compatible(elem_ty, source))
                .then(|| format!("Cannot assign {source} to {elem} array element")),
            // `+=` concatenates onto SENTENCE elements and adds to NUMBER ones.
            AssignOp::Add => match elem {
                Primitive::Sentence => None,
                Primitive::Number => (source != Type::Number)
                    .then(|| format!("Cannot use += with {source} on NUMBER array element")),
                Primitive::Letter | Primitive::Logic => Some(format!(
                    "Compound assignment '+=' not supported for {elem} arrays"
                )),
            },
            AssignOp::Sub | AssignOp::Mul | AssignOp::Div | AssignOp::Mod => {
                if elem != Primitive::Number {
                    Some(format!(
                        "Arithmetic compound assignment '{symbol}' only supported for NUMBER arrays"
                    ))
                } else if source != Type::Number {
                    Some(format!(
                        "Cannot use {symbol} with {source} on NUMBER array element"
                    ))
                } else {
                    None
                }
            }
        };
        if let Some(message) = problem {
            self.error_with(ErrorCode::Sem024, message);
        }
    }

    pub(super) fn check_element_input(&mut self, name: &str, index: &Expr) {
        if self.check_array_target(name).is_some() {
            self.check_index_expr(index);
        }
    }

    pub(super) fn check_push(&mut self, name: &str, value: &Expr) {
        let mark = self.mark();
        let Some(elem) = self.check_array_target(name) else {
            return;
        };
        let source = self.check_expr(value);
        if !self.errors_since(mark) && !source.is_unknown() && !is_compatible(elem.into(), source)
        {
            self.error_with(
                ErrorCode::Sem024,
                format!("Cannot push {source} to {elem} array"),
            );
        }
    }

    pub(super) fn check_set(&mut self, name: &str, index: &Expr, value: &Expr) {
        let mark = self.mark();
        let Some(elem) = self.check_array_target(name) else {
            return;
        };
        self.check_index_expr(index);
        let source = self.check_expr(value);
        if !self.errors_since(mark) && !source.is_unknown() && !is_compatible(elem.into(), source)
        {
            self.error_with(
                ErrorCode::Sem024,
                format!("Cannot set {source} to {elem} array element"),
            );
        }
    }

    // Expressions

    pub(super) fn check_index(&mut self, name: &str, index: &Expr) -> Type {
        let Some(elem) = self.check_array_target(name) else {
            return Type::Unknown;
        };
        self.check_index_expr(index);
        elem.into()
    }

    pub(super) fn check_length(&mut self, name: &str) -> Type {
        match self.check_array_target(name) {
            Some(_) => Type::Number,
            None => Type::Unknown,
        }
    }

    pub(super) fn check_pop(&mut self, name: &str) -> Type {
        self.check_array_target(name).map_or(Type::Unknown, Type::from)
    }

    /// Type an array literal. `hint` is the element type expected by the
    /// context and is only used to type an empty literal.
    pub(super) fn check_array_literal(&mut self, elems: &[Expr], hint: Option<Primitive>) -> Type {
        let mark = self.mark();
        let mut first: Option<Type> = None;
        for elem in elems {
            let ty = self.check_expr(elem);
            if ty.is_unknown() {
                continue;
            }
            match first {
                None => first = Some(ty),
                Some(expected) if expected != ty => {
                    self.error_with(
                        ErrorCode::Sem024,
                        format!("Inconsistent element types in array literal: {expected} and {ty}"),
                    );
                    return Type::Unknown;
                }
                Some(_) => {}
            }
        }

        if self.errors_since(mark) {
            return Type::Unknown;
        }
        match first {
            Some(ty) => match ty.primitive() {
                Some(prim) => Type::Array(prim),
                None => {
                    self.error_with(
                        ErrorCode::Sem024,
                        format!("Array elements must be NUMBER, LETTER, SENTENCE, or LOGIC, got {ty}"),
                    );
                    Type::Unknown
                }
            },
            None => match hint {
                Some(prim) => Type::Array(prim),
                None => {
                    self.error_with(
                        ErrorCode::Sem024,
                        "Cannot infer element type of empty array literal",
                    );
                    Type::Unknown
                }
            },
        }
    }

    pub(super) fn check_array_new(&mut self, elem_ty: &str, size: &Expr) -> Type {
        let elem = Primitive::from_name(elem_ty);
        if elem.is_none() {
            self.error_with(ErrorCode::Sem020, format!("Invalid array type '{elem_ty}'"));
        }
        let size_ty = self.check_expr(size);
        if !size_ty.is_unknown() && size_ty != Type::Number {
            self.error_with(
                ErrorCode::Sem023,
                format!("Array size must be numeric expression, got {size_ty}"),
            );
        }
        elem.map_or(Type::Unknown, Type::Array)
    }

    /// Check an expression in a position that expects an array of `elem`,
    /// so an empty literal takes that element type.
    fn check_array_value(&mut self, expr: &Expr, elem: Primitive) -> Type {
        if let ExprKind::ArrayLiteral(elems) = &expr.kind {
            let ty = self.check_array_literal(elems, Some(elem));
            expr.set_ty(ty);
            ty
        } else {
            self.check_expr(expr)
        }
    }

    /// Resolve `name` as a usable array and return its element type.
    ///
    /// Missing or non-array names stop the caller. An uninitialized array
    /// is reported but still yields its element type.
    fn check_array_target(&mut self, name: &str) -> Option<Primitive> {
        let Some(ty) = self.scopes.lookup(name) else {
            self.error(undefined_array(name));
            return None;
        };
        let Some(elem) = ty.element() else {
            self.error(not_an_array(name));
            return None;
        };
        if !self.scopes.is_initialized(name) {
            self.error(array_used_before_init(name));
        }
        Some(elem)
    }

    fn check_index_expr(&mut self, index: &Expr) {
        let ty = self.check_expr(index);
        if !ty.is_unknown() && ty != Type::Number {
            self.error(index_not_numeric(ty));
        }
    }
}
