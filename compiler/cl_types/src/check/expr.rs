//! Expression checking.

use cl_diagnostic::{undefined_variable, used_before_init, ErrorCode};
use cl_ir::{BinaryOp, Expr, ExprKind, StepOp, Type, UnaryOp};

use super::Checker;
use crate::compat::{check_literal, is_equality_compatible, LiteralProblem};

impl Checker {
    /// Check an expression, record its inferred type on the node, and
    /// return it.
    pub(crate) fn check_expr(&mut self, expr: &Expr) -> Type {
        let ty = match &expr.kind {
            ExprKind::Literal(raw) => self.check_literal_expr(raw),
            ExprKind::Var(name) => self.check_var(name),
            ExprKind::Binary { op, left, right } => self.check_binary(*op, left, right),
            ExprKind::Unary { op, operand } => self.check_unary(*op, operand),
            ExprKind::Step { name, op, .. } => self.check_step(name, *op),
            ExprKind::ArrayLiteral(elems) => self.check_array_literal(elems, None),
            ExprKind::ArrayNew { elem_ty, size } => self.check_array_new(elem_ty, size),
            ExprKind::Index { name, index } => self.check_index(name, index),
            ExprKind::Length(name) => self.check_length(name),
            ExprKind::Pop(name) => self.check_pop(name),
        };
        expr.set_ty(ty);
        ty
    }

    fn check_literal_expr(&mut self, raw: &str) -> Type {
        match check_literal(raw) {
            Ok(ty) => ty,
            Err(problem) => {
                let message = match problem {
                    LiteralProblem::Invalid => format!("Invalid literal format: '{raw}'"),
                    LiteralProblem::MismatchedSingle => {
                        format!("Mismatched single quotes in literal: '{raw}'")
                    }
                    LiteralProblem::MismatchedDouble => {
                        format!("Mismatched double quotes in literal: '{raw}'")
                    }
                    LiteralProblem::LetterTooLong => {
                        format!("Character literal can only contain one character: '{raw}'")
                    }
                    LiteralProblem::EmptyLetter => {
                        "Empty character literal is not allowed".to_string()
                    }
                };
                self.error_with(ErrorCode::Sem006, message);
                Type::Unknown
            }
        }
    }

    fn check_var(&mut self, name: &str) -> Type {
        let Some(ty) = self.scopes.lookup(name) else {
            self.error(undefined_variable(name));
            return Type::Unknown;
        };
        if !self.scopes.is_initialized(name) {
            self.error(used_before_init(name));
        }
        ty
    }

    /// Operands are checked first. If either produced a diagnostic or is
    /// `Unknown`, the operator's own rule is skipped and the result is
    /// `Unknown`, so a single mistake is reported once.
    fn check_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr) -> Type {
        let mark = self.mark();
        let lt = self.check_expr(left);
        let rt = self.check_expr(right);
        if self.errors_since(mark) || lt.is_unknown() || rt.is_unknown() {
            return Type::Unknown;
        }

        let symbol = op.as_symbol();
        if op.is_arithmetic() {
            if lt != Type::Number || rt != Type::Number {
                self.error_with(
                    ErrorCode::Sem003,
                    format!("Arithmetic operator '{symbol}' requires numeric operands, got {lt} and {rt}"),
                );
            }
            Type::Number
        } else if op.is_logical() {
            if lt != Type::Logic || rt != Type::Logic {
                self.error_with(
                    ErrorCode::Sem003,
                    format!("Logical operator '{symbol}' requires boolean operands, got {lt} and {rt}"),
                );
            }
            Type::Logic
        } else if op.is_relational() {
            if lt != Type::Number || rt != Type::Number {
                self.error_with(
                    ErrorCode::Sem003,
                    format!("Relational operator '{symbol}' requires numeric operands, got {lt} and {rt}"),
                );
            }
            Type::Logic
        } else {
            if !is_equality_compatible(lt, rt) {
                self.error_with(
                    ErrorCode::Sem004,
                    format!("Equality operator '{symbol}' requires compatible types, got {lt} and {rt}"),
                );
            }
            Type::Logic
        }
    }

    fn check_unary(&mut self, op: UnaryOp, operand: &Expr) -> Type {
        let mark = self.mark();
        let ot = self.check_expr(operand);
        if self.errors_since(mark) || ot.is_unknown() {
            return Type::Unknown;
        }
        match op {
            UnaryOp::Not => {
                if ot != Type::Logic {
                    self.error_with(
                        ErrorCode::Sem003,
                        format!("Logical NOT operator '!' requires boolean operand, got {ot}"),
                    );
                }
                Type::Logic
            }
            UnaryOp::Plus | UnaryOp::Neg => {
                if ot != Type::Number {
                    self.error_with(
                        ErrorCode::Sem003,
                        format!(
                            "Unary operator '{}' requires numeric operand, got {ot}",
                            op.as_symbol()
                        ),
                    );
                }
                Type::Number
            }
        }
    }

    fn check_step(&mut self, name: &str, op: StepOp) -> Type {
        let Some(ty) = self.scopes.lookup(name) else {
            self.error(undefined_variable(name));
            return Type::Unknown;
        };
        if !self.scopes.is_initialized(name) {
            self.error(used_before_init(name));
        }
        if ty != Type::Number {
            let verb = match op {
                StepOp::Inc => "increment",
                StepOp::Dec => "decrement",
            };
            self.error_with(
                ErrorCode::Sem003,
                format!("Cannot {verb} non-numeric variable '{name}' of type {ty}"),
            );
        }
        Type::Number
    }
}
