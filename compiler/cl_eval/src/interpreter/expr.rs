//! Expression evaluation.

use cl_ir::{Expr, ExprKind, Fixity, Primitive, StepOp};

use super::Interpreter;
use crate::array::ArrayValue;
use crate::errors::{type_mismatch, EvalResult};
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::value::Value;

impl Interpreter {
    /// Evaluate `expr`. Both operands of a binary operator are evaluated,
    /// left first, before the operator runs.
    pub(crate) fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Value> {
        match &expr.kind {
            ExprKind::Literal(raw) => Value::from_literal(raw),
            ExprKind::Var(name) => self.store.get(name).cloned(),
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(*op, &left, &right)
            }
            ExprKind::Unary { op, operand } => {
                let operand = self.eval_expr(operand)?;
                evaluate_unary(*op, &operand)
            }
            ExprKind::Step { name, op, fixity } => self.eval_step(name, *op, *fixity),
            ExprKind::ArrayLiteral(elems) => self.eval_array_literal(expr, elems),
            ExprKind::ArrayNew { elem_ty, size } => {
                let elem = Primitive::from_name(elem_ty)
                    .ok_or_else(|| type_mismatch("array element type", elem_ty))?;
                let size = self.eval_expr(size)?.as_number()?;
                ArrayValue::with_len(elem, size).map(Value::Array)
            }
            ExprKind::Index { name, index } => {
                let index = self.eval_expr(index)?.as_number()?;
                self.store.array(name)?.get(index).cloned()
            }
            ExprKind::Length(name) => {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "array lengths stay far below 2^52"
                )]
                let len = self.store.array(name)?.len() as f64;
                Ok(Value::Number(len))
            }
            ExprKind::Pop(name) => self.store.array_mut(name)?.pop(),
        }
    }

    /// Evaluate a condition to a LOGIC.
    pub(crate) fn eval_condition(&mut self, cond: &Expr) -> EvalResult<bool> {
        self.eval_expr(cond)?.as_logic()
    }

    /// `++x` yields the updated value, `x++` the prior one.
    fn eval_step(&mut self, name: &str, op: StepOp, fixity: Fixity) -> EvalResult<Value> {
        let old = self.store.get(name)?.as_number()?;
        let new = old + op.delta();
        self.store.assign(name, Value::Number(new))?;
        Ok(Value::Number(match fixity {
            Fixity::Pre => new,
            Fixity::Post => old,
        }))
    }

    /// The element type comes from validation; an unvalidated literal
    /// falls back to its first element's type.
    fn eval_array_literal(&mut self, expr: &Expr, elems: &[Expr]) -> EvalResult<Value> {
        let values = elems
            .iter()
            .map(|elem| self.eval_expr(elem))
            .collect::<EvalResult<Vec<_>>>()?;
        let elem = expr
            .ty()
            .element()
            .or_else(|| values.first().and_then(Value::primitive))
            .unwrap_or(Primitive::Sentence);
        ArrayValue::from_values(elem, values).map(Value::Array)
    }
}
