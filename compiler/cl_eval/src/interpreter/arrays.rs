//! Array statements.

use cl_ir::{AssignOp, BinaryOp, Expr, Primitive, Type};

use super::Interpreter;
use crate::array::ArrayValue;
use crate::errors::{not_an_array, type_mismatch, EvalResult};
use crate::operators::arithmetic;
use crate::value::Value;

impl Interpreter {
    /// Without an initializer the array starts empty.
    pub(crate) fn exec_array_decl(
        &mut self,
        elem_ty: &str,
        name: &str,
        init: Option<&Expr>,
    ) -> EvalResult<()> {
        let elem = Primitive::from_name(elem_ty)
            .ok_or_else(|| type_mismatch("array element type", elem_ty))?;
        let array = match init {
            Some(init) => {
                let value = self.eval_expr(init)?;
                into_array(value, elem)?
            }
            None => ArrayValue::new(elem),
        };
        tracing::trace!(name, len = array.len(), "declare array");
        self.store
            .declare(name, Type::Array(elem), Value::Array(array));
        Ok(())
    }

    /// Whole-array assignment re-types the new elements for the declared
    /// element type.
    pub(crate) fn exec_array_assign(&mut self, name: &str, value: &Expr) -> EvalResult<()> {
        let elem = self
            .store
            .binding(name)?
            .ty
            .element()
            .ok_or_else(|| not_an_array(name))?;
        let value = self.eval_expr(value)?;
        let array = into_array(value, elem)?;
        self.store.put(name, Value::Array(array))
    }

    /// `xs[i] = e` and `xs[i] op= e`.
    ///
    /// `+=` on a SENTENCE array concatenates text; every other compound
    /// form computes on numbers.
    pub(crate) fn exec_element_assign(
        &mut self,
        name: &str,
        index: &Expr,
        op: AssignOp,
        value: &Expr,
    ) -> EvalResult<()> {
        let index = self.eval_expr(index)?.as_number()?;
        let value = self.eval_expr(value)?;

        let value = match op.binary() {
            None => value,
            Some(bin) => {
                let array = self.store.array(name)?;
                let current = array.get(index)?;
                if array.elem() == Primitive::Sentence && bin == BinaryOp::Add {
                    Value::Sentence(format!("{current}{value}"))
                } else {
                    Value::Number(arithmetic(bin, current.as_number()?, value.as_number()?)?)
                }
            }
        };
        self.store.array_mut(name)?.set(index, value)
    }

    pub(crate) fn exec_push(&mut self, name: &str, value: &Expr) -> EvalResult<()> {
        let value = self.eval_expr(value)?;
        self.store.array_mut(name)?.push(value)
    }

    pub(crate) fn exec_set(&mut self, name: &str, index: &Expr, value: &Expr) -> EvalResult<()> {
        let index = self.eval_expr(index)?.as_number()?;
        let value = self.eval_expr(value)?;
        self.store.array_mut(name)?.set(index, value)
    }
}

fn into_array(value: Value, elem: Primitive) -> EvalResult<ArrayValue> {
    match value {
        Value::Array(array) => array.retype(elem),
        other => Err(type_mismatch(Type::Array(elem), other.ty())),
    }
}
