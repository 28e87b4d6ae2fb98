//! Binary and unary operator implementations.
//!
//! Both operands are evaluated before the operator runs, so `&&` and `||`
//! never short-circuit. Operands are read through `Value::as_number` and
//! `Value::as_logic`, which apply the LETTER and SENTENCE conversions.

use cl_ir::{BinaryOp, UnaryOp};

use crate::errors::{division_by_zero, modulo_by_zero, type_mismatch, EvalResult};
use crate::value::Value;

/// Evaluate a binary operation on two evaluated operands.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> EvalResult<Value> {
    match op {
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => {
            arithmetic(op, left.as_number()?, right.as_number()?).map(Value::Number)
        }
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            let (a, b) = (left.as_number()?, right.as_number()?);
            Ok(Value::Logic(match op {
                BinaryOp::Lt => a < b,
                BinaryOp::LtEq => a <= b,
                BinaryOp::Gt => a > b,
                _ => a >= b,
            }))
        }
        BinaryOp::Eq => Ok(Value::Logic(left.loose_eq(right))),
        BinaryOp::NotEq => Ok(Value::Logic(!left.loose_eq(right))),
        BinaryOp::And | BinaryOp::Or => {
            let (a, b) = (left.as_logic()?, right.as_logic()?);
            Ok(Value::Logic(if op == BinaryOp::And { a && b } else { a || b }))
        }
    }
}

/// Arithmetic on NUMBERs. Zero divisors fail instead of producing
/// infinities.
pub fn arithmetic(op: BinaryOp, a: f64, b: f64) -> EvalResult<f64> {
    match op {
        BinaryOp::Add => Ok(a + b),
        BinaryOp::Sub => Ok(a - b),
        BinaryOp::Mul => Ok(a * b),
        BinaryOp::Div if b == 0.0 => Err(division_by_zero()),
        BinaryOp::Div => Ok(a / b),
        BinaryOp::Mod if b == 0.0 => Err(modulo_by_zero()),
        // Remainder takes the dividend's sign.
        BinaryOp::Mod => Ok(a % b),
        _ => Err(type_mismatch("arithmetic operator", op.as_symbol())),
    }
}

pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> EvalResult<Value> {
    match op {
        UnaryOp::Not => Ok(Value::Logic(!operand.as_logic()?)),
        UnaryOp::Plus => Ok(Value::Number(operand.as_number()?)),
        UnaryOp::Neg => Ok(Value::Number(-operand.as_number()?)),
    }
}

#[cfg(test)]
mod tests;
