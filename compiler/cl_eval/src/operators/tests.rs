use pretty_assertions::assert_eq;

use super::*;
use crate::errors::EvalErrorKind;

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn binary(op: BinaryOp, left: Value, right: Value) -> Value {
    evaluate_binary(op, &left, &right).unwrap_or_else(|e| panic!("{op:?}: {e}"))
}

#[test]
fn arithmetic_on_numbers() {
    assert_eq!(binary(BinaryOp::Add, num(2.0), num(3.0)), num(5.0));
    assert_eq!(binary(BinaryOp::Sub, num(2.0), num(3.0)), num(-1.0));
    assert_eq!(binary(BinaryOp::Mul, num(2.5), num(2.0)), num(5.0));
    assert_eq!(binary(BinaryOp::Div, num(7.0), num(2.0)), num(3.5));
    assert_eq!(binary(BinaryOp::Mod, num(-7.0), num(3.0)), num(-1.0));
}

#[test]
fn zero_divisors_fail() {
    assert_eq!(
        evaluate_binary(BinaryOp::Div, &num(1.0), &num(0.0)).map_err(|e| e.kind),
        Err(EvalErrorKind::DivisionByZero)
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Mod, &num(1.0), &num(0.0)).map_err(|e| e.kind),
        Err(EvalErrorKind::ModuloByZero)
    );
}

#[test]
fn letters_take_part_as_digits() {
    assert_eq!(binary(BinaryOp::Add, Value::Letter('4'), num(1.0)), num(5.0));
    assert!(evaluate_binary(BinaryOp::Add, &Value::Letter('x'), &num(1.0)).is_err());
}

#[test]
fn relational() {
    assert_eq!(binary(BinaryOp::Lt, num(1.0), num(2.0)), Value::Logic(true));
    assert_eq!(binary(BinaryOp::GtEq, num(2.0), num(2.0)), Value::Logic(true));
    assert_eq!(binary(BinaryOp::Gt, num(1.0), num(2.0)), Value::Logic(false));
    assert_eq!(binary(BinaryOp::LtEq, num(3.0), num(2.0)), Value::Logic(false));
}

#[test]
fn logical() {
    let t = Value::Logic(true);
    let f = Value::Logic(false);
    assert_eq!(binary(BinaryOp::And, t.clone(), f.clone()), f);
    assert_eq!(binary(BinaryOp::Or, f.clone(), t.clone()), t);
    assert_eq!(evaluate_unary(UnaryOp::Not, &t).ok(), Some(f));
}

#[test]
fn logical_checks_both_operands() {
    // A false left operand does not excuse a bad right operand.
    assert!(evaluate_binary(BinaryOp::And, &Value::Logic(false), &num(1.0)).is_err());
}

#[test]
fn equality_uses_epsilon_and_content() {
    assert_eq!(
        binary(BinaryOp::Eq, num(1.0), num(1.0 + 1e-9)),
        Value::Logic(true)
    );
    assert_eq!(
        binary(
            BinaryOp::NotEq,
            Value::Sentence("a".into()),
            Value::Letter('a')
        ),
        Value::Logic(false)
    );
}

#[test]
fn unary_sign() {
    assert_eq!(evaluate_unary(UnaryOp::Neg, &num(2.0)).ok(), Some(num(-2.0)));
    assert_eq!(evaluate_unary(UnaryOp::Plus, &num(2.0)).ok(), Some(num(2.0)));
}

#[test]
fn arithmetic_rejects_other_operators() {
    assert!(arithmetic(BinaryOp::Lt, 1.0, 2.0).is_err());
}
