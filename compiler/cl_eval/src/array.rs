//! Array values.
//!
//! An array owns its element type and an ordered sequence of scalar
//! values. It grows only through `push` and shrinks only through `pop`;
//! `get` and `set` are bounds-checked. Every element written is coerced to
//! the element type first, so a NUMBER array only ever holds numbers.

use std::fmt;

use cl_ir::Primitive;

use crate::errors::{
    array_too_large, empty_array, index_out_of_bounds, invalid_array_size, invalid_element,
    non_integer_index, EvalResult,
};
use crate::value::{format_number, Value};

/// Largest size a sized declaration may request.
pub const MAX_ARRAY_LEN: usize = 0x7fff_ffff;

#[derive(Clone, Debug, PartialEq)]
pub struct ArrayValue {
    elem: Primitive,
    items: Vec<Value>,
}

impl ArrayValue {
    /// An empty array of `elem`.
    pub fn new(elem: Primitive) -> Self {
        ArrayValue {
            elem,
            items: Vec::new(),
        }
    }

    /// `size` default elements (`0`, `' '`, `""`, `false`).
    pub fn with_len(elem: Primitive, size: f64) -> EvalResult<Self> {
        if size < 0.0 || !is_integral(size) {
            return Err(invalid_array_size(size));
        }
        let len = to_usize(size);
        if len > MAX_ARRAY_LEN {
            return Err(array_too_large(size));
        }
        let mut items = Vec::new();
        items
            .try_reserve_exact(len)
            .map_err(|_| array_too_large(size))?;
        items.resize(len, Value::default_for(elem));
        Ok(ArrayValue { elem, items })
    }

    /// Build from evaluated literal elements, coercing each.
    pub fn from_values(elem: Primitive, values: Vec<Value>) -> EvalResult<Self> {
        let items = values
            .into_iter()
            .map(|value| coerce_element(elem, value))
            .collect::<EvalResult<Vec<_>>>()?;
        Ok(ArrayValue { elem, items })
    }

    #[inline]
    pub fn elem(&self) -> Primitive {
        self.elem
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn push(&mut self, value: Value) -> EvalResult<()> {
        let value = coerce_element(self.elem, value)?;
        self.items.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> EvalResult<Value> {
        self.items.pop().ok_or_else(empty_array)
    }

    pub fn get(&self, index: f64) -> EvalResult<&Value> {
        let slot = self.slot(index)?;
        Ok(&self.items[slot])
    }

    pub fn set(&mut self, index: f64, value: Value) -> EvalResult<()> {
        let slot = self.slot(index)?;
        self.items[slot] = coerce_element(self.elem, value)?;
        Ok(())
    }

    /// Re-type every element for an array of `elem`, as whole-array
    /// assignment does.
    pub fn retype(self, elem: Primitive) -> EvalResult<Self> {
        if elem == self.elem {
            return Ok(self);
        }
        ArrayValue::from_values(elem, self.items)
    }

    /// Resolve a NUMBER index against the current length.
    fn slot(&self, index: f64) -> EvalResult<usize> {
        if !is_integral(index) {
            return Err(non_integer_index(index));
        }
        if index < 0.0 || to_usize(index) >= self.items.len() {
            return Err(index_out_of_bounds(index));
        }
        Ok(to_usize(index))
    }
}

/// Coerce `value` into an element of an array of `elem`.
pub fn coerce_element(elem: Primitive, value: Value) -> EvalResult<Value> {
    match (elem, value) {
        (Primitive::Number, value) => value
            .as_number()
            .map(Value::Number)
            .map_err(|_| invalid_element(elem, &value)),
        (Primitive::Logic, value) => value
            .as_logic()
            .map(Value::Logic)
            .map_err(|_| invalid_element(elem, &value)),
        (Primitive::Letter, Value::Letter(c)) => Ok(Value::Letter(c)),
        (Primitive::Letter, Value::Sentence(s)) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Value::Letter(c)),
                _ => Err(invalid_element(elem, s)),
            }
        }
        (Primitive::Letter, other) => Err(invalid_element(elem, other)),
        (Primitive::Sentence, Value::Sentence(s)) => Ok(Value::Sentence(s)),
        (Primitive::Sentence, other) => Ok(Value::Sentence(other.to_string())),
    }
}

impl fmt::Display for ArrayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match item {
                Value::Sentence(s) => write!(f, "\"{s}\"")?,
                Value::Letter(c) => write!(f, "'{c}'")?,
                Value::Number(n) => f.write_str(&format_number(*n))?,
                other => write!(f, "{other}")?,
            }
        }
        f.write_str("]")
    }
}

#[inline]
fn is_integral(n: f64) -> bool {
    n.is_finite() && n.fract().abs() < f64::EPSILON
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "callers check the value is a non-negative integer first"
)]
#[inline]
fn to_usize(n: f64) -> usize {
    n as usize
}
