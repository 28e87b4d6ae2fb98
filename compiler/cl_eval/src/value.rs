//! Runtime values.
//!
//! Values are a tagged union with native payloads. What the program can
//! observe is their canonical text, produced by `Display`:
//!
//! - NUMBER prints with at least one fractional digit, switching to
//!   scientific form outside `[1e-3, 1e7)` (`5.0`, `0.25`, `1.0E7`)
//! - LETTER and SENTENCE print unquoted
//! - LOGIC prints lower-case
//! - arrays print as `[e1, e2]` with quoted text elements

use std::fmt;

use cl_ir::{Primitive, Type};
use cl_types::is_numeric_literal;

use crate::array::ArrayValue;
use crate::errors::{conversion, type_mismatch, EvalResult};

/// Tolerance for NUMBER equality.
pub const EPSILON: f64 = 1e-6;

/// A runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Letter(char),
    Sentence(String),
    Logic(bool),
    Array(ArrayValue),
}

impl Value {
    /// The value a declaration without an initializer installs.
    pub fn default_for(prim: Primitive) -> Value {
        match prim {
            Primitive::Number => Value::Number(0.0),
            Primitive::Letter => Value::Letter(' '),
            Primitive::Sentence => Value::Sentence(String::new()),
            Primitive::Logic => Value::Logic(false),
        }
    }

    /// Evaluate a raw literal.
    ///
    /// The validator has already accepted its surface form.
    pub fn from_literal(raw: &str) -> EvalResult<Value> {
        let text = raw.trim();
        if text.eq_ignore_ascii_case("true") {
            return Ok(Value::Logic(true));
        }
        if text.eq_ignore_ascii_case("false") {
            return Ok(Value::Logic(false));
        }
        if is_numeric_literal(text) {
            return text
                .parse()
                .map(Value::Number)
                .map_err(|_| conversion(text, Primitive::Number));
        }
        if let Some(inner) = strip_quotes(text, '\'') {
            let mut chars = inner.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                return Ok(Value::Letter(c));
            }
        }
        if let Some(inner) = strip_quotes(text, '"') {
            return Ok(Value::Sentence(inner.to_string()));
        }
        Err(type_mismatch("literal", text))
    }

    pub fn primitive(&self) -> Option<Primitive> {
        match self {
            Value::Number(_) => Some(Primitive::Number),
            Value::Letter(_) => Some(Primitive::Letter),
            Value::Sentence(_) => Some(Primitive::Sentence),
            Value::Logic(_) => Some(Primitive::Logic),
            Value::Array(_) => None,
        }
    }

    pub fn ty(&self) -> Type {
        match self {
            Value::Array(array) => Type::Array(array.elem()),
            scalar => scalar.primitive().map_or(Type::Unknown, Type::from),
        }
    }

    /// Read as a NUMBER.
    ///
    /// A LETTER converts only if it is a decimal digit. A SENTENCE converts
    /// if its text is a numeral, which happens after input stored digits
    /// into a non-numeric variable.
    pub fn as_number(&self) -> EvalResult<f64> {
        match self {
            Value::Number(n) => Ok(*n),
            Value::Letter(c) => c
                .to_digit(10)
                .map(f64::from)
                .ok_or_else(|| conversion(format!("'{c}'"), Primitive::Number)),
            Value::Sentence(s) if is_numeric_literal(s.trim()) => s
                .trim()
                .parse()
                .map_err(|_| conversion(format!("\"{s}\""), Primitive::Number)),
            other => Err(conversion(other, Primitive::Number)),
        }
    }

    /// Read as a LOGIC. SENTENCE text `true`/`false` is accepted.
    pub fn as_logic(&self) -> EvalResult<bool> {
        match self {
            Value::Logic(b) => Ok(*b),
            Value::Sentence(s) if s.trim().eq_ignore_ascii_case("true") => Ok(true),
            Value::Sentence(s) if s.trim().eq_ignore_ascii_case("false") => Ok(false),
            other => Err(conversion(other, Primitive::Logic)),
        }
    }

    /// Convert for storage in a location typed `target`.
    ///
    /// Covers the static widenings (LETTER into NUMBER or SENTENCE) and
    /// values whose shape drifted through input.
    pub fn coerce_to(self, target: Primitive) -> EvalResult<Value> {
        match (target, self) {
            (Primitive::Number, value) => value.as_number().map(Value::Number),
            (Primitive::Logic, value) => value.as_logic().map(Value::Logic),
            (Primitive::Letter, Value::Letter(c)) => Ok(Value::Letter(c)),
            (Primitive::Sentence, Value::Sentence(s)) => Ok(Value::Sentence(s)),
            (Primitive::Sentence, Value::Letter(c)) => Ok(Value::Sentence(c.to_string())),
            (target, value) => Err(type_mismatch(target, value.ty())),
        }
    }

    /// `==` semantics: NUMBER within `EPSILON`, text by content, LOGIC by
    /// truth value. A LETTER meets a NUMBER through its digit value.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => numbers_equal(*a, *b),
            (Value::Logic(a), Value::Logic(b)) => a == b,
            (Value::Number(n), Value::Letter(c)) | (Value::Letter(c), Value::Number(n)) => c
                .to_digit(10)
                .is_some_and(|digit| numbers_equal(f64::from(digit), *n)),
            // Text against text, and anything that drifted through input.
            _ => self.to_string() == other.to_string(),
        }
    }

    /// Does a `CASE` value select this switch value?
    ///
    /// Like `loose_eq`, except text compares case-insensitively.
    pub fn switch_matches(&self, case: &Value) -> bool {
        match (self, case) {
            (Value::Sentence(a), Value::Sentence(b)) => a.to_lowercase() == b.to_lowercase(),
            (Value::Sentence(s), Value::Letter(c)) => s.to_lowercase() == c.to_lowercase().to_string(),
            _ => self.loose_eq(case),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Letter(c) => write!(f, "{c}"),
            Value::Sentence(s) => f.write_str(s),
            Value::Logic(b) => write!(f, "{b}"),
            Value::Array(array) => write!(f, "{array}"),
        }
    }
}

#[inline]
pub fn numbers_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Canonical NUMBER text.
///
/// Magnitudes in `[1e-3, 1e7)` print in plain notation, with `.0` for
/// integral values. Everything else prints as `<mantissa>E<exponent>` with
/// at least one fractional mantissa digit. Both forms use the shortest
/// digits that round-trip.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = n.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        let plain = n.to_string();
        return if plain.contains('.') {
            plain
        } else {
            format!("{plain}.0")
        };
    }

    let sci = format!("{n:e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    if mantissa.contains('.') {
        format!("{mantissa}E{exponent}")
    } else {
        format!("{mantissa}.0E{exponent}")
    }
}

fn strip_quotes(text: &str, quote: char) -> Option<&str> {
    text.strip_prefix(quote)?.strip_suffix(quote)
}

#[cfg(test)]
mod tests;
