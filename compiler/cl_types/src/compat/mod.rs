//! Literal inference and type compatibility.
//!
//! Pure functions, no side effects. Used by every validator and by the
//! interpreter when it needs to tell whether stored text "looks numeric".

use cl_ir::Type;

/// Can a value of type `source` flow into a location typed `target`?
///
/// Directed: identity, plus LETTER widening into NUMBER and SENTENCE.
pub fn is_compatible(target: Type, source: Type) -> bool {
    target == source
        || matches!(
            (target, source),
            (Type::Number | Type::Sentence, Type::Letter)
        )
}

/// Equality operands only need to be compatible in one direction.
pub fn is_equality_compatible(left: Type, right: Type) -> bool {
    is_compatible(left, right) || is_compatible(right, left)
}

/// Why a literal's surface form was rejected.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum LiteralProblem {
    /// Not a boolean, numeral, or quoted form.
    Invalid,
    /// Opens with `'` but does not close with one.
    MismatchedSingle,
    /// Opens with `"` but does not close with one.
    MismatchedDouble,
    /// `'ab'`
    LetterTooLong,
    /// `''`
    EmptyLetter,
}

/// Classify a raw literal by its surface form.
///
/// - `true` / `false` (any case) → LOGIC
/// - `-?digits(.digits)?` → NUMBER
/// - `'c'` (exactly one character) → LETTER
/// - `"..."` → SENTENCE
pub fn check_literal(raw: &str) -> Result<Type, LiteralProblem> {
    let text = raw.trim();

    if text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false") {
        return Ok(Type::Logic);
    }
    if is_numeric_literal(text) {
        return Ok(Type::Number);
    }
    if let Some(rest) = text.strip_prefix('\'') {
        let Some(inner) = rest.strip_suffix('\'') else {
            return Err(LiteralProblem::MismatchedSingle);
        };
        return match inner.chars().count() {
            0 => Err(LiteralProblem::EmptyLetter),
            1 => Ok(Type::Letter),
            _ => Err(LiteralProblem::LetterTooLong),
        };
    }
    if let Some(rest) = text.strip_prefix('"') {
        return if rest.ends_with('"') {
            Ok(Type::Sentence)
        } else {
            Err(LiteralProblem::MismatchedDouble)
        };
    }
    Err(LiteralProblem::Invalid)
}

/// Infer a literal's type, `Unknown` if malformed.
pub fn infer_literal(raw: &str) -> Type {
    check_literal(raw).unwrap_or(Type::Unknown)
}

/// Does `text` match `-?\d+(\.\d+)?`?
///
/// ASCII digits only; no exponent, no leading `+`, no bare `.5`.
pub fn is_numeric_literal(text: &str) -> bool {
    fn all_digits(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
    }

    let unsigned = text.strip_prefix('-').unwrap_or(text);
    match unsigned.split_once('.') {
        Some((int, frac)) => all_digits(int) && all_digits(frac),
        None => all_digits(unsigned),
    }
}

/// Identifier rule for variable and array names: a letter, then letters,
/// digits, or underscores.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests;
