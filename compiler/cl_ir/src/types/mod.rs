//! Type tags.
//!
//! `Type` is what the validator infers for an expression and records for a
//! declared name. `Primitive` is the element type of an array and the type
//! of every runtime scalar.

use std::fmt;

/// The four primitive types of the language.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Primitive {
    Number,
    Letter,
    Sentence,
    Logic,
}

impl Primitive {
    pub const ALL: [Primitive; 4] = [
        Primitive::Number,
        Primitive::Letter,
        Primitive::Sentence,
        Primitive::Logic,
    ];

    /// Resolve a declared type name, case-insensitively.
    ///
    /// Returns `None` for anything that is not one of the four primitives.
    pub fn from_name(name: &str) -> Option<Primitive> {
        Primitive::ALL
            .into_iter()
            .find(|prim| prim.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// The keyword spelling, as used in diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Primitive::Number => "NUMBER",
            Primitive::Letter => "LETTER",
            Primitive::Sentence => "SENTENCE",
            Primitive::Logic => "LOGIC",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static type tag.
///
/// `Unknown` marks an expression whose type could not be determined. It is
/// always accompanied by a diagnostic, and checks against it are skipped so
/// one mistake does not cascade.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    Number,
    Letter,
    Sentence,
    Logic,
    Array(Primitive),
    #[default]
    Unknown,
}

impl Type {
    /// Normalize a declared type name (case-insensitive).
    ///
    /// Only the four primitive keywords are valid declared types.
    pub fn normalize(name: &str) -> Type {
        Primitive::from_name(name).map_or(Type::Unknown, Type::from)
    }

    /// The scalar type, if this is one of the four primitives.
    pub const fn primitive(self) -> Option<Primitive> {
        match self {
            Type::Number => Some(Primitive::Number),
            Type::Letter => Some(Primitive::Letter),
            Type::Sentence => Some(Primitive::Sentence),
            Type::Logic => Some(Primitive::Logic),
            Type::Array(_) | Type::Unknown => None,
        }
    }

    /// The element type, if this is an array type.
    pub const fn element(self) -> Option<Primitive> {
        match self {
            Type::Array(elem) => Some(elem),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_array(self) -> bool {
        matches!(self, Type::Array(_))
    }

    #[inline]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Type::Unknown)
    }
}

impl From<Primitive> for Type {
    fn from(prim: Primitive) -> Type {
        match prim {
            Primitive::Number => Type::Number,
            Primitive::Letter => Type::Letter,
            Primitive::Sentence => Type::Sentence,
            Primitive::Logic => Type::Logic,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Number => f.write_str("NUMBER"),
            Type::Letter => f.write_str("LETTER"),
            Type::Sentence => f.write_str("SENTENCE"),
            Type::Logic => f.write_str("LOGIC"),
            Type::Array(elem) => write!(f, "ARRAY:{elem}"),
            Type::Unknown => f.write_str("UNKNOWN"),
        }
    }
}
