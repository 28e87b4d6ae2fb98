//! Runtime failures.
//!
//! A runtime failure aborts the rest of the run. `EvalErrorKind` is the
//! typed category; `EvalError` adds the line of the statement that failed.
//! Factory functions are the construction API and are marked `#[cold]`,
//! since every one of them ends a run.

use std::error::Error;
use std::fmt;

use cl_ir::Primitive;

/// Result of an evaluation step.
pub type EvalResult<T> = Result<T, EvalError>;

/// Typed runtime failure category.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvalErrorKind {
    // Arithmetic
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Modulus by zero")]
    ModuloByZero,

    // Names
    #[error("Undefined variable: {name}")]
    UndefinedVariable { name: String },
    #[error("Variable is not an array: {name}")]
    NotAnArray { name: String },

    // Arrays
    #[error("Array index out of bounds: {index}")]
    IndexOutOfBounds { index: f64 },
    #[error("Array index must be an integer: {index}")]
    NonIntegerIndex { index: f64 },
    #[error("Array size must be a non-negative integer: {size}")]
    InvalidArraySize { size: f64 },
    #[error("Array size too large: {size}")]
    ArrayTooLarge { size: f64 },
    #[error("Cannot pop from an empty array")]
    EmptyArray,
    #[error("Non-numeric value in NUMBER array: {value}")]
    NonNumericElement { value: String },
    #[error("Invalid LETTER value: {value}")]
    InvalidLetter { value: String },
    #[error("Invalid LOGIC value: {value}")]
    InvalidLogic { value: String },

    // Values
    #[error("Cannot convert {value} to {target}")]
    Conversion { value: String, target: Primitive },
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    // Input
    #[error("Numeric input required")]
    NumericInputRequired,
    #[error("LETTER input must be a single character.")]
    LetterInputLength,
    #[error("Failed to read input")]
    InputClosed,

    // Control flow
    #[error("Break statement outside of loop")]
    BreakOutsideLoop,
    #[error("Continue statement outside of loop")]
    ContinueOutsideLoop,
}

/// A runtime failure, with the line of the statement that raised it.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub line: Option<u32>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind, line: None }
    }

    /// Attach `line` unless a more specific one is already recorded.
    ///
    /// Nested statements fail first, so the innermost line wins.
    #[must_use]
    pub fn or_line(mut self, line: Option<u32>) -> Self {
        if self.line.is_none() {
            self.line = line;
        }
        self
    }

    /// The message without the line prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "Line {line}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl Error for EvalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.kind)
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Arithmetic

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalErrorKind::ModuloByZero.into()
}

// Names

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    }
    .into()
}

#[cold]
pub fn not_an_array(name: &str) -> EvalError {
    EvalErrorKind::NotAnArray {
        name: name.to_string(),
    }
    .into()
}

// Arrays

#[cold]
pub fn index_out_of_bounds(index: f64) -> EvalError {
    EvalErrorKind::IndexOutOfBounds { index }.into()
}

#[cold]
pub fn non_integer_index(index: f64) -> EvalError {
    EvalErrorKind::NonIntegerIndex { index }.into()
}

#[cold]
pub fn invalid_array_size(size: f64) -> EvalError {
    EvalErrorKind::InvalidArraySize { size }.into()
}

#[cold]
pub fn array_too_large(size: f64) -> EvalError {
    EvalErrorKind::ArrayTooLarge { size }.into()
}

#[cold]
pub fn empty_array() -> EvalError {
    EvalErrorKind::EmptyArray.into()
}

/// The value does not fit an array of `elem`.
#[cold]
pub fn invalid_element(elem: Primitive, value: impl fmt::Display) -> EvalError {
    let value = value.to_string();
    match elem {
        Primitive::Number => EvalErrorKind::NonNumericElement { value },
        Primitive::Letter => EvalErrorKind::InvalidLetter { value },
        Primitive::Logic => EvalErrorKind::InvalidLogic { value },
        Primitive::Sentence => EvalErrorKind::TypeMismatch {
            expected: Primitive::Sentence.to_string(),
            got: value,
        },
    }
    .into()
}

// Values

#[cold]
pub fn conversion(value: impl fmt::Display, target: Primitive) -> EvalError {
    EvalErrorKind::Conversion {
        value: value.to_string(),
        target,
    }
    .into()
}

#[cold]
pub fn type_mismatch(expected: impl fmt::Display, got: impl fmt::Display) -> EvalError {
    EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    }
    .into()
}

// Input

#[cold]
pub fn numeric_input_required() -> EvalError {
    EvalErrorKind::NumericInputRequired.into()
}

#[cold]
pub fn letter_input_length() -> EvalError {
    EvalErrorKind::LetterInputLength.into()
}

#[cold]
pub fn input_closed() -> EvalError {
    EvalErrorKind::InputClosed.into()
}

// Control flow

#[cold]
pub fn break_outside_loop() -> EvalError {
    EvalErrorKind::BreakOutsideLoop.into()
}

#[cold]
pub fn continue_outside_loop() -> EvalError {
    EvalErrorKind::ContinueOutsideLoop.into()
}
