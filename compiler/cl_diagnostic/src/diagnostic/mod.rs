use std::fmt;

use crate::ErrorCode;

/// A semantic diagnostic.
///
/// Renders as `Line N: SEMxxx: message` when the source line is known,
/// `SEMxxx: message` otherwise.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub line: Option<u32>,
}

impl Diagnostic {
    /// Create a diagnostic with no source line.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            line: None,
        }
    }

    /// Attach the source line of the statement that detected the problem.
    ///
    /// Line 0 is treated as unknown.
    #[must_use]
    pub fn with_line(mut self, line: Option<u32>) -> Self {
        self.line = line.filter(|l| *l > 0);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "Line {line}: ")?;
        }
        write!(f, "{}: {}", self.code, self.message)
    }
}

// Common diagnostic constructors

/// Create an "undefined variable" diagnostic.
pub fn undefined_variable(name: &str) -> Diagnostic {
    Diagnostic::new(
        ErrorCode::Sem002,
        format!("Undefined variable: '{name}'"),
    )
}

/// Create a "used before initialization" diagnostic for a scalar variable.
pub fn used_before_init(name: &str) -> Diagnostic {
    Diagnostic::new(
        ErrorCode::Sem005,
        format!("Variable '{name}' used before initialization"),
    )
}

/// Create a "used before initialization" diagnostic for an array.
pub fn array_used_before_init(name: &str) -> Diagnostic {
    Diagnostic::new(
        ErrorCode::Sem005,
        format!("Array '{name}' used before initialization"),
    )
}

/// Create a "duplicate declaration" diagnostic.
pub fn duplicate_variable(name: &str) -> Diagnostic {
    Diagnostic::new(
        ErrorCode::Sem001,
        format!("Duplicate variable declaration: '{name}'"),
    )
}

/// Create an "undefined array" diagnostic.
pub fn undefined_array(name: &str) -> Diagnostic {
    Diagnostic::new(ErrorCode::Sem021, format!("Undefined array: '{name}'"))
}

/// Create a "not an array" diagnostic.
pub fn not_an_array(name: &str) -> Diagnostic {
    Diagnostic::new(
        ErrorCode::Sem021,
        format!("Variable '{name}' is not an array"),
    )
}

/// Create an "index is not numeric" diagnostic.
pub fn index_not_numeric(got: impl fmt::Display) -> Diagnostic {
    Diagnostic::new(
        ErrorCode::Sem023,
        format!("Array index must be numeric expression, got {got}"),
    )
}

#[cfg(test)]
mod tests;
