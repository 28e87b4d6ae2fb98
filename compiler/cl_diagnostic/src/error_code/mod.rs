//! Error codes for all semantic diagnostics.
//!
//! Each code is a stable identifier (e.g., `SEM004`) that prefixes the
//! message. Codes group related checks rather than naming a single one:
//! `SEM024` covers every array element-type rule, for example.

use std::fmt;

/// Error codes for all semantic diagnostics.
///
/// Format: SEM### where the hundreds group:
/// - SEM00x: declarations, names, operators, literals
/// - SEM01x: control flow and I/O statements
/// - SEM02x: arrays
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Declarations and expressions (SEM00x)
    /// Invalid type, invalid name, or duplicate variable declaration
    Sem001,
    /// Undefined variable
    Sem002,
    /// Operator applied to operands of the wrong type
    Sem003,
    /// Type mismatch in declaration, assignment, or equality
    Sem004,
    /// Variable or array used before initialization
    Sem005,
    /// Malformed literal
    Sem006,
    /// If/ElseIf condition is not LOGIC
    Sem008,

    // Control flow and I/O (SEM01x)
    /// Loop/do-while condition is not LOGIC
    Sem010,
    /// Break or continue outside a loop
    Sem012,
    /// Switch with neither case nor default
    Sem013,
    /// Case type incompatible with the switch expression
    Sem014,
    /// Undefined variable in display or input
    Sem016,
    /// Display with nothing to show
    Sem017,

    // Arrays (SEM02x)
    /// Invalid array type, duplicate array, or invalid array name
    Sem020,
    /// Undefined array, or the name is not an array
    Sem021,
    /// Array index or size is not NUMBER
    Sem023,
    /// Array element type mismatch
    Sem024,
}

impl ErrorCode {
    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Sem001 => "SEM001",
            ErrorCode::Sem002 => "SEM002",
            ErrorCode::Sem003 => "SEM003",
            ErrorCode::Sem004 => "SEM004",
            ErrorCode::Sem005 => "SEM005",
            ErrorCode::Sem006 => "SEM006",
            ErrorCode::Sem008 => "SEM008",
            ErrorCode::Sem010 => "SEM010",
            ErrorCode::Sem012 => "SEM012",
            ErrorCode::Sem013 => "SEM013",
            ErrorCode::Sem014 => "SEM014",
            ErrorCode::Sem016 => "SEM016",
            ErrorCode::Sem017 => "SEM017",
            ErrorCode::Sem020 => "SEM020",
            ErrorCode::Sem021 => "SEM021",
            ErrorCode::Sem023 => "SEM023",
            ErrorCode::Sem024 => "SEM024",
        }
    }

    /// Check if this code belongs to the array checks.
    pub fn is_array_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::Sem020 | ErrorCode::Sem021 | ErrorCode::Sem023 | ErrorCode::Sem024
        )
    }

    /// Check if this code belongs to the control-flow and I/O checks.
    pub fn is_statement_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::Sem008
                | ErrorCode::Sem010
                | ErrorCode::Sem012
                | ErrorCode::Sem013
                | ErrorCode::Sem014
                | ErrorCode::Sem016
                | ErrorCode::Sem017
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
