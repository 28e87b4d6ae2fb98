//! Diagnostic system for semantic validation.
//!
//! - Error codes for searchability (`SEM004`)
//! - Clear messages (what went wrong)
//! - Source line of the statement that detected it
//!
//! Validation never stops at the first problem: diagnostics are collected
//! into a list and reported together, and any diagnostic blocks execution.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{
    array_used_before_init, duplicate_variable, index_not_numeric, not_an_array,
    undefined_array, undefined_variable, used_before_init, Diagnostic,
};
pub use error_code::ErrorCode;
