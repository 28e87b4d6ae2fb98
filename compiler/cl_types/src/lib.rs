//! CustomLang Types - Semantic Validation
//!
//! Static checking for CustomLang programs: every name is declared before
//! use and initialized before it is read, operators get operands of the
//! right types, conditions are LOGIC, jumps sit inside loops, and array
//! operations target arrays.
//!
//! # Architecture
//!
//! - `compat`: literal inference and the directed compatibility relation
//! - `scope`: the validation-time scope tree
//! - `check`: the statement and expression walker that produces diagnostics
//!
//! Validation never stops at the first problem. The result is the full
//! ordered list of diagnostics; an empty list means the program may run.

pub mod check;
pub mod compat;
pub mod scope;

pub use check::{check_program, Checker, ScopedChecker};
pub use compat::{
    check_literal, infer_literal, is_compatible, is_equality_compatible, is_numeric_literal,
    is_valid_identifier, LiteralProblem,
};
pub use scope::{ScopeKind, ScopeTree};
