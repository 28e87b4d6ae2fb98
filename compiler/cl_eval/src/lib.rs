//! CustomLang Eval - Tree-Walking Interpreter
//!
//! Executes programs that passed validation.
//!
//! # Architecture
//!
//! - `value`: runtime values and their canonical text
//! - `array`: bounds-checked, element-typed arrays
//! - `store`: the flat runtime namespace
//! - `operators`: binary and unary operators
//! - `branch`: the branch-executability context
//! - `console`: the display/input boundary
//! - `interpreter`: statement execution and control signals
//!
//! Runtime failures are values (`EvalError`) propagated with `?` to the
//! caller of `Interpreter::execute_program`. Nothing in the interpreter
//! writes to the process streams except through the injected console.

mod array;
mod branch;
mod console;
pub mod errors;
mod interpreter;
mod operators;
mod store;
mod value;

pub use array::{coerce_element, ArrayValue};
pub use branch::{BranchChain, BranchContext};
pub use console::{
    buffer_console, scripted_console, silent_console, stdio_console, BufferConsole,
    ConsoleImpl, SharedConsole, StdioConsole,
};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{ControlSignal, EvalConfig, Interpreter, ScopedInterpreter};
pub use operators::{arithmetic, evaluate_binary, evaluate_unary};
pub use store::{Binding, Store};
pub use value::{format_number, numbers_equal, Value, EPSILON};
