//! The `check` command: validate a program without running it.

use cl_diagnostic::emitter::{DiagnosticEmitter, PlainEmitter};

use super::read_program;
use crate::validate;

/// Validate a file, printing every diagnostic or `OK: <path>`.
pub fn check_file(path: &str) -> i32 {
    let Some(program) = read_program(path) else {
        return 1;
    };

    let diagnostics = validate(&program);
    if diagnostics.is_empty() {
        println!("OK: {path}");
        return 0;
    }

    let mut emitter = PlainEmitter::stderr();
    emitter.emit_all(&diagnostics);
    emitter.emit_summary(diagnostics.len());
    emitter.flush();
    1
}
