#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;
use crate::{undefined_variable, Diagnostic, ErrorCode};

fn render_report(diagnostics: &[Diagnostic]) -> String {
    let mut emitter = ReportEmitter::new(Vec::new());
    emitter.report(diagnostics);
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn test_report_layout() {
    let diags = vec![
        undefined_variable("y").with_line(Some(3)),
        Diagnostic::new(
            ErrorCode::Sem012,
            "Break statement must be inside a loop",
        ),
    ];
    assert_eq!(
        render_report(&diags),
        "=== Semantic Validation Errors ===\n\
         Line 3: SEM002: Undefined variable: 'y'\n\
         SEM012: Break statement must be inside a loop\n\
         Total errors: 2\n\
         ================================\n\
         Execution aborted due to validation errors.\n"
    );
}

#[test]
fn test_report_empty_writes_nothing() {
    assert_eq!(render_report(&[]), "");
}

#[test]
fn test_plain_emitter() {
    let mut emitter = PlainEmitter::new(Vec::new());
    let diags = vec![undefined_variable("a")];
    emitter.emit_all(&diags);
    emitter.emit_summary(diags.len());
    let out = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(out, "SEM002: Undefined variable: 'a'\n1 error\n");
}
