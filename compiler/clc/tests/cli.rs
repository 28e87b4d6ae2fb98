//! End-to-end runs of the `clc` binary on program files.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use cl_ir::build::*;
use cl_ir::{BinaryOp, Program};
use pretty_assertions::assert_eq;

fn write_program(program: &Program) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap_or_else(|e| panic!("{e}"));
    let json = serde_json::to_string(program).unwrap_or_else(|e| panic!("{e}"));
    file.write_all(json.as_bytes())
        .unwrap_or_else(|e| panic!("{e}"));
    file
}

fn clc(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_clc"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("failed to spawn clc: {e}"));
    if let Some(mut pipe) = child.stdin.take() {
        pipe.write_all(stdin.as_bytes())
            .unwrap_or_else(|e| panic!("{e}"));
    }
    child
        .wait_with_output()
        .unwrap_or_else(|e| panic!("{e}"))
}

fn text_of(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn path_of(file: &tempfile::NamedTempFile) -> String {
    file.path().display().to_string()
}

#[test]
fn run_clean_program() {
    let file = write_program(&Program::new(vec![
        decl("NUMBER", "x", Some(lit("2"))),
        display(binary(BinaryOp::Mul, var("x"), lit("21"))),
    ]));
    let output = clc(&["run", &path_of(&file)], "");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(text_of(&output.stdout), "42.0\n");
}

#[test]
fn run_prints_validation_report() {
    let file = write_program(&Program::new(vec![
        display_lit("\"never\""),
        assign("y", lit("1")).at_line(2),
    ]));
    let output = clc(&["run", &path_of(&file)], "");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        text_of(&output.stdout),
        "=== Semantic Validation Errors ===\n\
         Line 2: SEM002: Undefined variable: 'y'\n\
         Total errors: 1\n\
         ================================\n\
         Execution aborted due to validation errors.\n"
    );
}

#[test]
fn run_reports_runtime_failure_on_stderr() {
    let file = write_program(&Program::new(vec![
        decl("NUMBER", "zero", Some(lit("0"))),
        display(binary(BinaryOp::Mod, lit("1"), var("zero"))).at_line(2),
    ]));
    let output = clc(&["run", &path_of(&file)], "");
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        text_of(&output.stderr),
        "Runtime error: Line 2: Modulus by zero\n"
    );
}

#[test]
fn run_reads_stdin_without_prompts() {
    let file = write_program(&Program::new(vec![
        decl("NUMBER", "n", Some(lit("0"))),
        input("n"),
        display(binary(BinaryOp::Add, var("n"), lit("1"))),
    ]));
    let output = clc(&["run", &path_of(&file), "--no-prompt"], "41\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(text_of(&output.stdout), "42.0\n");
}

#[test]
fn check_reports_ok() {
    let file = write_program(&Program::new(vec![decl("LOGIC", "b", None)]));
    let path = path_of(&file);
    let output = clc(&["check", &path], "");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(text_of(&output.stdout), format!("OK: {path}\n"));
}

#[test]
fn missing_file_is_a_load_error() {
    let output = clc(&["run", "/definitely/not/here.json"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(text_of(&output.stderr).starts_with("error: cannot read"));
}

#[test]
fn malformed_json_is_a_load_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap_or_else(|e| panic!("{e}"));
    file.write_all(b"{ not json")
        .unwrap_or_else(|e| panic!("{e}"));
    let output = clc(&["check", &path_of(&file)], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(text_of(&output.stderr).contains("is not a valid program"));
}
