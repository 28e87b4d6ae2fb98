//! Validate-then-execute through the driver API with buffered console I/O.

use cl_diagnostic::ErrorCode;
use cl_eval::{buffer_console, scripted_console, EvalConfig, EvalErrorKind, SharedConsole};
use cl_ir::build::*;
use cl_ir::{BinaryOp, Program, Stmt};
use clc::{parse_program, run, RunOutcome};
use pretty_assertions::assert_eq;

fn run_program(stmts: Vec<Stmt>) -> (RunOutcome, String) {
    let console = buffer_console();
    let outcome = run(
        &Program::new(stmts),
        SharedConsole::clone(&console),
        EvalConfig::default(),
    );
    (outcome, console.get_output())
}

fn codes(outcome: &RunOutcome) -> Vec<ErrorCode> {
    match outcome {
        RunOutcome::Diagnostics(diags) => diags.iter().map(|d| d.code).collect(),
        other => panic!("expected diagnostics, got {other:?}"),
    }
}

fn show(raw: &str) -> Stmt {
    display_lit(&format!("\"{raw}\""))
}

#[test]
fn duplicate_declaration_at_any_depth_blocks_execution() {
    let (outcome, out) = run_program(vec![
        show("before"),
        decl("NUMBER", "x", Some(lit("1"))),
        if_then(
            lit("true"),
            vec![while_loop(
                lit("false"),
                vec![decl("NUMBER", "x", Some(lit("2")))],
            )],
        ),
    ]);
    assert_eq!(codes(&outcome), vec![ErrorCode::Sem001]);
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(out, "", "nothing runs when validation fails");
}

#[test]
fn every_diagnostic_is_reported() {
    let (outcome, _) = run_program(vec![
        assign("missing", lit("1")),
        decl("NUMBER", "n", Some(text("word"))),
        brk(),
    ]);
    assert_eq!(
        codes(&outcome),
        vec![ErrorCode::Sem002, ErrorCode::Sem004, ErrorCode::Sem012]
    );
}

#[test]
fn arrays_in_sibling_blocks_may_share_a_name() {
    let (outcome, out) = run_program(vec![if_else(
        lit("true"),
        vec![
            array_decl("NUMBER", "a", Some(array_lit(vec![lit("1")]))),
            display_var("a"),
        ],
        vec![array_decl("NUMBER", "a", Some(array_lit(vec![lit("2")])))],
    )]);
    assert!(outcome.is_clean(), "{outcome:?}");
    assert_eq!(out, "[1.0]\n");
}

#[test]
fn eager_elseif_increment() {
    let (outcome, out) = run_program(vec![
        decl("NUMBER", "x", Some(lit("10"))),
        decl("NUMBER", "y", Some(lit("5"))),
        if_chain(
            binary(BinaryOp::Gt, var("x"), var("y")),
            vec![show("A")],
            vec![(
                binary(BinaryOp::Gt, post_inc("x"), lit("0")),
                vec![show("B")],
            )],
            None,
        ),
        display_var("x"),
    ]);
    assert!(outcome.is_clean(), "{outcome:?}");
    assert_eq!(out, "A\n11.0\n");
}

#[test]
fn runtime_failure_keeps_earlier_output_and_stops() {
    let (outcome, out) = run_program(vec![
        array_decl(
            "NUMBER",
            "arr",
            Some(array_lit(vec![lit("1"), lit("2"), lit("3")])),
        ),
        display(length("arr")),
        set("arr", lit("5"), lit("1")).at_line(3),
        show("unreachable"),
    ]);
    assert_eq!(out, "3.0\n");
    assert_eq!(outcome.exit_code(), 2);
    match outcome {
        RunOutcome::RuntimeFailure(err) => {
            assert_eq!(err.kind, EvalErrorKind::IndexOutOfBounds { index: 5.0 });
            assert_eq!(err.to_string(), "Line 3: Array index out of bounds: 5");
        }
        other => panic!("expected a runtime failure, got {other:?}"),
    }
}

#[test]
fn interactive_program_over_scripted_input() {
    let console = scripted_console(["3", "Ada"]);
    let program = Program::new(vec![
        decl("NUMBER", "count", Some(lit("0"))),
        decl("SENTENCE", "who", Some(text(""))),
        input("count"),
        input("who"),
        for_loop(
            decl("NUMBER", "i", Some(lit("0"))),
            binary(BinaryOp::Lt, var("i"), var("count")),
            expr_stmt(post_inc("i")),
            vec![print(var("who"))],
        ),
        show(""),
    ]);
    let outcome = run(
        &program,
        SharedConsole::clone(&console),
        EvalConfig::new().with_prompts(false),
    );
    assert!(outcome.is_clean(), "{outcome:?}");
    assert_eq!(console.get_output(), "AdaAdaAda\n");
}

#[test]
fn json_interchange_runs_like_the_built_program() {
    let json = r#"{
        "stmts": [
            { "kind": { "VarDecl": { "ty": "number", "name": "n", "init": { "Literal": "4" } } }, "line": 1 },
            { "kind": { "Display": { "item": { "Expr": { "Binary": {
                "op": "Mul",
                "left": { "Var": "n" },
                "right": { "Literal": "2.5" }
            } } }, "newline": true } }, "line": 2 }
        ]
    }"#;
    let program = parse_program(json).unwrap_or_else(|e| panic!("{e}"));

    let console = buffer_console();
    let outcome = run(&program, SharedConsole::clone(&console), EvalConfig::default());
    assert!(outcome.is_clean(), "{outcome:?}");
    assert_eq!(console.get_output(), "10.0\n");
}
