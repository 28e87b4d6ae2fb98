//! The `run` command: validate, then execute on the process console.

use cl_diagnostic::emitter::ReportEmitter;
use cl_eval::{stdio_console, EvalConfig};

use super::read_program;
use crate::{run, RunOutcome};

/// Options accepted after `clc run`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub path: Option<String>,
    /// `--no-prompt`: read input without writing prompts.
    pub no_prompt: bool,
    /// `--quiet-warnings`: drop input coercion warnings.
    pub quiet_warnings: bool,
}

impl RunOptions {
    pub fn config(&self) -> EvalConfig {
        EvalConfig::new()
            .with_prompts(!self.no_prompt)
            .with_warnings(!self.quiet_warnings)
    }
}

/// Parse the arguments that follow `run`.
pub fn parse_run_options(args: &[String]) -> Result<RunOptions, String> {
    let mut options = RunOptions::default();
    for arg in args {
        match arg.as_str() {
            "--no-prompt" => options.no_prompt = true,
            "--quiet-warnings" => options.quiet_warnings = true,
            flag if flag.starts_with('-') => return Err(format!("unknown option '{flag}'")),
            path if options.path.is_none() => options.path = Some(path.to_string()),
            extra => return Err(format!("unexpected argument '{extra}'")),
        }
    }
    Ok(options)
}

/// Validate and run a file.
///
/// Diagnostics print as the validation report on stdout (exit 1); a
/// runtime failure prints on stderr (exit 2).
pub fn run_file(path: &str, config: EvalConfig) -> i32 {
    let Some(program) = read_program(path) else {
        return 1;
    };

    let outcome = run(&program, stdio_console(), config);
    match &outcome {
        RunOutcome::Clean => {}
        RunOutcome::Diagnostics(diagnostics) => ReportEmitter::stdout().report(diagnostics),
        RunOutcome::RuntimeFailure(err) => eprintln!("Runtime error: {err}"),
    }
    outcome.exit_code()
}
