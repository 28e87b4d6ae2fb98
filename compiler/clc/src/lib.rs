//! CustomLang driver.
//!
//! Two phases, in order:
//! 1. `validate` collects every semantic diagnostic
//! 2. `execute` runs the program, and only a program with zero
//!    diagnostics gets there
//!
//! `run` chains them and reports the result as a [`RunOutcome`]. Programs
//! arrive as JSON produced by the external parser; see [`load_program`].

pub mod commands;

use std::path::Path;
use std::sync::Once;

use cl_diagnostic::Diagnostic;
use cl_eval::{EvalConfig, EvalError, Interpreter, SharedConsole};
use cl_ir::Program;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=cl_eval=debug` or
/// `RUST_LOG=cl_types=trace`; without `RUST_LOG` nothing is installed, so
/// log lines never mix with program output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Validate every top-level statement against a fresh root scope.
#[tracing::instrument(level = "debug", skip_all)]
pub fn validate(program: &Program) -> Vec<Diagnostic> {
    cl_types::check_program(program)
}

/// Run a program the validator accepted.
#[tracing::instrument(level = "debug", skip_all)]
pub fn execute(program: &Program, console: SharedConsole, config: EvalConfig) -> Result<(), EvalError> {
    Interpreter::with_config(console, config).execute_program(program)
}

/// How a validate-then-execute run ended.
#[derive(Debug)]
pub enum RunOutcome {
    Clean,
    /// Validation failed; nothing was executed.
    Diagnostics(Vec<Diagnostic>),
    /// Execution started and aborted.
    RuntimeFailure(EvalError),
}

impl RunOutcome {
    /// Process exit status: 0 clean, 1 diagnostics, 2 runtime failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Clean => 0,
            RunOutcome::Diagnostics(_) => 1,
            RunOutcome::RuntimeFailure(_) => 2,
        }
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, RunOutcome::Clean)
    }
}

/// Validate, then execute if and only if there were no diagnostics.
pub fn run(program: &Program, console: SharedConsole, config: EvalConfig) -> RunOutcome {
    let diagnostics = validate(program);
    if !diagnostics.is_empty() {
        tracing::debug!(errors = diagnostics.len(), "execution refused");
        return RunOutcome::Diagnostics(diagnostics);
    }
    match execute(program, console, config) {
        Ok(()) => RunOutcome::Clean,
        Err(err) => RunOutcome::RuntimeFailure(err),
    }
}

/// Failure to obtain a program.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{path}' is not a valid program: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode a program from its JSON interchange form.
pub fn parse_program(json: &str) -> Result<Program, serde_json::Error> {
    serde_json::from_str(json)
}

/// Read and decode a program file.
pub fn load_program(path: impl AsRef<Path>) -> Result<Program, LoadError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: display.clone(),
        source,
    })?;
    parse_program(&json).map_err(|source| LoadError::Parse {
        path: display,
        source,
    })
}
