//! Command handlers for the `clc` CLI.
//!
//! Each handler returns the process exit status instead of exiting, so the
//! binary stays a thin argument parser.

mod check;
mod run;

pub use check::check_file;
pub use run::{parse_run_options, run_file, RunOptions};

use cl_ir::Program;

use crate::load_program;

/// Load `path`, or report why not on stderr.
fn read_program(path: &str) -> Option<Program> {
    match load_program(path) {
        Ok(program) => Some(program),
        Err(err) => {
            eprintln!("error: {err}");
            None
        }
    }
}
