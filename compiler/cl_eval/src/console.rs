//! Console boundary for program I/O.
//!
//! Display writes text with or without a newline, input reads one line,
//! and coercion warnings go to a separate channel. Where that ends up is
//! the handler's business:
//! - Stdio: stdout, stderr and stdin (the CLI)
//! - Buffer: captured output and warnings plus scripted input lines
//!   (tests and embedders)
//! - Silent: discards output and reports input as closed
//!
//! # Performance
//! Enum dispatch, no trait objects, on the path every display takes.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Console on the process's standard streams.
#[derive(Default)]
pub struct StdioConsole;

impl StdioConsole {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }

    /// Print without newline, flushed so prompts appear before input.
    pub fn print(&self, msg: &str) {
        print!("{msg}");
        let _ = io::stdout().flush();
    }

    pub fn warn(&self, msg: &str) {
        eprintln!("{msg}");
    }

    /// One line from stdin without its line terminator; `None` at end of
    /// input or on a read failure.
    pub fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(trim_newline(line)),
        }
    }
}

/// Console that captures output and replays scripted input.
pub struct BufferConsole {
    output: Mutex<String>,
    warnings: Mutex<Vec<String>>,
    input: Mutex<VecDeque<String>>,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::with_input(Vec::<String>::new())
    }

    /// A buffer console whose input yields `lines` in order, then closes.
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BufferConsole {
            output: Mutex::new(String::new()),
            warnings: Mutex::new(Vec::new()),
            input: Mutex::new(lines.into_iter().map(Into::into).collect()),
        }
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.output.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn print(&self, msg: &str) {
        self.output.lock().push_str(msg);
    }

    pub fn warn(&self, msg: &str) {
        self.warnings.lock().push(msg.to_string());
    }

    pub fn read_line(&self) -> Option<String> {
        self.input.lock().pop_front()
    }

    pub fn get_output(&self) -> String {
        self.output.lock().clone()
    }

    pub fn get_warnings(&self) -> Vec<String> {
        self.warnings.lock().clone()
    }

    pub fn clear(&self) {
        self.output.lock().clear();
        self.warnings.lock().clear();
    }
}

impl Default for BufferConsole {
    fn default() -> Self {
        Self::new()
    }
}

/// Console implementation using enum dispatch.
pub enum ConsoleImpl {
    Stdio(StdioConsole),
    Buffer(BufferConsole),
    Silent,
}

impl ConsoleImpl {
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdio(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    pub fn print(&self, msg: &str) {
        match self {
            Self::Stdio(h) => h.print(msg),
            Self::Buffer(h) => h.print(msg),
            Self::Silent => {}
        }
    }

    pub fn warn(&self, msg: &str) {
        match self {
            Self::Stdio(h) => h.warn(msg),
            Self::Buffer(h) => h.warn(msg),
            Self::Silent => {}
        }
    }

    pub fn read_line(&self) -> Option<String> {
        match self {
            Self::Stdio(h) => h.read_line(),
            Self::Buffer(h) => h.read_line(),
            Self::Silent => None,
        }
    }

    /// Captured output; empty for handlers that do not capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdio(_) | Self::Silent => String::new(),
        }
    }

    /// Captured warnings; empty for handlers that do not capture.
    pub fn get_warnings(&self) -> Vec<String> {
        match self {
            Self::Buffer(h) => h.get_warnings(),
            Self::Stdio(_) | Self::Silent => Vec::new(),
        }
    }
}

/// Shared console handle passed to the interpreter.
pub type SharedConsole = Arc<ConsoleImpl>;

pub fn stdio_console() -> SharedConsole {
    Arc::new(ConsoleImpl::Stdio(StdioConsole))
}

/// A capturing console with no input.
pub fn buffer_console() -> SharedConsole {
    Arc::new(ConsoleImpl::Buffer(BufferConsole::new()))
}

/// A capturing console that answers input with `lines`.
pub fn scripted_console<I, S>(lines: I) -> SharedConsole
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Arc::new(ConsoleImpl::Buffer(BufferConsole::with_input(lines)))
}

pub fn silent_console() -> SharedConsole {
    Arc::new(ConsoleImpl::Silent)
}

fn trim_newline(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
mod tests;
