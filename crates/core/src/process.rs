//! External command execution
//!
//! Thin wrappers used by the helpers that shell out (`cygpath`, `rustfmt`):
//! - Output capture
//! - Feeding a string on stdin
//! - PATH lookup

use crate::error::{Error, Result};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::thread;

/// Result of a command execution
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,
    /// Exit code of the command
    pub exit_code: i32,
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
}

impl CommandResult {
    /// Create from `std::process::Output`
    #[must_use]
    pub fn from_output(output: &Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Get combined output (stdout + stderr)
    #[must_use]
    pub fn combined_output(&self) -> String {
        if self.stderr.is_empty() {
            self.stdout.clone()
        } else if self.stdout.is_empty() {
            self.stderr.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }

    /// Turn a non-zero exit into [`Error::CommandFailed`]
    pub fn into_success(self, program: &str) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(Error::command_failed(
                program,
                format!("exit code {}: {}", self.exit_code, self.combined_output().trim()),
            ))
        }
    }
}

fn spawn_error(program: &str, err: std::io::Error) -> Error {
    if err.kind() == std::io::ErrorKind::NotFound {
        Error::CommandNotFound(program.to_string())
    } else {
        Error::command_failed(program, err.to_string())
    }
}

/// Run a command and capture output
pub fn run_command(program: &str, args: &[&str]) -> Result<CommandResult> {
    tracing::debug!(program, ?args, "running command");

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| spawn_error(program, e))?;

    Ok(CommandResult::from_output(&output))
}

/// Run a command, writing `input` to its stdin, and capture output
pub fn run_command_with_stdin(program: &str, args: &[&str], input: &str) -> Result<CommandResult> {
    tracing::debug!(program, ?args, input_len = input.len(), "running command with stdin");

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| spawn_error(program, e))?;

    // Write on a separate thread so a child filling its stdout pipe cannot
    // deadlock against us filling its stdin pipe.
    let writer = child.stdin.take().map(|mut stdin| {
        let input = input.to_string();
        thread::spawn(move || stdin.write_all(input.as_bytes()))
    });

    let output = child.wait_with_output()?;

    if let Some(writer) = writer {
        match writer.join() {
            // A child that exits without reading all of stdin reports through its status.
            Ok(Err(e)) if e.kind() != std::io::ErrorKind::BrokenPipe => return Err(e.into()),
            Ok(_) => {}
            Err(_) => {
                return Err(Error::command_failed(program, "stdin writer thread panicked"));
            }
        }
    }

    Ok(CommandResult::from_output(&output))
}

/// Locate `program` in PATH
pub fn is_command_installed(program: &str) -> Result<PathBuf> {
    which::which(program).map_err(|_| Error::CommandNotFound(program.to_string()))
}
