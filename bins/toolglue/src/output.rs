//! Terminal output for status lines and error reports
//!
//! Everything goes to stderr: stdout carries command results so it stays
//! safe to pipe.

use owo_colors::OwoColorize;
use toolglue_core::Error;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print a hint below an error
    pub fn hint(message: &str) {
        eprintln!("  {}", message.dimmed());
    }
}

/// Report `err` and return the exit code for it
pub fn report_error(err: &Error, json: bool) -> i32 {
    if json {
        match serde_json::to_string(&err.to_report()) {
            Ok(line) => eprintln!("{line}"),
            Err(_) => Status::error(&err.to_string()),
        }
    } else {
        Status::error(&format!("[{}] {}", err.code(), err));
        if let Some(suggestion) = err.suggestion() {
            Status::hint(&suggestion);
        }
    }

    err.exit_code()
}
