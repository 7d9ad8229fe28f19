//! Error taxonomy shared by every helper
//!
//! All helpers return these as values. Nothing in this crate logs an error,
//! retries, or exits the process; front ends decide what to do with them via
//! [`Error::code`], [`Error::exit_code`] and [`Error::suggestion`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::time::Duration;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // General errors (1xxx)
    Timeout = 1003,

    // IO errors (2xxx)
    IoError = 2000,
    ReadFailure = 2005,

    // Configuration errors (3xxx)
    ConfigError = 3000,

    // Process errors (5xxx)
    CommandNotFound = 5001,
    CommandFailed = 5002,

    // Validation errors (6xxx)
    InvalidFormat = 6002,
    MissingRequiredFlag = 6004,
    InvalidFlagArgument = 6005,
}

impl ErrorCode {
    /// Get the numeric code
    #[must_use]
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a human-readable category
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self.code() / 1000 {
            1 => "General",
            2 => "IO",
            3 => "Configuration",
            5 => "Process",
            6 => "Validation",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Errors returned by toolglue helpers
#[derive(Error, Debug)]
pub enum Error {
    /// A required flag was not given an argument
    #[error("missing required flag: -{name}")]
    MissingRequiredFlag {
        /// Flag name without the leading dash
        name: String,
    },

    /// A flag marker was seen where the flag's value was expected
    #[error("flag -{name} needs a valid argument (not: {value})")]
    InvalidFlagArgument {
        /// Flag name without the leading dash
        name: String,
        /// The flag-shaped argument that was rejected
        value: String,
    },

    /// Reading or decoding standard input failed before end-of-stream
    #[error("failed to read piped input: {0}")]
    ReadFailure(#[source] io::Error),

    /// No piped input arrived within the allotted wait
    #[error("did not read any piped input from stdin after waiting {0:?}")]
    TimeoutExceeded(Duration),

    /// An external tool is not installed
    #[error("command {0} is not installed in PATH")]
    CommandNotFound(String),

    /// An external tool ran and reported failure
    #[error("{command} failed: {message}")]
    CommandFailed {
        /// Program that was run
        command: String,
        /// Exit status and captured output
        message: String,
    },

    /// The source formatter rejected its input
    #[error("formatting failed: {0}")]
    FormatFailed(String),

    /// Any other I/O error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a [`Error::MissingRequiredFlag`]
    pub fn missing_required_flag(name: impl Into<String>) -> Self {
        Self::MissingRequiredFlag { name: name.into() }
    }

    /// Build a [`Error::InvalidFlagArgument`]
    pub fn invalid_flag_argument(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidFlagArgument {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Build a [`Error::CommandFailed`]
    pub fn command_failed(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CommandFailed {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Build a [`Error::Config`]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Error code for programmatic handling
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingRequiredFlag { .. } => ErrorCode::MissingRequiredFlag,
            Self::InvalidFlagArgument { .. } => ErrorCode::InvalidFlagArgument,
            Self::ReadFailure(_) => ErrorCode::ReadFailure,
            Self::TimeoutExceeded(_) => ErrorCode::Timeout,
            Self::CommandNotFound(_) => ErrorCode::CommandNotFound,
            Self::CommandFailed { .. } => ErrorCode::CommandFailed,
            Self::FormatFailed(_) => ErrorCode::InvalidFormat,
            Self::Io(_) => ErrorCode::IoError,
            Self::Config(_) => ErrorCode::ConfigError,
        }
    }

    /// Process exit code a front end should use for this error
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingRequiredFlag { .. } | Self::InvalidFlagArgument { .. } => {
                exit_codes::USAGE_ERROR
            }
            Self::TimeoutExceeded(_) => exit_codes::TIMEOUT,
            Self::CommandNotFound(_) => exit_codes::COMMAND_NOT_FOUND,
            Self::Config(_) => exit_codes::CONFIG_ERROR,
            Self::ReadFailure(_)
            | Self::CommandFailed { .. }
            | Self::FormatFailed(_)
            | Self::Io(_) => exit_codes::FAILURE,
        }
    }

    /// Recovery hint for humans, if there is an obvious one
    #[must_use]
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::MissingRequiredFlag { name } => {
                Some(format!("Pass a value with -{name} <value>"))
            }
            Self::InvalidFlagArgument { name, .. } => Some(format!(
                "-{name} was followed by another flag; give it a value first"
            )),
            Self::TimeoutExceeded(_) => {
                Some("Pipe input into the command, e.g. `cat file | <command>`".to_string())
            }
            Self::CommandNotFound(cmd) => {
                Some(format!("Install {cmd} and ensure it's in your PATH"))
            }
            _ => None,
        }
    }

    /// Convert to a serializable report
    #[must_use]
    pub fn to_report(&self) -> ErrorReport {
        let code = self.code();
        ErrorReport {
            code,
            code_str: code.to_string(),
            category: code.category().to_string(),
            message: self.to_string(),
            suggestion: self.suggestion(),
            source: std::error::Error::source(self).map(ToString::to_string),
        }
    }
}

/// Serializable error report for machine-readable CLI output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Error code
    pub code: ErrorCode,
    /// Code rendered as `E0000`
    pub code_str: String,
    /// Category name
    pub category: String,
    /// Human-readable message
    pub message: String,
    /// Recovery hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Underlying cause
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Exit codes for CLI commands
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Generic failure
    pub const FAILURE: i32 = 1;
    /// Bad flags or arguments
    pub const USAGE_ERROR: i32 = 2;
    /// Configuration could not be loaded
    pub const CONFIG_ERROR: i32 = 3;
    /// Waited too long for input
    pub const TIMEOUT: i32 = 124;
    /// External command missing
    pub const COMMAND_NOT_FOUND: i32 = 127;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::ReadFailure.to_string(), "E2005");
        assert_eq!(ErrorCode::MissingRequiredFlag.to_string(), "E6004");
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::IoError.category(), "IO");
        assert_eq!(ErrorCode::Timeout.category(), "General");
        assert_eq!(ErrorCode::InvalidFlagArgument.category(), "Validation");
    }

    #[test]
    fn test_flag_error_messages() {
        assert_eq!(
            Error::missing_required_flag("r").to_string(),
            "missing required flag: -r"
        );
        assert_eq!(
            Error::invalid_flag_argument("o", "-x").to_string(),
            "flag -o needs a valid argument (not: -x)"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            Error::missing_required_flag("r").exit_code(),
            exit_codes::USAGE_ERROR
        );
        assert_eq!(
            Error::TimeoutExceeded(Duration::from_millis(50)).exit_code(),
            exit_codes::TIMEOUT
        );
        assert_eq!(
            Error::CommandNotFound("cygpath".into()).exit_code(),
            exit_codes::COMMAND_NOT_FOUND
        );
    }

    #[test]
    fn test_read_failure_keeps_source() {
        let err = Error::ReadFailure(io::Error::new(io::ErrorKind::InvalidData, "bad utf-8"));
        let report = err.to_report();
        assert_eq!(report.code, ErrorCode::ReadFailure);
        assert_eq!(report.source.as_deref(), Some("bad utf-8"));
    }

    #[test]
    fn test_error_report_serialization() {
        let report = Error::missing_required_flag("r").to_report();
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("E6004"));
        assert!(json.contains("Validation"));
        assert!(json.contains("MISSING_REQUIRED_FLAG"));
        assert!(!json.contains("\"source\""));
    }
}
