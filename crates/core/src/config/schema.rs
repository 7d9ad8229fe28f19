//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigSchema {
    #[serde(default)]
    pub pipe: PipeConfig,

    #[serde(default)]
    pub format: FormatConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Piped stdin reading
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PipeConfig {
    /// Give up waiting for stdin after this many milliseconds; unset waits forever
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl PipeConfig {
    /// Configured timeout as a `Duration`
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// Source formatting of generated code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormatConfig {
    /// Run the formatter at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Formatter binary
    #[serde(default = "default_program")]
    pub program: String,

    /// Rust edition passed to the formatter
    #[serde(default = "default_edition")]
    pub edition: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            program: default_program(),
            edition: default_edition(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_program() -> String {
    "rustfmt".to_string()
}

fn default_edition() -> String {
    "2021".to_string()
}

/// Diagnostics output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}
