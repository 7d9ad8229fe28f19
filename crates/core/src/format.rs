//! Source formatting for generated code
//!
//! Formatting is an injected dependency: tools that emit Rust source take a
//! `&dyn SourceFormatter` and the host decides whether that is [`Rustfmt`]
//! or a [`NoopFormatter`].

use crate::config::FormatConfig;
use crate::error::{Error, Result};
use crate::process;

/// Something that can tidy up a source string
pub trait SourceFormatter: Send + Sync {
    /// Formatted copy of `source`
    fn format(&self, source: &str) -> Result<String>;

    /// Name for diagnostics
    fn name(&self) -> &str;
}

/// Pipes source through the `rustfmt` binary
#[derive(Debug, Clone)]
pub struct Rustfmt {
    program: String,
    edition: String,
}

impl Default for Rustfmt {
    fn default() -> Self {
        Self::new("2021")
    }
}

impl Rustfmt {
    /// `rustfmt` from PATH, formatting for `edition`
    pub fn new(edition: impl Into<String>) -> Self {
        Self {
            program: "rustfmt".to_string(),
            edition: edition.into(),
        }
    }

    /// Use a specific rustfmt binary
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

impl SourceFormatter for Rustfmt {
    fn format(&self, source: &str) -> Result<String> {
        let result = process::run_command_with_stdin(
            &self.program,
            &["--edition", &self.edition],
            source,
        )?;

        if result.success {
            Ok(result.stdout)
        } else {
            Err(Error::FormatFailed(result.stderr.trim().to_string()))
        }
    }

    fn name(&self) -> &str {
        &self.program
    }
}

/// Leaves source untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFormatter;

impl SourceFormatter for NoopFormatter {
    fn format(&self, source: &str) -> Result<String> {
        Ok(source.to_string())
    }

    fn name(&self) -> &str {
        "noop"
    }
}

/// Format `source`, falling back to the input on failure.
///
/// The caller always gets usable text back, so a failed format never
/// crunches the source it was handed. The error, if any, comes alongside.
pub fn format_or_keep(formatter: &dyn SourceFormatter, source: &str) -> (String, Option<Error>) {
    match formatter.format(source) {
        Ok(formatted) => (formatted, None),
        Err(err) => {
            tracing::warn!(formatter = formatter.name(), error = %err, "keeping unformatted source");
            (source.to_string(), Some(err))
        }
    }
}

/// Formatter selected by configuration
#[must_use]
pub fn formatter_from_config(config: &FormatConfig) -> Box<dyn SourceFormatter> {
    if config.enabled {
        Box::new(Rustfmt::new(config.edition.clone()).with_program(config.program.clone()))
    } else {
        Box::new(NoopFormatter)
    }
}
