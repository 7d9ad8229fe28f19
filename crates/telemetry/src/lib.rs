//! Diagnostic sink setup for Toolglue front ends
//!
//! Library code only emits `tracing` events. Nothing is configured at load
//! time: the owning application builds a subscriber here and either installs
//! it globally with [`init_with_config`] or scopes it with
//! `tracing::subscriber::with_default`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use toolglue_core::config::LogConfig;
use tracing::Subscriber;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

/// Session ID for correlating logs from one process
static SESSION_ID: Lazy<String> = Lazy::new(|| Uuid::new_v4().to_string());

/// Initialize the global subscriber with defaults
pub fn init() -> anyhow::Result<()> {
    init_with_config(&TelemetryConfig::default())
}

/// Initialize the global subscriber
pub fn init_with_config(config: &TelemetryConfig) -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(build_subscriber(config))
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    tracing::debug!(
        session_id = %session_id(),
        version = env!("CARGO_PKG_VERSION"),
        "Telemetry initialized"
    );

    Ok(())
}

/// Build a subscriber writing to stderr without installing it.
///
/// `RUST_LOG` takes precedence over `config.log_level`.
#[must_use]
pub fn build_subscriber(config: &TelemetryConfig) -> Box<dyn Subscriber + Send + Sync> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let (json, compact) = match config.format {
        LogFormat::Json => (
            Some(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(config.show_target)
                    .with_file(config.show_file)
                    .with_line_number(config.show_line_number),
            ),
            None,
        ),
        LogFormat::Compact => (
            None,
            Some(
                fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_target(config.show_target)
                    .with_file(config.show_file)
                    .with_line_number(config.show_line_number),
            ),
        ),
    };

    Box::new(
        tracing_subscriber::registry()
            .with(filter)
            .with(json)
            .with(compact),
    )
}

/// Get the current session ID
pub fn session_id() -> &'static str {
    &SESSION_ID
}

/// Output format for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single lines
    #[default]
    Compact,
    /// One JSON object per line
    Json,
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
    pub show_target: bool,
    pub show_file: bool,
    pub show_line_number: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            format: LogFormat::Compact,
            show_target: false,
            show_file: false,
            show_line_number: false,
        }
    }
}

impl TelemetryConfig {
    /// Raise the level to `debug` and show call sites
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.log_level = "debug".to_string();
        self.show_file = true;
        self.show_line_number = true;
        self
    }
}

impl From<&LogConfig> for TelemetryConfig {
    fn from(config: &LogConfig) -> Self {
        Self {
            log_level: config.level.clone(),
            format: if config.json {
                LogFormat::Json
            } else {
                LogFormat::Compact
            },
            ..Self::default()
        }
    }
}

/// Timer for measuring operation duration
pub struct Timer {
    name: String,
    start: Instant,
}

impl Timer {
    /// Start a new timer
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
        }
    }

    /// Stop the timer and log the duration
    pub fn stop(self) -> Duration {
        let duration = self.start.elapsed();
        tracing::debug!(
            operation = %self.name,
            duration_ms = duration.as_millis(),
            "Timer completed"
        );
        duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::default();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn test_verbose_config() {
        let config = TelemetryConfig::default().verbose();
        assert_eq!(config.log_level, "debug");
        assert!(config.show_file);
        assert!(config.show_line_number);
    }

    #[test]
    fn test_from_log_config() {
        let log = LogConfig {
            level: "trace".to_string(),
            json: true,
        };
        let config = TelemetryConfig::from(&log);
        assert_eq!(config.log_level, "trace");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn test_scoped_subscriber() {
        let subscriber = build_subscriber(&TelemetryConfig::default().verbose());
        tracing::subscriber::with_default(subscriber, || {
            let timer = Timer::start("scoped");
            tracing::info!("inside scoped subscriber");
            let _ = timer.stop();
        });
    }

    #[test]
    fn test_timer() {
        let timer = Timer::start("test_operation");
        std::thread::sleep(Duration::from_millis(10));
        let duration = timer.stop();
        assert!(duration.as_millis() >= 10);
    }

    #[test]
    fn test_session_id() {
        let id = session_id();
        assert!(!id.is_empty());
        assert!(Uuid::parse_str(id).is_ok());
        assert_eq!(id, session_id());
    }
}
