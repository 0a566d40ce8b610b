//! # Logger
//!
//! Logging setup shared by the tooling binaries.
//! Console output is written to standard output in a compact format; an optional
//! rolling log file can be added with daily rotation and non-blocking I/O.
//! `RUST_LOG` always overrides the configured default level.
//!
//! ## Example
//!
//! ```rust
//! # use vio_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder("xtask").level(LevelFilter::DEBUG).init().unwrap();
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

/// The `[logging]` section of the tooling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level (`trace`, `debug`, `info`, `warn`, `error`, `off`).
    pub level: String,
    /// Write to standard output.
    pub console: bool,
    /// Directory for rolling log files; no file output when unset.
    pub path: Option<PathBuf>,
    /// Emit file logs as JSON lines.
    pub json: bool,
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            console: true,
            path: None,
            json: false,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    level: LevelFilter,
    console: bool,
    path: Option<PathBuf>,
    json: bool,
    max_files: usize,
}

impl LoggerBuilder {
    /// Builds a logger from the `[logging]` configuration section.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] if the level cannot be parsed.
    pub fn from_config(
        name: impl Into<String>,
        config: &LoggingConfig,
    ) -> Result<Self, LoggerError> {
        let level = LevelFilter::from_str(&config.level).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Invalid log level '{}': {e}", config.level).into(),
            }
        })?;

        Ok(Self {
            name: name.into(),
            level,
            console: config.console,
            path: config.path.clone(),
            json: config.json,
            max_files: config.max_files,
        })
    }

    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Sets the directory for rolling log files.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    /// Consumes the builder and installs the global tracing subscriber.
    ///
    /// The returned [`Logger`] owns the file writer guard and must be kept alive
    /// until the process exits.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber is already set and
    /// [`LoggerError::InvalidConfiguration`] for invalid builder settings.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;

        let env_filter =
            EnvFilter::builder().with_default_directive(self.level.into()).from_env_lossy();

        let mut layers = Vec::new();

        if self.console {
            layers.push(layer().compact().with_target(false).with_ansi(true).boxed());
        }

        let guard = if let Some(path) = self.path {
            fs::create_dir_all(&path).map_err(|source| LoggerError::Directory {
                path: path.display().to_string(),
                source,
            })?;

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(&self.name)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(self.max_files)
                .build(path)?;

            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = layer().with_writer(writer).with_ansi(false);
            layers.push(if self.json { file_layer.json().boxed() } else { file_layer.boxed() });
            Some(guard)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
            });
        }
        if self.path.is_some() && self.max_files == 0 {
            return Err(LoggerError::InvalidConfiguration {
                message: "max_files must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

/// A handle to the initialized logging system.
#[must_use = "Dropping this handle stops the background file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a console-only [`LoggerBuilder`] at `INFO` level.
    ///
    /// `name` prefixes rolling log files (e.g. `xtask.2026-10-16.log`).
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            level: LevelFilter::INFO,
            console: true,
            path: None,
            json: false,
            max_files: DEFAULT_MAX_FILES,
        }
    }

    /// Returns the file writer guard, if file logging is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}
