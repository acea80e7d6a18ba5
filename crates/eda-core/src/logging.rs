//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The library crates only emit events; applications and notebooks call
//! [`init_logging`] once to decide where they go.
//!
//! # Log Levels
//!
//! - `warn`: suspicious input, such as a numeric search term given as text
//! - `info`: summary counts, such as how many search terms matched
//! - `debug`: per-term lookups, file loads, aggregation shapes
//!
//! # Usage
//!
//! ```ignore
//! use eda_core::logging::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::from_verbosity(1))?;
//! ```

use std::io;

use tracing::{Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level for this workspace's crates.
    pub level: Level,
    /// Whether `RUST_LOG` may override `level`.
    pub use_env_filter: bool,
    pub with_timestamps: bool,
    /// Whether to print the module path of each event.
    pub with_target: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-field human-readable lines.
    #[default]
    Pretty,
    /// Single-line output with abbreviated fields.
    Compact,
    /// One JSON object per event.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// - 0: info level
    /// - 1: debug level
    /// - 2+: trace level
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_env_filter(mut self, enable: bool) -> Self {
        self.use_env_filter = enable;
        self
    }

    #[must_use]
    pub fn with_timestamps(mut self, enable: bool) -> Self {
        self.with_timestamps = enable;
        self
    }

    #[must_use]
    pub fn with_target(mut self, enable: bool) -> Self {
        self.with_target = enable;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

/// Installs a global subscriber writing to stderr.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), TryInitError> {
    init_logging_with_writer(config, io::stderr)
}

/// Installs a global subscriber writing to `writer`.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W) -> Result<(), TryInitError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    build_subscriber(config, writer).try_init()
}

/// Builds the subscriber described by `config` without installing it.
///
/// Useful with [`tracing::subscriber::with_default`] to scope logging to a
/// block.
pub fn build_subscriber<W>(config: &LogConfig, writer: W) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(build_env_filter(config));

    match config.format {
        LogFormat::Json => Box::new(
            registry.with(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_target(config.with_target),
            ),
        ),
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);
            if config.with_timestamps {
                Box::new(registry.with(layer))
            } else {
                Box::new(registry.with(layer.without_time()))
            }
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);
            if config.with_timestamps {
                Box::new(registry.with(layer))
            } else {
                Box::new(registry.with(layer.without_time()))
            }
        }
    }
}

/// Filter directives for this workspace's crates; everything else stays at
/// `warn`.
fn default_directives(level: Level) -> String {
    let level = level.as_str().to_lowercase();
    format!("warn,eda_core={level},eda_ingest={level},eda_model={level}")
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directives(config.level));
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}
