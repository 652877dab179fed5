//! Subscriber installation and logging configuration.
//!
//! Timestamps are left to the sink: the browser console stamps entries itself.

use anyhow::{Result, anyhow};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default level when neither configuration nor `RUST_LOG` provide one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig<'a> {
    /// Level or filter directive (e.g. `info`, `subguide_core=debug`).
    pub level: &'a str,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig<'_> {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL,
            format: LogFormat::infer(),
        }
    }
}

impl<'a> LoggingConfig<'a> {
    /// Configuration for a level with the inferred format.
    #[must_use]
    pub fn with_level(level: &'a str) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }
}

/// Available output formats for the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Human-readable lines.
    Pretty,
}

impl LogFormat {
    /// Pretty in debug builds, JSON in release builds.
    #[must_use]
    pub const fn infer() -> Self {
        if cfg!(debug_assertions) {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

/// Configure and install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig<'_>) -> Result<()> {
    #[cfg(target_arch = "wasm32")]
    let writer = crate::console::ConsoleMakeWriter;
    #[cfg(not(target_arch = "wasm32"))]
    let writer = std::io::stderr;

    install_fmt_subscriber(config, writer)
}

fn install_fmt_subscriber<W>(config: &LoggingConfig<'_>, writer: W) -> Result<()>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(build_env_filter(config.level));
    match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .without_time()
                    .with_ansi(false)
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .without_time()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(writer),
            )
            .try_init(),
    }
    .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}

fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}
