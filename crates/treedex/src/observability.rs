//! Logging and tracing initialization.
//!
//! Console logging goes to stderr so data output on stdout stays clean
//! for piping. When a log directory is configured, a JSONL file layer is
//! added alongside.

use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Where file logs should go, if anywhere.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Directory for JSONL log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from the environment with a config-file fallback.
    ///
    /// `TREEDEX_LOG_DIR` wins over the configured directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_dir = std::env::var_os("TREEDEX_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_dir }
    }
}

/// Build the env filter from CLI verbosity flags and the configured level.
///
/// `RUST_LOG` always wins; otherwise `--quiet` forces errors only and
/// each `-v` steps the level up from the configured default.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Initialize the tracing subscriber.
///
/// Returns a guard that must stay alive for the duration of the process
/// so buffered file logs are flushed on exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    if let Some(ref dir) = config.log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        let appender = tracing_appender::rolling::daily(dir, "treedex.jsonl");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let file_layer = fmt::layer().json().with_writer(writer).with_ansi(false);
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer.boxed())
            .with(file_layer.boxed())
            .try_init()
            .context("failed to initialize logging/tracing")?;
        Ok(Some(guard))
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer.boxed())
            .try_init()
            .context("failed to initialize logging/tracing")?;
        Ok(None)
    }
}
