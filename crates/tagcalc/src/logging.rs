//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins over `--log-level`. In TUI mode logs go to `--log-file`
//! or nowhere, so the alternate screen is never written to.

use std::fs::File;
use std::str::FromStr;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::errors::ConfigError;

/// Where log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    File,
    Discard,
}

/// Pick the sink for a configuration.
#[must_use]
pub fn sink_for(config: &AppConfig) -> LogSink {
    match (&config.log_file, config.is_tui_mode()) {
        (Some(_), _) => LogSink::File,
        (None, true) => LogSink::Discard,
        (None, false) => LogSink::Stderr,
    }
}

/// Parse `--log-level`.
pub fn parse_level(level: &str) -> Result<LevelFilter, ConfigError> {
    LevelFilter::from_str(level).map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))
}

/// Install the global subscriber.
pub fn init(config: &AppConfig) -> anyhow::Result<()> {
    let level = parse_level(&config.log_level)?;
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match (sink_for(config), &config.log_file) {
        (LogSink::File, Some(path)) => {
            let file = File::create(path).map_err(|source| ConfigError::LogFile {
                path: path.display().to_string(),
                source,
            })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        (LogSink::Discard, _) => builder.with_writer(std::io::sink).try_init(),
        _ => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}
