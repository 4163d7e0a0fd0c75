//! Configuration errors and exit codes.

use tagcalc_core::exit_codes;
use tagcalc_core::EvalError;

/// Invalid command-line or environment configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid --tag {0:?}: expected NAME=VALUE")]
    InvalidTag(String),

    #[error("invalid duration {value:?} for --{flag}")]
    InvalidDuration { flag: &'static str, value: String },

    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),

    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Map an application error to the process exit code.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.is::<ConfigError>() {
        exit_codes::ERROR_CONFIG
    } else if err.is::<EvalError>() {
        exit_codes::ERROR_INVALID_EXPRESSION
    } else {
        exit_codes::ERROR_GENERIC
    }
}
