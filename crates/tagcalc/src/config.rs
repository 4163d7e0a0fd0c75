//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tagcalc_core::constants::DEFAULT_SUGGESTION_ENDPOINT;

use crate::errors::ConfigError;

/// tagcalc: evaluate formulas whose variables are bound from suggestions.
#[derive(Parser, Debug)]
#[command(name = "tagcalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Formula to evaluate, e.g. "(basic_courses * 500)".
    #[arg(short, long, env = "TAGCALC_FORMULA")]
    pub formula: Option<String>,

    /// Bind a tag value (repeatable).
    #[arg(short = 't', long = "tag", value_name = "NAME=VALUE")]
    pub tags: Vec<String>,

    /// Bind unbound tags from the first suggestion with the same name.
    #[arg(long)]
    pub auto_bind: bool,

    /// Suggestion endpoint URL.
    #[arg(long, env = "TAGCALC_ENDPOINT", default_value = DEFAULT_SUGGESTION_ENDPOINT)]
    pub endpoint: String,

    /// Read suggestions from a JSON file instead of the endpoint.
    #[arg(long, value_name = "PATH")]
    pub suggestions_file: Option<PathBuf>,

    /// How long fetched suggestions stay fresh (e.g. "5m", "30s").
    #[arg(long, default_value = "5m")]
    pub cache_ttl: String,

    /// HTTP request timeout.
    #[arg(long, default_value = "10s")]
    pub timeout: String,

    /// Print the suggestion table and exit.
    #[arg(long)]
    pub list_suggestions: bool,

    /// Launch the interactive widget.
    #[arg(long)]
    pub tui: bool,

    /// Quiet mode (only output the result).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Default log level when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Write logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// True when the interactive widget should run: explicitly requested, or
    /// nothing else was asked for.
    #[must_use]
    pub fn is_tui_mode(&self) -> bool {
        self.completion.is_none()
            && (self.tui || (self.formula.is_none() && !self.list_suggestions))
    }

    /// `--tag` values as `(name, value)` pairs, in order.
    pub fn parsed_tags(&self) -> Result<Vec<(String, String)>, ConfigError> {
        self.tags.iter().map(|t| parse_tag(t)).collect()
    }

    pub fn cache_ttl_duration(&self) -> Result<Duration, ConfigError> {
        parse_duration(&self.cache_ttl).ok_or_else(|| ConfigError::InvalidDuration {
            flag: "cache-ttl",
            value: self.cache_ttl.clone(),
        })
    }

    pub fn timeout_duration(&self) -> Result<Duration, ConfigError> {
        parse_duration(&self.timeout).ok_or_else(|| ConfigError::InvalidDuration {
            flag: "timeout",
            value: self.timeout.clone(),
        })
    }
}

/// Parse `NAME=VALUE`. The name is trimmed and must be non-empty; the value
/// is kept verbatim and may be empty.
pub fn parse_tag(s: &str) -> Result<(String, String), ConfigError> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidTag(s.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(ConfigError::InvalidTag(s.to_string()));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Parse a duration string like "5m", "1h", "30s", "500ms".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        Some(Duration::from_millis(ms.parse().ok()?))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(3600)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        Some(Duration::from_secs(secs.parse().ok()?))
    } else {
        Some(Duration::from_secs(s.parse().ok()?))
    }
}
