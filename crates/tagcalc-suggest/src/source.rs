//! The `SuggestionSource` seam and the non-network sources.

use std::path::{Path, PathBuf};

use tagcalc_core::Suggestion;

/// Error type for suggestion fetches.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("HTTP {0}")]
    Status(u16),

    /// The payload was not a JSON array of suggestions.
    #[error("parse error: {0}")]
    Parse(String),

    /// Reading a local suggestion file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// A provider of suggestion records.
pub trait SuggestionSource: Send + Sync {
    /// Fetch the full suggestion list.
    fn fetch(&self) -> Result<Vec<Suggestion>, FetchError>;

    /// Human-readable description for logs.
    fn describe(&self) -> String;
}

/// Fixed, in-memory suggestions.
#[derive(Debug, Clone, Default)]
pub struct StaticSuggestionSource {
    suggestions: Vec<Suggestion>,
}

impl StaticSuggestionSource {
    #[must_use]
    pub fn new(suggestions: Vec<Suggestion>) -> Self {
        Self { suggestions }
    }
}

impl SuggestionSource for StaticSuggestionSource {
    fn fetch(&self) -> Result<Vec<Suggestion>, FetchError> {
        Ok(self.suggestions.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} suggestions)", self.suggestions.len())
    }
}

/// Suggestions read from a JSON file holding the same array the HTTP
/// endpoint returns.
#[derive(Debug, Clone)]
pub struct FileSuggestionSource {
    path: PathBuf,
}

impl FileSuggestionSource {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SuggestionSource for FileSuggestionSource {
    fn fetch(&self) -> Result<Vec<Suggestion>, FetchError> {
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_source_returns_its_list() {
        let source = StaticSuggestionSource::new(vec![Suggestion::new("1", "a", "c", 2)]);
        let fetched = source.fetch().unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].name, "a");
        assert!(source.describe().contains("1 suggestions"));
    }

    #[test]
    fn file_source_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("suggestions.json");
        std::fs::write(
            &path,
            r#"[{"id":"1","name":"basic_courses","category":"training","value":3}]"#,
        )
        .unwrap();

        let source = FileSuggestionSource::new(&path);
        let fetched = source.fetch().unwrap();
        assert_eq!(fetched[0].value_string(), "3");
    }

    #[test]
    fn file_source_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSuggestionSource::new(dir.path().join("missing.json"));
        assert!(matches!(source.fetch(), Err(FetchError::Io(_))));
    }

    #[test]
    fn file_source_bad_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        let source = FileSuggestionSource::new(&path);
        assert!(matches!(source.fetch(), Err(FetchError::Parse(_))));
    }
}
