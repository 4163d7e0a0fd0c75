//! HTTP suggestion source.
//!
//! Blocking reqwest client (no Tokio runtime required); the caller runs it on
//! a background thread.

use std::time::Duration;

use tagcalc_core::Suggestion;

use crate::source::{FetchError, SuggestionSource};

/// GETs a JSON array of suggestions from a fixed endpoint.
#[derive(Clone)]
pub struct HttpSuggestionSource {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpSuggestionSource {
    /// Create a source with a request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tagcalc/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SuggestionSource for HttpSuggestionSource {
    fn fetch(&self) -> Result<Vec<Suggestion>, FetchError> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let suggestions: Vec<Suggestion> = serde_json::from_str(&body)?;
        tracing::debug!(
            count = suggestions.len(),
            first = ?suggestions.first().map(|s| &s.name),
            last = ?suggestions.last().map(|s| &s.name),
            "suggestions received"
        );
        Ok(suggestions)
    }

    fn describe(&self) -> String {
        format!("GET {}", self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn source_for(server: &MockServer) -> HttpSuggestionSource {
        HttpSuggestionSource::new(server.url("/autocomplete"), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn fetches_suggestion_array() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/autocomplete");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(serde_json::json!([
                    {"id": "1", "name": "basic_courses", "category": "training", "value": 3},
                    {"id": "2", "name": "basic_courses", "category": "training", "value": "5"}
                ]));
        });

        let suggestions = source_for(&server).fetch().unwrap();
        mock.assert();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].value_string(), "3");
        assert_eq!(suggestions[1].value_string(), "5");
    }

    #[test]
    fn non_success_status_is_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/autocomplete");
            then.status(503);
        });

        let err = source_for(&server).fetch().unwrap_err();
        assert!(matches!(err, FetchError::Status(503)));
    }

    #[test]
    fn malformed_body_is_parse_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/autocomplete");
            then.status(200).body("<html>oops</html>");
        });

        let err = source_for(&server).fetch().unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn unreachable_host_is_network_error() {
        let source =
            HttpSuggestionSource::new("http://127.0.0.1:9/autocomplete", Duration::from_millis(500))
                .unwrap();
        assert!(matches!(source.fetch(), Err(FetchError::Network(_))));
    }

    #[test]
    fn describe_names_endpoint() {
        let source =
            HttpSuggestionSource::new("http://example.test/x", Duration::from_secs(1)).unwrap();
        assert_eq!(source.describe(), "GET http://example.test/x");
        assert_eq!(source.endpoint(), "http://example.test/x");
    }
}
