//! # tagcalc-suggest
//!
//! Suggestion sources and the freshness cache that sits in front of them.
//! A failed fetch never propagates past the cache: it resolves to an empty
//! suggestion list and an error-level log line.

pub mod cache;
pub mod http;
pub mod source;

pub use cache::SuggestionCache;
pub use http::HttpSuggestionSource;
pub use source::{FetchError, FileSuggestionSource, StaticSuggestionSource, SuggestionSource};
