//! Time-bounded suggestion cache.
//!
//! One entry per cache. A read inside the freshness window returns the cached
//! list without calling the source; any other read fetches, replaces the entry
//! and returns the new list. A failed fetch is logged and cached as an empty
//! list so callers always get a value.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tagcalc_core::Suggestion;

use crate::source::SuggestionSource;

#[derive(Debug, Clone)]
struct CacheEntry {
    fetched_at: Instant,
    suggestions: Arc<[Suggestion]>,
}

/// Caches the output of a [`SuggestionSource`] for a fixed window.
pub struct SuggestionCache {
    source: Box<dyn SuggestionSource>,
    ttl: Duration,
    entry: Mutex<Option<CacheEntry>>,
}

impl SuggestionCache {
    #[must_use]
    pub fn new(source: Box<dyn SuggestionSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            entry: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Suggestions, fetched or served from cache.
    pub fn get(&self) -> Arc<[Suggestion]> {
        self.get_at(Instant::now())
    }

    /// As [`get`](Self::get) with an explicit clock reading.
    ///
    /// The lock is held across the fetch so concurrent callers share one
    /// request.
    pub fn get_at(&self, now: Instant) -> Arc<[Suggestion]> {
        let mut entry = self.entry.lock();
        if let Some(cached) = entry.as_ref() {
            if Self::fresh(cached, self.ttl, now) {
                tracing::debug!(count = cached.suggestions.len(), "serving cached suggestions");
                return Arc::clone(&cached.suggestions);
            }
        }

        let suggestions: Arc<[Suggestion]> = match self.source.fetch() {
            Ok(list) => {
                tracing::info!(
                    source = %self.source.describe(),
                    count = list.len(),
                    "suggestions fetched"
                );
                list.into()
            }
            Err(err) => {
                tracing::error!(source = %self.source.describe(), error = %err, "suggestion fetch failed");
                Arc::from(Vec::new())
            }
        };

        *entry = Some(CacheEntry {
            fetched_at: now,
            suggestions: Arc::clone(&suggestions),
        });
        suggestions
    }

    /// Cached suggestions without fetching, fresh or not.
    #[must_use]
    pub fn peek(&self) -> Option<Arc<[Suggestion]>> {
        self.entry.lock().as_ref().map(|e| Arc::clone(&e.suggestions))
    }

    #[must_use]
    pub fn is_fresh_at(&self, now: Instant) -> bool {
        self.entry
            .lock()
            .as_ref()
            .is_some_and(|e| Self::fresh(e, self.ttl, now))
    }

    /// Drop the cached entry; the next read fetches.
    pub fn invalidate(&self) {
        *self.entry.lock() = None;
    }

    fn fresh(entry: &CacheEntry, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(entry.fetched_at) < ttl
    }
}

impl std::fmt::Debug for SuggestionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionCache")
            .field("source", &self.source.describe())
            .field("ttl", &self.ttl)
            .field("cached", &self.entry.lock().is_some())
            .finish()
    }
}
