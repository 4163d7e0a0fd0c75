//! Bridges from the store and the suggestion cache to TUI messages.

use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::Sender;
use tagcalc_core::{StoreEvent, StoreObserver};
use tagcalc_suggest::SuggestionCache;

use crate::messages::TuiMessage;

/// Store observer that forwards every change to the TUI channel.
pub struct TuiStoreObserver {
    tx: Sender<TuiMessage>,
}

impl TuiStoreObserver {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl StoreObserver for TuiStoreObserver {
    fn on_change(&self, event: &StoreEvent) {
        let _ = self.tx.try_send(TuiMessage::StoreChanged(event.clone()));
    }
}

/// Read the cache on a background thread and post the result.
///
/// The cache never fails: a broken source yields an empty list.
pub fn spawn_fetch(cache: Arc<SuggestionCache>, tx: Sender<TuiMessage>) -> JoinHandle<()> {
    std::thread::spawn(move || {
        tracing::info!("suggestion fetch started");
        let suggestions = cache.get();
        tracing::info!(count = suggestions.len(), "suggestion fetch finished");
        let _ = tx.send(TuiMessage::SuggestionsLoaded(suggestions));
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crossbeam_channel::unbounded;
    use tagcalc_core::{FormulaStore, Suggestion};
    use tagcalc_suggest::StaticSuggestionSource;

    #[test]
    fn observer_forwards_store_events() {
        let (tx, rx) = unbounded();
        let mut store = FormulaStore::new();
        store.subscribe(Arc::new(TuiStoreObserver::new(tx)));

        store.set_formula("a_b");
        store.set_tag_value("a_b", "2");

        let events: Vec<TuiMessage> = rx.try_iter().collect();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[0],
            TuiMessage::StoreChanged(StoreEvent::FormulaChanged(f)) if f == "a_b"
        ));
    }

    #[test]
    fn fetch_posts_suggestions() {
        let (tx, rx) = unbounded();
        let source = StaticSuggestionSource::new(vec![Suggestion::new("1", "x_y", "c", 1)]);
        let cache = Arc::new(SuggestionCache::new(
            Box::new(source),
            Duration::from_secs(300),
        ));

        spawn_fetch(cache, tx).join().unwrap();

        match rx.recv_timeout(Duration::from_secs(1)).unwrap() {
            TuiMessage::SuggestionsLoaded(list) => assert_eq!(list.len(), 1),
            other => panic!("unexpected message {other:?}"),
        }
    }
}
