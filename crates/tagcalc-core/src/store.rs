//! Formula state store with explicit observer subscriptions.
//!
//! The store holds the formula text and the tag-to-value map. It performs no
//! validation; every effective change is broadcast to subscribed observers.
//! Setting a value equal to the current one is a no-op and notifies nobody.

use std::collections::HashMap;
use std::sync::Arc;

/// A change applied to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    FormulaChanged(String),
    TagValueChanged { tag: String, value: String },
    TagDeleted(String),
}

/// Observer notified after every effective store change.
pub trait StoreObserver: Send + Sync {
    fn on_change(&self, event: &StoreEvent);
}

/// Handle returned by [`FormulaStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Formula text plus tag values.
#[derive(Default)]
pub struct FormulaStore {
    formula: String,
    tag_values: HashMap<String, String>,
    observers: Vec<(SubscriptionId, Arc<dyn StoreObserver>)>,
    next_id: u64,
}

impl FormulaStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn formula(&self) -> &str {
        &self.formula
    }

    #[must_use]
    pub fn tag_values(&self) -> &HashMap<String, String> {
        &self.tag_values
    }

    /// Value bound to `tag`, if any (may be the empty string).
    #[must_use]
    pub fn tag_value(&self, tag: &str) -> Option<&str> {
        self.tag_values.get(tag).map(String::as_str)
    }

    /// Value bound to `tag` if it is non-empty.
    #[must_use]
    pub fn resolved_value(&self, tag: &str) -> Option<&str> {
        self.tag_value(tag).filter(|v| !v.is_empty())
    }

    pub fn set_formula(&mut self, formula: impl Into<String>) {
        let formula = formula.into();
        if formula == self.formula {
            return;
        }
        tracing::debug!(formula = %formula, "formula updated");
        self.formula.clone_from(&formula);
        self.notify(&StoreEvent::FormulaChanged(formula));
    }

    pub fn set_tag_value(&mut self, tag: impl Into<String>, value: impl Into<String>) {
        let tag = tag.into();
        let value = value.into();
        if self.tag_values.get(&tag) == Some(&value) {
            return;
        }
        tracing::debug!(tag = %tag, value = %value, "tag value updated");
        self.tag_values.insert(tag.clone(), value.clone());
        self.notify(&StoreEvent::TagValueChanged { tag, value });
    }

    /// Remove a tag binding. Returns the removed value.
    pub fn delete_tag(&mut self, tag: &str) -> Option<String> {
        let removed = self.tag_values.remove(tag)?;
        tracing::debug!(tag = %tag, "tag deleted");
        self.notify(&StoreEvent::TagDeleted(tag.to_string()));
        Some(removed)
    }

    /// Register an observer.
    pub fn subscribe(&mut self, observer: Arc<dyn StoreObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&self, event: &StoreEvent) {
        for (_, observer) in &self.observers {
            observer.on_change(event);
        }
    }
}

impl std::fmt::Debug for FormulaStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormulaStore")
            .field("formula", &self.formula)
            .field("tag_values", &self.tag_values)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<StoreEvent>>,
    }

    impl StoreObserver for Recorder {
        fn on_change(&self, event: &StoreEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn starts_empty() {
        let store = FormulaStore::new();
        assert_eq!(store.formula(), "");
        assert!(store.tag_values().is_empty());
        assert_eq!(store.observer_count(), 0);
    }

    #[test]
    fn set_and_read() {
        let mut store = FormulaStore::new();
        store.set_formula("a*2");
        store.set_tag_value("a", "4");
        assert_eq!(store.formula(), "a*2");
        assert_eq!(store.tag_value("a"), Some("4"));
        assert_eq!(store.resolved_value("a"), Some("4"));
    }

    #[test]
    fn empty_value_is_not_resolved() {
        let mut store = FormulaStore::new();
        store.set_tag_value("a", "");
        assert_eq!(store.tag_value("a"), Some(""));
        assert_eq!(store.resolved_value("a"), None);
    }

    #[test]
    fn observers_see_effective_changes_only() {
        let mut store = FormulaStore::new();
        let recorder = Arc::new(Recorder::default());
        store.subscribe(recorder.clone());

        store.set_formula("x");
        store.set_formula("x");
        store.set_tag_value("x", "1");
        store.set_tag_value("x", "1");
        store.delete_tag("x");
        store.delete_tag("x");

        let events = recorder.events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                StoreEvent::FormulaChanged("x".into()),
                StoreEvent::TagValueChanged {
                    tag: "x".into(),
                    value: "1".into()
                },
                StoreEvent::TagDeleted("x".into()),
            ]
        );
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = FormulaStore::new();
        let recorder = Arc::new(Recorder::default());
        let id = store.subscribe(recorder.clone());
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_formula("y");
        assert!(recorder.events.lock().unwrap().is_empty());
    }
}
