//! Recent-search history.
//!
//! Most-recent-first, capped, deduplicated by exact (case-sensitive) match.
//! Persisted under a fixed key as a JSON string array. Malformed persisted
//! data degrades to an empty history; storage failures are logged and
//! swallowed, since history is a convenience and never a hard dependency.

use crate::store::KeyValueStore;

/// Storage key for the persisted history.
pub const RECENT_SEARCHES_KEY: &str = "recent_searches";

/// Bounded most-recent-first search history.
#[derive(Debug, Clone)]
pub struct RecentSearches {
    terms: Vec<String>,
    max_entries: usize,
}

impl RecentSearches {
    /// Create an empty history with the given cap.
    pub fn new(max_entries: usize) -> Self {
        Self {
            terms: Vec::new(),
            max_entries,
        }
    }

    /// Load history from the store.
    ///
    /// Anything that is not a JSON array yields an empty history;
    /// non-string members are skipped; overlong arrays are truncated.
    pub fn load(store: &dyn KeyValueStore, max_entries: usize) -> Self {
        let mut history = Self::new(max_entries);

        if let Some(raw) = store.get(RECENT_SEARCHES_KEY) {
            match serde_json::from_str::<serde_json::Value>(&raw) {
                Ok(serde_json::Value::Array(values)) => {
                    history.terms = values
                        .into_iter()
                        .filter_map(|value| match value {
                            serde_json::Value::String(term) => Some(term),
                            _ => None,
                        })
                        .collect();
                }
                Ok(_) => {
                    tracing::warn!("recent-search data is not an array, starting empty");
                }
                Err(e) => {
                    tracing::warn!("malformed recent-search data, starting empty: {}", e);
                }
            }
        }

        history.terms.truncate(history.max_entries);
        history
    }

    /// Record a term at the front, deduplicating exact matches.
    ///
    /// Dedup is case-sensitive: "Dark" and "dark" are distinct entries.
    pub fn record(&mut self, term: &str, store: &mut dyn KeyValueStore) {
        if term.trim().is_empty() {
            return;
        }

        self.terms.retain(|t| t != term);
        self.terms.insert(0, term.to_string());
        self.terms.truncate(self.max_entries);
        self.persist(store);
    }

    /// Drop all history, in memory and in the store.
    pub fn clear(&mut self, store: &mut dyn KeyValueStore) {
        self.terms.clear();
        self.persist(store);
    }

    fn persist(&self, store: &mut dyn KeyValueStore) {
        let json = match serde_json::to_string(&self.terms) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("failed to encode recent searches: {}", e);
                return;
            }
        };

        if let Err(e) = store.set(RECENT_SEARCHES_KEY, json) {
            tracing::warn!("failed to persist recent searches: {}", e);
        }
    }

    /// Terms, most recent first.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
