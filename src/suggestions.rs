//! In-memory suggestion state.
//!
//! Process-lifetime store mapping a message id to its suggestion. Nothing in
//! the current event flow reads or writes it; it is owned by the event
//! handler context so the suggestion feature can be wired in without
//! introducing a global.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// State held for one suggestion message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    /// Author of the suggestion.
    pub author_id: u64,
    /// Suggestion text as submitted.
    pub content: String,
}

/// Shared store of suggestion state, keyed by message id.
///
/// Cheap to clone; clones share the same underlying map.
#[derive(Clone)]
pub struct SuggestionStore {
    entries: Arc<RwLock<HashMap<u64, Suggestion>>>,
}

impl SuggestionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Records suggestion state for a message, replacing any previous entry.
    pub async fn insert(&self, message_id: u64, suggestion: Suggestion) {
        self.entries.write().await.insert(message_id, suggestion);
    }

    /// Returns a copy of the suggestion state for a message, if any.
    pub async fn get(&self, message_id: u64) -> Option<Suggestion> {
        self.entries.read().await.get(&message_id).cloned()
    }

    /// Removes and returns the suggestion state for a message, if any.
    pub async fn remove(&self, message_id: u64) -> Option<Suggestion> {
        self.entries.write().await.remove(&message_id)
    }
}

impl Default for SuggestionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the insert/get/remove round-trip.
    ///
    /// Expected: stored state read back, then gone after removal
    #[tokio::test]
    async fn round_trips_suggestion_state() {
        let store = SuggestionStore::new();
        let suggestion = Suggestion {
            author_id: 42,
            content: "add a music channel".to_string(),
        };

        assert!(store.get(1).await.is_none());

        store.insert(1, suggestion.clone()).await;
        assert_eq!(store.get(1).await, Some(suggestion.clone()));

        assert_eq!(store.remove(1).await, Some(suggestion));
        assert!(store.get(1).await.is_none());
    }

    /// Tests that clones observe the same underlying map.
    ///
    /// Expected: an entry inserted through one clone is visible in the other
    #[tokio::test]
    async fn clones_share_state() {
        let store = SuggestionStore::new();
        let clone = store.clone();

        clone
            .insert(
                7,
                Suggestion {
                    author_id: 1,
                    content: "weekly events".to_string(),
                },
            )
            .await;

        assert!(store.get(7).await.is_some());
    }
}
