//! Local history of picked suggestions
//!
//! History lookups are synchronous and never fail; they are what the user
//! sees immediately while the remote lookup is debounced.

use crate::results::SearchResult;
use std::collections::VecDeque;
use std::sync::RwLock;

/// Source of previously picked results, most recent first
pub trait HistorySource: Send + Sync {
    /// Every entry, most recent first
    fn all(&self) -> Vec<SearchResult>;

    /// Entries matching `query`, most recent first
    fn search(&self, query: &str) -> Vec<SearchResult>;

    /// Remember a picked result as the most recent entry
    fn record(&self, result: SearchResult);
}

/// Bounded in-memory history
pub struct MemoryHistory {
    entries: RwLock<VecDeque<SearchResult>>,
    capacity: usize,
}

impl MemoryHistory {
    /// Create an empty history keeping at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Create a history from entries ordered most recent first
    pub fn with_entries(capacity: usize, entries: impl IntoIterator<Item = SearchResult>) -> Self {
        let history = Self::new(capacity);
        let mut entries: Vec<_> = entries.into_iter().collect();
        entries.reverse();
        for entry in entries {
            history.record(entry);
        }
        history
    }

    /// Forget every entry
    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(100)
    }
}

impl HistorySource for MemoryHistory {
    fn all(&self) -> Vec<SearchResult> {
        self.entries.read().unwrap().iter().cloned().collect()
    }

    fn search(&self, query: &str) -> Vec<SearchResult> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.all();
        }

        self.entries
            .read()
            .unwrap()
            .iter()
            .filter(|entry| entry.matches_lowercase(&needle))
            .cloned()
            .collect()
    }

    /// Put `result` at the front, dropping an older entry with the same id
    fn record(&self, result: SearchResult) {
        if self.capacity == 0 {
            return;
        }

        let mut entries = self.entries.write().unwrap();
        entries.retain(|entry| entry.id != result.id);
        entries.push_front(result);
        entries.truncate(self.capacity);
    }
}
