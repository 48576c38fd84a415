use crate::domain::ports::RecentStore;
use crate::utils::error::Result;

/// Default number of remembered files.
pub const MAX_RECENT: usize = 10;

/// Read-only recent-file history held in memory, most recent first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentHistory {
    capacity: usize,
    entries: Vec<String>,
}

impl RecentHistory {
    /// Entries beyond `capacity` are dropped.
    pub fn new(capacity: usize, entries: Vec<String>) -> Self {
        let mut entries = entries;
        if entries.len() > capacity {
            tracing::warn!(
                "Recent history holds {} entries, keeping the first {}",
                entries.len(),
                capacity
            );
            entries.truncate(capacity);
        }
        Self { capacity, entries }
    }

    pub fn empty(capacity: usize) -> Self {
        Self::new(capacity, Vec::new())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for RecentHistory {
    fn default() -> Self {
        Self::empty(MAX_RECENT)
    }
}

impl RecentStore for RecentHistory {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn get(&self, ordinal: usize) -> Result<Option<String>> {
        Ok(self.entries.get(ordinal).cloned())
    }
}
