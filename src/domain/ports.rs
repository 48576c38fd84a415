use crate::utils::error::Result;

/// Destination for formatted log messages.
pub trait LogSink: Send {
    fn accept(&mut self, message: &str);
}

impl<F> LogSink for F
where
    F: FnMut(&str) + Send,
{
    fn accept(&mut self, message: &str) {
        self(message)
    }
}

/// Bounded history of recently opened files, most recent first.
pub trait RecentStore {
    /// Number of ordinals the history can hold.
    fn capacity(&self) -> usize;

    /// Path stored at `ordinal`, or `None` past the populated range.
    fn get(&self, ordinal: usize) -> Result<Option<String>>;
}

/// Interactive source of a 1-based selection.
pub trait Prompt {
    /// Blocks until an answer is available. `None` on read or parse failure.
    fn read_index(&mut self) -> Option<i64>;
}
