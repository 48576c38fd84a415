use crate::domain::ports::LogSink;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Prints each message as one line on standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn accept(&mut self, message: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        // stdout 關閉時直接丟棄
        let _ = writeln!(handle, "{}", message).and_then(|_| handle.flush());
    }
}

/// Writes each message as one line to any writer, e.g. a log file.
#[derive(Debug)]
pub struct WriterSink<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn accept(&mut self, message: &str) {
        if let Err(e) = writeln!(self.writer, "{}", message) {
            tracing::debug!("Dropping log message, writer failed: {}", e);
        }
    }
}

/// Keeps every message in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn len(&self) -> usize {
        self.messages().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All messages joined with newlines.
    pub fn text(&self) -> String {
        self.messages().join("\n")
    }
}

impl LogSink for MemorySink {
    fn accept(&mut self, message: &str) {
        let mut messages = self
            .messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        messages.push(message.to_string());
    }
}

/// Forwards messages to the tracing subscriber at INFO.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn accept(&mut self, message: &str) {
        tracing::info!(target: "cnc_launch::console", "{}", message);
    }
}
