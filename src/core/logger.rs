use crate::adapters::sinks::ConsoleSink;
use crate::domain::model::LogLevel;
use crate::domain::ports::LogSink;
use std::fmt::{self, Display};
use std::sync::{Arc, Mutex, MutexGuard};

/// Joins message parts with a single space.
pub fn join_parts(parts: &[&dyn Display]) -> String {
    let mut message = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            message.push(' ');
        }
        message.push_str(&part.to_string());
    }
    message
}

/// User-facing log context: a threshold and the sink that receives every
/// message passing it.
///
/// Callers own the logger and pass it where it is needed. Use
/// [`SharedLogger`] when several owners need the same instance.
pub struct Logger {
    threshold: LogLevel,
    sink: Box<dyn LogSink>,
}

impl Logger {
    /// Logger at WARNING printing to standard output.
    pub fn new() -> Self {
        Self::with_sink(LogLevel::WARNING, ConsoleSink)
    }

    pub fn with_sink<S: LogSink + 'static>(threshold: LogLevel, sink: S) -> Self {
        Self {
            threshold,
            sink: Box::new(sink),
        }
    }

    pub fn level(&self) -> LogLevel {
        self.threshold
    }

    /// Any integer level is accepted; comparisons use its raw value.
    pub fn set_level(&mut self, level: LogLevel) {
        self.threshold = level;
    }

    /// Replaces the sink. The previous sink is dropped.
    pub fn set_device<S: LogSink + 'static>(&mut self, sink: S) {
        self.sink = Box::new(sink);
    }

    pub fn is_enabled_for(&self, level: LogLevel) -> bool {
        level >= self.threshold
    }

    pub fn log(&mut self, level: LogLevel, parts: &[&dyn Display]) {
        if self.is_enabled_for(level) {
            self.emit(parts);
        }
    }

    pub fn debug(&mut self, parts: &[&dyn Display]) {
        self.log(LogLevel::DEBUG, parts);
    }

    pub fn info(&mut self, parts: &[&dyn Display]) {
        self.log(LogLevel::INFO, parts);
    }

    pub fn warning(&mut self, parts: &[&dyn Display]) {
        self.log(LogLevel::WARNING, parts);
    }

    pub fn error(&mut self, parts: &[&dyn Display]) {
        self.log(LogLevel::ERROR, parts);
    }

    pub fn critical(&mut self, parts: &[&dyn Display]) {
        self.log(LogLevel::CRITICAL, parts);
    }

    /// Emits regardless of the threshold. Used for banners, usage text and
    /// prompts.
    pub fn always(&mut self, parts: &[&dyn Display]) {
        self.emit(parts);
    }

    fn emit(&mut self, parts: &[&dyn Display]) {
        let message = join_parts(parts);
        self.sink.accept(&message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

/// Clonable handle to one [`Logger`] guarded by a mutex.
#[derive(Clone, Default)]
pub struct SharedLogger {
    inner: Arc<Mutex<Logger>>,
}

impl SharedLogger {
    pub fn new(logger: Logger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(logger)),
        }
    }

    /// Locks the logger for a sequence of calls.
    pub fn lock(&self) -> MutexGuard<'_, Logger> {
        // 寫入途中 panic 不影響 threshold 與 sink 的一致性
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn level(&self) -> LogLevel {
        self.lock().level()
    }

    pub fn set_level(&self, level: LogLevel) {
        self.lock().set_level(level);
    }

    pub fn set_device<S: LogSink + 'static>(&self, sink: S) {
        self.lock().set_device(sink);
    }

    pub fn log(&self, level: LogLevel, parts: &[&dyn Display]) {
        self.lock().log(level, parts);
    }

    pub fn debug(&self, parts: &[&dyn Display]) {
        self.lock().debug(parts);
    }

    pub fn info(&self, parts: &[&dyn Display]) {
        self.lock().info(parts);
    }

    pub fn warning(&self, parts: &[&dyn Display]) {
        self.lock().warning(parts);
    }

    pub fn error(&self, parts: &[&dyn Display]) {
        self.lock().error(parts);
    }

    pub fn critical(&self, parts: &[&dyn Display]) {
        self.lock().critical(parts);
    }

    pub fn always(&self, parts: &[&dyn Display]) {
        self.lock().always(parts);
    }
}

impl fmt::Debug for SharedLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedLogger").field("level", &self.level()).finish()
    }
}
