use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log call, compared by raw integer value.
///
/// The six named constants cover the usual range, but any integer is a
/// valid level: `Logger::set_level(LogLevel(25))` gates between INFO and
/// WARNING.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLevel", into = "i32")]
pub struct LogLevel(pub i32);

impl LogLevel {
    pub const NOTSET: LogLevel = LogLevel(0);
    pub const DEBUG: LogLevel = LogLevel(10);
    pub const INFO: LogLevel = LogLevel(20);
    pub const WARNING: LogLevel = LogLevel(30);
    pub const ERROR: LogLevel = LogLevel(40);
    pub const CRITICAL: LogLevel = LogLevel(50);

    pub fn value(self) -> i32 {
        self.0
    }

    /// Name of the level when it is one of the named constants.
    pub fn name(self) -> Option<&'static str> {
        match self {
            LogLevel::NOTSET => Some("NOTSET"),
            LogLevel::DEBUG => Some("DEBUG"),
            LogLevel::INFO => Some("INFO"),
            LogLevel::WARNING => Some("WARNING"),
            LogLevel::ERROR => Some("ERROR"),
            LogLevel::CRITICAL => Some("CRITICAL"),
            _ => None,
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::WARNING
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Level {}", self.0),
        }
    }
}

impl From<i32> for LogLevel {
    fn from(value: i32) -> Self {
        LogLevel(value)
    }
}

impl From<LogLevel> for i32 {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i32>() {
            return Ok(LogLevel(value));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "notset" => Ok(LogLevel::NOTSET),
            "debug" => Ok(LogLevel::DEBUG),
            "info" => Ok(LogLevel::INFO),
            "warning" | "warn" => Ok(LogLevel::WARNING),
            "error" => Ok(LogLevel::ERROR),
            "critical" => Ok(LogLevel::CRITICAL),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLevel {
    Number(i32),
    Name(String),
}

impl TryFrom<RawLevel> for LogLevel {
    type Error = String;

    fn try_from(raw: RawLevel) -> Result<Self, Self::Error> {
        match raw {
            RawLevel::Number(value) => Ok(LogLevel(value)),
            RawLevel::Name(name) => name.parse(),
        }
    }
}

/// A parsed recent-file request from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `-r` / `--recent`
    Latest,
    /// `-l` / `--list`
    ListAll,
    /// `-R <n>`, 1-based as typed by the user
    ByOrdinal(i64),
    /// `-R <stem>` when the value is not an integer
    ByName(String),
}

impl Selector {
    /// Classifies a flag and its optional value. Returns `None` for flags
    /// that are not recent-file selectors.
    pub fn from_flag(flag: &str, value: Option<&str>) -> Option<Selector> {
        match flag {
            "-r" | "--recent" => Some(Selector::Latest),
            "-l" | "--list" => Some(Selector::ListAll),
            "-R" => value.map(Selector::from_value),
            _ => None,
        }
    }

    /// Classifies the value of `-R`: integers select by position, anything
    /// else selects by file stem.
    pub fn from_value(value: &str) -> Selector {
        match value.trim().parse::<i64>() {
            Ok(n) => Selector::ByOrdinal(n),
            Err(_) => Selector::ByName(value.to_string()),
        }
    }
}

/// Outcome of scanning the history for a file stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameLookup {
    Found(usize),
    NotFound,
}

/// What a name selector resolves to when no stem matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NameMissPolicy {
    /// Open the most recent file instead.
    #[default]
    #[serde(rename = "latest")]
    FallbackToLatest,
    /// Select nothing.
    #[serde(rename = "none")]
    NoSelection,
}

/// Path picked from the history, if any.
pub type ResolvedRecent = Option<String>;
