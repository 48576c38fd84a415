#[cfg(feature = "cli")]
pub mod launch;
pub mod logger;
pub mod resolver;

pub use crate::domain::model::{LogLevel, NameLookup, NameMissPolicy, ResolvedRecent, Selector};
pub use crate::domain::ports::{LogSink, Prompt, RecentStore};
pub use crate::utils::error::Result;
