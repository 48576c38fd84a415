pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;
#[cfg(feature = "cli")]
pub use crate::core::launch::{LaunchPlan, Launcher};

pub use adapters::history::RecentHistory;
pub use adapters::prompt::{CannedPrompt, LinePrompt};
pub use adapters::sinks::{ConsoleSink, MemorySink, TracingSink, WriterSink};
pub use config::toml_config::LauncherConfig;
pub use crate::core::logger::{Logger, SharedLogger};
pub use crate::core::resolver::SelectorResolver;
pub use domain::model::{LogLevel, NameLookup, NameMissPolicy, ResolvedRecent, Selector};
pub use utils::error::{LaunchError, Result};
