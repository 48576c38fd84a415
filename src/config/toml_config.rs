use crate::adapters::history::{RecentHistory, MAX_RECENT};
use crate::domain::model::{LogLevel, NameMissPolicy};
use crate::utils::error::{LaunchError, Result};
use crate::utils::logger::DiagnosticFormat;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration file read when `--ini` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "cnc-launch.toml";

/// Largest history the launcher accepts.
pub const MAX_CAPACITY: usize = 100;

const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    pub logging: LoggingConfig,
    pub recent: RecentConfig,
    pub serial: SerialConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::WARNING,
            format: "compact".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentConfig {
    pub capacity: usize,
    pub on_name_miss: NameMissPolicy,
    pub files: Vec<String>, // 最新的在前
}

impl Default for RecentConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_RECENT,
            on_name_miss: NameMissPolicy::default(),
            files: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialConfig {
    pub port: Option<String>,
    pub baud: Option<u32>,
}

impl LauncherConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LaunchError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Loads `ini` when given. Otherwise reads [`DEFAULT_CONFIG_FILE`] if it
    /// exists and falls back to built-in defaults.
    pub fn load(ini: Option<&str>) -> Result<Self> {
        match ini {
            Some(path) => {
                tracing::debug!("📁 Loading configuration from: {}", path);
                Self::from_file(path)
            }
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                tracing::debug!("📁 Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::default()),
        }
    }

    /// 替換環境變數 (例如 ${HOME})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LaunchError::ConfigError {
            message: format!("environment pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_range("recent.capacity", self.recent.capacity, 1, MAX_CAPACITY)?;

        for path in &self.recent.files {
            validation::validate_path("recent.files", path)?;
        }

        validation::validate_one_of("logging.format", &self.logging.format, &LOG_FORMATS)?;

        if let Some(port) = &self.serial.port {
            validation::validate_non_empty_string("serial.port", port)?;
        }
        if let Some(baud) = self.serial.baud {
            validation::validate_positive_number("serial.baud", baud as usize, 1)?;
        }

        Ok(())
    }

    pub fn log_level(&self) -> LogLevel {
        self.logging.level
    }

    pub fn diagnostic_format(&self) -> DiagnosticFormat {
        if self.logging.format == "json" {
            DiagnosticFormat::Json
        } else {
            DiagnosticFormat::Compact
        }
    }

    pub fn name_miss_policy(&self) -> NameMissPolicy {
        self.recent.on_name_miss
    }

    /// Recent-file history described by the `[recent]` table.
    pub fn history(&self) -> RecentHistory {
        RecentHistory::new(self.recent.capacity, self.recent.files.clone())
    }
}

impl Validate for LauncherConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
