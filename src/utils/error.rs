use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Usage error: {message}")]
    UsageError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Usage,
}

impl LaunchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LaunchError::IoError(_) => ErrorCategory::Io,
            LaunchError::TomlParseError(_)
            | LaunchError::ConfigError { .. }
            | LaunchError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            LaunchError::UsageError { .. } => ErrorCategory::Usage,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            LaunchError::IoError(e) => format!("Could not read a required file: {}", e),
            LaunchError::TomlParseError(e) => {
                format!("The configuration file is not valid TOML: {}", e.message())
            }
            LaunchError::ConfigError { message } => format!("Configuration problem: {}", message),
            LaunchError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            LaunchError::UsageError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the file exists and is readable",
            ErrorCategory::Configuration => {
                "Fix the configuration file or pass another one with --ini"
            }
            ErrorCategory::Usage => "Run with --help to see the supported options",
        }
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;
