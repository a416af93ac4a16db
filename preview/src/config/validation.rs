use super::app::AppConfig;
use themes::OptionsValidationError;

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error(transparent)]
    Options(#[from] OptionsValidationError),
    #[error("Invalid terminal.colors: {configured} (min: {min_limit}, max: {max_limit})")]
    Colors {
        configured: u32,
        min_limit: u32,
        max_limit: u32,
    },
    #[error("Invalid logging.level: {configured}")]
    LogLevel { configured: String },
}

impl ConfigValidationError {
    /// Whether the problem stops the report. An unknown theme only degrades
    /// to the fallback palette.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ConfigValidationError::Options(_))
    }

    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::Options(inner) => inner.user_message(),
            ConfigValidationError::Colors {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Terminal color count out of range!\n\n\
                    Your configured value: {configured}\n\
                    Valid range: {min_limit} - {max_limit}\n\n\
                    Please update colors in the [terminal] section of config.toml."
                )
            }
            ConfigValidationError::LogLevel { configured } => {
                format!(
                    "Unknown log level!\n\n\
                    Your configured value: {configured}\n\
                    Valid values: off, error, warn, info, debug, trace\n\n\
                    Please update level in the [logging] section of config.toml."
                )
            }
        }
    }
}

/// Configuration loading result
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}
