use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub mod app;
pub mod defaults;
pub mod validation;

pub use app::{AppConfig, TerminalConfig};
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Environment variable prefix, e.g. `GRIDTINT_THEME` or
/// `GRIDTINT_TERMINAL__COLORS`.
pub const ENV_PREFIX: &str = "GRIDTINT";

/// Location of the per-user configuration file.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gridtint").join("config.toml"))
}

/// Loads the configuration.
///
/// Sources are layered in order: the embedded defaults, then the explicit
/// file when one is given (it must exist) or the optional per-user file,
/// then environment variables.
pub fn load_config(explicit: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let mut builder =
        Config::builder().add_source(File::from_str(defaults::DEFAULT_CONFIG, FileFormat::Toml));

    match explicit {
        Some(path) => {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        None => {
            if let Some(path) = user_config_path() {
                builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
            }
        }
    }

    let env_source = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true);

    let config = match builder.add_source(env_source).build() {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => ConfigLoadResult::Success(Box::new(app_config)),
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Some("info".to_string()),
            file: None,
        }
    }
}
