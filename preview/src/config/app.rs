use super::{LoggingConfig, validation::ConfigValidationError};
use log::LevelFilter;
use serde::Deserialize;
use themes::{Capability, ThemeId, ThemeOptions};

/// Smallest and largest color counts accepted for `terminal.colors`.
pub const MIN_COLORS: u32 = 1;
pub const MAX_COLORS: u32 = 16_777_216;

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    theme: Option<u32>,
    bold_labels: Option<bool>,
    bold_cursor: Option<bool>,
    no_highlight_lines: Option<bool>,
    tabular_display: Option<bool>,

    #[serde(default)]
    terminal: TerminalConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TerminalConfig {
    colors: Option<u32>,
    default_colors: Option<bool>,
}

impl TerminalConfig {
    pub fn colors(&self) -> u32 {
        self.colors.unwrap_or(256)
    }

    pub fn default_colors(&self) -> bool {
        self.default_colors.unwrap_or(true)
    }
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors: Vec<ConfigValidationError> = Vec::new();

        if let Err(option_errors) = self.theme_options().validate() {
            errors.extend(option_errors.into_iter().map(ConfigValidationError::from));
        }

        let colors = self.terminal.colors();
        if !(MIN_COLORS..=MAX_COLORS).contains(&colors) {
            errors.push(ConfigValidationError::Colors {
                configured: colors,
                min_limit: MIN_COLORS,
                max_limit: MAX_COLORS,
            });
        }

        if self.logging.level().parse::<LevelFilter>().is_err() {
            errors.push(ConfigValidationError::LogLevel {
                configured: self.logging.level().to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn theme(&self) -> ThemeId {
        ThemeId(self.theme.unwrap_or(1))
    }

    pub fn bold_labels(&self) -> bool {
        self.bold_labels.unwrap_or(false)
    }

    pub fn bold_cursor(&self) -> bool {
        self.bold_cursor.unwrap_or(false)
    }

    pub fn no_highlight_lines(&self) -> bool {
        self.no_highlight_lines.unwrap_or(false)
    }

    pub fn tabular_display(&self) -> bool {
        self.tabular_display.unwrap_or(false)
    }

    pub fn terminal(&self) -> &TerminalConfig {
        &self.terminal
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn theme_options(&self) -> ThemeOptions {
        ThemeOptions {
            theme: self.theme(),
            bold_labels: self.bold_labels(),
            bold_cursor: self.bold_cursor(),
            no_highlight_lines: self.no_highlight_lines(),
            tabular_display: self.tabular_display(),
        }
    }

    pub fn capability(&self) -> Capability {
        Capability::from_color_count(self.terminal.colors(), self.terminal.default_colors())
    }

    pub fn set_theme(&mut self, theme: u32) {
        self.theme = Some(theme);
    }

    pub fn set_colors(&mut self, colors: u32) {
        self.terminal.colors = Some(colors);
    }

    pub fn disable_default_colors(&mut self) {
        self.terminal.default_colors = Some(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};
    use themes::ColorDepth;

    #[test]
    fn test_defaults_when_keys_missing() {
        let config = AppConfig::default();
        assert_eq!(config.theme(), ThemeId(1));
        assert_eq!(config.terminal().colors(), 256);
        assert!(config.terminal().default_colors());
        assert_eq!(config.logging().level(), "info");
        assert_ok!(config.validate());
    }

    #[test]
    fn test_validation_collects_every_problem() {
        let mut config = AppConfig::default();
        config.set_theme(40);
        config.set_colors(0);

        let errors = assert_err!(config.validate());
        assert_eq!(errors.len(), 2);
        assert!(errors[1].user_message().contains("Valid range: 1 - 16777216"));
    }

    #[test]
    fn test_capability_from_terminal_section() {
        let mut config = AppConfig::default();
        config.set_colors(8);
        config.disable_default_colors();

        let capability = config.capability();
        assert_eq!(capability.depth, ColorDepth::Basic8);
        assert!(!capability.default_colors);
    }
}
