use serde::{Deserialize, Serialize};

use crate::palette::{MAX_THEME, ThemeId};

/// User-facing display preferences consumed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOptions {
    pub theme: ThemeId,
    pub bold_labels: bool,
    pub bold_cursor: bool,
    pub no_highlight_lines: bool,
    pub tabular_display: bool,
}

impl ThemeOptions {
    pub fn new(theme: u32) -> Self {
        Self {
            theme: ThemeId(theme),
            ..Self::default()
        }
    }

    pub fn with_bold_labels(mut self, enabled: bool) -> Self {
        self.bold_labels = enabled;
        self
    }

    pub fn with_bold_cursor(mut self, enabled: bool) -> Self {
        self.bold_cursor = enabled;
        self
    }

    pub fn with_no_highlight_lines(mut self, enabled: bool) -> Self {
        self.no_highlight_lines = enabled;
        self
    }

    pub fn with_tabular_display(mut self, enabled: bool) -> Self {
        self.tabular_display = enabled;
        self
    }

    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode {
            tabular: self.tabular_display,
            no_highlight_lines: self.no_highlight_lines,
        }
    }

    /// True when switching from `other` to `self` changes the attribute table.
    ///
    /// Only the theme and the two bold toggles feed synthesis; display-mode
    /// flags are applied at resolution time.
    pub fn needs_rebuild(&self, other: &ThemeOptions) -> bool {
        self.theme != other.theme
            || self.bold_labels != other.bold_labels
            || self.bold_cursor != other.bold_cursor
    }

    /// Validates the options, returning every problem found.
    pub fn validate(&self) -> Result<(), Vec<OptionsValidationError>> {
        let mut errors = Vec::new();

        if !self.theme.is_builtin() {
            errors.push(OptionsValidationError::ThemeOutOfRange {
                configured: self.theme.get(),
                max: MAX_THEME,
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Resolution-time flags. They never affect the attribute table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DisplayMode {
    /// Footer uses the tabular footer slot instead of plain data.
    pub tabular: bool,
    /// Search matches are shown without line highlighting.
    pub no_highlight_lines: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OptionsValidationError {
    #[error("Invalid theme: {configured} (max: {max})")]
    ThemeOutOfRange { configured: u32, max: u32 },
}

impl OptionsValidationError {
    pub fn user_message(&self) -> String {
        match self {
            OptionsValidationError::ThemeOutOfRange { configured, max } => {
                format!(
                    "Unknown theme!\n\n\
                    Your configured value: {configured}\n\
                    Valid range: 0 - {max}\n\n\
                    The viewer falls back to a minimal palette. \
                    Please update theme in config.toml to a value between 0 and {max}."
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    #[test]
    fn test_default_options_validate() {
        assert_ok!(ThemeOptions::default().validate());
        assert_ok!(ThemeOptions::new(MAX_THEME).validate());
    }

    #[test]
    fn test_theme_out_of_range_reported() {
        let errors = assert_err!(ThemeOptions::new(MAX_THEME + 1).validate());
        assert_eq!(
            errors,
            vec![OptionsValidationError::ThemeOutOfRange {
                configured: MAX_THEME + 1,
                max: MAX_THEME,
            }]
        );
        assert!(errors[0].user_message().contains("0 - 22"));
    }

    #[test]
    fn test_display_flags_do_not_need_rebuild() {
        let base = ThemeOptions::new(3);
        assert!(!base.with_tabular_display(true).needs_rebuild(&base));
        assert!(!base.with_no_highlight_lines(true).needs_rebuild(&base));
        assert!(base.with_bold_cursor(true).needs_rebuild(&base));
        assert!(base.with_bold_labels(true).needs_rebuild(&base));
        assert!(ThemeOptions::new(4).needs_rebuild(&base));
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let options: ThemeOptions =
            assert_ok!(serde_json::from_str(r#"{"theme": 12, "bold_cursor": true}"#));
        assert_eq!(options.theme, ThemeId(12));
        assert!(options.bold_cursor);
        assert!(!options.bold_labels);
    }
}
