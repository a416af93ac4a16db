use std::collections::BTreeMap;

use thiserror::Error;

use crate::color::{ColorPair, CustomColor};

/// Errors reported by a display backend while preparing colors.
///
/// None of these abort a rebuild. The attribute table logs them and carries
/// on with whatever the terminal accepted, so a theme always resolves even on
/// terminals that refuse part of its palette.
///
/// # Error Categories
///
/// - [`DefaultColorsUnsupported`] - the terminal cannot pass its own default
///   colors through
/// - [`CannotChangeColor`] - palette entries are read-only on this terminal
/// - [`ColorOutOfRange`] - a custom color targets an index the terminal does
///   not have
///
/// # Examples
///
/// ```no_run
/// use themes::backend::{BackendError, ColorBackend, MemoryBackend};
/// use themes::color::CustomColor;
///
/// let mut backend = MemoryBackend::with_palette_size(16);
/// match backend.init_color(CustomColor::new(200, 0, 0, 0)) {
///     Err(BackendError::ColorOutOfRange { index, palette_size }) => {
///         eprintln!("color {index} is outside a {palette_size} color palette");
///     }
///     Err(other) => eprintln!("{other}"),
///     Ok(()) => {}
/// }
/// ```
///
/// [`DefaultColorsUnsupported`]: BackendError::DefaultColorsUnsupported
/// [`CannotChangeColor`]: BackendError::CannotChangeColor
/// [`ColorOutOfRange`]: BackendError::ColorOutOfRange
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    #[error("Terminal does not support default colors")]
    DefaultColorsUnsupported,

    #[error("Terminal cannot redefine color {index}")]
    CannotChangeColor { index: u8 },

    #[error("Color {index} is outside the {palette_size} color palette")]
    ColorOutOfRange { index: u8, palette_size: u16 },
}

/// Seam between the engine and whatever owns the terminal's color state.
///
/// Calls arrive in rebuild order: default colors first, then custom palette
/// entries, then one `init_pair` per defined slot.
pub trait ColorBackend {
    /// Enables the terminal's own default foreground/background (`-1`).
    fn use_default_colors(&mut self) -> Result<(), BackendError>;

    /// Redefines a palette entry. Components are on the `0..=1000` scale.
    fn init_color(&mut self, color: CustomColor) -> Result<(), BackendError>;

    /// Registers a color pair under `number`.
    fn init_pair(&mut self, number: u8, pair: ColorPair);
}

/// Backend that records every call, for headless use and tests.
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    palette_size: u16,
    can_change_color: bool,
    default_colors_supported: bool,
    default_colors_enabled: bool,
    pairs: BTreeMap<u8, ColorPair>,
    colors: BTreeMap<u8, CustomColor>,
    pair_calls: usize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::with_palette_size(256)
    }

    pub fn with_palette_size(palette_size: u16) -> Self {
        Self {
            palette_size,
            can_change_color: true,
            default_colors_supported: true,
            default_colors_enabled: false,
            pairs: BTreeMap::new(),
            colors: BTreeMap::new(),
            pair_calls: 0,
        }
    }

    pub fn with_color_changes(mut self, enabled: bool) -> Self {
        self.can_change_color = enabled;
        self
    }

    pub fn with_default_colors(mut self, supported: bool) -> Self {
        self.default_colors_supported = supported;
        self
    }

    pub fn pair(&self, number: u8) -> Option<ColorPair> {
        self.pairs.get(&number).copied()
    }

    pub fn pairs(&self) -> &BTreeMap<u8, ColorPair> {
        &self.pairs
    }

    pub fn color(&self, index: u8) -> Option<CustomColor> {
        self.colors.get(&index).copied()
    }

    pub fn colors(&self) -> &BTreeMap<u8, CustomColor> {
        &self.colors
    }

    pub fn default_colors_enabled(&self) -> bool {
        self.default_colors_enabled
    }

    /// Number of `init_pair` calls received, including re-registrations.
    pub fn pair_calls(&self) -> usize {
        self.pair_calls
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorBackend for MemoryBackend {
    fn use_default_colors(&mut self) -> Result<(), BackendError> {
        if !self.default_colors_supported {
            return Err(BackendError::DefaultColorsUnsupported);
        }
        self.default_colors_enabled = true;
        Ok(())
    }

    fn init_color(&mut self, color: CustomColor) -> Result<(), BackendError> {
        if !self.can_change_color {
            return Err(BackendError::CannotChangeColor { index: color.index });
        }
        if u16::from(color.index) >= self.palette_size {
            return Err(BackendError::ColorOutOfRange {
                index: color.index,
                palette_size: self.palette_size,
            });
        }
        self.colors.insert(color.index, color);
        Ok(())
    }

    fn init_pair(&mut self, number: u8, pair: ColorPair) {
        self.pairs.insert(number, pair);
        self.pair_calls += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Hue;
    use claims::{assert_err, assert_ok, assert_some};

    #[test]
    fn test_memory_backend_records_pairs() {
        let mut backend = MemoryBackend::new();
        backend.init_pair(3, ColorPair::new(Hue::Default, Hue::Indexed(17)));
        backend.init_pair(3, ColorPair::new(Hue::Indexed(18), Hue::Default));

        let pair = assert_some!(backend.pair(3));
        assert_eq!(pair.fg, Hue::Indexed(18));
        assert_eq!(backend.pair_calls(), 2);
        assert_eq!(backend.pairs().len(), 1);
    }

    #[test]
    fn test_memory_backend_rejects_color_changes_when_disabled() {
        let mut backend = MemoryBackend::new().with_color_changes(false);
        let err = assert_err!(backend.init_color(CustomColor::new(200, 1, 2, 3)));
        assert_eq!(err, BackendError::CannotChangeColor { index: 200 });
        assert!(backend.colors().is_empty());
    }

    #[test]
    fn test_memory_backend_checks_palette_size() {
        let mut backend = MemoryBackend::with_palette_size(16);
        assert_err!(backend.init_color(CustomColor::new(16, 0, 0, 0)));
        assert_ok!(backend.init_color(CustomColor::new(15, 0, 0, 0)));
    }

    #[test]
    fn test_memory_backend_default_colors() {
        let mut backend = MemoryBackend::new().with_default_colors(false);
        assert_err!(backend.use_default_colors());
        assert!(!backend.default_colors_enabled());

        let mut backend = MemoryBackend::new();
        assert_ok!(backend.use_default_colors());
        assert!(backend.default_colors_enabled());
    }
}
