//! Color and style primitives shared by the palette, the synthesizer and the
//! resolver.
//!
//! Colors follow the curses numbering model: `-1` is the terminal default,
//! `0..=7` the base ANSI hues, `8..=15` their bright variants and anything
//! above `15` a direct extended-palette index.

use bitflags::bitflags;
use serde::Serialize;

bitflags! {
    /// Non-color display modifiers attached to a slot or an output field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
    pub struct Style: u8 {
        const BOLD      = 1 << 0;
        const DIM       = 1 << 1;
        const ITALIC    = 1 << 2;
        const REVERSE   = 1 << 3;
        const UNDERLINE = 1 << 4;
    }
}

/// The eight base ANSI hues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseHue {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl BaseHue {
    /// Curses color number of the hue (`COLOR_BLACK` .. `COLOR_WHITE`).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            BaseHue::Black => "black",
            BaseHue::Red => "red",
            BaseHue::Green => "green",
            BaseHue::Yellow => "yellow",
            BaseHue::Blue => "blue",
            BaseHue::Magenta => "magenta",
            BaseHue::Cyan => "cyan",
            BaseHue::White => "white",
        }
    }
}

/// A requested or registered color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Hue {
    /// Terminal default color (curses `-1`).
    Default,
    /// One of the eight base hues.
    Base(BaseHue),
    /// Bright variant of a base hue (`8..=15`). Only produced by synthesis.
    Bright(BaseHue),
    /// Direct extended-palette index, used by the 256-color themes.
    Indexed(u8),
}

impl Hue {
    /// Numeric color code as understood by curses-like backends.
    pub const fn code(self) -> i16 {
        match self {
            Hue::Default => -1,
            Hue::Base(hue) => hue.index() as i16,
            Hue::Bright(hue) => hue.index() as i16 + 8,
            Hue::Indexed(index) => index as i16,
        }
    }

    pub const fn is_bright(self) -> bool {
        matches!(self, Hue::Bright(_))
    }
}

impl std::fmt::Display for Hue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hue::Default => write!(f, "default"),
            Hue::Base(hue) => write!(f, "{}", hue.name()),
            Hue::Bright(hue) => write!(f, "bright-{}", hue.name()),
            Hue::Indexed(index) => write!(f, "{index}"),
        }
    }
}

/// Option-driven bold marker carried by a slot definition.
///
/// The palette marks which slots follow the `bold_labels` / `bold_cursor`
/// options; the marker turns into `Style::BOLD` at synthesis time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoldToggle {
    #[default]
    None,
    Labels,
    Cursor,
}

/// A registered (foreground, background) combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorPair {
    pub fg: Hue,
    pub bg: Hue,
}

impl ColorPair {
    pub const fn new(fg: Hue, bg: Hue) -> Self {
        Self { fg, bg }
    }
}

/// A composed rendering attribute: registered pair number plus style bits.
///
/// Pair `0` is the terminal's default pair, so [`Attr::NONE`] means "no color
/// override, no style".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Attr {
    pub pair: u8,
    pub style: Style,
}

impl Attr {
    pub const NONE: Attr = Attr {
        pair: 0,
        style: Style::empty(),
    };

    pub const fn new(pair: u8, style: Style) -> Self {
        Self { pair, style }
    }

    /// Returns the attribute with `extra` layered on top of its style.
    pub const fn with(self, extra: Style) -> Self {
        Self {
            pair: self.pair,
            style: self.style.union(extra),
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Attr::NONE
    }
}

/// A custom extended-palette entry, components on the curses `0..=1000` scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CustomColor {
    pub index: u8,
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl CustomColor {
    /// Entry given directly on the `0..=1000` scale.
    pub const fn new(index: u8, red: u16, green: u16, blue: u16) -> Self {
        Self {
            index,
            red,
            green,
            blue,
        }
    }

    /// Entry given as 8-bit components, scaled to `0..=1000`.
    pub const fn from_rgb(index: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            index,
            red: scale_component(red),
            green: scale_component(green),
            blue: scale_component(blue),
        }
    }
}

const fn scale_component(value: u8) -> u16 {
    ((value as u32 * 1000) / 255) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_codes_follow_curses_numbering() {
        assert_eq!(Hue::Default.code(), -1);
        assert_eq!(Hue::Base(BaseHue::Black).code(), 0);
        assert_eq!(Hue::Base(BaseHue::Yellow).code(), 3);
        assert_eq!(Hue::Bright(BaseHue::Yellow).code(), 11);
        assert_eq!(Hue::Bright(BaseHue::White).code(), 15);
        assert_eq!(Hue::Indexed(235).code(), 235);
    }

    #[test]
    fn test_custom_color_scaling() {
        let color = CustomColor::from_rgb(200, 0xff, 0x00, 0x80);
        assert_eq!(color.red, 1000);
        assert_eq!(color.green, 0);
        assert_eq!(color.blue, 501);
    }

    #[test]
    fn test_attr_with_layers_style() {
        let attr = Attr::new(4, Style::BOLD).with(Style::REVERSE);
        assert_eq!(attr.pair, 4);
        assert_eq!(attr.style, Style::BOLD | Style::REVERSE);
        assert!(Attr::default().is_none());
    }
}
