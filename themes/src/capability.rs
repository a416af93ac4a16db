use serde::{Deserialize, Serialize};

/// Color depth reported by the display layer.
///
/// The engine only distinguishes classic 8-color terminals from everything
/// richer; 16, 88 and 256 color terminals all take the extended path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorDepth {
    Basic8,
    Extended256,
}

impl ColorDepth {
    pub fn from_color_count(colors: u32) -> Self {
        if colors <= 8 {
            ColorDepth::Basic8
        } else {
            ColorDepth::Extended256
        }
    }

    pub fn is_basic(self) -> bool {
        self == ColorDepth::Basic8
    }
}

/// Terminal capability facts supplied by the display layer. Read-only to
/// the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability {
    pub depth: ColorDepth,
    /// Whether the terminal supports passing through its default colors.
    pub default_colors: bool,
}

impl Capability {
    pub fn new(depth: ColorDepth, default_colors: bool) -> Self {
        Self {
            depth,
            default_colors,
        }
    }

    pub fn from_color_count(colors: u32, default_colors: bool) -> Self {
        Self::new(ColorDepth::from_color_count(colors), default_colors)
    }
}

impl Default for Capability {
    fn default() -> Self {
        Self {
            depth: ColorDepth::Extended256,
            default_colors: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_count_mapping() {
        assert_eq!(ColorDepth::from_color_count(8), ColorDepth::Basic8);
        assert_eq!(ColorDepth::from_color_count(0), ColorDepth::Basic8);
        assert_eq!(ColorDepth::from_color_count(16), ColorDepth::Extended256);
        assert_eq!(ColorDepth::from_color_count(256), ColorDepth::Extended256);
        assert_eq!(
            ColorDepth::from_color_count(16_777_216),
            ColorDepth::Extended256
        );
    }
}
