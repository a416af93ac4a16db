//! Capability-aware color-pair synthesis.
//!
//! A slot asks for a foreground, a background and a "light" flag. On terminals
//! with more than eight colors a light base hue becomes its bright palette
//! index; on 8-color terminals, and for the terminal default foreground,
//! lightness is expressed as bold instead. The two never stack.

use crate::capability::Capability;
use crate::color::{BoldToggle, ColorPair, Hue, Style};
use crate::options::ThemeOptions;
use crate::palette::SlotDefinition;

/// Outcome of synthesizing one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Synthesized {
    pub pair: ColorPair,
    pub style: Style,
}

pub fn synthesize(
    definition: &SlotDefinition,
    capability: Capability,
    options: &ThemeOptions,
) -> Synthesized {
    let SlotDefinition {
        fg,
        bg,
        light,
        style,
        bold,
    } = *definition;

    let (fg, mut style) = match fg {
        _ if capability.depth.is_basic() => (fg, lightness_as_bold(style, light)),
        Hue::Default => (fg, lightness_as_bold(style, light)),
        Hue::Base(hue) if light => (Hue::Bright(hue), style),
        _ => (fg, style),
    };

    if toggle_enabled(bold, options) {
        style |= Style::BOLD;
    }

    Synthesized {
        pair: ColorPair::new(fg, bg),
        style,
    }
}

fn lightness_as_bold(style: Style, light: bool) -> Style {
    if light { style | Style::BOLD } else { style }
}

fn toggle_enabled(toggle: BoldToggle, options: &ThemeOptions) -> bool {
    match toggle {
        BoldToggle::None => false,
        BoldToggle::Labels => options.bold_labels,
        BoldToggle::Cursor => options.bold_cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::ColorDepth;
    use crate::color::BaseHue;
    use crate::palette::{ThemeId, lookup};
    use crate::slot::Slot;
    use claims::assert_some;

    const BASIC: Capability = Capability {
        depth: ColorDepth::Basic8,
        default_colors: true,
    };
    const EXTENDED: Capability = Capability {
        depth: ColorDepth::Extended256,
        default_colors: true,
    };

    fn definition(theme: u32, slot: Slot) -> SlotDefinition {
        let spec = assert_some!(lookup(ThemeId(theme)));
        *assert_some!(spec.definition(slot))
    }

    #[test]
    fn test_default_fg_light_on_basic_terminal_turns_bold() {
        let labels = definition(0, Slot::Labels);
        let result = synthesize(&labels, BASIC, &ThemeOptions::new(0));

        assert_eq!(result.pair, ColorPair::new(Hue::Default, Hue::Default));
        assert_eq!(result.style, Style::BOLD);
    }

    #[test]
    fn test_light_base_hue_on_extended_terminal_brightens() {
        let labels = definition(1, Slot::Labels);
        let result = synthesize(&labels, EXTENDED, &ThemeOptions::new(1));

        assert_eq!(result.pair.fg, Hue::Bright(BaseHue::Yellow));
        assert_eq!(result.pair.fg.code(), 11);
        assert_eq!(result.pair.bg, Hue::Base(BaseHue::Blue));
        assert!(!result.style.contains(Style::BOLD));
    }

    #[test]
    fn test_light_base_hue_on_basic_terminal_keeps_color() {
        let labels = definition(1, Slot::Labels);
        let result = synthesize(&labels, BASIC, &ThemeOptions::new(1));

        assert_eq!(result.pair.fg, Hue::Base(BaseHue::Yellow));
        assert_eq!(result.style, Style::BOLD);
    }

    #[test]
    fn test_default_fg_on_extended_terminal_still_uses_bold() {
        let labels = definition(0, Slot::Labels);
        let result = synthesize(&labels, EXTENDED, &ThemeOptions::new(0));

        assert_eq!(result.pair.fg, Hue::Default);
        assert_eq!(result.style, Style::BOLD);
    }

    #[test]
    fn test_indexed_colors_pass_through() {
        let frame = definition(17, Slot::Frame);
        let result = synthesize(&frame, EXTENDED, &ThemeOptions::new(17));

        assert_eq!(result.pair, ColorPair::new(Hue::Indexed(245), Hue::Indexed(234)));
        assert_eq!(result.style, Style::empty());
    }

    #[test]
    fn test_bold_toggles_follow_options() {
        let labels = definition(1, Slot::Labels);
        let cursor = definition(1, Slot::CursorFixed);
        let options = ThemeOptions::new(1).with_bold_labels(true);

        assert!(synthesize(&labels, EXTENDED, &options).style.contains(Style::BOLD));
        assert!(!synthesize(&cursor, EXTENDED, &options).style.contains(Style::BOLD));

        let options = ThemeOptions::new(1).with_bold_cursor(true);
        assert!(synthesize(&cursor, EXTENDED, &options).style.contains(Style::BOLD));
    }

    #[test]
    fn test_explicit_style_preserved() {
        let track = definition(0, Slot::ScrollbarTrack);
        let result = synthesize(&track, BASIC, &ThemeOptions::new(0));

        assert_eq!(result.style, Style::DIM | Style::BOLD);
    }
}
