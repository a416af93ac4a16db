//! Palette catalog: the static definition of every built-in theme.
//!
//! Nothing here touches a display. A [`ThemeSpec`] only says which colors
//! and styles each [`Slot`] asks for; the synthesizer decides what the
//! terminal actually gets.

mod catalog;

use serde::{Deserialize, Serialize};

use crate::color::{BoldToggle, CustomColor, Hue, Style};
use crate::slot::Slot;

/// Highest built-in theme id.
pub const MAX_THEME: u32 = 22;

/// Theme used for the frame slot when an unknown id is requested.
pub const BASELINE_THEME: ThemeId = ThemeId(0);

/// Numeric theme identifier as chosen by the user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ThemeId(pub u32);

impl ThemeId {
    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn is_builtin(self) -> bool {
        self.0 <= MAX_THEME
    }
}

impl From<u32> for ThemeId {
    fn from(value: u32) -> Self {
        ThemeId(value)
    }
}

impl std::fmt::Display for ThemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a theme requests for a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotDefinition {
    pub fg: Hue,
    pub bg: Hue,
    /// Ask for the bright variant of `fg`.
    pub light: bool,
    pub style: Style,
    pub bold: BoldToggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotEntry {
    pub slot: Slot,
    pub definition: SlotDefinition,
}

impl SlotEntry {
    /// Marks the slot as following the `bold_labels` option.
    pub const fn labels(mut self) -> Self {
        self.definition.bold = BoldToggle::Labels;
        self
    }

    /// Marks the slot as following the `bold_cursor` option.
    pub const fn cursor(mut self) -> Self {
        self.definition.bold = BoldToggle::Cursor;
        self
    }
}

pub(crate) const fn set(slot: Slot, fg: Hue, bg: Hue, light: bool, style: Style) -> SlotEntry {
    SlotEntry {
        slot,
        definition: SlotDefinition {
            fg,
            bg,
            light,
            style,
            bold: BoldToggle::None,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSpec {
    pub id: ThemeId,
    pub name: &'static str,
    /// Whether the theme passes the terminal's own default colors through.
    pub default_colors: bool,
    pub custom_colors: &'static [CustomColor],
    pub slots: &'static [SlotEntry],
}

impl ThemeSpec {
    /// Last definition of `slot` in this theme, ignoring the common slots.
    pub fn definition(&self, slot: Slot) -> Option<&SlotDefinition> {
        self.slots
            .iter()
            .rev()
            .find(|entry| entry.slot == slot)
            .map(|entry| &entry.definition)
    }
}

/// Looks up a built-in theme.
pub fn lookup(id: ThemeId) -> Option<&'static ThemeSpec> {
    catalog::THEMES.get(id.0 as usize)
}

/// All built-in themes in id order.
pub fn themes() -> impl Iterator<Item = &'static ThemeSpec> {
    catalog::THEMES.iter()
}

pub fn theme_name(id: ThemeId) -> Option<&'static str> {
    lookup(id).map(|spec| spec.name)
}

/// Slots every theme starts from.
pub fn common_slots() -> &'static [SlotEntry] {
    catalog::COMMON_SLOTS
}

/// Slot entries used when the requested theme does not exist: the common
/// slots followed by the baseline theme's frame.
pub fn fallback_slots() -> impl Iterator<Item = &'static SlotEntry> {
    let frame = lookup(BASELINE_THEME)
        .into_iter()
        .flat_map(|spec| spec.slots.iter())
        .filter(|entry| entry.slot == Slot::Frame)
        .take(1);

    common_slots().iter().chain(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some};
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_every_builtin_theme_in_order() {
        assert_eq!(themes().count(), MAX_THEME as usize + 1);
        for (index, spec) in themes().enumerate() {
            assert_eq!(spec.id, ThemeId(index as u32));
        }
    }

    #[test]
    fn test_slot_ids_unique_within_each_theme() {
        for spec in themes() {
            let mut seen = HashSet::new();
            for entry in spec.slots {
                assert!(
                    seen.insert(entry.slot),
                    "theme {} defines {:?} twice",
                    spec.id,
                    entry.slot
                );
            }
        }
    }

    #[test]
    fn test_lookup_out_of_range() {
        assert_none!(lookup(ThemeId(MAX_THEME + 1)));
        assert_none!(theme_name(ThemeId(u32::MAX)));
        assert_some!(lookup(ThemeId(MAX_THEME)));
    }

    #[test]
    fn test_default_color_themes() {
        let ids: Vec<u32> = themes()
            .filter(|spec| spec.default_colors)
            .map(|spec| spec.id.get())
            .collect();
        assert_eq!(ids, vec![0, 5, 16]);
    }

    #[test]
    fn test_custom_colors_only_on_extended_themes() {
        let ids: Vec<u32> = themes()
            .filter(|spec| !spec.custom_colors.is_empty())
            .map(|spec| spec.id.get())
            .collect();
        assert_eq!(ids, vec![17, 18, 19, 20, 21]);
    }

    #[test]
    fn test_labels_and_cursor_markers() {
        let mc = assert_some!(lookup(ThemeId(1)));
        let labels = assert_some!(mc.definition(Slot::Labels));
        assert_eq!(labels.bold, BoldToggle::Labels);
        let cursor = assert_some!(mc.definition(Slot::CursorFixed));
        assert_eq!(cursor.bold, BoldToggle::Cursor);
    }

    #[test]
    fn test_fallback_slots_end_with_baseline_frame() {
        let entries: Vec<&SlotEntry> = fallback_slots().collect();
        assert_eq!(entries.len(), common_slots().len() + 1);
        let last = assert_some!(entries.last());
        assert_eq!(last.slot, Slot::Frame);
        assert_eq!(last.definition.fg, Hue::Default);
    }
}
