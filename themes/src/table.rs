use crate::backend::ColorBackend;
use crate::capability::Capability;
use crate::color::{Attr, ColorPair, Style};
use crate::options::ThemeOptions;
use crate::palette::{self, SlotEntry, ThemeId, ThemeSpec};
use crate::slot::{SLOT_CAPACITY, Slot};
use crate::synth::{Synthesized, synthesize};

/// Synthesized attributes for every slot of one theme.
///
/// A table is built whole and never mutated afterwards; switching themes
/// builds a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeTable {
    theme: ThemeId,
    fallback: bool,
    capability: Capability,
    entries: [Option<Synthesized>; SLOT_CAPACITY],
}

impl AttributeTable {
    /// Builds the table for `options.theme`, registering colors and pairs
    /// through `backend` as it goes.
    ///
    /// Unknown themes never fail: they get the common slots plus the
    /// baseline frame and a warning in the log.
    pub fn build(
        options: &ThemeOptions,
        capability: Capability,
        backend: &mut dyn ColorBackend,
    ) -> Self {
        let mut table = Self {
            theme: options.theme,
            fallback: false,
            capability,
            entries: [None; SLOT_CAPACITY],
        };

        match palette::lookup(options.theme) {
            Some(spec) => {
                prepare_palette(spec, capability, backend);
                let entries = palette::common_slots().iter().chain(spec.slots);
                table.register(entries, options, backend);
            }
            None => {
                log::warn!(
                    "Unknown theme {}, falling back to the minimal palette",
                    options.theme
                );
                table.fallback = true;
                if let Some(baseline) = palette::lookup(palette::BASELINE_THEME) {
                    prepare_default_colors(baseline, capability, backend);
                }
                table.register(palette::fallback_slots(), options, backend);
            }
        }

        log::debug!(
            "Built attribute table for theme {} ({} slots, {:?})",
            table.theme,
            table.defined_slots().count(),
            capability.depth
        );

        table
    }

    fn register<'a>(
        &mut self,
        entries: impl Iterator<Item = &'a SlotEntry>,
        options: &ThemeOptions,
        backend: &mut dyn ColorBackend,
    ) {
        for entry in entries {
            let synthesized = synthesize(&entry.definition, self.capability, options);
            backend.init_pair(entry.slot.number(), synthesized.pair);
            self.entries[entry.slot.number() as usize] = Some(synthesized);
        }
    }

    /// Theme id the table was requested for.
    pub fn theme_id(&self) -> ThemeId {
        self.theme
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    /// Composed attribute for `slot`, or [`Attr::NONE`] when the theme does
    /// not define it.
    pub fn attr(&self, slot: Slot) -> Attr {
        match self.get(slot) {
            Some(synthesized) => Attr::new(slot.number(), synthesized.style),
            None => Attr::NONE,
        }
    }

    pub fn pair(&self, slot: Slot) -> Option<ColorPair> {
        self.get(slot).map(|synthesized| synthesized.pair)
    }

    pub fn style(&self, slot: Slot) -> Style {
        self.get(slot)
            .map(|synthesized| synthesized.style)
            .unwrap_or_default()
    }

    pub fn get(&self, slot: Slot) -> Option<&Synthesized> {
        self.entries[slot.number() as usize].as_ref()
    }

    /// Defined slots in pair-number order.
    pub fn defined_slots(&self) -> impl Iterator<Item = (Slot, &Synthesized)> {
        Slot::ALL
            .iter()
            .filter_map(|&slot| self.get(slot).map(|synthesized| (slot, synthesized)))
    }
}

fn prepare_palette(spec: &ThemeSpec, capability: Capability, backend: &mut dyn ColorBackend) {
    prepare_default_colors(spec, capability, backend);

    if spec.custom_colors.is_empty() {
        return;
    }

    if capability.depth.is_basic() {
        log::debug!(
            "Skipping {} custom colors of theme {} on an 8-color terminal",
            spec.custom_colors.len(),
            spec.id
        );
        return;
    }

    for color in spec.custom_colors {
        if let Err(e) = backend.init_color(*color) {
            log::debug!("Skipping custom color {} of theme {}: {e}", color.index, spec.id);
        }
    }
}

fn prepare_default_colors(
    spec: &ThemeSpec,
    capability: Capability,
    backend: &mut dyn ColorBackend,
) {
    if spec.default_colors {
        if capability.default_colors {
            if let Err(e) = backend.use_default_colors() {
                log::debug!("Default colors unavailable for theme {}: {e}", spec.id);
            }
        } else {
            log::debug!("Terminal has no default colors, theme {} uses its own", spec.id);
        }
    }
}
