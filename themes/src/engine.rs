use std::sync::Arc;

use crate::backend::ColorBackend;
use crate::capability::Capability;
use crate::context::RenderContext;
use crate::options::ThemeOptions;
use crate::palette::{self, ThemeId};
use crate::record::{RecordSet, ThemeRecord};
use crate::resolver;
use crate::table::AttributeTable;

/// Owns the current attribute table and rebuilds it when the theme, the
/// bold toggles or the terminal capability change.
///
/// A rebuild computes the whole table before publishing it, so readers
/// holding a [`table`](ThemeEngine::table) snapshot never see a half-built
/// theme. Switches are expected to come from one thread at a time.
pub struct ThemeEngine<B: ColorBackend> {
    backend: B,
    capability: Capability,
    options: ThemeOptions,
    current: Arc<AttributeTable>,
    generation: u64,
}

impl<B: ColorBackend> ThemeEngine<B> {
    pub fn new(backend: B, capability: Capability, options: ThemeOptions) -> Self {
        let mut backend = backend;
        let table = AttributeTable::build(&options, capability, &mut backend);

        log::info!("Theme engine initialized with {}", describe(options.theme));

        Self {
            backend,
            capability,
            options,
            current: Arc::new(table),
            generation: 1,
        }
    }

    /// Switches to another theme, keeping the other options.
    pub fn switch_theme(&mut self, theme: ThemeId) {
        let options = ThemeOptions {
            theme,
            ..self.options
        };
        self.options = options;
        self.rebuild();
        log::info!("Switched to theme: {}", describe(theme));
    }

    /// Applies new options. Returns `true` when the table was rebuilt.
    ///
    /// Display-mode flags are read at resolution time, so changing only
    /// those keeps the current table.
    pub fn apply_options(&mut self, options: ThemeOptions) -> bool {
        let rebuild = options.needs_rebuild(&self.options);
        self.options = options;
        if rebuild {
            self.rebuild();
            log::info!("Applied options, theme: {}", describe(options.theme));
        } else {
            log::debug!("Applied display options without rebuilding");
        }
        rebuild
    }

    pub fn set_capability(&mut self, capability: Capability) {
        if capability == self.capability {
            return;
        }
        self.capability = capability;
        self.rebuild();
        log::info!(
            "Terminal capability changed to {:?} (default colors: {})",
            capability.depth,
            capability.default_colors
        );
    }

    fn rebuild(&mut self) {
        let table = AttributeTable::build(&self.options, self.capability, &mut self.backend);
        self.current = Arc::new(table);
        self.generation += 1;
    }

    /// Snapshot of the current table. Stays valid across later switches.
    pub fn table(&self) -> Arc<AttributeTable> {
        Arc::clone(&self.current)
    }

    pub fn resolve(&self, context: RenderContext) -> ThemeRecord {
        resolver::resolve(&self.current, context, self.options.display_mode())
    }

    pub fn resolve_window(&self, window_id: u8) -> ThemeRecord {
        resolver::resolve_window(&self.current, window_id, self.options.display_mode())
    }

    /// Records for every render context.
    pub fn records(&self) -> RecordSet {
        RecordSet::from_fn(|context| self.resolve(context))
    }

    pub fn options(&self) -> &ThemeOptions {
        &self.options
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Number of tables built so far, the initial one included.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

fn describe(theme: ThemeId) -> String {
    match palette::theme_name(theme) {
        Some(name) => format!("{name} ({theme})"),
        None => format!("unknown ({theme})"),
    }
}
