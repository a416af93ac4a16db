//! # Gridtint Themes Library
//!
//! Theme engine for tabular terminal viewers. It turns a theme id, a few
//! display toggles and the terminal's color capability into the attributes
//! every region of the viewer is drawn with.
//!
//! ## Modules
//!
//! - [`palette`] - Built-in theme definitions
//! - [`synth`] - Capability-aware color-pair synthesis
//! - [`table`] - Per-theme attribute table
//! - [`resolver`] - Render-context attribute records and theme families
//! - [`engine`] - Theme switching and table publication
//! - [`backend`] - Display backend seam and an in-memory backend
//! - [`options`] - User options and their validation
//! - [`color`], [`slot`], [`capability`], [`context`], [`record`] - Shared types

pub mod backend;
pub mod capability;
pub mod color;
pub mod context;
pub mod engine;
pub mod options;
pub mod palette;
pub mod record;
pub mod resolver;
pub mod slot;
pub mod synth;
pub mod table;

pub use backend::{BackendError, ColorBackend, MemoryBackend};
pub use capability::{Capability, ColorDepth};
pub use color::{Attr, BaseHue, ColorPair, CustomColor, Hue, Style};
pub use context::RenderContext;
pub use engine::ThemeEngine;
pub use options::{DisplayMode, OptionsValidationError, ThemeOptions};
pub use palette::{MAX_THEME, ThemeId};
pub use record::{RecordSet, SliderGlyph, ThemeRecord};
pub use slot::Slot;
pub use table::AttributeTable;
