//! Context attribute resolution.
//!
//! Turns an [`AttributeTable`] into the [`ThemeRecord`] a renderer uses for
//! one screen region. Everything is table driven: each context has a list of
//! `field <- slot` sources and a list of style overlays, and a handful of
//! named theme families select the overlay variants that only some themes
//! get.

use crate::color::Style;
use crate::context::RenderContext;
use crate::options::DisplayMode;
use crate::palette::ThemeId;
use crate::record::{Field, SliderGlyph, ThemeRecord};
use crate::slot::Slot;
use crate::table::AttributeTable;

/// A named set of theme ids sharing a resolution variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeFamily {
    pub name: &'static str,
    pub members: &'static [u32],
}

impl ThemeFamily {
    pub const fn new(name: &'static str, members: &'static [u32]) -> Self {
        Self { name, members }
    }

    pub fn contains(&self, theme: ThemeId) -> bool {
        self.members.contains(&theme.get())
    }
}

/// Themes whose bottom-bar prompt uses the top-bar colors.
pub const MC_PROMPT: ThemeFamily = ThemeFamily::new("mc-prompt", &[0, 1]);
/// Themes drawing bookmarks inverted and the bookmarked cursor plain bold.
pub const INVERTED_BOOKMARKS: ThemeFamily = ThemeFamily::new("inverted-bookmarks", &[15]);
/// Themes drawing unhighlighted search matches in reverse video.
pub const REVERSE_PLAIN_MATCH: ThemeFamily = ThemeFamily::new("reverse-plain-match", &[0]);
/// Themes drawing highlighted search matches and patterns in reverse video.
pub const REVERSE_MATCH: ThemeFamily = ThemeFamily::new("reverse-match", &[0, 15]);
pub const BOLD_PATTERN: ThemeFamily = ThemeFamily::new("bold-pattern", &[15]);
pub const BOLD_PATTERN_LINE: ThemeFamily = ThemeFamily::new("bold-pattern-line", &[7, 8, 11, 15]);
pub const UNDERLINED_MATCH: ThemeFamily = ThemeFamily::new("underlined-match", &[16]);

/// Where a record field takes its attribute from.
#[derive(Debug, Clone, Copy)]
enum Source {
    Slot(Slot),
    /// Depends on whether search matches are shown with line highlighting.
    Highlight { lit: Slot, plain: Slot },
    /// Depends on the tabular display mode.
    Tabular { tabular: Slot, plain: Slot },
    /// Depends on the requested theme.
    Family {
        family: ThemeFamily,
        member: Slot,
        other: Slot,
    },
}

impl Source {
    fn slot(self, theme: ThemeId, mode: DisplayMode) -> Slot {
        match self {
            Source::Slot(slot) => slot,
            Source::Highlight { lit, plain } => {
                if mode.no_highlight_lines {
                    plain
                } else {
                    lit
                }
            }
            Source::Tabular { tabular, plain } => {
                if mode.tabular {
                    tabular
                } else {
                    plain
                }
            }
            Source::Family {
                family,
                member,
                other,
            } => {
                if family.contains(theme) {
                    member
                } else {
                    other
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum When {
    Always,
    Highlighted,
    Suppressed,
}

/// Style bits OR-ed into a field after its slot is assigned.
#[derive(Debug, Clone, Copy)]
struct Overlay {
    field: Field,
    when: When,
    family: Option<ThemeFamily>,
    member: Style,
    other: Style,
}

impl Overlay {
    const fn always(field: Field, style: Style) -> Self {
        Self {
            field,
            when: When::Always,
            family: None,
            member: style,
            other: style,
        }
    }

    const fn family(field: Field, family: ThemeFamily, member: Style, other: Style) -> Self {
        Self {
            field,
            when: When::Always,
            family: Some(family),
            member,
            other,
        }
    }

    const fn when(mut self, when: When) -> Self {
        self.when = when;
        self
    }

    fn style(&self, theme: ThemeId, mode: DisplayMode) -> Style {
        let active = match self.when {
            When::Always => true,
            When::Highlighted => !mode.no_highlight_lines,
            When::Suppressed => mode.no_highlight_lines,
        };
        if !active {
            return Style::empty();
        }
        match self.family {
            Some(family) if family.contains(theme) => self.member,
            Some(_) => self.other,
            None => self.member,
        }
    }
}

struct ContextProfile {
    sources: &'static [(Field, Source)],
    overlays: &'static [Overlay],
}

const NONE: Style = Style::empty();
const BOLD: Style = Style::BOLD;
const REVERSE: Style = Style::REVERSE;
const REVERSE_BOLD: Style = Style::REVERSE.union(Style::BOLD);
const UNDERLINE: Style = Style::UNDERLINE;
const UNDERLINE_ITALIC: Style = Style::UNDERLINE.union(Style::ITALIC);

const FOUND_STRING: Source = Source::Highlight {
    lit: Slot::SearchMatch,
    plain: Slot::SearchMatchPlain,
};

/// Fields every context gets.
static UNCONDITIONAL: &[(Field, Source)] = &[
    (Field::Selection, Source::Slot(Slot::Selection)),
    (Field::SelectionCursor, Source::Slot(Slot::SelectionCursor)),
    (Field::CrossCursor, Source::Slot(Slot::CrossCursor)),
    (Field::CrossCursorLine, Source::Slot(Slot::CrossCursorLine)),
    (Field::VerticalCursorPattern, Source::Slot(Slot::VerticalCursorPattern)),
    (
        Field::VerticalCursorPatternLine,
        Source::Slot(Slot::VerticalCursorPatternLine),
    ),
    (Field::Error, Source::Slot(Slot::Error)),
    (Field::Input, Source::Slot(Slot::Input)),
];

static HEADER: ContextProfile = ContextProfile {
    sources: &[
        (Field::Data, Source::Slot(Slot::Labels)),
        (Field::CursorData, Source::Slot(Slot::CursorFixed)),
        (Field::CursorLine, Source::Slot(Slot::CursorLine)),
        (Field::CursorExpandedHeader, Source::Slot(Slot::CursorData)),
    ],
    overlays: &[],
};

static TOP_BAR: ContextProfile = ContextProfile {
    sources: &[(Field::Title, Source::Slot(Slot::Title))],
    overlays: &[],
};

static BOTTOM_BAR: ContextProfile = ContextProfile {
    sources: &[
        (
            Field::Prompt,
            Source::Family {
                family: MC_PROMPT,
                member: Slot::TopBar,
                other: Slot::BottomBarLight,
            },
        ),
        (Field::Bottom, Source::Slot(Slot::BottomBar)),
        (Field::BottomLight, Source::Slot(Slot::BottomBarLight)),
    ],
    overlays: &[],
};

/// Overlays shared by the fixed-column and row grids.
macro_rules! grid_overlays {
    ($($extra:expr),* $(,)?) => {
        &[
            Overlay::always(Field::ExpandedHeader, BOLD),
            Overlay::family(Field::BookmarkData, INVERTED_BOOKMARKS, REVERSE_BOLD, BOLD),
            Overlay::family(Field::BookmarkLine, INVERTED_BOOKMARKS, REVERSE_BOLD, NONE),
            Overlay::family(Field::CursorBookmark, INVERTED_BOOKMARKS, BOLD, REVERSE_BOLD),
            Overlay::family(Field::FoundString, REVERSE_PLAIN_MATCH, REVERSE, BOLD)
                .when(When::Suppressed),
            Overlay::family(Field::FoundString, REVERSE_MATCH, REVERSE_BOLD, BOLD)
                .when(When::Highlighted),
            Overlay::family(Field::PatternData, BOLD_PATTERN, BOLD, NONE),
            Overlay::family(Field::PatternData, REVERSE_MATCH, REVERSE, NONE),
            Overlay::family(Field::PatternLine, BOLD_PATTERN_LINE, BOLD, NONE),
            Overlay::family(Field::PatternLine, REVERSE_MATCH, REVERSE, NONE),
            $($extra),*
        ]
    };
}

static FIXED_COLUMNS: ContextProfile = ContextProfile {
    sources: &[
        (Field::Data, Source::Slot(Slot::Labels)),
        (Field::ExpandedHeader, Source::Slot(Slot::ExpandedHeader)),
        (Field::CursorData, Source::Slot(Slot::CursorFixed)),
        (Field::CursorLine, Source::Slot(Slot::CursorLine)),
        (Field::CursorExpandedHeader, Source::Slot(Slot::CursorData)),
        (Field::CursorPattern, Source::Slot(Slot::SearchMatchCursorFixed)),
        (Field::BookmarkData, Source::Slot(Slot::Bookmark)),
        (Field::BookmarkLine, Source::Slot(Slot::BookmarkLine)),
        (Field::CursorBookmark, Source::Slot(Slot::Bookmark)),
        (Field::FoundString, FOUND_STRING),
        (Field::PatternData, Source::Slot(Slot::PatternData)),
        (Field::PatternLine, Source::Slot(Slot::PatternLine)),
    ],
    overlays: grid_overlays![
        Overlay::family(Field::FoundString, UNDERLINED_MATCH, UNDERLINE, NONE)
            .when(When::Highlighted),
        Overlay::family(Field::FoundString, UNDERLINED_MATCH, UNDERLINE_ITALIC, NONE)
            .when(When::Suppressed),
    ],
};

static ROWS: ContextProfile = ContextProfile {
    sources: &[
        (Field::Data, Source::Slot(Slot::Data)),
        (Field::ExpandedHeader, Source::Slot(Slot::ExpandedHeader)),
        (Field::CursorData, Source::Slot(Slot::CursorData)),
        (Field::CursorLine, Source::Slot(Slot::CursorLine)),
        (Field::CursorExpandedHeader, Source::Slot(Slot::CursorData)),
        (Field::CursorPattern, Source::Slot(Slot::SearchMatchCursor)),
        (Field::BookmarkData, Source::Slot(Slot::Bookmark)),
        (Field::BookmarkLine, Source::Slot(Slot::BookmarkLine)),
        (Field::CursorBookmark, Source::Slot(Slot::Bookmark)),
        (Field::FoundString, FOUND_STRING),
        (Field::PatternData, Source::Slot(Slot::PatternData)),
        (Field::PatternLine, Source::Slot(Slot::PatternLine)),
    ],
    overlays: grid_overlays![Overlay::family(
        Field::FoundString,
        UNDERLINED_MATCH,
        UNDERLINE,
        NONE
    )],
};

static FOOTER: ContextProfile = ContextProfile {
    sources: &[
        (
            Field::Data,
            Source::Tabular {
                tabular: Slot::Footer,
                plain: Slot::Data,
            },
        ),
        (Field::CursorData, Source::Slot(Slot::FooterCursor)),
        (Field::CursorPattern, Source::Slot(Slot::SearchMatchCursor)),
        (Field::BookmarkData, Source::Slot(Slot::Bookmark)),
        (Field::BookmarkLine, Source::Slot(Slot::BookmarkLine)),
        (Field::CursorBookmark, Source::Slot(Slot::Bookmark)),
        (Field::FoundString, FOUND_STRING),
        (Field::PatternData, Source::Slot(Slot::PatternData)),
        (Field::PatternLine, Source::Slot(Slot::PatternLine)),
    ],
    overlays: &[
        Overlay::always(Field::CursorBookmark, REVERSE_BOLD),
        Overlay::family(Field::FoundString, REVERSE_PLAIN_MATCH, REVERSE, BOLD)
            .when(When::Suppressed),
        Overlay::always(Field::FoundString, BOLD).when(When::Highlighted),
        Overlay::always(Field::CursorPattern, REVERSE),
    ],
};

static ROW_NUMBER: ContextProfile = ContextProfile {
    sources: &[
        (Field::Data, Source::Slot(Slot::RowNumber)),
        (Field::CursorData, Source::Slot(Slot::FooterCursor)),
        (Field::BookmarkData, Source::Slot(Slot::Bookmark)),
        (Field::BookmarkLine, Source::Slot(Slot::BookmarkLine)),
        (Field::CursorBookmark, Source::Slot(Slot::Bookmark)),
        (Field::PatternData, Source::Slot(Slot::PatternData)),
    ],
    overlays: &[Overlay::always(Field::CursorBookmark, REVERSE_BOLD)],
};

static VERTICAL_SCROLLBAR: ContextProfile = ContextProfile {
    sources: &[
        (Field::ScrollbarArrow, Source::Slot(Slot::ScrollbarArrow)),
        (Field::ScrollbarTrack, Source::Slot(Slot::ScrollbarTrack)),
        (Field::ScrollbarSlider, Source::Slot(Slot::ScrollbarSlider)),
        (
            Field::ScrollbarActiveSlider,
            Source::Slot(Slot::ScrollbarActiveSlider),
        ),
    ],
    overlays: &[],
};

fn profile(context: RenderContext) -> &'static ContextProfile {
    match context {
        RenderContext::LeftUpperCorner | RenderContext::FixedRows => &HEADER,
        RenderContext::TopBar => &TOP_BAR,
        RenderContext::BottomBar => &BOTTOM_BAR,
        RenderContext::FixedColumns => &FIXED_COLUMNS,
        RenderContext::Rows => &ROWS,
        RenderContext::Footer => &FOOTER,
        RenderContext::RowNumber | RenderContext::RowNumberCorner => &ROW_NUMBER,
        RenderContext::VerticalScrollbar => &VERTICAL_SCROLLBAR,
    }
}

/// Scrollbar decoration shared by a family of themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollbarStyle {
    pub family: ThemeFamily,
    pub glyph: SliderGlyph,
    pub use_arrows: bool,
}

pub static SCROLLBAR_STYLES: &[ScrollbarStyle] = &[
    ScrollbarStyle {
        family: ThemeFamily::new("diamond-slider", &[2]),
        glyph: SliderGlyph::Diamond,
        use_arrows: false,
    },
    ScrollbarStyle {
        family: ThemeFamily::new("block-slider", &[12]),
        glyph: SliderGlyph::Block,
        use_arrows: false,
    },
    ScrollbarStyle {
        family: ThemeFamily::new("block-slider-with-arrows", &[0]),
        glyph: SliderGlyph::Block,
        use_arrows: true,
    },
    ScrollbarStyle {
        family: ThemeFamily::new("arrows", &[1, 3, 7, 8, 13, 14, 15, 16]),
        glyph: SliderGlyph::None,
        use_arrows: true,
    },
];

/// Slider glyph and arrow flag for `theme`; themes outside every family get
/// neither.
pub fn scrollbar_style(theme: ThemeId) -> (SliderGlyph, bool) {
    SCROLLBAR_STYLES
        .iter()
        .find(|style| style.family.contains(theme))
        .map(|style| (style.glyph, style.use_arrows))
        .unwrap_or((SliderGlyph::None, false))
}

/// Resolves the record for `context`.
pub fn resolve(table: &AttributeTable, context: RenderContext, mode: DisplayMode) -> ThemeRecord {
    let theme = table.theme_id();
    let profile = profile(context);

    let mut record = unconditional(table, mode);
    assign(&mut record, table, profile.sources, mode);

    for overlay in profile.overlays {
        let field = record.field_mut(overlay.field);
        *field = field.with(overlay.style(theme, mode));
    }

    if context == RenderContext::VerticalScrollbar {
        let (glyph, use_arrows) = scrollbar_style(theme);
        record.scrollbar_slider_glyph = glyph;
        record.scrollbar_use_arrows = use_arrows;
    }

    suppress_highlight(&mut record, mode);
    record
}

/// Resolves by raw window id. Unknown ids get only the fields every context
/// shares.
pub fn resolve_window(table: &AttributeTable, window_id: u8, mode: DisplayMode) -> ThemeRecord {
    match RenderContext::from_window_id(window_id) {
        Some(context) => resolve(table, context, mode),
        None => {
            log::debug!("Unknown window id {window_id}, resolving shared attributes only");
            let mut record = unconditional(table, mode);
            suppress_highlight(&mut record, mode);
            record
        }
    }
}

fn unconditional(table: &AttributeTable, mode: DisplayMode) -> ThemeRecord {
    let mut record = ThemeRecord::default();
    assign(&mut record, table, UNCONDITIONAL, mode);
    record
}

fn assign(
    record: &mut ThemeRecord,
    table: &AttributeTable,
    sources: &[(Field, Source)],
    mode: DisplayMode,
) {
    let theme = table.theme_id();
    for &(field, source) in sources {
        *record.field_mut(field) = table.attr(source.slot(theme, mode));
    }
}

fn suppress_highlight(record: &mut ThemeRecord, mode: DisplayMode) {
    if mode.no_highlight_lines {
        record.pattern_data = record.data;
        record.pattern_line = record.line;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use crate::capability::Capability;
    use crate::options::ThemeOptions;

    fn table(theme: u32) -> AttributeTable {
        AttributeTable::build(
            &ThemeOptions::new(theme),
            Capability::default(),
            &mut MemoryBackend::new(),
        )
    }

    const HIGHLIGHTED: DisplayMode = DisplayMode {
        tabular: false,
        no_highlight_lines: false,
    };
    const SUPPRESSED: DisplayMode = DisplayMode {
        tabular: false,
        no_highlight_lines: true,
    };

    #[test]
    fn test_unconditional_fields_in_every_context() {
        let table = table(1);
        for context in RenderContext::ALL {
            let record = resolve(&table, context, HIGHLIGHTED);
            assert_eq!(record.selection, table.attr(Slot::Selection));
            assert_eq!(record.error, table.attr(Slot::Error));
            assert_eq!(record.input, table.attr(Slot::Input));
            assert_eq!(record.cross_cursor, table.attr(Slot::CrossCursor));
        }
    }

    #[test]
    fn test_prompt_follows_mc_family() {
        let mc = resolve(&table(1), RenderContext::BottomBar, HIGHLIGHTED);
        assert_eq!(mc.prompt.pair, Slot::TopBar.number());

        let foxpro = resolve(&table(2), RenderContext::BottomBar, HIGHLIGHTED);
        assert_eq!(foxpro.prompt.pair, Slot::BottomBarLight.number());
        assert_eq!(foxpro.bottom.pair, Slot::BottomBar.number());
    }

    #[test]
    fn test_fixed_columns_found_string_variants() {
        let table0 = table(0);
        let lit = resolve(&table0, RenderContext::FixedColumns, HIGHLIGHTED);
        assert_eq!(lit.found_string.pair, Slot::SearchMatch.number());
        assert!(lit.found_string.style.contains(REVERSE_BOLD));

        let plain = resolve(&table0, RenderContext::FixedColumns, SUPPRESSED);
        assert_eq!(plain.found_string.pair, Slot::SearchMatchPlain.number());
        assert!(plain.found_string.style.contains(Style::REVERSE));

        let simple = resolve(&table(16), RenderContext::FixedColumns, SUPPRESSED);
        assert!(simple.found_string.style.contains(UNDERLINE_ITALIC | BOLD));

        let simple_rows = resolve(&table(16), RenderContext::Rows, SUPPRESSED);
        assert!(!simple_rows.found_string.style.contains(Style::ITALIC));
        assert!(simple_rows.found_string.style.contains(UNDERLINE));
    }

    #[test]
    fn test_bookmark_overlays() {
        let red_table = table(15);
        let red = resolve(&red_table, RenderContext::Rows, HIGHLIGHTED);
        assert!(red.bookmark_data.style.contains(REVERSE_BOLD));
        assert!(red.bookmark_line.style.contains(REVERSE_BOLD));
        assert_eq!(
            red.cursor_bookmark.style,
            red_table.style(Slot::Bookmark) | BOLD
        );

        let blue = resolve(&table(8), RenderContext::Rows, HIGHLIGHTED);
        assert!(!blue.bookmark_data.style.contains(Style::REVERSE));
        assert!(blue.cursor_bookmark.style.contains(REVERSE_BOLD));
    }

    #[test]
    fn test_suppression_copies_data_into_pattern() {
        for theme in [0, 7, 15, 19] {
            let table = table(theme);
            for context in RenderContext::ALL {
                let record = resolve(&table, context, SUPPRESSED);
                assert_eq!(record.pattern_data, record.data);
                assert_eq!(record.pattern_line, record.line);
            }
        }
    }

    #[test]
    fn test_footer_tabular_data() {
        let table = table(3);
        let tabular = DisplayMode {
            tabular: true,
            no_highlight_lines: false,
        };
        let footer = resolve(&table, RenderContext::Footer, tabular);
        assert_eq!(footer.data.pair, Slot::Footer.number());
        let footer = resolve(&table, RenderContext::Footer, HIGHLIGHTED);
        assert_eq!(footer.data.pair, Slot::Data.number());
        assert!(footer.cursor_pattern.style.contains(Style::REVERSE));
    }

    #[test]
    fn test_scrollbar_styles() {
        assert_eq!(scrollbar_style(ThemeId(2)), (SliderGlyph::Diamond, false));
        assert_eq!(scrollbar_style(ThemeId(12)), (SliderGlyph::Block, false));
        assert_eq!(scrollbar_style(ThemeId(0)), (SliderGlyph::Block, true));
        assert_eq!(scrollbar_style(ThemeId(14)), (SliderGlyph::None, true));
        assert_eq!(scrollbar_style(ThemeId(4)), (SliderGlyph::None, false));
        assert_eq!(scrollbar_style(ThemeId(40)), (SliderGlyph::None, false));
    }

    #[test]
    fn test_unknown_window_gets_shared_fields_only() {
        let table = table(1);
        let record = resolve_window(&table, 42, HIGHLIGHTED);
        assert!(record.data.is_none());
        assert_eq!(record.selection, table.attr(Slot::Selection));
        assert_eq!(
            resolve_window(&table, 4, HIGHLIGHTED),
            resolve(&table, RenderContext::FixedColumns, HIGHLIGHTED)
        );
    }

    #[test]
    fn test_families_use_requested_theme_on_fallback() {
        let fallback = table(99);
        let record = resolve(&fallback, RenderContext::BottomBar, HIGHLIGHTED);
        assert!(record.prompt.is_none());
        assert!(record.bottom.is_none());
    }
}
