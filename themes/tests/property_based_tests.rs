use proptest::prelude::*;
use themes::palette::{self, SlotDefinition};
use themes::resolver::{SCROLLBAR_STYLES, scrollbar_style};
use themes::{
    AttributeTable, Capability, ColorDepth, DisplayMode, MAX_THEME, MemoryBackend, RenderContext,
    SliderGlyph, Slot, Style, ThemeId, ThemeOptions,
};

fn depth_strategy() -> impl Strategy<Value = ColorDepth> {
    prop_oneof![Just(ColorDepth::Basic8), Just(ColorDepth::Extended256)]
}

fn context_strategy() -> impl Strategy<Value = RenderContext> {
    (0usize..RenderContext::ALL.len()).prop_map(|index| RenderContext::ALL[index])
}

fn mode_strategy() -> impl Strategy<Value = DisplayMode> {
    (any::<bool>(), any::<bool>()).prop_map(|(tabular, no_highlight_lines)| DisplayMode {
        tabular,
        no_highlight_lines,
    })
}

fn build(options: &ThemeOptions, depth: ColorDepth) -> AttributeTable {
    AttributeTable::build(
        options,
        Capability::new(depth, true),
        &mut MemoryBackend::new(),
    )
}

/// Definition that ends up in the table for `slot`: the theme's own entry,
/// else the common one.
fn effective_definition(theme: ThemeId, slot: Slot) -> Option<SlotDefinition> {
    let spec = palette::lookup(theme)?;
    spec.definition(slot).copied().or_else(|| {
        palette::common_slots()
            .iter()
            .rev()
            .find(|entry| entry.slot == slot)
            .map(|entry| entry.definition)
    })
}

#[cfg(test)]
mod synthesis_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_no_double_brightening(
            theme in 0u32..=MAX_THEME,
            depth in depth_strategy()
        ) {
            let table = build(&ThemeOptions::new(theme), depth);

            for (slot, synthesized) in table.defined_slots() {
                let definition = effective_definition(ThemeId(theme), slot);
                prop_assert!(definition.is_some());
                let definition = definition.unwrap();

                // Property: bold never comes from lightness when a bright index was chosen
                if synthesized.pair.fg.is_bright() {
                    prop_assert_eq!(synthesized.style, definition.style);
                }

                // Property: 8-color terminals never get bright indices
                if depth == ColorDepth::Basic8 {
                    prop_assert!(!synthesized.pair.fg.is_bright());
                }
            }
        }

        #[test]
        fn test_bold_toggles_only_add_bold(
            theme in 0u32..=MAX_THEME,
            depth in depth_strategy(),
            bold_labels in any::<bool>(),
            bold_cursor in any::<bool>()
        ) {
            let plain = build(&ThemeOptions::new(theme), depth);
            let options = ThemeOptions::new(theme)
                .with_bold_labels(bold_labels)
                .with_bold_cursor(bold_cursor);
            let toggled = build(&options, depth);

            for slot in Slot::ALL {
                prop_assert_eq!(plain.pair(slot), toggled.pair(slot));
                prop_assert!(toggled.style(slot).contains(plain.style(slot)));
                prop_assert!((toggled.style(slot) - plain.style(slot)).difference(Style::BOLD).is_empty());
            }
        }
    }
}

#[cfg(test)]
mod resolution_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_scrollbar_combination_is_documented(theme in 0u32..200) {
            let table = build(&ThemeOptions::new(theme), ColorDepth::Extended256);
            let record = themes::resolver::resolve(
                &table,
                RenderContext::VerticalScrollbar,
                DisplayMode::default(),
            );
            let combination = (record.scrollbar_slider_glyph, record.scrollbar_use_arrows);

            let documented = [
                (SliderGlyph::Diamond, false),
                (SliderGlyph::Block, false),
                (SliderGlyph::Block, true),
                (SliderGlyph::None, true),
                (SliderGlyph::None, false),
            ];
            prop_assert!(documented.contains(&combination));
            prop_assert_eq!(combination, scrollbar_style(ThemeId(theme)));

            let member = SCROLLBAR_STYLES
                .iter()
                .any(|style| style.family.contains(ThemeId(theme)));
            if !member {
                prop_assert_eq!(combination, (SliderGlyph::None, false));
            }
        }

        #[test]
        fn test_suppression_mirrors_plain_fields(
            theme in 0u32..=MAX_THEME,
            context in context_strategy(),
            tabular in any::<bool>()
        ) {
            let table = build(&ThemeOptions::new(theme), ColorDepth::Extended256);
            let mode = DisplayMode { tabular, no_highlight_lines: true };
            let record = themes::resolver::resolve(&table, context, mode);

            prop_assert_eq!(record.pattern_data, record.data);
            prop_assert_eq!(record.pattern_line, record.line);
        }

        #[test]
        fn test_tabular_mode_only_touches_footer_data(
            theme in 0u32..=MAX_THEME,
            context in context_strategy(),
            no_highlight_lines in any::<bool>()
        ) {
            let table = build(&ThemeOptions::new(theme), ColorDepth::Extended256);
            let plain = DisplayMode { tabular: false, no_highlight_lines };
            let tabular = DisplayMode { tabular: true, no_highlight_lines };

            let mut before = themes::resolver::resolve(&table, context, plain);
            let after = themes::resolver::resolve(&table, context, tabular);

            if context == RenderContext::Footer {
                // pattern fields mirror data when highlighting is suppressed
                before.data = after.data;
                if no_highlight_lines {
                    before.pattern_data = after.pattern_data;
                }
            }
            prop_assert_eq!(before, after);
        }

        #[test]
        fn test_resolution_is_idempotent(
            theme in 0u32..40,
            context in context_strategy(),
            mode in mode_strategy()
        ) {
            let table = build(&ThemeOptions::new(theme), ColorDepth::Extended256);
            let first = themes::resolver::resolve(&table, context, mode);
            let second = themes::resolver::resolve(&table, context, mode);
            prop_assert_eq!(first, second);
        }
    }
}

#[cfg(test)]
mod family_table_tests {
    use super::*;
    use themes::record::ThemeRecord;
    use themes::{Attr, Style};

    const REVERSE_BOLD: Style = Style::REVERSE.union(Style::BOLD);

    fn pick(condition: bool, style: Style) -> Style {
        if condition { style } else { Style::empty() }
    }

    /// Straight-line model of context resolution with every family written
    /// out as literal theme ids.
    fn expected(
        table: &AttributeTable,
        theme: u32,
        context: RenderContext,
        mode: DisplayMode,
    ) -> ThemeRecord {
        let a = |slot: Slot| table.attr(slot);
        let suppressed = mode.no_highlight_lines;

        let mut record = ThemeRecord {
            selection: a(Slot::Selection),
            selection_cursor: a(Slot::SelectionCursor),
            cross_cursor: a(Slot::CrossCursor),
            cross_cursor_line: a(Slot::CrossCursorLine),
            vertical_cursor_pattern: a(Slot::VerticalCursorPattern),
            vertical_cursor_pattern_line: a(Slot::VerticalCursorPatternLine),
            error: a(Slot::Error),
            input: a(Slot::Input),
            ..ThemeRecord::default()
        };

        match context {
            RenderContext::LeftUpperCorner | RenderContext::FixedRows => {
                record.data = a(Slot::Labels);
                record.cursor_data = a(Slot::CursorFixed);
                record.cursor_line = a(Slot::CursorLine);
                record.cursor_expanded_header = a(Slot::CursorData);
            }
            RenderContext::TopBar => record.title = a(Slot::Title),
            RenderContext::BottomBar => {
                record.prompt = if [0, 1].contains(&theme) {
                    a(Slot::TopBar)
                } else {
                    a(Slot::BottomBarLight)
                };
                record.bottom = a(Slot::BottomBar);
                record.bottom_light = a(Slot::BottomBarLight);
            }
            RenderContext::FixedColumns | RenderContext::Rows => {
                let fixed = context == RenderContext::FixedColumns;
                record.data = a(if fixed { Slot::Labels } else { Slot::Data });
                record.expanded_header = a(Slot::ExpandedHeader).with(Style::BOLD);
                record.cursor_data = a(if fixed { Slot::CursorFixed } else { Slot::CursorData });
                record.cursor_line = a(Slot::CursorLine);
                record.cursor_expanded_header = a(Slot::CursorData);
                record.cursor_pattern = a(if fixed {
                    Slot::SearchMatchCursorFixed
                } else {
                    Slot::SearchMatchCursor
                });

                let red = theme == 15;
                record.bookmark_data =
                    a(Slot::Bookmark).with(if red { REVERSE_BOLD } else { Style::BOLD });
                record.bookmark_line = a(Slot::BookmarkLine).with(pick(red, REVERSE_BOLD));
                record.cursor_bookmark =
                    a(Slot::Bookmark).with(if red { Style::BOLD } else { REVERSE_BOLD });

                record.found_string = if suppressed {
                    a(Slot::SearchMatchPlain).with(if theme == 0 {
                        Style::REVERSE
                    } else {
                        Style::BOLD
                    })
                } else {
                    a(Slot::SearchMatch).with(if [0, 15].contains(&theme) {
                        REVERSE_BOLD
                    } else {
                        Style::BOLD
                    })
                };
                if theme == 16 {
                    record.found_string = record.found_string.with(Style::UNDERLINE);
                    if fixed && suppressed {
                        record.found_string = record.found_string.with(Style::ITALIC);
                    }
                }

                let reverse = [0, 15].contains(&theme);
                record.pattern_data = a(Slot::PatternData)
                    .with(pick(theme == 15, Style::BOLD))
                    .with(pick(reverse, Style::REVERSE));
                record.pattern_line = a(Slot::PatternLine)
                    .with(pick([7, 8, 11, 15].contains(&theme), Style::BOLD))
                    .with(pick(reverse, Style::REVERSE));
            }
            RenderContext::Footer => {
                record.data = a(if mode.tabular { Slot::Footer } else { Slot::Data });
                record.cursor_data = a(Slot::FooterCursor);
                record.cursor_pattern = a(Slot::SearchMatchCursor).with(Style::REVERSE);
                record.bookmark_data = a(Slot::Bookmark);
                record.bookmark_line = a(Slot::BookmarkLine);
                record.cursor_bookmark = a(Slot::Bookmark).with(REVERSE_BOLD);
                record.found_string = if suppressed {
                    a(Slot::SearchMatchPlain).with(if theme == 0 {
                        Style::REVERSE
                    } else {
                        Style::BOLD
                    })
                } else {
                    a(Slot::SearchMatch).with(Style::BOLD)
                };
                record.pattern_data = a(Slot::PatternData);
                record.pattern_line = a(Slot::PatternLine);
            }
            RenderContext::RowNumber | RenderContext::RowNumberCorner => {
                record.data = a(Slot::RowNumber);
                record.cursor_data = a(Slot::FooterCursor);
                record.bookmark_data = a(Slot::Bookmark);
                record.bookmark_line = a(Slot::BookmarkLine);
                record.cursor_bookmark = a(Slot::Bookmark).with(REVERSE_BOLD);
                record.pattern_data = a(Slot::PatternData);
            }
            RenderContext::VerticalScrollbar => {
                record.scrollbar_arrow = a(Slot::ScrollbarArrow);
                record.scrollbar_track = a(Slot::ScrollbarTrack);
                record.scrollbar_slider = a(Slot::ScrollbarSlider);
                record.scrollbar_active_slider = a(Slot::ScrollbarActiveSlider);
                (record.scrollbar_slider_glyph, record.scrollbar_use_arrows) = match theme {
                    2 => (SliderGlyph::Diamond, false),
                    12 => (SliderGlyph::Block, false),
                    0 => (SliderGlyph::Block, true),
                    1 | 3 | 7 | 8 | 13 | 14 | 15 | 16 => (SliderGlyph::None, true),
                    _ => (SliderGlyph::None, false),
                };
            }
        }

        if suppressed {
            record.pattern_data = record.data;
            record.pattern_line = record.line;
        }
        record
    }

    #[test]
    fn test_resolution_matches_family_table_for_every_theme() {
        let modes = [(false, false), (false, true), (true, false), (true, true)];

        for theme in 0u32..30 {
            for depth in [ColorDepth::Basic8, ColorDepth::Extended256] {
                let table = build(&ThemeOptions::new(theme), depth);
                for context in RenderContext::ALL {
                    for (tabular, no_highlight_lines) in modes {
                        let mode = DisplayMode {
                            tabular,
                            no_highlight_lines,
                        };
                        assert_eq!(
                            themes::resolver::resolve(&table, context, mode),
                            expected(&table, theme, context, mode),
                            "theme {theme}, {context}, {mode:?}, {depth:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_family_members_are_exact() {
        use themes::resolver::{
            BOLD_PATTERN, BOLD_PATTERN_LINE, INVERTED_BOOKMARKS, MC_PROMPT, REVERSE_MATCH,
            REVERSE_PLAIN_MATCH, UNDERLINED_MATCH,
        };

        let families = [
            (MC_PROMPT, &[0, 1][..]),
            (INVERTED_BOOKMARKS, &[15][..]),
            (REVERSE_PLAIN_MATCH, &[0][..]),
            (REVERSE_MATCH, &[0, 15][..]),
            (BOLD_PATTERN, &[15][..]),
            (BOLD_PATTERN_LINE, &[7, 8, 11, 15][..]),
            (UNDERLINED_MATCH, &[16][..]),
        ];

        for (family, members) in families {
            for theme in 0u32..=MAX_THEME + 5 {
                assert_eq!(
                    family.contains(ThemeId(theme)),
                    members.contains(&theme),
                    "{} membership of theme {theme}",
                    family.name
                );
            }
        }
    }

    #[test]
    fn test_fallback_rows_keep_overlay_styles() {
        let table = build(&ThemeOptions::new(MAX_THEME + 1), ColorDepth::Extended256);
        let rows = themes::resolver::resolve(&table, RenderContext::Rows, DisplayMode::default());
        assert_eq!(rows.data, Attr::NONE);
        assert_eq!(rows.expanded_header, Attr::new(0, Style::BOLD));
    }
}
