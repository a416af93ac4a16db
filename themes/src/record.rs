use serde::Serialize;

use crate::color::Attr;
use crate::context::{CONTEXT_COUNT, RenderContext};

/// Glyph drawn for the vertical scrollbar slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SliderGlyph {
    #[default]
    None,
    Diamond,
    Block,
}

/// Attributes a renderer needs for one screen region.
///
/// Fields a region does not use stay at [`Attr::NONE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ThemeRecord {
    pub data: Attr,
    pub line: Attr,
    pub expanded_header: Attr,
    pub cursor_data: Attr,
    pub cursor_line: Attr,
    pub cursor_expanded_header: Attr,
    pub cursor_pattern: Attr,
    pub bookmark_data: Attr,
    pub bookmark_line: Attr,
    pub cursor_bookmark: Attr,
    pub found_string: Attr,
    pub pattern_data: Attr,
    pub pattern_line: Attr,
    pub title: Attr,
    pub prompt: Attr,
    pub bottom: Attr,
    pub bottom_light: Attr,
    pub selection: Attr,
    pub selection_cursor: Attr,
    pub cross_cursor: Attr,
    pub cross_cursor_line: Attr,
    pub vertical_cursor_pattern: Attr,
    pub vertical_cursor_pattern_line: Attr,
    pub error: Attr,
    pub input: Attr,
    pub scrollbar_arrow: Attr,
    pub scrollbar_track: Attr,
    pub scrollbar_slider: Attr,
    pub scrollbar_active_slider: Attr,
    pub scrollbar_slider_glyph: SliderGlyph,
    pub scrollbar_use_arrows: bool,
}

/// Addressable [`Attr`] fields of a [`ThemeRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Data,
    Line,
    ExpandedHeader,
    CursorData,
    CursorLine,
    CursorExpandedHeader,
    CursorPattern,
    BookmarkData,
    BookmarkLine,
    CursorBookmark,
    FoundString,
    PatternData,
    PatternLine,
    Title,
    Prompt,
    Bottom,
    BottomLight,
    Selection,
    SelectionCursor,
    CrossCursor,
    CrossCursorLine,
    VerticalCursorPattern,
    VerticalCursorPatternLine,
    Error,
    Input,
    ScrollbarArrow,
    ScrollbarTrack,
    ScrollbarSlider,
    ScrollbarActiveSlider,
}

impl Field {
    pub const ALL: [Field; 29] = [
        Field::Data,
        Field::Line,
        Field::ExpandedHeader,
        Field::CursorData,
        Field::CursorLine,
        Field::CursorExpandedHeader,
        Field::CursorPattern,
        Field::BookmarkData,
        Field::BookmarkLine,
        Field::CursorBookmark,
        Field::FoundString,
        Field::PatternData,
        Field::PatternLine,
        Field::Title,
        Field::Prompt,
        Field::Bottom,
        Field::BottomLight,
        Field::Selection,
        Field::SelectionCursor,
        Field::CrossCursor,
        Field::CrossCursorLine,
        Field::VerticalCursorPattern,
        Field::VerticalCursorPatternLine,
        Field::Error,
        Field::Input,
        Field::ScrollbarArrow,
        Field::ScrollbarTrack,
        Field::ScrollbarSlider,
        Field::ScrollbarActiveSlider,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Field::Data => "data",
            Field::Line => "line",
            Field::ExpandedHeader => "expanded_header",
            Field::CursorData => "cursor_data",
            Field::CursorLine => "cursor_line",
            Field::CursorExpandedHeader => "cursor_expanded_header",
            Field::CursorPattern => "cursor_pattern",
            Field::BookmarkData => "bookmark_data",
            Field::BookmarkLine => "bookmark_line",
            Field::CursorBookmark => "cursor_bookmark",
            Field::FoundString => "found_string",
            Field::PatternData => "pattern_data",
            Field::PatternLine => "pattern_line",
            Field::Title => "title",
            Field::Prompt => "prompt",
            Field::Bottom => "bottom",
            Field::BottomLight => "bottom_light",
            Field::Selection => "selection",
            Field::SelectionCursor => "selection_cursor",
            Field::CrossCursor => "cross_cursor",
            Field::CrossCursorLine => "cross_cursor_line",
            Field::VerticalCursorPattern => "vertical_cursor_pattern",
            Field::VerticalCursorPatternLine => "vertical_cursor_pattern_line",
            Field::Error => "error",
            Field::Input => "input",
            Field::ScrollbarArrow => "scrollbar_arrow",
            Field::ScrollbarTrack => "scrollbar_track",
            Field::ScrollbarSlider => "scrollbar_slider",
            Field::ScrollbarActiveSlider => "scrollbar_active_slider",
        }
    }
}

impl ThemeRecord {
    pub fn get(&self, field: Field) -> Attr {
        *self.field(field)
    }

    pub fn field_mut(&mut self, field: Field) -> &mut Attr {
        match field {
            Field::Data => &mut self.data,
            Field::Line => &mut self.line,
            Field::ExpandedHeader => &mut self.expanded_header,
            Field::CursorData => &mut self.cursor_data,
            Field::CursorLine => &mut self.cursor_line,
            Field::CursorExpandedHeader => &mut self.cursor_expanded_header,
            Field::CursorPattern => &mut self.cursor_pattern,
            Field::BookmarkData => &mut self.bookmark_data,
            Field::BookmarkLine => &mut self.bookmark_line,
            Field::CursorBookmark => &mut self.cursor_bookmark,
            Field::FoundString => &mut self.found_string,
            Field::PatternData => &mut self.pattern_data,
            Field::PatternLine => &mut self.pattern_line,
            Field::Title => &mut self.title,
            Field::Prompt => &mut self.prompt,
            Field::Bottom => &mut self.bottom,
            Field::BottomLight => &mut self.bottom_light,
            Field::Selection => &mut self.selection,
            Field::SelectionCursor => &mut self.selection_cursor,
            Field::CrossCursor => &mut self.cross_cursor,
            Field::CrossCursorLine => &mut self.cross_cursor_line,
            Field::VerticalCursorPattern => &mut self.vertical_cursor_pattern,
            Field::VerticalCursorPatternLine => &mut self.vertical_cursor_pattern_line,
            Field::Error => &mut self.error,
            Field::Input => &mut self.input,
            Field::ScrollbarArrow => &mut self.scrollbar_arrow,
            Field::ScrollbarTrack => &mut self.scrollbar_track,
            Field::ScrollbarSlider => &mut self.scrollbar_slider,
            Field::ScrollbarActiveSlider => &mut self.scrollbar_active_slider,
        }
    }

    fn field(&self, field: Field) -> &Attr {
        match field {
            Field::Data => &self.data,
            Field::Line => &self.line,
            Field::ExpandedHeader => &self.expanded_header,
            Field::CursorData => &self.cursor_data,
            Field::CursorLine => &self.cursor_line,
            Field::CursorExpandedHeader => &self.cursor_expanded_header,
            Field::CursorPattern => &self.cursor_pattern,
            Field::BookmarkData => &self.bookmark_data,
            Field::BookmarkLine => &self.bookmark_line,
            Field::CursorBookmark => &self.cursor_bookmark,
            Field::FoundString => &self.found_string,
            Field::PatternData => &self.pattern_data,
            Field::PatternLine => &self.pattern_line,
            Field::Title => &self.title,
            Field::Prompt => &self.prompt,
            Field::Bottom => &self.bottom,
            Field::BottomLight => &self.bottom_light,
            Field::Selection => &self.selection,
            Field::SelectionCursor => &self.selection_cursor,
            Field::CrossCursor => &self.cross_cursor,
            Field::CrossCursorLine => &self.cross_cursor_line,
            Field::VerticalCursorPattern => &self.vertical_cursor_pattern,
            Field::VerticalCursorPatternLine => &self.vertical_cursor_pattern_line,
            Field::Error => &self.error,
            Field::Input => &self.input,
            Field::ScrollbarArrow => &self.scrollbar_arrow,
            Field::ScrollbarTrack => &self.scrollbar_track,
            Field::ScrollbarSlider => &self.scrollbar_slider,
            Field::ScrollbarActiveSlider => &self.scrollbar_active_slider,
        }
    }

    /// Fields that carry a color or style, in declaration order.
    pub fn assigned(&self) -> impl Iterator<Item = (Field, Attr)> + '_ {
        Field::ALL
            .iter()
            .map(|&field| (field, self.get(field)))
            .filter(|(_, attr)| !attr.is_none())
    }
}

/// One record per render context.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordSet {
    records: [ThemeRecord; CONTEXT_COUNT],
}

impl RecordSet {
    pub fn from_fn(resolve: impl FnMut(RenderContext) -> ThemeRecord) -> Self {
        Self {
            records: RenderContext::ALL.map(resolve),
        }
    }

    pub fn get(&self, context: RenderContext) -> &ThemeRecord {
        &self.records[context.window_id() as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (RenderContext, &ThemeRecord)> {
        RenderContext::ALL.iter().copied().zip(self.records.iter())
    }
}

impl std::ops::Index<RenderContext> for RecordSet {
    type Output = ThemeRecord;

    fn index(&self, context: RenderContext) -> &ThemeRecord {
        self.get(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Style;

    #[test]
    fn test_default_record_is_empty() {
        let record = ThemeRecord::default();
        assert_eq!(record.assigned().count(), 0);
        assert_eq!(record.scrollbar_slider_glyph, SliderGlyph::None);
        assert!(!record.scrollbar_use_arrows);
    }

    #[test]
    fn test_field_access_matches_struct() {
        let mut record = ThemeRecord::default();
        *record.field_mut(Field::FoundString) = Attr::new(15, Style::BOLD);
        assert_eq!(record.found_string, Attr::new(15, Style::BOLD));
        assert_eq!(record.get(Field::FoundString), record.found_string);

        let assigned: Vec<Field> = record.assigned().map(|(field, _)| field).collect();
        assert_eq!(assigned, vec![Field::FoundString]);
    }

    #[test]
    fn test_record_set_indexed_by_context() {
        let set = RecordSet::from_fn(|context| ThemeRecord {
            data: Attr::new(context.window_id(), Style::empty()),
            ..ThemeRecord::default()
        });
        for (context, record) in set.iter() {
            assert_eq!(record.data.pair, context.window_id());
        }
        assert_eq!(set[RenderContext::Footer].data.pair, 6);
    }
}
