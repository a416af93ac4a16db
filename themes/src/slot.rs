use serde::Serialize;

/// Semantic roles colored by a theme.
///
/// The discriminant is the color-pair number the slot registers, so it stays
/// stable across themes and releases. Number 29 is unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Slot {
    Frame = 1,
    TopBar = 2,
    Data = 3,
    Labels = 4,
    CursorFixed = 5,
    CursorData = 6,
    Title = 7,
    ExpandedHeader = 8,
    Footer = 9,
    FooterCursor = 10,
    CursorLine = 11,
    BottomBar = 12,
    BottomBarLight = 13,
    Bookmark = 14,
    SearchMatch = 15,
    PatternData = 16,
    PatternLine = 17,
    SearchMatchPlain = 18,
    SearchMatchCursor = 19,
    SearchMatchCursorFixed = 20,
    RowNumber = 21,
    CrossCursor = 22,
    CrossCursorLine = 23,
    VerticalCursorPattern = 24,
    VerticalCursorPatternLine = 25,
    Error = 26,
    Input = 27,
    BookmarkLine = 28,
    ScrollbarArrow = 30,
    ScrollbarTrack = 31,
    ScrollbarSlider = 32,
    ScrollbarActiveSlider = 33,
    Selection = 34,
    SelectionCursor = 35,
}

/// Size of a table indexed by [`Slot::number`].
pub const SLOT_CAPACITY: usize = 36;

impl Slot {
    pub const ALL: [Slot; 34] = [
        Slot::Frame,
        Slot::TopBar,
        Slot::Data,
        Slot::Labels,
        Slot::CursorFixed,
        Slot::CursorData,
        Slot::Title,
        Slot::ExpandedHeader,
        Slot::Footer,
        Slot::FooterCursor,
        Slot::CursorLine,
        Slot::BottomBar,
        Slot::BottomBarLight,
        Slot::Bookmark,
        Slot::SearchMatch,
        Slot::PatternData,
        Slot::PatternLine,
        Slot::SearchMatchPlain,
        Slot::SearchMatchCursor,
        Slot::SearchMatchCursorFixed,
        Slot::RowNumber,
        Slot::CrossCursor,
        Slot::CrossCursorLine,
        Slot::VerticalCursorPattern,
        Slot::VerticalCursorPatternLine,
        Slot::Error,
        Slot::Input,
        Slot::BookmarkLine,
        Slot::ScrollbarArrow,
        Slot::ScrollbarTrack,
        Slot::ScrollbarSlider,
        Slot::ScrollbarActiveSlider,
        Slot::Selection,
        Slot::SelectionCursor,
    ];

    /// Color-pair number registered for this slot.
    pub const fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<Slot> {
        Slot::ALL.iter().copied().find(|slot| slot.number() == number)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Slot::Frame => "frame",
            Slot::TopBar => "top-bar",
            Slot::Data => "data",
            Slot::Labels => "labels",
            Slot::CursorFixed => "cursor-fixed",
            Slot::CursorData => "cursor-data",
            Slot::Title => "title",
            Slot::ExpandedHeader => "expanded-header",
            Slot::Footer => "footer",
            Slot::FooterCursor => "footer-cursor",
            Slot::CursorLine => "cursor-line",
            Slot::BottomBar => "bottom-bar",
            Slot::BottomBarLight => "bottom-bar-light",
            Slot::Bookmark => "bookmark",
            Slot::SearchMatch => "search-match",
            Slot::PatternData => "pattern-data",
            Slot::PatternLine => "pattern-line",
            Slot::SearchMatchPlain => "search-match-plain",
            Slot::SearchMatchCursor => "search-match-cursor",
            Slot::SearchMatchCursorFixed => "search-match-cursor-fixed",
            Slot::RowNumber => "row-number",
            Slot::CrossCursor => "cross-cursor",
            Slot::CrossCursorLine => "cross-cursor-line",
            Slot::VerticalCursorPattern => "vertical-cursor-pattern",
            Slot::VerticalCursorPatternLine => "vertical-cursor-pattern-line",
            Slot::Error => "error",
            Slot::Input => "input",
            Slot::BookmarkLine => "bookmark-line",
            Slot::ScrollbarArrow => "scrollbar-arrow",
            Slot::ScrollbarTrack => "scrollbar-track",
            Slot::ScrollbarSlider => "scrollbar-slider",
            Slot::ScrollbarActiveSlider => "scrollbar-active-slider",
            Slot::Selection => "selection",
            Slot::SelectionCursor => "selection-cursor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slot_numbers_are_unique_and_fit_table() {
        let numbers: HashSet<u8> = Slot::ALL.iter().map(|slot| slot.number()).collect();
        assert_eq!(numbers.len(), Slot::ALL.len());
        assert!(Slot::ALL
            .iter()
            .all(|slot| (slot.number() as usize) < SLOT_CAPACITY));
        assert!(!numbers.contains(&0));
        assert!(!numbers.contains(&29));
    }

    #[test]
    fn test_from_number_round_trips() {
        for slot in Slot::ALL {
            assert_eq!(Slot::from_number(slot.number()), Some(slot));
        }
        assert_eq!(Slot::from_number(29), None);
        assert_eq!(Slot::from_number(0), None);
    }
}
