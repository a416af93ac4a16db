//! Built-in theme table.
//!
//! Entries are listed in registration order; a later entry for the same slot
//! replaces the earlier one, and every theme is applied on top of
//! [`COMMON_SLOTS`].

use super::{SlotEntry, ThemeId, ThemeSpec, set};
use crate::color::{BaseHue, CustomColor, Hue, Style};
use crate::slot::Slot;

const DEFAULT: Hue = Hue::Default;
const BLACK: Hue = Hue::Base(BaseHue::Black);
const RED: Hue = Hue::Base(BaseHue::Red);
const GREEN: Hue = Hue::Base(BaseHue::Green);
const YELLOW: Hue = Hue::Base(BaseHue::Yellow);
const BLUE: Hue = Hue::Base(BaseHue::Blue);
const MAGENTA: Hue = Hue::Base(BaseHue::Magenta);
const CYAN: Hue = Hue::Base(BaseHue::Cyan);
const WHITE: Hue = Hue::Base(BaseHue::White);

const NONE: Style = Style::empty();
const BOLD: Style = Style::BOLD;
const DIM: Style = Style::DIM;
const ITALIC: Style = Style::ITALIC;
const REVERSE: Style = Style::REVERSE;
const UNDERLINE: Style = Style::UNDERLINE;

const fn ix(index: u8) -> Hue {
    Hue::Indexed(index)
}

/// Slots registered before any theme's own list.
pub(super) static COMMON_SLOTS: &[SlotEntry] = &[
    set(Slot::RowNumber, WHITE, BLACK, false, NONE),
    set(Slot::Error, WHITE, RED, true, NONE),
    set(Slot::Input, BLACK, WHITE, false, NONE),
    set(Slot::ScrollbarArrow, WHITE, BLACK, false, REVERSE),
    set(Slot::ScrollbarTrack, WHITE, BLACK, true, NONE),
    set(Slot::ScrollbarSlider, BLACK, BLUE, false, REVERSE),
    set(Slot::ScrollbarActiveSlider, WHITE, BLACK, true, REVERSE),
    set(Slot::Selection, CYAN, BLACK, true, REVERSE),
    set(Slot::SelectionCursor, WHITE, BLACK, true, REVERSE),
];

pub(super) static THEMES: [ThemeSpec; 23] = [
    ThemeSpec {
        id: ThemeId(0),
        name: "mc black",
        default_colors: true,
        custom_colors: &[],
        slots: &[
            set(Slot::Frame, DEFAULT, DEFAULT, false, NONE),
            set(Slot::TopBar, BLACK, WHITE, false, NONE),
            set(Slot::Data, DEFAULT, DEFAULT, false, NONE),
            set(Slot::Labels, DEFAULT, DEFAULT, true, NONE).labels(),
            set(Slot::CursorFixed, BLACK, WHITE, false, NONE).cursor(),
            set(Slot::CursorData, BLACK, WHITE, false, NONE).cursor(),
            set(Slot::Title, BLACK, WHITE, false, NONE),
            set(Slot::ExpandedHeader, BLACK, WHITE, false, NONE),
            set(Slot::Footer, DEFAULT, DEFAULT, false, NONE),
            set(Slot::FooterCursor, BLACK, WHITE, false, NONE).cursor(),
            set(Slot::CursorLine, BLACK, WHITE, false, NONE),
            set(Slot::BottomBar, BLACK, WHITE, false, NONE),
            set(Slot::BottomBarLight, BLACK, WHITE, false, NONE),
            set(Slot::Bookmark, BLACK, WHITE, false, NONE),
            set(Slot::SearchMatch, WHITE, BLACK, false, NONE),
            set(Slot::PatternData, DEFAULT, DEFAULT, false, NONE),
            set(Slot::PatternLine, DEFAULT, DEFAULT, false, NONE),
            set(Slot::SearchMatchPlain, DEFAULT, DEFAULT, false, NONE),
            set(Slot::SearchMatchCursor, DEFAULT, DEFAULT, false, NONE),
            set(Slot::SearchMatchCursorFixed, WHITE, BLACK, false, NONE),
            set(Slot::RowNumber, DEFAULT, DEFAULT, false, NONE),
            set(Slot::CrossCursor, DEFAULT, DEFAULT, false, REVERSE),
            set(Slot::CrossCursorLine, DEFAULT, DEFAULT, false, REVERSE),
            set(Slot::VerticalCursorPattern, BLACK, WHITE, false, NONE).cursor(),
            set(Slot::VerticalCursorPatternLine, BLACK, WHITE, false, NONE).cursor(),
            set(Slot::Input, DEFAULT, DEFAULT, false, NONE),
            set(Slot::BookmarkLine, BLACK, WHITE, false, NONE),
            set(Slot::ScrollbarArrow, DEFAULT, DEFAULT, false, NONE),
            set(Slot::ScrollbarTrack, DEFAULT, DEFAULT, true, DIM),
            set(Slot::ScrollbarSlider, DEFAULT, DEFAULT, false, NONE),
            set(Slot::ScrollbarActiveSlider, DEFAULT, DEFAULT, false, REVERSE),
            set(Slot::Selection, WHITE, BLACK, false, Style::DIM.union(Style::BOLD).union(Style::REVERSE)),
            set(Slot::SelectionCursor, BLACK, WHITE, true, Style::BOLD.union(Style::REVERSE)),
        ],
    },
    ThemeSpec {
        id: ThemeId(1),
        name: "mc",
        default_colors: false,
        custom_colors: &[],
        slots: &[
            set(Slot::Frame, WHITE, BLUE, false, NONE),
            set(Slot::TopBar, BLACK, CYAN, false, NONE),
            set(Slot::Data, WHITE, BLUE, false, NONE),
            set(Slot::Labels, YELLOW, BLUE, true, NONE).labels(),
            set(Slot::CursorFixed, YELLOW, CYAN, true, NONE).cursor(),
            set(Slot::CursorData, BLACK, CYAN, false, NONE),
            set(Slot::Title, BLACK, CYAN, false, NONE),
            set(Slot::ExpandedHeader, RED, BLUE, false, NONE),
            set(Slot::Footer, CYAN, BLUE, false, NONE),
            set(Slot::FooterCursor, BLACK, CYAN, false, NONE).cursor(),
            set(Slot::CursorLine, WHITE, CYAN, false, NONE),
            set(Slot::BottomBar, WHITE, CYAN, true, NONE),
            set(Slot::BottomBarLight, BLACK, GREEN, false, NONE),
            set(Slot::Bookmark, WHITE, RED, true, NONE),
            set(Slot::SearchMatch, YELLOW, GREEN, true, NONE),
            set(Slot::PatternData, BLACK, GREEN, false, NONE),
            set(Slot::PatternLine, WHITE, GREEN, false, NONE),
            set(Slot::SearchMatchPlain, GREEN, BLUE, false, NONE),
            set(Slot::SearchMatchCursor, YELLOW, CYAN, true, NONE),
            set(Slot::SearchMatchCursorFixed, WHITE, BLACK, true, NONE),
            set(Slot::RowNumber, WHITE, CYAN, true, NONE),
            set(Slot::CrossCursor, CYAN, BLACK, true, REVERSE).cursor(),
            set(Slot::CrossCursorLine, CYAN, WHITE, true, REVERSE),
            set(Slot::VerticalCursorPattern, GREEN, BLACK, true, REVERSE).cursor(),
            set(Slot::VerticalCursorPatternLine, GREEN, WHITE, true, REVERSE),
            set(Slot::Error, WHITE, RED, true, NONE),
            set(Slot::BookmarkLine, WHITE, RED, true, NONE),
            set(Slot::ScrollbarArrow, WHITE, BLUE, false, NONE),
            set(Slot::ScrollbarTrack, CYAN, BLUE, false, NONE),
            set(Slot::ScrollbarSlider, WHITE, BLUE, false, REVERSE),
            set(Slot::ScrollbarActiveSlider, WHITE, BLUE, true, REVERSE),
        ],
    },
    ThemeSpec {
        id: ThemeId(2),
        name: "FoxPro",
        default_colors: false,
        custom_colors: &[],
        slots: &[
            set(Slot::Frame, WHITE, CYAN, false, NONE),
            set(Slot::TopBar, BLACK, WHITE, false, NONE),
            set(Slot::Data, WHITE, CYAN, true, NONE),
            set(Slot::Labels, WHITE, CYAN, true, NONE).labels(),
            set(Slot::CursorFixed, WHITE, BLUE, true, NONE).cursor(),
            set(Slot::CursorData, WHITE, BLUE, true, NONE).cursor(),
            set(Slot::Title, YELLOW, WHITE, true, NONE),
            set(Slot::ExpandedHeader, WHITE, BLUE, true, NONE),
            set(Slot::Footer, BLUE, CYAN, false, NONE),
            set(Slot::FooterCursor, WHITE, BLUE, true, NONE).cursor(),
            set(Slot::CursorLine, WHITE, BLUE, false, NONE),
            set(Slot::BottomBar, WHITE, BLUE, true, NONE),
            set(Slot::BottomBarLight, WHITE, BLUE, true, NONE),
            set(Slot::Bookmark, WHITE, MAGENTA, true, NONE),
            set(Slot::SearchMatch, YELLOW, GREEN, true, NONE),
            set(Slot::PatternData, BLACK, GREEN, false, NONE),
            set(Slot::PatternLine, WHITE, GREEN, false, NONE),
            set(Slot::SearchMatchPlain, YELLOW, GREEN, true, NONE),
            set(Slot::SearchMatchCursor, YELLOW, BLUE, true, NONE),
            set(Slot::SearchMatchCursorFixed, WHITE, BLACK, false, NONE),
            set(Slot::RowNumber, WHITE, CYAN, false, NONE),
            set(Slot::CrossCursor, BLUE, BLACK, true, REVERSE).cursor(),
            set(Slot::CrossCursorLine, BLUE, WHITE, true, REVERSE),
            set(Slot::VerticalCursorPattern, GREEN, BLACK, true, REVERSE).cursor(),
            set(Slot::VerticalCursorPatternLine, GREEN, WHITE, true, REVERSE),
            set(Slot::Error, YELLOW, RED, true, NONE),
            set(Slot::BookmarkLine, WHITE, MAGENTA, true, NONE),
            set(Slot::ScrollbarArrow, YELLOW, WHITE, true, NONE),
            set(Slot::ScrollbarTrack, WHITE, WHITE, false, NONE),
            set(Slot::ScrollbarSlider, YELLOW, WHITE, true, NONE),
            set(Slot::ScrollbarActiveSlider, YELLOW, WHITE, true, BOLD),
            set(Slot::Selection, CYAN, BLACK, true, REVERSE),
            set(Slot::SelectionCursor, WHITE, BLACK, true, REVERSE).cursor(),
        ],
    },
    ThemeSpec {
        id: ThemeId(3),
        name: "PD Menu",
        default_colors: false,
        custom_colors: &[],
        slots: &[
            set(Slot::Frame, BLACK, CYAN, false, NONE),
            set(Slot::TopBar, BLACK, WHITE, false, NONE),
            set(Slot::Data, BLACK, CYAN, false, NONE),
            set(Slot::Labels, WHITE, CYAN, true, NONE).labels(),
            set(Slot::CursorFixed, WHITE, BLACK, true, NONE).cursor(),
            set(Slot::CursorData, CYAN, BLACK, true, NONE).cursor(),
            set(Slot::Title, BLACK, WHITE, false, NONE),
            set(Slot::ExpandedHeader, WHITE, CYAN, true, NONE),
            set(Slot::Footer, BLACK, CYAN, false, NONE),
            set(Slot::FooterCursor, CYAN, BLACK, true, NONE).cursor(),
            set(Slot::CursorLine, CYAN, BLACK, false, NONE),
            set(Slot::BottomBar, CYAN, BLACK, false, NONE),
            set(Slot::BottomBarLight, WHITE, BLACK, true, NONE),
            set(Slot::Bookmark, WHITE, RED, true, NONE),
            set(Slot::SearchMatch, WHITE, GREEN, true, NONE),
            set(Slot::PatternData, BLACK, GREEN, false, NONE),
            set(Slot::PatternLine, BLACK, GREEN, false, NONE),
            set(Slot::SearchMatchPlain, WHITE, GREEN, true, NONE),
            set(Slot::SearchMatchCursor, YELLOW, BLACK, true, NONE),
            set(Slot::SearchMatchCursorFixed, WHITE, BLUE, true, NONE),
            set(Slot::RowNumber, BLACK, CYAN, false, NONE),
            set(Slot::CrossCursor, WHITE, BLACK, true, REVERSE).cursor(),
            set(Slot::CrossCursorLine, WHITE, CYAN, true, REVERSE),
            set(Slot::VerticalCursorPattern, GREEN, BLACK, true, REVERSE).cursor(),
            set(Slot::VerticalCursorPatternLine, GREEN, BLACK, true, REVERSE),
            set(Slot::BookmarkLine, WHITE, RED, true, NONE),
            set(Slot::ScrollbarArrow, WHITE, BLACK, true, REVERSE),
            set(Slot::ScrollbarTrack, WHITE, BLACK, true, NONE),
            set(Slot::ScrollbarSlider, BLACK, BLUE, false, REVERSE),
            set(Slot::ScrollbarActiveSlider, WHITE, BLACK, true, REVERSE),
            set(Slot::Selection, CYAN, BLACK, true, REVERSE),
            set(Slot::SelectionCursor, WHITE, BLACK, true, REVERSE).cursor(),
        ],
    },
    ThemeSpec {
        id: ThemeId(4),
        name: "White",
        default_colors: false,
        custom_colors: &[],
        slots: &[
            set(Slot::Frame, BLACK, WHITE, false, NONE),
            set(Slot::TopBar, BLACK, CYAN, false, NONE),
            set(Slot::Data, BLACK, WHITE, false, NONE),
            set(Slot::Labels, BLACK, WHITE, false, BOLD),
            set(Slot::CursorFixed, WHITE, BLUE, true, NONE).cursor(),
            set(Slot::CursorData, WHITE, BLUE, true, NONE).cursor(),
            set(Slot::Title, BLACK, CYAN, false, NONE),
            set(Slot::ExpandedHeader, WHITE, BLUE, false, NONE),
            set(Slot::Footer, BLACK, WHITE, false, NONE),
            set(Slot::FooterCursor, WHITE, BLUE, true, NONE).cursor(),
            set(Slot::CursorLine, WHITE, BLUE, false, NONE),
            set(Slot::BottomBar, WHITE, BLUE, false, NONE),
            set(Slot::BottomBarLight, WHITE, BLUE, true, NONE),
            set(Slot::Bookmark, WHITE, RED, true, NONE),
            set(Slot::SearchMatch, YELLOW, GREEN, true, NONE),
            set(Slot::PatternData, BLACK, GREEN, false, NONE),
            set(Slot::PatternLine, BLACK, GREEN, false, NONE),
            set(Slot::SearchMatchPlain, YELLOW, GREEN, true, NONE),
            set(Slot::SearchMatchCursor, YELLOW, CYAN, true, NONE),
            set(Slot::SearchMatchCursorFixed, WHITE, BLACK, true, NONE).cursor(),
            set(Slot::CrossCursor, WHITE, BLACK, true, NONE).cursor(),
            set(Slot::CrossCursorLine, WHITE, BLACK, false, NONE),
            set(Slot::VerticalCursorPattern, GREEN, BLACK, true, REVERSE).cursor(),
            set(Slot::VerticalCursorPatternLine, GREEN, BLACK, true, REVERSE),
            set(Slot::Input, WHITE, BLACK, true, REVERSE),
            set(Slot::BookmarkLine, WHITE, RED, true, NONE),
        ],
    },
    ThemeSpec {
        id: ThemeId(5),
        name: "Mutt",
        default_colors: true,
        custom_colors: &[],
        slots: &[
            set(Slot::Frame, DEFAULT, DEFAULT, false, NONE),
            set(Slot::TopBar, GREEN, BLUE, true, NONE),
            set(Slot::Data, DEFAULT, DEFAULT, false, NONE),
            set(Slot::Labels, CYAN, DEFAULT, true, NONE).labels(),
            set(Slot::CursorFixed, BLACK, CYAN, false, NONE),
            set(Slot::CursorData, BLACK, CYAN, false, NONE),
            set(Slot::Title, GREEN, BLUE, true, NONE),
            set(Slot::ExpandedHeader, BLACK, BLUE, false, NONE),
            set(Slot::Footer, BLACK, CYAN, false, NONE),
            set(Slot::FooterCursor, BLACK, CYAN, false, NONE).cursor(),
            set(Slot::CursorLine, DEFAULT, CYAN, false, NONE),
            set(Slot::BottomBar, BLACK, CYAN, false, NONE),
            set(Slot::BottomBarLight, BLACK, CYAN, false, NONE),
            set(Slot::Bookmark, WHITE, RED, true, NONE),
            set(Slot::SearchMatch, YELLOW, GREEN, true, NONE),
            set(Slot::PatternData, BLACK, GREEN, false, NONE),
            set(Slot::PatternLine, DEFAULT, GREEN, false, NONE),
            set(Slot::SearchMatchPlain, YELLOW, GREEN, true, NONE),
            set(Slot::SearchMatchCursor, YELLOW, CYAN, true, NONE),
            set(Slot::SearchMatchCursorFixed, WHITE, CYAN, true, NONE).cursor(),
            set(Slot::CrossCursor, WHITE, BLACK, false, NONE).cursor(),
            set(Slot::CrossCursorLine, WHITE, BLACK, false, NONE),
            set(Slot::VerticalCursorPattern, GREEN, BLACK, true, REVERSE).cursor(),
            set(Slot::VerticalCursorPatternLine, GREEN, WHITE, true, REVERSE),
            set(Slot::BookmarkLine, WHITE, RED, true, NONE),
        ],
    },
    ThemeSpec {
        id: ThemeId(6),
        name: "PC Fand",
        default_colors: false,
        custom_colors: &[],
        slots: &[
            set(Slot::Frame, WHITE, BLACK, false, NONE),
            set(Slot::TopBar, BLACK, CYAN, false, NONE),
            set(Slot::Data, WHITE, BLACK, false, NONE),
            set(Slot::Labels, CYAN, BLACK, true, NONE).labels(),
            set(Slot::CursorFixed, WHITE, BLUE, true, NONE).cursor(),
            set(Slot::CursorData, WHITE, BLUE, true, NONE).cursor(),
            set(Slot::Title, BLACK, CYAN, false, NONE),
            set(Slot::ExpandedHeader, WHITE, BLUE, false, NONE),
            set(Slot::Footer, CYAN, BLACK, false, NONE),
            set(Slot::FooterCursor, WHITE, BLUE, true, NONE).cursor(),
            set(Slot::CursorLine, WHITE, BLUE, false, NONE),
            set(Slot::BottomBar, WHITE, BLUE, false, NONE),
            set(Slot::BottomBarLight, WHITE, BLUE, true, NONE),
            set(Slot::Bookmark, WHITE, RED, true, NONE),
            set(Slot::SearchMatch, YELLOW, GREEN, true, NONE),
            set(Slot::PatternData, BLACK, GREEN, false, NONE),
            set(Slot::PatternLine, WHITE, GREEN, false, NONE),
            set(Slot::SearchMatchPlain, YELLOW, BLACK, true, NONE),
            set(Slot::SearchMatchCursor, CYAN, BLUE, false, NONE),
            set(Slot::SearchMatchCursorFixed, CYAN, BLUE, true, NONE).cursor(),
            set(Slot::CrossCursor, WHITE, CYAN, true, NONE).cursor(),
            set(Slot::CrossCursorLine, WHITE, CYAN, false, NONE),
            set(Slot::VerticalCursorPattern, GREEN, BLACK, true, REVERSE).cursor(),
            set(Slot::VerticalCursorPatternLine, GREEN, WHITE, true, REVERSE),
            set(Slot::Input, WHITE, BLACK, true, NONE),
            set(Slot::BookmarkLine, WHITE, RED, true, NONE),
        ],
    },
    ThemeSpec {
        id: ThemeId(7),
        name: "Green",
        default_colors: false,
        custom_colors: &[],
        slots: &[
            set(Slot::Frame, GREEN, BLACK, false, NONE),
            set(Slot::TopBar, CYAN, BLACK, false, NONE),
            set(Slot::Data, GREEN, BLACK, false, NONE),
            set(Slot::Labels, GREEN, BLACK, true, NONE).labels(),
            set(Slot::CursorFixed, WHITE, GREEN, true, NONE).cursor(),
            set(Slot::CursorData, WHITE, GREEN, true, NONE).cursor(),
            set(Slot::Title, CYAN, BLACK, false, NONE),
            set(Slot::ExpandedHeader, WHITE, BLUE, false, NONE),
            set(Slot::Footer, CYAN, BLACK, false, NONE),
            set(Slot::FooterCursor, WHITE, GREEN, true, NONE).cursor(),
            set(Slot::CursorLine, GREEN, GREEN, true, NONE),
            set(Slot::BottomBar, WHITE, GREEN, true, NONE),
            set(Slot::BottomBarLight, WHITE, GREEN, true, NONE),
            set(Slot::Bookmark, WHITE, RED, true, NONE),
            set(Slot::SearchMatch, WHITE, CYAN, true, NONE),
            set(Slot::PatternData, BLACK, CYAN, false, NONE),
            set(Slot::PatternLine, GREEN, CYAN, false, NONE),
            set(Slot::SearchMatchPlain, CYAN, BLACK, false, NONE),
            set(Slot::SearchMatchCursor, CYAN, GREEN, false, NONE),
            set(Slot::SearchMatchCursorFixed, WHITE, BLACK, true, NONE).cursor(),
            set(Slot::RowNumber, CYAN, BLACK, false, NONE),
            set(Slot::CrossCursor, GREEN, BLACK, true, REVERSE).cursor(),
            set(Slot::CrossCursorLine, GREEN, GREEN, true, REVERSE),
            set(Slot::VerticalCursorPattern, CYAN, BLACK, true, REVERSE).cursor(),
            set(Slot::VerticalCursorPatternLine, CYAN, GREEN, true, REVERSE),
            set(Slot::Input, WHITE, BLACK, true, NONE),
            set(Slot::BookmarkLine, WHITE, RED, true, NONE),
            set(Slot::ScrollbarArrow, GREEN, BLACK, true, NONE),
            set(Slot::ScrollbarTrack, GREEN, BLACK, false, NONE),
            set(Slot::ScrollbarSlider, GREEN, BLACK, false, REVERSE),
            set(Slot::ScrollbarActiveSlider, GREEN, BLACK, true, REVERSE),
            set(Slot::Selection, GREEN, BLACK, true, Style::DIM.union(Style::REVERSE)),
            set(Slot::SelectionCursor, GREEN, BLACK, true, REVERSE).cursor(),
        ],
    },
    ThemeSpec {
        id: ThemeId(8),
        name: "Blue",
        default_colors: false,
        custom_colors: &[],
        slots: &[
            set(Slot::Frame, CYAN, BLUE, false, NONE),
            set(Slot::TopBar, WHITE, BLUE, false, NONE),
            set(Slot::Data, WHITE, BLUE, false, NONE),
            set(Slot::Labels, WHITE, BLUE, true, NONE).labels(),
            set(Slot::CursorFixed, WHITE, CYAN, true, NONE).cursor(),
            set(Slot::CursorData, WHITE, CYAN, true, NONE).cursor(),
            set(Slot::Title, WHITE, BLUE, false, NONE),
            set(Slot::ExpandedHeader, WHITE, BLUE, false, NONE),
            set(Slot::Footer, WHITE, BLUE, false, NONE),
            set(Slot::FooterCursor, WHITE, CYAN, true, NONE).cursor(),
            set(Slot::CursorLine, CYAN, CYAN, true, NONE),
            set(Slot::BottomBar, WHITE, CYAN, true, NONE),
            set(Slot::BottomBarLight, WHITE, CYAN, true, NONE),
            set(Slot::Bookmark, WHITE, RED, true, NONE),
            set(Slot::SearchMatch, YELLOW, GREEN, true, NONE),
            set(Slot::PatternData, BLACK, GREEN, false, NONE),
            set(Slot::PatternLine, CYAN, GREEN, true, NONE),
            set(Slot::SearchMatchPlain, CYAN, BLUE, false, NONE),
            set(Slot::SearchMatchCursor, YELLOW, CYAN, true, NONE),
            set(Slot::SearchMatchCursorFixed, YELLOW, BLACK, true, NONE),
            set(Slot::RowNumber, CYAN, BLUE, false, NONE),
            set(Slot::CrossCursor, CYAN, BLACK, true, REVERSE).cursor(),
            set(Slot::CrossCursorLine, CYAN, CYAN, true, REVERSE),
            set(Slot::VerticalCursorPattern, GREEN, BLACK, true, REVERSE).cursor(),
            set(Slot::VerticalCursorPatternLine, GREEN, CYAN, true, REVERSE),
            set(Slot::Input, WHITE, BLACK, true, REVERSE),
            set(Slot::BookmarkLine, WHITE, RED, true, NONE),
            set(Slot::ScrollbarArrow, WHITE, BLACK, true, REVERSE),
            set(Slot::ScrollbarTrack, WHITE, WHITE, false, NONE),
            set(Slot::ScrollbarSlider, WHITE, WHITE, true, REVERSE),
            set(Slot::ScrollbarActiveSlider, BLACK, BLACK, false, REVERSE),
        ],
    },
    ThemeSpec {
        id: ThemeId(9),
        name: "Word Perfect",
        default_colors: false,
        custom_colors: &[],
        slots: &[
            set(Slot::Frame, WHITE, BLUE, false, NONE),
            set(Slot::TopBar, BLACK, WHITE, false, NONE),
            set(Slot::Data, WHITE, BLUE, false, NONE),
            set(Slot::Labels, CYAN, BLUE, true, NONE).labels(),
            set(Slot::CursorFixed, WHITE, CYAN, true, NONE).cursor(),
            set(Slot::CursorData, WHITE, CYAN, true, NONE).cursor(),
            set(Slot::Title, BLACK, WHITE, false, NONE),
            set(Slot::ExpandedHeader, WHITE, BLUE, false, NONE),
            set(Slot::Footer, GREEN, BLUE, true, NONE),
            set(Slot::FooterCursor, WHITE, CYAN, true, NONE).cursor(),
            set(Slot::CursorLine, WHITE, CYAN, false, NONE),
            set(Slot::BottomBar, WHITE, CYAN, true, NONE),
            set(Slot::BottomBarLight, WHITE, CYAN, true, NONE),
            set(Slot::Bookmark, WHITE, RED, true, NONE),
            set(Slot::SearchMatch, YELLOW, GREEN, true, NONE),
            set(Slot::PatternData, BLACK, GREEN, false, NONE),
            set(Slot::PatternLine, WHITE, GREEN, false, NONE),
            set(Slot::SearchMatchPlain, YELLOW, BLUE, true, NONE),
            set(Slot::SearchMatchCursor, YELLOW, CYAN, true, NONE),
            set(Slot::SearchMatchCursorFixed, YELLOW, BLACK, true, NONE),
            set(Slot::RowNumber, WHITE, BLUE, false, NONE),
            set(Slot::CrossCursor, CYAN, BLACK, true, REVERSE).cursor(),
            set(Slot::CrossCursorLine, CYAN, WHITE, true, REVERSE),
            set(Slot::VerticalCursorPattern, GREEN, BLACK, true, REVERSE).cursor(),
            set(Slot::VerticalCursorPatternLine, GREEN, WHITE, true, REVERSE),
            set(Slot::BookmarkLine, WHITE, RED, true, NONE),
            set(Slot::ScrollbarArrow, WHITE, BLUE, true, NONE),
            set(Slot::ScrollbarTrack, WHITE, BLUE, false, NONE),
            set(Slot::ScrollbarSlider, WHITE, WHITE, false, REVERSE),
            set(Slot::ScrollbarActiveSlider, WHITE, WHITE, true, REVERSE),
        ],
    },
    ThemeSpec {
        id: ThemeId(10),
        name: "Low contrast",
        default_colors: false,
        custom_colors: &[],
        slots: &[
            set(Slot::Frame, BLUE, CYAN, false, NONE),
            set(Slot::TopBar, BLUE, CYAN, false, NONE),
            set(Slot::Data, BLUE, CYAN, false, NONE),
            set(Slot::Labels, WHITE, CYAN, true, NONE).labels(),
            set(Slot::CursorFixed, WHITE, BLUE, true, NONE).cursor(),
            set(Slot::CursorData, WHITE, BLUE, true, NONE).cursor(),
            set(Slot::Title, BLUE, CYAN, false, NONE),
            set(Slot::ExpandedHeader, WHITE, BLUE, false, NONE),
            set(Slot::Footer, BLUE, CYAN, false, NONE),
            set(Slot::FooterCursor, WHITE, BLUE, true, NONE).cursor(),
            set(Slot::CursorLine, CYAN, BLUE, false, NONE),
            set(Slot::BottomBar, WHITE, BLUE, false, NONE),
            set(Slot::BottomBarLight, WHITE, BLUE, true, NONE),
            set(Slot::Bookmark, WHITE, RED, true, NONE),
            set(Slot::SearchMatch, YELLOW, GREEN, true, NONE),
            set(Slot::PatternData, BLACK, GREEN, false, NONE),
            set(Slot::PatternLine, BLUE, GREEN, false, NONE),
            set(Slot::SearchMatchPlain, YELLOW, CYAN, true, NONE),
            set(Slot::SearchMatchCursor, YELLOW, BLUE, true, NONE),
            set(Slot::SearchMatchCursorFixed, WHITE, BLACK, true, NONE),
            set(Slot::RowNumber, BLUE, CYAN, false, NONE),
            set(Slot::CrossCursor, WHITE, BLACK, true, NONE).cursor(),
            set(Slot::CrossCursorLine, CYAN, BLACK, false, NONE),
            set(Slot::VerticalCursorPattern, GREEN, BLACK, true, REVERSE).cursor(),
            set(Slot::VerticalCursorPatternLine, GREEN, BLUE, true, REVERSE),
            set(Slot::Input, BLACK, CYAN, false, NONE),
            set(Slot::BookmarkLine, WHITE, RED, true, NONE),
            set(Slot::ScrollbarArrow, BLUE, CYAN, false, NONE),
            set(Slot::ScrollbarTrack, BLACK, CYAN, true, NONE),
            set(Slot::ScrollbarSlider, CYAN, BLACK, true, REVERSE),
            set(Slot::ScrollbarActiveSlider, WHITE, BLACK, true, REVERSE),
            set(Slot::Selection, CYAN, BLACK, true, Style::DIM.union(Style::REVERSE)),
            set(Slot::SelectionCursor, GREEN, BLACK, false, REVERSE).cursor(),
        ],
    },
    ThemeSpec {
        id: ThemeId(11),
        name: "Dark cyan",
        default_colors: false,
        custom_colors: &[],
        slots: &[
            set(Slot::Frame, CYAN, BLACK, false, NONE),
            set(Slot::TopBar, WHITE, BLUE, true, NONE),
            set(Slot::Data, CYAN, BLACK, false, NONE),
            set(Slot::Labels, CYAN, BLACK, true, NONE).labels(),
            set(Slot::CursorFixed, WHITE, MAGENTA, true, NONE).cursor(),
            set(Slot::CursorData, WHITE, MAGENTA, true, NONE).cursor(),
            set(Slot::Title, WHITE, BLUE, true, NONE),
            set(Slot::ExpandedHeader, WHITE, BLUE, true, NONE),
            set(Slot::Footer, WHITE, BLACK, false, NONE),
            set(Slot::FooterCursor, WHITE, MAGENTA, true, NONE).cursor(),
            set(Slot::CursorLine, WHITE, MAGENTA, false, NONE),
            set(Slot::BottomBar, WHITE, MAGENTA, true, NONE),
            set(Slot::BottomBarLight, WHITE, MAGENTA, true, NONE),
            set(Slot::Bookmark, WHITE, RED, true, NONE),
            set(Slot::SearchMatch, YELLOW, GREEN, true, NONE),
            set(Slot::PatternData, BLACK, GREEN, false, NONE),
            set(Slot::PatternLine, CYAN, GREEN, true, NONE),
            set(Slot::SearchMatchPlain, YELLOW, BLACK, true, NONE),
            set(Slot::SearchMatchCursor, CYAN, MAGENTA, false, NONE),
            set(Slot::SearchMatchCursorFixed, WHITE, BLUE, true, NONE),
            set(Slot::CrossCursor, WHITE, BLUE, true, NONE).cursor(),
            set(Slot::CrossCursorLine, CYAN, BLUE, false, NONE),
            set(Slot::VerticalCursorPattern, GREEN, BLACK, true, REVERSE).cursor(),
            set(Slot::VerticalCursorPatternLine, GREEN, CYAN, true, REVERSE),
            set(Slot::Input, WHITE, BLACK, true, NONE),
            set(Slot::BookmarkLine, WHITE, RED, true, NONE),
            set(Slot::ScrollbarArrow, BLACK, WHITE, false, NONE),
            set(Slot::ScrollbarTrack, CYAN, BLUE, false, NONE),
            set(Slot::ScrollbarSlider, WHITE, WHITE, false, REVERSE),
            set(Slot::ScrollbarActiveSlider, WHITE, WHITE, true, REVERSE),
            set(Slot::Selection, CYAN, BLACK, true, REVERSE),
            set(Slot::SelectionCursor, CYAN, BLUE, true, NONE).cursor(),
        ],
    },
    ThemeSpec {
        id: ThemeId(12),
        name: "Paradox",
        default_colors: false,
        custom_colors: &[],
        slots: &[
            set(Slot::Frame, BLUE, CYAN, false, NONE),
            set(Slot::TopBar, BLUE, CYAN, false, NONE),
            set(Slot::Data, WHITE, CYAN, true, NONE),
            set(Slot::Labels, BLUE, CYAN, false, NONE).labels(),
            set(Slot::CursorFixed, WHITE, BLUE, true, NONE).cursor(),
            set(Slot::CursorData, WHITE, BLUE, true, NONE).cursor(),
            set(Slot::Title, BLUE, CYAN, false, NONE),
            set(Slot::ExpandedHeader, WHITE, BLUE, false, NONE),
            set(Slot::Footer, BLUE, CYAN, false, NONE),
            set(Slot::FooterCursor, WHITE, BLUE, true, NONE).cursor(),
            set(Slot::CursorLine, CYAN, BLUE, false, NONE),
            set(Slot::BottomBar, WHITE, BLUE, false, NONE),
            set(Slot::BottomBarLight, WHITE, BLUE, true, NONE),
            set(Slot::Bookmark, WHITE, RED, true, NONE),
            set(Slot::SearchMatch, YELLOW, GREEN, true, NONE),
            set(Slot::PatternData, BLACK, GREEN, false, NONE),
            set(Slot::PatternLine, BLUE, GREEN, false, NONE),
            set(Slot::SearchMatchPlain, YELLOW, CYAN, true, NONE),
            set(Slot::SearchMatchCursor, CYAN, BLUE, false, NONE),
            set(Slot::SearchMatchCursorFixed, WHITE, MAGENTA, true, NONE).cursor(),
            set(Slot::RowNumber, CYAN, CYAN, true, NONE),
            set(Slot::CrossCursor, WHITE, BLACK, true, NONE).cursor(),
            set(Slot::CrossCursorLine, CYAN, BLACK, false, NONE),
            set(Slot::VerticalCursorPattern, GREEN, BLACK, true, REVERSE).cursor(),
            set(Slot::VerticalCursorPatternLine, GREEN, BLUE, true, REVERSE),
            set(Slot::BookmarkLine, WHITE, RED, true, NONE),
            set(Slot::ScrollbarArrow, BLUE, CYAN, false, NONE),
            set(Slot::ScrollbarTrack, CYAN, BLUE, false, NONE),
            set(Slot::ScrollbarSlider, BLUE, CYAN, false, NONE),
            set(Slot::ScrollbarActiveSlider, CYAN, BLUE, true, REVERSE),
            set(Slot::Selection, CYAN, BLACK, true, REVERSE),
            set(Slot::SelectionCursor, CYAN, BLACK, true, Style::DIM.union(Style::REVERSE)).cursor(),
        ],
    },
    ThemeSpec {
        id: ThemeId(13),
        name: "DBase retro",
        default_colors: false,
        custom_colors: &[],
        slots: &[
            set(Slot::Frame, WHITE, BLUE, false, NONE),
            set(Slot::TopBar, WHITE, BLACK, false, NONE),
            set(Slot::Data, WHITE, BLUE, true, NONE),
            set(Slot::Labels, WHITE, BLUE, true, NONE).labels(),
            set(Slot::CursorFixed, YELLOW, CYAN, true, NONE).cursor(),
            set(Slot::CursorData, YELLOW, CYAN, true, NONE).cursor(),
            set(Slot::Title, WHITE, BLACK, false, NONE),
            set(Slot::ExpandedHeader, WHITE, BLUE, false, NONE),
            set(Slot::Footer, WHITE, BLUE, false, NONE),
            set(Slot::FooterCursor, BLACK, CYAN, false, NONE).cursor(),
            set(Slot::CursorLine, WHITE, CYAN, false, NONE),
            set(Slot::BottomBar, WHITE, BLACK, true, NONE),
            set(Slot::BottomBarLight, WHITE, BLACK, true, NONE),
            set(Slot::Bookmark, WHITE, RED, true, NONE),
            set(Slot::SearchMatch, YELLOW, GREEN, true, NONE),
            set(Slot::PatternData, BLACK, GREEN, false, NONE),
            set(Slot::PatternLine, WHITE, GREEN, false, NONE),
            set(Slot::SearchMatchPlain, CYAN, BLUE, false, NONE),
            set(Slot::SearchMatchCursor, WHITE, CYAN, true, NONE),
            set(Slot::SearchMatchCursorFixed, WHITE, BLACK, true, NONE).cursor(),
            set(Slot::CrossCursor, CYAN, BLACK, true, REVERSE).cursor(),
            set(Slot::CrossCursorLine, CYAN, WHITE, true, REVERSE),
            set(Slot::VerticalCursorPattern, GREEN, BLACK, true, REVERSE).cursor(),
            set(Slot::VerticalCursorPatternLine, GREEN, WHITE, true, REVERSE),
            set(Slot::Input, BLACK, CYAN, false, NONE),
            set(Slot::BookmarkLine, WHITE, RED, true, NONE),
            set(Slot::ScrollbarArrow, WHITE, BLUE, true, NONE),
            set(Slot::ScrollbarTrack, CYAN, BLUE, false, NONE),
            set(Slot::ScrollbarSlider, WHITE, BLUE, false, REVERSE),
            set(Slot::ScrollbarActiveSlider, WHITE, BLACK, true, REVERSE),
            set(Slot::Selection, WHITE, MAGENTA, true, NONE),
            set(Slot::SelectionCursor, MAGENTA, BLACK, true, REVERSE).cursor(),
        ],
    },
    ThemeSpec {
        id: ThemeId(14),
        name: "DBase retro magenta",
        default_colors: false,
        custom_colors: &[],
        slots: &[
            set(Slot::Frame, WHITE, BLUE, false, NONE),
            set(Slot::TopBar, WHITE, BLUE, false, NONE),
            set(Slot::Data, WHITE, BLUE, true, NONE),
            set(Slot::Labels, MAGENTA, BLUE, true, NONE).labels(),
            set(Slot::CursorFixed, BLACK, CYAN, false, NONE),
            set(Slot::CursorData, BLACK, CYAN, false, NONE),
            set(Slot::Title, WHITE, BLUE, false, NONE),
            set(Slot::ExpandedHeader, WHITE, BLUE, false, NONE),
            set(Slot::Footer, WHITE, BLUE, false, NONE),
            set(Slot::FooterCursor, BLACK, CYAN, false, NONE).cursor(),
            set(Slot::CursorLine, WHITE, CYAN, false, NONE),
            set(Slot::BottomBar, WHITE, BLACK, true, NONE),
            set(Slot::BottomBarLight, WHITE, BLACK, true, NONE),
            set(Slot::Bookmark, WHITE, RED, true, NONE),
            set(Slot::SearchMatch, YELLOW, GREEN, true, NONE),
            set(Slot::PatternData, BLACK, GREEN, false, NONE),
            set(Slot::PatternLine, WHITE, GREEN, false, NONE),
            set(Slot::SearchMatchPlain, CYAN, BLUE, false, NONE),
            set(Slot::SearchMatchCursor, WHITE, CYAN, true, NONE),
            set(Slot::SearchMatchCursorFixed, WHITE, BLACK, false, NONE),
            set(Slot::RowNumber, WHITE, BLUE, false, NONE),
            set(Slot::CrossCursor, CYAN, BLACK, true, REVERSE).cursor(),
            set(Slot::CrossCursorLine, CYAN, WHITE, true, REVERSE),
            set(Slot::VerticalCursorPattern, GREEN, BLACK, true, REVERSE).cursor(),
            set(Slot::VerticalCursorPatternLine, GREEN, WHITE, true, REVERSE),
            set(Slot::Input, WHITE, BLUE, true, NONE),
            set(Slot::BookmarkLine, WHITE, RED, true, NONE),
            set(Slot::ScrollbarArrow, WHITE, BLUE, true, NONE),
            set(Slot::ScrollbarTrack, CYAN, BLUE, false, NONE),
            set(Slot::ScrollbarSlider, WHITE, BLUE, false, REVERSE),
            set(Slot::ScrollbarActiveSlider, MAGENTA, BLACK, true, REVERSE),
        ],
    },
    ThemeSpec {
        id: ThemeId(15),
        name: "Red",
        default_colors: false,
        custom_colors: &[],
        slots: &[
            set(Slot::Frame, BLACK, WHITE, false, NONE),
            set(Slot::TopBar, BLACK, WHITE, false, NONE),
            set(Slot::Data, BLACK, WHITE, false, NONE),
            set(Slot::Labels, RED, WHITE, false, DIM),
            set(Slot::CursorFixed, WHITE, RED, true, NONE).cursor(),
            set(Slot::CursorData, WHITE, RED, true, NONE).cursor(),
            set(Slot::Title, BLACK, WHITE, false, NONE),
            set(Slot::ExpandedHeader, WHITE, BLUE, false, NONE),
            set(Slot::Footer, BLACK, WHITE, false, NONE),
            set(Slot::FooterCursor, WHITE, RED, true, NONE).cursor(),
            set(Slot::CursorLine, BLACK, RED, false, NONE),
            set(Slot::BottomBar, WHITE, BLACK, false, NONE),
            set(Slot::BottomBarLight, WHITE, BLACK, true, NONE),
            set(Slot::Bookmark, YELLOW, RED, true, Style::REVERSE.union(Style::BOLD)),
            set(Slot::SearchMatch, YELLOW, BLACK, true, NONE),
            set(Slot::PatternData, WHITE, BLACK, true, NONE),
            set(Slot::PatternLine, WHITE, BLACK, true, NONE),
            set(Slot::SearchMatchPlain, CYAN, BLUE, true, NONE),
            set(Slot::SearchMatchCursor, WHITE, CYAN, true, NONE),
            set(Slot::SearchMatchCursorFixed, WHITE, BLACK, false, NONE),
            set(Slot::CrossCursor, WHITE, BLACK, true, NONE).cursor(),
            set(Slot::CrossCursorLine, RED, BLACK, false, NONE),
            set(Slot::VerticalCursorPattern, RED, BLACK, true, REVERSE).cursor(),
            set(Slot::VerticalCursorPatternLine, RED, BLACK, true, REVERSE),
            set(Slot::Input, WHITE, BLACK, true, REVERSE),
            set(Slot::BookmarkLine, YELLOW, RED, true, Style::REVERSE.union(Style::BOLD)),
            set(Slot::ScrollbarArrow, BLACK, WHITE, false, NONE),
            set(Slot::ScrollbarTrack, BLACK, WHITE, true, NONE),
            set(Slot::ScrollbarSlider, BLACK, BLACK, true, Style::REVERSE.union(Style::DIM)),
            set(Slot::ScrollbarActiveSlider, RED, BLACK, false, REVERSE),
            set(Slot::Selection, YELLOW, BLACK, true, REVERSE),
            set(Slot::SelectionCursor, RED, BLACK, true, REVERSE).cursor(),
        ],
    },
    ThemeSpec {
        id: ThemeId(16),
        name: "Simple",
        default_colors: true,
        custom_colors: &[],
        slots: &[
            set(Slot::Frame, DEFAULT, DEFAULT, false, NONE),
            set(Slot::TopBar, DEFAULT, DEFAULT, false, NONE),
            set(Slot::Data, DEFAULT, DEFAULT, false, NONE),
            set(Slot::Labels, DEFAULT, DEFAULT, true, ITALIC).labels(),
            set(Slot::CursorFixed, DEFAULT, DEFAULT, true, REVERSE).cursor(),
            set(Slot::CursorData, DEFAULT, DEFAULT, true, REVERSE).cursor(),
            set(Slot::Title, DEFAULT, DEFAULT, false, NONE),
            set(Slot::ExpandedHeader, DEFAULT, DEFAULT, false, NONE),
            set(Slot::Footer, DEFAULT, DEFAULT, false, NONE),
            set(Slot::FooterCursor, DEFAULT, DEFAULT, true, REVERSE).cursor(),
            set(Slot::CursorLine, DEFAULT, DEFAULT, false, REVERSE),
            set(Slot::BottomBar, DEFAULT, DEFAULT, false, NONE),
            set(Slot::BottomBarLight, DEFAULT, DEFAULT, true, NONE),
            set(Slot::Bookmark, DEFAULT, DEFAULT, false, UNDERLINE),
            set(Slot::SearchMatch, DEFAULT, DEFAULT, false, UNDERLINE),
            set(Slot::PatternData, DEFAULT, DEFAULT, false, NONE),
            set(Slot::PatternLine, DEFAULT, DEFAULT, false, NONE),
            set(Slot::SearchMatchPlain, DEFAULT, DEFAULT, false, UNDERLINE),
            set(Slot::SearchMatchCursor, DEFAULT, DEFAULT, false, Style::UNDERLINE.union(Style::REVERSE).union(Style::BOLD)),
            set(Slot::SearchMatchCursorFixed, DEFAULT, DEFAULT, false, Style::UNDERLINE.union(Style::REVERSE).union(Style::BOLD)),
            set(Slot::RowNumber, DEFAULT, DEFAULT, false, NONE),
            set(Slot::CrossCursor, DEFAULT, DEFAULT, true, NONE).cursor(),
            set(Slot::CrossCursorLine, DEFAULT, DEFAULT, false, NONE),
            set(Slot::VerticalCursorPattern, DEFAULT, DEFAULT, true, REVERSE).cursor(),
            set(Slot::VerticalCursorPatternLine, DEFAULT, DEFAULT, true, REVERSE),
            set(Slot::Input, DEFAULT, DEFAULT, false, NONE),
            set(Slot::BookmarkLine, DEFAULT, DEFAULT, false, UNDERLINE),
            set(Slot::ScrollbarArrow, DEFAULT, DEFAULT, true, NONE),
            set(Slot::ScrollbarTrack, DEFAULT, DEFAULT, false, DIM),
            set(Slot::ScrollbarSlider, DEFAULT, DEFAULT, false, REVERSE),
            set(Slot::ScrollbarActiveSlider, DEFAULT, DEFAULT, true, REVERSE),
            set(Slot::Selection, DEFAULT, DEFAULT, false, Style::DIM.union(Style::REVERSE)),
            set(Slot::SelectionCursor, DEFAULT, DEFAULT, false, Style::REVERSE.union(Style::UNDERLINE)).cursor(),
        ],
    },
    ThemeSpec {
        id: ThemeId(17),
        name: "Solar dark",
        default_colors: false,
        custom_colors: &[
            CustomColor::new(235, 27, 212, 259),
            CustomColor::new(234, 0, 169, 212),
            CustomColor::new(240, 345, 431, 459),
            CustomColor::new(244, 557, 616, 624),
            CustomColor::new(245, 576, 631, 631),
            CustomColor::new(254, 933, 910, 835),
            CustomColor::new(136, 710, 537, 0),
            CustomColor::new(137, 900, 627, 0),
            CustomColor::new(138, 800, 627, 0),
            CustomColor::new(33, 149, 545, 824),
            CustomColor::new(160, 863, 196, 184),
        ],
        slots: &[
            set(Slot::Frame, ix(245), ix(234), false, NONE),
            set(Slot::TopBar, ix(245), ix(235), false, NONE),
            set(Slot::Data, ix(244), ix(234), false, NONE),
            set(Slot::Labels, ix(33), ix(234), false, NONE).labels(),
            set(Slot::CursorFixed, ix(235), ix(136), false, NONE).cursor(),
            set(Slot::CursorData, ix(235), ix(136), false, NONE).cursor(),
            set(Slot::Title, ix(33), ix(235), false, NONE),
            set(Slot::ExpandedHeader, ix(33), ix(235), false, NONE),
            set(Slot::Footer, ix(61), ix(234), false, NONE),
            set(Slot::FooterCursor, ix(235), ix(136), false, NONE).cursor(),
            set(Slot::CursorLine, ix(235), ix(136), false, NONE),
            set(Slot::BottomBar, DEFAULT, DEFAULT, false, NONE),
            set(Slot::BottomBarLight, DEFAULT, DEFAULT, false, NONE),
            set(Slot::Bookmark, ix(230), ix(160), false, NONE),
            set(Slot::SearchMatch, ix(254), ix(235), false, NONE),
            set(Slot::PatternData, ix(245), ix(235), false, NONE),
            set(Slot::PatternLine, ix(245), ix(235), false, NONE),
            set(Slot::SearchMatchPlain, DEFAULT, DEFAULT, false, NONE),
            set(Slot::SearchMatchCursor, DEFAULT, DEFAULT, false, NONE),
            set(Slot::SearchMatchCursorFixed, ix(254), ix(136), false, NONE),
            set(Slot::RowNumber, ix(244), ix(235), false, NONE),
            set(Slot::CrossCursor, ix(235), ix(137), false, NONE),
            set(Slot::CrossCursorLine, ix(235), ix(137), false, NONE),
            set(Slot::VerticalCursorPattern, ix(235), ix(138), false, NONE),
            set(Slot::VerticalCursorPatternLine, ix(235), ix(138), false, NONE),
            set(Slot::BookmarkLine, ix(230), ix(160), false, NONE),
        ],
    },
    ThemeSpec {
        id: ThemeId(18),
        name: "Solar light",
        default_colors: false,
        custom_colors: &[
            CustomColor::new(234, 13, 98, 119),
            CustomColor::new(235, 18, 141, 172),
            CustomColor::new(240, 110, 146, 200),
            CustomColor::new(245, 576, 631, 631),
            CustomColor::new(244, 557, 616, 624),
            CustomColor::new(136, 710, 537, 0),
            CustomColor::new(160, 863, 196, 184),
            CustomColor::new(137, 880, 607, 0),
            CustomColor::new(138, 780, 607, 0),
        ],
        slots: &[
            set(Slot::Frame, ix(234), ix(245), false, NONE),
            set(Slot::TopBar, ix(235), ix(244), false, NONE),
            set(Slot::Data, ix(234), ix(245), false, NONE),
            set(Slot::Labels, ix(17), ix(245), false, NONE).labels(),
            set(Slot::CursorFixed, ix(235), ix(136), false, NONE).cursor(),
            set(Slot::CursorData, ix(235), ix(136), false, NONE).cursor(),
            set(Slot::Title, ix(17), ix(244), false, NONE),
            set(Slot::ExpandedHeader, ix(17), ix(235), false, NONE),
            set(Slot::Footer, ix(17), ix(245), false, NONE),
            set(Slot::FooterCursor, ix(235), ix(136), false, NONE).cursor(),
            set(Slot::CursorLine, ix(235), ix(136), false, NONE),
            set(Slot::BottomBar, DEFAULT, DEFAULT, false, NONE),
            set(Slot::BottomBarLight, DEFAULT, DEFAULT, false, NONE),
            set(Slot::Bookmark, ix(255), ix(160), false, NONE),
            set(Slot::SearchMatch, ix(255), ix(244), false, NONE),
            set(Slot::PatternData, ix(240), ix(244), false, NONE),
            set(Slot::PatternLine, ix(240), ix(244), false, NONE),
            set(Slot::SearchMatchPlain, DEFAULT, DEFAULT, false, NONE),
            set(Slot::SearchMatchCursor, DEFAULT, DEFAULT, false, NONE),
            set(Slot::SearchMatchCursorFixed, ix(255), ix(136), false, NONE),
            set(Slot::RowNumber, ix(235), ix(244), false, NONE),
            set(Slot::CrossCursor, ix(235), ix(137), false, NONE),
            set(Slot::CrossCursorLine, ix(235), ix(137), false, NONE),
            set(Slot::VerticalCursorPattern, ix(235), ix(138), false, NONE),
            set(Slot::VerticalCursorPatternLine, ix(235), ix(138), false, NONE),
            set(Slot::BookmarkLine, ix(255), ix(160), false, NONE),
        ],
    },
    ThemeSpec {
        id: ThemeId(19),
        name: "Gruvbox light",
        default_colors: false,
        custom_colors: &[
            CustomColor::from_rgb(200, 0xff, 0xff, 0xd7),
            CustomColor::from_rgb(201, 0x26, 0x26, 0x26),
            CustomColor::from_rgb(202, 0xaf, 0xaf, 0x87),
            CustomColor::from_rgb(203, 0x4e, 0x4e, 0x4e),
            CustomColor::from_rgb(204, 0xd7, 0xd6, 0xaf),
            CustomColor::from_rgb(205, 0xeb, 0xdb, 0xb2),
            CustomColor::from_rgb(206, 0xaf, 0xaf, 0xaf),
            CustomColor::from_rgb(207, 0xff, 0xff, 0xaf),
            CustomColor::from_rgb(210, 0x87, 0x00, 0x00),
            CustomColor::from_rgb(211, 0xd7, 0x5f, 0x5f),
            CustomColor::from_rgb(212, 0x00, 0x5f, 0x87),
            CustomColor::from_rgb(213, 0xfb, 0xf1, 0xc7),
            CustomColor::from_rgb(214, 0xd0, 0xcf, 0xa0),
            CustomColor::from_rgb(215, 0xff, 0xff, 0xff),
        ],
        slots: &[
            set(Slot::Frame, ix(204), ix(200), false, NONE),
            set(Slot::TopBar, ix(203), ix(202), false, NONE),
            set(Slot::Data, ix(201), ix(200), false, NONE),
            set(Slot::Labels, ix(210), ix(200), false, NONE).labels(),
            set(Slot::CursorFixed, ix(210), ix(205), false, NONE).cursor(),
            set(Slot::CursorData, ix(203), ix(205), false, NONE).cursor(),
            set(Slot::Title, ix(203), ix(202), false, NONE),
            set(Slot::ExpandedHeader, ix(17), ix(200), false, NONE),
            set(Slot::Footer, ix(206), ix(200), false, NONE),
            set(Slot::FooterCursor, ix(203), ix(205), false, NONE).cursor(),
            set(Slot::CursorLine, ix(206), ix(205), false, NONE),
            set(Slot::BottomBarLight, ix(203), ix(202), false, NONE),
            set(Slot::Bookmark, ix(215), ix(211), false, NONE),
            set(Slot::SearchMatch, ix(212), ix(204), false, NONE),
            set(Slot::PatternData, ix(201), ix(204), false, NONE),
            set(Slot::PatternLine, ix(206), ix(204), false, NONE),
            set(Slot::SearchMatchPlain, DEFAULT, DEFAULT, false, NONE),
            set(Slot::SearchMatchCursor, DEFAULT, DEFAULT, false, NONE),
            set(Slot::SearchMatchCursorFixed, ix(212), ix(205), false, NONE),
            set(Slot::RowNumber, ix(206), ix(207), false, NONE),
            set(Slot::CrossCursor, ix(203), ix(213), false, NONE),
            set(Slot::CrossCursorLine, ix(206), ix(213), false, NONE),
            set(Slot::VerticalCursorPattern, ix(201), ix(214), false, NONE),
            set(Slot::VerticalCursorPatternLine, ix(206), ix(214), false, NONE),
            set(Slot::BookmarkLine, ix(215), ix(211), false, NONE),
            set(Slot::Selection, ix(204), ix(201), false, REVERSE),
            set(Slot::SelectionCursor, ix(201), ix(202), false, NONE).cursor(),
        ],
    },
    ThemeSpec {
        id: ThemeId(20),
        name: "Tao",
        default_colors: false,
        custom_colors: &[
            CustomColor::from_rgb(200, 0xf1, 0xf1, 0xf1),
            CustomColor::from_rgb(201, 0x61, 0x61, 0x61),
            CustomColor::from_rgb(202, 0xfc, 0xfc, 0xfc),
            CustomColor::from_rgb(203, 0x17, 0x17, 0x17),
            CustomColor::from_rgb(204, 0x9e, 0x9e, 0x9e),
            CustomColor::from_rgb(205, 0x4e, 0x4e, 0x4e),
            CustomColor::from_rgb(213, 0xf6, 0xf6, 0xf6),
            CustomColor::from_rgb(206, 0x9e, 0x9e, 0x9e),
            CustomColor::from_rgb(207, 0xf6, 0xf6, 0xf6),
            CustomColor::from_rgb(210, 0x00, 0x00, 0x00),
            CustomColor::from_rgb(211, 0xd7, 0x5f, 0x5f),
            CustomColor::from_rgb(212, 0xff, 0xff, 0xff),
            CustomColor::from_rgb(215, 0xc3, 0xc3, 0xc3),
            CustomColor::from_rgb(214, 0xda, 0xda, 0xda),
            CustomColor::from_rgb(216, 0x25, 0x25, 0x25),
            CustomColor::from_rgb(217, 0x40, 0x40, 0x40),
            CustomColor::new(240, 40, 50, 200),
        ],
        slots: &[
            set(Slot::Frame, ix(204), ix(200), false, NONE),
            set(Slot::TopBar, ix(203), ix(202), false, NONE),
            set(Slot::Data, ix(201), ix(200), false, NONE),
            set(Slot::Labels, ix(210), ix(200), false, NONE).labels(),
            set(Slot::CursorFixed, ix(213), ix(205), false, NONE).cursor(),
            set(Slot::CursorData, ix(213), ix(205), false, NONE).cursor(),
            set(Slot::Title, ix(203), ix(202), false, NONE),
            set(Slot::ExpandedHeader, ix(17), ix(200), false, NONE),
            set(Slot::Footer, ix(206), ix(200), false, NONE),
            set(Slot::FooterCursor, ix(213), ix(205), false, NONE).cursor(),
            set(Slot::CursorLine, ix(204), ix(205), false, NONE),
            set(Slot::BottomBarLight, ix(203), ix(202), false, NONE),
            set(Slot::Bookmark, ix(212), ix(211), false, NONE),
            set(Slot::SearchMatch, ix(216), ix(214), false, NONE),
            set(Slot::PatternData, ix(201), ix(214), false, NONE),
            set(Slot::PatternLine, ix(206), ix(214), false, NONE),
            set(Slot::SearchMatchPlain, DEFAULT, DEFAULT, false, NONE),
            set(Slot::SearchMatchCursor, DEFAULT, DEFAULT, false, NONE),
            set(Slot::SearchMatchCursorFixed, ix(212), ix(205), false, NONE),
            set(Slot::RowNumber, ix(204), ix(207), false, NONE),
            set(Slot::BookmarkLine, ix(212), ix(211), false, NONE),
            set(Slot::CrossCursor, WHITE, BLACK, true, NONE).cursor(),
            set(Slot::CrossCursorLine, ix(204), BLACK, false, NONE),
            set(Slot::Input, WHITE, BLACK, true, REVERSE),
            set(Slot::VerticalCursorPattern, ix(213), ix(217), false, NONE),
            set(Slot::VerticalCursorPatternLine, ix(204), ix(217), false, NONE),
            set(Slot::Selection, ix(203), ix(206), false, NONE),
            set(Slot::SelectionCursor, ix(213), ix(203), false, NONE).cursor(),
        ],
    },
    ThemeSpec {
        id: ThemeId(21),
        name: "Flatwhite",
        default_colors: false,
        custom_colors: &[
            CustomColor::from_rgb(200, 0xf7, 0xf3, 0xee),
            CustomColor::from_rgb(201, 0x60, 0x5a, 0x52),
            CustomColor::from_rgb(202, 0xb9, 0xa9, 0x92),
            CustomColor::from_rgb(203, 0x17, 0x17, 0x17),
            CustomColor::from_rgb(204, 0xb9, 0xa9, 0x92),
            CustomColor::from_rgb(205, 0x6a, 0x4d, 0xff),
            CustomColor::from_rgb(213, 0xf6, 0xf6, 0xf6),
            CustomColor::from_rgb(206, 0x9e, 0x9e, 0x9e),
            CustomColor::from_rgb(207, 0xf7, 0xf3, 0xee),
            CustomColor::from_rgb(210, 0x09, 0x09, 0x08),
            CustomColor::from_rgb(211, 0xf7, 0xe0, 0xc3),
            CustomColor::from_rgb(212, 0x60, 0x5a, 0x52),
            CustomColor::from_rgb(215, 0xe2, 0xe9, 0xc1),
            CustomColor::from_rgb(214, 0xe2, 0xe9, 0xc1),
            CustomColor::from_rgb(216, 0x25, 0x25, 0x25),
            CustomColor::from_rgb(217, 0x40, 0x40, 0x40),
            CustomColor::from_rgb(218, 0x00, 0x00, 0x00),
            CustomColor::from_rgb(219, 0x5f, 0x45, 0xe5),
            CustomColor::from_rgb(199, 0x87, 0x70, 0xff),
            CustomColor::new(240, 40, 50, 200),
        ],
        slots: &[
            set(Slot::Frame, ix(204), ix(200), false, NONE),
            set(Slot::TopBar, ix(203), ix(202), false, NONE),
            set(Slot::Data, ix(201), ix(200), false, NONE),
            set(Slot::Labels, ix(210), ix(200), false, NONE).labels(),
            set(Slot::CursorFixed, ix(213), ix(205), false, NONE).cursor(),
            set(Slot::CursorData, ix(213), ix(205), false, NONE).cursor(),
            set(Slot::Title, ix(203), ix(202), false, NONE),
            set(Slot::ExpandedHeader, ix(17), ix(200), false, NONE),
            set(Slot::Footer, ix(206), ix(200), false, NONE),
            set(Slot::FooterCursor, ix(213), ix(205), false, NONE).cursor(),
            set(Slot::CursorLine, ix(204), ix(205), false, NONE),
            set(Slot::BottomBarLight, ix(203), ix(202), false, NONE),
            set(Slot::Bookmark, ix(212), ix(211), false, NONE),
            set(Slot::SearchMatch, ix(216), ix(214), false, NONE),
            set(Slot::PatternData, ix(201), ix(214), false, NONE),
            set(Slot::PatternLine, ix(204), ix(214), false, NONE),
            set(Slot::SearchMatchPlain, DEFAULT, DEFAULT, false, NONE),
            set(Slot::SearchMatchCursor, ix(201), ix(205), false, NONE),
            set(Slot::SearchMatchCursorFixed, ix(218), ix(205), false, NONE),
            set(Slot::RowNumber, ix(204), ix(207), false, NONE),
            set(Slot::BookmarkLine, ix(204), ix(211), false, NONE),
            set(Slot::CrossCursor, WHITE, ix(199), true, NONE).cursor(),
            set(Slot::CrossCursorLine, ix(204), ix(199), false, NONE),
            set(Slot::Input, WHITE, BLACK, true, REVERSE),
            set(Slot::VerticalCursorPattern, ix(213), ix(219), false, NONE),
            set(Slot::VerticalCursorPatternLine, ix(204), ix(219), false, NONE),
            set(Slot::Selection, ix(210), ix(202), false, NONE),
            set(Slot::SelectionCursor, ix(213), ix(203), false, NONE).cursor(),
        ],
    },
    ThemeSpec {
        id: ThemeId(22),
        name: "Relation pipes",
        default_colors: false,
        custom_colors: &[],
        slots: &[
            set(Slot::Frame, GREEN, BLACK, false, NONE),
            set(Slot::TopBar, RED, BLACK, true, NONE),
            set(Slot::Data, CYAN, BLACK, false, NONE),
            set(Slot::Labels, WHITE, BLACK, true, NONE).labels(),
            set(Slot::CursorFixed, BLACK, CYAN, false, NONE).cursor(),
            set(Slot::CursorData, BLACK, CYAN, false, NONE),
            set(Slot::Title, RED, BLACK, true, NONE),
            set(Slot::ExpandedHeader, RED, BLUE, false, NONE),
            set(Slot::Footer, YELLOW, BLACK, false, NONE),
            set(Slot::FooterCursor, BLACK, CYAN, false, NONE).cursor(),
            set(Slot::CursorLine, GREEN, CYAN, true, NONE),
            set(Slot::BottomBar, WHITE, CYAN, true, NONE),
            set(Slot::BottomBarLight, BLACK, GREEN, false, NONE),
            set(Slot::Bookmark, WHITE, RED, true, NONE),
            set(Slot::SearchMatch, YELLOW, GREEN, true, NONE),
            set(Slot::PatternData, BLACK, GREEN, false, NONE),
            set(Slot::PatternLine, GREEN, GREEN, true, NONE),
            set(Slot::SearchMatchPlain, GREEN, BLUE, false, NONE),
            set(Slot::SearchMatchCursor, YELLOW, CYAN, true, NONE),
            set(Slot::SearchMatchCursorFixed, WHITE, BLACK, true, NONE),
            set(Slot::RowNumber, WHITE, CYAN, true, NONE),
            set(Slot::CrossCursor, CYAN, BLACK, true, REVERSE).cursor(),
            set(Slot::CrossCursorLine, CYAN, WHITE, true, REVERSE),
            set(Slot::VerticalCursorPattern, GREEN, BLACK, true, REVERSE).cursor(),
            set(Slot::VerticalCursorPatternLine, GREEN, WHITE, true, REVERSE),
            set(Slot::Error, WHITE, RED, true, NONE),
            set(Slot::BookmarkLine, GREEN, RED, true, NONE),
            set(Slot::ScrollbarArrow, WHITE, BLACK, false, REVERSE),
            set(Slot::ScrollbarTrack, BLACK, BLACK, true, NONE),
            set(Slot::ScrollbarSlider, WHITE, BLUE, false, REVERSE),
            set(Slot::ScrollbarActiveSlider, WHITE, BLACK, true, REVERSE),
        ],
    },
];
