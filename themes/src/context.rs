use serde::{Deserialize, Serialize};

/// Screen region an attribute record is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum RenderContext {
    LeftUpperCorner = 0,
    FixedRows = 1,
    TopBar = 2,
    BottomBar = 3,
    FixedColumns = 4,
    Rows = 5,
    Footer = 6,
    RowNumber = 7,
    RowNumberCorner = 8,
    VerticalScrollbar = 9,
}

/// Number of render contexts, for enum-indexed storage.
pub const CONTEXT_COUNT: usize = 10;

impl RenderContext {
    pub const ALL: [RenderContext; CONTEXT_COUNT] = [
        RenderContext::LeftUpperCorner,
        RenderContext::FixedRows,
        RenderContext::TopBar,
        RenderContext::BottomBar,
        RenderContext::FixedColumns,
        RenderContext::Rows,
        RenderContext::Footer,
        RenderContext::RowNumber,
        RenderContext::RowNumberCorner,
        RenderContext::VerticalScrollbar,
    ];

    /// Stable window identifier used by the host viewer.
    pub const fn window_id(self) -> u8 {
        self as u8
    }

    pub fn from_window_id(id: u8) -> Option<RenderContext> {
        RenderContext::ALL.get(id as usize).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            RenderContext::LeftUpperCorner => "left-upper-corner",
            RenderContext::FixedRows => "fixed-rows",
            RenderContext::TopBar => "top-bar",
            RenderContext::BottomBar => "bottom-bar",
            RenderContext::FixedColumns => "fixed-columns",
            RenderContext::Rows => "rows",
            RenderContext::Footer => "footer",
            RenderContext::RowNumber => "row-number",
            RenderContext::RowNumberCorner => "row-number-corner",
            RenderContext::VerticalScrollbar => "vertical-scrollbar",
        }
    }
}

impl std::fmt::Display for RenderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for RenderContext {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RenderContext::ALL
            .iter()
            .copied()
            .find(|context| context.name() == s)
            .ok_or_else(|| format!("unknown render context '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_none};

    #[test]
    fn test_window_ids_are_positions() {
        for (index, context) in RenderContext::ALL.iter().enumerate() {
            assert_eq!(context.window_id() as usize, index);
            assert_eq!(RenderContext::from_window_id(index as u8), Some(*context));
        }
        assert_none!(RenderContext::from_window_id(10));
    }

    #[test]
    fn test_parse_by_name() {
        for context in RenderContext::ALL {
            assert_eq!(context.name().parse::<RenderContext>(), Ok(context));
        }
        assert_err!("sidebar".parse::<RenderContext>());
    }
}
