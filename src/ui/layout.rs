//! Layout helpers.
//!
//! Screens draw into a single centered column whose width adapts to the
//! terminal.

use ratatui::layout::Rect;

/// Terminal width breakpoints
pub mod breakpoints {
    /// Narrow terminal (< 60 columns)
    pub const NARROW_WIDTH: u16 = 60;
    /// Short terminal (< 20 rows)
    pub const SHORT_HEIGHT: u16 = 20;
}

/// Widest the content column gets.
pub const MAX_COLUMN_WIDTH: u16 = 72;

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::NARROW_WIDTH
    }

    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SHORT_HEIGHT
    }

    /// Width of the content column: 90% of the terminal, capped.
    pub fn column_width(&self) -> u16 {
        let percent = ((self.width as u32 * 90) / 100).max(1) as u16;
        percent.min(MAX_COLUMN_WIDTH)
    }
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// The content column for `area`, full height.
pub fn column(area: Rect) -> Rect {
    let width = LayoutContext::from_rect(area).column_width();
    Rect {
        x: area.x + (area.width - width.min(area.width)) / 2,
        y: area.y,
        width: width.min(area.width),
        height: area.height,
    }
}
