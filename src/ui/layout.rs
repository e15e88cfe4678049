use ratatui::layout::Rect;

use crate::app::settings::ViewMode;

pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 20;
const CHART_MIN_WIDTH: u16 = 30;
const CHART_MIN_HEIGHT: u16 = 7;

/// Falls back to the list when a panel is too small to plot.
#[must_use]
pub fn effective_view(requested: ViewMode, area: Rect) -> ViewMode {
    match requested {
        ViewMode::Chart if area.width < CHART_MIN_WIDTH || area.height < CHART_MIN_HEIGHT => {
            ViewMode::List
        }
        view => view,
    }
}

/// Panels sit side by side on wide terminals and stack otherwise.
#[must_use]
pub fn panels_side_by_side(width: u16) -> bool {
    width >= 120
}

#[must_use]
pub fn fits(area: Rect) -> bool {
    area.width >= MIN_WIDTH && area.height >= MIN_HEIGHT
}
