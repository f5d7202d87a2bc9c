//! Layout calculations for the roster TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Calculate the main layout areas
pub struct AppLayout {
    pub header_area: Rect,
    pub form_area: Rect,
    pub filter_area: Rect,
    pub list_area: Rect,
    pub hotkey_bar: Rect,
}

impl AppLayout {
    /// Calculate layout based on terminal size
    pub fn calculate(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Length(6), // Add form
                Constraint::Length(3), // Filter bar
                Constraint::Min(4),    // Character list
                Constraint::Length(1), // Hotkeys / command line
            ])
            .split(area);

        Self {
            header_area: chunks[0],
            form_area: chunks[1],
            filter_area: chunks[2],
            list_area: chunks[3],
            hotkey_bar: chunks[4],
        }
    }
}

/// Calculate fixed-size centered popup
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Strip of `height` rows across the top of `area`, inset by `margin` columns
pub fn top_strip(area: Rect, margin: u16, height: u16) -> Rect {
    let width = area.width.saturating_sub(margin * 2);
    Rect::new(area.x + margin.min(area.width), area.y, width, height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_vertically() {
        let layout = AppLayout::calculate(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.header_area.y, 0);
        assert_eq!(layout.form_area.y, 2);
        assert_eq!(layout.filter_area.y, 8);
        assert_eq!(layout.list_area.y, 11);
        assert_eq!(layout.hotkey_bar.y, 29);
        assert_eq!(layout.list_area.height, 18);
    }

    #[test]
    fn test_centered_rect_fits_small_area() {
        let popup = centered_rect_fixed(50, 7, Rect::new(0, 0, 30, 5));
        assert_eq!(popup, Rect::new(0, 0, 30, 5));

        let popup = centered_rect_fixed(50, 7, Rect::new(0, 0, 100, 40));
        assert_eq!(popup, Rect::new(25, 16, 50, 7));
    }
}
