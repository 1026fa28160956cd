//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: header, summary cards, main panel,
//! status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Month selector and view tabs
    pub header: Rect,
    /// Income, expenses, balance and savings rate cards
    pub cards: Rect,
    /// Active view
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(4), // Cards
                Constraint::Min(8),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            cards: chunks[1],
            main: chunks[2],
            status_bar: chunks[3],
        }
    }
}

/// Layout for the charts view: a 2x2 grid
pub struct ChartsLayout {
    pub yearly: Rect,
    pub distribution: Rect,
    pub categories: Rect,
    pub insights: Rect,
}

impl ChartsLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(rows[0]);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]);

        Self {
            yearly: top[0],
            distribution: top[1],
            categories: bottom[0],
            insights: bottom[1],
        }
    }
}

/// Split an area into `count` equal columns
pub fn columns(area: Rect, count: u16) -> Vec<Rect> {
    let count = count.max(1);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count as u32)))
        .split(area)
        .to_vec()
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_fills_height() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.cards.height, 4);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.main.height, 32);
    }

    #[test]
    fn test_columns() {
        let cols = columns(Rect::new(0, 0, 80, 4), 4);
        assert_eq!(cols.len(), 4);
        assert!(cols.iter().all(|c| c.width == 20));
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let rect = centered_rect_fixed(50, 10, Rect::new(0, 0, 30, 6));
        assert_eq!(rect, Rect::new(0, 0, 30, 6));

        let rect = centered_rect_fixed(20, 4, Rect::new(0, 0, 100, 40));
        assert_eq!(rect, Rect::new(40, 18, 20, 4));
    }
}
