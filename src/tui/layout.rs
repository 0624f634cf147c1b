// Screen layout: panel arrangement and sizing.
//
// Divides the terminal area into fixed zones for the cockpit:
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +------------------+-------------------------------+
// | Sidebar (24 cols) | Main Panel (fill)             |
// |  navigation       |  active screen                |
// +------------------+-------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+
//
// Toasts are not part of the grid; they overlay the main panel's top-right
// corner (see `toast_overlay`).

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the navigation sidebar.
const SIDEBAR_WIDTH: u16 = 24;

/// Width of one toast card in the overlay stack.
const TOAST_WIDTH: u16 = 36;

/// Height of one toast card (border + title + body).
const TOAST_HEIGHT: u16 = 4;

/// Resolved screen areas for each cockpit zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: product banner, session summary, theme indicator.
    pub status_bar: Rect,
    /// Left column: screen navigation.
    pub sidebar: Rect,
    /// Remaining area: the active screen.
    pub main_panel: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the cockpit layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    // Vertical: status(1) | middle(fill) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(area);

    let status_bar = vertical[0];
    let middle = vertical[1];
    let help_bar = vertical[2];

    // Horizontal: sidebar (fixed) | main panel (fill)
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(middle);

    AppLayout {
        status_bar,
        sidebar: horizontal[0],
        main_panel: horizontal[1],
        help_bar,
    }
}

/// Area for the `index`-th toast card, stacked downward from the main
/// panel's top-right corner. Returns `None` when the card would not fit.
pub fn toast_overlay(main_panel: Rect, index: usize) -> Option<Rect> {
    let width = TOAST_WIDTH.min(main_panel.width);
    if width == 0 {
        return None;
    }
    let y_offset = u16::try_from(index)
        .ok()
        .and_then(|i| i.checked_mul(TOAST_HEIGHT))?;
    if y_offset.checked_add(TOAST_HEIGHT)? > main_panel.height {
        return None;
    }
    Some(Rect::new(
        main_panel.x + main_panel.width - width,
        main_panel.y + y_offset,
        width,
        TOAST_HEIGHT,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// A reasonable terminal size for testing.
    fn test_area() -> Rect {
        Rect::new(0, 0, 160, 50)
    }

    #[test]
    fn layout_all_rects_nonzero() {
        let layout = build_layout(test_area());
        let rects = [
            ("status_bar", layout.status_bar),
            ("sidebar", layout.sidebar),
            ("main_panel", layout.main_panel),
            ("help_bar", layout.help_bar),
        ];
        for (name, rect) in &rects {
            assert!(
                rect.width > 0 && rect.height > 0,
                "{} has zero area: {:?}",
                name,
                rect
            );
        }
    }

    #[test]
    fn layout_status_and_help_bars_are_single_rows() {
        let layout = build_layout(test_area());
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.help_bar.height, 1);
    }

    #[test]
    fn layout_sidebar_has_fixed_width() {
        let layout = build_layout(test_area());
        assert_eq!(layout.sidebar.width, SIDEBAR_WIDTH);
    }

    #[test]
    fn layout_main_panel_wider_than_sidebar() {
        let layout = build_layout(test_area());
        assert!(layout.main_panel.width > layout.sidebar.width);
    }

    #[test]
    fn layout_fits_within_area() {
        let area = test_area();
        let layout = build_layout(area);
        for rect in [
            layout.status_bar,
            layout.sidebar,
            layout.main_panel,
            layout.help_bar,
        ] {
            assert!(rect.x + rect.width <= area.width);
            assert!(rect.y + rect.height <= area.height);
        }
    }

    #[test]
    fn layout_small_terminal_still_valid() {
        // Minimum viable terminal size
        let area = Rect::new(0, 0, 48, 16);
        let layout = build_layout(area);
        for rect in [
            layout.status_bar,
            layout.sidebar,
            layout.main_panel,
            layout.help_bar,
        ] {
            assert!(rect.width > 0 && rect.height > 0);
        }
    }

    #[test]
    fn toast_overlay_anchors_top_right() {
        let layout = build_layout(test_area());
        let first = toast_overlay(layout.main_panel, 0).unwrap();
        assert_eq!(
            first.x + first.width,
            layout.main_panel.x + layout.main_panel.width
        );
        assert_eq!(first.y, layout.main_panel.y);
    }

    #[test]
    fn toast_overlay_stacks_downward() {
        let layout = build_layout(test_area());
        let first = toast_overlay(layout.main_panel, 0).unwrap();
        let second = toast_overlay(layout.main_panel, 1).unwrap();
        assert_eq!(second.y, first.y + first.height);
        assert_eq!(second.x, first.x);
    }

    #[test]
    fn toast_overlay_huge_index_is_none_without_overflow() {
        let layout = build_layout(test_area());
        // Offsets near and past the u16 range must yield None, not wrap.
        assert!(toast_overlay(layout.main_panel, 16_383).is_none());
        assert!(toast_overlay(layout.main_panel, u16::MAX as usize).is_none());
        assert!(toast_overlay(layout.main_panel, usize::MAX).is_none());
    }

    #[test]
    fn toast_overlay_stops_at_panel_bottom() {
        let layout = build_layout(Rect::new(0, 0, 80, 14));
        // The middle section is 12 rows; only three 4-row cards fit.
        assert!(toast_overlay(layout.main_panel, 2).is_some());
        assert!(toast_overlay(layout.main_panel, 3).is_none());
    }
}
