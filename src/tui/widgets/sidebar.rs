// Navigation sidebar: one entry per screen, active entry highlighted.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::protocol::Screen;
use crate::tui::palette::Palette;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let palette = Palette::for_theme(state.theme);

    let items: Vec<ListItem> = Screen::ALL
        .iter()
        .enumerate()
        .map(|(index, screen)| {
            let active = *screen == state.screen;
            let style = if active {
                Style::default()
                    .fg(palette.bg)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.fg)
            };
            ListItem::new(Line::from(vec![Span::styled(
                format!(" {} {}", index + 1, screen.nav_label()),
                style,
            )]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.dim))
            .title(" NAV "),
    );
    frame.render_widget(list, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
