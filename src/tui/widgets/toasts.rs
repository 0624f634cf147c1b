// Toast overlay: active notification cards stacked in the main panel's
// top-right corner, newest last.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::toast::{ToastFeed, ToastKind};
use crate::tui::layout::toast_overlay;
use crate::tui::palette::Palette;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, main_panel: Rect, state: &ViewState, toasts: &ToastFeed) {
    let palette = Palette::for_theme(state.theme);

    for (index, entry) in toasts.active().iter().enumerate() {
        let Some(area) = toast_overlay(main_panel, index) else {
            // No more room; older cards keep their slots, the rest wait.
            break;
        };

        let toast = &entry.toast;
        let color = kind_color(toast.kind, &palette);
        let mut lines = vec![Line::from(toast.title.clone())];
        if let Some(ref message) = toast.message {
            lines.push(Line::from(message.clone()));
        }

        let card = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(palette.fg).bg(palette.bg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                    .title(format!(" {} ", toast.kind.label())),
            );
        frame.render_widget(Clear, area);
        frame.render_widget(card, area);
    }
}

fn kind_color(kind: ToastKind, palette: &Palette) -> Color {
    match kind {
        ToastKind::Success => palette.success,
        ToastKind::Error => palette.error,
        ToastKind::Warning => palette.warning,
        ToastKind::Info => palette.accent,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
