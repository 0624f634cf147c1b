// Help bar widget: per-screen keyboard shortcut hints.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::Screen;
use crate::tui::palette::Palette;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let palette = Palette::for_theme(state.theme);
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        hint_text(state.screen),
        Style::default().fg(palette.dim).add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(palette.bg));
    frame.render_widget(paragraph, area);
}

/// Shortcut hint line for a screen. Global keys come first.
pub fn hint_text(screen: Screen) -> &'static str {
    match screen {
        Screen::Setup => " q:Quit | 1-7:Screens | t:Theme | j/k:Field | h/l:Change | Enter:Launch | r:Reset | x:Dismiss",
        Screen::Simulator => " q:Quit | 1-7:Screens | t:Theme | a/Enter:Toggle Timeline | x:Dismiss",
        Screen::Briefing => " q:Quit | 1-7:Screens | t:Theme | e:Export | x:Dismiss",
        Screen::ActionPlan => " q:Quit | 1-7:Screens | t:Theme | j/k:Select | Space:Complete | Enter:Expand | x:Dismiss",
        _ => " q:Quit | 1-7:Screens | t:Theme | j/k:Select | x:Dismiss",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
