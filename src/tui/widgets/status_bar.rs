// Status bar widget: product banner, session summary, loading indicator.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::session::SessionState;
use crate::tui::palette::Palette;
use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [product banner] [matchup] [patch] [sync indicator]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let palette = Palette::for_theme(state.theme);
    let mut spans = vec![
        Span::styled(
            " STRATOS NEURAL ",
            Style::default()
                .fg(palette.bg)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(session_summary(&state.session), Style::default().fg(palette.fg)),
    ];

    if state.session.is_loading {
        spans.push(Span::styled(
            "  [SYNCING...]",
            Style::default().fg(palette.warning),
        ));
    }
    if let Some(ref error) = state.session.error {
        spans.push(Span::styled(
            format!("  {error}"),
            Style::default().fg(palette.error).add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bg));
    frame.render_widget(paragraph, area);
}

/// One-line summary of the current session selections.
pub fn session_summary(session: &SessionState) -> String {
    let matchup = session.selected_team.as_deref().unwrap_or("no matchup");
    format!(
        "{} | {} | {} | {}",
        matchup, session.selected_patch, session.selected_phase, session.selected_role
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_shows_placeholder_without_matchup() {
        let session = SessionState::default();
        let summary = session_summary(&session);
        assert!(summary.starts_with("no matchup"));
        assert!(summary.contains(&session.selected_patch));
    }

    #[test]
    fn summary_shows_selected_matchup() {
        let mut session = SessionState::default();
        session.selected_team = Some("Team Alpha vs Team Beta".to_string());
        assert!(session_summary(&session).starts_with("Team Alpha vs Team Beta"));
    }

    #[test]
    fn render_does_not_panic_with_defaults() {
        let backend = ratatui::backend::TestBackend::new(120, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_with_error_and_loading() {
        let backend = ratatui::backend::TestBackend::new(120, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.session.is_loading = true;
        state.session.error = Some("SYSERR: TEAM_MATCH_REQUIRED".to_string());
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
