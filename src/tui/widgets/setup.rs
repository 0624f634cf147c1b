// Session-setup screen: matchup, patch set, phase, and focus selectors,
// plus the launch control.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::palette::Palette;
use crate::tui::{SetupField, ViewState};

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let palette = Palette::for_theme(state.theme);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim))
        .title(" NEW SESSION ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // team
            Constraint::Length(3), // patch
            Constraint::Length(3), // phase
            Constraint::Length(3), // role
            Constraint::Length(3), // launch
            Constraint::Min(0),
        ])
        .split(inner);

    render_field(
        frame,
        rows[0],
        &palette,
        "MATCH CONTEXT",
        state.session.selected_team.as_deref().unwrap_or("< select matchup >"),
        state.setup_focus == SetupField::Team,
    );
    render_field(
        frame,
        rows[1],
        &palette,
        "PATCH SET",
        &state.session.selected_patch,
        state.setup_focus == SetupField::Patch,
    );
    render_field(
        frame,
        rows[2],
        &palette,
        "SESSION PHASE",
        &state.session.selected_phase,
        state.setup_focus == SetupField::Phase,
    );
    render_field(
        frame,
        rows[3],
        &palette,
        "ANALYTIC FOCUS",
        &state.session.selected_role,
        state.setup_focus == SetupField::Role,
    );
    render_launch(frame, rows[4], &palette, state);
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    label: &str,
    value: &str,
    focused: bool,
) {
    let border = if focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.dim)
    };
    let marker = if focused { "> " } else { "  " };
    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled(marker, Style::default().fg(palette.accent)),
        Span::styled(value.to_string(), Style::default().fg(palette.fg)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {label} ")),
    );
    frame.render_widget(paragraph, area);
}

fn render_launch(frame: &mut Frame, area: Rect, palette: &Palette, state: &ViewState) {
    let focused = state.setup_focus == SetupField::Launch;
    let label = if state.session.is_loading {
        "SYNCING NEURAL LINK..."
    } else {
        "INITIATE ANALYSIS"
    };
    let style = if state.session.is_loading {
        Style::default().fg(palette.warning)
    } else if focused {
        Style::default()
            .fg(palette.bg)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.accent)
    };
    let border = if focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.dim)
    };

    let mut lines = vec![Line::from(Span::styled(format!("  {label}  "), style))];
    if let Some(ref error) = state.session.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(palette.error),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
