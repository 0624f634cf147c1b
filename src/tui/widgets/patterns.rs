// Pattern-discovery screen: list of detected behavioral patterns with a
// detail panel for the selected entry.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::content::patterns::{Pattern, PATTERNS};
use crate::tui::palette::Palette;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let palette = Palette::for_theme(state.theme);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_list(frame, columns[0], &palette, state);

    let selected = state.pattern_selected.min(PATTERNS.len() - 1);
    render_detail(frame, columns[1], &palette, &PATTERNS[selected]);
}

fn render_list(frame: &mut Frame, area: Rect, palette: &Palette, state: &ViewState) {
    let items: Vec<ListItem> = PATTERNS
        .iter()
        .enumerate()
        .map(|(index, pattern)| {
            let selected = index == state.pattern_selected;
            let style = if selected {
                Style::default()
                    .fg(palette.bg)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.fg)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", pattern.title), style),
                Span::styled(
                    format!("[{}]", pattern.category),
                    Style::default().fg(palette.dim),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.dim))
            .title(" DETECTED PATTERNS "),
    );
    frame.render_widget(list, area);
}

fn render_detail(frame: &mut Frame, area: Rect, palette: &Palette, pattern: &Pattern) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Confidence ", Style::default().fg(palette.dim)),
            Span::styled(
                format!("{}%", pattern.probability),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Frequency ", Style::default().fg(palette.dim)),
            Span::styled(
                format!("{}x", pattern.frequency),
                Style::default().fg(palette.accent),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Timeline: ", Style::default().fg(palette.dim)),
            Span::styled(pattern.timeline, Style::default().fg(palette.fg)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Trigger: ", Style::default().fg(palette.dim)),
            Span::styled(pattern.trigger, Style::default().fg(palette.fg)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Impact: ", Style::default().fg(palette.dim)),
            Span::styled(pattern.impact, Style::default().fg(palette.warning)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Contributors: ", Style::default().fg(palette.dim)),
            Span::styled(
                pattern.contributors.join(", "),
                Style::default().fg(palette.fg),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.dim))
            .title(format!(" {} ", pattern.title)),
    );
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
