// Coaching-briefing screen: executive summary, key findings, and the
// recommended protocol list.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::content::briefing::{FindingKind, EXECUTIVE_SUMMARY, FINDINGS, RECOMMENDATIONS};
use crate::tui::palette::Palette;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let palette = Palette::for_theme(state.theme);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Min(6),
        ])
        .split(area);

    let summary = Paragraph::new(EXECUTIVE_SUMMARY)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(palette.fg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.dim))
                .title(" EXECUTIVE SUMMARY "),
        );
    frame.render_widget(summary, rows[0]);

    render_findings(frame, rows[1], &palette);
    render_recommendations(frame, rows[2], &palette);
}

fn render_findings(frame: &mut Frame, area: Rect, palette: &Palette) {
    let items: Vec<ListItem> = FINDINGS
        .iter()
        .map(|finding| {
            let color = match finding.kind {
                FindingKind::Strength => palette.success,
                FindingKind::Warning => palette.warning,
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {:<10}", finding.label),
                    Style::default().fg(palette.fg),
                ),
                Span::styled(
                    format!("{:>6}  ", finding.value),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(finding.detail, Style::default().fg(palette.dim)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.dim))
            .title(" KEY FINDINGS "),
    );
    frame.render_widget(list, area);
}

fn render_recommendations(frame: &mut Frame, area: Rect, palette: &Palette) {
    let items: Vec<ListItem> = RECOMMENDATIONS
        .iter()
        .enumerate()
        .map(|(index, rec)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {}. ", index + 1),
                    Style::default().fg(palette.accent),
                ),
                Span::styled(*rec, Style::default().fg(palette.fg)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.dim))
            .title(" RECOMMENDED PROTOCOLS (e:Export) "),
    );
    frame.render_widget(list, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
