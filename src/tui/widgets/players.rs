// Player-telemetry screen: impact table with a detail panel for the
// selected node.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use crate::content::players::{Player, PLAYERS};
use crate::tui::palette::Palette;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let palette = Palette::for_theme(state.theme);

    let rows_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(7)])
        .split(area);

    render_table(frame, rows_areas[0], &palette, state);

    let selected = state.player_selected.min(PLAYERS.len() - 1);
    render_detail(frame, rows_areas[1], &palette, &PLAYERS[selected]);
}

fn render_table(frame: &mut Frame, area: Rect, palette: &Palette, state: &ViewState) {
    let header = Row::new(vec!["NODE", "ROLE", "IMPACT", "DECISIONS", "AVG", "HEAT"])
        .style(Style::default().fg(palette.dim).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = PLAYERS
        .iter()
        .enumerate()
        .map(|(index, player)| {
            let style = if index == state.player_selected {
                Style::default()
                    .fg(palette.bg)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.fg)
            };
            Row::new(vec![
                Cell::from(player.name),
                Cell::from(player.role),
                Cell::from(format!("{:.1}", player.impact_score)),
                Cell::from(player.decisions.to_string()),
                Cell::from(format!("{:+.1}", player.avg_decision_impact)),
                Cell::from(heat_bar(player.heatmap_intensity)),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(18),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(6),
            Constraint::Min(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.dim))
            .title(" TELEMETRY NODES "),
    );
    frame.render_widget(table, area);
}

fn render_detail(frame: &mut Frame, area: Rect, palette: &Palette, player: &Player) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Recurring: ", Style::default().fg(palette.dim)),
            Span::styled(
                player.recurring_mistakes.join(" / "),
                Style::default().fg(palette.warning),
            ),
        ]),
        Line::from(vec![
            Span::styled("Macro: ", Style::default().fg(palette.dim)),
            Span::styled(player.macro_note, Style::default().fg(palette.fg)),
        ]),
    ];
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.dim))
            .title(format!(" {} ", player.name)),
    );
    frame.render_widget(paragraph, area);
}

/// A ten-segment intensity bar for the 0-100 heatmap value.
pub fn heat_bar(intensity: u8) -> String {
    let filled = (intensity as usize).min(100) / 10;
    format!("[{}{}] {}%", "#".repeat(filled), "-".repeat(10 - filled), intensity)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heat_bar_bounds() {
        assert_eq!(heat_bar(0), "[----------] 0%");
        assert_eq!(heat_bar(100), "[##########] 100%");
        assert!(heat_bar(92).starts_with("[#########-]"));
    }

    #[test]
    fn render_does_not_panic_for_every_selection() {
        let backend = ratatui::backend::TestBackend::new(120, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        for index in 0..PLAYERS.len() {
            state.player_selected = index;
            terminal
                .draw(|frame| render(frame, frame.area(), &state))
                .unwrap();
        }
    }
}
