// Strategy-simulator screen: actual run vs. the alternative timeline.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::content::simulator::SIMULATION_ROWS;
use crate::tui::palette::Palette;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let palette = Palette::for_theme(state.theme);

    let timeline = if state.show_alternative {
        "ALTERNATIVE TIMELINE"
    } else {
        "ACTUAL RUN"
    };

    let header = Row::new(vec!["SCENARIO", "METRIC", "VALUE", "DELTA"])
        .style(Style::default().fg(palette.dim).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = SIMULATION_ROWS
        .iter()
        .map(|row| {
            let value = if state.show_alternative {
                row.alternative
            } else {
                row.actual
            };
            let delta_color = if row.positive {
                palette.success
            } else {
                palette.error
            };
            // The delta column only makes sense against the alternative.
            let delta = if state.show_alternative { row.change } else { "--" };
            Row::new(vec![
                Cell::from(row.label),
                Cell::from(row.metric).style(Style::default().fg(palette.dim)),
                Cell::from(Span::styled(
                    value,
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                )),
                Cell::from(Span::styled(delta, Style::default().fg(delta_color))),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(22),
            Constraint::Length(24),
            Constraint::Length(10),
            Constraint::Min(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.dim))
            .title(Line::from(vec![
                Span::raw(" KINETIC EMULATOR :: "),
                Span::styled(
                    timeline,
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
            ])),
    );
    frame.render_widget(table, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
