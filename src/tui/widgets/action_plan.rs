// Action-plan screen: prioritized training protocols with completion
// tracking. Space toggles an item complete, Enter expands its detail; the
// gauge at the top shows overall progress.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem};
use ratatui::Frame;

use crate::content::actions::{Priority, ACTION_ITEMS};
use crate::tui::palette::Palette;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let palette = Palette::for_theme(state.theme);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(area);

    render_progress(frame, rows[0], &palette, &state.action_completed);
    render_list(frame, rows[1], &palette, state);
}

fn render_progress(frame: &mut Frame, area: Rect, palette: &Palette, completed: &[bool]) {
    let percent = completion_percent(completed);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.dim))
                .title(" PROTOCOL COMPLETION "),
        )
        .gauge_style(Style::default().fg(palette.success).bg(palette.bg))
        .percent(percent)
        .label(format!("{percent}%"));
    frame.render_widget(gauge, area);
}

fn render_list(frame: &mut Frame, area: Rect, palette: &Palette, state: &ViewState) {
    let items: Vec<ListItem> = ACTION_ITEMS
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let selected = index == state.action_selected;
            let completed = state.action_completed.get(index).copied().unwrap_or(false);
            let expanded = state.action_expanded.get(index).copied().unwrap_or(false);

            let checkbox = if completed { "[x]" } else { "[ ]" };
            let mut title_style = if selected {
                Style::default()
                    .fg(palette.bg)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.fg)
            };
            if completed {
                title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
            }

            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!("{checkbox} "),
                    Style::default().fg(if completed {
                        palette.success
                    } else {
                        palette.dim
                    }),
                ),
                Span::styled(
                    format!("[{:^6}]", item.priority.label()),
                    Style::default().fg(priority_color(item.priority, palette)),
                ),
                Span::styled(format!(" {} ", item.title), title_style),
                Span::styled(
                    format!("({})", item.timeline),
                    Style::default().fg(palette.dim),
                ),
            ])];
            if expanded {
                lines.push(Line::from(Span::styled(
                    format!("      {}", item.description),
                    Style::default().fg(palette.dim),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.dim))
            .title(" STRATEGIC PLAN (Space:Complete Enter:Expand) "),
    );
    frame.render_widget(list, area);
}

/// Share of completed items, rounded down to whole percent.
pub fn completion_percent(completed: &[bool]) -> u16 {
    if completed.is_empty() {
        return 0;
    }
    let done = completed.iter().filter(|c| **c).count();
    (done * 100 / completed.len()) as u16
}

pub fn priority_color(priority: Priority, palette: &Palette) -> Color {
    match priority {
        Priority::High => palette.error,
        Priority::Medium => palette.warning,
        Priority::Low => palette.dim,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
