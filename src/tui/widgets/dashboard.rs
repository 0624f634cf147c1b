// Dashboard screen: metric cards, the performance projection chart, and
// the rolling neural log feed.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::content::dashboard::{MetricCard, METRIC_CARDS, PERFORMANCE_CURVE};
use crate::protocol::{FeedKind, FeedLine};
use crate::tui::palette::Palette;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let palette = Palette::for_theme(state.theme);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // metric cards
            Constraint::Min(8),    // chart
            Constraint::Length(8), // feed
        ])
        .split(area);

    render_metric_cards(frame, rows[0], &palette, state);
    render_curve(frame, rows[1], &palette);
    render_feed(frame, rows[2], &palette, state);
}

fn render_metric_cards(frame: &mut Frame, area: Rect, palette: &Palette, state: &ViewState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (index, card) in METRIC_CARDS.iter().enumerate() {
        let value = state
            .telemetry
            .as_ref()
            .and_then(|t| t.metric_values.get(index).cloned())
            .unwrap_or_else(|| card.value.to_string());
        render_card(frame, columns[index], palette, card, &value);
    }
}

fn render_card(frame: &mut Frame, area: Rect, palette: &Palette, card: &MetricCard, value: &str) {
    let change_color = if card.positive {
        palette.success
    } else {
        palette.error
    };
    let lines = vec![Line::from(vec![
        Span::styled(
            value.to_string(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(card.change, Style::default().fg(change_color)),
    ])];
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.dim))
            .title(format!(" {} ", card.label)),
    );
    frame.render_widget(paragraph, area);
}

fn render_curve(frame: &mut Frame, area: Rect, palette: &Palette) {
    let performance: Vec<(f64, f64)> = PERFORMANCE_CURVE
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.performance as f64))
        .collect();
    let objective: Vec<(f64, f64)> = PERFORMANCE_CURVE
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.objective as f64))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("performance")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(palette.accent))
            .data(&performance),
        Dataset::default()
            .name("objective")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(palette.success))
            .data(&objective),
    ];

    let x_labels: Vec<Span> = [0, 3, 6]
        .iter()
        .map(|&i| Span::styled(PERFORMANCE_CURVE[i].time, Style::default().fg(palette.dim)))
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.dim))
                .title(" PERFORMANCE PROJECTION "),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, (PERFORMANCE_CURVE.len() - 1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default().bounds([0.0, 100.0]).labels(vec![
                Span::styled("0", Style::default().fg(palette.dim)),
                Span::styled("50", Style::default().fg(palette.dim)),
                Span::styled("100", Style::default().fg(palette.dim)),
            ]),
        );
    frame.render_widget(chart, area);
}

fn render_feed(frame: &mut Frame, area: Rect, palette: &Palette, state: &ViewState) {
    let seed;
    let feed: &[FeedLine] = match state.telemetry {
        Some(ref frame) => &frame.feed,
        None => {
            seed = crate::content::dashboard::seed_feed()
                .into_iter()
                .map(|(time, event, kind)| FeedLine {
                    time: time.to_string(),
                    event: event.to_string(),
                    kind,
                })
                .collect::<Vec<_>>();
            &seed
        }
    };

    let items: Vec<ListItem> = feed.iter().map(|line| feed_item(line, palette)).collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.dim))
            .title(" NEURAL LOG "),
    );
    frame.render_widget(list, area);
}

fn feed_item<'a>(line: &FeedLine, palette: &Palette) -> ListItem<'a> {
    let color = match line.kind {
        FeedKind::Success => palette.success,
        FeedKind::Warning => palette.warning,
        FeedKind::Neutral => palette.fg,
    };
    ListItem::new(Line::from(vec![
        Span::styled(format!(" {} ", line.time), Style::default().fg(palette.dim)),
        Span::styled(line.event.clone(), Style::default().fg(color)),
    ]))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::TelemetryFrame;

    #[test]
    fn render_does_not_panic_without_telemetry() {
        let backend = ratatui::backend::TestBackend::new(120, 40);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_with_telemetry() {
        let backend = ratatui::backend::TestBackend::new(120, 40);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.telemetry = Some(TelemetryFrame {
            metric_values: vec![
                "92.3%".to_string(),
                "1.42x".to_string(),
                "88.8%".to_string(),
                "14ms".to_string(),
            ],
            feed: vec![FeedLine {
                time: "12:30".to_string(),
                event: "Cache Refreshed".to_string(),
                kind: FeedKind::Neutral,
            }],
        });
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_on_small_area() {
        let backend = ratatui::backend::TestBackend::new(40, 12);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
