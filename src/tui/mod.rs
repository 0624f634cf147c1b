// TUI cockpit: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors relevant parts of the application
// state. The app orchestrator pushes `UiUpdate` messages over an mpsc channel;
// the TUI applies them to `ViewState` and re-renders at ~30 fps. Toasts are
// delivered separately through a `ToastFeed` subscribed from the bus and
// polled on every render tick.

pub mod input;
pub mod layout;
pub mod palette;
pub mod widgets;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};

use crate::content::actions;
use crate::protocol::{Screen, TelemetryFrame, UiUpdate, UserCommand};
use crate::session::SessionState;
use crate::theme::ResolvedTheme;
use crate::toast::{ToastBus, ToastFeed};

use layout::build_layout;
use palette::Palette;

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// Which setup-screen field currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    Team,
    Patch,
    Phase,
    Role,
    Launch,
}

impl SetupField {
    pub fn next(self) -> Self {
        match self {
            SetupField::Team => SetupField::Patch,
            SetupField::Patch => SetupField::Phase,
            SetupField::Phase => SetupField::Role,
            SetupField::Role => SetupField::Launch,
            SetupField::Launch => SetupField::Team,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SetupField::Team => SetupField::Launch,
            SetupField::Patch => SetupField::Team,
            SetupField::Phase => SetupField::Patch,
            SetupField::Role => SetupField::Phase,
            SetupField::Launch => SetupField::Role,
        }
    }
}

/// TUI-local state that mirrors the application state for rendering.
///
/// Updated incrementally via `UiUpdate` messages from the app orchestrator.
/// The `render_frame` function reads this struct to draw the cockpit.
pub struct ViewState {
    /// Latest session snapshot.
    pub session: SessionState,
    /// The screen shown in the main panel.
    pub screen: Screen,
    /// Concrete theme applied to the palette.
    pub theme: ResolvedTheme,
    /// Latest telemetry frame; `None` until the dashboard's first refresh.
    pub telemetry: Option<TelemetryFrame>,
    /// Unrecoverable orchestrator error; set once, swaps in the recovery view.
    pub fatal: Option<String>,
    /// Focused field on the setup screen.
    pub setup_focus: SetupField,
    /// List selections, one per list screen.
    pub pattern_selected: usize,
    pub player_selected: usize,
    pub action_selected: usize,
    /// Per-item completion flags for the action plan, in item order.
    pub action_completed: Vec<bool>,
    /// Per-item expansion flags for the action plan, in item order.
    pub action_expanded: Vec<bool>,
    /// Simulator: show the alternative timeline instead of the actual run.
    pub show_alternative: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            session: SessionState::default(),
            screen: Screen::Setup,
            theme: ResolvedTheme::Dark,
            telemetry: None,
            fatal: None,
            setup_focus: SetupField::Team,
            pattern_selected: 0,
            player_selected: 0,
            action_selected: 0,
            action_completed: vec![false; actions::ACTION_ITEMS.len()],
            action_expanded: vec![false; actions::ACTION_ITEMS.len()],
            show_alternative: false,
        }
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::Session(session) => {
            state.session = session;
        }
        UiUpdate::ScreenChanged(screen) => {
            state.screen = screen;
        }
        UiUpdate::ThemeChanged(theme) => {
            state.theme = theme;
        }
        UiUpdate::Telemetry(frame) => {
            state.telemetry = Some(frame);
        }
        UiUpdate::Fatal(message) => {
            state.fatal = Some(message);
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete cockpit frame.
fn render_frame(frame: &mut Frame, state: &ViewState, toasts: &ToastFeed) {
    if let Some(ref message) = state.fatal {
        render_recovery(frame, state, message);
        return;
    }

    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::sidebar::render(frame, layout.sidebar, state);

    match state.screen {
        Screen::Setup => widgets::setup::render(frame, layout.main_panel, state),
        Screen::Dashboard => widgets::dashboard::render(frame, layout.main_panel, state),
        Screen::Patterns => widgets::patterns::render(frame, layout.main_panel, state),
        Screen::Players => widgets::players::render(frame, layout.main_panel, state),
        Screen::Simulator => widgets::simulator::render(frame, layout.main_panel, state),
        Screen::Briefing => widgets::briefing::render(frame, layout.main_panel, state),
        Screen::ActionPlan => widgets::action_plan::render(frame, layout.main_panel, state),
    }

    widgets::help_bar::render(frame, layout.help_bar, state);
    widgets::toasts::render(frame, layout.main_panel, state, toasts);
}

/// Full-screen recovery view shown after a `Fatal` update. The rest of the
/// cockpit is withheld so a broken orchestrator can't render stale state.
fn render_recovery(frame: &mut Frame, state: &ViewState, message: &str) {
    let palette = Palette::for_theme(state.theme);
    let text = vec![
        Line::from("NEURAL LINK SEVERED"),
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from("Press q to exit and restart the cockpit."),
    ];
    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(palette.error).bg(palette.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" SYSTEM FAULT "),
        );
    frame.render_widget(paragraph, frame.area());
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// This is the main entry point for the terminal UI. It:
/// 1. Initializes the terminal (enters raw mode, enables alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop: UI updates, keyboard input, render ticks.
/// 4. Restores the terminal on clean exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
    toast_bus: ToastBus,
    tick_ms: u64,
) -> anyhow::Result<()> {
    // 1. Initialize terminal
    let mut terminal = ratatui::init();

    // 2. Set panic hook to restore terminal on crash.
    //    We capture the original hook and chain ours before it.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    // 3. View state and the toast subscription for this view
    let mut view_state = ViewState::default();
    let mut toasts = toast_bus.subscribe();

    // 4. Create crossterm EventStream for async keyboard input
    let mut event_stream = EventStream::new();

    // 5. Create render interval (~30fps at the default tick)
    let mut render_tick = tokio::time::interval(Duration::from_millis(tick_ms));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    // 6. Main loop
    loop {
        tokio::select! {
            // UI updates from the app orchestrator
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => {
                        apply_ui_update(&mut view_state, ui_update);
                    }
                    None => {
                        // Channel closed: app is shutting down
                        break;
                    }
                }
            }

            // Keyboard input
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        // Toast dismissal is view-local: drop the newest card.
                        if key_event.code == crossterm::event::KeyCode::Char('x') {
                            if let Some(entry) = toasts.active().last() {
                                let id = entry.toast.id;
                                toasts.dismiss(id);
                            }
                            continue;
                        }
                        match input::handle_key(key_event, &mut view_state) {
                            Some(UserCommand::Quit) => {
                                let _ = cmd_tx.send(UserCommand::Quit).await;
                                break;
                            }
                            Some(cmd) => {
                                let _ = cmd_tx.send(cmd).await;
                            }
                            None => {}
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse events, resize events, etc. -- ignore
                    }
                    Some(Err(_)) | None => {
                        // Input error or stream ended
                        break;
                    }
                }
            }

            // Render tick
            _ = render_tick.tick() => {
                toasts.poll(Instant::now());
                terminal.draw(|frame| render_frame(frame, &view_state, &toasts))?;
            }
        }
    }

    // 7. Restore terminal
    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{FeedKind, FeedLine};
    use crate::session::DEFAULT_PATCH;

    #[test]
    fn view_state_default_is_sensible() {
        let state = ViewState::default();
        assert_eq!(state.screen, Screen::Setup);
        assert_eq!(state.theme, ResolvedTheme::Dark);
        assert!(state.telemetry.is_none());
        assert!(state.fatal.is_none());
        assert_eq!(state.setup_focus, SetupField::Team);
        assert_eq!(state.pattern_selected, 0);
        assert_eq!(state.player_selected, 0);
        assert_eq!(state.action_selected, 0);
        assert_eq!(state.action_completed, vec![false; actions::ACTION_ITEMS.len()]);
        assert_eq!(state.action_expanded, vec![false; actions::ACTION_ITEMS.len()]);
        assert!(!state.show_alternative);
        assert!(state.session.selected_team.is_none());
        assert_eq!(state.session.selected_patch, DEFAULT_PATCH);
    }

    #[test]
    fn setup_focus_cycle_is_closed() {
        let mut field = SetupField::Team;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, SetupField::Team);
        assert_eq!(SetupField::Team.prev(), SetupField::Launch);
    }

    #[test]
    fn apply_ui_update_session() {
        let mut state = ViewState::default();
        let mut session = SessionState::default();
        session.selected_team = Some("Team Alpha vs Team Beta".to_string());
        session.is_loading = true;

        apply_ui_update(&mut state, UiUpdate::Session(session.clone()));
        assert_eq!(state.session, session);
    }

    #[test]
    fn apply_ui_update_screen_changed() {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::ScreenChanged(Screen::Dashboard));
        assert_eq!(state.screen, Screen::Dashboard);
    }

    #[test]
    fn apply_ui_update_theme_changed() {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::ThemeChanged(ResolvedTheme::Light));
        assert_eq!(state.theme, ResolvedTheme::Light);
    }

    #[test]
    fn apply_ui_update_telemetry() {
        let mut state = ViewState::default();
        let frame = TelemetryFrame {
            metric_values: vec!["92.4%".to_string()],
            feed: vec![FeedLine {
                time: "01:00".to_string(),
                event: "Cache Refreshed".to_string(),
                kind: FeedKind::Neutral,
            }],
        };
        apply_ui_update(&mut state, UiUpdate::Telemetry(frame.clone()));
        assert_eq!(state.telemetry, Some(frame));
    }

    #[test]
    fn apply_ui_update_fatal() {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::Fatal("scope closed".to_string()));
        assert_eq!(state.fatal.as_deref(), Some("scope closed"));
    }

    #[test]
    fn render_frame_smoke_all_screens() {
        let backend = ratatui::backend::TestBackend::new(120, 40);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let bus = ToastBus::new();
        let toasts = bus.subscribe();

        let mut state = ViewState::default();
        for screen in Screen::ALL {
            state.screen = screen;
            terminal
                .draw(|frame| render_frame(frame, &state, &toasts))
                .unwrap();
        }
    }

    #[test]
    fn render_frame_recovery_view() {
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let bus = ToastBus::new();
        let toasts = bus.subscribe();

        let mut state = ViewState::default();
        state.fatal = Some("session scope is closed".to_string());
        terminal
            .draw(|frame| render_frame(frame, &state, &toasts))
            .unwrap();
    }
}
