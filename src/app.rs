// Application state and orchestration logic.
//
// The central event loop that coordinates user commands from the TUI, the
// simulated analysis launch timer, and the periodic dashboard telemetry
// refresh. Owns the session handle, theme manager, and toast bus, and pushes
// UI updates to the TUI render loop.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};
use tracing::{info, warn};

use crate::config::Config;
use crate::content::{briefing, dashboard, setup};
use crate::protocol::{FeedKind, FeedLine, Screen, TelemetryFrame, UiUpdate, UserCommand};
use crate::session::{SessionError, SessionHandle};
use crate::theme::ThemeManager;
use crate::toast::{ToastBus, ToastKind};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum display-value jitter applied to percentage metric cards on each
/// telemetry tick.
const METRIC_JITTER: f64 = 0.2;

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state.
pub struct AppState {
    pub config: Config,
    pub session: SessionHandle,
    pub theme: ThemeManager,
    pub toasts: ToastBus,
    /// The screen currently shown in the main panel.
    pub screen: Screen,
    /// Rolling neural log, newest first. Persists across screen changes.
    feed: Vec<FeedLine>,
    /// Index into the rotating tick-event list.
    tick_index: usize,
    rng: StdRng,
}

impl AppState {
    pub fn new(
        config: Config,
        session: SessionHandle,
        theme: ThemeManager,
        toasts: ToastBus,
    ) -> Self {
        let feed = dashboard::seed_feed()
            .into_iter()
            .map(|(time, event, kind)| FeedLine {
                time: time.to_string(),
                event: event.to_string(),
                kind,
            })
            .collect();

        AppState {
            config,
            session,
            theme,
            toasts,
            screen: Screen::Setup,
            feed,
            tick_index: 0,
            rng: StdRng::from_entropy(),
        }
    }

    /// Build the next telemetry frame: jitter the percentage cards and
    /// rotate a new event into the log feed.
    pub fn telemetry_frame(&mut self) -> TelemetryFrame {
        let metric_values = dashboard::METRIC_CARDS
            .iter()
            .map(|card| match card.percent {
                Some(base) => {
                    let jitter = self.rng.gen_range(-METRIC_JITTER..=METRIC_JITTER);
                    format!("{:.1}%", (base + jitter).clamp(0.0, 100.0))
                }
                None => card.value.to_string(),
            })
            .collect();

        let event = dashboard::TICK_EVENTS[self.tick_index % dashboard::TICK_EVENTS.len()];
        self.tick_index += 1;

        self.feed.insert(
            0,
            FeedLine {
                time: chrono::Local::now().format("%M:%S").to_string(),
                event: event.to_string(),
                kind: FeedKind::Neutral,
            },
        );
        self.feed.truncate(dashboard::FEED_CAP);

        TelemetryFrame {
            metric_values,
            feed: self.feed.clone(),
        }
    }

    /// Auto-dismiss delay for notifications, from config.
    fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.config.toast.default_duration_ms)
    }

    /// Write the coaching briefing as plain text into the per-user data
    /// directory. Returns the written path.
    pub fn export_briefing(&self) -> anyhow::Result<PathBuf> {
        use anyhow::Context;

        let dir = match directories::ProjectDirs::from("", "", "stratos") {
            Some(dirs) => dirs.data_dir().to_path_buf(),
            None => std::env::temp_dir(),
        };
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create export directory {}", dir.display()))?;

        let name = format!("briefing-{}.txt", chrono::Local::now().format("%Y%m%d-%H%M%S"));
        let path = dir.join(name);
        std::fs::write(&path, briefing::export_text())
            .with_context(|| format!("failed to write briefing to {}", path.display()))?;

        Ok(path)
    }
}

// ---------------------------------------------------------------------------
// Main event loop
// ---------------------------------------------------------------------------

/// Run the main application event loop.
///
/// Listens with `tokio::select!` on:
/// 1. User commands from the TUI
/// 2. The one-shot analysis launch timer
/// 3. The periodic dashboard telemetry interval
///
/// Pushes UI updates through `ui_tx` for the TUI render loop.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!("Application event loop started");

    // Push the initial session and theme so the TUI starts consistent.
    if let Some(theme) = state.theme.applied() {
        let _ = ui_tx.send(UiUpdate::ThemeChanged(theme)).await;
    }
    if let Err(e) = push_session(&state, &ui_tx).await {
        let _ = ui_tx.send(UiUpdate::Fatal(e.to_string())).await;
        anyhow::bail!("session scope closed before the event loop started");
    }

    // One-shot launch timer. Parked in the far future until a launch is
    // actually requested; `launch_pending` gates the select arm.
    let launch_delay = Duration::from_millis(state.config.analysis.launch_delay_ms);
    let launch_sleep = tokio::time::sleep_until(far_future());
    tokio::pin!(launch_sleep);
    let mut launch_pending = false;

    let mut telemetry_interval = tokio::time::interval(Duration::from_secs(
        state.config.ui.telemetry_interval_secs,
    ));
    // The first tick completes immediately; consume it so the first real
    // refresh happens after one full interval.
    telemetry_interval.tick().await;

    loop {
        tokio::select! {
            // --- User commands ---
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UserCommand::Quit) => {
                        info!("Quit command received, shutting down");
                        break;
                    }
                    Some(cmd) => {
                        match handle_user_command(&mut state, cmd, &ui_tx).await {
                            Ok(true) => {
                                launch_sleep.as_mut().reset(Instant::now() + launch_delay);
                                launch_pending = true;
                            }
                            Ok(false) => {}
                            Err(e) => {
                                // A closed scope mid-run is a wiring bug; the
                                // TUI swaps to the recovery view and the loop
                                // keeps draining commands until the user quits.
                                warn!("session operation failed: {}", e);
                                let _ = ui_tx.send(UiUpdate::Fatal(e.to_string())).await;
                            }
                        }
                    }
                    None => {
                        info!("Command channel closed, shutting down");
                        break;
                    }
                }
            }

            // --- Analysis launch completion ---
            _ = &mut launch_sleep, if launch_pending => {
                launch_pending = false;
                if let Err(e) = complete_launch(&mut state, &ui_tx).await {
                    warn!("launch completion failed: {}", e);
                    let _ = ui_tx.send(UiUpdate::Fatal(e.to_string())).await;
                }
            }

            // --- Dashboard telemetry refresh ---
            _ = telemetry_interval.tick() => {
                if state.screen == Screen::Dashboard {
                    let frame = state.telemetry_frame();
                    let _ = ui_tx.send(UiUpdate::Telemetry(frame)).await;
                }
            }
        }
    }

    info!("Application event loop exiting");
    Ok(())
}

fn far_future() -> Instant {
    // A year out; reset before every real use.
    Instant::now() + Duration::from_secs(86_400 * 365)
}

/// Handle a user command from the TUI.
///
/// Returns `Ok(true)` when a launch countdown should start.
async fn handle_user_command(
    state: &mut AppState,
    cmd: UserCommand,
    ui_tx: &mpsc::Sender<UiUpdate>,
) -> Result<bool, SessionError> {
    match cmd {
        UserCommand::SelectTeam(team) => {
            state.session.update_team(team)?;
            // Picking a matchup clears any previous validation failure.
            state.session.set_error(None)?;
            push_session(state, ui_tx).await?;
        }
        UserCommand::SelectPatch(patch) => {
            state.session.update_patch(patch)?;
            push_session(state, ui_tx).await?;
        }
        UserCommand::SelectPhase(phase) => {
            state.session.update_phase(phase)?;
            push_session(state, ui_tx).await?;
        }
        UserCommand::SelectRole(role) => {
            state.session.update_role(role)?;
            push_session(state, ui_tx).await?;
        }
        UserCommand::RunAnalysis => {
            let snapshot = state.session.snapshot()?;
            if snapshot.is_loading {
                // A launch is already counting down; ignore the repeat.
                return Ok(false);
            }
            if snapshot.selected_team.is_none() {
                info!("Launch rejected: no matchup selected");
                state.session.set_error(Some(setup::ERR_TEAM_REQUIRED.to_string()))?;
                push_session(state, ui_tx).await?;
                return Ok(false);
            }
            info!("Starting analysis launch");
            state.session.set_error(None)?;
            state.session.set_loading(true)?;
            push_session(state, ui_tx).await?;
            return Ok(true);
        }
        UserCommand::ResetFilters => {
            state.session.reset_filters()?;
            push_session(state, ui_tx).await?;
        }
        UserCommand::Navigate(screen) => {
            state.screen = screen;
            let _ = ui_tx.send(UiUpdate::ScreenChanged(screen)).await;
        }
        UserCommand::CycleTheme => {
            let preference = state.theme.cycle();
            if let Some(resolved) = state.theme.applied() {
                let _ = ui_tx.send(UiUpdate::ThemeChanged(resolved)).await;
            }
            state.toasts.post_with(
                ToastKind::Info,
                format!("Theme: {}", preference.as_str()),
                None,
                state.toast_duration(),
            );
        }
        UserCommand::ExportBriefing => match state.export_briefing() {
            Ok(path) => {
                info!("Briefing exported to {}", path.display());
                state.toasts.post_with(
                    ToastKind::Success,
                    "Briefing Exported",
                    Some(path.display().to_string()),
                    state.toast_duration(),
                );
            }
            Err(e) => {
                warn!("briefing export failed: {:#}", e);
                state.toasts.post_with(
                    ToastKind::Error,
                    "Export Failed",
                    Some(format!("{e:#}")),
                    state.toast_duration(),
                );
            }
        },
        UserCommand::Quit => {
            // Handled in the main loop.
        }
    }
    Ok(false)
}

/// Finish an analysis launch: clear the loading flag and navigate to the
/// dashboard. The `ScreenChanged` signal is issued exactly once per launch.
async fn complete_launch(
    state: &mut AppState,
    ui_tx: &mpsc::Sender<UiUpdate>,
) -> Result<(), SessionError> {
    state.session.set_loading(false)?;
    push_session(state, ui_tx).await?;

    state.screen = Screen::Dashboard;
    let _ = ui_tx.send(UiUpdate::ScreenChanged(Screen::Dashboard)).await;
    state.toasts.post_with(
        ToastKind::Success,
        "Neural Sync Complete",
        None,
        state.toast_duration(),
    );
    info!("Analysis launch complete, dashboard active");
    Ok(())
}

/// Send the current session snapshot to the TUI.
async fn push_session(
    state: &AppState,
    ui_tx: &mpsc::Sender<UiUpdate>,
) -> Result<(), SessionError> {
    let snapshot = state.session.snapshot()?;
    let _ = ui_tx.send(UiUpdate::Session(snapshot)).await;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::PrefStore;
    use crate::session::SessionStore;
    use crate::theme::{ResolvedTheme, SystemScheme, ThemeOptions};
    use std::sync::Arc;

    struct NullScheme;

    impl SystemScheme for NullScheme {
        fn detect(&self) -> Option<ResolvedTheme> {
            None
        }
    }

    fn test_state() -> (AppState, SessionStore) {
        let store = SessionStore::new();
        let prefs = Arc::new(PrefStore::open(":memory:").unwrap());
        let theme = ThemeManager::new(ThemeOptions::default(), prefs, Box::new(NullScheme));
        let state = AppState::new(
            Config::default(),
            store.handle(),
            theme,
            ToastBus::new(),
        );
        (state, store)
    }

    fn ui_channel() -> (mpsc::Sender<UiUpdate>, mpsc::Receiver<UiUpdate>) {
        mpsc::channel(64)
    }

    fn drain(rx: &mut mpsc::Receiver<UiUpdate>) -> Vec<UiUpdate> {
        let mut updates = Vec::new();
        while let Ok(update) = rx.try_recv() {
            updates.push(update);
        }
        updates
    }

    #[tokio::test]
    async fn run_analysis_without_team_sets_error_and_no_loading() {
        let (mut state, _store) = test_state();
        let (tx, mut rx) = ui_channel();

        let launch = handle_user_command(&mut state, UserCommand::RunAnalysis, &tx)
            .await
            .unwrap();
        assert!(!launch);

        let snapshot = state.session.snapshot().unwrap();
        assert_eq!(snapshot.error.as_deref(), Some(setup::ERR_TEAM_REQUIRED));
        assert!(!snapshot.is_loading);

        // The failed validation is still pushed so the TUI can render it.
        let updates = drain(&mut rx);
        assert!(matches!(updates.last(), Some(UiUpdate::Session(_))));
    }

    #[tokio::test]
    async fn run_analysis_with_team_starts_launch() {
        let (mut state, _store) = test_state();
        let (tx, _rx) = ui_channel();

        state
            .session
            .update_team(Some(setup::TEAMS[0].to_string()))
            .unwrap();
        let launch = handle_user_command(&mut state, UserCommand::RunAnalysis, &tx)
            .await
            .unwrap();
        assert!(launch);

        let snapshot = state.session.snapshot().unwrap();
        assert!(snapshot.is_loading);
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn run_analysis_while_loading_is_ignored() {
        let (mut state, _store) = test_state();
        let (tx, _rx) = ui_channel();

        state
            .session
            .update_team(Some(setup::TEAMS[0].to_string()))
            .unwrap();
        assert!(handle_user_command(&mut state, UserCommand::RunAnalysis, &tx)
            .await
            .unwrap());
        // Second launch attempt while the first is still in flight.
        assert!(!handle_user_command(&mut state, UserCommand::RunAnalysis, &tx)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn selecting_team_clears_previous_error() {
        let (mut state, _store) = test_state();
        let (tx, _rx) = ui_channel();

        handle_user_command(&mut state, UserCommand::RunAnalysis, &tx)
            .await
            .unwrap();
        assert!(state.session.snapshot().unwrap().error.is_some());

        handle_user_command(
            &mut state,
            UserCommand::SelectTeam(Some(setup::TEAMS[1].to_string())),
            &tx,
        )
        .await
        .unwrap();
        let snapshot = state.session.snapshot().unwrap();
        assert!(snapshot.error.is_none());
        assert_eq!(snapshot.selected_team.as_deref(), Some(setup::TEAMS[1]));
    }

    #[tokio::test]
    async fn complete_launch_navigates_to_dashboard_once() {
        let (mut state, _store) = test_state();
        let (tx, mut rx) = ui_channel();

        state.session.set_loading(true).unwrap();
        complete_launch(&mut state, &tx).await.unwrap();

        assert_eq!(state.screen, Screen::Dashboard);
        assert!(!state.session.snapshot().unwrap().is_loading);

        let screen_changes = drain(&mut rx)
            .into_iter()
            .filter(|u| matches!(u, UiUpdate::ScreenChanged(Screen::Dashboard)))
            .count();
        assert_eq!(screen_changes, 1);
    }

    #[tokio::test]
    async fn navigate_command_switches_screen() {
        let (mut state, _store) = test_state();
        let (tx, mut rx) = ui_channel();

        handle_user_command(&mut state, UserCommand::Navigate(Screen::Briefing), &tx)
            .await
            .unwrap();
        assert_eq!(state.screen, Screen::Briefing);
        assert!(matches!(
            drain(&mut rx).last(),
            Some(UiUpdate::ScreenChanged(Screen::Briefing))
        ));
    }

    #[tokio::test]
    async fn closed_scope_surfaces_as_error() {
        let (mut state, store) = test_state();
        let (tx, _rx) = ui_channel();
        store.close();

        let result = handle_user_command(
            &mut state,
            UserCommand::SelectRole("Vanguard".to_string()),
            &tx,
        )
        .await;
        assert_eq!(result, Err(SessionError::ScopeClosed));
    }

    #[tokio::test]
    async fn cycle_theme_posts_toast_and_update() {
        let (mut state, _store) = test_state();
        let (tx, mut rx) = ui_channel();
        let mut toasts = state.toasts.subscribe();

        handle_user_command(&mut state, UserCommand::CycleTheme, &tx)
            .await
            .unwrap();

        toasts.poll(Instant::now());
        assert_eq!(toasts.active().len(), 1);
        assert_eq!(toasts.active()[0].toast.kind, ToastKind::Info);
        assert!(drain(&mut rx)
            .iter()
            .any(|u| matches!(u, UiUpdate::ThemeChanged(_))));
    }

    #[test]
    fn telemetry_jitter_stays_within_bounds() {
        let (mut state, _store) = test_state();

        for _ in 0..50 {
            let frame = state.telemetry_frame();
            for (value, card) in frame.metric_values.iter().zip(dashboard::METRIC_CARDS) {
                if let Some(base) = card.percent {
                    let shown: f64 = value.trim_end_matches('%').parse().unwrap();
                    // 0.05 covers the one-decimal rounding in the display form.
                    assert!(
                        (shown - base).abs() <= METRIC_JITTER + 0.05,
                        "jitter out of range: {shown} vs {base}"
                    );
                } else {
                    assert_eq!(value, card.value);
                }
            }
        }
    }

    #[test]
    fn feed_is_capped_and_newest_first() {
        let (mut state, _store) = test_state();

        let mut last_frame = None;
        for _ in 0..20 {
            last_frame = Some(state.telemetry_frame());
        }
        let frame = last_frame.unwrap();
        assert_eq!(frame.feed.len(), dashboard::FEED_CAP);
        // The newest entry is one of the rotating tick events.
        assert!(dashboard::TICK_EVENTS.contains(&frame.feed[0].event.as_str()));
    }

    #[tokio::test(start_paused = true)]
    async fn launch_fires_after_configured_delay() {
        let (state, _store) = test_state();
        let delay = Duration::from_millis(state.config.analysis.launch_delay_ms);
        state
            .session
            .update_team(Some(setup::TEAMS[0].to_string()))
            .unwrap();

        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (ui_tx, mut ui_rx) = mpsc::channel(64);
        let session = state.session.clone();
        let handle = tokio::spawn(run(cmd_rx, ui_tx, state));

        cmd_tx.send(UserCommand::RunAnalysis).await.unwrap();
        tokio::time::sleep(delay / 2).await;
        assert!(session.snapshot().unwrap().is_loading);

        tokio::time::sleep(delay).await;
        assert!(!session.snapshot().unwrap().is_loading);

        cmd_tx.send(UserCommand::Quit).await.unwrap();
        handle.await.unwrap().unwrap();

        let mut dashboard_signals = 0;
        while let Ok(update) = ui_rx.try_recv() {
            if matches!(update, UiUpdate::ScreenChanged(Screen::Dashboard)) {
                dashboard_signals += 1;
            }
        }
        assert_eq!(dashboard_signals, 1);
    }
}
