// Message types shared between the orchestrator and the TUI.

use crate::session::SessionState;
use crate::theme::ResolvedTheme;

// ---------------------------------------------------------------------------
// Screens
// ---------------------------------------------------------------------------

/// The navigable screens of the cockpit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Dashboard,
    Patterns,
    Players,
    Simulator,
    Briefing,
    ActionPlan,
}

impl Screen {
    /// All screens in sidebar order.
    pub const ALL: [Screen; 7] = [
        Screen::Setup,
        Screen::Dashboard,
        Screen::Patterns,
        Screen::Players,
        Screen::Simulator,
        Screen::Briefing,
        Screen::ActionPlan,
    ];

    /// Sidebar label.
    pub fn nav_label(self) -> &'static str {
        match self {
            Screen::Setup => "SYNC_CONTEXT",
            Screen::Dashboard => "COMMAND_CENTER",
            Screen::Patterns => "NEURAL_PATTERNS",
            Screen::Players => "TELEMETRY_NODES",
            Screen::Simulator => "KINETIC_EMULATOR",
            Screen::Briefing => "NEURAL_BRIEFING",
            Screen::ActionPlan => "STRATEGIC_PLAN",
        }
    }

    /// Human title used in the status bar and panel borders.
    pub fn title(self) -> &'static str {
        match self {
            Screen::Setup => "New Session",
            Screen::Dashboard => "Dashboard",
            Screen::Patterns => "Pattern Discovery",
            Screen::Players => "Player Telemetry",
            Screen::Simulator => "Strategy Simulator",
            Screen::Briefing => "Coaching Briefing",
            Screen::ActionPlan => "Action Plan",
        }
    }
}

// ---------------------------------------------------------------------------
// Telemetry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Success,
    Warning,
    Neutral,
}

/// One line of the dashboard's rolling neural log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedLine {
    /// mm:ss timestamp.
    pub time: String,
    pub event: String,
    pub kind: FeedKind,
}

/// Periodic dashboard refresh: jittered metric display values plus the
/// current log feed (newest first).
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryFrame {
    /// Display strings for the four metric cards, in card order.
    pub metric_values: Vec<String>,
    pub feed: Vec<FeedLine>,
}

// ---------------------------------------------------------------------------
// Commands and updates
// ---------------------------------------------------------------------------

/// User intent, sent from the TUI to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    SelectTeam(Option<String>),
    SelectPatch(String),
    SelectPhase(String),
    SelectRole(String),
    /// Validate the session and start the simulated analysis launch.
    RunAnalysis,
    ResetFilters,
    Navigate(Screen),
    CycleTheme,
    ExportBriefing,
    Quit,
}

/// State pushed from the orchestrator to the TUI.
#[derive(Debug, Clone, PartialEq)]
pub enum UiUpdate {
    /// Full session snapshot after any session mutation.
    Session(SessionState),
    /// Navigation signal; issued exactly once per completed launch.
    ScreenChanged(Screen),
    ThemeChanged(ResolvedTheme),
    Telemetry(TelemetryFrame),
    /// Unrecoverable orchestrator error: the TUI swaps to the recovery view.
    Fatal(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_screens_have_distinct_labels() {
        let labels: Vec<&str> = Screen::ALL.iter().map(|s| s.nav_label()).collect();
        let mut dedup = labels.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), labels.len());
    }

    #[test]
    fn sidebar_order_starts_with_setup() {
        assert_eq!(Screen::ALL[0], Screen::Setup);
        assert_eq!(Screen::ALL[1], Screen::Dashboard);
    }
}
