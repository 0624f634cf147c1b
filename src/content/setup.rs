// Option lists for the session-setup screen.

/// Available matchups.
pub const TEAMS: [&str; 3] = [
    "Team Alpha vs Team Beta",
    "Team Gamma vs Team Delta",
    "Team Epsilon vs Team Zeta",
];

/// Patch-set labels.
pub const PATCHES: [&str; 3] = ["STRATOS 1.0 (PRO)", "STRATOS 0.9", "LEGACY 9.4"];

/// Session-phase labels.
pub const PHASES: [&str; 4] = [
    "Synchronized Full",
    "Early Neural",
    "Mid Convergence",
    "Late Terminal",
];

/// Analytic-focus labels.
pub const ROLES: [&str; 6] = [
    "Neural Core",
    "Vanguard",
    "Pathfinder",
    "Focus",
    "Execution",
    "Support",
];

/// Error code surfaced when a launch is attempted with no matchup selected.
pub const ERR_TEAM_REQUIRED: &str = "SYSERR: TEAM_MATCH_REQUIRED";
