// Hardcoded mock datasets backing the presentational screens.
//
// There is no data pipeline: every value here is a literal, rendered with
// light animation by the TUI.

pub mod actions;
pub mod briefing;
pub mod dashboard;
pub mod patterns;
pub mod players;
pub mod setup;
pub mod simulator;
