// TUI widget modules for each cockpit panel and screen.

pub mod action_plan;
pub mod briefing;
pub mod dashboard;
pub mod help_bar;
pub mod patterns;
pub mod players;
pub mod setup;
pub mod sidebar;
pub mod simulator;
pub mod status_bar;
pub mod toasts;
