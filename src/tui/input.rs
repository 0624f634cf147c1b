// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages sent to the
// app orchestrator, or into local ViewState mutations (e.g. moving the
// setup-field focus or a list selection).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::content::{actions, patterns, players, setup};
use crate::protocol::{Screen, UserCommand};

use super::{SetupField, ViewState};

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to
/// the app orchestrator (selection changes, launch, navigation, quit).
/// Returns `None` when the key press was handled locally by mutating
/// `ViewState`, or was ignored.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress; ignoring
    // non-Press events prevents double-processing.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately (escape hatch)
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    match key_event.code {
        KeyCode::Char('q') => Some(UserCommand::Quit),

        // Screen navigation
        KeyCode::Char(c @ '1'..='7') => {
            let index = (c as usize) - ('1' as usize);
            Some(UserCommand::Navigate(Screen::ALL[index]))
        }

        KeyCode::Char('t') => Some(UserCommand::CycleTheme),

        // Export is only meaningful from the briefing screen.
        KeyCode::Char('e') if view_state.screen == Screen::Briefing => {
            Some(UserCommand::ExportBriefing)
        }

        // Reset is only offered where the filters are edited.
        KeyCode::Char('r') if view_state.screen == Screen::Setup => {
            Some(UserCommand::ResetFilters)
        }

        // Vertical movement: setup-field focus or list selection.
        KeyCode::Up | KeyCode::Char('k') => {
            move_vertical(view_state, -1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            move_vertical(view_state, 1);
            None
        }

        // Horizontal movement cycles the focused setup field's options.
        KeyCode::Left | KeyCode::Char('h') if view_state.screen == Screen::Setup => {
            cycle_setup_field(view_state, -1)
        }
        KeyCode::Right | KeyCode::Char('l') if view_state.screen == Screen::Setup => {
            cycle_setup_field(view_state, 1)
        }

        KeyCode::Enter | KeyCode::Char(' ') => match view_state.screen {
            Screen::Setup => {
                if view_state.setup_focus == SetupField::Launch {
                    Some(UserCommand::RunAnalysis)
                } else {
                    cycle_setup_field(view_state, 1)
                }
            }
            Screen::Simulator => {
                view_state.show_alternative = !view_state.show_alternative;
                None
            }
            Screen::ActionPlan => {
                // Space toggles completion, Enter expands the detail.
                let flags = if key_event.code == KeyCode::Char(' ') {
                    &mut view_state.action_completed
                } else {
                    &mut view_state.action_expanded
                };
                if let Some(flag) = flags.get_mut(view_state.action_selected) {
                    *flag = !*flag;
                }
                None
            }
            _ => None,
        },

        // Simulator timeline toggle
        KeyCode::Char('a') if view_state.screen == Screen::Simulator => {
            view_state.show_alternative = !view_state.show_alternative;
            None
        }

        _ => None,
    }
}

/// Move the per-screen vertical selection by `delta`.
fn move_vertical(view_state: &mut ViewState, delta: i32) {
    match view_state.screen {
        Screen::Setup => {
            view_state.setup_focus = if delta < 0 {
                view_state.setup_focus.prev()
            } else {
                view_state.setup_focus.next()
            };
        }
        Screen::Patterns => {
            view_state.pattern_selected =
                step(view_state.pattern_selected, delta, patterns::PATTERNS.len());
        }
        Screen::Players => {
            view_state.player_selected =
                step(view_state.player_selected, delta, players::PLAYERS.len());
        }
        Screen::ActionPlan => {
            view_state.action_selected =
                step(view_state.action_selected, delta, actions::ACTION_ITEMS.len());
        }
        _ => {}
    }
}

/// Clamp-free wrapping step through a list of `len` entries.
fn step(current: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as i32;
    (((current as i32 + delta) % len + len) % len) as usize
}

/// Cycle the focused setup field's value and emit the matching selection
/// command. The authoritative state lives in the orchestrator; the new
/// value comes back via a `Session` update.
fn cycle_setup_field(view_state: &mut ViewState, delta: i32) -> Option<UserCommand> {
    let session = &view_state.session;
    match view_state.setup_focus {
        SetupField::Team => Some(UserCommand::SelectTeam(cycle_team(
            session.selected_team.as_deref(),
            delta,
        ))),
        SetupField::Patch => Some(UserCommand::SelectPatch(
            cycle_option(&setup::PATCHES, &session.selected_patch, delta).to_string(),
        )),
        SetupField::Phase => Some(UserCommand::SelectPhase(
            cycle_option(&setup::PHASES, &session.selected_phase, delta).to_string(),
        )),
        SetupField::Role => Some(UserCommand::SelectRole(
            cycle_option(&setup::ROLES, &session.selected_role, delta).to_string(),
        )),
        SetupField::Launch => None,
    }
}

/// Cycle through the matchup list, passing through the unselected state:
/// None -> first -> ... -> last -> None.
fn cycle_team(current: Option<&str>, delta: i32) -> Option<String> {
    let len = setup::TEAMS.len() as i32;
    // Positions 0..len are the matchups, position len is "none selected".
    let position = match current {
        Some(team) => setup::TEAMS
            .iter()
            .position(|t| *t == team)
            .map(|i| i as i32)
            .unwrap_or(len),
        None => len,
    };
    let next = ((position + delta) % (len + 1) + (len + 1)) % (len + 1);
    if next == len {
        None
    } else {
        Some(setup::TEAMS[next as usize].to_string())
    }
}

/// Advance through a label list; unknown current values restart at the
/// first entry.
fn cycle_option<'a>(options: &[&'a str], current: &str, delta: i32) -> &'a str {
    let position = options.iter().position(|o| *o == current);
    match position {
        Some(index) => options[step(index, delta, options.len())],
        None => options[0],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
