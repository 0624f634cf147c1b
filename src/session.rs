// Session selection state: single source of truth for the in-progress
// analysis-session configuration (match, patch set, phase, analytic focus).
//
// One `SessionStore` is created at startup and owns the state for the whole
// run. Consumers receive cloneable `SessionHandle`s; every mutation goes
// through a handle so ownership and lifetime stay explicit. Closing the
// store (or dropping it) invalidates all handles: any further operation is
// a wiring bug and fails loudly with `SessionError::ScopeClosed` instead of
// silently returning defaults.

use std::sync::{Arc, Mutex};

use thiserror::Error;
use tokio::sync::watch;

/// Default patch-set label shown before the user picks one.
pub const DEFAULT_PATCH: &str = "STRATOS 1.0 (PRO)";
/// Default session-phase label.
pub const DEFAULT_PHASE: &str = "Synchronized Full";
/// Default analytic-focus label.
pub const DEFAULT_ROLE: &str = "Neural Core";

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// An operation was invoked on a handle after the owning store closed.
    /// This indicates a wiring bug, not a runtime condition.
    #[error("session scope is closed; handle operations require a live SessionStore")]
    ScopeClosed,
}

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// The user's current analysis-session selections.
///
/// `selected_team` is `None` until a matchup is chosen; there is no sentinel
/// string. The three label fields always hold some value and start at the
/// documented defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub selected_team: Option<String>,
    pub selected_patch: String,
    pub selected_phase: String,
    pub selected_role: String,
    /// True while an analysis launch is in flight.
    pub is_loading: bool,
    /// Last validation/operation failure message, if any.
    pub error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState {
            selected_team: None,
            selected_patch: DEFAULT_PATCH.to_string(),
            selected_phase: DEFAULT_PHASE.to_string(),
            selected_role: DEFAULT_ROLE.to_string(),
            is_loading: false,
            error: None,
        }
    }
}

// ---------------------------------------------------------------------------
// SessionStore / SessionHandle
// ---------------------------------------------------------------------------

struct Inner {
    open: bool,
    state: SessionState,
}

/// Owner of the session state. Lives for the whole run; dropping it closes
/// the scope.
pub struct SessionStore {
    inner: Arc<Mutex<Inner>>,
    tx: Arc<watch::Sender<SessionState>>,
}

/// Cloneable accessor for the session state, passed explicitly to every
/// consumer. All operations are synchronous and applied in call order.
#[derive(Clone)]
pub struct SessionHandle {
    inner: Arc<Mutex<Inner>>,
    tx: Arc<watch::Sender<SessionState>>,
}

impl SessionStore {
    /// Create a store with the default state and an open scope.
    pub fn new() -> Self {
        let state = SessionState::default();
        let (tx, _rx) = watch::channel(state.clone());
        SessionStore {
            inner: Arc::new(Mutex::new(Inner { open: true, state })),
            tx: Arc::new(tx),
        }
    }

    /// Obtain a handle for consumers. Handles are cheap to clone.
    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            inner: Arc::clone(&self.inner),
            tx: Arc::clone(&self.tx),
        }
    }

    /// Subscribe to state changes. The receiver always holds the latest
    /// snapshot; intermediate states may be coalesced.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    /// Close the scope. Every subsequent handle operation fails with
    /// `SessionError::ScopeClosed`. Idempotent.
    pub fn close(&self) {
        let mut inner = self.inner.lock().expect("session lock poisoned");
        inner.open = false;
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SessionStore {
    fn drop(&mut self) {
        self.close();
    }
}

impl SessionHandle {
    /// Apply `mutate` to the state and broadcast the result.
    fn update(&self, mutate: impl FnOnce(&mut SessionState)) -> Result<(), SessionError> {
        let mut inner = self.inner.lock().expect("session lock poisoned");
        if !inner.open {
            return Err(SessionError::ScopeClosed);
        }
        mutate(&mut inner.state);
        // Broadcast failure just means nobody is watching; the state itself
        // is still authoritative.
        let _ = self.tx.send(inner.state.clone());
        Ok(())
    }

    /// Replace the selected matchup. `None` clears the selection.
    pub fn update_team(&self, team: Option<String>) -> Result<(), SessionError> {
        self.update(|s| s.selected_team = team)
    }

    /// Replace the patch-set label. No validation at this layer.
    pub fn update_patch(&self, patch: String) -> Result<(), SessionError> {
        self.update(|s| s.selected_patch = patch)
    }

    /// Replace the session-phase label.
    pub fn update_phase(&self, phase: String) -> Result<(), SessionError> {
        self.update(|s| s.selected_phase = phase)
    }

    /// Replace the analytic-focus label.
    pub fn update_role(&self, role: String) -> Result<(), SessionError> {
        self.update(|s| s.selected_role = role)
    }

    pub fn set_loading(&self, loading: bool) -> Result<(), SessionError> {
        self.update(|s| s.is_loading = loading)
    }

    pub fn set_error(&self, error: Option<String>) -> Result<(), SessionError> {
        self.update(|s| s.error = error)
    }

    /// Restore every field to the documented defaults.
    pub fn reset_filters(&self) -> Result<(), SessionError> {
        self.update(|s| *s = SessionState::default())
    }

    /// Read the current state.
    pub fn snapshot(&self) -> Result<SessionState, SessionError> {
        let inner = self.inner.lock().expect("session lock poisoned");
        if !inner.open {
            return Err(SessionError::ScopeClosed);
        }
        Ok(inner.state.clone())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_matches_documented_defaults() {
        let state = SessionState::default();
        assert_eq!(state.selected_team, None);
        assert_eq!(state.selected_patch, DEFAULT_PATCH);
        assert_eq!(state.selected_phase, DEFAULT_PHASE);
        assert_eq!(state.selected_role, DEFAULT_ROLE);
        assert!(!state.is_loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn update_team_leaves_other_fields_untouched() {
        let store = SessionStore::new();
        let handle = store.handle();
        handle
            .update_team(Some("Team Alpha vs Team Beta".into()))
            .unwrap();

        let state = handle.snapshot().unwrap();
        assert_eq!(
            state.selected_team.as_deref(),
            Some("Team Alpha vs Team Beta")
        );
        assert_eq!(state.selected_patch, DEFAULT_PATCH);
        assert_eq!(state.selected_phase, DEFAULT_PHASE);
        assert_eq!(state.selected_role, DEFAULT_ROLE);
        assert!(!state.is_loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn sequential_updates_are_independent() {
        let store = SessionStore::new();
        let handle = store.handle();
        handle.update_patch("STRATOS 0.9".into()).unwrap();
        handle.update_phase("Early Neural".into()).unwrap();
        handle.update_role("Vanguard".into()).unwrap();

        let state = handle.snapshot().unwrap();
        assert_eq!(state.selected_patch, "STRATOS 0.9");
        assert_eq!(state.selected_phase, "Early Neural");
        assert_eq!(state.selected_role, "Vanguard");
        // Team was never set.
        assert!(state.selected_team.is_none());
    }

    #[test]
    fn reset_filters_restores_exact_defaults_from_any_state() {
        let store = SessionStore::new();
        let handle = store.handle();
        handle.update_team(Some("Team Gamma vs Team Delta".into())).unwrap();
        handle.update_patch("LEGACY 9.4".into()).unwrap();
        handle.update_phase("Late Terminal".into()).unwrap();
        handle.update_role("Support".into()).unwrap();
        handle.set_loading(true).unwrap();
        handle.set_error(Some("boom".into())).unwrap();

        handle.reset_filters().unwrap();
        assert_eq!(handle.snapshot().unwrap(), SessionState::default());
    }

    #[test]
    fn closed_scope_rejects_every_operation() {
        let store = SessionStore::new();
        let handle = store.handle();
        store.close();

        assert_eq!(
            handle.update_team(Some("x".into())),
            Err(SessionError::ScopeClosed)
        );
        assert_eq!(handle.update_patch("x".into()), Err(SessionError::ScopeClosed));
        assert_eq!(handle.update_phase("x".into()), Err(SessionError::ScopeClosed));
        assert_eq!(handle.update_role("x".into()), Err(SessionError::ScopeClosed));
        assert_eq!(handle.set_loading(true), Err(SessionError::ScopeClosed));
        assert_eq!(handle.set_error(None), Err(SessionError::ScopeClosed));
        assert_eq!(handle.reset_filters(), Err(SessionError::ScopeClosed));
        assert_eq!(handle.snapshot(), Err(SessionError::ScopeClosed));
    }

    #[test]
    fn dropping_store_closes_scope() {
        let store = SessionStore::new();
        let handle = store.handle();
        drop(store);
        assert_eq!(handle.snapshot(), Err(SessionError::ScopeClosed));
    }

    #[test]
    fn subscribers_observe_updates() {
        let store = SessionStore::new();
        let handle = store.handle();
        let rx = store.subscribe();

        handle.update_role("Pathfinder".into()).unwrap();
        assert_eq!(rx.borrow().selected_role, "Pathfinder");
    }

    #[test]
    fn set_error_and_clear() {
        let store = SessionStore::new();
        let handle = store.handle();
        handle
            .set_error(Some("SYSERR: TEAM_MATCH_REQUIRED".into()))
            .unwrap();
        assert_eq!(
            handle.snapshot().unwrap().error.as_deref(),
            Some("SYSERR: TEAM_MATCH_REQUIRED")
        );
        handle.set_error(None).unwrap();
        assert!(handle.snapshot().unwrap().error.is_none());
    }
}
