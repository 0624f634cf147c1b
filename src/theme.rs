// Theme preference resolution and persistence.
//
// The stored preference may be `light`, `dark`, or `system`; only the
// *resolved* value (always light or dark) is ever applied to the render
// palette. Resolution happens once per activation and again on every
// `set_theme`; the OS signal is not watched for live changes.

use std::sync::Arc;

use tracing::warn;

use crate::prefs::PrefStore;

// ---------------------------------------------------------------------------
// Preference and resolved forms
// ---------------------------------------------------------------------------

/// The persisted user choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    System,
}

impl ThemePreference {
    /// The persisted string form.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Parse a persisted value. Unknown strings yield `None` so callers can
    /// fall back to the configured default.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            "system" => Some(ThemePreference::System),
            _ => None,
        }
    }

    /// Advance the cyclic toggle: light -> dark -> system -> light.
    pub fn next(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::System,
            ThemePreference::System => ThemePreference::Light,
        }
    }
}

/// The concrete value applied to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

// ---------------------------------------------------------------------------
// OS color-scheme probe
// ---------------------------------------------------------------------------

/// Source of the operating-system color-scheme signal.
///
/// `None` means the signal is unavailable or unreadable; resolution then
/// falls back to the configured default. Implementations must never fail.
pub trait SystemScheme: Send + Sync {
    fn detect(&self) -> Option<ResolvedTheme>;
}

/// Environment-based probe for terminal sessions.
///
/// Checks `STRATOS_COLOR_SCHEME` (explicit `light`/`dark` override) first,
/// then the conventional `COLORFGBG` variable, whose last `;`-separated
/// field is the background color index.
pub struct EnvScheme;

impl SystemScheme for EnvScheme {
    fn detect(&self) -> Option<ResolvedTheme> {
        if let Ok(explicit) = std::env::var("STRATOS_COLOR_SCHEME") {
            match explicit.as_str() {
                "light" => return Some(ResolvedTheme::Light),
                "dark" => return Some(ResolvedTheme::Dark),
                _ => {}
            }
        }
        let colorfgbg = std::env::var("COLORFGBG").ok()?;
        scheme_from_colorfgbg(&colorfgbg)
    }
}

/// Interpret a `COLORFGBG` value ("fg;bg" or "fg;default;bg"). Background
/// indices 0-6 and 8 are the dark half of the base-16 palette.
pub fn scheme_from_colorfgbg(value: &str) -> Option<ResolvedTheme> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match bg {
        0..=6 | 8 => Some(ResolvedTheme::Dark),
        7 | 9..=15 => Some(ResolvedTheme::Light),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// ThemeManager
// ---------------------------------------------------------------------------

/// Options recognized at initialization.
#[derive(Debug, Clone)]
pub struct ThemeOptions {
    pub default_theme: ThemePreference,
    pub enable_system_detection: bool,
    pub storage_key: String,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        ThemeOptions {
            default_theme: ThemePreference::System,
            enable_system_detection: true,
            storage_key: crate::prefs::THEME_KEY.to_string(),
        }
    }
}

/// Resolves and persists the display theme.
pub struct ThemeManager {
    options: ThemeOptions,
    store: Arc<PrefStore>,
    probe: Box<dyn SystemScheme>,
    applied: Option<ResolvedTheme>,
}

impl ThemeManager {
    pub fn new(options: ThemeOptions, store: Arc<PrefStore>, probe: Box<dyn SystemScheme>) -> Self {
        ThemeManager {
            options,
            store,
            probe,
            applied: None,
        }
    }

    /// The effective preference: stored value if present and parseable,
    /// otherwise the configured default. Store failures degrade to the
    /// default rather than propagating.
    pub fn preference(&self) -> ThemePreference {
        match self.store.get(&self.options.storage_key) {
            Ok(Some(raw)) => {
                ThemePreference::parse(&raw).unwrap_or(self.options.default_theme)
            }
            Ok(None) => self.options.default_theme,
            Err(e) => {
                warn!("preference store unavailable, using default theme: {e:#}");
                self.options.default_theme
            }
        }
    }

    /// Resolve the effective preference to a concrete theme and record it
    /// as applied. Idempotent: resolving twice with no intervening
    /// `set_theme` yields the same value.
    pub fn resolve(&mut self) -> ResolvedTheme {
        let preference = self.preference();
        let resolved = match preference {
            ThemePreference::Light => ResolvedTheme::Light,
            ThemePreference::Dark => ResolvedTheme::Dark,
            ThemePreference::System => {
                let probed = if self.options.enable_system_detection {
                    self.probe.detect()
                } else {
                    None
                };
                probed.unwrap_or_else(|| concrete_fallback(self.options.default_theme))
            }
        };
        self.applied = Some(resolved);
        resolved
    }

    /// Persist `preference` verbatim (even `system`), then re-resolve.
    /// A persistence failure is logged and skipped, never fatal.
    pub fn set_theme(&mut self, preference: ThemePreference) -> ResolvedTheme {
        if let Err(e) = self
            .store
            .set(&self.options.storage_key, preference.as_str())
        {
            warn!("failed to persist theme preference: {e:#}");
        }
        self.resolve()
    }

    /// Advance the cyclic toggle and apply it. Returns the new preference.
    pub fn cycle(&mut self) -> ThemePreference {
        let next = self.preference().next();
        self.set_theme(next);
        next
    }

    /// The last resolved value, if resolution has run.
    pub fn applied(&self) -> Option<ResolvedTheme> {
        self.applied
    }
}

/// Concrete fallback when the system signal is unavailable: the configured
/// default if it is already concrete, otherwise light.
fn concrete_fallback(default: ThemePreference) -> ResolvedTheme {
    match default {
        ThemePreference::Dark => ResolvedTheme::Dark,
        _ => ResolvedTheme::Light,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Probe returning a fixed (but mutable) signal.
    struct FixedScheme(Arc<Mutex<Option<ResolvedTheme>>>);

    impl SystemScheme for FixedScheme {
        fn detect(&self) -> Option<ResolvedTheme> {
            *self.0.lock().unwrap()
        }
    }

    fn manager_with(
        options: ThemeOptions,
        signal: Option<ResolvedTheme>,
    ) -> (ThemeManager, Arc<PrefStore>, Arc<Mutex<Option<ResolvedTheme>>>) {
        let store = Arc::new(PrefStore::open(":memory:").unwrap());
        let cell = Arc::new(Mutex::new(signal));
        let manager = ThemeManager::new(
            options,
            Arc::clone(&store),
            Box::new(FixedScheme(Arc::clone(&cell))),
        );
        (manager, store, cell)
    }

    #[test]
    fn preference_parse_round_trip() {
        for pref in [
            ThemePreference::Light,
            ThemePreference::Dark,
            ThemePreference::System,
        ] {
            assert_eq!(ThemePreference::parse(pref.as_str()), Some(pref));
        }
        assert_eq!(ThemePreference::parse("neon"), None);
    }

    #[test]
    fn cycle_order_is_light_dark_system() {
        assert_eq!(ThemePreference::Light.next(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.next(), ThemePreference::System);
        assert_eq!(ThemePreference::System.next(), ThemePreference::Light);
    }

    #[test]
    fn cycle_three_times_returns_to_start() {
        let (mut manager, _store, _cell) =
            manager_with(ThemeOptions::default(), Some(ResolvedTheme::Dark));
        manager.set_theme(ThemePreference::Light);
        assert_eq!(manager.cycle(), ThemePreference::Dark);
        assert_eq!(manager.cycle(), ThemePreference::System);
        assert_eq!(manager.cycle(), ThemePreference::Light);
    }

    #[test]
    fn system_preference_follows_os_signal() {
        let (mut manager, store, _cell) =
            manager_with(ThemeOptions::default(), Some(ResolvedTheme::Dark));
        store.set(crate::prefs::THEME_KEY, "system").unwrap();
        assert_eq!(manager.resolve(), ResolvedTheme::Dark);
    }

    #[test]
    fn applied_theme_frozen_until_next_resolution() {
        let (mut manager, store, cell) =
            manager_with(ThemeOptions::default(), Some(ResolvedTheme::Dark));
        store.set(crate::prefs::THEME_KEY, "system").unwrap();
        assert_eq!(manager.resolve(), ResolvedTheme::Dark);

        // The OS signal flips, but no set_theme intervenes: the applied
        // value must not change until the next resolution.
        *cell.lock().unwrap() = Some(ResolvedTheme::Light);
        assert_eq!(manager.applied(), Some(ResolvedTheme::Dark));
        assert_eq!(manager.resolve(), ResolvedTheme::Light);
    }

    #[test]
    fn resolve_is_idempotent() {
        let (mut manager, _store, _cell) =
            manager_with(ThemeOptions::default(), Some(ResolvedTheme::Dark));
        let first = manager.resolve();
        let second = manager.resolve();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_stored_value_uses_default() {
        let options = ThemeOptions {
            default_theme: ThemePreference::Dark,
            enable_system_detection: true,
            storage_key: "theme".into(),
        };
        let (mut manager, _store, _cell) = manager_with(options, None);
        assert_eq!(manager.preference(), ThemePreference::Dark);
        assert_eq!(manager.resolve(), ResolvedTheme::Dark);
    }

    #[test]
    fn unavailable_probe_falls_back_to_default() {
        // Default is `system`, probe reports nothing: resolution degrades
        // to the concrete fallback (light) rather than failing.
        let (mut manager, store, _cell) = manager_with(ThemeOptions::default(), None);
        store.set(crate::prefs::THEME_KEY, "system").unwrap();
        assert_eq!(manager.resolve(), ResolvedTheme::Light);
    }

    #[test]
    fn detection_disabled_ignores_probe() {
        let options = ThemeOptions {
            default_theme: ThemePreference::System,
            enable_system_detection: false,
            storage_key: "theme".into(),
        };
        let (mut manager, store, _cell) = manager_with(options, Some(ResolvedTheme::Dark));
        store.set("theme", "system").unwrap();
        assert_eq!(manager.resolve(), ResolvedTheme::Light);
    }

    #[test]
    fn set_theme_persists_verbatim() {
        let (mut manager, store, _cell) =
            manager_with(ThemeOptions::default(), Some(ResolvedTheme::Dark));
        manager.set_theme(ThemePreference::System);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("system"));
        // Stored `system` resolves through the probe.
        assert_eq!(manager.applied(), Some(ResolvedTheme::Dark));
    }

    #[test]
    fn garbage_stored_value_uses_default() {
        let (mut manager, store, _cell) =
            manager_with(ThemeOptions::default(), Some(ResolvedTheme::Dark));
        store.set("theme", "chartreuse").unwrap();
        assert_eq!(manager.preference(), ThemePreference::System);
        assert_eq!(manager.resolve(), ResolvedTheme::Dark);
    }

    #[test]
    fn colorfgbg_parsing() {
        assert_eq!(scheme_from_colorfgbg("15;0"), Some(ResolvedTheme::Dark));
        assert_eq!(scheme_from_colorfgbg("0;15"), Some(ResolvedTheme::Light));
        assert_eq!(scheme_from_colorfgbg("12;default;8"), Some(ResolvedTheme::Dark));
        assert_eq!(scheme_from_colorfgbg("garbage"), None);
        assert_eq!(scheme_from_colorfgbg(""), None);
    }
}
