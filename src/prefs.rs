// SQLite persistence for user preferences.
//
// A single key-value table holds the persisted theme preference and the
// last session selections. The value outlives the process; last write wins
// across restarts.

use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

/// Key under which the theme preference is stored by default.
pub const THEME_KEY: &str = "theme";

/// SQLite-backed preference store.
pub struct PrefStore {
    conn: Mutex<Connection>,
}

impl PrefStore {
    /// Open (or create) the preference database at `path` and ensure the
    /// schema exists. Pass `":memory:"` for an ephemeral store in tests.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open preference store at {path}"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )
        .context("failed to set preference store pragmas")?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS prefs (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )
        .context("failed to create preference schema")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().expect("preference store lock poisoned")
    }

    /// Read a preference value. `Ok(None)` when the key has never been set.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.lock();
        conn.query_row(
            "SELECT value FROM prefs WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .with_context(|| format!("failed to read preference `{key}`"))
    }

    /// Write a preference value, replacing any previous one.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.lock();
        conn.execute(
            "INSERT INTO prefs (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )
        .with_context(|| format!("failed to write preference `{key}`"))?;
        Ok(())
    }

    /// Remove a preference. No-op when absent.
    pub fn delete(&self, key: &str) -> Result<()> {
        let conn = self.lock();
        conn.execute("DELETE FROM prefs WHERE key = ?1", params![key])
            .with_context(|| format!("failed to delete preference `{key}`"))?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_store() -> PrefStore {
        PrefStore::open(":memory:").expect("in-memory store should open")
    }

    #[test]
    fn get_missing_key_is_none() {
        let store = memory_store();
        assert_eq!(store.get("nope").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = memory_store();
        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn set_overwrites_previous_value() {
        let store = memory_store();
        store.set(THEME_KEY, "light").unwrap();
        store.set(THEME_KEY, "system").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("system"));
    }

    #[test]
    fn delete_removes_key_and_is_idempotent() {
        let store = memory_store();
        store.set("k", "v").unwrap();
        store.delete("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        store.delete("k").unwrap();
    }

    #[test]
    fn keys_are_independent() {
        let store = memory_store();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }
}
