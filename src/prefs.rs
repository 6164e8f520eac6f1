use rusqlite::{Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::PrefsError;
use crate::state::profile::StoredProfile;

/// The preference store keeps the two profile strings in a small SQLite
/// key-value table.
///
/// The database file lives in the user's data directory:
/// - Linux: ~/.local/share/icon-checker/prefs.db
/// - macOS: ~/Library/Application Support/icon-checker/prefs.db
/// - Windows: %APPDATA%\icon-checker\prefs.db
///
/// Every operation opens its own connection from the path: background tasks
/// cannot share a connection (`rusqlite::Connection` is not `Send`), and a
/// store that fails to open must never take the screen down with it.

pub const KEY_DISPLAY_NAME: &str = "displayName";
pub const KEY_USERNAME: &str = "username";

/// Resolve the path where the preference database is stored.
pub fn default_path() -> Result<PathBuf, PrefsError> {
    let mut path = dirs::data_dir()
        .or_else(dirs::home_dir)
        .ok_or(PrefsError::NoDataDir)?;
    path.push("icon-checker");
    path.push("prefs.db");
    Ok(path)
}

/// Open (or create) the database at `path` and ensure the schema exists.
fn open(path: &Path) -> Result<Connection, PrefsError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let conn = Connection::open(path)?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS prefs (
            key     TEXT PRIMARY KEY,
            value   TEXT NOT NULL
        )",
        [],
    )?;
    Ok(conn)
}

/// Read the value stored under `key`, or `None` when absent.
pub fn get(path: &Path, key: &str) -> Result<Option<String>, PrefsError> {
    let conn = open(path)?;
    let value = conn
        .query_row("SELECT value FROM prefs WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(value)
}

/// Store `value` under `key`, replacing any previous value.
pub fn set(path: &Path, key: &str, value: &str) -> Result<(), PrefsError> {
    let conn = open(path)?;
    conn.execute(
        "INSERT INTO prefs (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        [key, value],
    )?;
    Ok(())
}

/// Load both profile fields at startup.
///
/// A failed read for either key degrades to "absent": the caller keeps its
/// default and the failure is only logged.
pub async fn load_profile(path: PathBuf) -> StoredProfile {
    // Spawn blocking task for the database reads
    let loaded = tokio::task::spawn_blocking(move || {
        let read = |key: &str| match get(&path, key) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "failed to read preference");
                None
            }
        };

        StoredProfile {
            display_name: read(KEY_DISPLAY_NAME),
            handle: read(KEY_USERNAME),
        }
    })
    .await;

    match loaded {
        Ok(stored) => stored,
        Err(err) => {
            warn!(error = %err, "preference load task failed");
            StoredProfile::default()
        }
    }
}

/// Persist one profile field. Fire-and-forget from the caller's
/// perspective; the result is only reported for logging.
pub async fn store_value(path: PathBuf, key: &'static str, value: String) -> Result<(), PrefsError> {
    // Spawn blocking task for the database write
    tokio::task::spawn_blocking(move || set(&path, key, &value))
        .await
        .map_err(|err| PrefsError::Task(err.to_string()))?
}
