use thiserror::Error;

/// Errors from the preference store.
///
/// Variants carry rendered strings rather than the source errors so that
/// values can cross the message boundary (`Message` must be `Clone`, and
/// neither `rusqlite::Error` nor `std::io::Error` is).
#[derive(Debug, Clone, Error)]
pub enum PrefsError {
    #[error("database error: {0}")]
    Database(String),

    #[error("io error: {0}")]
    Io(String),

    /// No usable data directory could be resolved for this user.
    #[error("no data directory available")]
    NoDataDir,

    /// A background task was cancelled or panicked before finishing.
    #[error("background task failed: {0}")]
    Task(String),
}

impl From<rusqlite::Error> for PrefsError {
    fn from(err: rusqlite::Error) -> Self {
        PrefsError::Database(err.to_string())
    }
}

impl From<std::io::Error> for PrefsError {
    fn from(err: std::io::Error) -> Self {
        PrefsError::Io(err.to_string())
    }
}
