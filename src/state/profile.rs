/// The user profile text fields shown in every preview
///
/// Two free-text fields with fixed placeholder defaults. Stored values
/// loaded at startup overwrite the defaults; edits update the in-memory
/// value immediately and are persisted fire-and-forget by the caller. The
/// in-memory value always reflects the most recent edit, regardless of
/// write completion order.

pub const DEFAULT_DISPLAY_NAME: &str = "Your Name";
pub const DEFAULT_HANDLE: &str = "username";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub display_name: String,
    pub handle: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            handle: DEFAULT_HANDLE.to_string(),
        }
    }
}

/// Values read back from the preference store at startup. `None` means the
/// key was absent (or the read failed), in which case the default stands.
#[derive(Debug, Clone, Default)]
pub struct StoredProfile {
    pub display_name: Option<String>,
    pub handle: Option<String>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply values loaded from the preference store. Absent values keep
    /// the current (default) field.
    pub fn apply_stored(&mut self, stored: StoredProfile) {
        if let Some(name) = stored.display_name {
            self.display_name = name;
        }
        if let Some(handle) = stored.handle {
            self.handle = handle;
        }
    }

    pub fn set_display_name(&mut self, value: String) {
        self.display_name = value;
    }

    pub fn set_handle(&mut self, value: String) {
        self.handle = value;
    }

    /// First character of the display name, used for the placeholder
    /// avatar when no image has been picked yet.
    pub fn initial(&self) -> String {
        self.display_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}
