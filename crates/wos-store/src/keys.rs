//! Store key naming scheme
//!
//! Global blobs use a fixed `webOS_` key; per-user blobs append the user
//! id. Keys must stay stable across releases or existing data is orphaned.

/// Registered user list
pub const USERS: &str = "webOS_users";

/// Current session record
pub const SESSION: &str = "webOS_user";

/// Dark mode preference
pub const DARK_MODE: &str = "webOS_darkMode";

/// Per-user desktop snapshot
pub fn desktop(user_id: &str) -> String {
    format!("webOS_desktop_{user_id}")
}

/// Per-user file tree
pub fn files(user_id: &str) -> String {
    format!("webOS_files_{user_id}")
}

/// Per-user code editor files
pub fn code_files(user_id: &str) -> String {
    format!("webOS_codeFiles_{user_id}")
}

/// Per-user notes
pub fn notes(user_id: &str) -> String {
    format!("webOS_notes_{user_id}")
}

/// Per-user calendar events
pub fn calendar_events(user_id: &str) -> String {
    format!("webOS_calendar_events_{user_id}")
}

/// Per-user terminal scrollback
pub fn terminal_history(user_id: &str) -> String {
    format!("webOS_terminal_history_{user_id}")
}

/// Per-user browser tabs
pub fn browser_tabs(user_id: &str) -> String {
    format!("webOS_browser_tabs_{user_id}")
}

/// Per-user browser bookmarks
pub fn browser_bookmarks(user_id: &str) -> String {
    format!("webOS_browser_bookmarks_{user_id}")
}

/// Per-user weather state
pub fn weather(user_id: &str) -> String {
    format!("webOS_weather_{user_id}")
}

/// Per-user notifications
pub fn notifications(user_id: &str) -> String {
    format!("webOS_notifications_{user_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_user_keys_embed_user_id() {
        assert_eq!(files("42"), "webOS_files_42");
        assert_eq!(notes("42"), "webOS_notes_42");
        assert_eq!(desktop("42"), "webOS_desktop_42");
    }
}
