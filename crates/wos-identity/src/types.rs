//! User and session types

use serde::{Deserialize, Serialize};

/// A registered user account, as stored in the user list blob.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    /// Opaque user id; scopes all per-user store keys
    pub id: String,
    pub username: String,
    /// Stored as entered; the credential check itself matches it verbatim
    pub password: String,
    #[serde(default)]
    pub settings: UserSettings,
}

/// Per-user shell preferences.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserSettings {
    pub theme: String,
    pub wallpaper: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            wallpaper: "default".to_string(),
        }
    }
}

/// The logged-in session record. Never carries the password.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub username: String,
}

impl Session {
    /// Create a session for a user
    pub fn for_user(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_omits_password() {
        let user = User {
            id: "1700000000000".to_string(),
            username: "ada".to_string(),
            password: "hunter2".to_string(),
            settings: UserSettings::default(),
        };

        let session = Session::for_user(&user);
        let json = serde_json::to_string(&session).unwrap();
        assert!(!json.contains("hunter2"));
        assert!(json.contains("ada"));
    }

    #[test]
    fn test_user_settings_default_on_missing_field() {
        let json = r#"{"id":"1","username":"ada","password":"pw"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.settings.theme, "light");
        assert_eq!(user.settings.wallpaper, "default");
    }
}
