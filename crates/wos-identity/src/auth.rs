//! Signup, login, and session management over a [`BlobStore`]

use wos_store::keys;
use wos_store::{BlobStore, BlobStoreExt};

use crate::error::AuthError;
use crate::types::{Session, User, UserSettings};

fn load_users<S: BlobStore + ?Sized>(store: &S) -> Vec<User> {
    store.get_json(keys::USERS).unwrap_or_default()
}

fn save_users<S: BlobStore + ?Sized>(store: &S, users: &[User]) {
    store.set_json(keys::USERS, &users);
}

/// Register a new account and persist it to the user list.
///
/// `now_ms` seeds the user id, with a suffix bump on the (unlikely)
/// collision with an existing id.
pub fn signup<S: BlobStore + ?Sized>(
    store: &S,
    username: &str,
    password: &str,
    confirm: &str,
    now_ms: u64,
) -> Result<User, AuthError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AuthError::InvalidUsername);
    }
    if password.is_empty() {
        return Err(AuthError::InvalidPassword);
    }
    if password != confirm {
        return Err(AuthError::PasswordMismatch);
    }

    let mut users = load_users(store);
    if users.iter().any(|u| u.username == username) {
        return Err(AuthError::UsernameTaken);
    }

    let mut id = now_ms.to_string();
    let mut bump = 1u64;
    while users.iter().any(|u| u.id == id) {
        id = format!("{now_ms}-{bump}");
        bump += 1;
    }

    let user = User {
        id,
        username: username.to_string(),
        password: password.to_string(),
        settings: UserSettings::default(),
    };
    users.push(user.clone());
    save_users(store, &users);
    Ok(user)
}

/// Check credentials and persist the resulting session.
pub fn login<S: BlobStore + ?Sized>(
    store: &S,
    username: &str,
    password: &str,
) -> Result<Session, AuthError> {
    let users = load_users(store);
    let user = users
        .iter()
        .find(|u| u.username == username && u.password == password)
        .ok_or(AuthError::InvalidCredentials)?;

    let session = Session::for_user(user);
    store.set_json(keys::SESSION, &session);
    Ok(session)
}

/// The session persisted by the last [`login`], if any.
pub fn current_session<S: BlobStore + ?Sized>(store: &S) -> Option<Session> {
    store.get_json(keys::SESSION)
}

/// Drop the persisted session. Per-user app data stays in the store.
pub fn logout<S: BlobStore + ?Sized>(store: &S) {
    store.remove(keys::SESSION);
}
