//! Account registration and session handling for the desktop shell.
//!
//! Accounts live in a single JSON blob under the shared user-list key,
//! and the active session in its own key, so any [`wos_store::BlobStore`]
//! backend (browser local storage, in-memory for tests) works unchanged.

mod auth;
mod error;
mod types;

pub use auth::{current_session, login, logout, signup};
pub use error::AuthError;
pub use types::{Session, User, UserSettings};
