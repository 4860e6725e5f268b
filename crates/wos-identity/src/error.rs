//! Error types for the identity layer

use serde::{Deserialize, Serialize};

/// Errors from signup and login operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthError {
    /// Username or password did not match any account
    InvalidCredentials,
    /// Username is already registered
    UsernameTaken,
    /// Password and confirmation differ
    PasswordMismatch,
    /// Username is empty or whitespace
    InvalidUsername,
    /// Password is empty
    InvalidPassword,
}

impl core::fmt::Display for AuthError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let message = match self {
            AuthError::InvalidCredentials => "invalid username or password",
            AuthError::UsernameTaken => "username already exists",
            AuthError::PasswordMismatch => "passwords don't match",
            AuthError::InvalidUsername => "username must not be empty",
            AuthError::InvalidPassword => "password must not be empty",
        };
        f.write_str(message)
    }
}

impl std::error::Error for AuthError {}
