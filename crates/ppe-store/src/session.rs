//! Explicit session context for the login gate.
//!
//! Replaces global mutable authentication state with an object constructed at
//! session start and dropped at session end. Static string comparison only —
//! a display gate for a single-operator tool, not a security boundary.

use thiserror::Error;

use ppe_config::AuthConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Old password does not match")]
    WrongPassword,

    #[error("New password cannot be blank")]
    BlankPassword,
}

/// Authentication state for the active session.
pub struct Session {
    username: String,
    password: String,
    authenticated: bool,
}

impl Session {
    /// Start an unauthenticated session seeded with the configured
    /// credentials.
    #[must_use]
    pub fn new(auth: &AuthConfig) -> Self {
        Self {
            username: auth.username.clone(),
            password: auth.password.clone(),
            authenticated: false,
        }
    }

    /// Attempt to authenticate; returns whether the credentials matched.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        let matched = username == self.username && password == self.password;
        if matched {
            self.authenticated = true;
        }
        matched
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Replace the stored password for the rest of the session.
    ///
    /// # Errors
    ///
    /// Returns `WrongPassword` if `old` does not match the current password,
    /// or `BlankPassword` if `new` is empty after trimming.
    pub fn change_password(&mut self, old: &str, new: &str) -> Result<(), SessionError> {
        if old != self.password {
            return Err(SessionError::WrongPassword);
        }
        if new.trim().is_empty() {
            return Err(SessionError::BlankPassword);
        }
        self.password = new.to_string();
        Ok(())
    }
}
