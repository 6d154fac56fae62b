//! Static-credential seed for the session context.
//!
//! Single-operator tool; these are display-gate credentials, not a security
//! boundary. The session context may replace the password at runtime.

use serde::{Deserialize, Serialize};

fn default_username() -> String {
    "admin".to_string()
}

fn default_password() -> String {
    "admin@123".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default = "default_username")]
    pub username: String,

    #[serde(default = "default_password")]
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = AuthConfig::default();
        assert_eq!(config.username, "admin");
        assert_eq!(config.password, "admin@123");
    }
}
