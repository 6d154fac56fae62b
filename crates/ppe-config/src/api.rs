//! Remote API endpoint configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

/// Default remote-call timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the entry service, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Transport-layer timeout applied to every remote call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
