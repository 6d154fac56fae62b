//! # ppe-config
//!
//! Layered local configuration loading for PPE Manager using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PPE_*` prefix, `__` as separator)
//! 2. Project-level `.ppe/config.toml`
//! 3. User-level `~/.config/ppe-manager/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PPE_API__BASE_URL` -> `api.base_url`,
//! `PPE_AUTH__USERNAME` -> `auth.username`, etc. The `__` (double underscore)
//! separates nested config sections.
//!
//! This crate covers only local settings (endpoint, credentials seed). The
//! display configuration record (`projectName`, company units) lives in the
//! remote store and is fetched through `ppe-api`.

mod api;
mod auth;
mod error;

pub use api::ApiConfig;
pub use auth::AuthConfig;
pub use error::ConfigError;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PpeConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl PpeConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any layer fails to merge or extract.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load a `.env` file from the current directory (or
    /// any parent) before building the figment. This is the typical entry
    /// point for the CLI and tests.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any layer fails to merge or extract.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".ppe/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("PPE_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ppe-manager").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_loads() {
        let config = PpeConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:3000/api");
        assert_eq!(config.auth.username, "admin");
    }

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PPE_API__BASE_URL", "https://ppe.example.com/api");
            jail.set_env("PPE_API__TIMEOUT_SECS", "5");
            let config: PpeConfig = PpeConfig::figment().extract()?;
            assert_eq!(config.api.base_url, "https://ppe.example.com/api");
            assert_eq!(config.api.timeout_secs, 5);
            assert_eq!(config.auth.password, "admin@123");
            Ok(())
        });
    }

    #[test]
    fn local_toml_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir(".ppe")?;
            jail.create_file(
                ".ppe/config.toml",
                r#"
                    [auth]
                    username = "operator"
                "#,
            )?;
            let config: PpeConfig = PpeConfig::figment().extract()?;
            assert_eq!(config.auth.username, "operator");
            assert_eq!(config.auth.password, "admin@123");
            Ok(())
        });
    }
}
