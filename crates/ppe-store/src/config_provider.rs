//! Cached view of the remote display configuration.
//!
//! "Record absent" and "service unreachable" are distinct outcomes: only a
//! `NotFound` falls back to the built-in defaults (the store simply has not
//! been configured yet). Transport and server failures propagate so an
//! outage is never silently presented as default configuration.

use tracing::debug;

use ppe_api::{ApiError, ConfigStore};
use ppe_core::AppConfig;

/// Session-scoped cache of the remote `{projectName, companyUnits}` record.
pub struct ConfigProvider<C> {
    client: C,
    config: Option<AppConfig>,
    configured: bool,
}

impl<C: ConfigStore> ConfigProvider<C> {
    #[must_use]
    pub fn new(client: C) -> Self {
        Self {
            client,
            config: None,
            configured: false,
        }
    }

    /// Fetch and cache the remote record.
    ///
    /// # Errors
    ///
    /// Propagates transport and server failures; a missing record is not an
    /// error and yields the defaults instead.
    pub async fn load(&mut self) -> Result<&AppConfig, ApiError> {
        let (config, configured) = match self.client.fetch_config().await {
            Ok(config) => (config, true),
            Err(ApiError::NotFound { .. }) => {
                debug!("no configuration record yet, using defaults");
                (AppConfig::default(), false)
            }
            Err(err) => return Err(err),
        };
        self.configured = configured;
        Ok(self.config.insert(config))
    }

    /// The cached configuration, if `load` has completed.
    #[must_use]
    pub fn config(&self) -> Option<&AppConfig> {
        self.config.as_ref()
    }

    /// Whether a configuration record actually exists remotely (as opposed to
    /// the cached value being the built-in defaults).
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.configured
    }

    /// Write a new project name through to the remote record and update the
    /// cache, seeding it from the defaults if `load` has not run yet.
    ///
    /// # Errors
    ///
    /// Propagates the repository error; the cache is left unchanged.
    pub async fn set_project_name(&mut self, project_name: &str) -> Result<(), ApiError> {
        self.client.save_project_name(project_name).await?;
        let config = self.config.get_or_insert_with(AppConfig::default);
        config.project_name = project_name.to_string();
        self.configured = true;
        Ok(())
    }
}
