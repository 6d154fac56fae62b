//! Remote display configuration record.
//!
//! A `NotFound` from `fetch_config` means no configuration record exists yet;
//! it is deliberately distinct from transport or server failure so an outage
//! is never mistaken for "unconfigured".

use async_trait::async_trait;
use tracing::debug;

use ppe_core::AppConfig;

use crate::error::{check_status, ApiError};
use crate::EntryApi;

/// Read/write access to the remote configuration record.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// The stored `{projectName, companyUnits}` record.
    async fn fetch_config(&self) -> Result<AppConfig, ApiError>;

    /// Replace the stored project name.
    async fn save_project_name(&self, project_name: &str) -> Result<(), ApiError>;
}

#[async_trait]
impl ConfigStore for EntryApi {
    async fn fetch_config(&self) -> Result<AppConfig, ApiError> {
        debug!("fetching app config");
        let resp = self.http().get(self.url("/config")).send().await?;
        let resp = check_status(resp, "config").await?;
        Ok(resp.json().await?)
    }

    async fn save_project_name(&self, project_name: &str) -> Result<(), ApiError> {
        debug!(project_name, "saving project name");
        let resp = self
            .http()
            .post(self.url("/config"))
            .json(&serde_json::json!({ "projectName": project_name }))
            .send()
            .await?;
        check_status(resp, "config").await?;
        Ok(())
    }
}
