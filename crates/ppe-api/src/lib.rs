//! # ppe-api
//!
//! HTTP repository client for the remote PPE Manager collections.
//!
//! All remote state lives behind a small REST surface: the entry collection
//! (`/entries`), the display configuration record (`/config`), and the image
//! host (`/upload`). This crate translates between those wire shapes and the
//! typed entities in `ppe-core`, and owns the error taxonomy for remote calls.
//!
//! The client is a stateless translation layer. It performs no retries and
//! holds no entry state; the in-memory session list belongs to `ppe-store`.

pub mod config;
pub mod entries;
pub mod error;
#[cfg(test)]
mod test_http;
pub mod updates;
pub mod upload;

pub use config::ConfigStore;
pub use entries::EntryRepository;
pub use error::ApiError;
pub use updates::{EntryUpdate, EntryUpdateBuilder};
pub use upload::ImageHost;

use std::time::Duration;

use ppe_config::ApiConfig;

/// HTTP client bound to one remote entry service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct EntryApi {
    http: reqwest::Client,
    base_url: String,
}

impl EntryApi {
    /// Create a client for the given base URL with default transport settings.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: normalize_base_url(base_url.into()),
        }
    }

    /// Create a client from local configuration, applying the configured
    /// transport timeout.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the underlying client cannot be built.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: normalize_base_url(config.base_url.clone()),
        })
    }

    pub(crate) const fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// URL addressing a single entry by identifier.
    pub(crate) fn entry_url(&self, id: &str) -> String {
        format!("{}/entries?id={}", self.base_url, urlencoding::encode(id))
    }
}

fn normalize_base_url(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}
