//! Image hosting client.
//!
//! Accepts an inline-encoded image (data URL) and returns a durable hosted
//! URL. Upload failure handling — in particular the signature fallback — is
//! the caller's concern; this client only reports the error.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{check_status, ApiError};
use crate::EntryApi;

/// Upload access to the cloud image host.
#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Upload an inline-encoded image; returns the hosted URL.
    async fn upload_image(&self, image: &str) -> Result<String, ApiError>;
}

#[derive(Deserialize)]
struct UploadResponse {
    url: String,
}

#[async_trait]
impl ImageHost for EntryApi {
    async fn upload_image(&self, image: &str) -> Result<String, ApiError> {
        debug!(bytes = image.len(), "uploading image");
        let resp = self
            .http()
            .post(self.url("/upload"))
            .json(&serde_json::json!({ "image": image }))
            .send()
            .await?;
        let resp = check_status(resp, "upload").await?;
        let body: UploadResponse = resp.json().await?;
        Ok(body.url)
    }
}
