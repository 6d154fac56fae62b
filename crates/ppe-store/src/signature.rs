//! Signature capture.
//!
//! The one path where a remote failure is deliberately absorbed: if the
//! signature image cannot be uploaded to the media host, the inline-encoded
//! image is embedded directly so the entry can still be saved.

use tracing::warn;

use ppe_api::ImageHost;

/// Resolve a captured signature to a hosted URL, falling back to the inline
/// data URL when the upload fails.
pub async fn capture_signature<H: ImageHost>(host: &H, data_url: &str) -> String {
    match host.upload_image(data_url).await {
        Ok(url) => url,
        Err(err) => {
            warn!(%err, "signature upload failed, embedding image inline");
            data_url.to_string()
        }
    }
}
