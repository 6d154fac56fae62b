//! Local image files as inline data URLs for the media host.

use std::path::Path;

use anyhow::Context;
use base64::Engine;

use ppe_api::{EntryApi, ImageHost};

/// Read a local image and inline-encode it as a data URL.
pub fn image_data_url(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("reading image {}", path.display()))?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:image/png;base64,{encoded}"))
}

/// Upload a local image to the media host, if a path was given.
pub async fn upload_optional(
    api: &EntryApi,
    path: Option<&Path>,
) -> anyhow::Result<Option<String>> {
    match path {
        Some(path) => {
            let data_url = image_data_url(path)?;
            Ok(Some(api.upload_image(&data_url).await?))
        }
        None => Ok(None),
    }
}
