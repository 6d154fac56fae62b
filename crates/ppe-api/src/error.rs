//! Repository error taxonomy.
//!
//! Validation errors never originate here — drafts are validated locally
//! before any remote call. `Validation` covers the remote store rejecting a
//! payload shape (HTTP 400).

use serde::Deserialize;
use thiserror::Error;

/// Errors from remote repository operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The store has no record for the identifier (HTTP 404).
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    /// The remote store rejected the payload shape (HTTP 400).
    #[error("Payload rejected: {0}")]
    Validation(String),

    /// The network is unreachable or the response body could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote responded with a failure status.
    #[error("Server error: HTTP {status}: {message}")]
    Server { status: u16, message: String },
}

/// Map a non-2xx response to the error taxonomy; pass 2xx through.
///
/// `resource` names what was being addressed ("entry 66f..", "config") for the
/// `NotFound` message.
pub(crate) async fn check_status(
    resp: reqwest::Response,
    resource: &str,
) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = error_message(&body);
    match status.as_u16() {
        404 => Err(ApiError::NotFound {
            resource: resource.to_string(),
        }),
        400 => Err(ApiError::Validation(message)),
        status => Err(ApiError::Server { status, message }),
    }
}

/// Extract the message from an `{"error": "..."}` body, falling back to the
/// raw body text.
fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.to_string())
}
