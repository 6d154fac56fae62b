//! Entry repository — CRUD against the remote entry collection.
//!
//! Each operation maps one-to-one onto a remote call and suspends until the
//! call resolves. No implicit retries; retry policy belongs to the caller.

use async_trait::async_trait;
use tracing::debug;

use ppe_core::{Entry, NewEntry};

use crate::error::{check_status, ApiError};
use crate::updates::EntryUpdate;
use crate::EntryApi;

/// Remote CRUD operations over the entry collection.
///
/// Implemented by [`EntryApi`] for the live service; the state store is
/// generic over this trait so tests can run against an in-memory double.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// All entries, ordered by creation timestamp descending (newest first).
    async fn list(&self) -> Result<Vec<Entry>, ApiError>;

    /// Single entry by identifier.
    async fn get(&self, id: &str) -> Result<Entry, ApiError>;

    /// Store a new entry. The remote assigns `id` and `createdAt` and both are
    /// returned on the persisted entry. Draft validation is the caller's
    /// responsibility before invoking this.
    async fn create(&self, draft: &NewEntry) -> Result<Entry, ApiError>;

    /// Merge the set fields into the existing entry; unset fields are left
    /// untouched. Returns the server-confirmed merged entry.
    async fn update(&self, id: &str, update: &EntryUpdate) -> Result<Entry, ApiError>;

    /// Remove the entry permanently. A second call for the same identifier
    /// reports `NotFound`.
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

#[async_trait]
impl EntryRepository for EntryApi {
    async fn list(&self) -> Result<Vec<Entry>, ApiError> {
        debug!("listing entries");
        let resp = self.http().get(self.url("/entries")).send().await?;
        let resp = check_status(resp, "entries").await?;
        Ok(resp.json().await?)
    }

    async fn get(&self, id: &str) -> Result<Entry, ApiError> {
        debug!(id, "fetching entry");
        let resp = self.http().get(self.entry_url(id)).send().await?;
        let resp = check_status(resp, &format!("entry {id}")).await?;
        Ok(resp.json().await?)
    }

    async fn create(&self, draft: &NewEntry) -> Result<Entry, ApiError> {
        debug!(party = %draft.party_name, "creating entry");
        let resp = self
            .http()
            .post(self.url("/entries"))
            .json(draft)
            .send()
            .await?;
        let resp = check_status(resp, "entries").await?;
        Ok(resp.json().await?)
    }

    async fn update(&self, id: &str, update: &EntryUpdate) -> Result<Entry, ApiError> {
        if update.is_empty() {
            return self.get(id).await;
        }
        debug!(id, "updating entry");
        let resp = self
            .http()
            .put(self.entry_url(id))
            .json(update)
            .send()
            .await?;
        let resp = check_status(resp, &format!("entry {id}")).await?;
        Ok(resp.json().await?)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        debug!(id, "deleting entry");
        let resp = self.http().delete(self.entry_url(id)).send().await?;
        check_status(resp, &format!("entry {id}")).await?;
        Ok(())
    }
}
