//! The entry state store.
//!
//! Single in-memory copy of the entry list, kept observably consistent with
//! every mutation the user performs. Errors from the repository propagate
//! unchanged; the list stays at its last-known-good value on a failed
//! mutation, and empties (never stale) on a failed load.

use tracing::debug;

use ppe_api::{ApiError, EntryRepository, EntryUpdate};
use ppe_core::{Entry, NewEntry};

use crate::filter::EntryFilter;

/// In-memory ordered entry list for the active session.
///
/// The list is newest-first, matching the repository's `list()` order;
/// `add` preserves that order by prepending without a full reload.
pub struct EntryStore<R> {
    repo: R,
    entries: Vec<Entry>,
    error: Option<String>,
}

impl<R: EntryRepository> EntryStore<R> {
    #[must_use]
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            entries: Vec::new(),
            error: None,
        }
    }

    /// Replace the in-memory list wholesale with the remote list.
    ///
    /// # Errors
    ///
    /// On failure the list is emptied (fail-safe to an empty, not stale,
    /// view), a user-visible error is recorded, and the `ApiError` is
    /// propagated.
    pub async fn load(&mut self) -> Result<(), ApiError> {
        match self.repo.list().await {
            Ok(entries) => {
                debug!(count = entries.len(), "loaded entries");
                self.entries = entries;
                self.error = None;
                Ok(())
            }
            Err(err) => {
                self.entries.clear();
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Create a new entry remotely and prepend it to the in-memory list.
    ///
    /// # Errors
    ///
    /// Propagates the repository error; the list is left unchanged.
    pub async fn add(&mut self, draft: &NewEntry) -> Result<Entry, ApiError> {
        let entry = self.repo.create(draft).await?;
        self.entries.insert(0, entry.clone());
        Ok(entry)
    }

    /// Merge the given fields remotely and replace the matching in-memory
    /// entry with the server-confirmed result.
    ///
    /// # Errors
    ///
    /// Propagates the repository error; the list is left unchanged.
    pub async fn modify(&mut self, id: &str, update: &EntryUpdate) -> Result<Entry, ApiError> {
        let updated = self.repo.update(id, update).await?;
        if let Some(slot) = self.entries.iter_mut().find(|entry| entry.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    /// Delete the entry remotely and drop it from the in-memory list.
    ///
    /// # Errors
    ///
    /// Propagates the repository error; the list is left unchanged.
    pub async fn remove(&mut self, id: &str) -> Result<(), ApiError> {
        self.repo.delete(id).await?;
        self.entries.retain(|entry| entry.id != id);
        Ok(())
    }

    /// Synchronous lookup in the current in-memory list only.
    ///
    /// Returns `None` for entries not yet loaded; callers needing a
    /// guaranteed fetch must fall back to the repository's `get`.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// The current in-memory list, newest first.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries matching the given filter, in list order.
    #[must_use]
    pub fn filtered(&self, filter: &EntryFilter) -> Vec<&Entry> {
        self.entries.iter().filter(|entry| filter.matches(entry)).collect()
    }

    /// Error recorded by the last failed `load`, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The underlying repository client.
    #[must_use]
    pub const fn repo(&self) -> &R {
        &self.repo
    }
}
