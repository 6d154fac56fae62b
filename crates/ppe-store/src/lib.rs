//! # ppe-store
//!
//! Session state for PPE Manager.
//!
//! Owns the single in-memory copy of the entry list for the active session
//! and mediates every mutation through the repository client. Also provides
//! the derived filtered views, the remote display-config provider, the
//! explicit session context for the login gate, and signature capture with
//! its upload fallback.
//!
//! Mutations are applied to memory only after server confirmation. This
//! trades perceived latency for simplicity: with a single operator there is
//! no concurrent edit to reconcile, so no optimistic rollback is needed.

pub mod config_provider;
pub mod filter;
pub mod session;
pub mod signature;
pub mod store;
#[cfg(test)]
pub(crate) mod test_support;

pub use config_provider::ConfigProvider;
pub use filter::EntryFilter;
pub use session::{Session, SessionError};
pub use signature::capture_signature;
pub use store::EntryStore;
