//! # ppe-core
//!
//! Core types and validation rules for PPE Manager.
//!
//! This crate provides the foundational types shared across all PPE Manager
//! crates:
//! - Entity structs for the persisted challan record (`Entry`, `NewEntry`)
//! - The fixed `ProcessType` finish enumeration
//! - The user-edited `EntryDraft` and its pure validation rules
//! - The remote display configuration record (`AppConfig`)

pub mod draft;
pub mod entities;
pub mod enums;
pub mod validate;

pub use draft::EntryDraft;
pub use entities::{AppConfig, Entry, NewEntry};
pub use enums::ProcessType;
pub use validate::{validate_draft, ValidationErrors};
