//! Entity structs for PPE Manager.
//!
//! The wire representation uses camelCase field names (`partyName`,
//! `balanceQty`, `createdAt`); the remote collection assigns `id` and
//! `createdAt` on insertion and neither is ever part of an update payload.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::ProcessType;

/// Project name used when no configuration record exists yet.
pub const DEFAULT_PROJECT_NAME: &str = "PPE Manager";

/// Company units used when no configuration record exists yet.
pub const DEFAULT_COMPANY_UNITS: &[&str] = &["Company 1", "Company 2"];

/// One product-processing challan record, as persisted in the remote store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Store-assigned identifier; unique and immutable for the entry's lifetime.
    pub id: String,
    pub date: NaiveDate,
    pub challan_number: String,
    /// Company unit name; one of the configured set, or empty if unselected.
    pub unit: String,
    pub party_name: String,
    pub product_name: String,
    pub width_value: Option<String>,
    pub width_image: Option<String>,
    pub length_value: Option<String>,
    pub length_image: Option<String>,
    pub height_value: Option<String>,
    pub height_image: Option<String>,
    pub process_type: ProcessType,
    pub quantity: u32,
    pub balance_qty: Option<u32>,
    pub return_quantity: Option<u32>,
    pub packing_details: Option<String>,
    pub remarks: Option<String>,
    /// Hosted URL, or an inline data URL when the upload fallback was taken.
    pub signature: Option<String>,
    pub authorized_by: String,
    /// Set exactly once by the store at insertion.
    pub created_at: DateTime<Utc>,
}

/// The create payload: an [`Entry`] minus the store-assigned fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub date: NaiveDate,
    pub challan_number: String,
    pub unit: String,
    pub party_name: String,
    pub product_name: String,
    pub width_value: Option<String>,
    pub width_image: Option<String>,
    pub length_value: Option<String>,
    pub length_image: Option<String>,
    pub height_value: Option<String>,
    pub height_image: Option<String>,
    pub process_type: ProcessType,
    pub quantity: u32,
    pub balance_qty: Option<u32>,
    pub return_quantity: Option<u32>,
    pub packing_details: Option<String>,
    pub remarks: Option<String>,
    pub signature: Option<String>,
    pub authorized_by: String,
}

/// Display-only settings held in the remote configuration record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub project_name: String,
    pub company_units: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            company_units: DEFAULT_COMPANY_UNITS.iter().map(ToString::to_string).collect(),
        }
    }
}
