//! Shared in-memory doubles for ppe-store tests.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};

use ppe_api::{ApiError, EntryRepository, EntryUpdate};
use ppe_core::{Entry, NewEntry, ProcessType};

/// In-memory stand-in for the remote entry collection.
///
/// Assigns sequential identifiers and strictly increasing creation
/// timestamps, lists newest first, and can be switched into a failing mode
/// where every operation reports a server error.
pub(crate) struct MemoryRepository {
    entries: Mutex<Vec<Entry>>,
    seq: AtomicU32,
    failing: AtomicBool,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            seq: AtomicU32::new(0),
            failing: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Insert directly, bypassing the failure switch.
    pub fn seed(&self, draft: &NewEntry) -> Entry {
        let entry = self.persist(draft);
        self.entries.lock().unwrap().push(entry.clone());
        entry
    }

    fn persist(&self, draft: &NewEntry) -> Entry {
        let n = self.seq.fetch_add(1, Ordering::SeqCst);
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        Entry {
            id: format!("mem-{n:04}"),
            date: draft.date,
            challan_number: draft.challan_number.clone(),
            unit: draft.unit.clone(),
            party_name: draft.party_name.clone(),
            product_name: draft.product_name.clone(),
            width_value: draft.width_value.clone(),
            width_image: draft.width_image.clone(),
            length_value: draft.length_value.clone(),
            length_image: draft.length_image.clone(),
            height_value: draft.height_value.clone(),
            height_image: draft.height_image.clone(),
            process_type: draft.process_type,
            quantity: draft.quantity,
            balance_qty: draft.balance_qty,
            return_quantity: draft.return_quantity,
            packing_details: draft.packing_details.clone(),
            remarks: draft.remarks.clone(),
            signature: draft.signature.clone(),
            authorized_by: draft.authorized_by.clone(),
            created_at: base + Duration::seconds(i64::from(n)),
        }
    }

    fn check_failing(&self) -> Result<(), ApiError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ApiError::Server {
                status: 500,
                message: "Internal server error".to_string(),
            });
        }
        Ok(())
    }
}

fn not_found(id: &str) -> ApiError {
    ApiError::NotFound {
        resource: format!("entry {id}"),
    }
}

/// Merge the set fields of an update into an entry, the way the remote store
/// does. `id` and `createdAt` are untouched by construction.
fn apply_update(entry: &mut Entry, update: &EntryUpdate) {
    if let Some(date) = update.date {
        entry.date = date;
    }
    if let Some(challan_number) = &update.challan_number {
        entry.challan_number = challan_number.clone();
    }
    if let Some(unit) = &update.unit {
        entry.unit = unit.clone();
    }
    if let Some(party_name) = &update.party_name {
        entry.party_name = party_name.clone();
    }
    if let Some(product_name) = &update.product_name {
        entry.product_name = product_name.clone();
    }
    if let Some(width_value) = &update.width_value {
        entry.width_value = width_value.clone();
    }
    if let Some(width_image) = &update.width_image {
        entry.width_image = width_image.clone();
    }
    if let Some(length_value) = &update.length_value {
        entry.length_value = length_value.clone();
    }
    if let Some(length_image) = &update.length_image {
        entry.length_image = length_image.clone();
    }
    if let Some(height_value) = &update.height_value {
        entry.height_value = height_value.clone();
    }
    if let Some(height_image) = &update.height_image {
        entry.height_image = height_image.clone();
    }
    if let Some(process_type) = update.process_type {
        entry.process_type = process_type;
    }
    if let Some(quantity) = update.quantity {
        entry.quantity = quantity;
    }
    if let Some(balance_qty) = update.balance_qty {
        entry.balance_qty = balance_qty;
    }
    if let Some(return_quantity) = update.return_quantity {
        entry.return_quantity = return_quantity;
    }
    if let Some(packing_details) = &update.packing_details {
        entry.packing_details = packing_details.clone();
    }
    if let Some(remarks) = &update.remarks {
        entry.remarks = remarks.clone();
    }
    if let Some(signature) = &update.signature {
        entry.signature = signature.clone();
    }
    if let Some(authorized_by) = &update.authorized_by {
        entry.authorized_by = authorized_by.clone();
    }
}

#[async_trait]
impl EntryRepository for MemoryRepository {
    async fn list(&self) -> Result<Vec<Entry>, ApiError> {
        self.check_failing()?;
        let mut entries = self.entries.lock().unwrap().clone();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    async fn get(&self, id: &str) -> Result<Entry, ApiError> {
        self.check_failing()?;
        self.entries
            .lock()
            .unwrap()
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, draft: &NewEntry) -> Result<Entry, ApiError> {
        self.check_failing()?;
        Ok(self.seed(draft))
    }

    async fn update(&self, id: &str, update: &EntryUpdate) -> Result<Entry, ApiError> {
        self.check_failing()?;
        let mut entries = self.entries.lock().unwrap();
        let entry = entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| not_found(id))?;
        apply_update(entry, update);
        Ok(entry.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.check_failing()?;
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}

/// A minimal valid create payload.
pub(crate) fn sample_draft(party_name: &str, product_name: &str) -> NewEntry {
    NewEntry {
        date: chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        challan_number: "CH-102".to_string(),
        unit: "Company 1".to_string(),
        party_name: party_name.to_string(),
        product_name: product_name.to_string(),
        width_value: None,
        width_image: None,
        length_value: None,
        length_image: None,
        height_value: None,
        height_image: None,
        process_type: ProcessType::Gold,
        quantity: 10,
        balance_qty: None,
        return_quantity: None,
        packing_details: None,
        remarks: None,
        signature: None,
        authorized_by: "J. Doe".to_string(),
    }
}
