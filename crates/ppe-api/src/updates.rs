//! Entry update builder.
//!
//! The partial-update payload is an explicit set of named optional fields, so
//! unknown fields cannot be merged into a stored document and the immutable
//! fields (`id`, `createdAt`) are unrepresentable. Double-`Option` fields
//! distinguish "leave untouched" (outer `None`) from "clear" (`Some(None)`,
//! serialized as `null`).

use chrono::NaiveDate;
use ppe_core::ProcessType;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challan_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_value: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_image: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_value: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_image: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_value: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_image: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_type: Option<ProcessType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_qty: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_quantity: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packing_details: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized_by: Option<String>,
}

impl EntryUpdate {
    /// True when no field is set; such an update merges nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        serde_json::to_value(self)
            .map(|v| v.as_object().is_some_and(serde_json::Map::is_empty))
            .unwrap_or_default()
    }
}

pub struct EntryUpdateBuilder(EntryUpdate);

impl EntryUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(EntryUpdate::default())
    }

    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.0.date = Some(date);
        self
    }

    #[must_use]
    pub fn challan_number(mut self, challan_number: impl Into<String>) -> Self {
        self.0.challan_number = Some(challan_number.into());
        self
    }

    #[must_use]
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.0.unit = Some(unit.into());
        self
    }

    #[must_use]
    pub fn party_name(mut self, party_name: impl Into<String>) -> Self {
        self.0.party_name = Some(party_name.into());
        self
    }

    #[must_use]
    pub fn product_name(mut self, product_name: impl Into<String>) -> Self {
        self.0.product_name = Some(product_name.into());
        self
    }

    #[must_use]
    pub fn width_value(mut self, width_value: Option<String>) -> Self {
        self.0.width_value = Some(width_value);
        self
    }

    #[must_use]
    pub fn width_image(mut self, width_image: Option<String>) -> Self {
        self.0.width_image = Some(width_image);
        self
    }

    #[must_use]
    pub fn length_value(mut self, length_value: Option<String>) -> Self {
        self.0.length_value = Some(length_value);
        self
    }

    #[must_use]
    pub fn length_image(mut self, length_image: Option<String>) -> Self {
        self.0.length_image = Some(length_image);
        self
    }

    #[must_use]
    pub fn height_value(mut self, height_value: Option<String>) -> Self {
        self.0.height_value = Some(height_value);
        self
    }

    #[must_use]
    pub fn height_image(mut self, height_image: Option<String>) -> Self {
        self.0.height_image = Some(height_image);
        self
    }

    #[must_use]
    pub fn process_type(mut self, process_type: ProcessType) -> Self {
        self.0.process_type = Some(process_type);
        self
    }

    #[must_use]
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.0.quantity = Some(quantity);
        self
    }

    #[must_use]
    pub fn balance_qty(mut self, balance_qty: Option<u32>) -> Self {
        self.0.balance_qty = Some(balance_qty);
        self
    }

    #[must_use]
    pub fn return_quantity(mut self, return_quantity: Option<u32>) -> Self {
        self.0.return_quantity = Some(return_quantity);
        self
    }

    #[must_use]
    pub fn packing_details(mut self, packing_details: Option<String>) -> Self {
        self.0.packing_details = Some(packing_details);
        self
    }

    #[must_use]
    pub fn remarks(mut self, remarks: Option<String>) -> Self {
        self.0.remarks = Some(remarks);
        self
    }

    #[must_use]
    pub fn signature(mut self, signature: Option<String>) -> Self {
        self.0.signature = Some(signature);
        self
    }

    #[must_use]
    pub fn authorized_by(mut self, authorized_by: impl Into<String>) -> Self {
        self.0.authorized_by = Some(authorized_by.into());
        self
    }

    #[must_use]
    pub fn build(self) -> EntryUpdate {
        self.0
    }
}

impl Default for EntryUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
