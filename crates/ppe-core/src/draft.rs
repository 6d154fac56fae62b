//! The unpersisted, user-edited in-progress entry.
//!
//! Every text input is held exactly as typed; nothing is parsed or trimmed
//! until the draft is converted into a create payload, and conversion is only
//! possible once validation passes.

use crate::entities::NewEntry;
use crate::enums::ProcessType;
use crate::validate::{parse_count, parse_date, parse_quantity, validate_draft, ValidationErrors};

/// An in-progress entry as entered by the user.
///
/// Image fields carry hosted URLs (or an inline data URL for the signature
/// fallback) and are set programmatically after capture, not typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub date: String,
    pub challan_number: String,
    pub unit: String,
    pub party_name: String,
    pub product_name: String,
    pub width_value: String,
    pub width_image: Option<String>,
    pub length_value: String,
    pub length_image: Option<String>,
    pub height_value: String,
    pub height_image: Option<String>,
    pub process_type: String,
    pub quantity: String,
    pub balance_qty: String,
    pub return_quantity: String,
    pub packing_details: String,
    pub remarks: String,
    pub signature: Option<String>,
    pub authorized_by: String,
}

impl EntryDraft {
    /// Validate and convert into the create payload.
    ///
    /// Free text is trimmed, blank optional fields become `None`, and numeric
    /// fields are parsed.
    ///
    /// # Errors
    ///
    /// Returns the full [`ValidationErrors`] mapping if any rule is violated;
    /// nothing is converted in that case.
    pub fn into_new_entry(self) -> Result<NewEntry, ValidationErrors> {
        let errors = validate_draft(&self);
        let (Some(date), Ok(process_type), Some(quantity)) = (
            parse_date(&self.date),
            self.process_type.trim().parse::<ProcessType>(),
            parse_quantity(&self.quantity),
        ) else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewEntry {
            date,
            challan_number: self.challan_number.trim().to_string(),
            unit: self.unit.trim().to_string(),
            party_name: self.party_name.trim().to_string(),
            product_name: self.product_name.trim().to_string(),
            width_value: blank_to_none(&self.width_value),
            width_image: self.width_image,
            length_value: blank_to_none(&self.length_value),
            length_image: self.length_image,
            height_value: blank_to_none(&self.height_value),
            height_image: self.height_image,
            process_type,
            quantity,
            balance_qty: parse_count(&self.balance_qty),
            return_quantity: parse_count(&self.return_quantity),
            packing_details: blank_to_none(&self.packing_details),
            remarks: blank_to_none(&self.remarks),
            signature: self.signature,
            authorized_by: self.authorized_by.trim().to_string(),
        })
    }
}

fn blank_to_none(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn complete_draft() -> EntryDraft {
        EntryDraft {
            date: "2024-06-01".to_string(),
            challan_number: "  CH-102 ".to_string(),
            unit: "Company 1".to_string(),
            party_name: " Acme ".to_string(),
            product_name: "Widget".to_string(),
            width_value: "12mm".to_string(),
            process_type: "Gold".to_string(),
            quantity: "10".to_string(),
            balance_qty: "4".to_string(),
            remarks: "   ".to_string(),
            authorized_by: "J. Doe".to_string(),
            ..EntryDraft::default()
        }
    }

    #[test]
    fn converts_and_normalizes() {
        let entry = complete_draft().into_new_entry().unwrap();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(entry.challan_number, "CH-102");
        assert_eq!(entry.party_name, "Acme");
        assert_eq!(entry.process_type, ProcessType::Gold);
        assert_eq!(entry.quantity, 10);
        assert_eq!(entry.balance_qty, Some(4));
        assert_eq!(entry.return_quantity, None);
        assert_eq!(entry.width_value, Some("12mm".to_string()));
        assert_eq!(entry.remarks, None);
    }

    #[test]
    fn invalid_draft_returns_full_error_mapping() {
        let mut draft = complete_draft();
        draft.party_name.clear();
        draft.quantity = "0".to_string();

        let errors = draft.into_new_entry().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.get("partyName").is_some());
        assert!(errors.get("quantity").is_some());
    }

    #[test]
    fn signature_carries_through_unchanged() {
        let mut draft = complete_draft();
        draft.signature = Some("data:image/png;base64,AAAA".to_string());
        let entry = draft.into_new_entry().unwrap();
        assert_eq!(entry.signature.as_deref(), Some("data:image/png;base64,AAAA"));
    }
}
