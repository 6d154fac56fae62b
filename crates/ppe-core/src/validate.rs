//! Pure validation rules for an [`EntryDraft`].
//!
//! Every rule is evaluated independently; all violations are reported together
//! in a single field-to-message mapping. No side effects, so the rules are safe
//! to re-run on every edit (debouncing belongs to the presentation layer).

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::draft::EntryDraft;
use crate::enums::ProcessType;

/// Field-to-message mapping for every rule a draft violates.
///
/// Keys are the wire field names (`partyName`, not `party_name`) so the
/// presentation layer can attach messages to inputs directly. An empty mapping
/// means the draft is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    #[serde(flatten)]
    fields: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Message for a single field, if that field violated a rule.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.fields {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Check a draft against every rule and report all violations together.
#[must_use]
pub fn validate_draft(draft: &EntryDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.date.trim().is_empty() {
        errors.insert("date", "Date is required");
    } else if parse_date(&draft.date).is_none() {
        errors.insert("date", "Valid date is required (YYYY-MM-DD)");
    }

    if draft.party_name.trim().is_empty() {
        errors.insert("partyName", "Party name is required");
    }
    if draft.product_name.trim().is_empty() {
        errors.insert("productName", "Product name is required");
    }

    if draft.process_type.trim().is_empty() {
        errors.insert("processType", "Process type is required");
    } else if draft.process_type.trim().parse::<ProcessType>().is_err() {
        errors.insert("processType", "Valid process type is required");
    }

    if parse_quantity(&draft.quantity).is_none() {
        errors.insert("quantity", "Valid quantity is required");
    }

    if draft.authorized_by.trim().is_empty() {
        errors.insert("authorizedBy", "Authorization name is required");
    }

    errors
}

/// Parse a typed calendar date (`YYYY-MM-DD`).
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Parse the required quantity: any real number whose integer part is at least
/// one (the form accepts free text; fractional input truncates like the
/// original entry form did).
pub(crate) fn parse_quantity(raw: &str) -> Option<u32> {
    let value = raw.trim().parse::<f64>().ok()?;
    if !value.is_finite() || value.trunc() < 1.0 {
        return None;
    }
    Some(value.trunc() as u32)
}

/// Parse an optional non-negative count; blank or unparseable input is absent.
pub(crate) fn parse_count(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = trimmed.parse::<f64>().ok()?;
    if !value.is_finite() || value.trunc() < 0.0 {
        return None;
    }
    Some(value.trunc() as u32)
}
