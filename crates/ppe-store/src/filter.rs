//! Derived views over the entry list.

use chrono::NaiveDate;

use ppe_core::{Entry, ProcessType};

/// Criteria for the dashboard's filtered view of the entry list.
///
/// All criteria are conjunctive; an unset criterion matches everything.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    /// Case-insensitive substring match against party name and product name.
    pub search: Option<String>,
    /// Exact challan date.
    pub date: Option<NaiveDate>,
    pub process_type: Option<ProcessType>,
}

impl EntryFilter {
    #[must_use]
    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = entry.party_name.to_lowercase().contains(&needle)
                || entry.product_name.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(date) = self.date {
            if entry.date != date {
                return false;
            }
        }
        if let Some(process_type) = self.process_type {
            if entry.process_type != process_type {
                return false;
            }
        }
        true
    }
}
