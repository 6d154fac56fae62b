//! Fixed enumerations for PPE Manager.
//!
//! `ProcessType` serializes verbatim (`"RoseGold"`, not `"rose_gold"`) because
//! the remote collection stores the display spelling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Finish/treatment applied to a product batch.
///
/// The set is fixed; no other value is valid anywhere in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessType {
    Gold,
    RoseGold,
    Black,
    Gun,
}

impl ProcessType {
    /// All valid process types, in display order.
    pub const ALL: &'static [Self] = &[Self::Gold, Self::RoseGold, Self::Black, Self::Gun];

    /// Return the string representation used on the wire and in forms.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::RoseGold => "RoseGold",
            Self::Black => "Black",
            Self::Gun => "Gun",
        }
    }
}

impl fmt::Display for ProcessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessType {
    type Err = UnknownProcessType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownProcessType(s.to_string()))
    }
}

/// A string that is not a member of the fixed process-type enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown process type: {0}")]
pub struct UnknownProcessType(pub String);
