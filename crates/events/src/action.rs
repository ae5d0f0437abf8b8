//! Known interaction actions.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use storefront_core::DomainError;

/// The actions the browser client and feed scoring understand.
///
/// Parsing is case-insensitive because clients have historically sent both
/// `"Seen"` and `"seen"`. Events carrying any other action string are still
/// stored verbatim; they just don't contribute to feed scoring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Seen,
    Order,
    Reorder,
    Cancel,
}

impl ActionKind {
    /// Canonical capitalized wire form (`"Seen"`, `"Order"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seen => "Seen",
            Self::Order => "Order",
            Self::Reorder => "Reorder",
            Self::Cancel => "Cancel",
        }
    }
}

impl core::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "seen" => Ok(Self::Seen),
            "order" => Ok(Self::Order),
            "reorder" => Ok(Self::Reorder),
            "cancel" => Ok(Self::Cancel),
            other => Err(DomainError::validation(format!("unknown action: {other}"))),
        }
    }
}
