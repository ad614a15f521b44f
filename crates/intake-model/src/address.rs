//! Address entity
//!
//! The legacy document format used the street value `"TBD"` as a placeholder
//! sentinel. The model keeps that reading at synchronization time so legacy
//! data self-heals, but factory rows are created with an explicit [`Flag`]
//! and an empty street; the sentinel is never written by this crate.

use crate::flag::{self, Flag, FlagKind};
use crate::id::AddressId;
use crate::text::is_blank;
use serde::{Deserialize, Serialize};

/// Legacy placeholder sentinel accepted in `street`
pub const STREET_SENTINEL: &str = "TBD";

/// A job-site or mailing address on the order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    /// Stable identifier
    pub id: AddressId,
    /// Address kind, free-form ("loss site", "billing", ...)
    pub kind: String,
    /// Whether this is the order's primary address
    pub is_primary: bool,
    /// Whether this address is the loss site
    pub is_loss_site: bool,
    /// Street line
    pub street: String,
    /// City
    pub city: String,
    /// State / province
    pub state: String,
    /// Postal code
    pub zip: String,
    /// Latitude, if geocoded
    pub lat: Option<f64>,
    /// Longitude, if geocoded
    pub lng: Option<f64>,
    /// Placeholder marker (tri-state)
    pub placeholder: Option<Flag>,
}

impl Default for Address {
    fn default() -> Self {
        Self {
            id: AddressId::new(),
            kind: String::new(),
            is_primary: false,
            is_loss_site: false,
            street: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            lat: None,
            lng: None,
            placeholder: None,
        }
    }
}

impl Address {
    /// Factory: an empty, actively flagged address row
    ///
    /// Street starts empty, not at the legacy sentinel; the flag alone marks
    /// the row incomplete.
    #[must_use]
    pub fn placeholder_row() -> Self {
        Self {
            placeholder: Some(Flag::raised(FlagKind::Placeholder, "new address row")),
            ..Self::default()
        }
    }

    /// Factory: the default document's primary loss-site address
    #[must_use]
    pub fn primary_loss_site() -> Self {
        Self {
            is_primary: true,
            is_loss_site: true,
            ..Self::placeholder_row()
        }
    }

    /// Re-derive the placeholder flag from current content
    ///
    /// Active iff the street holds the legacy sentinel, the kind names a
    /// placeholder, or the flag was explicitly raised and the street is
    /// still blank. A non-blank, non-sentinel street clears the flag.
    pub fn sync_placeholder(&mut self) {
        let sentinel = self.street.trim() == STREET_SENTINEL;
        let kind_marker = self.kind.to_lowercase().contains("placeholder");

        if sentinel || kind_marker {
            flag::raise(&mut self.placeholder, FlagKind::Placeholder, "address not confirmed");
        } else if !is_blank(&self.street) {
            flag::clear(&mut self.placeholder);
        }
        // Blank street with an explicitly raised flag stays flagged.
    }

    /// Whether the placeholder flag is open
    #[inline]
    #[must_use]
    pub fn placeholder_active(&self) -> bool {
        flag::is_active(&self.placeholder)
    }

    /// Single-line rendering for labels
    #[must_use]
    pub fn summary_line(&self) -> String {
        let mut parts = Vec::new();
        for field in [&self.street, &self.city, &self.state, &self.zip] {
            if !is_blank(field) {
                parts.push(field.trim());
            }
        }
        parts.join(", ")
    }
}
