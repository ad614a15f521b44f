//! Company classification
//!
//! Typing a company decides which roles it may hold. Inference runs in
//! priority order: an explicitly stored type wins, then a directory lookup
//! by company name, then the name heuristic (trade keywords and the fixed
//! national-carrier list), then `Other`.

use crate::directory::ContactDirectory;
use intake_model::text::name_key;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// What kind of company this is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyType {
    /// Insurance carrier
    Insurance,
    /// Independent adjusting firm
    Adjusting,
    /// General or trade contractor
    Contractor,
    /// Moving company
    Moving,
    /// Restoration company
    Restoration,
    /// Anything else
    #[default]
    Other,
}

impl CompanyType {
    /// Whether this type can hold the insurance role at all
    ///
    /// Contractor is excluded unconditionally, even when the company name
    /// collides with a carrier.
    #[inline]
    #[must_use]
    pub fn insurance_like(self) -> bool {
        matches!(self, CompanyType::Insurance | CompanyType::Adjusting)
    }

    /// Default referrer capability for this type
    #[inline]
    #[must_use]
    pub fn default_can_refer(self) -> bool {
        // Every type can send work our way.
        true
    }

    /// Default bill-to capability for this type
    #[inline]
    #[must_use]
    pub fn default_can_bill(self) -> bool {
        matches!(self, CompanyType::Insurance | CompanyType::Adjusting | CompanyType::Other)
    }
}

/// Fixed national-carrier list, stored in key form
static NATIONAL_CARRIERS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "state farm",
        "allstate",
        "geico",
        "progressive",
        "usaa",
        "liberty mutual",
        "farmers",
        "nationwide",
        "american family",
        "travelers",
        "erie insurance",
        "chubb",
        "safeco",
        "the hartford",
    ]
});

/// Case/whitespace-insensitive match against the national-carrier list
#[must_use]
pub fn is_national_carrier(company: &str) -> bool {
    let key = name_key(company);
    !key.is_empty() && NATIONAL_CARRIERS.contains(&key.as_str())
}

/// Heuristic classification from the company name alone
fn heuristic_type(company: &str) -> Option<CompanyType> {
    let key = name_key(company);
    if key.is_empty() {
        return None;
    }
    if key.contains("insurance") {
        return Some(CompanyType::Insurance);
    }
    if key.contains("adjusting") {
        return Some(CompanyType::Adjusting);
    }
    if key.contains("moving") {
        return Some(CompanyType::Moving);
    }
    if key.contains("restoration") {
        return Some(CompanyType::Restoration);
    }
    if is_national_carrier(company) {
        return Some(CompanyType::Insurance);
    }
    None
}

/// Infer a company's type
///
/// Priority: explicit stored type, directory record, name heuristic,
/// `Other`.
#[must_use]
pub fn infer_company_type(
    directory: &ContactDirectory,
    explicit: Option<CompanyType>,
    company: &str,
) -> CompanyType {
    if let Some(stored) = explicit {
        return stored;
    }
    if let Some(record) = directory.lookup_company(company) {
        return record.company_type;
    }
    heuristic_type(company).unwrap_or(CompanyType::Other)
}
