//! In-memory contact/company directory
//!
//! An explicitly owned repository, constructed once by the caller and
//! passed by reference into the resolver — never a global. The resolver
//! reads it for typing and capability lookups and fires [`upsert`] when a
//! brand-new contact/company pair is captured.
//!
//! [`upsert`]: ContactDirectory::upsert

use crate::company_type::CompanyType;
use intake_model::text::{is_blank, name_key};
use serde::{Deserialize, Serialize};

/// One known contact (or bare company) in the directory
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryRecord {
    /// Contact name; may be blank for a company-only record
    pub name: String,
    /// Company name
    pub company: String,
    /// Stored company type
    pub company_type: CompanyType,
    /// Referrer capability override; `None` falls back to the type default
    pub can_refer: Option<bool>,
    /// Bill-to capability override; `None` falls back to the type default
    pub can_bill: Option<bool>,
}

impl DirectoryRecord {
    /// Effective referrer capability
    #[inline]
    #[must_use]
    pub fn effective_can_refer(&self) -> bool {
        self.can_refer.unwrap_or_else(|| self.company_type.default_can_refer())
    }

    /// Effective bill-to capability
    #[inline]
    #[must_use]
    pub fn effective_can_bill(&self) -> bool {
        self.can_bill.unwrap_or_else(|| self.company_type.default_can_bill())
    }
}

/// The directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactDirectory {
    records: Vec<DirectoryRecord>,
}

impl ContactDirectory {
    /// Create an empty directory
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory from existing records
    #[must_use]
    pub fn with_records(records: Vec<DirectoryRecord>) -> Self {
        Self { records }
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record matching the company name (key match)
    #[must_use]
    pub fn lookup_company(&self, company: &str) -> Option<&DirectoryRecord> {
        let key = name_key(company);
        if key.is_empty() {
            return None;
        }
        self.records.iter().find(|r| name_key(&r.company) == key)
    }

    /// First record matching the contact name (key match)
    #[must_use]
    pub fn lookup_contact(&self, name: &str) -> Option<&DirectoryRecord> {
        let key = name_key(name);
        if key.is_empty() {
            return None;
        }
        self.records.iter().find(|r| name_key(&r.name) == key)
    }

    /// Whether a specific contact/company pair is already known
    #[must_use]
    pub fn knows_pair(&self, name: &str, company: &str) -> bool {
        let name_k = name_key(name);
        let company_k = name_key(company);
        self.records
            .iter()
            .any(|r| name_key(&r.name) == name_k && name_key(&r.company) == company_k)
    }

    /// Insert or update a record, matching by contact+company pair
    ///
    /// A matching record is replaced in place (capability overrides and
    /// type included); a new pair is appended. Returns whether the record
    /// was brand new.
    pub fn upsert(&mut self, record: DirectoryRecord) -> bool {
        if is_blank(&record.name) && is_blank(&record.company) {
            return false;
        }
        let name_k = name_key(&record.name);
        let company_k = name_key(&record.company);
        if let Some(existing) = self
            .records
            .iter_mut()
            .find(|r| name_key(&r.name) == name_k && name_key(&r.company) == company_k)
        {
            *existing = record;
            false
        } else {
            self.records.push(record);
            true
        }
    }

    /// Iterate over all records
    pub fn iter(&self) -> impl Iterator<Item = &DirectoryRecord> {
        self.records.iter()
    }
}
