//! Company role slots and the placeholder synchronizer
//!
//! The order holds one [`CompanyRoleEntry`] per functional role slot. An
//! entry tracks a company name plus its contact list, and two tri-state
//! placeholder flags derived purely from content:
//!
//! - company placeholder active iff the company name is blank
//! - contact placeholder active iff no contact has a non-blank name
//!
//! [`normalize_entry`] is the one function allowed to move those flags. It
//! is idempotent and never drops a contact or a company name.

use crate::flag::{self, Flag, FlagKind};
use crate::text::{is_blank, name_key};
use serde::{Deserialize, Serialize};

/// Functional role a company can hold on the order
///
/// Serialized as its string key so legacy slot names round-trip through
/// [`RoleKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoleKind {
    /// Who sent the job our way
    Referrer,
    /// The insurance carrier or adjusting firm on the claim
    Insurance,
    /// Who the invoice goes to
    BillTo,
    /// Any other named slot (legacy or ad hoc)
    Other(String),
}

impl RoleKind {
    /// Canonical slot key
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            RoleKind::Referrer => "referrer",
            RoleKind::Insurance => "insurance",
            RoleKind::BillTo => "bill_to",
            RoleKind::Other(key) => key.as_str(),
        }
    }

    /// The roles the resolver may offer for assignment
    #[must_use]
    pub fn assignable() -> [RoleKind; 3] {
        [RoleKind::Referrer, RoleKind::Insurance, RoleKind::BillTo]
    }

    /// Whether this slot is one of the assignable roles
    #[inline]
    #[must_use]
    pub fn is_assignable(&self) -> bool {
        !matches!(self, RoleKind::Other(_))
    }
}

impl From<String> for RoleKind {
    fn from(key: String) -> Self {
        match key.as_str() {
            "referrer" => RoleKind::Referrer,
            "insurance" => RoleKind::Insurance,
            "bill_to" => RoleKind::BillTo,
            _ => RoleKind::Other(key),
        }
    }
}

impl From<RoleKind> for String {
    fn from(kind: RoleKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for RoleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A contact attached to a company role entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RoleContact {
    /// Contact name, free-form
    pub name: String,
    /// Soft-retired contact, kept for history
    pub inactive: bool,
    /// Placeholder marker (tri-state)
    pub placeholder: Option<Flag>,
}

impl RoleContact {
    /// Contact with the given name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A company occupying one role slot, with its contacts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CompanyRoleEntry {
    /// Company name, free-form
    pub company: String,
    /// Legacy mirror: first contact with a non-blank name
    pub contact: String,
    /// All captured contacts, first-seen order
    pub contacts: Vec<RoleContact>,
    /// Company placeholder marker (tri-state)
    pub placeholder: Option<Flag>,
    /// Contact placeholder marker (tri-state)
    pub contact_placeholder: Option<Flag>,
}

impl CompanyRoleEntry {
    /// Entry for a freshly captured company/contact pair, normalized
    #[must_use]
    pub fn captured(company: impl Into<String>, contact: impl Into<String>) -> Self {
        let contact = contact.into();
        let mut entry = Self {
            company: company.into(),
            contacts: if is_blank(&contact) {
                Vec::new()
            } else {
                vec![RoleContact::named(contact)]
            },
            ..Self::default()
        };
        normalize_entry(&mut entry);
        entry
    }

    /// Whether the company placeholder is open
    #[inline]
    #[must_use]
    pub fn company_placeholder_active(&self) -> bool {
        flag::is_active(&self.placeholder)
    }

    /// Whether the contact placeholder is open
    #[inline]
    #[must_use]
    pub fn contact_placeholder_active(&self) -> bool {
        flag::is_active(&self.contact_placeholder)
    }

    /// First contact with a non-blank name, if any
    #[must_use]
    pub fn first_named_contact(&self) -> Option<&RoleContact> {
        self.contacts.iter().find(|c| !is_blank(&c.name))
    }

    /// Whether the entry already lists the contact (key match)
    #[must_use]
    pub fn has_contact(&self, name: &str) -> bool {
        let key = name_key(name);
        !key.is_empty() && self.contacts.iter().any(|c| name_key(&c.name) == key)
    }
}

/// Normalize an entry's flags and contact list from its content
///
/// - duplicate non-blank contact names collapse to the first occurrence
/// - `contact` mirrors the first non-blank contact name
/// - company/contact placeholder flags re-derive from blankness
/// - each contact's own flag re-derives from its name
///
/// Idempotent; never removes content, only duplicates of it.
pub fn normalize_entry(entry: &mut CompanyRoleEntry) {
    let mut seen = Vec::new();
    entry.contacts.retain(|c| {
        let key = name_key(&c.name);
        if key.is_empty() {
            return true;
        }
        if seen.contains(&key) {
            false
        } else {
            seen.push(key);
            true
        }
    });

    for contact in &mut entry.contacts {
        if is_blank(&contact.name) {
            flag::raise(&mut contact.placeholder, FlagKind::Placeholder, "contact name missing");
        } else {
            flag::clear(&mut contact.placeholder);
        }
    }

    entry.contact = entry
        .first_named_contact()
        .map(|c| c.name.clone())
        .unwrap_or_default();

    if is_blank(&entry.company) {
        flag::raise(&mut entry.placeholder, FlagKind::Placeholder, "company missing");
    } else {
        flag::clear(&mut entry.placeholder);
    }

    if entry.first_named_contact().is_none() {
        flag::raise(
            &mut entry.contact_placeholder,
            FlagKind::Placeholder,
            "contact missing",
        );
    } else {
        flag::clear(&mut entry.contact_placeholder);
    }
}

/// Merge `incoming` into `existing` after an identity match
///
/// Contact lists union by case/whitespace-insensitive name, keeping
/// first-seen order (existing contacts first). A blank existing company
/// name takes the incoming one. The result is re-normalized.
pub fn merge_entries(existing: &mut CompanyRoleEntry, incoming: &CompanyRoleEntry) {
    if is_blank(&existing.company) && !is_blank(&incoming.company) {
        existing.company = incoming.company.clone();
    }

    for contact in &incoming.contacts {
        if is_blank(&contact.name) || existing.has_contact(&contact.name) {
            continue;
        }
        existing.contacts.push(contact.clone());
    }

    normalize_entry(existing);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_kind_string_roundtrip() {
        for kind in RoleKind::assignable() {
            let key: String = kind.clone().into();
            assert_eq!(RoleKind::from(key), kind);
        }
        let legacy = RoleKind::from("other".to_string());
        assert_eq!(legacy, RoleKind::Other("other".to_string()));
        assert!(!legacy.is_assignable());
    }

    #[test]
    fn captured_pair_is_normalized() {
        let entry = CompanyRoleEntry::captured("Allstate", "Alex Morgan");
        assert_eq!(entry.contact, "Alex Morgan");
        assert!(!entry.company_placeholder_active());
        assert!(!entry.contact_placeholder_active());
    }

    #[test]
    fn blank_company_flags_placeholder() {
        let entry = CompanyRoleEntry::captured("", "Alex Morgan");
        assert!(entry.company_placeholder_active());
        assert!(!entry.contact_placeholder_active());
    }

    #[test]
    fn blank_contact_flags_contact_placeholder() {
        let entry = CompanyRoleEntry::captured("Allstate", "  ");
        assert!(!entry.company_placeholder_active());
        assert!(entry.contact_placeholder_active());
    }

    #[test]
    fn normalize_is_idempotent() {
        let shapes = [
            CompanyRoleEntry::default(),
            CompanyRoleEntry::captured("Allstate", ""),
            CompanyRoleEntry::captured("", "Alex Morgan"),
            CompanyRoleEntry::captured("Allstate", "Alex Morgan"),
        ];
        for mut entry in shapes {
            normalize_entry(&mut entry);
            let once = entry.clone();
            normalize_entry(&mut entry);
            assert_eq!(entry, once);
        }
    }

    #[test]
    fn normalize_collapses_duplicate_contacts() {
        let mut entry = CompanyRoleEntry::captured("Allstate", "Alex Morgan");
        entry.contacts.push(RoleContact::named("  alex   morgan "));
        entry.contacts.push(RoleContact::named("Dana Reid"));
        normalize_entry(&mut entry);

        let names: Vec<&str> = entry.contacts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alex Morgan", "Dana Reid"]);
    }

    #[test]
    fn normalize_keeps_blank_rows() {
        let mut entry = CompanyRoleEntry::captured("Allstate", "Alex Morgan");
        entry.contacts.push(RoleContact::default());
        entry.contacts.push(RoleContact::default());
        normalize_entry(&mut entry);
        assert_eq!(entry.contacts.len(), 3);
    }

    #[test]
    fn mirror_follows_first_named_contact() {
        let mut entry = CompanyRoleEntry::default();
        entry.contacts.push(RoleContact::default());
        entry.contacts.push(RoleContact::named("Dana Reid"));
        normalize_entry(&mut entry);
        assert_eq!(entry.contact, "Dana Reid");
    }

    #[test]
    fn merge_unions_contacts_first_seen_order() {
        let mut existing = CompanyRoleEntry::captured("Allstate", "Dana Reid");
        let incoming = CompanyRoleEntry::captured("allstate", "Alex Morgan");
        merge_entries(&mut existing, &incoming);

        let names: Vec<&str> = existing.contacts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Dana Reid", "Alex Morgan"]);
        assert_eq!(existing.company, "Allstate");
    }

    #[test]
    fn merge_fills_blank_company() {
        let mut existing = CompanyRoleEntry::captured("", "Dana Reid");
        let incoming = CompanyRoleEntry::captured("Allstate", "Dana Reid");
        merge_entries(&mut existing, &incoming);
        assert_eq!(existing.company, "Allstate");
        assert_eq!(existing.contacts.len(), 1);
    }
}
