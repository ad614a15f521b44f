//! Capture, eligibility, and dedup/merge upsert

use crate::company_type::{infer_company_type, is_national_carrier, CompanyType};
use crate::directory::{ContactDirectory, DirectoryRecord};
use crate::error::RoleError;
use intake_model::text::{is_blank, name_key};
use intake_model::{merge_entries, CompanyRoleEntry, Order, RoleKind};
use serde::{Deserialize, Serialize};

/// Where on the form the pair was captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureSource {
    /// Search quick-add
    QuickAdd,
    /// Adjuster field
    AdjusterField,
    /// Billing-contact field
    BillingContactField,
    /// Referrer field
    ReferrerField,
}

/// Multi-select confirmation offered after a capture
///
/// Nothing is applied until the user confirms; eligibility is recomputed
/// against the live document at apply time, so the offered list here is
/// display state, not a commitment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignmentProposal {
    /// Captured company name
    pub company: String,
    /// Captured contact name (may be blank)
    pub contact: String,
    /// Roles offered for selection, as computed at capture time
    pub offered: Vec<RoleKind>,
    /// Where the capture happened
    pub source: CaptureSource,
}

/// Whether an entry is the same company under the dedup identity
///
/// Identity is the case/whitespace-insensitive company name, or a shared
/// contact name — never the slot the entry happens to sit in.
fn entry_matches(entry: &CompanyRoleEntry, company: &str, contact: &str) -> bool {
    let company_k = name_key(company);
    if !company_k.is_empty() && name_key(&entry.company) == company_k {
        return true;
    }
    !is_blank(contact) && entry.has_contact(contact)
}

/// The slot currently holding this identity, if any
fn find_identity_slot(order: &Order, company: &str, contact: &str) -> Option<RoleKind> {
    order
        .company_roles
        .iter()
        .find(|(_, entry)| entry_matches(entry, company, contact))
        .map(|(kind, _)| kind.clone())
}

/// Compute the roles a captured pair may be offered
///
/// - insurance: insurance-like type or national-carrier name, but never a
///   company explicitly typed Contractor
/// - referrer / bill-to: capability flags, defaulted by type, overridable
///   per directory record
/// - a role already occupied by a *different* company is withheld
#[must_use]
pub fn eligible_roles(
    order: &Order,
    directory: &ContactDirectory,
    company: &str,
    contact: &str,
) -> Vec<RoleKind> {
    if is_blank(company) {
        return Vec::new();
    }
    let company_type = infer_company_type(directory, None, company);
    let record = directory.lookup_company(company);

    let can_refer = record
        .and_then(|r| r.can_refer)
        .unwrap_or_else(|| company_type.default_can_refer());
    let can_bill = record
        .and_then(|r| r.can_bill)
        .unwrap_or_else(|| company_type.default_can_bill());
    let insurance = company_type != CompanyType::Contractor
        && (company_type.insurance_like() || is_national_carrier(company));

    RoleKind::assignable()
        .into_iter()
        .filter(|kind| match kind {
            RoleKind::Referrer => can_refer,
            RoleKind::Insurance => insurance,
            RoleKind::BillTo => can_bill,
            RoleKind::Other(_) => false,
        })
        .filter(|kind| match order.company_roles.get(kind) {
            // Occupied by someone else: withheld unless the captured pair
            // IS that assignment.
            Some(entry) if !is_blank(&entry.company) => entry_matches(entry, company, contact),
            _ => true,
        })
        .collect()
}

/// Handle a newly captured `(company, contact)` pair
///
/// Validates the pair, records a brand-new pair in the directory, and
/// returns the multi-select proposal when any role is eligible. The order
/// document itself is not touched here.
pub fn capture_pair(
    order: &Order,
    directory: &mut ContactDirectory,
    source: CaptureSource,
    company: &str,
    contact: &str,
) -> Result<Option<RoleAssignmentProposal>, RoleError> {
    if is_blank(company) && is_blank(contact) {
        return Err(RoleError::EmptyCapture);
    }
    if is_blank(company) {
        return Err(RoleError::ContactWithoutCompany);
    }

    if !directory.knows_pair(contact, company) {
        let company_type = infer_company_type(directory, None, company);
        directory.upsert(DirectoryRecord {
            name: contact.trim().to_string(),
            company: company.trim().to_string(),
            company_type,
            can_refer: None,
            can_bill: None,
        });
    }

    let offered = eligible_roles(order, directory, company, contact);
    if offered.is_empty() {
        return Ok(None);
    }
    Ok(Some(RoleAssignmentProposal {
        company: company.trim().to_string(),
        contact: contact.trim().to_string(),
        offered,
        source,
    }))
}

/// Place a pair into a role slot, deduplicating across all slots
///
/// If the identity already lives under another slot, the two entries merge
/// into one (contact union, first-seen order) and the stale slot is
/// removed; the same company never ends up in two entries.
pub fn upsert_role(order: &mut Order, kind: &RoleKind, company: &str, contact: &str) {
    let incoming = CompanyRoleEntry::captured(company.trim(), contact.trim());

    match find_identity_slot(order, company, contact) {
        Some(existing_slot) => {
            let mut entry = order
                .company_roles
                .shift_remove(&existing_slot)
                .unwrap_or_default();
            merge_entries(&mut entry, &incoming);
            order.company_roles.insert(kind.clone(), entry);
        }
        None => {
            order.company_roles.insert(kind.clone(), incoming);
        }
    }
}

/// Commit a confirmed proposal
///
/// Eligibility is recomputed against the live document; the applied set is
/// the user's selection intersected with what is still eligible. Applying
/// bill-to also writes the order's payer field. Returns the roles actually
/// applied.
pub fn apply_roles(
    order: &mut Order,
    directory: &ContactDirectory,
    proposal: &RoleAssignmentProposal,
    selected: &[RoleKind],
) -> Vec<RoleKind> {
    let still_eligible = eligible_roles(order, directory, &proposal.company, &proposal.contact);
    let applied: Vec<RoleKind> = selected
        .iter()
        .filter(|kind| still_eligible.contains(kind))
        .cloned()
        .collect();

    for kind in &applied {
        upsert_role(order, kind, &proposal.company, &proposal.contact);
        if *kind == RoleKind::BillTo {
            order.bill_to_payer = proposal.company.clone();
        }
    }
    applied
}
