//! Canonical blocker ids and the alias table
//!
//! Blockers accumulated over the product's history under varying labels.
//! Every id is canonicalized before any membership test, union, or
//! persistence; canonicalization is idempotent.

use intake_model::text::name_key;
use intake_model::ScopeBridgeState;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Canonical id: signed work authorization not on file yet
pub const AWAITING_SIGNED_AUTHORIZATION: &str = "awaiting_signed_authorization";
/// Canonical id: customer wants an estimate before work proceeds
pub const WANTS_ESTIMATE: &str = "wants_estimate";
/// Canonical id: adjuster has not approved the scope
pub const AWAITING_ADJUSTER_APPROVAL: &str = "awaiting_adjuster_approval";
/// Canonical id: disagreement over which contents are in scope
pub const CONTENTS_IN_DISPUTE: &str = "contents_in_dispute";
/// Canonical id: customer is not responding
pub const CUSTOMER_UNREACHABLE: &str = "customer_unreachable";
/// Canonical id: site access is restricted
pub const ACCESS_RESTRICTED: &str = "access_restricted";

/// Milestone id: signed authorization recorded
pub const AUTHORIZATION_ON_FILE: &str = "authorization_on_file";
/// Milestone id: estimate approved by the customer
pub const ESTIMATE_APPROVED: &str = "estimate_approved";

/// Blockers the engine derives; direct toggles on these are no-ops
const AUTO_MANAGED: [&str; 2] = [AWAITING_SIGNED_AUTHORIZATION, WANTS_ESTIMATE];

/// Historical/alternate labels mapped onto canonical ids (slug-keyed)
static ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("awaiting_signed_auth", AWAITING_SIGNED_AUTHORIZATION),
        ("needs_signed_authorization", AWAITING_SIGNED_AUTHORIZATION),
        ("no_signed_auth", AWAITING_SIGNED_AUTHORIZATION),
        ("wants_estimate_first", WANTS_ESTIMATE),
        ("wants_estimate_before_pickup", WANTS_ESTIMATE),
        ("estimate_requested", WANTS_ESTIMATE),
        ("adjuster_approval_pending", AWAITING_ADJUSTER_APPROVAL),
        ("waiting_on_adjuster", AWAITING_ADJUSTER_APPROVAL),
        ("contents_dispute", CONTENTS_IN_DISPUTE),
        ("scope_dispute", CONTENTS_IN_DISPUTE),
        ("cannot_reach_customer", CUSTOMER_UNREACHABLE),
        ("no_customer_contact", CUSTOMER_UNREACHABLE),
        ("no_site_access", ACCESS_RESTRICTED),
        ("site_locked", ACCESS_RESTRICTED),
    ])
});

/// Slug form used for alias lookup: lowercased, whitespace collapsed to `_`
fn slug(raw: &str) -> String {
    name_key(raw).replace(' ', "_")
}

/// Map a blocker label onto its canonical id
///
/// Unknown labels pass through in slug form, so re-canonicalizing any
/// output is a fixed point.
#[must_use]
pub fn canonicalize(raw: &str) -> String {
    let key = slug(raw);
    match ALIASES.get(key.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => key,
    }
}

/// Whether a blocker id is derived rather than user-set
#[must_use]
pub fn is_auto_managed(raw: &str) -> bool {
    let id = canonicalize(raw);
    AUTO_MANAGED.contains(&id.as_str())
}

/// Add a user-set blocker; returns whether the set changed
///
/// Auto-managed ids are rejected as a no-op.
pub fn set_blocker(state: &mut ScopeBridgeState, raw: &str) -> bool {
    let id = canonicalize(raw);
    if id.is_empty() || AUTO_MANAGED.contains(&id.as_str()) {
        return false;
    }
    if state.pending_issues.iter().any(|existing| existing == &id) {
        return false;
    }
    state.pending_issues.push(id);
    true
}

/// Remove a user-set blocker; returns whether the set changed
///
/// Auto-managed ids are rejected as a no-op.
pub fn clear_blocker(state: &mut ScopeBridgeState, raw: &str) -> bool {
    let id = canonicalize(raw);
    if AUTO_MANAGED.contains(&id.as_str()) {
        return false;
    }
    let before = state.pending_issues.len();
    state.pending_issues.retain(|existing| existing != &id);
    state.pending_issues.len() != before
}

/// Re-derive the auto-managed blockers from milestones
///
/// - [`AWAITING_SIGNED_AUTHORIZATION`] present iff no
///   [`AUTHORIZATION_ON_FILE`] milestone is recorded
/// - [`WANTS_ESTIMATE`] present iff an estimate was requested and no
///   [`ESTIMATE_APPROVED`] milestone is recorded
///
/// Also canonicalizes and dedupes whatever the loaded document carried.
pub fn sync_auto_blockers(state: &mut ScopeBridgeState) {
    let mut issues: Vec<String> = Vec::new();
    for raw in &state.pending_issues {
        let id = canonicalize(raw);
        if id.is_empty() || AUTO_MANAGED.contains(&id.as_str()) {
            continue;
        }
        if !issues.contains(&id) {
            issues.push(id);
        }
    }

    if !state.has_milestone(AUTHORIZATION_ON_FILE) {
        issues.push(AWAITING_SIGNED_AUTHORIZATION.to_string());
    }
    if state.estimate_requested && !state.has_milestone(ESTIMATE_APPROVED) {
        issues.push(WANTS_ESTIMATE.to_string());
    }

    state.pending_issues = issues;
}
