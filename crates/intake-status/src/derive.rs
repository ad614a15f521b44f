//! Traffic-light derivation

use crate::blockers::sync_auto_blockers;
use intake_model::text::is_blank;
use intake_model::{PickupOption, ProjectStatus, ScopeBridgeState};

/// Fixed reason attached whenever the automatic path lands on green
pub const PRODUCTION_AUTHORIZED: &str = "Production Authorized";

/// Whether an operational hold keeps the job from production
///
/// Holds: a tag-hold/urgent/COD processing option, a non-empty next step,
/// or a deliberately delayed pickup.
#[must_use]
pub fn has_operational_hold(state: &ScopeBridgeState) -> bool {
    state.processing_option.is_hold()
        || !is_blank(&state.next_step)
        || state.pickup_option == PickupOption::Delayed
}

/// Pure derivation of the light from the current sub-state
///
/// A manual red pin is preserved; otherwise yellow iff any blocker is
/// pending or an operational hold is active, green otherwise.
#[must_use]
pub fn derive_status(state: &ScopeBridgeState) -> ProjectStatus {
    if state.status_manual && state.project_status == ProjectStatus::Red {
        return ProjectStatus::Red;
    }
    if !state.pending_issues.is_empty() || has_operational_hold(state) {
        ProjectStatus::Yellow
    } else {
        ProjectStatus::Green
    }
}

/// Re-derive auto blockers, then commit the derived status and its reason
///
/// Green sets the fixed [`PRODUCTION_AUTHORIZED`] reason. When the
/// automatic path moves the status off green, that fixed reason is cleared;
/// any other reason text is user-set and preserved.
pub fn recompute_status(state: &mut ScopeBridgeState) {
    sync_auto_blockers(state);
    let next = derive_status(state);

    match next {
        ProjectStatus::Green => {
            state.status_reason = PRODUCTION_AUTHORIZED.to_string();
        }
        ProjectStatus::Yellow | ProjectStatus::Red => {
            if state.project_status == ProjectStatus::Green
                && state.status_reason == PRODUCTION_AUTHORIZED
            {
                state.status_reason.clear();
            }
        }
    }
    state.project_status = next;
}
