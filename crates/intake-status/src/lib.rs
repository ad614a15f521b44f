//! Intake Status - scope bridge status derivation
//!
//! Turns the scope-completion sub-state into a green/yellow/red light:
//! - canonical blocker ids with a historical-alias table
//! - auto-managed blockers derived from milestones, never user-set
//! - operational holds (processing option, next step, delayed pickup)
//!
//! Derivation is pure; the engine facade applies it strictly after each
//! mutation commits.

pub mod blockers;
pub mod derive;

pub use blockers::{
    canonicalize, clear_blocker, is_auto_managed, set_blocker, sync_auto_blockers,
    AUTHORIZATION_ON_FILE, AWAITING_SIGNED_AUTHORIZATION, ESTIMATE_APPROVED, WANTS_ESTIMATE,
};
pub use derive::{derive_status, has_operational_hold, recompute_status, PRODUCTION_AUTHORIZED};
