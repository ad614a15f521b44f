//! Scope bridge sub-state
//!
//! Everything the status deriver reads: pending blockers (canonical ids),
//! recorded milestones, and the operational-hold fields. The derivation
//! itself lives in `intake-status`; this module only owns the data.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Traffic-light project status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Cleared for production
    #[default]
    Green,
    /// Something is holding the job
    Yellow,
    /// Stopped
    Red,
}

/// How the contents are to be processed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingOption {
    /// Normal flow
    #[default]
    Standard,
    /// Tag and hold, do not process yet
    TagHold,
    /// Rush processing
    Urgent,
    /// Collect on delivery
    Cod,
}

impl ProcessingOption {
    /// Whether this option holds the job back from production
    #[inline]
    #[must_use]
    pub fn is_hold(self) -> bool {
        matches!(self, ProcessingOption::TagHold | ProcessingOption::Urgent | ProcessingOption::Cod)
    }
}

/// Pickup scheduling state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickupOption {
    /// Not decided yet
    #[default]
    Unset,
    /// Pickup is on the calendar
    Scheduled,
    /// Pickup deliberately pushed out
    Delayed,
}

/// Scope-completion sub-state of the order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeBridgeState {
    /// Derived (or manually pinned) traffic-light status
    pub project_status: ProjectStatus,
    /// Whether the current status was pinned by hand
    pub status_manual: bool,
    /// Short status explanation shown next to the light
    pub status_reason: String,
    /// Pending blockers, canonical ids
    pub pending_issues: Vec<String>,
    /// Recorded milestones, keyed by milestone id
    pub milestones: IndexMap<String, DateTime<Utc>>,
    /// Next step note; non-empty means the job is waiting on it
    pub next_step: String,
    /// Contents processing option
    pub processing_option: ProcessingOption,
    /// Pickup scheduling state
    pub pickup_option: PickupOption,
    /// An estimate was requested by the customer
    pub estimate_requested: bool,
    /// Selected service groups (mirrored with the legacy top-level list)
    pub selected_groups: Vec<String>,
}

impl ScopeBridgeState {
    /// Whether a milestone has been recorded
    #[inline]
    #[must_use]
    pub fn has_milestone(&self, key: &str) -> bool {
        self.milestones.contains_key(key)
    }

    /// Record a milestone now; re-recording keeps the original stamp
    pub fn record_milestone(&mut self, key: impl Into<String>) {
        self.milestones.entry(key.into()).or_insert_with(Utc::now);
    }

    /// Remove a recorded milestone
    pub fn clear_milestone(&mut self, key: &str) {
        self.milestones.shift_remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processing_hold_classification() {
        assert!(!ProcessingOption::Standard.is_hold());
        assert!(ProcessingOption::TagHold.is_hold());
        assert!(ProcessingOption::Urgent.is_hold());
        assert!(ProcessingOption::Cod.is_hold());
    }

    #[test]
    fn milestone_recording_keeps_first_stamp() {
        let mut state = ScopeBridgeState::default();
        state.record_milestone("authorization_on_file");
        let first = state.milestones["authorization_on_file"];
        state.record_milestone("authorization_on_file");
        assert_eq!(state.milestones["authorization_on_file"], first);
    }

    #[test]
    fn milestone_clear() {
        let mut state = ScopeBridgeState::default();
        state.record_milestone("estimate_approved");
        state.clear_milestone("estimate_approved");
        assert!(!state.has_milestone("estimate_approved"));
    }
}
