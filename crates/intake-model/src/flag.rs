//! Tri-state entity markers
//!
//! A [`Flag`] is always carried as `Option<Flag>` on an entity, giving three
//! observable states: absent (never touched), present-and-active (open),
//! present-and-cleared (explicitly resolved). The distinction is what lets
//! the audit tell "deliberately incomplete" apart from "not yet reached",
//! so a plain boolean is never enough.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a flag marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagKind {
    /// Entity was created deliberately incomplete
    Placeholder,
    /// Entity content needs a second look before save
    NeedsReview,
}

/// Tri-state marker attached to an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    /// Whether the flag is currently open
    pub active: bool,
    /// What the flag marks
    pub kind: FlagKind,
    /// Short human-readable cause
    pub reason: String,
    /// When the flag was first raised
    pub created_at: DateTime<Utc>,
}

impl Flag {
    /// Create a newly raised flag
    #[inline]
    #[must_use]
    pub fn raised(kind: FlagKind, reason: impl Into<String>) -> Self {
        Self {
            active: true,
            kind,
            reason: reason.into(),
            created_at: Utc::now(),
        }
    }

    /// Resolve the flag, keeping it present as a record of the resolution
    #[inline]
    pub fn clear(&mut self) {
        self.active = false;
    }
}

/// Whether a flag slot is present and active
#[inline]
#[must_use]
pub fn is_active(slot: &Option<Flag>) -> bool {
    slot.as_ref().is_some_and(|f| f.active)
}

/// Raise the flag in a slot, reactivating an existing flag in place
///
/// Re-raising preserves `created_at` so the original raise time survives
/// a clear/re-raise cycle; the reason is refreshed to the current cause.
pub fn raise(slot: &mut Option<Flag>, kind: FlagKind, reason: &str) {
    match slot {
        Some(flag) => {
            flag.active = true;
            flag.kind = kind;
            flag.reason = reason.to_string();
        }
        None => *slot = Some(Flag::raised(kind, reason)),
    }
}

/// Clear the flag in a slot, if any, without removing it
#[inline]
pub fn clear(slot: &mut Option<Flag>) {
    if let Some(flag) = slot {
        flag.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_is_not_active() {
        assert!(!is_active(&None));
    }

    #[test]
    fn raise_then_clear_keeps_flag_present() {
        let mut slot = None;
        raise(&mut slot, FlagKind::Placeholder, "new row");
        assert!(is_active(&slot));

        clear(&mut slot);
        assert!(!is_active(&slot));
        assert!(slot.is_some());
    }

    #[test]
    fn reraise_preserves_created_at() {
        let mut slot = None;
        raise(&mut slot, FlagKind::Placeholder, "first");
        let stamp = slot.as_ref().unwrap().created_at;

        clear(&mut slot);
        raise(&mut slot, FlagKind::Placeholder, "second");

        let flag = slot.as_ref().unwrap();
        assert!(flag.active);
        assert_eq!(flag.created_at, stamp);
        assert_eq!(flag.reason, "second");
    }

    #[test]
    fn clear_on_absent_is_noop() {
        let mut slot: Option<Flag> = None;
        clear(&mut slot);
        assert!(slot.is_none());
    }
}
