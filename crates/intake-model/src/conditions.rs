//! Site condition fields driving the cascade engine

use serde::{Deserialize, Serialize};

/// Tri-state answer to a site-condition question
///
/// Intake starts every condition at `Unset`; the cascade engine reacts to
/// transitions into and out of `Yes` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmartValue {
    /// Question not yet answered
    #[default]
    Unset,
    /// Condition present
    Yes,
    /// Condition confirmed absent
    No,
}

impl SmartValue {
    /// Whether the condition is currently answered yes
    #[inline]
    #[must_use]
    pub fn is_yes(self) -> bool {
        matches!(self, SmartValue::Yes)
    }
}

/// The smart condition fields observed at the job site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConditions {
    /// Power is off at the site
    pub no_electricity: SmartValue,
    /// Structure is boarded up
    pub boarded_up: SmartValue,
    /// Visible mold or mildew
    pub mold_mildew: SmartValue,
    /// Sewage or other biohazard present
    pub biohazard: SmartValue,
    /// Water service is off at the site
    pub no_running_water: SmartValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conditions_default_unset() {
        let conditions = SiteConditions::default();
        assert_eq!(conditions.no_electricity, SmartValue::Unset);
        assert!(!conditions.mold_mildew.is_yes());
    }
}
