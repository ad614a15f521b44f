//! Selector input normalization
//!
//! Selector-style inputs historically accepted either a bare string or a
//! labeled option object. That duck typing is normalized once at the
//! boundary into [`SelectorValue`]; nothing downstream inspects shapes.

use serde::{Deserialize, Serialize};

/// A normalized selector option
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorValue {
    /// Display label
    pub label: String,
    /// Stored value
    pub value: String,
    /// Option grouping kind, free-form
    pub kind: String,
}

impl SelectorValue {
    /// Fully specified option
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            kind: kind.into(),
        }
    }
}

impl From<&str> for SelectorValue {
    fn from(raw: &str) -> Self {
        Self {
            label: raw.to_string(),
            value: raw.to_string(),
            kind: String::new(),
        }
    }
}

impl From<String> for SelectorValue {
    fn from(raw: String) -> Self {
        Self {
            label: raw.clone(),
            value: raw,
            kind: String::new(),
        }
    }
}

impl std::fmt::Display for SelectorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_string_fills_label_and_value() {
        let value = SelectorValue::from("Water Damage");
        assert_eq!(value.label, "Water Damage");
        assert_eq!(value.value, "Water Damage");
        assert_eq!(value.kind, "");
    }

    #[test]
    fn full_option_keeps_parts() {
        let value = SelectorValue::new("Mold", "mold", "order_type");
        assert_eq!(value.value, "mold");
        assert_eq!(value.kind, "order_type");
    }
}
