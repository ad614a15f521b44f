//! Customer entity

use crate::flag::{self, Flag, FlagKind};
use crate::id::CustomerId;
use crate::text::is_blank;
use serde::{Deserialize, Serialize};

/// A customer on the order
///
/// Exactly one customer per order carries `is_primary`; the aggregate
/// enforces that invariant (see [`crate::order::Order`]). The primary
/// customer is exempt from placeholder auto-flagging: synchronization only
/// ever clears its flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    /// Stable identifier
    pub id: CustomerId,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Phone number, free-form
    pub phone: String,
    /// Email address, free-form
    pub email: String,
    /// Whether this is the order's primary customer
    pub is_primary: bool,
    /// Placeholder marker (tri-state)
    pub placeholder: Option<Flag>,
}

impl Default for Customer {
    fn default() -> Self {
        Self {
            id: CustomerId::new(),
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            email: String::new(),
            is_primary: false,
            placeholder: None,
        }
    }
}

impl Customer {
    /// Factory: an empty, actively flagged secondary customer row
    #[must_use]
    pub fn placeholder_row() -> Self {
        Self {
            placeholder: Some(Flag::raised(FlagKind::Placeholder, "new customer row")),
            ..Self::default()
        }
    }

    /// Factory: the order's primary customer (never auto-flagged)
    #[must_use]
    pub fn primary() -> Self {
        Self {
            is_primary: true,
            ..Self::default()
        }
    }

    /// Joined non-blank name parts
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut parts = Vec::new();
        if !is_blank(&self.first_name) {
            parts.push(self.first_name.trim());
        }
        if !is_blank(&self.last_name) {
            parts.push(self.last_name.trim());
        }
        parts.join(" ")
    }

    /// Whether every identifying field is blank
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        is_blank(&self.first_name)
            && is_blank(&self.last_name)
            && is_blank(&self.phone)
            && is_blank(&self.email)
    }

    /// Re-derive the placeholder flag from current content
    ///
    /// Non-primary rows: active while every field is blank, cleared once
    /// anything is entered. Primary rows are only ever cleared.
    pub fn sync_placeholder(&mut self) {
        if self.is_primary || !self.is_empty() {
            flag::clear(&mut self.placeholder);
        } else if self.placeholder.is_some() {
            flag::raise(&mut self.placeholder, FlagKind::Placeholder, "new customer row");
        }
    }

    /// Whether the placeholder flag is open
    #[inline]
    #[must_use]
    pub fn placeholder_active(&self) -> bool {
        flag::is_active(&self.placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_row_starts_flagged() {
        let customer = Customer::placeholder_row();
        assert!(customer.placeholder_active());
        assert!(customer.is_empty());
        assert!(!customer.is_primary);
    }

    #[test]
    fn entering_content_clears_flag() {
        let mut customer = Customer::placeholder_row();
        customer.first_name = "Dana".to_string();
        customer.sync_placeholder();
        assert!(!customer.placeholder_active());
    }

    #[test]
    fn clearing_content_reraises_flag() {
        let mut customer = Customer::placeholder_row();
        customer.first_name = "Dana".to_string();
        customer.sync_placeholder();

        customer.first_name.clear();
        customer.sync_placeholder();
        assert!(customer.placeholder_active());
    }

    #[test]
    fn primary_is_never_auto_flagged() {
        let mut customer = Customer::primary();
        customer.sync_placeholder();
        assert!(!customer.placeholder_active());
        assert!(customer.placeholder.is_none());
    }

    #[test]
    fn display_name_skips_blank_parts() {
        let mut customer = Customer::primary();
        customer.last_name = " Morgan ".to_string();
        assert_eq!(customer.display_name(), "Morgan");
    }

    #[test]
    fn sync_is_idempotent() {
        let mut customer = Customer::placeholder_row();
        customer.phone = "555-0102".to_string();
        customer.sync_placeholder();
        let once = customer.clone();
        customer.sync_placeholder();
        assert_eq!(customer, once);
    }
}
