//! Order root aggregate
//!
//! One order document per intake session. All collection mutations go
//! through the guarded methods here: they either commit and re-derive the
//! affected placeholder state, or return a [`ModelError`] with the document
//! untouched. Field-level edits use the `update_*` closures so the
//! re-derivation cannot be skipped.

use crate::address::Address;
use crate::company::{self, CompanyRoleEntry, RoleKind};
use crate::conditions::SiteConditions;
use crate::customer::Customer;
use crate::error::ModelError;
use crate::id::{AddressId, CustomerId};
use crate::scope::ScopeBridgeState;
use crate::text::is_blank;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Just opened
    #[default]
    New,
    /// Intake form finished
    IntakeComplete,
    /// Contents picked up
    PickupComplete,
    /// Ready for invoicing
    ReadyToBill,
}

/// Where the customer lives while the job runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LivingArrangement {
    /// Not captured yet
    #[default]
    Unset,
    /// Staying in the home
    OwnerOccupied,
    /// Renting while displaced
    Rent,
    /// Property is vacant
    Vacant,
}

/// How the job reached us
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadSource {
    /// Source category ("Adjuster", "Web", ...)
    pub category: String,
    /// Detail within the category (which adjuster, which campaign)
    pub detail: String,
}

/// The single shared order record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    /// Display name of the order
    pub order_name: String,
    /// Lifecycle status
    pub order_status: OrderStatus,
    /// Selected order types ("Mold", "Fire", ...)
    pub order_types: Vec<String>,
    /// Equipment to bring on the truck
    pub load_list: Vec<String>,
    /// Special handling codes for the crew
    pub handling_codes: Vec<String>,
    /// Smart condition answers
    pub conditions: SiteConditions,
    /// Customers on the order; exactly one is primary
    pub customers: Vec<Customer>,
    /// Addresses on the order
    pub addresses: Vec<Address>,
    /// Company role slots
    pub company_roles: IndexMap<RoleKind, CompanyRoleEntry>,
    /// Scope-completion sub-state
    pub scope_bridge: ScopeBridgeState,
    /// Legacy top-level mirror of `scope_bridge.selected_groups`
    pub selected_groups: Vec<String>,
    /// Lead source
    pub lead_source: LeadSource,
    /// Who pays the invoice
    pub bill_to_payer: String,
    /// Customer's living arrangement
    pub living_arrangement: LivingArrangement,
    /// Mold coverage amount, free-form currency text
    pub mold_coverage_amount: String,
    /// Rent coverage amount, free-form currency text
    pub rent_coverage_amount: String,
    /// Severity grade captured at walkthrough
    pub severity: String,
    /// Walkthrough interview finished
    pub interview_complete: bool,
    /// Handling codes reviewed and confirmed
    pub codes_complete: bool,
    /// Estimate total, free-form currency text
    pub estimate_total: String,
    /// Pricing signed off
    pub pricing_approved: bool,
    /// Audit UI hint only; never persisted
    #[serde(skip)]
    pub highlight_missing: bool,
}

impl Default for Order {
    fn default() -> Self {
        Self::default_document()
    }
}

impl Order {
    /// The documented default document: one primary customer and one
    /// flagged primary loss-site address
    #[must_use]
    pub fn default_document() -> Self {
        Self {
            order_name: String::new(),
            order_status: OrderStatus::New,
            order_types: Vec::new(),
            load_list: Vec::new(),
            handling_codes: Vec::new(),
            conditions: SiteConditions::default(),
            customers: vec![Customer::primary()],
            addresses: vec![Address::primary_loss_site()],
            company_roles: IndexMap::new(),
            scope_bridge: ScopeBridgeState::default(),
            selected_groups: Vec::new(),
            lead_source: LeadSource::default(),
            bill_to_payer: String::new(),
            living_arrangement: LivingArrangement::Unset,
            mold_coverage_amount: String::new(),
            rent_coverage_amount: String::new(),
            severity: String::new(),
            interview_complete: false,
            codes_complete: false,
            estimate_total: String::new(),
            pricing_approved: false,
            highlight_missing: false,
        }
    }

    // ---- customers ----

    /// The primary customer
    ///
    /// The aggregate keeps exactly one; a document deserialized without one
    /// is healed by [`Order::sync_placeholders`].
    #[must_use]
    pub fn primary_customer(&self) -> Option<&Customer> {
        self.customers.iter().find(|c| c.is_primary)
    }

    /// Append a fresh placeholder customer row, returning its id
    pub fn add_customer(&mut self) -> CustomerId {
        let customer = Customer::placeholder_row();
        let id = customer.id;
        self.customers.push(customer);
        id
    }

    /// Remove a customer; the primary customer is protected
    pub fn remove_customer(&mut self, id: CustomerId) -> Result<(), ModelError> {
        let customer = self
            .customers
            .iter()
            .find(|c| c.id == id)
            .ok_or(ModelError::CustomerNotFound(id))?;
        if customer.is_primary {
            return Err(ModelError::PrimaryCustomerProtected);
        }
        self.customers.retain(|c| c.id != id);
        Ok(())
    }

    /// Move the primary bit to another customer, keeping exactly one
    pub fn set_primary_customer(&mut self, id: CustomerId) -> Result<(), ModelError> {
        if !self.customers.iter().any(|c| c.id == id) {
            return Err(ModelError::CustomerNotFound(id));
        }
        for customer in &mut self.customers {
            customer.is_primary = customer.id == id;
            customer.sync_placeholder();
        }
        Ok(())
    }

    /// Edit a customer's fields, then re-derive its placeholder state
    pub fn update_customer(
        &mut self,
        id: CustomerId,
        edit: impl FnOnce(&mut Customer),
    ) -> Result<(), ModelError> {
        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ModelError::CustomerNotFound(id))?;
        edit(customer);
        customer.sync_placeholder();
        Ok(())
    }

    // ---- addresses ----

    /// The primary address
    #[must_use]
    pub fn primary_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|a| a.is_primary)
    }

    /// Append a fresh placeholder address row, returning its id
    pub fn add_address(&mut self) -> AddressId {
        let address = Address::placeholder_row();
        let id = address.id;
        self.addresses.push(address);
        id
    }

    /// Remove an address
    pub fn remove_address(&mut self, id: AddressId) -> Result<(), ModelError> {
        if !self.addresses.iter().any(|a| a.id == id) {
            return Err(ModelError::AddressNotFound(id));
        }
        self.addresses.retain(|a| a.id != id);
        Ok(())
    }

    /// Edit an address's fields, then re-derive its placeholder state
    pub fn update_address(
        &mut self,
        id: AddressId,
        edit: impl FnOnce(&mut Address),
    ) -> Result<(), ModelError> {
        let address = self
            .addresses
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(ModelError::AddressNotFound(id))?;
        edit(address);
        address.sync_placeholder();
        Ok(())
    }

    // ---- company role slots ----

    /// Edit a role entry in place, then normalize it
    pub fn update_company_entry(
        &mut self,
        kind: &RoleKind,
        edit: impl FnOnce(&mut CompanyRoleEntry),
    ) -> Result<(), ModelError> {
        let entry = self
            .company_roles
            .get_mut(kind)
            .ok_or_else(|| ModelError::RoleSlotEmpty(kind.clone()))?;
        edit(entry);
        company::normalize_entry(entry);
        Ok(())
    }

    /// Remove a role entry
    ///
    /// An occupied assignable slot (referrer/insurance/bill-to with a
    /// company named) must be reassigned before its entry can go.
    pub fn remove_company_entry(&mut self, kind: &RoleKind) -> Result<(), ModelError> {
        let entry = self
            .company_roles
            .get(kind)
            .ok_or_else(|| ModelError::RoleSlotEmpty(kind.clone()))?;
        if kind.is_assignable() && !is_blank(&entry.company) {
            return Err(ModelError::RoleStillAssigned(kind.clone()));
        }
        self.company_roles.shift_remove(kind);
        Ok(())
    }

    // ---- shared lists ----

    /// Insert into a list unless an equal item is already present
    pub(crate) fn push_unique(list: &mut Vec<String>, item: &str) -> bool {
        if list.iter().any(|existing| existing == item) {
            false
        } else {
            list.push(item.to_string());
            true
        }
    }

    /// Add an order type if missing; returns whether it was added
    pub fn add_order_type(&mut self, name: &str) -> bool {
        Self::push_unique(&mut self.order_types, name)
    }

    /// Add a load-list item if missing; returns whether it was added
    pub fn add_load_item(&mut self, name: &str) -> bool {
        Self::push_unique(&mut self.load_list, name)
    }

    /// Add a handling code if missing; returns whether it was added
    pub fn add_handling_code(&mut self, name: &str) -> bool {
        Self::push_unique(&mut self.handling_codes, name)
    }

    // ---- derived-state sweep ----

    /// Re-derive every placeholder flag from current content
    ///
    /// One pass over the whole document; loading legacy data through this
    /// corrects any flag drift without a migration. Also restores the
    /// exactly-one-primary invariant if the loaded data lost it.
    pub fn sync_placeholders(&mut self) {
        if !self.customers.iter().any(|c| c.is_primary) {
            if let Some(first) = self.customers.first_mut() {
                first.is_primary = true;
            } else {
                self.customers.push(Customer::primary());
            }
        }
        let mut primary_seen = false;
        for customer in &mut self.customers {
            if customer.is_primary {
                if primary_seen {
                    customer.is_primary = false;
                }
                primary_seen = true;
            }
            customer.sync_placeholder();
        }

        for address in &mut self.addresses {
            address.sync_placeholder();
        }
        for entry in self.company_roles.values_mut() {
            company::normalize_entry(entry);
        }
    }
}
