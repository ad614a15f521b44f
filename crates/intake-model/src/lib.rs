//! Intake Model - Order document model
//!
//! Defines the single shared order record and its invariants:
//! - `Order` root aggregate with guarded mutations
//! - `Customer` / `Address` entities with deterministic factory rows
//! - `Flag` tri-state placeholder marker
//! - `CompanyRoleEntry` role slots with the placeholder synchronizer
//! - `ScopeBridgeState` project-status sub-state
//!
//! Everything in this crate is synchronous and side-effect free: a mutation
//! is a plain function over the aggregate that either commits and re-derives
//! the affected placeholder state, or rejects with a typed error and leaves
//! the document untouched.

pub mod address;
pub mod company;
pub mod conditions;
pub mod customer;
pub mod error;
pub mod flag;
pub mod id;
pub mod order;
pub mod scope;
pub mod selector;
pub mod text;

// Re-exports for convenience
pub use address::Address;
pub use company::{merge_entries, normalize_entry, CompanyRoleEntry, RoleContact, RoleKind};
pub use conditions::{SiteConditions, SmartValue};
pub use customer::Customer;
pub use error::ModelError;
pub use flag::{Flag, FlagKind};
pub use id::{AddressId, CustomerId};
pub use order::{LeadSource, LivingArrangement, Order, OrderStatus};
pub use scope::{PickupOption, ProcessingOption, ProjectStatus, ScopeBridgeState};
pub use selector::SelectorValue;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the order model
    pub use crate::{
        Address, AddressId, CompanyRoleEntry, Customer, CustomerId, Flag, FlagKind, Order,
        OrderStatus, ProjectStatus, RoleContact, RoleKind, ScopeBridgeState, SiteConditions,
        SmartValue,
    };
}
