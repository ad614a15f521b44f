//! Intake Cascade - smart trigger engine
//!
//! A smart trigger is a site-condition field whose transitions move
//! dependent items in and out of the order's shared lists (load list,
//! handling codes, order types):
//!
//! - turning a condition on adds its table items immediately and surfaces a
//!   dismissible notice naming what was added and why
//! - turning it off only ever *proposes* removals; nothing leaves the
//!   document before an explicit confirm
//!
//! The trigger→item table is fixed; the engine never removes an item it did
//! not introduce through that table, and an item supplied by two active
//! triggers survives until both are off.

pub mod engine;
pub mod proposal;
pub mod triggers;

pub use engine::{update_smart, CascadeNotice, CascadeOutcome};
pub use proposal::RemovalProposal;
pub use triggers::{CascadeItem, ItemSlot, SmartTrigger};
