//! Order load/save with legacy healing

use crate::blob::BlobStore;
use intake_model::flag::{self, FlagKind};
use intake_model::{Address, Customer, Order};
use intake_status::recompute_status;
use std::io;

/// Fixed storage key for the order document
pub const ORDER_KEY: &str = "intake.order.v1";

/// Persistence errors
///
/// Only the save path can fail; loading degrades to the default document.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backend write failed
    #[error("failed to write order blob: {0}")]
    Write(#[from] io::Error),

    /// Document did not serialize
    #[error("failed to serialize order: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load the order, falling back to the default document
///
/// A missing blob, a parse failure, or a structurally incompatible shape
/// all produce [`Order::default_document`]; no error crosses this
/// boundary. A successfully parsed document is healed in place: missing
/// fields were already filled by serde defaults, empty entity arrays get
/// their single-element defaults back, the legacy street sentinel becomes
/// an explicit placeholder flag, the two selected-groups lists are
/// reconciled, and placeholder flags plus the derived status are rebuilt
/// from content.
#[must_use]
pub fn load_order(store: &dyn BlobStore) -> Order {
    let Some(raw) = store.read(ORDER_KEY) else {
        return Order::default_document();
    };

    let mut order: Order = match serde_json::from_str(&raw) {
        Ok(order) => order,
        Err(err) => {
            tracing::warn!("stored order did not parse, starting fresh: {err}");
            return Order::default_document();
        }
    };
    heal(&mut order);
    order
}

/// Serialize and write the order
///
/// Called after a transition completes; never part of the transition.
pub fn save_order(store: &mut dyn BlobStore, order: &Order) -> Result<(), StoreError> {
    let raw = serde_json::to_string(order)?;
    store.write(ORDER_KEY, &raw)?;
    Ok(())
}

fn heal(order: &mut Order) {
    if order.customers.is_empty() {
        order.customers.push(Customer::primary());
    }
    if order.addresses.is_empty() {
        order.addresses.push(Address::primary_loss_site());
    }

    // The "TBD" sentinel only ever meant "placeholder"; it becomes the
    // explicit flag here and the street reverts to empty. Nothing past the
    // boundary sees the sentinel.
    for address in &mut order.addresses {
        if address.street.trim() == intake_model::address::STREET_SENTINEL {
            address.street.clear();
            flag::raise(
                &mut address.placeholder,
                FlagKind::Placeholder,
                "address not confirmed",
            );
        }
    }

    // Two homes for selected groups (scope-bridge sub-state and the legacy
    // top-level list): prefer whichever is non-empty, write into both.
    if order.scope_bridge.selected_groups.is_empty() && !order.selected_groups.is_empty() {
        order.scope_bridge.selected_groups = order.selected_groups.clone();
    } else {
        order.selected_groups = order.scope_bridge.selected_groups.clone();
    }

    order.sync_placeholders();
    recompute_status(&mut order.scope_bridge);
}
