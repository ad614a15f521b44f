//! Two-phase removal proposal
//!
//! Turning a trigger off must not silently shrink the document. The engine
//! hands back a [`RemovalProposal`] naming the candidates; the caller shows
//! it and later either commits or discards. Candidates are recomputed from
//! the live document at commit time, so edits made while the proposal was
//! open are respected and no stale snapshot is trusted.

use crate::triggers::{CascadeItem, ItemSlot, SmartTrigger};
use intake_model::Order;
use serde::{Deserialize, Serialize};

/// A pending offer to remove the items a disabled trigger had added
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "'de: 'static"))]
pub struct RemovalProposal {
    /// The trigger that was turned off
    pub trigger: SmartTrigger,
    /// Candidates as computed when the toggle fired (display only)
    pub candidates: Vec<CascadeItem>,
}

impl RemovalProposal {
    /// Compute the current removal candidates for a disabled trigger
    ///
    /// An item qualifies only if it sits in the trigger's own table row, is
    /// still present in its list, and no other still-active trigger also
    /// supplies it. Items that merely share a name with table entries are
    /// never touched. A trigger answered yes again has no candidates at
    /// all, so a proposal left open across the re-enable commits nothing.
    #[must_use]
    pub fn candidates_for(order: &Order, trigger: SmartTrigger) -> Vec<CascadeItem> {
        if trigger.value(&order.conditions).is_yes() {
            return Vec::new();
        }
        trigger
            .items()
            .iter()
            .copied()
            .filter(|item| item.present_in(order) && !trigger.item_supplied_elsewhere(order, *item))
            .collect()
    }

    /// Open a proposal if the trigger has any current candidates
    #[must_use]
    pub fn open(order: &Order, trigger: SmartTrigger) -> Option<Self> {
        let candidates = Self::candidates_for(order, trigger);
        if candidates.is_empty() {
            None
        } else {
            Some(Self { trigger, candidates })
        }
    }

    /// Commit: recompute candidates against the live document and remove
    /// exactly those, returning what was removed
    pub fn commit(&self, order: &mut Order) -> Vec<CascadeItem> {
        let candidates = Self::candidates_for(order, self.trigger);
        for item in &candidates {
            let list = match item.slot {
                ItemSlot::LoadList => &mut order.load_list,
                ItemSlot::HandlingCode => &mut order.handling_codes,
                ItemSlot::OrderType => &mut order.order_types,
            };
            list.retain(|existing| existing != item.name);
        }
        candidates
    }

    /// One-line description for the confirmation dialog
    #[must_use]
    pub fn describe(&self) -> String {
        let names: Vec<String> = self
            .candidates
            .iter()
            .map(|item| format!("{} ({})", item.name, item.slot_label()))
            .collect();
        format!(
            "\"{}\" was turned off. Remove {}?",
            self.trigger.label(),
            names.join(", ")
        )
    }
}
