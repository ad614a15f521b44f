//! Trigger transition handling

use crate::proposal::RemovalProposal;
use crate::triggers::{CascadeItem, ItemSlot, SmartTrigger};
use intake_model::{Order, SmartValue};
use serde::{Deserialize, Serialize};

/// Informational, dismissible notice describing an automatic add
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "'de: 'static"))]
pub struct CascadeNotice {
    /// The trigger that fired
    pub trigger: SmartTrigger,
    /// What the cascade added
    pub added: Vec<CascadeItem>,
    /// Rendered message for the banner
    pub message: String,
}

impl CascadeNotice {
    fn for_added(trigger: SmartTrigger, added: Vec<CascadeItem>) -> Self {
        let names: Vec<String> = added
            .iter()
            .map(|item| format!("{} ({})", item.name, item.slot_label()))
            .collect();
        let message = format!(
            "Because \"{}\" was marked yes, {} added automatically.",
            trigger.label(),
            names.join(", ")
        );
        Self { trigger, added, message }
    }
}

/// What a smart-trigger transition produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeOutcome {
    /// Items were added; show the notice
    Added(CascadeNotice),
    /// Removal candidates exist; put the proposal to the user
    Proposed(RemovalProposal),
    /// The field moved but no dependent items were touched
    FieldOnly,
}

/// Apply one smart-trigger answer to the order
///
/// The condition field itself commits unconditionally. Dependent items move
/// as follows:
///
/// - transition into yes: the trigger's table items are inserted into their
///   lists (items already present stay put) and a [`CascadeNotice`] reports
///   what was added
/// - transition out of yes: current removal candidates are computed and, if
///   any, returned as a [`RemovalProposal`] — the lists do not change here
/// - all other transitions: field only
pub fn update_smart(order: &mut Order, trigger: SmartTrigger, value: SmartValue) -> CascadeOutcome {
    let previous = trigger.value(&order.conditions);
    trigger.set_value(&mut order.conditions, value);

    let was_yes = previous.is_yes();
    let now_yes = value.is_yes();

    if !was_yes && now_yes {
        let mut added = Vec::new();
        for item in trigger.items() {
            let inserted = match item.slot {
                ItemSlot::LoadList => order.add_load_item(item.name),
                ItemSlot::HandlingCode => order.add_handling_code(item.name),
                ItemSlot::OrderType => order.add_order_type(item.name),
            };
            if inserted {
                added.push(*item);
            }
        }
        if added.is_empty() {
            return CascadeOutcome::FieldOnly;
        }
        return CascadeOutcome::Added(CascadeNotice::for_added(trigger, added));
    }

    if was_yes && !now_yes {
        if let Some(proposal) = RemovalProposal::open(order, trigger) {
            return CascadeOutcome::Proposed(proposal);
        }
    }

    CascadeOutcome::FieldOnly
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn enabling_adds_table_items_once() {
        let mut order = Order::default_document();
        let outcome = update_smart(&mut order, SmartTrigger::MoldMildew, SmartValue::Yes);

        assert_eq!(order.load_list, vec!["Tyvek"]);
        assert_eq!(order.handling_codes, vec!["PPE"]);
        assert_eq!(order.order_types, vec!["Mold"]);
        match outcome {
            CascadeOutcome::Added(notice) => {
                assert_eq!(notice.added.len(), 3);
                assert!(notice.message.contains("visible mold/mildew"));
            }
            other => panic!("expected Added, got {other:?}"),
        }
    }

    #[test]
    fn enabling_skips_items_already_present() {
        let mut order = Order::default_document();
        order.add_load_item("Lights");
        let outcome = update_smart(&mut order, SmartTrigger::NoElectricity, SmartValue::Yes);

        assert_eq!(order.load_list, vec!["Lights"]);
        assert_eq!(outcome, CascadeOutcome::FieldOnly);
    }

    #[test]
    fn disabling_lone_supplier_proposes_removal() {
        let mut order = Order::default_document();
        update_smart(&mut order, SmartTrigger::NoElectricity, SmartValue::Yes);

        let outcome = update_smart(&mut order, SmartTrigger::NoElectricity, SmartValue::No);
        match outcome {
            CascadeOutcome::Proposed(proposal) => {
                assert_eq!(proposal.candidates.len(), 1);
                assert_eq!(proposal.candidates[0].name, "Lights");
            }
            other => panic!("expected Proposed, got {other:?}"),
        }
        // Nothing removed yet.
        assert_eq!(order.load_list, vec!["Lights"]);
    }

    #[test]
    fn disabling_one_of_two_suppliers_proposes_nothing() {
        let mut order = Order::default_document();
        update_smart(&mut order, SmartTrigger::NoElectricity, SmartValue::Yes);
        update_smart(&mut order, SmartTrigger::BoardedUp, SmartValue::Yes);

        let outcome = update_smart(&mut order, SmartTrigger::NoElectricity, SmartValue::No);
        assert_eq!(outcome, CascadeOutcome::FieldOnly);
        assert_eq!(order.load_list, vec!["Lights"]);

        let outcome = update_smart(&mut order, SmartTrigger::BoardedUp, SmartValue::No);
        assert!(matches!(outcome, CascadeOutcome::Proposed(_)));
    }

    #[test]
    fn unset_to_no_moves_nothing() {
        let mut order = Order::default_document();
        let outcome = update_smart(&mut order, SmartTrigger::MoldMildew, SmartValue::No);
        assert_eq!(outcome, CascadeOutcome::FieldOnly);
        assert!(order.order_types.is_empty());
    }

    #[test]
    fn declining_leaves_lists_byte_identical() {
        let mut order = Order::default_document();
        order.add_load_item("Dollies");
        update_smart(&mut order, SmartTrigger::MoldMildew, SmartValue::Yes);

        let before = order.clone();
        let outcome = update_smart(&mut order, SmartTrigger::MoldMildew, SmartValue::No);
        assert!(matches!(outcome, CascadeOutcome::Proposed(_)));

        // Discard is simply dropping the proposal; only the field differs.
        assert_eq!(order.load_list, before.load_list);
        assert_eq!(order.handling_codes, before.handling_codes);
        assert_eq!(order.order_types, before.order_types);
        assert_eq!(order.conditions.mold_mildew, SmartValue::No);
    }
}
