//! The fixed trigger→item table

use intake_model::{Order, SiteConditions, SmartValue};
use serde::{Deserialize, Serialize};

/// Which shared list an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemSlot {
    /// Equipment to bring on the truck
    LoadList,
    /// Special handling codes for the crew
    HandlingCode,
    /// Selected order types
    OrderType,
}

/// One dependent item a trigger is responsible for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeItem {
    /// Which list the item lives in
    pub slot: ItemSlot,
    /// The item text as it appears in the list
    pub name: &'static str,
}

impl CascadeItem {
    const fn new(slot: ItemSlot, name: &'static str) -> Self {
        Self { slot, name }
    }

    /// Whether the item is currently present in its list
    #[must_use]
    pub fn present_in(&self, order: &Order) -> bool {
        self.list(order).iter().any(|existing| existing == self.name)
    }

    /// The list this item belongs to
    #[must_use]
    pub fn list<'a>(&self, order: &'a Order) -> &'a [String] {
        match self.slot {
            ItemSlot::LoadList => &order.load_list,
            ItemSlot::HandlingCode => &order.handling_codes,
            ItemSlot::OrderType => &order.order_types,
        }
    }

    /// Human label of the slot, for notices and proposals
    #[must_use]
    pub fn slot_label(&self) -> &'static str {
        match self.slot {
            ItemSlot::LoadList => "load list",
            ItemSlot::HandlingCode => "handling codes",
            ItemSlot::OrderType => "order types",
        }
    }
}

/// A smart condition field on the order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmartTrigger {
    /// Power is off at the site
    NoElectricity,
    /// Structure is boarded up
    BoardedUp,
    /// Visible mold or mildew
    MoldMildew,
    /// Sewage or other biohazard present
    Biohazard,
    /// Water service is off at the site
    NoRunningWater,
}

impl SmartTrigger {
    /// Every trigger, for table sweeps
    pub const ALL: [SmartTrigger; 5] = [
        SmartTrigger::NoElectricity,
        SmartTrigger::BoardedUp,
        SmartTrigger::MoldMildew,
        SmartTrigger::Biohazard,
        SmartTrigger::NoRunningWater,
    ];

    /// The items this trigger is responsible for
    #[must_use]
    pub fn items(self) -> &'static [CascadeItem] {
        static NO_ELECTRICITY: [CascadeItem; 1] =
            [CascadeItem::new(ItemSlot::LoadList, "Lights")];
        static BOARDED_UP: [CascadeItem; 1] =
            [CascadeItem::new(ItemSlot::LoadList, "Lights")];
        static MOLD_MILDEW: [CascadeItem; 3] = [
            CascadeItem::new(ItemSlot::LoadList, "Tyvek"),
            CascadeItem::new(ItemSlot::HandlingCode, "PPE"),
            CascadeItem::new(ItemSlot::OrderType, "Mold"),
        ];
        static BIOHAZARD: [CascadeItem; 2] = [
            CascadeItem::new(ItemSlot::LoadList, "Tyvek"),
            CascadeItem::new(ItemSlot::HandlingCode, "PPE"),
        ];
        static NO_RUNNING_WATER: [CascadeItem; 1] =
            [CascadeItem::new(ItemSlot::HandlingCode, "Gloves")];
        match self {
            SmartTrigger::NoElectricity => &NO_ELECTRICITY,
            SmartTrigger::BoardedUp => &BOARDED_UP,
            SmartTrigger::MoldMildew => &MOLD_MILDEW,
            SmartTrigger::Biohazard => &BIOHAZARD,
            SmartTrigger::NoRunningWater => &NO_RUNNING_WATER,
        }
    }

    /// Question text, used in notices
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SmartTrigger::NoElectricity => "no electricity on site",
            SmartTrigger::BoardedUp => "structure boarded up",
            SmartTrigger::MoldMildew => "visible mold/mildew",
            SmartTrigger::Biohazard => "biohazard present",
            SmartTrigger::NoRunningWater => "no running water",
        }
    }

    /// Read this trigger's current answer
    #[must_use]
    pub fn value(self, conditions: &SiteConditions) -> SmartValue {
        match self {
            SmartTrigger::NoElectricity => conditions.no_electricity,
            SmartTrigger::BoardedUp => conditions.boarded_up,
            SmartTrigger::MoldMildew => conditions.mold_mildew,
            SmartTrigger::Biohazard => conditions.biohazard,
            SmartTrigger::NoRunningWater => conditions.no_running_water,
        }
    }

    /// Write this trigger's answer
    pub fn set_value(self, conditions: &mut SiteConditions, value: SmartValue) {
        match self {
            SmartTrigger::NoElectricity => conditions.no_electricity = value,
            SmartTrigger::BoardedUp => conditions.boarded_up = value,
            SmartTrigger::MoldMildew => conditions.mold_mildew = value,
            SmartTrigger::Biohazard => conditions.biohazard = value,
            SmartTrigger::NoRunningWater => conditions.no_running_water = value,
        }
    }

    /// Whether another trigger, still answered yes, also supplies `item`
    #[must_use]
    pub fn item_supplied_elsewhere(self, order: &Order, item: CascadeItem) -> bool {
        SmartTrigger::ALL.iter().any(|other| {
            *other != self
                && other.value(&order.conditions).is_yes()
                && other.items().contains(&item)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lights_has_two_suppliers() {
        let lights = CascadeItem::new(ItemSlot::LoadList, "Lights");
        let suppliers: Vec<_> = SmartTrigger::ALL
            .iter()
            .filter(|t| t.items().contains(&lights))
            .collect();
        assert_eq!(suppliers.len(), 2);
    }

    #[test]
    fn mold_row_spans_all_three_slots() {
        let slots: Vec<_> = SmartTrigger::MoldMildew.items().iter().map(|i| i.slot).collect();
        assert_eq!(slots, vec![ItemSlot::LoadList, ItemSlot::HandlingCode, ItemSlot::OrderType]);
    }

    #[test]
    fn supplied_elsewhere_sees_active_peers_only() {
        let mut order = Order::default_document();
        let lights = CascadeItem::new(ItemSlot::LoadList, "Lights");

        assert!(!SmartTrigger::NoElectricity.item_supplied_elsewhere(&order, lights));

        order.conditions.boarded_up = SmartValue::Yes;
        assert!(SmartTrigger::NoElectricity.item_supplied_elsewhere(&order, lights));

        order.conditions.boarded_up = SmartValue::No;
        assert!(!SmartTrigger::NoElectricity.item_supplied_elsewhere(&order, lights));
    }

    #[test]
    fn value_accessors_roundtrip() {
        let mut conditions = SiteConditions::default();
        for trigger in SmartTrigger::ALL {
            trigger.set_value(&mut conditions, SmartValue::Yes);
            assert!(trigger.value(&conditions).is_yes());
        }
    }
}
