//! The audit pass

use intake_model::text::is_blank;
use intake_model::{LivingArrangement, Order, OrderStatus};
use serde::{Deserialize, Serialize};

/// Why an item is on the required list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditCategory {
    /// Required on every order
    Required,
    /// Required because another field made it so
    Conditional,
    /// An unresolved placeholder entity
    Placeholder,
}

/// One unmet requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditMissingItem {
    /// Form section the item belongs to
    pub section: String,
    /// Human-readable description
    pub label: String,
    /// Stable key for highlighting the field
    pub key: String,
    /// Why it is required
    pub category: AuditCategory,
}

/// Result of one audit run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Unmet requirements, in form order
    pub missing: Vec<AuditMissingItem>,
    /// Total requirements evaluated this run
    pub required_count: usize,
    /// Rounded percent complete; 100 when nothing was required
    pub percent: u32,
}

impl AuditReport {
    /// Whether every requirement is met
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Collects requirement outcomes as the pass walks the document
#[derive(Default)]
struct Tally {
    required: usize,
    missing: Vec<AuditMissingItem>,
}

impl Tally {
    fn check(
        &mut self,
        satisfied: bool,
        section: &str,
        label: &str,
        key: &str,
        category: AuditCategory,
    ) {
        self.required += 1;
        if !satisfied {
            self.missing.push(AuditMissingItem {
                section: section.to_string(),
                label: label.to_string(),
                key: key.to_string(),
                category,
            });
        }
    }

    fn finish(self) -> AuditReport {
        let percent = if self.required == 0 {
            100
        } else {
            let met = self.required - self.missing.len();
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let rounded = (100.0 * met as f64 / self.required as f64).round() as u32;
            rounded
        };
        AuditReport {
            missing: self.missing,
            required_count: self.required,
            percent,
        }
    }
}

/// Run the completeness audit
///
/// Produces a fresh report every call; nothing is persisted or memoized.
#[must_use]
pub fn run_audit(order: &Order) -> AuditReport {
    use AuditCategory::{Conditional, Placeholder, Required};
    let mut tally = Tally::default();

    // Primary customer contact block.
    let primary = order.primary_customer();
    tally.check(
        primary.is_some_and(|c| !is_blank(&c.display_name())),
        "Customer",
        "primary customer name",
        "customer.name",
        Required,
    );
    tally.check(
        primary.is_some_and(|c| !is_blank(&c.phone)),
        "Customer",
        "primary customer phone",
        "customer.phone",
        Required,
    );
    tally.check(
        primary.is_some_and(|c| !is_blank(&c.email)),
        "Customer",
        "primary customer email",
        "customer.email",
        Required,
    );

    // Primary address block.
    let address = order.primary_address();
    tally.check(
        address.is_some_and(|a| !is_blank(&a.street)),
        "Address",
        "primary address street",
        "address.street",
        Required,
    );
    tally.check(
        address.is_some_and(|a| !is_blank(&a.city)),
        "Address",
        "primary address city",
        "address.city",
        Required,
    );
    tally.check(
        address.is_some_and(|a| !is_blank(&a.state)),
        "Address",
        "primary address state",
        "address.state",
        Required,
    );
    tally.check(
        address.is_some_and(|a| !is_blank(&a.zip)),
        "Address",
        "primary address zip",
        "address.zip",
        Required,
    );

    // Order identity.
    tally.check(
        !is_blank(&order.order_name),
        "Order",
        "order name",
        "order.name",
        Required,
    );
    tally.check(
        !order.order_types.is_empty(),
        "Order",
        "order type",
        "order.types",
        Required,
    );

    // Lead source: the category is always required, the detail only once a
    // category is chosen.
    let category_chosen = !is_blank(&order.lead_source.category);
    tally.check(
        category_chosen,
        "Lead Source",
        "lead source category",
        "lead_source.category",
        Required,
    );
    if category_chosen {
        tally.check(
            !is_blank(&order.lead_source.detail),
            "Lead Source",
            "lead source detail",
            "lead_source.detail",
            Conditional,
        );
    }

    tally.check(
        !is_blank(&order.bill_to_payer),
        "Billing",
        "bill-to payer",
        "billing.payer",
        Required,
    );

    if order.order_types.iter().any(|t| t == "Mold") {
        tally.check(
            !is_blank(&order.mold_coverage_amount),
            "Coverage",
            "mold coverage amount",
            "coverage.mold",
            Conditional,
        );
    }
    if order.living_arrangement == LivingArrangement::Rent {
        tally.check(
            !is_blank(&order.rent_coverage_amount),
            "Coverage",
            "rent coverage amount",
            "coverage.rent",
            Conditional,
        );
    }

    // Walkthrough block once contents are in hand.
    if matches!(
        order.order_status,
        OrderStatus::PickupComplete | OrderStatus::ReadyToBill
    ) {
        tally.check(
            !is_blank(&order.severity),
            "Walkthrough",
            "severity grade",
            "walkthrough.severity",
            Conditional,
        );
        tally.check(
            order.interview_complete,
            "Walkthrough",
            "walkthrough interview",
            "walkthrough.interview",
            Conditional,
        );
        tally.check(
            order.codes_complete,
            "Walkthrough",
            "handling codes review",
            "walkthrough.codes",
            Conditional,
        );
    }

    // Pricing block once intake is wrapped up.
    if matches!(
        order.order_status,
        OrderStatus::IntakeComplete | OrderStatus::ReadyToBill
    ) {
        tally.check(
            !is_blank(&order.estimate_total),
            "Pricing",
            "estimate total",
            "pricing.estimate",
            Conditional,
        );
        tally.check(
            order.pricing_approved,
            "Pricing",
            "pricing approval",
            "pricing.approved",
            Conditional,
        );
    }

    // One item per unresolved placeholder entity, whatever its fields say.
    for address in &order.addresses {
        tally.check(
            !address.placeholder_active(),
            "Address",
            "placeholder address",
            &format!("address.{}.placeholder", address.id),
            Placeholder,
        );
    }
    for customer in &order.customers {
        tally.check(
            !customer.placeholder_active(),
            "Customer",
            "placeholder customer",
            &format!("customer.{}.placeholder", customer.id),
            Placeholder,
        );
    }
    for (kind, entry) in &order.company_roles {
        tally.check(
            !entry.company_placeholder_active(),
            "Companies",
            "company name missing",
            &format!("role.{kind}.company"),
            Placeholder,
        );
        tally.check(
            !entry.contact_placeholder_active(),
            "Companies",
            "company contact missing",
            &format!("role.{kind}.contact"),
            Placeholder,
        );
    }

    tally.finish()
}
