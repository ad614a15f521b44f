//! Testing utilities for the intake workspace
//!
//! Shared fixtures: a seeded directory and pre-filled order documents.

#![allow(missing_docs)]

use intake_model::Order;
use intake_roles::{CompanyType, ContactDirectory, DirectoryRecord};
use intake_status::AUTHORIZATION_ON_FILE;

fn record(
    name: &str,
    company: &str,
    company_type: CompanyType,
    can_refer: Option<bool>,
    can_bill: Option<bool>,
) -> DirectoryRecord {
    DirectoryRecord {
        name: name.to_string(),
        company: company.to_string(),
        company_type,
        can_refer,
        can_bill,
    }
}

/// Directory seeded the way a working install looks: a couple of carriers,
/// an adjusting firm, and trade companies with capability overrides.
pub fn sample_directory() -> ContactDirectory {
    ContactDirectory::with_records(vec![
        record("Alex Morgan", "Allstate", CompanyType::Insurance, None, None),
        record("Dana Reid", "State Farm", CompanyType::Insurance, None, None),
        record("Sam Ortiz", "Peak Adjusting LLC", CompanyType::Adjusting, None, None),
        record("Pat Quinn", "Rapid Restoration", CompanyType::Restoration, None, Some(true)),
        record("Lee Park", "Two Guys Moving", CompanyType::Moving, Some(false), None),
    ])
}

/// Order with every always-required audit field filled in.
pub fn filled_order() -> Order {
    let mut order = Order::default_document();
    order.order_name = "Reid water loss".to_string();
    order.order_types = vec!["Water".to_string()];
    order.lead_source.category = "Adjuster".to_string();
    order.lead_source.detail = "Alex Morgan".to_string();
    order.bill_to_payer = "Allstate".to_string();

    let customer_id = order.customers[0].id;
    order
        .update_customer(customer_id, |c| {
            c.first_name = "Dana".to_string();
            c.last_name = "Reid".to_string();
            c.phone = "555-0102".to_string();
            c.email = "dana@example.com".to_string();
        })
        .expect("primary customer exists");

    let address_id = order.addresses[0].id;
    order
        .update_address(address_id, |a| {
            a.street = "114 Birch Ln".to_string();
            a.city = "Dayton".to_string();
            a.state = "OH".to_string();
            a.zip = "45402".to_string();
        })
        .expect("primary address exists");

    order
}

/// [`filled_order`] with the authorization milestone recorded, so the
/// derived status comes up green.
pub fn authorized_order() -> Order {
    let mut order = filled_order();
    order.scope_bridge.record_milestone(AUTHORIZATION_ON_FILE);
    order
}
