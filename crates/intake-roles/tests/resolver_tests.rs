//! Scenario coverage for capture → confirm → merge

use intake_model::{CompanyRoleEntry, Order, RoleKind};
use intake_roles::{apply_roles, capture_pair, CaptureSource, ContactDirectory};
use pretty_assertions::assert_eq;

#[test]
fn role_merge_scenario() {
    // An entry already exists under "other" with company Allstate.
    let mut order = Order::default_document();
    let other = RoleKind::Other("other".to_string());
    order
        .company_roles
        .insert(other.clone(), CompanyRoleEntry::captured("Allstate", ""));

    // Alex Morgan at Allstate is captured and confirmed for insurance.
    let mut directory = ContactDirectory::new();
    let proposal = capture_pair(
        &order,
        &mut directory,
        CaptureSource::QuickAdd,
        "Allstate",
        "Alex Morgan",
    )
    .unwrap()
    .expect("carrier should be eligible");
    assert!(proposal.offered.contains(&RoleKind::Insurance));

    let applied = apply_roles(&mut order, &directory, &proposal, &[RoleKind::Insurance]);
    assert_eq!(applied, vec![RoleKind::Insurance]);

    // Exactly one entry, under insurance, containing Alex Morgan; the
    // "other" slot no longer exists.
    assert_eq!(order.company_roles.len(), 1);
    assert!(!order.company_roles.contains_key(&other));
    let entry = &order.company_roles[&RoleKind::Insurance];
    assert_eq!(entry.company, "Allstate");
    assert!(entry.has_contact("Alex Morgan"));
    assert_eq!(entry.contact, "Alex Morgan");
}

#[test]
fn declining_a_proposal_changes_nothing() {
    let mut order = Order::default_document();
    order
        .company_roles
        .insert(RoleKind::Other("other".to_string()), CompanyRoleEntry::captured("Allstate", ""));
    let before = order.clone();

    let mut directory = ContactDirectory::new();
    let proposal = capture_pair(
        &order,
        &mut directory,
        CaptureSource::QuickAdd,
        "Allstate",
        "Alex Morgan",
    )
    .unwrap()
    .unwrap();

    // Decline: apply with an empty selection.
    let applied = apply_roles(&mut order, &directory, &proposal, &[]);
    assert!(applied.is_empty());
    assert_eq!(order, before);
}

#[test]
fn two_captures_of_same_company_stay_one_entry() {
    let mut order = Order::default_document();
    let mut directory = ContactDirectory::new();

    for contact in ["Alex Morgan", "Dana Reid"] {
        let proposal = capture_pair(
            &order,
            &mut directory,
            CaptureSource::AdjusterField,
            " ALLSTATE ",
            contact,
        )
        .unwrap()
        .unwrap();
        apply_roles(&mut order, &directory, &proposal, &[RoleKind::Insurance]);
    }

    assert_eq!(order.company_roles.len(), 1);
    let entry = &order.company_roles[&RoleKind::Insurance];
    let names: Vec<&str> = entry.contacts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Alex Morgan", "Dana Reid"]);
}
